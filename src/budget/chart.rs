//! The expenses pie chart.
//!
//! The chart is an ECharts configuration built with `charming` and
//! initialised by an inline script, so that it is redrawn whenever the
//! budget fragment is swapped in by htmx.

use charming::{
    Chart,
    component::Title,
    element::{Color, Label, LabelPosition, Tooltip, Trigger},
    series::Pie,
};
use maud::{Markup, PreEscaped, html};

use crate::budget::summary::ExpenseSlice;

/// The id of the element the pie chart is drawn in.
pub(super) const EXPENSES_CHART_ID: &str = "expenses-chart";

/// The path to the ECharts library.
pub(super) const ECHARTS_SCRIPT: &str = "https://cdn.jsdelivr.net/npm/echarts@6.0.0/dist/echarts.min.js";

/// Build the pie chart of expenses per category.
pub(super) fn expenses_pie_chart(slices: &[ExpenseSlice]) -> Chart {
    let colors = slices
        .iter()
        .map(|slice| Color::from(slice.color))
        .collect::<Vec<_>>();
    let data = slices
        .iter()
        .map(|slice| (slice.total, slice.category.label()))
        .collect::<Vec<_>>();

    Chart::new()
        .title(Title::new().text("Expenses by category").left("center"))
        .tooltip(Tooltip::new().trigger(Trigger::Item))
        .color(colors)
        .series(
            Pie::new()
                .name("Expenses")
                .radius("70%")
                .label(Label::new().position(LabelPosition::Inside))
                .data(data),
        )
}

/// The chart container followed by the script that draws the chart into it.
pub(super) fn expenses_chart_view(slices: &[ExpenseSlice]) -> Markup {
    if slices.is_empty() {
        return html! {
            p id=(EXPENSES_CHART_ID) class="text-center text-gray-500 dark:text-gray-400"
            {
                "No expenses to chart yet."
            }
        };
    }

    let options = expenses_pie_chart(slices).to_string();
    // The budget fragment is swapped in after every change, so the previous
    // chart on the container is disposed and the resize listener is only
    // added once per page.
    let script = format!(
        r#"(function() {{
            const chartDom = document.getElementById("{EXPENSES_CHART_ID}");
            echarts.getInstanceByDom(chartDom)?.dispose();
            const chart = echarts.init(chartDom);
            chart.setOption({options});
            if (!window.expensesChartResize) {{
                window.expensesChartResize = () => {{
                    const current = document.getElementById("{EXPENSES_CHART_ID}");
                    if (current) echarts.getInstanceByDom(current)?.resize();
                }};
                window.addEventListener('resize', window.expensesChartResize);
            }}
        }})();"#
    );

    html! {
        div id=(EXPENSES_CHART_ID) class="w-full min-h-[320px] rounded" {}
        script { (PreEscaped(script)) }
    }
}

#[cfg(test)]
mod expenses_chart_tests {
    use scraper::{Html, Selector};
    use time::macros::datetime;

    use crate::budget::{
        BudgetCategory, Transaction, TransactionType, summary::expense_slices,
    };

    use super::{expenses_chart_view, expenses_pie_chart};

    fn expense(amount: f64, category: BudgetCategory) -> Transaction {
        Transaction {
            id: 0,
            amount,
            description: String::new(),
            category,
            type_: TransactionType::Expense,
            date: datetime!(2024-06-01 12:00:00 UTC),
        }
    }

    #[test]
    fn chart_contains_categories_and_colours() {
        let slices = expense_slices(&[
            expense(30.0, BudgetCategory::Food),
            expense(10.0, BudgetCategory::Transport),
        ]);

        let options = expenses_pie_chart(&slices).to_string();

        assert!(options.contains("\"pie\""), "want pie series in {options}");
        assert!(options.contains("Food"));
        assert!(options.contains("Transport"));
        assert!(options.contains("#FF6384"));
        assert!(
            options.contains(r#""position": "inside""#),
            "want labels inside the slices in {options}"
        );
        assert!(options.contains("#36A2EB"));
    }

    #[test]
    fn view_includes_container_and_script() {
        let slices = expense_slices(&[expense(30.0, BudgetCategory::Food)]);

        let html = Html::parse_fragment(&expenses_chart_view(&slices).into_string());

        assert_eq!(
            html.select(&Selector::parse("div#expenses-chart").unwrap())
                .count(),
            1
        );
        let script = html
            .select(&Selector::parse("script").unwrap())
            .next()
            .expect("No chart script found")
            .inner_html();
        assert!(script.contains("echarts.init"));
        assert!(
            script.contains("getInstanceByDom(chartDom)?.dispose()"),
            "want the previous chart disposed before drawing again"
        );
        assert!(script.contains("if (!window.expensesChartResize)"));
    }

    #[test]
    fn view_without_expenses_has_no_script() {
        let html = Html::parse_fragment(&expenses_chart_view(&[]).into_string());

        assert_eq!(html.select(&Selector::parse("script").unwrap()).count(), 0);
        assert_eq!(
            html.select(&Selector::parse("#expenses-chart").unwrap())
                .count(),
            1
        );
    }
}
