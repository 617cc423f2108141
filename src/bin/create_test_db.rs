use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;
use time::{Duration, OffsetDateTime};

use daybook::{
    BudgetCategory, HabitName, NewTodo, NewTransaction, Priority, TodoCategory, TodoTitle,
    TransactionType, create_habit, create_todo, create_transaction, initialize_db,
    toggle_habit_date,
};

/// A utility for creating a test database for the daybook dashboard.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    let now = OffsetDateTime::now_utc();
    let today = now.date();

    println!("Creating habits...");
    for (index, name) in ["Read for 20 minutes", "Drink 2L of water", "Stretch"]
        .into_iter()
        .enumerate()
    {
        let habit = create_habit(
            HabitName::new(name)?,
            now + Duration::milliseconds(index as i64),
            &conn,
        )?;

        // Every other day of the month so far, offset per habit.
        for day in (1 + index as u8..today.day()).step_by(2) {
            toggle_habit_date(habit.id, today.replace_day(day)?, &conn)?;
        }
    }

    println!("Creating transactions...");
    let transactions = [
        ("5200", "Salary", BudgetCategory::Salary, TransactionType::Income, 20),
        ("1800", "Rent", BudgetCategory::Housing, TransactionType::Expense, 18),
        ("243.17", "Groceries", BudgetCategory::Food, TransactionType::Expense, 9),
        ("120", "Monthly pass", BudgetCategory::Transport, TransactionType::Expense, 7),
        ("89.99", "Concert tickets", BudgetCategory::Entertainment, TransactionType::Expense, 3),
        ("56.40", "Pharmacy", BudgetCategory::Health, TransactionType::Expense, 1),
    ];
    for (amount, description, category, type_, days_ago) in transactions {
        let new_transaction = NewTransaction::new(amount, description, category, type_)?;
        create_transaction(new_transaction, now - Duration::days(days_ago), &conn)?;
    }

    println!("Creating todos...");
    let todos = [
        ("Renew passport", Priority::High, TodoCategory::Personal, Some(3)),
        ("Quarterly report", Priority::High, TodoCategory::Work, Some(5)),
        ("Buy a birthday present", Priority::Medium, TodoCategory::Shopping, Some(3)),
        ("Book a dentist appointment", Priority::Low, TodoCategory::Health, None),
        ("Clean the garage", Priority::Low, TodoCategory::Other, Some(12)),
    ];
    for (index, (title, priority, category, due_in_days)) in todos.into_iter().enumerate() {
        let new_todo = NewTodo {
            title: TodoTitle::new(title)?,
            description: None,
            priority,
            category,
            date: due_in_days.map(|days| today + Duration::days(days)),
        };
        create_todo(new_todo, now + Duration::milliseconds(index as i64), &conn)?;
    }

    println!("Success!");

    Ok(())
}
