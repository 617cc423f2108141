//! Filtering and sorting of the todo list.

use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};

use crate::todo::{Priority, Todo, TodoCategory};

/// Which todos to show based on whether they are done.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    /// Show every todo.
    #[default]
    All,
    /// Only todos that are not done.
    Active,
    /// Only todos that are done.
    Done,
}

impl StatusFilter {
    /// All status filters in the order they are offered in the filter form.
    pub const ALL: [StatusFilter; 3] = [StatusFilter::All, StatusFilter::Active, StatusFilter::Done];

    /// The value used in query strings.
    pub fn as_str(self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Active => "active",
            StatusFilter::Done => "done",
        }
    }

    /// The human readable name.
    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Active => "Active",
            StatusFilter::Done => "Done",
        }
    }

    fn matches(self, todo: &Todo) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => !todo.done,
            StatusFilter::Done => todo.done,
        }
    }
}

/// The filters selected in the todo list's filter form.
///
/// The filters are combined, a todo is shown only if it passes all of them.
/// A priority or category of `None` lets every todo through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoFilter {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub priority: Option<Priority>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub category: Option<TodoCategory>,
    #[serde(default)]
    pub status: StatusFilter,
}

impl TodoFilter {
    /// Whether `todo` passes every filter.
    pub fn matches(&self, todo: &Todo) -> bool {
        self.priority.is_none_or(|priority| todo.priority == priority)
            && self.category.is_none_or(|category| todo.category == category)
            && self.status.matches(todo)
    }

    /// The todos that pass every filter, in their stored order.
    pub fn apply<'a>(&self, todos: &'a [Todo]) -> Vec<&'a Todo> {
        todos.iter().filter(|todo| self.matches(todo)).collect()
    }
}

/// Treat the "any" option of a select, which submits an empty string, as `None`.
fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(text) if !text.trim().is_empty() => {
            T::deserialize(serde::de::value::StrDeserializer::<D::Error>::new(text.trim()))
                .map(Some)
        }
        _ => Ok(None),
    }
}

/// Order todos from the highest to the lowest priority.
///
/// Todos with the same priority keep their relative order.
pub fn sort_by_priority(todos: &mut [Todo]) {
    todos.sort_by_key(|todo| std::cmp::Reverse(todo.priority.rank()));
}
