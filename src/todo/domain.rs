//! Core todo domain types.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    Error,
    date::{optional_iso_date, parse_iso_date},
    record_id::RecordId,
};

/// How urgent a todo is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Can wait.
    Low,
    /// Should be done soon.
    Medium,
    /// Must be done first.
    High,
}

impl Priority {
    /// All priorities in the order they are offered in forms.
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    /// The sort rank, higher ranks are sorted first.
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }

    /// The value used in forms and storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// The human readable name.
    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

/// Which part of life a todo belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TodoCategory {
    /// Job related.
    Work,
    /// Private errands.
    Personal,
    /// Things to buy.
    Shopping,
    /// Appointments and exercise.
    Health,
    /// Anything else.
    Other,
}

impl TodoCategory {
    /// All categories in the order they are offered in forms.
    pub const ALL: [TodoCategory; 5] = [
        TodoCategory::Work,
        TodoCategory::Personal,
        TodoCategory::Shopping,
        TodoCategory::Health,
        TodoCategory::Other,
    ];

    /// The value used in forms and storage.
    pub fn as_str(self) -> &'static str {
        match self {
            TodoCategory::Work => "work",
            TodoCategory::Personal => "personal",
            TodoCategory::Shopping => "shopping",
            TodoCategory::Health => "health",
            TodoCategory::Other => "other",
        }
    }

    /// The human readable name.
    pub fn label(self) -> &'static str {
        match self {
            TodoCategory::Work => "Work",
            TodoCategory::Personal => "Personal",
            TodoCategory::Shopping => "Shopping",
            TodoCategory::Health => "Health",
            TodoCategory::Other => "Other",
        }
    }
}

/// A validated, non-empty todo title.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoTitle(String);

impl TodoTitle {
    /// Create a todo title.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::EmptyTodoTitle] if `title` is empty or only whitespace.
    pub fn new(title: &str) -> Result<Self, Error> {
        let title = title.trim();

        if title.is_empty() {
            Err(Error::EmptyTodoTitle)
        } else {
            Ok(Self(title.to_string()))
        }
    }

    /// Create a todo title without validation.
    ///
    /// The caller should ensure that the string is not empty.
    #[cfg(test)]
    pub fn new_unchecked(title: &str) -> Self {
        Self(title.to_string())
    }
}

impl AsRef<str> for TodoTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for TodoTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier for a todo, its creation timestamp.
pub type TodoId = RecordId;

/// A task with an optional due date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: TodoTitle,
    pub description: Option<String>,
    pub priority: Priority,
    pub category: TodoCategory,
    /// The day the todo is due.
    #[serde(with = "optional_iso_date", default)]
    pub date: Option<Date>,
    pub done: bool,
}

/// A validated todo that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub title: TodoTitle,
    pub description: Option<String>,
    pub priority: Priority,
    pub category: TodoCategory,
    pub date: Option<Date>,
}

impl NewTodo {
    /// Validate the fields of the new todo form.
    ///
    /// A blank description or date is treated as not given.
    ///
    /// # Errors
    ///
    /// Returns an [Error::EmptyTodoTitle] if the title is blank, or an
    /// [Error::InvalidDate] if a date is given but is not a valid date.
    pub fn from_form(form: &TodoFormData) -> Result<Self, Error> {
        let title = TodoTitle::new(&form.title)?;

        let description = Some(form.description.trim())
            .filter(|description| !description.is_empty())
            .map(str::to_owned);

        let date = match form.date.trim() {
            "" => None,
            date => Some(parse_iso_date(date)?),
        };

        Ok(Self {
            title,
            description,
            priority: form.priority,
            category: form.category,
            date,
        })
    }

    /// Give the todo its ID. New todos are never done.
    pub(super) fn into_todo(self, id: TodoId) -> Todo {
        Todo {
            id,
            title: self.title,
            description: self.description,
            priority: self.priority,
            category: self.category,
            date: self.date,
            done: false,
        }
    }
}

/// Form data for creating a todo.
#[derive(Debug, Serialize, Deserialize)]
pub struct TodoFormData {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub priority: Priority,
    pub category: TodoCategory,
    /// A `YYYY-MM-DD` date or an empty string.
    #[serde(default)]
    pub date: String,
}
