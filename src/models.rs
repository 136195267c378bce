//! Frontend Models
//!
//! Data structures matching the REST backend.

use serde::{Deserialize, Serialize};

/// To-do item as returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}

/// Working copy edited in the modal. `id == None` means a new item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TodoDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

impl TodoDraft {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }
}

impl From<Todo> for TodoDraft {
    fn from(todo: Todo) -> Self {
        Self {
            id: Some(todo.id),
            title: todo.title,
            description: todo.description,
            completed: todo.completed,
        }
    }
}

/// Which list is shown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TodoTab {
    Complete,
    #[default]
    Incomplete,
}

impl TodoTab {
    pub const ALL: [TodoTab; 2] = [TodoTab::Complete, TodoTab::Incomplete];

    pub fn label(self) -> &'static str {
        match self {
            TodoTab::Complete => "Complete",
            TodoTab::Incomplete => "Incomplete",
        }
    }

    pub fn shows_completed(self) -> bool {
        self == TodoTab::Complete
    }

    /// Whether `todo` belongs in this tab
    pub fn shows(self, todo: &Todo) -> bool {
        todo.completed == self.shows_completed()
    }
}
