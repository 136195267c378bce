//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Todo, TodoDraft, TodoTab};

/// List snapshot plus view state
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Last list fetched from the backend, in backend order
    pub todos: Vec<Todo>,
    /// Selected tab
    pub tab: TodoTab,
    /// Draft being edited; `Some` while the modal is open
    pub active_item: Option<TodoDraft>,
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

/// Get the store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

/// Items shown under `tab`, keeping backend order
pub fn visible_todos(todos: &[Todo], tab: TodoTab) -> Vec<Todo> {
    todos.iter().filter(|todo| tab.shows(todo)).cloned().collect()
}
