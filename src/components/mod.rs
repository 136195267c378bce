//! UI Components
//!
//! Leptos components for the list, tabs and edit modal.

mod tab_list;
mod todo_list;
mod todo_row;
mod todo_modal;

pub use tab_list::TabList;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
pub use todo_modal::TodoModal;
