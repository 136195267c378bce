//! Todo Row Component
//!
//! A single item with edit and delete actions.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::{Todo, TodoDraft};
use crate::store::{use_todo_store, TodoStateStoreFields};

#[component]
pub fn TodoRow(todo: Todo) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_todo_store();

    let id = todo.id;
    let edit_ctx = ctx.clone();
    let draft = TodoDraft::from(todo.clone());

    let title_class = move || {
        if store.tab().get().shows_completed() {
            "todo-title mr-2 completed-todo"
        } else {
            "todo-title mr-2"
        }
    };

    view! {
        <li class="list-group-item d-flex justify-content-between align-items-center">
            <span class=title_class title=todo.description>
                {todo.title}
            </span>
            <span>
                <button
                    class="btn btn-secondary mr-2"
                    on:click=move |_| edit_ctx.open_modal(draft.clone())
                >
                    "Edit"
                </button>
                <button
                    class="btn btn-danger"
                    on:click=move |_| ctx.delete(id)
                >
                    "Delete"
                </button>
            </span>
        </li>
    }
}
