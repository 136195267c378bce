//! Todo List Component

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::store::{use_todo_store, visible_todos, TodoStateStoreFields};

/// Items of the selected tab
#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_todo_store();

    let visible = move || {
        let tab = store.tab().get();
        store.todos().with(|todos| visible_todos(todos, tab))
    };

    view! {
        <ul class="list-group list-group-flush border-top-0">
            // Keyed on the whole item so edits re-render the row
            <For
                each=visible
                key=|todo| todo.clone()
                children=move |todo| view! { <TodoRow todo=todo /> }
            />
        </ul>
    }
}
