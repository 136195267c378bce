//! Tab List Component
//!
//! Switches between completed and incomplete items.

use leptos::prelude::*;

use crate::models::TodoTab;
use crate::store::{use_todo_store, TodoStateStoreFields};

#[component]
pub fn TabList() -> impl IntoView {
    let store = use_todo_store();

    view! {
        <div class="nav nav-tabs">
            {TodoTab::ALL.into_iter().map(|tab| {
                let is_active = move || store.tab().get() == tab;
                view! {
                    <span
                        class=move || if is_active() { "nav-link active" } else { "nav-link" }
                        on:click=move |_| store.tab().set(tab)
                    >
                        {tab.label()}
                    </span>
                }
            }).collect_view()}
        </div>
    }
}
