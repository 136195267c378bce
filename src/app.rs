//! Todo App
//!
//! Root component: owns the store, loads the list and hosts the modal.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::TodoClient;
use crate::components::{TabList, TodoList, TodoModal};
use crate::config::ApiConfig;
use crate::context::AppContext;
use crate::models::TodoDraft;
use crate::store::{TodoState, TodoStateStoreFields};

#[component]
pub fn App(config: ApiConfig) -> impl IntoView {
    // State
    let store = Store::new(TodoState::default());
    let ctx = AppContext::new(signal(0u32), TodoClient::new(config), store);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx.clone());

    // Load on mount and after every successful mutation
    let load_ctx = ctx.clone();
    Effect::new(move |_| {
        let trigger = load_ctx.reload_trigger.get();
        let client = load_ctx.client.clone();
        log::debug!("Loading todos, trigger={}", trigger);
        spawn_local(async move {
            match client.list_todos().await {
                Ok(loaded) => {
                    log::debug!("Loaded {} todos", loaded.len());
                    store.todos().set(loaded);
                }
                Err(err) => log::error!("Failed to load todos: {}", err),
            }
        });
    });

    view! {
        <main class="container">
            <h1 class="text-white text-uppercase text-center my-4">"Todo app"</h1>
            <div class="row">
                <div class="col-md-6 col-sm-10 mx-auto p-0">
                    <div class="card p-3">
                        <div class="mb-4">
                            <button
                                class="btn btn-primary"
                                on:click=move |_| ctx.open_modal(TodoDraft::empty())
                            >
                                "Add task"
                            </button>
                        </div>
                        <TabList />
                        <TodoList />
                    </div>
                </div>
            </div>
            {move || store.active_item().get().map(|draft| view! { <TodoModal draft=draft /> })}
        </main>
    }
}
