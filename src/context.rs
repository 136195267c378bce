//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::TodoClient;
use crate::models::TodoDraft;
use crate::store::{TodoStateStoreFields, TodoStore};

/// App-wide handles provided via context
#[derive(Clone)]
pub struct AppContext {
    /// Bumped after every successful mutation - read
    pub reload_trigger: ReadSignal<u32>,
    /// Bumped after every successful mutation - write
    set_reload_trigger: WriteSignal<u32>,
    /// Backend client
    pub client: TodoClient,
    store: TodoStore,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        client: TodoClient,
        store: TodoStore,
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            client,
            store,
        }
    }

    /// Refetch the whole list
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn open_modal(&self, draft: TodoDraft) {
        self.store.active_item().set(Some(draft));
    }

    pub fn close_modal(&self) {
        self.store.active_item().set(None);
    }

    /// Close the modal, then create or update the draft
    pub fn save(&self, draft: TodoDraft) {
        self.close_modal();
        let ctx = self.clone();
        spawn_local(async move {
            match ctx.client.save_todo(&draft).await {
                Ok(saved) => {
                    log::info!("Saved todo #{}", saved.id);
                    ctx.reload();
                }
                Err(err) => log::error!("Failed to save todo {:?}: {}", draft.id, err),
            }
        });
    }

    pub fn delete(&self, id: u64) {
        let ctx = self.clone();
        spawn_local(async move {
            match ctx.client.delete_todo(id).await {
                Ok(()) => {
                    log::info!("Deleted todo #{}", id);
                    ctx.reload();
                }
                Err(err) => log::error!("Failed to delete todo #{}: {}", id, err),
            }
        });
    }
}
