//! Todo Modal Component
//!
//! Overlay form for creating a new item or editing an existing one.
//! Rendered only while the store holds an active draft.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::TodoDraft;

#[component]
pub fn TodoModal(draft: TodoDraft) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = draft.id;
    let heading = if draft.is_new() { "New task" } else { "Edit task" };
    let (title, set_title) = signal(draft.title);
    let (description, set_description) = signal(draft.description);
    let (completed, set_completed) = signal(draft.completed);

    let save_ctx = ctx.clone();
    let on_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        save_ctx.save(TodoDraft {
            id,
            title: title.get(),
            description: description.get(),
            completed: completed.get(),
        });
    };

    let backdrop_ctx = ctx.clone();

    view! {
        <div class="modal-backdrop" on:click=move |_| backdrop_ctx.close_modal()>
            <div class="modal-dialog" on:click=|ev| ev.stop_propagation()>
                <div class="modal-content">
                    <div class="modal-header">
                        <h5 class="modal-title">{heading}</h5>
                        <button type="button" class="close" on:click=move |_| ctx.close_modal()>
                            "×"
                        </button>
                    </div>
                    <form on:submit=on_save>
                        <div class="modal-body">
                            <div class="form-group">
                                <label for="todo-title">"Title"</label>
                                <input
                                    type="text"
                                    id="todo-title"
                                    name="title"
                                    class="form-control"
                                    placeholder="Enter Todo Title"
                                    prop:value=move || title.get()
                                    on:input=move |ev| set_title.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="form-group">
                                <label for="todo-description">"Description"</label>
                                <input
                                    type="text"
                                    id="todo-description"
                                    name="description"
                                    class="form-control"
                                    placeholder="Enter Todo description"
                                    prop:value=move || description.get()
                                    on:input=move |ev| set_description.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="form-check">
                                <label class="form-check-label">
                                    <input
                                        type="checkbox"
                                        name="completed"
                                        class="form-check-input"
                                        prop:checked=move || completed.get()
                                        on:change=move |ev| set_completed.set(event_target_checked(&ev))
                                    />
                                    "Completed"
                                </label>
                            </div>
                        </div>
                        <div class="modal-footer">
                            <button type="submit" class="btn btn-success">"Save"</button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
