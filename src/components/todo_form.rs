//! Todo Form Component
//!
//! Card with the draft input, the submit button, the item list and the
//! result dialog.

use leptos::prelude::*;

use crate::components::{AlertDialog, TodoList};
use crate::config::use_form_config;
use crate::context::use_form_context;
use crate::render::RenderedForm;
use crate::store::use_form_store;

/// Form for adding todos
#[component]
pub fn TodoForm() -> impl IntoView {
    let store = use_form_store();
    let ctx = use_form_context();
    let config = use_form_config();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit();
    };

    // Everything below binds to this projection
    let rendered = Memo::new(move |_| store.with(RenderedForm::from_state));
    let entries = Memo::new(move |_| rendered.with(|form| form.list.clone()));
    let dialog = Memo::new(move |_| rendered.with(|form| form.dialog.clone()));

    view! {
        <div class="card">
            <div class="card-header">
                <h2 class="card-title">{config.card_title}</h2>
            </div>
            <div class="card-content">
                <form class="todo-form" on:submit=submit>
                    <div class="todo-form-row">
                        <input
                            type="text"
                            class="todo-input"
                            placeholder=config.placeholder
                            aria-label=config.input_label
                            prop:value=move || rendered.with(|form| form.input_value.clone())
                            on:input=move |ev| ctx.edit_draft(event_target_value(&ev))
                        />
                        <button type="submit" class="todo-submit">{config.submit_label}</button>
                    </div>
                </form>

                <TodoList entries=entries />
            </div>
        </div>

        <AlertDialog
            content=dialog
            confirm_label=config.confirm_label
            on_confirm=move |_| ctx.dismiss()
        />
    }
}
