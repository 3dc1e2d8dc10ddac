//! Alert Dialog Component
//!
//! Modal with a title, a description and a single confirm action.

use leptos::ev;
use leptos::prelude::*;

use crate::render::{dialog_class, DialogContent};

/// Modal alert dialog
///
/// Rendered only while `content` yields `Some`. Both the confirm button and
/// the Escape key run `on_confirm`.
#[component]
pub fn AlertDialog(
    #[prop(into)] content: Signal<Option<DialogContent>>,
    #[prop(into)] confirm_label: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let escape = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && content.with_untracked(Option::is_some) {
            on_confirm.run(());
        }
    });
    on_cleanup(move || escape.remove());

    view! {
        {move || content.get().map(|dialog| {
            let label = confirm_label.clone();
            view! {
                <div class="alert-overlay">
                    <div
                        class=dialog_class(dialog.kind)
                        role="alertdialog"
                        aria-modal="true"
                    >
                        <div class="alert-header">
                            <h2 class="alert-title">{dialog.title}</h2>
                            <p class="alert-description">{dialog.description}</p>
                        </div>
                        <div class="alert-footer">
                            <button
                                class="alert-action"
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    on_confirm.run(());
                                }
                            >
                                {label}
                            </button>
                        </div>
                    </div>
                </div>
            }
        })}
    }
}
