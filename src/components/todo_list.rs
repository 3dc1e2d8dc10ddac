//! Todo List Component

use leptos::prelude::*;

/// Submitted items in insertion order, as (key, text) pairs
#[component]
pub fn TodoList(#[prop(into)] entries: Signal<Vec<(u64, String)>>) -> impl IntoView {
    view! {
        <div class="todo-list" role="list">
            <For
                each=move || entries.get()
                key=|(id, _)| *id
                children=|(_, text)| view! {
                    <div class="todo-item" role="listitem">{text}</div>
                }
            />
        </div>
    }
}
