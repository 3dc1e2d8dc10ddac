//! Todo Form App
//!
//! Root component: creates the form store and provides it to the form.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::TodoForm;
use crate::config::FormConfig;
use crate::context::FormContext;
use crate::store::FormState;

#[component]
pub fn App(config: FormConfig) -> impl IntoView {
    let store = Store::new(FormState::new());

    // Provide context to all children
    provide_context(store);
    provide_context(FormContext::new(store));
    provide_context(config);

    view! {
        <div class="app-layout">
            <TodoForm />
        </div>
    }
}
