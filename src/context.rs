//! Form Context
//!
//! Dispatch handle provided via Leptos Context API.

use leptos::prelude::*;

use crate::reducer::{reduce, FormEvent};
use crate::store::FormStore;

/// Form-wide handle; every state change goes through `dispatch`
#[derive(Clone, Copy)]
pub struct FormContext {
    pub store: FormStore,
}

impl FormContext {
    pub fn new(store: FormStore) -> Self {
        Self { store }
    }

    /// Run one event through the reducer and replace the state
    pub fn dispatch(&self, event: FormEvent) {
        self.store.update(|state| {
            *state = reduce(std::mem::take(state), event);
        });
    }

    pub fn edit_draft(&self, text: String) {
        self.dispatch(FormEvent::EditDraft(text));
    }

    pub fn submit(&self) {
        self.dispatch(FormEvent::submit_now());
    }

    pub fn dismiss(&self) {
        self.dispatch(FormEvent::DismissNotification);
    }
}

/// Get the form context
pub fn use_form_context() -> FormContext {
    expect_context::<FormContext>()
}
