//! Form State Store
//!
//! Uses Leptos reactive_stores so each view only tracks the fields it reads.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Notification, TodoItem};

/// Complete state of the todo form
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct FormState {
    /// Submitted items in insertion order
    pub items: Vec<TodoItem>,
    /// Raw, untrimmed input text
    pub draft_text: String,
    /// Visible notification (None = idle)
    pub notification: Option<Notification>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_notifying(&self) -> bool {
        self.notification.is_some()
    }

    /// Id for an item created at `timestamp`, strictly greater than the last one
    /// until ids saturate at `u64::MAX`
    pub fn next_item_id(&self, timestamp: u64) -> u64 {
        match self.items.last() {
            Some(last) if timestamp <= last.id => last.id.saturating_add(1),
            _ => timestamp,
        }
    }
}

/// Type alias for the store
pub type FormStore = Store<FormState>;

/// Get the form store from context
pub fn use_form_store() -> FormStore {
    expect_context::<FormStore>()
}
