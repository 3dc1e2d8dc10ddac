//! Form Reducer
//!
//! Pure state transitions for the todo form:
//! `FormState × FormEvent → FormState`.
//!
//! Nothing here touches the DOM or the clock, so every transition can be
//! exercised in plain unit tests.

use chrono::Utc;

use crate::error::FormError;
use crate::models::{Notification, TodoItem};
use crate::store::FormState;

/// Events the presentation layer dispatches
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// Input text changed
    EditDraft(String),
    /// Submit the current draft; `submitted_at` is milliseconds since the epoch
    Submit { submitted_at: u64 },
    /// Acknowledge the visible notification
    DismissNotification,
}

impl FormEvent {
    /// Submit event stamped with the current wall-clock time
    pub fn submit_now() -> Self {
        let millis = Utc::now().timestamp_millis();
        FormEvent::Submit {
            submitted_at: u64::try_from(millis).unwrap_or_default(),
        }
    }
}

/// Whitespace as ECMAScript `String.prototype.trim` sees it: Unicode
/// White_Space without NEL (U+0085), plus the byte order mark (U+FEFF).
pub fn is_js_whitespace(c: char) -> bool {
    match c {
        '\u{85}' => false,
        '\u{feff}' => true,
        _ => c.is_whitespace(),
    }
}

/// Validate a raw draft, returning its trimmed text
pub fn validate_draft(draft: &str) -> Result<&str, FormError> {
    let trimmed = draft.trim_matches(is_js_whitespace);
    if trimmed.is_empty() {
        return Err(FormError::EmptyInput);
    }
    Ok(trimmed)
}

/// Apply one event to the form state
pub fn reduce(state: FormState, event: FormEvent) -> FormState {
    match event {
        FormEvent::EditDraft(text) => FormState {
            draft_text: text,
            ..state
        },
        FormEvent::Submit { submitted_at } => submit(state, submitted_at),
        FormEvent::DismissNotification => {
            if state.is_notifying() {
                log::debug!(target: "form", "notification dismissed");
            }
            FormState {
                notification: None,
                ..state
            }
        }
    }
}

fn submit(mut state: FormState, submitted_at: u64) -> FormState {
    let text = match validate_draft(&state.draft_text) {
        Ok(text) => text.to_string(),
        Err(err) => {
            log::info!(target: "form", "submission rejected: {}", err);
            // Draft is kept so the user can correct it
            state.notification = Some(Notification::error(&err));
            return state;
        }
    };

    let id = state.next_item_id(submitted_at);
    log::debug!(target: "form", "adding todo #{} ({} items before)", id, state.items.len());
    state.items.push(TodoItem::new(id, text));
    state.draft_text.clear();
    state.notification = Some(Notification::success());
    state
}
