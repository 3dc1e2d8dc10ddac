//! Render Projections
//!
//! What the form view shows for a given state. The components bind to these
//! helpers, so the binding can be checked without a browser.

use crate::models::{Notification, NotificationKind, TodoItem};
use crate::store::FormState;

/// Content of the open dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogContent {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

/// Everything visible on the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedForm {
    pub input_value: String,
    /// (key, text) pairs in display order
    pub list: Vec<(u64, String)>,
    pub dialog: Option<DialogContent>,
}

impl RenderedForm {
    pub fn from_state(state: &FormState) -> Self {
        Self {
            input_value: state.draft_text.clone(),
            list: list_entries(&state.items),
            dialog: dialog_content(state.notification.as_ref()),
        }
    }
}

/// (key, text) pairs in display order
pub fn list_entries(items: &[TodoItem]) -> Vec<(u64, String)> {
    items.iter().map(|item| (item.id, item.text.clone())).collect()
}

pub fn dialog_content(notification: Option<&Notification>) -> Option<DialogContent> {
    notification.map(|n| DialogContent {
        kind: n.kind,
        title: n.title.clone(),
        description: n.description.clone(),
    })
}

/// CSS class for the dialog box
pub fn dialog_class(kind: NotificationKind) -> String {
    format!("alert-dialog {}", kind.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducer::{reduce, FormEvent};

    fn dispatch(state: FormState, events: Vec<FormEvent>) -> FormState {
        events.into_iter().fold(state, reduce)
    }

    #[test]
    fn test_mounted_form_is_blank() {
        let rendered = RenderedForm::from_state(&FormState::new());
        assert_eq!(rendered.input_value, "");
        assert!(rendered.list.is_empty());
        assert!(rendered.dialog.is_none());
    }

    #[test]
    fn test_empty_submit_then_dismiss() {
        let state = dispatch(FormState::new(), vec![FormEvent::Submit { submitted_at: 1 }]);
        let dialog = RenderedForm::from_state(&state).dialog.expect("dialog shown");
        assert_eq!(dialog.title, "Error");
        assert_eq!(dialog.description, "Please enter a todo item");
        assert_eq!(dialog_class(dialog.kind), "alert-dialog error");

        let state = dispatch(state, vec![FormEvent::DismissNotification]);
        assert!(RenderedForm::from_state(&state).dialog.is_none());
    }

    #[test]
    fn test_valid_submit_renders_item() {
        let state = dispatch(
            FormState::new(),
            vec![
                FormEvent::EditDraft("Test todo".to_string()),
                FormEvent::Submit { submitted_at: 1 },
            ],
        );
        let rendered = RenderedForm::from_state(&state);
        assert_eq!(rendered.list, vec![(1, "Test todo".to_string())]);
        assert_eq!(rendered.input_value, "");
        assert_eq!(rendered.dialog.map(|d| d.title), Some("Success".to_string()));
    }

    #[test]
    fn test_input_reflects_draft_after_failed_submit() {
        let state = dispatch(
            FormState::new(),
            vec![
                FormEvent::EditDraft("   ".to_string()),
                FormEvent::Submit { submitted_at: 1 },
            ],
        );
        assert_eq!(RenderedForm::from_state(&state).input_value, "   ");
    }

    #[test]
    fn test_list_entries_keyed_by_id() {
        let items = vec![
            TodoItem::new(3, "First todo".to_string()),
            TodoItem::new(9, "Second todo".to_string()),
        ];
        assert_eq!(
            list_entries(&items),
            vec![(3, "First todo".to_string()), (9, "Second todo".to_string())]
        );
    }
}
