//! Form Models
//!
//! Data structures held by the todo form.

use crate::error::FormError;

/// Title shown when a submission is rejected
pub const ERROR_TITLE: &str = "Error";
/// Title shown when a todo was added
pub const SUCCESS_TITLE: &str = "Success";
/// Description shown when a todo was added
pub const SUCCESS_DESCRIPTION: &str = "Todo added successfully!";

/// A submitted todo item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    /// Creation timestamp in milliseconds, bumped when needed to stay unique
    pub id: u64,
    /// Trimmed, non-empty text
    pub text: String,
    /// Never toggled by the form
    pub completed: bool,
}

impl TodoItem {
    pub fn new(id: u64, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }
}

/// Outcome a notification reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }
}

/// Modal message shown after a submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn success() -> Self {
        Self {
            kind: NotificationKind::Success,
            title: SUCCESS_TITLE.to_string(),
            description: SUCCESS_DESCRIPTION.to_string(),
        }
    }

    /// Error notification whose description is the error's message
    pub fn error(err: &FormError) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: ERROR_TITLE.to_string(),
            description: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_creation() {
        let item = TodoItem::new(42, "Test todo".to_string());
        assert_eq!(item.id, 42);
        assert_eq!(item.text, "Test todo");
        assert!(!item.completed);
    }

    #[test]
    fn test_error_notification_text() {
        let notification = Notification::error(&FormError::EmptyInput);
        assert_eq!(notification.kind, NotificationKind::Error);
        assert_eq!(notification.title, "Error");
        assert_eq!(notification.description, "Please enter a todo item");
    }

    #[test]
    fn test_success_notification_text() {
        let notification = Notification::success();
        assert_eq!(notification.kind.as_str(), "success");
        assert_eq!(notification.title, "Success");
        assert_eq!(notification.description, "Todo added successfully!");
    }
}
