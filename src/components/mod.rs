//! UI Components
//!
//! Leptos components making up the todo form.

mod alert_dialog;
mod todo_form;
mod todo_list;

pub use alert_dialog::AlertDialog;
pub use todo_form::TodoForm;
pub use todo_list::TodoList;
