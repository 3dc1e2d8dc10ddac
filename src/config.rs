//! Form Configuration
//!
//! UI labels and log level, optionally embedded in the host page as
//! `<script id="todo-form-config" type="application/json">`.

use leptos::prelude::*;
use log::LevelFilter;
use serde::Deserialize;

use crate::error::ConfigError;

/// Id of the script element holding the JSON config
pub const CONFIG_ELEMENT_ID: &str = "todo-form-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub card_title: String,
    pub placeholder: String,
    pub input_label: String,
    pub submit_label: String,
    pub confirm_label: String,
    pub log_level: LevelFilter,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            card_title: "Todo List".to_string(),
            placeholder: "Enter a new todo".to_string(),
            input_label: "New todo input".to_string(),
            submit_label: "Add Todo".to_string(),
            confirm_label: "OK".to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl FormConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Read the config embedded in the document, falling back to defaults
pub fn load_config() -> FormConfig {
    let Some(raw) = embedded_config_text() else {
        return FormConfig::default();
    };
    match FormConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!(target: "config", "{}, using defaults", err);
            FormConfig::default()
        }
    }
}

fn embedded_config_text() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
    element.text_content().filter(|text| !text.trim().is_empty())
}

/// Get the form config from context
pub fn use_form_config() -> FormConfig {
    expect_context::<FormConfig>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_form_labels() {
        let config = FormConfig::default();
        assert_eq!(config.card_title, "Todo List");
        assert_eq!(config.placeholder, "Enter a new todo");
        assert_eq!(config.submit_label, "Add Todo");
        assert_eq!(config.confirm_label, "OK");
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = FormConfig::from_json(r#"{"submit_label": "Add", "log_level": "debug"}"#)
            .expect("valid config");
        assert_eq!(config.submit_label, "Add");
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.placeholder, "Enter a new todo");
    }

    #[test]
    fn test_malformed_json_is_error() {
        let err = FormConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("invalid form config"));
    }
}
