//! Editor and page configuration.
//!
//! Both structs deserialize from partial objects: any field the host page
//! leaves out falls back to its default.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorConfig {
    /// Surface content used when the backing field starts empty.
    pub placeholder: String,
    /// Local storage slot holding this editor's draft.
    pub draft_key: String,
    /// Quiet period before an autosave is written.
    pub autosave_delay_ms: u32,
    pub upload_endpoint: String,
    /// Multipart field name carrying the image file.
    pub upload_field: String,
    /// `<meta name=...>` carrying the CSRF token.
    pub csrf_meta_name: String,
    pub csrf_header: String,
    pub excerpt_length: usize,
    /// Container holding `.word-count` and `.char-count`.
    pub stats_selector: String,
    pub excerpt_field_id: Option<String>,
    pub restore_prompt: String,
    pub link_prompt: String,
    pub link_default: String,
    pub upload_failed_message: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            placeholder: "<p>Start writing...</p>".to_owned(),
            draft_key: "editor_autosave".to_owned(),
            autosave_delay_ms: 2000,
            upload_endpoint: "/api/upload-image".to_owned(),
            upload_field: "image".to_owned(),
            csrf_meta_name: "csrf-token".to_owned(),
            csrf_header: "X-CSRFToken".to_owned(),
            excerpt_length: 150,
            stats_selector: ".editor-stats".to_owned(),
            excerpt_field_id: Some("excerpt".to_owned()),
            restore_prompt: "Found an unsaved draft. Load it?".to_owned(),
            link_prompt: "Enter URL:".to_owned(),
            link_default: "https://".to_owned(),
            upload_failed_message: "Failed to upload image".to_owned(),
        }
    }
}

/// Settings for the non-editor page enhancements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageConfig {
    pub flash_hide_after_ms: u32,
    pub flash_fade_ms: u32,
    pub search_debounce_ms: u32,
    pub words_per_minute: usize,
    pub csrf_meta_name: String,
    pub csrf_header: String,
    pub delete_confirmation: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            flash_hide_after_ms: 5000,
            flash_fade_ms: 300,
            search_debounce_ms: 500,
            words_per_minute: 200,
            csrf_meta_name: "csrf-token".to_owned(),
            csrf_header: "X-CSRFToken".to_owned(),
            delete_confirmation:
                "Are you sure you want to delete this? This action cannot be undone.".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: EditorConfig =
            serde_json::from_str(r#"{"draftKey": "post-42", "autosaveDelayMs": 500}"#).unwrap();
        assert_eq!(config.draft_key, "post-42");
        assert_eq!(config.autosave_delay_ms, 500);
        assert_eq!(config.upload_endpoint, "/api/upload-image");
        assert_eq!(config.excerpt_field_id.as_deref(), Some("excerpt"));
    }

    #[test]
    fn test_excerpt_field_can_be_disabled() {
        let config: EditorConfig = serde_json::from_str(r#"{"excerptFieldId": null}"#).unwrap();
        assert_eq!(config.excerpt_field_id, None);
    }

    #[test]
    fn test_reading_speed_is_a_page_setting() {
        let page: PageConfig = serde_json::from_str(r#"{"wordsPerMinute": 250}"#).unwrap();
        assert_eq!(page.words_per_minute, 250);

        let editor = serde_json::to_value(EditorConfig::default()).unwrap();
        assert!(editor.get("wordsPerMinute").is_none());
    }
}
