//! Page-level helpers.

use wasm_bindgen::prelude::*;

use scribe_editor_browser::PageEnhancements;
use scribe_editor_core::{PageConfig, fill_excerpt, reading_time_label, reading_time_minutes, word_count};

use crate::parse_config;

/// Handle keeping the page enhancements alive. Call `free()` to detach them.
#[wasm_bindgen]
pub struct JsPage {
    _inner: PageEnhancements,
}

/// Install the mobile menu, flash message, like button, image preview,
/// delete confirmation, search and reading time behaviors.
#[wasm_bindgen(js_name = enhancePage)]
pub fn enhance_page(config: JsValue) -> Result<JsPage, JsError> {
    let config: PageConfig = parse_config(config)?;
    Ok(JsPage {
        _inner: PageEnhancements::install(config),
    })
}

/// "N min read" for a block of text.
#[wasm_bindgen(js_name = readingTime)]
pub fn reading_time(text: &str, words_per_minute: usize) -> String {
    reading_time_label(reading_time_minutes(word_count(text), words_per_minute))
}

/// Excerpt for `markup`, or `undefined` when `existing` is already filled.
#[wasm_bindgen(js_name = suggestExcerpt)]
pub fn suggest_excerpt(existing: &str, markup: &str, limit: usize) -> Option<String> {
    fill_excerpt(existing, markup, limit)
}
