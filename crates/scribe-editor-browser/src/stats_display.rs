//! Word/character count display.

use web_sys::Document;

use scribe_editor_core::{StatsDisplay, TextStats};

use crate::dom::query;

/// Writes counts into `{selector} .word-count` and `{selector} .char-count`.
///
/// The container is looked up on every update; if it or either child is
/// missing that part is skipped.
pub struct DomStatsDisplay {
    document: Document,
    selector: String,
}

impl DomStatsDisplay {
    pub fn new(document: Document, selector: impl Into<String>) -> Self {
        Self {
            document,
            selector: selector.into(),
        }
    }
}

impl StatsDisplay for DomStatsDisplay {
    fn show(&self, stats: &TextStats) {
        let Some(container) = query(&self.document, &self.selector) else {
            return;
        };
        if let Ok(Some(words)) = container.query_selector(".word-count") {
            words.set_text_content(Some(&stats.words_label()));
        }
        if let Ok(Some(chars)) = container.query_selector(".char-count") {
            chars.set_text_content(Some(&stats.characters_label()));
        }
    }
}
