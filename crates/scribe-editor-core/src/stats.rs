//! Derived-text utilities: counts, excerpts and reading time.
//!
//! All functions are pure and recomputed on demand.

use std::sync::LazyLock;

use regex_lite::Regex;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Word and character counts of a plain-text projection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextStats {
    pub words: usize,
    pub characters: usize,
}

impl TextStats {
    pub fn from_text(text: &str) -> Self {
        Self {
            words: word_count(text),
            characters: char_count(text),
        }
    }

    pub fn words_label(&self) -> String {
        format!("{} words", self.words)
    }

    pub fn characters_label(&self) -> String {
        format!("{} characters", self.characters)
    }
}

/// Whitespace-delimited word count. Empty tokens don't count.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Every character, whitespace included.
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Remove anything that looks like a markup tag.
pub fn strip_tags(markup: &str) -> String {
    TAG.replace_all(markup, "").into_owned()
}

/// First `limit` characters of the tag-stripped text, with `...` appended
/// when anything was cut.
pub fn excerpt(markup: &str, limit: usize) -> String {
    truncate_text(&strip_tags(markup), limit)
}

/// First `limit` characters of already-plain text, with `...` appended when
/// anything was cut. Angle brackets are kept as typed.
pub fn truncate_text(plain: &str, limit: usize) -> String {
    match plain.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}...", &plain[..cut]),
        None => plain.to_owned(),
    }
}

/// Derive an excerpt only when the target field is still empty.
pub fn fill_excerpt(existing: &str, markup: &str, limit: usize) -> Option<String> {
    existing.is_empty().then(|| excerpt(markup, limit))
}

/// Minutes to read `words` at `words_per_minute`, rounded up.
pub fn reading_time_minutes(words: usize, words_per_minute: usize) -> usize {
    words.div_ceil(words_per_minute.max(1))
}

pub fn reading_time_label(minutes: usize) -> String {
    format!("{minutes} min read")
}
