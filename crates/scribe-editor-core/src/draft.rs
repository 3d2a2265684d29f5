//! Draft persistence.
//!
//! A draft is a timestamped copy of the surface content kept in a single
//! storage slot. Each save overwrites the slot; there is exactly one draft
//! per key.
//!
//! ## Storage format
//!
//! JSON `{"content": "...", "timestamp": "2024-05-01T12:00:00.000Z"}`.
//!
//! A slot that doesn't parse is discarded and treated as empty rather than
//! failing page load.

use std::cell::RefCell;
use std::collections::HashMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::EditorError;

/// Timestamped copy of unsaved content.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DraftSnapshot {
    /// Surface markup at capture time
    pub content: String,
    /// ISO-8601 UTC capture time
    pub timestamp: String,
}

impl DraftSnapshot {
    pub fn new(content: impl Into<String>, captured_at: DateTime<Utc>) -> Self {
        Self {
            content: content.into(),
            timestamp: captured_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Capture time, if the stored timestamp parses.
    pub fn captured_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.timestamp)
            .ok()
            .map(|t| t.with_timezone(&Utc))
    }
}

/// A string-valued key/value slot store.
pub trait DraftStorage {
    fn get(&self, key: &str) -> Result<Option<String>, EditorError>;

    fn set(&self, key: &str, value: &str) -> Result<(), EditorError>;

    fn remove(&self, key: &str);
}

/// In-memory storage, for tests and hosts without local storage.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.slots.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.borrow().is_empty()
    }
}

impl DraftStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, EditorError> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), EditorError> {
        self.slots
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.slots.borrow_mut().remove(key);
    }
}

impl<T: DraftStorage + ?Sized> DraftStorage for &T {
    fn get(&self, key: &str) -> Result<Option<String>, EditorError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), EditorError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

/// One draft slot in a `DraftStorage`.
pub struct DraftStore<S> {
    storage: S,
    key: String,
}

impl<S: DraftStorage> DraftStore<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Overwrite the slot with `content` captured at `captured_at`.
    pub fn save(&self, content: &str, captured_at: DateTime<Utc>) -> Result<(), EditorError> {
        let snapshot = DraftSnapshot::new(content, captured_at);
        let json = serde_json::to_string(&snapshot)?;
        self.storage.set(&self.key, &json)?;
        tracing::debug!(key = %self.key, bytes = json.len(), "draft saved");
        Ok(())
    }

    /// Load the stored draft.
    ///
    /// A slot holding something other than a draft is removed and reported
    /// as empty.
    pub fn load(&self) -> Result<Option<DraftSnapshot>, EditorError> {
        let Some(raw) = self.storage.get(&self.key)? else {
            return Ok(None);
        };

        match serde_json::from_str::<DraftSnapshot>(&raw) {
            Ok(snapshot) => Ok(Some(snapshot)),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "discarding corrupt draft");
                self.storage.remove(&self.key);
                Ok(None)
            }
        }
    }

    pub fn clear(&self) {
        self.storage.remove(&self.key);
        tracing::debug!(key = %self.key, "draft cleared");
    }
}
