//! LocalStorage draft slots.

use gloo_storage::{LocalStorage, Storage};

use scribe_editor_core::{DraftStorage, EditorError};

use crate::dom::describe;

/// `DraftStorage` over `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalDraftStorage;

impl DraftStorage for LocalDraftStorage {
    fn get(&self, key: &str) -> Result<Option<String>, EditorError> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|e| EditorError::Storage(describe(&e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), EditorError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| EditorError::Storage(describe(&e)))
    }

    fn remove(&self, key: &str) {
        LocalStorage::delete(key);
    }
}
