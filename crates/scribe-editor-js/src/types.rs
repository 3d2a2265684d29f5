//! Types exposed to JavaScript via wasm-bindgen.

use serde::{Deserialize, Serialize};
use tsify_next::Tsify;

use scribe_editor_core::TextStats;

/// Word and character counts of the editor content.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct JsTextStats {
    pub words: usize,
    pub characters: usize,
}

impl From<TextStats> for JsTextStats {
    fn from(stats: TextStats) -> Self {
        Self {
            words: stats.words,
            characters: stats.characters,
        }
    }
}
