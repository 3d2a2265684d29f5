//! JsEditor - the mounted editor wrapper for JavaScript.

use wasm_bindgen::prelude::*;

use scribe_editor_browser::MountedEditor;
use scribe_editor_core::snippets::{insert_code, insert_quote, insert_table};
use scribe_editor_core::{EditorCommand, EditorConfig, ToolbarAction};

use crate::types::JsTextStats;
use crate::{parse_config, to_js_error};

/// A rich text editor mounted over a form field.
#[wasm_bindgen]
pub struct JsEditor {
    inner: MountedEditor,
}

#[wasm_bindgen]
impl JsEditor {
    /// Mount over the `<textarea>` with id `field_id`.
    ///
    /// `config` is a partial `EditorConfig` in camelCase; missing keys use
    /// their defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(field_id: &str, config: JsValue) -> Result<JsEditor, JsError> {
        let config: EditorConfig = parse_config(config)?;
        let inner = MountedEditor::mount(field_id, config).map_err(to_js_error)?;
        Ok(Self { inner })
    }

    #[wasm_bindgen(js_name = getContent)]
    pub fn get_content(&self) -> String {
        self.inner.content()
    }

    #[wasm_bindgen(js_name = setContent)]
    pub fn set_content(&self, html: &str) -> Result<(), JsError> {
        self.inner.set_content(html).map_err(to_js_error)
    }

    /// Reset to the placeholder.
    pub fn clear(&self) -> Result<(), JsError> {
        self.inner.clear().map_err(to_js_error)
    }

    pub fn focus(&self) {
        self.inner.focus();
    }

    /// Run a toolbar command by name, e.g. `("bold")` or `("formatBlock", "h2")`.
    #[wasm_bindgen(js_name = executeCommand)]
    pub fn execute_command(&self, command: &str, value: Option<String>) -> Result<(), JsError> {
        let action = ToolbarAction::parse(command, value.as_deref()).map_err(to_js_error)?;
        self.inner.execute_action(&action);
        Ok(())
    }

    /// Insert raw markup at the caret.
    #[wasm_bindgen(js_name = insertHtml)]
    pub fn insert_html(&self, html: &str) -> Result<bool, JsError> {
        let command = EditorCommand::InsertHtml {
            html: html.to_owned(),
        };
        self.inner.apply(&command).map_err(to_js_error)
    }

    /// Insert an empty `rows` x `cols` table.
    #[wasm_bindgen(js_name = insertTable)]
    pub fn insert_table(&self, rows: usize, cols: usize) -> Result<bool, JsError> {
        self.inner
            .apply(&insert_table(rows, cols))
            .map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = insertCode)]
    pub fn insert_code(&self, code: &str, language: &str) -> Result<bool, JsError> {
        self.inner
            .apply(&insert_code(code, language))
            .map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = insertQuote)]
    pub fn insert_quote(&self, text: &str, author: Option<String>) -> Result<bool, JsError> {
        self.inner
            .apply(&insert_quote(text, author.as_deref()))
            .map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = getStats)]
    pub fn get_stats(&self) -> JsTextStats {
        self.inner.stats().into()
    }

    /// Write the draft now instead of waiting for the autosave delay.
    #[wasm_bindgen(js_name = saveDraft)]
    pub fn save_draft(&self) -> Result<(), JsError> {
        self.inner.save_draft().map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = discardDraft)]
    pub fn discard_draft(&self) {
        self.inner.discard_draft();
    }

    /// Remove the editor and show the original field.
    pub fn destroy(self) {
        self.inner.unmount();
    }
}
