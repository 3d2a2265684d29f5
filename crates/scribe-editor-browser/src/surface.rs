//! Contenteditable surface.
//!
//! Implements `EditableSurface` by forwarding commands to the document's
//! built-in editing instructions (`execCommand`). Those act on the focused
//! editable region, so `execute` assumes the caller focused this surface.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlDocument, HtmlElement};

use scribe_editor_core::{EditableSurface, EditorCommand, EditorError};

use crate::dom::{JsResultExt, create_html_element};

pub struct ContentEditable {
    element: HtmlElement,
    document: HtmlDocument,
}

impl ContentEditable {
    /// Create a detached `div.rich-editor[contenteditable]`.
    pub fn create(document: &Document, id: &str) -> Result<Self, EditorError> {
        let element = create_html_element(document, "div")?;
        element.set_id(id);
        element.set_class_name("rich-editor");
        element.set_content_editable("true");
        Self::from_element(document, element)
    }

    /// Wrap an existing element, making it editable.
    pub fn from_element(document: &Document, element: HtmlElement) -> Result<Self, EditorError> {
        element.set_content_editable("true");
        let document = document
            .clone()
            .dyn_into::<HtmlDocument>()
            .map_err(|_| EditorError::Js("document is not an HTML document".to_owned()))?;
        Ok(Self { element, document })
    }

    pub fn element(&self) -> &HtmlElement {
        &self.element
    }

    fn exec(&self, name: &str, value: Option<&str>) -> Result<bool, EditorError> {
        match value {
            Some(value) => self
                .document
                .exec_command_with_show_ui_and_value(name, false, value)
                .js(),
            None => self.document.exec_command(name).js(),
        }
    }
}

impl EditableSurface for ContentEditable {
    fn inner_html(&self) -> String {
        self.element.inner_html()
    }

    fn set_inner_html(&mut self, html: &str) {
        self.element.set_inner_html(html);
    }

    fn text_content(&self) -> String {
        self.element.text_content().unwrap_or_default()
    }

    fn focus(&self) {
        if let Err(e) = self.element.focus() {
            tracing::debug!("focus failed: {}", crate::dom::describe(&e));
        }
    }

    fn execute(&mut self, command: &EditorCommand) -> bool {
        let instruction = command.host_instruction();
        match self.exec(instruction.name, instruction.value.as_deref()) {
            Ok(applied) => applied,
            Err(e) => {
                tracing::warn!(command = instruction.name, "execCommand threw: {e}");
                false
            }
        }
    }
}
