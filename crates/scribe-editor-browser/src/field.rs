//! Backing field: the form control whose value gets submitted.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use scribe_editor_core::{BackingField, EditorError};

/// A `<textarea>` or `<input>` holding the editor's markup.
#[derive(Clone)]
pub enum FormField {
    TextArea(HtmlTextAreaElement),
    Input(HtmlInputElement),
}

impl FormField {
    /// Look up the field by element id.
    pub fn by_id(document: &Document, id: &str) -> Result<Self, EditorError> {
        let element = document
            .get_element_by_id(id)
            .ok_or_else(|| EditorError::MissingElement(format!("#{id}")))?;
        Self::from_element(element)
    }

    pub fn from_element(element: Element) -> Result<Self, EditorError> {
        let element = match element.dyn_into::<HtmlTextAreaElement>() {
            Ok(textarea) => return Ok(Self::TextArea(textarea)),
            Err(element) => element,
        };
        element.dyn_into::<HtmlInputElement>().map(Self::Input).map_err(|element| {
            EditorError::MissingElement(format!("#{} is not a textarea or input", element.id()))
        })
    }

    pub fn element(&self) -> &HtmlElement {
        match self {
            Self::TextArea(el) => el,
            Self::Input(el) => el,
        }
    }

    /// The form this field submits with, if any.
    pub fn form(&self) -> Option<HtmlFormElement> {
        match self {
            Self::TextArea(el) => el.form(),
            Self::Input(el) => el.form(),
        }
    }

    /// Undo `hide`.
    pub fn show(&self) {
        if let Err(e) = self.element().style().remove_property("display") {
            tracing::warn!("could not show field: {}", crate::dom::describe(&e));
        }
    }
}

impl BackingField for FormField {
    fn value(&self) -> String {
        match self {
            Self::TextArea(el) => el.value(),
            Self::Input(el) => el.value(),
        }
    }

    fn set_value(&mut self, value: &str) {
        match self {
            Self::TextArea(el) => el.set_value(value),
            Self::Input(el) => el.set_value(value),
        }
    }

    fn hide(&mut self) {
        if let Err(e) = self.element().style().set_property("display", "none") {
            tracing::warn!("could not hide field: {}", crate::dom::describe(&e));
        }
    }
}
