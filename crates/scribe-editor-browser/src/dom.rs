//! Small DOM helpers shared by the other modules.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

use scribe_editor_core::EditorError;

/// Convert JS exceptions into `EditorError::Js`.
pub trait JsResultExt<T> {
    fn js(self) -> Result<T, EditorError>;
}

impl<T> JsResultExt<T> for Result<T, JsValue> {
    fn js(self) -> Result<T, EditorError> {
        self.map_err(|e| EditorError::Js(describe(&e)))
    }
}

/// Best-effort message for a thrown JS value.
pub fn describe(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{value:?}")
}

/// Create an element and cast it to `HtmlElement`.
pub fn create_html_element(document: &Document, tag: &str) -> Result<HtmlElement, EditorError> {
    document
        .create_element(tag)
        .js()?
        .dyn_into::<HtmlElement>()
        .map_err(|_| EditorError::Js(format!("<{tag}> is not an HtmlElement")))
}

/// First match for `selector`, ignoring invalid selectors.
pub fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

/// All matches for `selector` in document order.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// CSRF token from `<meta name="{meta_name}" content="...">`.
pub fn csrf_token(document: &Document, meta_name: &str) -> Option<String> {
    query(document, &format!("meta[name=\"{meta_name}\"]"))
        .and_then(|meta| meta.get_attribute("content"))
}

/// Insert `node` directly after `reference` in its parent.
pub fn insert_after(reference: &Element, node: &Element) -> Result<(), EditorError> {
    let parent = reference
        .parent_node()
        .ok_or_else(|| EditorError::MissingElement("parent of editor field".to_owned()))?;
    parent
        .insert_before(node, reference.next_sibling().as_ref())
        .js()?;
    Ok(())
}

/// Insert `node` directly before `reference` in its parent.
pub fn insert_before(reference: &Element, node: &Element) -> Result<(), EditorError> {
    let parent = reference
        .parent_node()
        .ok_or_else(|| EditorError::MissingElement("parent of editor surface".to_owned()))?;
    parent.insert_before(node, Some(reference)).js()?;
    Ok(())
}
