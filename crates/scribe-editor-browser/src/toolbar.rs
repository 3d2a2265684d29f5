//! Toolbar DOM rendering.

use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use web_sys::{Document, HtmlElement};

use scribe_editor_core::{ButtonLabel, EditorError, ToolbarAction, ToolbarButton, ToolbarItem};

use crate::dom::{JsResultExt, create_html_element};

/// A rendered `div.editor-toolbar` and the click listeners on its buttons.
///
/// Dropping it detaches the listeners but leaves the element in place.
pub struct RenderedToolbar {
    element: HtmlElement,
    _listeners: Vec<EventListener>,
}

impl RenderedToolbar {
    pub fn element(&self) -> &HtmlElement {
        &self.element
    }
}

/// Build the toolbar for `items`. Clicking a button calls `on_action`
/// with the button's action.
pub fn render_toolbar(
    document: &Document,
    items: &[ToolbarItem],
    on_action: Rc<dyn Fn(&ToolbarAction)>,
) -> Result<RenderedToolbar, EditorError> {
    let toolbar = create_html_element(document, "div")?;
    toolbar.set_class_name("editor-toolbar");

    let mut listeners = Vec::new();
    for item in items {
        match item {
            ToolbarItem::Separator => {
                let separator = create_html_element(document, "span")?;
                separator.set_class_name("toolbar-separator");
                toolbar.append_child(&separator).js()?;
            }
            ToolbarItem::Button(button) => {
                let element = render_button(document, button)?;
                let action = button.action.clone();
                let on_action = Rc::clone(&on_action);
                let options = EventListenerOptions::enable_prevent_default();
                listeners.push(EventListener::new_with_options(
                    &element,
                    "click",
                    options,
                    move |event| {
                        event.prevent_default();
                        on_action(&action);
                    },
                ));
                toolbar.append_child(&element).js()?;
            }
        }
    }

    Ok(RenderedToolbar {
        element: toolbar,
        _listeners: listeners,
    })
}

fn render_button(document: &Document, button: &ToolbarButton) -> Result<HtmlElement, EditorError> {
    let element = create_html_element(document, "button")?;
    element.set_attribute("type", "button").js()?;
    element.set_class_name("editor-btn");
    element
        .set_attribute("data-command", button.action.data_command())
        .js()?;
    if let Some(value) = button.action.data_value() {
        element.set_attribute("data-value", &value).js()?;
    }
    element.set_title(&button.title);

    match &button.label {
        ButtonLabel::Icon(icon) => {
            let i = document.create_element("i").js()?;
            i.set_class_name(icon);
            element.append_child(&i).js()?;
        }
        ButtonLabel::Text(text) => element.set_text_content(Some(text.as_str())),
    }
    Ok(element)
}
