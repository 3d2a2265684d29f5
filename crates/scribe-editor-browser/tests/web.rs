//! WASM browser tests for scribe-editor-browser.
//!
//! Run with: `wasm-pack test --headless --firefox` or `--chrome`

#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

use gloo_timers::future::TimeoutFuture;
use scribe_editor_browser::{
    BackingField, ContentEditable, DomStatsDisplay, DraftStorage, DraftStore, EditableSurface,
    EditorConfig, FormField, LocalDraftStorage, MountedEditor, PageConfig, PageEnhancements,
    StatsDisplay, TextStats, ToolbarAction, default_toolbar, render_toolbar,
};
use web_sys::{ClipboardEvent, ClipboardEventInit, DataTransfer, Event, HtmlElement};

fn document() -> web_sys::Document {
    gloo_utils::document()
}

/// Append `html` inside a fresh container on `<body>`.
fn fixture(html: &str) -> HtmlElement {
    let container = document()
        .create_element("div")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    container.set_inner_html(html);
    document().body().unwrap().append_child(&container).unwrap();
    container
}

// === Field and surface ===

#[wasm_bindgen_test]
fn test_form_field_reads_textarea() {
    let container = fixture(r#"<textarea id="field-read">hello</textarea>"#);
    let mut field = FormField::by_id(&document(), "field-read").unwrap();
    assert_eq!(field.value(), "hello");

    field.set_value("<p>changed</p>");
    assert_eq!(field.value(), "<p>changed</p>");

    field.hide();
    assert_eq!(
        field.element().style().get_property_value("display").unwrap(),
        "none"
    );
    container.remove();
}

#[wasm_bindgen_test]
fn test_form_field_missing_id() {
    assert!(FormField::by_id(&document(), "does-not-exist").is_err());
}

#[wasm_bindgen_test]
fn test_surface_markup_and_text() {
    let mut surface = ContentEditable::create(&document(), "surface-test").unwrap();
    assert_eq!(surface.element().content_editable(), "true");
    assert_eq!(surface.element().class_name(), "rich-editor");

    surface.set_inner_html("<p>Hello <b>world</b></p>");
    assert_eq!(surface.inner_html(), "<p>Hello <b>world</b></p>");
    assert_eq!(surface.text_content(), "Hello world");
}

// === Drafts ===

#[wasm_bindgen_test]
fn test_local_storage_draft_round_trip() {
    let store = DraftStore::new(LocalDraftStorage, "scribe-test-draft");
    store.clear();
    assert!(store.load().unwrap().is_none());

    store.save("<p>draft</p>", chrono::Utc::now()).unwrap();
    let draft = store.load().unwrap().unwrap();
    assert_eq!(draft.content, "<p>draft</p>");

    store.clear();
    assert!(store.load().unwrap().is_none());
}

#[wasm_bindgen_test]
fn test_corrupt_local_draft_is_discarded() {
    LocalDraftStorage.set("scribe-test-corrupt", "{not json").unwrap();
    let store = DraftStore::new(LocalDraftStorage, "scribe-test-corrupt");

    assert!(store.load().unwrap().is_none());
    assert_eq!(LocalDraftStorage.get("scribe-test-corrupt").unwrap(), None);
}

// === Toolbar ===

#[wasm_bindgen_test]
fn test_toolbar_renders_buttons_and_separators() {
    let clicked = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&clicked);
    let toolbar = render_toolbar(
        &document(),
        &default_toolbar(),
        Rc::new(move |action: &ToolbarAction| log.borrow_mut().push(action.clone())),
    )
    .unwrap();

    let element = toolbar.element();
    assert_eq!(element.class_name(), "editor-toolbar");
    let buttons = element.query_selector_all("button.editor-btn").unwrap();
    assert_eq!(buttons.length(), 13);
    let separators = element.query_selector_all("span.toolbar-separator").unwrap();
    assert_eq!(separators.length(), 5);

    let bold = element
        .query_selector("button[data-command=\"bold\"]")
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    assert_eq!(bold.title(), "Bold");
    assert_eq!(bold.get_attribute("type").as_deref(), Some("button"));
    bold.click();

    assert_eq!(clicked.borrow().len(), 1);
    assert_eq!(clicked.borrow()[0].data_command(), "bold");
}

// === Stats ===

#[wasm_bindgen_test]
fn test_stats_display_writes_counts() {
    let container = fixture(
        r#"<div class="stats-test"><span class="word-count"></span><span class="char-count"></span></div>"#,
    );
    let display = DomStatsDisplay::new(document(), ".stats-test");
    display.show(&TextStats::from_text("Hello world"));

    let words = container.query_selector(".word-count").unwrap().unwrap();
    let chars = container.query_selector(".char-count").unwrap().unwrap();
    assert_eq!(words.text_content().as_deref(), Some("2 words"));
    assert_eq!(chars.text_content().as_deref(), Some("11 characters"));
    container.remove();
}

#[wasm_bindgen_test]
fn test_stats_display_without_container_is_noop() {
    let display = DomStatsDisplay::new(document(), ".no-such-stats");
    display.show(&TextStats::from_text("ignored"));
}

// === Mounting ===

fn test_config(key: &str) -> EditorConfig {
    EditorConfig {
        draft_key: key.to_owned(),
        excerpt_field_id: None,
        ..EditorConfig::default()
    }
}

#[wasm_bindgen_test]
fn test_mount_replaces_field() {
    let container = fixture(
        r#"<form action="/save"><textarea id="mount-test" name="content"><p>Existing</p></textarea></form>"#,
    );
    let editor = MountedEditor::mount("mount-test", test_config("scribe-test-mount")).unwrap();

    let surface = document().get_element_by_id("mount-test-editor").unwrap();
    assert_eq!(surface.inner_html(), "<p>Existing</p>");
    assert!(container.query_selector(".editor-toolbar").unwrap().is_some());

    let field = FormField::by_id(&document(), "mount-test").unwrap();
    assert_eq!(
        field.element().style().get_property_value("display").unwrap(),
        "none"
    );

    editor.set_content("<p>Updated</p>").unwrap();
    assert_eq!(field.value(), "<p>Updated</p>");
    assert_eq!(editor.stats().words, 1);

    editor.unmount();
    assert!(document().get_element_by_id("mount-test-editor").is_none());
    assert!(container.query_selector(".editor-toolbar").unwrap().is_none());
    assert_eq!(field.value(), "<p>Updated</p>");
    container.remove();
}

#[wasm_bindgen_test]
fn test_mount_empty_field_uses_placeholder() {
    let container = fixture(r#"<form><textarea id="mount-empty"></textarea></form>"#);
    let key = "scribe-test-empty";
    LocalDraftStorage.remove(key);

    let editor = MountedEditor::mount("mount-empty", test_config(key)).unwrap();
    assert_eq!(editor.content(), "<p>Start writing...</p>");

    editor.save_draft().unwrap();
    let stored = DraftStore::new(LocalDraftStorage, key).load().unwrap().unwrap();
    assert_eq!(stored.content, "<p>Start writing...</p>");

    editor.discard_draft();
    assert!(LocalDraftStorage.get(key).unwrap().is_none());
    editor.unmount();
    container.remove();
}

// === Mounted event wiring ===

fn surface_of(field_id: &str) -> HtmlElement {
    document()
        .get_element_by_id(&format!("{field_id}-editor"))
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
}

fn wired_config(key: &str, excerpt_id: &str) -> EditorConfig {
    LocalDraftStorage.remove(key);
    EditorConfig {
        draft_key: key.to_owned(),
        excerpt_field_id: Some(excerpt_id.to_owned()),
        ..EditorConfig::default()
    }
}

#[wasm_bindgen_test]
fn test_input_event_syncs_field_stats_and_excerpt() {
    let container = fixture(
        r#"<form>
             <textarea id="input-wiring"></textarea>
             <input id="input-excerpt" value="">
             <div class="input-stats"><span class="word-count"></span><span class="char-count"></span></div>
           </form>"#,
    );
    let config = EditorConfig {
        stats_selector: ".input-stats".to_owned(),
        ..wired_config("scribe-test-input", "input-excerpt")
    };
    let editor = MountedEditor::mount("input-wiring", config).unwrap();

    let surface = surface_of("input-wiring");
    surface.set_inner_html("<p>Tom &amp; Jerry</p>");
    surface.dispatch_event(&Event::new("input").unwrap()).unwrap();

    let field = FormField::by_id(&document(), "input-wiring").unwrap();
    assert_eq!(field.value(), "<p>Tom &amp; Jerry</p>");
    assert_eq!(editor.stats().words, 3);
    let words = container.query_selector(".word-count").unwrap().unwrap();
    assert_eq!(words.text_content().as_deref(), Some("3 words"));

    let excerpt = FormField::by_id(&document(), "input-excerpt").unwrap();
    assert_eq!(excerpt.value(), "Tom & Jerry");

    // only an empty excerpt is filled
    surface.set_inner_html("<p>Something else</p>");
    surface.dispatch_event(&Event::new("input").unwrap()).unwrap();
    assert_eq!(excerpt.value(), "Tom & Jerry");
    assert_eq!(field.value(), "<p>Something else</p>");

    editor.unmount();
    container.remove();
}

#[wasm_bindgen_test]
fn test_edit_without_input_event_fills_excerpt() {
    let container = fixture(
        r#"<form><textarea id="edit-wiring"></textarea><input id="edit-excerpt" value=""></form>"#,
    );
    let editor =
        MountedEditor::mount("edit-wiring", wired_config("scribe-test-edit", "edit-excerpt"))
            .unwrap();

    editor.set_content("<p>Pasted post body</p>").unwrap();

    let excerpt = FormField::by_id(&document(), "edit-excerpt").unwrap();
    assert_eq!(excerpt.value(), "Pasted post body");
    editor.unmount();
    container.remove();
}

#[wasm_bindgen_test]
fn test_submit_event_syncs_and_clears_draft() {
    let container = fixture(
        r#"<form action="/save"><textarea id="submit-wiring"><p>Start</p></textarea></form>"#,
    );
    let key = "scribe-test-submit";
    let editor =
        MountedEditor::mount("submit-wiring", wired_config(key, "submit-excerpt")).unwrap();
    editor.save_draft().unwrap();
    assert!(LocalDraftStorage.get(key).unwrap().is_some());

    // changed without an input event, so only submit can sync it
    surface_of("submit-wiring").set_inner_html("<p>Final</p>");
    let form = container.query_selector("form").unwrap().unwrap();
    form.dispatch_event(&Event::new("submit").unwrap()).unwrap();

    let field = FormField::by_id(&document(), "submit-wiring").unwrap();
    assert_eq!(field.value(), "<p>Final</p>");
    assert_eq!(LocalDraftStorage.get(key).unwrap(), None);
    editor.unmount();
    container.remove();
}

#[wasm_bindgen_test]
fn test_paste_is_intercepted_and_synced() {
    let container = fixture(r#"<form><textarea id="paste-wiring"><p>Body</p></textarea></form>"#);
    let editor =
        MountedEditor::mount("paste-wiring", wired_config("scribe-test-paste", "paste-excerpt"))
            .unwrap();

    let data = DataTransfer::new().unwrap();
    data.set_data("text/plain", "plain words").unwrap();
    let init = ClipboardEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    init.set_clipboard_data(Some(&data));
    let event = ClipboardEvent::new_with_event_init_dict("paste", &init).unwrap();

    let surface = surface_of("paste-wiring");
    let proceeded = surface.dispatch_event(&event).unwrap();
    assert!(!proceeded, "rich paste should be suppressed");
    assert!(event.default_prevented());

    let field = FormField::by_id(&document(), "paste-wiring").unwrap();
    assert_eq!(field.value(), surface.inner_html());
    editor.unmount();
    container.remove();
}

// === Page enhancements ===

#[wasm_bindgen_test]
fn test_flash_close_removes_message_immediately() {
    let container = fixture(
        r#"<div class="flash-message" id="flash-close-test">Saved<button class="flash-close">x</button></div>"#,
    );
    let page = PageEnhancements::install(PageConfig::default());

    container
        .query_selector(".flash-close")
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
    assert!(document().get_element_by_id("flash-close-test").is_none());

    drop(page);
    container.remove();
}

#[wasm_bindgen_test]
async fn test_flash_messages_fade_after_delay() {
    let container = fixture(r#"<div class="flash-message" id="flash-fade-test">Saved</div>"#);
    let page = PageEnhancements::install(PageConfig {
        flash_hide_after_ms: 10,
        flash_fade_ms: 10,
        ..PageConfig::default()
    });
    assert!(document().get_element_by_id("flash-fade-test").is_some());

    TimeoutFuture::new(100).await;
    assert!(document().get_element_by_id("flash-fade-test").is_none());

    drop(page);
    container.remove();
}
