//! Mounting an editor over a form field.
//!
//! `MountedEditor::mount` replaces a `<textarea>` with a contenteditable
//! surface and a toolbar, then wires the page events:
//!
//! - surface `input`: resync, stats, excerpt fill and the autosave debounce
//! - surface `paste`: plain text only
//! - surface `keydown`: formatting shortcuts
//! - form `submit`: final sync and draft removal
//! - window `load`: offer to restore a stored draft
//!
//! Several host commands fire `input` synchronously while the editor is
//! already borrowed, so listeners use `try_borrow_mut` and skip the resync
//! when busy. The borrowing call resyncs itself and fills the excerpt once
//! its borrow is released.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use chrono::Utc;
use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{ClipboardEvent, Document, HtmlElement, KeyboardEvent};

use scribe_editor_core::{
    BackingField, Debouncer, Dispatch, DraftStore, EditorCommand, EditorConfig, EditorError,
    ImageInsertion, Modifiers, RichTextEditor, Shortcut, TextStats, ToolbarAction,
    default_toolbar, shortcut_for,
};

use crate::dialogs::WindowPrompter;
use crate::dom::{self, insert_after, insert_before};
use crate::field::FormField;
use crate::stats_display::DomStatsDisplay;
use crate::storage::LocalDraftStorage;
use crate::surface::ContentEditable;
use crate::timer::TimeoutScheduler;
use crate::toolbar::{RenderedToolbar, render_toolbar};
use crate::upload::{open_image_picker, picked_file, send_upload};

pub type DomEditor = RichTextEditor<ContentEditable, FormField>;

struct Shared {
    editor: RefCell<DomEditor>,
    drafts: DraftStore<LocalDraftStorage>,
    autosave: Debouncer<TimeoutScheduler>,
    prompter: WindowPrompter,
    document: Document,
}

/// An editor attached to the page. Dropping it detaches every listener and
/// cancels a pending autosave; the DOM is left as is.
pub struct MountedEditor {
    shared: Rc<Shared>,
    toolbar: RenderedToolbar,
    surface: HtmlElement,
    _listeners: Vec<EventListener>,
}

impl MountedEditor {
    /// Mount over the field with id `field_id`.
    pub fn mount(field_id: &str, config: EditorConfig) -> Result<Self, EditorError> {
        let document = gloo_utils::document();
        let field = FormField::by_id(&document, field_id)?;
        let surface = ContentEditable::create(&document, &format!("{field_id}-editor"))?;
        let surface_el = surface.element().clone();
        insert_after(field.element(), &surface_el)?;

        let stats_display = DomStatsDisplay::new(document.clone(), config.stats_selector.clone());
        let drafts = DraftStore::new(LocalDraftStorage, config.draft_key.clone());
        let autosave_delay = config.autosave_delay_ms;
        let editor = RichTextEditor::new(surface, field.clone(), config)
            .with_stats_display(stats_display);

        let shared = Rc::new_cyclic(|weak: &Weak<Shared>| {
            let weak = weak.clone();
            Shared {
                editor: RefCell::new(editor),
                drafts,
                autosave: Debouncer::new(TimeoutScheduler, autosave_delay, move || {
                    if let Some(shared) = weak.upgrade() {
                        shared.autosave_now();
                    }
                }),
                prompter: WindowPrompter::default(),
                document: document.clone(),
            }
        });

        let on_action: Rc<dyn Fn(&ToolbarAction)> = {
            let weak = Rc::downgrade(&shared);
            Rc::new(move |action: &ToolbarAction| {
                if let Some(shared) = weak.upgrade() {
                    Shared::dispatch(&shared, action);
                }
            })
        };
        let toolbar = render_toolbar(&document, &default_toolbar(), on_action)?;
        insert_before(&surface_el, toolbar.element())?;

        let mut listeners = vec![
            input_listener(&shared, &surface_el),
            paste_listener(&shared, &surface_el),
            keydown_listener(&shared, &surface_el),
        ];
        if let Some(form) = field.form() {
            let weak = Rc::downgrade(&shared);
            listeners.push(EventListener::new(&form, "submit", move |_| {
                if let Some(shared) = weak.upgrade() {
                    shared.autosave.cancel();
                    if let Ok(mut editor) = shared.editor.try_borrow_mut() {
                        editor.on_submit(Some(&shared.drafts));
                    }
                }
            }));
        }

        if document.ready_state() == "complete" {
            shared.offer_restore();
        } else {
            let weak = Rc::downgrade(&shared);
            listeners.push(EventListener::once(
                &gloo_utils::window(),
                "load",
                move |_| {
                    if let Some(shared) = weak.upgrade() {
                        shared.offer_restore();
                    }
                },
            ));
        }

        tracing::info!(field = field_id, "editor mounted");
        Ok(Self {
            shared,
            toolbar,
            surface: surface_el,
            _listeners: listeners,
        })
    }

    pub fn content(&self) -> String {
        self.shared.editor.borrow().content()
    }

    pub fn set_content(&self, html: &str) -> Result<(), EditorError> {
        self.with_editor(|editor| editor.set_content(html))
    }

    pub fn clear(&self) -> Result<(), EditorError> {
        self.with_editor(|editor| editor.clear())
    }

    pub fn focus(&self) {
        self.shared.editor.borrow().focus();
    }

    pub fn stats(&self) -> TextStats {
        self.shared.editor.borrow().stats()
    }

    /// Run a toolbar action as if its button was clicked.
    pub fn execute_action(&self, action: &ToolbarAction) {
        Shared::dispatch(&self.shared, action);
    }

    /// Apply a command directly, bypassing prompts.
    pub fn apply(&self, command: &EditorCommand) -> Result<bool, EditorError> {
        self.with_editor(|editor| editor.apply(command))
    }

    /// Write the draft immediately instead of waiting for the debounce.
    pub fn save_draft(&self) -> Result<(), EditorError> {
        self.shared.autosave.cancel();
        let editor = self.shared.editor.borrow();
        editor.save_draft(&self.shared.drafts, Utc::now())
    }

    pub fn discard_draft(&self) {
        self.shared.autosave.cancel();
        self.shared.drafts.clear();
    }

    /// Remove the surface and toolbar and show the original field again.
    pub fn unmount(self) {
        {
            let mut editor = self.shared.editor.borrow_mut();
            editor.sync_field();
            editor.field().show();
        }
        self.shared.autosave.cancel();
        self.toolbar.element().remove();
        self.surface.remove();
    }

    fn with_editor<T>(&self, f: impl FnOnce(&mut DomEditor) -> T) -> Result<T, EditorError> {
        let mut editor = self
            .shared
            .editor
            .try_borrow_mut()
            .map_err(|_| EditorError::Js("editor is busy".to_owned()))?;
        let result = f(&mut editor);
        drop(editor);
        self.shared.fill_excerpt();
        Ok(result)
    }
}

impl Shared {
    fn dispatch(shared: &Rc<Self>, action: &ToolbarAction) {
        let outcome = match shared.editor.try_borrow_mut() {
            Ok(mut editor) => editor.handle_action(action, &shared.prompter),
            Err(_) => {
                tracing::warn!(?action, "editor busy, dropping action");
                return;
            }
        };
        shared.fill_excerpt();
        if outcome == Dispatch::ImageRequested {
            Self::pick_image(shared);
        }
    }

    fn pick_image(shared: &Rc<Self>) {
        let weak = Rc::downgrade(shared);
        let picked = open_image_picker(&shared.document, move |file| {
            let Some(shared) = weak.upgrade() else {
                return;
            };
            let mut flow = ImageInsertion::new();
            let request = {
                let editor = shared.editor.borrow();
                let config = editor.config();
                let csrf = dom::csrf_token(&shared.document, &config.csrf_meta_name);
                flow.pick(picked_file(&file))
                    .and_then(|()| flow.begin_upload(config, csrf))
            };
            let request = match request {
                Ok(request) => request,
                Err(e) => {
                    tracing::error!("could not start upload: {e}");
                    return;
                }
            };

            wasm_bindgen_futures::spawn_local(async move {
                let outcome = send_upload(&request, &file).await;
                {
                    let Ok(mut editor) = shared.editor.try_borrow_mut() else {
                        tracing::error!("editor busy, dropping uploaded image");
                        return;
                    };
                    if let Err(e) =
                        editor.complete_image_upload(&mut flow, outcome, &shared.prompter)
                    {
                        tracing::error!("upload flow failed: {e}");
                    }
                }
                shared.fill_excerpt();
            });
        });
        if let Err(e) = picked {
            tracing::error!("could not open image picker: {e}");
        }
    }

    fn autosave_now(&self) {
        let Ok(editor) = self.editor.try_borrow() else {
            return;
        };
        match editor.save_draft(&self.drafts, Utc::now()) {
            Ok(()) => tracing::debug!(key = self.drafts.key(), "draft autosaved"),
            Err(e) => tracing::warn!("autosave failed: {e}"),
        }
    }

    fn offer_restore(&self) {
        let restored = match self.editor.try_borrow_mut() {
            Ok(mut editor) => editor.offer_draft_restore(&self.drafts, &self.prompter),
            Err(_) => return,
        };
        match restored {
            Ok(true) => self.fill_excerpt(),
            Ok(false) => {}
            Err(e) => tracing::warn!("could not restore draft: {e}"),
        }
    }

    /// Seed the excerpt field from the content while it's still empty.
    ///
    /// Must run after the editor borrow of the triggering edit is released;
    /// the `input` events fired during that edit can't read the editor.
    fn fill_excerpt(&self) {
        let Ok(editor) = self.editor.try_borrow() else {
            return;
        };
        let Some(id) = editor.config().excerpt_field_id.as_deref() else {
            return;
        };
        let Some(mut excerpt) = self
            .document
            .get_element_by_id(id)
            .and_then(|el| FormField::from_element(el).ok())
        else {
            return;
        };
        if let Some(text) = editor.excerpt_for(&excerpt.value()) {
            excerpt.set_value(&text);
        }
    }
}

fn input_listener(shared: &Rc<Shared>, surface: &HtmlElement) -> EventListener {
    let weak = Rc::downgrade(shared);
    EventListener::new(surface, "input", move |_| {
        let Some(shared) = weak.upgrade() else {
            return;
        };
        if let Ok(mut editor) = shared.editor.try_borrow_mut() {
            editor.on_input();
        }
        shared.fill_excerpt();
        shared.autosave.trigger();
    })
}

fn paste_listener(shared: &Rc<Shared>, surface: &HtmlElement) -> EventListener {
    let weak = Rc::downgrade(shared);
    let options = EventListenerOptions::enable_prevent_default();
    EventListener::new_with_options(surface, "paste", options, move |event| {
        let Some(shared) = weak.upgrade() else {
            return;
        };
        let Some(event) = event.dyn_ref::<ClipboardEvent>() else {
            return;
        };
        event.prevent_default();
        let text = event
            .clipboard_data()
            .and_then(|data| data.get_data("text/plain").ok())
            .unwrap_or_default();
        if let Ok(mut editor) = shared.editor.try_borrow_mut() {
            editor.on_paste(&text);
        }
        shared.fill_excerpt();
    })
}

fn keydown_listener(shared: &Rc<Shared>, surface: &HtmlElement) -> EventListener {
    let weak = Rc::downgrade(shared);
    let options = EventListenerOptions::enable_prevent_default();
    EventListener::new_with_options(surface, "keydown", options, move |event| {
        let Some(shared) = weak.upgrade() else {
            return;
        };
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let modifiers = Modifiers {
            ctrl: event.ctrl_key(),
            alt: event.alt_key(),
            shift: event.shift_key(),
            meta: event.meta_key(),
        };
        let Some(shortcut) = shortcut_for(&event.key(), modifiers) else {
            return;
        };
        event.prevent_default();

        match shortcut {
            Shortcut::Action(action) => Shared::dispatch(&shared, &action),
            Shortcut::Submit => submit_form(&shared),
        }
    })
}

/// Click the form's submit button so submit listeners and validation run.
fn submit_form(shared: &Shared) {
    let form = match shared.editor.try_borrow() {
        Ok(editor) => editor.field().form(),
        Err(_) => return,
    };
    let Some(form) = form else {
        tracing::debug!("editor field has no form to submit");
        return;
    };
    let button = form
        .query_selector("button[type=\"submit\"], input[type=\"submit\"]")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    match button {
        Some(button) => button.click(),
        None => {
            if let Err(e) = form.request_submit() {
                tracing::warn!("form submit failed: {}", dom::describe(&e));
            }
        }
    }
}
