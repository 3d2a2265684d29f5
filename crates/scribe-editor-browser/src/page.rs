//! Enhancements for the rest of the blog page.
//!
//! Each feature is optional: when its elements aren't on the page it is
//! skipped silently.

use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, FileReader, HtmlElement, HtmlInputElement, Node};

use scribe_editor_core::{
    Debouncer, LikeButtonView, LikeResponse, PageConfig, Prompter, like_endpoint,
    reading_time_label, reading_time_minutes, word_count,
};

use crate::dialogs::WindowPrompter;
use crate::dom::{self, query, query_all};
use crate::timer::TimeoutScheduler;
use crate::upload::resolve_url;

/// Listeners and timers installed by [`PageEnhancements::install`].
///
/// Dropping it removes the listeners and cancels pending timers.
pub struct PageEnhancements {
    _listeners: Vec<EventListener>,
    _timers: Vec<Timeout>,
    _search: Option<Rc<Debouncer<TimeoutScheduler>>>,
}

impl PageEnhancements {
    pub fn install(config: PageConfig) -> Self {
        let document = gloo_utils::document();
        let mut listeners = Vec::new();
        let mut timers = Vec::new();

        mobile_menu(&document, &mut listeners);
        flash_messages(&document, &config, &mut listeners, &mut timers);
        like_buttons(&document, &config, &mut listeners);
        image_previews(&document, &mut listeners);
        delete_confirmations(&document, &config, &mut listeners);
        let search = search_debounce(&document, &config, &mut listeners);
        reading_time(&document, &config);

        tracing::debug!(listeners = listeners.len(), "page enhancements installed");
        Self {
            _listeners: listeners,
            _timers: timers,
            _search: search,
        }
    }
}

fn as_html(element: Element) -> Option<HtmlElement> {
    element.dyn_into::<HtmlElement>().ok()
}

fn set_menu_open(menu: &Element, open: bool) {
    let body_style = gloo_utils::body().style();
    let result = if open {
        menu.class_list().add_1("active").and_then(|()| body_style.set_property("overflow", "hidden"))
    } else {
        menu.class_list().remove_1("active").and_then(|()| body_style.remove_property("overflow").map(drop))
    };
    if let Err(e) = result {
        tracing::debug!("menu toggle: {}", dom::describe(&e));
    }
}

fn mobile_menu(document: &Document, listeners: &mut Vec<EventListener>) {
    let (Some(button), Some(menu)) = (
        query(document, ".mobile-menu-btn"),
        query(document, ".mobile-menu"),
    ) else {
        return;
    };

    let open_menu = menu.clone();
    listeners.push(EventListener::new(&button, "click", move |_| {
        set_menu_open(&open_menu, true);
    }));

    if let Some(close) = query(document, ".close-menu-btn") {
        let menu = menu.clone();
        listeners.push(EventListener::new(&close, "click", move |_| {
            set_menu_open(&menu, false);
        }));
    }

    listeners.push(EventListener::new(document, "click", move |event| {
        let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
        let inside = menu.contains(target.as_ref()) || button.contains(target.as_ref());
        if !inside {
            set_menu_open(&menu, false);
        }
    }));
}

fn fade_out(message: HtmlElement, fade_ms: u32) {
    let style = message.style();
    let faded = style
        .set_property("transition", &format!("opacity {fade_ms}ms"))
        .and_then(|()| style.set_property("opacity", "0"));
    if let Err(e) = faded {
        tracing::debug!("flash fade: {}", dom::describe(&e));
    }
    Timeout::new(fade_ms, move || message.remove()).forget();
}

fn flash_messages(
    document: &Document,
    config: &PageConfig,
    listeners: &mut Vec<EventListener>,
    timers: &mut Vec<Timeout>,
) {
    let messages: Vec<HtmlElement> = query_all(document, ".flash-message")
        .into_iter()
        .filter_map(as_html)
        .collect();
    if messages.is_empty() {
        return;
    }

    for close in query_all(document, ".flash-close") {
        listeners.push(EventListener::new(&close, "click", move |event| {
            let message = event
                .current_target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.closest(".flash-message").ok().flatten());
            if let Some(message) = message {
                message.remove();
            }
        }));
    }

    let fade_ms = config.flash_fade_ms;
    timers.push(Timeout::new(config.flash_hide_after_ms, move || {
        for message in messages {
            // already dismissed by hand
            if message.is_connected() {
                fade_out(message, fade_ms);
            }
        }
    }));
}

fn like_buttons(document: &Document, config: &PageConfig, listeners: &mut Vec<EventListener>) {
    for button in query_all(document, ".like-btn") {
        let Some(post_id) = button.get_attribute("data-post-id") else {
            tracing::warn!("like button without data-post-id");
            continue;
        };
        let csrf = dom::csrf_token(document, &config.csrf_meta_name)
            .map(|token| (config.csrf_header.clone(), token));
        let target = button.clone();
        listeners.push(EventListener::new(&button, "click", move |_| {
            let button = target.clone();
            let post_id = post_id.clone();
            let csrf = csrf.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match toggle_like(&post_id, csrf).await {
                    Ok(response) => apply_like(&button, response.into()),
                    Err(e) => tracing::error!(post = %post_id, "error toggling like: {e}"),
                }
            });
        }));
    }
}

async fn toggle_like(
    post_id: &str,
    csrf: Option<(String, String)>,
) -> Result<LikeResponse, String> {
    let url = resolve_url(&like_endpoint(post_id))?;
    let mut builder = reqwest::Client::new()
        .post(url)
        .header("Content-Type", "application/json");
    #[cfg(target_arch = "wasm32")]
    {
        builder = builder.fetch_credentials_same_origin();
    }
    if let Some((header, token)) = &csrf {
        builder = builder.header(header.as_str(), token.as_str());
    }

    let response = builder.send().await.map_err(|e| e.to_string())?;
    if !response.status().is_success() {
        return Err(format!("server returned {}", response.status()));
    }
    response
        .json::<LikeResponse>()
        .await
        .map_err(|e| e.to_string())
}

fn apply_like(button: &Element, view: LikeButtonView) {
    let classes = button.class_list();
    let toggled = if view.liked {
        classes.add_1("liked")
    } else {
        classes.remove_1("liked")
    };
    if let Err(e) = toggled {
        tracing::debug!("like class toggle: {}", dom::describe(&e));
    }
    button.set_inner_html(&view.inner_html);
}

fn image_previews(document: &Document, listeners: &mut Vec<EventListener>) {
    let inputs = query_all(document, "input[type=\"file\"][accept*=\"image\"]")
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlInputElement>().ok());

    for input in inputs {
        let target = input.clone();
        listeners.push(EventListener::new(&input, "change", move |_| {
            let Some(file) = target.files().and_then(|files| files.get(0)) else {
                return;
            };
            if let Err(e) = show_preview(&target, &file) {
                tracing::warn!("image preview failed: {e}");
            }
        }));
    }
}

fn show_preview(input: &HtmlInputElement, file: &web_sys::File) -> Result<(), String> {
    let reader = FileReader::new().map_err(|e| dom::describe(&e))?;
    let loaded = reader.clone();
    let input = input.clone();
    EventListener::once(&reader, "load", move |_| {
        let Some(data_url) = loaded.result().ok().and_then(|r| r.as_string()) else {
            return;
        };
        if let Err(e) = render_preview(&input, &data_url) {
            tracing::warn!("image preview failed: {}", dom::describe(&e));
        }
    })
    .forget();
    reader.read_as_data_url(file).map_err(|e| dom::describe(&e))
}

fn render_preview(
    input: &HtmlInputElement,
    data_url: &str,
) -> Result<(), wasm_bindgen::JsValue> {
    let document = gloo_utils::document();
    let Some(parent) = input.parent_element() else {
        return Ok(());
    };
    let preview = match parent.query_selector(".image-preview")? {
        Some(existing) => existing,
        None => {
            let created = document.create_element("div")?;
            created.set_class_name("image-preview");
            parent.append_child(&created)?;
            created
        }
    };

    preview.set_inner_html("");
    let img = document.create_element("img")?;
    img.set_attribute("src", data_url)?;
    img.set_attribute("alt", "Preview")?;
    let remove = document.create_element("button")?;
    remove.set_attribute("type", "button")?;
    remove.set_class_name("remove-image");
    remove.set_text_content(Some("\u{00d7}"));
    preview.append_child(&img)?;
    preview.append_child(&remove)?;

    let input = input.clone();
    EventListener::once(&remove, "click", move |_| {
        input.set_value("");
        preview.remove();
    })
    .forget();
    Ok(())
}

fn delete_confirmations(
    document: &Document,
    config: &PageConfig,
    listeners: &mut Vec<EventListener>,
) {
    let prompter = WindowPrompter::default();
    for form in query_all(document, "form[action*=\"delete\"]") {
        let prompter = prompter.clone();
        let message = config.delete_confirmation.clone();
        let options = EventListenerOptions::enable_prevent_default();
        listeners.push(EventListener::new_with_options(
            &form,
            "submit",
            options,
            move |event| {
                if !prompter.confirm(&message) {
                    event.prevent_default();
                }
            },
        ));
    }
}

fn search_debounce(
    document: &Document,
    config: &PageConfig,
    listeners: &mut Vec<EventListener>,
) -> Option<Rc<Debouncer<TimeoutScheduler>>> {
    let input = query(document, ".search-input")?
        .dyn_into::<HtmlInputElement>()
        .ok()?;
    let form = input.form()?;

    let debouncer = Rc::new(Debouncer::new(
        TimeoutScheduler,
        config.search_debounce_ms,
        move || {
            if let Err(e) = form.submit() {
                tracing::warn!("search submit failed: {}", dom::describe(&e));
            }
        },
    ));
    let trigger = Rc::clone(&debouncer);
    listeners.push(EventListener::new(&input, "input", move |_| trigger.trigger()));
    Some(debouncer)
}

fn reading_time(document: &Document, config: &PageConfig) {
    let Some(content) = query(document, ".post-content") else {
        return;
    };
    let Some(meta) = query(document, ".post-meta-info") else {
        return;
    };

    let words = word_count(&content.text_content().unwrap_or_default());
    let label = reading_time_label(reading_time_minutes(words, config.words_per_minute));
    let Ok(badge) = document.create_element("span") else {
        return;
    };
    badge.set_class_name("reading-time");
    badge.set_inner_html(&format!("<i class=\"far fa-clock\"></i> {label}"));
    if let Err(e) = meta.append_child(&badge) {
        tracing::debug!("reading time badge: {}", dom::describe(&e));
    }
}
