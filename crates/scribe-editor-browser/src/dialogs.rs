//! Blocking window dialogs.

use web_sys::Window;

use scribe_editor_core::Prompter;

use crate::dom::describe;

/// `Prompter` backed by `window.prompt`, `confirm` and `alert`.
#[derive(Clone)]
pub struct WindowPrompter {
    window: Window,
}

impl WindowPrompter {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Default for WindowPrompter {
    fn default() -> Self {
        Self::new(gloo_utils::window())
    }
}

impl Prompter for WindowPrompter {
    fn prompt(&self, message: &str, default: &str) -> Option<String> {
        self.window
            .prompt_with_message_and_default(message, default)
            .unwrap_or_else(|e| {
                tracing::warn!("prompt failed: {}", describe(&e));
                None
            })
    }

    fn confirm(&self, message: &str) -> bool {
        self.window.confirm_with_message(message).unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            tracing::warn!("alert failed: {}", describe(&e));
        }
    }
}
