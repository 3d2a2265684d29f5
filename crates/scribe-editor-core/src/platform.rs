//! Platform abstraction traits for the editor façade.
//!
//! These traits define the interface between the editor logic and the
//! page it runs in. The browser implementation uses a contenteditable
//! element, a textarea and the window's blocking dialogs; tests use
//! in-memory fakes.

use crate::command::EditorCommand;
use crate::stats::TextStats;

/// The interactive region presenting editable rich content.
pub trait EditableSurface {
    /// Serialized markup of the surface.
    fn inner_html(&self) -> String;

    /// Replace the surface content with markup.
    fn set_inner_html(&mut self, html: &str);

    /// Plain-text projection of the surface.
    fn text_content(&self) -> String;

    /// Give the surface keyboard focus.
    fn focus(&self);

    /// Apply a command at the current caret/selection.
    ///
    /// Returns whether the host reported the command as applied. Invalid
    /// state is a silent no-op, matching host semantics.
    fn execute(&mut self, command: &EditorCommand) -> bool;
}

/// The durable form value submitted with the page.
pub trait BackingField {
    fn value(&self) -> String;

    fn set_value(&mut self, value: &str);

    /// Hide the native input. It stays in the form for submission.
    fn hide(&mut self);
}

/// Blocking user dialogs.
pub trait Prompter {
    /// Ask for a line of text. `None` when dismissed.
    fn prompt(&self, message: &str, default: &str) -> Option<String>;

    /// Ask a yes/no question.
    fn confirm(&self, message: &str) -> bool;

    /// Show a message and wait for acknowledgement.
    fn alert(&self, message: &str);
}

/// Somewhere to show word and character counts.
pub trait StatsDisplay {
    fn show(&self, stats: &TextStats);
}
