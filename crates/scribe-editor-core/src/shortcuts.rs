//! Keyboard shortcuts for the focused editor.
//!
//! Ctrl (or Cmd on Mac) combined with:
//! - `B` / `I` / `U`: bold, italic, underline
//! - `K`: insert link (prompts for the URL)
//! - `Z`: undo, `Shift+Z`: redo
//! - `S`: submit the enclosing form

use crate::command::{EditorCommand, InlineStyle};
use crate::toolbar::ToolbarAction;

/// Modifier key state for a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        ctrl: false,
        alt: false,
        shift: false,
        meta: false,
    };

    pub const CTRL: Self = Self {
        ctrl: true,
        ..Self::NONE
    };

    pub const META: Self = Self {
        meta: true,
        ..Self::NONE
    };

    pub const CTRL_SHIFT: Self = Self {
        ctrl: true,
        shift: true,
        ..Self::NONE
    };

    /// Ctrl or Cmd is held.
    pub fn primary(&self) -> bool {
        self.ctrl || self.meta
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shortcut {
    /// Dispatch like the equivalent toolbar button.
    Action(ToolbarAction),
    /// Click the form's submit button.
    Submit,
}

/// Look up the shortcut for a key press. `None` lets the key through.
pub fn shortcut_for(key: &str, modifiers: Modifiers) -> Option<Shortcut> {
    if !modifiers.primary() {
        return None;
    }

    let key = key.to_lowercase();
    let command = |c| Some(Shortcut::Action(ToolbarAction::Command(c)));
    match key.as_str() {
        "b" => command(EditorCommand::SetInlineStyle(InlineStyle::Bold)),
        "i" => command(EditorCommand::SetInlineStyle(InlineStyle::Italic)),
        "u" => command(EditorCommand::SetInlineStyle(InlineStyle::Underline)),
        "k" => Some(Shortcut::Action(ToolbarAction::CreateLink)),
        "z" if modifiers.shift => command(EditorCommand::Redo),
        "z" => command(EditorCommand::Undo),
        "s" => Some(Shortcut::Submit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_primary_modifier() {
        assert_eq!(shortcut_for("b", Modifiers::NONE), None);
        assert_eq!(
            shortcut_for(
                "b",
                Modifiers {
                    alt: true,
                    ..Modifiers::NONE
                }
            ),
            None
        );
    }

    #[test]
    fn test_ctrl_and_meta_are_equivalent() {
        let bold = Some(Shortcut::Action(ToolbarAction::Command(
            EditorCommand::SetInlineStyle(InlineStyle::Bold),
        )));
        assert_eq!(shortcut_for("b", Modifiers::CTRL), bold);
        assert_eq!(shortcut_for("B", Modifiers::META), bold);
    }

    #[test]
    fn test_undo_redo() {
        assert_eq!(
            shortcut_for("z", Modifiers::CTRL),
            Some(Shortcut::Action(ToolbarAction::Command(EditorCommand::Undo)))
        );
        assert_eq!(
            shortcut_for("Z", Modifiers::CTRL_SHIFT),
            Some(Shortcut::Action(ToolbarAction::Command(EditorCommand::Redo)))
        );
    }

    #[test]
    fn test_link_and_submit() {
        assert_eq!(
            shortcut_for("k", Modifiers::CTRL),
            Some(Shortcut::Action(ToolbarAction::CreateLink))
        );
        assert_eq!(shortcut_for("s", Modifiers::META), Some(Shortcut::Submit));
        assert_eq!(shortcut_for("q", Modifiers::CTRL), None);
    }
}
