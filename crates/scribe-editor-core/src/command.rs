//! Editing commands.
//!
//! `EditorCommand` is the closed set of instructions the façade can issue
//! against an editable surface. Each command knows which host instruction
//! it maps to, so the mapping is testable without a live surface.

use crate::error::EditorError;

/// Character-level formatting toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InlineStyle {
    Bold,
    Italic,
    Underline,
    Strikethrough,
}

/// Block-level formats applied to the block containing the caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockFormat {
    Paragraph,
    /// Heading level, 1-6.
    Heading(u8),
    Blockquote,
    Preformatted,
}

impl BlockFormat {
    /// Build a heading format, rejecting levels outside 1-6.
    pub fn heading(level: u8) -> Result<Self, EditorError> {
        if (1..=6).contains(&level) {
            Ok(Self::Heading(level))
        } else {
            Err(EditorError::InvalidHeading(level))
        }
    }

    /// The block tag name passed to the host.
    pub fn tag(&self) -> String {
        match self {
            Self::Paragraph => "p".to_owned(),
            Self::Heading(level) => format!("h{level}"),
            Self::Blockquote => "blockquote".to_owned(),
            Self::Preformatted => "pre".to_owned(),
        }
    }

    /// Parse a block tag name (`p`, `h2`, `<h3>`, ...).
    pub fn from_tag(tag: &str) -> Result<Self, EditorError> {
        let tag = tag.trim_start_matches('<').trim_end_matches('>');
        match tag.to_ascii_lowercase().as_str() {
            "p" => Ok(Self::Paragraph),
            "blockquote" => Ok(Self::Blockquote),
            "pre" => Ok(Self::Preformatted),
            other => {
                let level = other
                    .strip_prefix('h')
                    .and_then(|n| n.parse::<u8>().ok())
                    .ok_or_else(|| EditorError::UnknownCommand(format!("formatBlock {tag}")))?;
                Self::heading(level)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Unordered,
    Ordered,
}

/// All editing instructions the façade can issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorCommand {
    /// Toggle an inline style on the selection.
    SetInlineStyle(InlineStyle),
    /// Change the format of the current block.
    SetBlockFormat(BlockFormat),
    /// Toggle a list around the current block.
    SetList(ListKind),
    /// Wrap the selection in a link.
    SetLink { url: String },
    /// Remove links from the selection.
    RemoveLink,
    /// Insert an image reference at the caret.
    InsertImage { url: String },
    /// Insert a markup fragment at the caret.
    InsertHtml { html: String },
    /// Insert plain text at the caret.
    InsertText { text: String },
    Undo,
    Redo,
}

/// A browser editing instruction: a command name plus optional value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostInstruction {
    pub name: &'static str,
    pub value: Option<String>,
}

impl HostInstruction {
    fn bare(name: &'static str) -> Self {
        Self { name, value: None }
    }

    fn with_value(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            value: Some(value.into()),
        }
    }
}

impl EditorCommand {
    /// Map this command onto the host's built-in instruction set.
    pub fn host_instruction(&self) -> HostInstruction {
        match self {
            Self::SetInlineStyle(InlineStyle::Bold) => HostInstruction::bare("bold"),
            Self::SetInlineStyle(InlineStyle::Italic) => HostInstruction::bare("italic"),
            Self::SetInlineStyle(InlineStyle::Underline) => HostInstruction::bare("underline"),
            Self::SetInlineStyle(InlineStyle::Strikethrough) => {
                HostInstruction::bare("strikeThrough")
            }
            Self::SetBlockFormat(format) => HostInstruction::with_value("formatBlock", format.tag()),
            Self::SetList(ListKind::Unordered) => HostInstruction::bare("insertUnorderedList"),
            Self::SetList(ListKind::Ordered) => HostInstruction::bare("insertOrderedList"),
            Self::SetLink { url } => HostInstruction::with_value("createLink", url),
            Self::RemoveLink => HostInstruction::bare("unlink"),
            Self::InsertImage { url } => HostInstruction::with_value("insertImage", url),
            Self::InsertHtml { html } => HostInstruction::with_value("insertHTML", html),
            Self::InsertText { text } => HostInstruction::with_value("insertText", text),
            Self::Undo => HostInstruction::bare("undo"),
            Self::Redo => HostInstruction::bare("redo"),
        }
    }

    /// Parse a host instruction name and value back into a command.
    ///
    /// Instructions that need a value (`createLink`, `insertImage`, ...)
    /// fail without one. `createLink` and `insertImage` are normally routed
    /// through `ToolbarAction` instead, which prompts or uploads first.
    pub fn from_host(name: &str, value: Option<&str>) -> Result<Self, EditorError> {
        let need = |value: Option<&str>| {
            value
                .filter(|v| !v.is_empty())
                .map(str::to_owned)
                .ok_or_else(|| EditorError::UnknownCommand(format!("{name} without a value")))
        };

        Ok(match name {
            "bold" => Self::SetInlineStyle(InlineStyle::Bold),
            "italic" => Self::SetInlineStyle(InlineStyle::Italic),
            "underline" => Self::SetInlineStyle(InlineStyle::Underline),
            "strikeThrough" => Self::SetInlineStyle(InlineStyle::Strikethrough),
            "formatBlock" => Self::SetBlockFormat(BlockFormat::from_tag(&need(value)?)?),
            "insertUnorderedList" => Self::SetList(ListKind::Unordered),
            "insertOrderedList" => Self::SetList(ListKind::Ordered),
            "createLink" => Self::SetLink { url: need(value)? },
            "unlink" => Self::RemoveLink,
            "insertImage" => Self::InsertImage { url: need(value)? },
            "insertHTML" => Self::InsertHtml { html: need(value)? },
            "insertText" => Self::InsertText {
                text: value.unwrap_or_default().to_owned(),
            },
            "undo" => Self::Undo,
            "redo" => Self::Redo,
            other => return Err(EditorError::UnknownCommand(other.to_owned())),
        })
    }
}
