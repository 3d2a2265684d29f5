//! Toolbar descriptors.
//!
//! The toolbar is a declarative, ordered list of buttons and separators.
//! Build order is display order. Rendering lives in the platform layer.

use smol_str::SmolStr;

use crate::command::{BlockFormat, EditorCommand, InlineStyle, ListKind};
use crate::error::EditorError;

/// What a toolbar control does when activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolbarAction {
    /// A command with all arguments known up front.
    Command(EditorCommand),
    /// Ask the user for a URL, then link the selection.
    CreateLink,
    /// Pick and upload an image, then insert it.
    InsertImage,
}

impl ToolbarAction {
    /// Parse a `data-command` / `data-value` attribute pair.
    pub fn parse(command: &str, value: Option<&str>) -> Result<Self, EditorError> {
        match command {
            "createLink" if value.is_none_or(str::is_empty) => Ok(Self::CreateLink),
            "insertImage" if value.is_none_or(str::is_empty) => Ok(Self::InsertImage),
            _ => EditorCommand::from_host(command, value).map(Self::Command),
        }
    }

    /// The `data-command` attribute for this action.
    pub fn data_command(&self) -> &'static str {
        match self {
            Self::Command(cmd) => cmd.host_instruction().name,
            Self::CreateLink => "createLink",
            Self::InsertImage => "insertImage",
        }
    }

    /// The `data-value` attribute for this action, if it carries one.
    pub fn data_value(&self) -> Option<String> {
        match self {
            Self::Command(cmd) => cmd.host_instruction().value,
            Self::CreateLink | Self::InsertImage => None,
        }
    }
}

/// How a button presents itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonLabel {
    /// Icon font class list, rendered as `<i class="...">`.
    Icon(SmolStr),
    /// Short text such as `H2`.
    Text(SmolStr),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarButton {
    pub action: ToolbarAction,
    pub label: ButtonLabel,
    /// Tooltip text.
    pub title: SmolStr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolbarItem {
    Button(ToolbarButton),
    Separator,
}

impl ToolbarItem {
    pub fn icon(action: ToolbarAction, icon: &str, title: &str) -> Self {
        Self::Button(ToolbarButton {
            action,
            label: ButtonLabel::Icon(icon.into()),
            title: title.into(),
        })
    }

    pub fn text(action: ToolbarAction, text: &str, title: &str) -> Self {
        Self::Button(ToolbarButton {
            action,
            label: ButtonLabel::Text(text.into()),
            title: title.into(),
        })
    }

    pub fn as_button(&self) -> Option<&ToolbarButton> {
        match self {
            Self::Button(button) => Some(button),
            Self::Separator => None,
        }
    }
}

/// The standard toolbar layout.
pub fn default_toolbar() -> Vec<ToolbarItem> {
    use ToolbarAction::Command;

    let style = |s| Command(EditorCommand::SetInlineStyle(s));
    let block = |f| Command(EditorCommand::SetBlockFormat(f));
    let list = |k| Command(EditorCommand::SetList(k));

    vec![
        ToolbarItem::icon(style(InlineStyle::Bold), "fas fa-bold", "Bold"),
        ToolbarItem::icon(style(InlineStyle::Italic), "fas fa-italic", "Italic"),
        ToolbarItem::icon(style(InlineStyle::Underline), "fas fa-underline", "Underline"),
        ToolbarItem::Separator,
        ToolbarItem::text(block(BlockFormat::Heading(2)), "H2", "Heading 2"),
        ToolbarItem::text(block(BlockFormat::Heading(3)), "H3", "Heading 3"),
        ToolbarItem::text(block(BlockFormat::Paragraph), "P", "Paragraph"),
        ToolbarItem::Separator,
        ToolbarItem::icon(list(ListKind::Unordered), "fas fa-list-ul", "Bullet List"),
        ToolbarItem::icon(list(ListKind::Ordered), "fas fa-list-ol", "Numbered List"),
        ToolbarItem::Separator,
        ToolbarItem::icon(ToolbarAction::CreateLink, "fas fa-link", "Insert Link"),
        ToolbarItem::icon(Command(EditorCommand::RemoveLink), "fas fa-unlink", "Remove Link"),
        ToolbarItem::Separator,
        ToolbarItem::icon(ToolbarAction::InsertImage, "fas fa-image", "Insert Image"),
        ToolbarItem::Separator,
        ToolbarItem::icon(Command(EditorCommand::Undo), "fas fa-undo", "Undo"),
        ToolbarItem::icon(Command(EditorCommand::Redo), "fas fa-redo", "Redo"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_toolbar_layout() {
        let items = default_toolbar();
        let layout: Vec<String> = items
            .iter()
            .map(|item| match item {
                ToolbarItem::Separator => "|".to_owned(),
                ToolbarItem::Button(b) => match b.action.data_value() {
                    Some(v) => format!("{}={}", b.action.data_command(), v),
                    None => b.action.data_command().to_owned(),
                },
            })
            .collect();

        assert_eq!(
            layout,
            [
                "bold",
                "italic",
                "underline",
                "|",
                "formatBlock=h2",
                "formatBlock=h3",
                "formatBlock=p",
                "|",
                "insertUnorderedList",
                "insertOrderedList",
                "|",
                "createLink",
                "unlink",
                "|",
                "insertImage",
                "|",
                "undo",
                "redo",
            ]
        );
    }

    #[test]
    fn test_text_and_icon_labels() {
        let items = default_toolbar();
        let h2 = items[4].as_button().unwrap();
        assert_eq!(h2.label, ButtonLabel::Text("H2".into()));
        assert_eq!(h2.title, "Heading 2");

        let bold = items[0].as_button().unwrap();
        assert_eq!(bold.label, ButtonLabel::Icon("fas fa-bold".into()));
    }

    #[test]
    fn test_parse_attribute_pairs() {
        assert_eq!(
            ToolbarAction::parse("createLink", None).unwrap(),
            ToolbarAction::CreateLink
        );
        assert_eq!(
            ToolbarAction::parse("insertImage", Some("")).unwrap(),
            ToolbarAction::InsertImage
        );
        assert_eq!(
            ToolbarAction::parse("formatBlock", Some("h3")).unwrap(),
            ToolbarAction::Command(EditorCommand::SetBlockFormat(BlockFormat::Heading(3)))
        );
        assert!(ToolbarAction::parse("fontSize", Some("7")).is_err());
    }

    #[test]
    fn test_every_default_button_round_trips_through_attributes() {
        for item in default_toolbar() {
            let Some(button) = item.as_button() else {
                continue;
            };
            let value = button.action.data_value();
            let parsed =
                ToolbarAction::parse(button.action.data_command(), value.as_deref()).unwrap();
            assert_eq!(parsed, button.action);
        }
    }
}
