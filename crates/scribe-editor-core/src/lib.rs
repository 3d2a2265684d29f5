//! scribe-editor-core: rich text editing façade without browser dependencies.
//!
//! This crate provides:
//! - `EditorCommand` - the closed set of editing instructions a surface understands
//! - `ToolbarItem` / `default_toolbar` - declarative toolbar layout
//! - `RichTextEditor<S, F>` - the façade, generic over `EditableSurface` and `BackingField`
//! - `ImageInsertion` - the upload state machine
//! - `DraftStore` - autosave slot with corrupt-draft recovery
//! - `Debouncer` - cancel-and-reschedule timer over a `Scheduler`
//! - Text statistics, excerpts, reading time and HTML snippet builders
//!
//! The browser implementation of the platform traits lives in
//! `scribe-editor-browser`.

pub mod command;
pub mod config;
pub mod debounce;
pub mod draft;
pub mod editor;
pub mod error;
pub mod image;
pub mod like;
pub mod platform;
pub mod shortcuts;
pub mod snippets;
pub mod stats;
pub mod toolbar;

pub use command::{BlockFormat, EditorCommand, HostInstruction, InlineStyle, ListKind};
pub use config::{EditorConfig, PageConfig};
pub use debounce::{Debouncer, Scheduler};
pub use draft::{DraftSnapshot, DraftStorage, DraftStore, MemoryStorage};
pub use editor::{Dispatch, RichTextEditor};
pub use error::{EditorError, UploadError};
pub use image::{ImageInsertion, PickedFile, UploadRequest, UploadResponse, UploadState};
pub use like::{LikeButtonView, LikeResponse, like_endpoint};
pub use platform::{BackingField, EditableSurface, Prompter, StatsDisplay};
pub use shortcuts::{Modifiers, Shortcut, shortcut_for};
pub use smol_str::SmolStr;
pub use snippets::{code_block_html, escape_text, quote_html, table_html};
pub use stats::{
    TextStats, char_count, excerpt, fill_excerpt, reading_time_label, reading_time_minutes,
    strip_tags, truncate_text, word_count,
};
pub use toolbar::{ButtonLabel, ToolbarAction, ToolbarButton, ToolbarItem, default_toolbar};
