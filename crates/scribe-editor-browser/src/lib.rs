//! Browser DOM layer for the scribe editor.
//!
//! This crate implements the `scribe-editor-core` platform traits on top of
//! the DOM and wires them to page events. It assumes a
//! `wasm32-unknown-unknown` target environment.
//!
//! # Architecture
//!
//! - `surface`: contenteditable element driven by the browser's editing commands
//! - `field`: the textarea/input the surface mirrors into
//! - `dialogs`: blocking prompt/confirm/alert
//! - `storage`: local storage draft slot
//! - `timer`: `gloo-timers` backed `Scheduler`
//! - `toolbar`: toolbar DOM rendering
//! - `upload`: file picker and multipart upload
//! - `mount`: the mounted editor and its event listeners
//! - `page`: enhancements for the rest of the page (menu, flash messages, likes, ...)
//!
//! # Re-exports
//!
//! This crate re-exports `scribe-editor-core` for convenience, so consumers
//! only need to depend on `scribe-editor-browser`.

// Re-export core crate
pub use scribe_editor_core;
pub use scribe_editor_core::*;

pub mod dialogs;
pub mod dom;
pub mod field;
pub mod mount;
pub mod page;
pub mod stats_display;
pub mod storage;
pub mod surface;
pub mod timer;
pub mod toolbar;
pub mod upload;

pub use dialogs::WindowPrompter;
pub use field::FormField;
pub use mount::{DomEditor, MountedEditor};
pub use page::PageEnhancements;
pub use stats_display::DomStatsDisplay;
pub use storage::LocalDraftStorage;
pub use surface::ContentEditable;
pub use timer::TimeoutScheduler;
pub use toolbar::{RenderedToolbar, render_toolbar};
