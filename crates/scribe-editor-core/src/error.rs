//! Error types for the editor façade.

use miette::Diagnostic;

use crate::image::UploadState;

/// Main error type for editor operations.
#[derive(thiserror::Error, Debug, Diagnostic)]
pub enum EditorError {
    /// A toolbar or shortcut named an instruction the editor doesn't know.
    #[error("unknown editor command: {0}")]
    #[diagnostic(code(scribe::command::unknown))]
    UnknownCommand(String),

    /// Heading levels run from 1 to 6.
    #[error("invalid heading level: {0}")]
    #[diagnostic(code(scribe::command::heading))]
    InvalidHeading(u8),

    /// The draft slot could not be read, written or removed.
    #[error("draft storage error: {0}")]
    #[diagnostic(code(scribe::draft::storage))]
    Storage(String),

    /// Draft serialization/deserialization error
    #[error(transparent)]
    #[diagnostic(code(scribe::draft::serde))]
    Serde(#[from] serde_json::Error),

    /// The image insertion flow was driven out of order.
    #[error("cannot {action} while upload is {state:?}")]
    #[diagnostic(code(scribe::image::transition))]
    InvalidTransition {
        action: &'static str,
        state: UploadState,
    },

    /// Image upload failed
    #[error(transparent)]
    #[diagnostic(transparent)]
    Upload(#[from] UploadError),

    /// A required element was not found in the page.
    #[error("missing element: {0}")]
    #[diagnostic(code(scribe::dom::missing))]
    MissingElement(String),

    /// A browser API threw.
    #[error("javascript error: {0}")]
    #[diagnostic(code(scribe::dom::js))]
    Js(String),
}

/// Failures of the image upload round trip.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
#[non_exhaustive]
pub enum UploadError {
    #[error("network error: {0}")]
    #[diagnostic(code(scribe::upload::network))]
    Network(String),

    #[error("upload rejected with status {status}")]
    #[diagnostic(code(scribe::upload::rejected))]
    Rejected { status: u16 },

    #[error("upload response did not contain an image url")]
    #[diagnostic(code(scribe::upload::missing_url))]
    MissingUrl,

    #[error("could not decode upload response: {0}")]
    #[diagnostic(code(scribe::upload::decode))]
    Decode(String),
}
