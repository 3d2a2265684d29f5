//! Image insertion flow.
//!
//! One `ImageInsertion` tracks a single pick-upload-insert round trip:
//!
//! ```text
//! Idle -> FilePicked -> Uploading -> Inserted
//!                                 \-> Failed
//! ```
//!
//! The flow doesn't perform I/O itself; the platform layer opens the file
//! picker, sends the `UploadRequest` and feeds the outcome back in.
//! Concurrent flows are independent and never deduplicated.

use serde::{Deserialize, Serialize};

use crate::command::EditorCommand;
use crate::config::EditorConfig;
use crate::error::{EditorError, UploadError};

/// Metadata of the file the user selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedFile {
    pub name: String,
    pub mime_type: String,
    pub size: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UploadState {
    #[default]
    Idle,
    FilePicked(PickedFile),
    Uploading(PickedFile),
    Inserted { url: String },
    Failed(UploadError),
}

/// Everything needed to send the multipart upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub endpoint: String,
    /// Multipart field carrying the file.
    pub field: String,
    pub file: PickedFile,
    /// `(header name, token)` when the page provides a CSRF token.
    pub csrf: Option<(String, String)>,
}

/// JSON body returned by the upload endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ImageInsertion {
    state: UploadState,
}

impl ImageInsertion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &UploadState {
        &self.state
    }

    pub fn is_finished(&self) -> bool {
        matches!(
            self.state,
            UploadState::Inserted { .. } | UploadState::Failed(_)
        )
    }

    /// `Idle -> FilePicked`
    pub fn pick(&mut self, file: PickedFile) -> Result<(), EditorError> {
        match self.state {
            UploadState::Idle => {
                self.state = UploadState::FilePicked(file);
                Ok(())
            }
            _ => Err(self.invalid("pick a file")),
        }
    }

    /// `FilePicked -> Uploading`, producing the request to send.
    pub fn begin_upload(
        &mut self,
        config: &EditorConfig,
        csrf_token: Option<String>,
    ) -> Result<UploadRequest, EditorError> {
        let UploadState::FilePicked(file) = &self.state else {
            return Err(self.invalid("start upload"));
        };
        let file = file.clone();

        let request = UploadRequest {
            endpoint: config.upload_endpoint.clone(),
            field: config.upload_field.clone(),
            file: file.clone(),
            csrf: csrf_token.map(|token| (config.csrf_header.clone(), token)),
        };
        tracing::debug!(name = %file.name, size = file.size, "uploading image");
        self.state = UploadState::Uploading(file);
        Ok(request)
    }

    /// `Uploading -> Inserted | Failed`.
    ///
    /// Returns the command to apply on success. A response without a url
    /// counts as a failure.
    pub fn finish(
        &mut self,
        outcome: Result<UploadResponse, UploadError>,
    ) -> Result<Result<EditorCommand, UploadError>, EditorError> {
        if !matches!(self.state, UploadState::Uploading(_)) {
            return Err(self.invalid("finish upload"));
        }

        let result = outcome.and_then(|response| match response.url {
            Some(url) if !url.is_empty() => Ok(url),
            _ => Err(UploadError::MissingUrl),
        });

        match result {
            Ok(url) => {
                self.state = UploadState::Inserted { url: url.clone() };
                Ok(Ok(EditorCommand::InsertImage { url }))
            }
            Err(error) => {
                self.state = UploadState::Failed(error.clone());
                Ok(Err(error))
            }
        }
    }

    fn invalid(&self, action: &'static str) -> EditorError {
        EditorError::InvalidTransition {
            action,
            state: self.state.clone(),
        }
    }
}
