//! The rich text editor façade.
//!
//! `RichTextEditor` owns an editable surface and the backing field it
//! mirrors into. Every handled event ends with the field holding the
//! surface's serialized content, so a form submit never loses edits.

use chrono::{DateTime, Utc};

use crate::command::EditorCommand;
use crate::config::EditorConfig;
use crate::draft::{DraftStorage, DraftStore};
use crate::error::{EditorError, UploadError};
use crate::image::{ImageInsertion, UploadResponse};
use crate::platform::{BackingField, EditableSurface, Prompter, StatsDisplay};
use crate::stats::{TextStats, truncate_text};
use crate::toolbar::ToolbarAction;

/// Result of dispatching a toolbar action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// The command was issued against the surface.
    Applied(EditorCommand),
    /// The user abandoned a prompt; nothing changed.
    Cancelled,
    /// The caller should start an image insertion flow.
    ImageRequested,
}

pub struct RichTextEditor<S, F> {
    surface: S,
    field: F,
    config: EditorConfig,
    initial_value: String,
    stats: TextStats,
    stats_display: Option<Box<dyn StatsDisplay>>,
}

impl<S: EditableSurface, F: BackingField> RichTextEditor<S, F> {
    /// Seed the surface from the field (or the placeholder) and hide the
    /// field's native control.
    pub fn new(mut surface: S, mut field: F, config: EditorConfig) -> Self {
        let initial_value = field.value();
        let seed = if initial_value.is_empty() {
            config.placeholder.as_str()
        } else {
            initial_value.as_str()
        };
        surface.set_inner_html(seed);
        field.hide();

        let stats = TextStats::from_text(&surface.text_content());
        Self {
            surface,
            field,
            config,
            initial_value,
            stats,
            stats_display: None,
        }
    }

    /// Attach somewhere to show counts; it's updated immediately.
    pub fn with_stats_display(mut self, display: impl StatsDisplay + 'static) -> Self {
        display.show(&self.stats);
        self.stats_display = Some(Box::new(display));
        self
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn field(&self) -> &F {
        &self.field
    }

    /// Field value at construction time.
    pub fn initial_value(&self) -> &str {
        &self.initial_value
    }

    pub fn stats(&self) -> TextStats {
        self.stats
    }

    // === Content access ===

    pub fn content(&self) -> String {
        self.surface.inner_html()
    }

    pub fn set_content(&mut self, html: &str) {
        self.surface.set_inner_html(html);
        self.after_change();
    }

    /// Reset the surface to the placeholder.
    pub fn clear(&mut self) {
        let placeholder = self.config.placeholder.clone();
        self.set_content(&placeholder);
    }

    pub fn focus(&self) {
        self.surface.focus();
    }

    /// Excerpt for a field currently holding `existing`.
    ///
    /// Only an empty field gets one. Built from the surface's plain-text
    /// projection, so entities arrive decoded.
    pub fn excerpt_for(&self, existing: &str) -> Option<String> {
        existing
            .is_empty()
            .then(|| truncate_text(&self.surface.text_content(), self.config.excerpt_length))
    }

    // === Dispatch ===

    /// Issue a command against the surface, then resync.
    pub fn apply(&mut self, command: &EditorCommand) -> bool {
        self.surface.focus();
        let applied = self.surface.execute(command);
        if !applied {
            tracing::debug!(?command, "host ignored command");
        }
        self.after_change();
        applied
    }

    /// Handle a toolbar action.
    ///
    /// Links prompt for a URL first; an empty or dismissed prompt is a
    /// no-op. Images are handed back to the caller as
    /// `Dispatch::ImageRequested`.
    pub fn handle_action(&mut self, action: &ToolbarAction, prompter: &impl Prompter) -> Dispatch {
        self.surface.focus();

        let outcome = match action {
            ToolbarAction::Command(command) => {
                self.surface.execute(command);
                Dispatch::Applied(command.clone())
            }
            ToolbarAction::CreateLink => {
                match prompter.prompt(&self.config.link_prompt, &self.config.link_default) {
                    Some(url) if !url.trim().is_empty() => {
                        let command = EditorCommand::SetLink { url };
                        self.surface.execute(&command);
                        Dispatch::Applied(command)
                    }
                    _ => Dispatch::Cancelled,
                }
            }
            ToolbarAction::InsertImage => Dispatch::ImageRequested,
        };

        tracing::debug!(?outcome, "toolbar action");
        self.after_change();
        outcome
    }

    // === Surface events ===

    /// The surface content changed.
    pub fn on_input(&mut self) {
        self.after_change();
    }

    /// Insert pasted text without its formatting.
    pub fn on_paste(&mut self, text: &str) {
        self.apply(&EditorCommand::InsertText {
            text: text.to_owned(),
        });
    }

    /// Final copy into the field before the form submits, then drop the
    /// draft: the content is on its way to the server.
    pub fn on_submit<D: DraftStorage>(&mut self, drafts: Option<&DraftStore<D>>) {
        self.sync_field();
        if let Some(drafts) = drafts {
            drafts.clear();
        }
    }

    /// Copy the surface markup into the backing field.
    pub fn sync_field(&mut self) {
        let html = self.surface.inner_html();
        self.field.set_value(&html);
    }

    /// Recompute counts and push them to the display.
    pub fn refresh_stats(&mut self) -> TextStats {
        self.stats = TextStats::from_text(&self.surface.text_content());
        if let Some(display) = &self.stats_display {
            display.show(&self.stats);
        }
        self.stats
    }

    fn after_change(&mut self) {
        self.sync_field();
        self.refresh_stats();
    }

    // === Image insertion ===

    /// Feed an upload outcome into `flow` and apply it.
    ///
    /// On failure the error is logged and the user alerted; the surface is
    /// left untouched.
    pub fn complete_image_upload(
        &mut self,
        flow: &mut ImageInsertion,
        outcome: Result<UploadResponse, UploadError>,
        prompter: &impl Prompter,
    ) -> Result<bool, EditorError> {
        match flow.finish(outcome)? {
            Ok(command) => {
                self.apply(&command);
                Ok(true)
            }
            Err(error) => {
                tracing::error!(%error, "error uploading image");
                prompter.alert(&self.config.upload_failed_message);
                Ok(false)
            }
        }
    }

    // === Drafts ===

    pub fn save_draft<D: DraftStorage>(
        &self,
        drafts: &DraftStore<D>,
        now: DateTime<Utc>,
    ) -> Result<(), EditorError> {
        drafts.save(&self.surface.inner_html(), now)
    }

    /// Offer to restore a stored draft.
    ///
    /// Only asks when a non-empty draft exists and the field started out
    /// empty. Returns whether the draft was restored.
    pub fn offer_draft_restore<D: DraftStorage>(
        &mut self,
        drafts: &DraftStore<D>,
        prompter: &impl Prompter,
    ) -> Result<bool, EditorError> {
        let Some(draft) = drafts.load()? else {
            return Ok(false);
        };
        if draft.content.is_empty() || !self.initial_value.is_empty() {
            return Ok(false);
        }
        if !prompter.confirm(&self.config.restore_prompt) {
            tracing::debug!("draft restore declined");
            return Ok(false);
        }

        tracing::debug!(timestamp = %draft.timestamp, "restoring draft");
        self.set_content(&draft.content);
        Ok(true)
    }
}
