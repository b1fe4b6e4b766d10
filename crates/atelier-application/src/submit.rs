//! Submission coordination.
//!
//! Assembles the validated draft into a persistence request, dispatches to
//! the create or update gateway call, and maps the result to success
//! navigation or a user-visible failure. The draft is never mutated here;
//! on failure it stays intact for correction and retry.

use std::sync::Arc;

use atelier_core::persona::{PersonaDraft, PersonaUpsertRequest};
use atelier_core::ports::{Navigator, NotificationKind, Notifier, PersonaGateway};
use serde::{Deserialize, Serialize};

use crate::editor::EditorMode;

/// Where the navigator is sent after confirmed success.
pub const PERSONA_TABLE_PATH: &str = "/admin/personas";

/// Outcome of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitOutcome {
    /// All persistence responses reported ok; navigation was issued.
    Success,
    /// The cross-field blocker (or an in-flight submission) stopped the
    /// attempt before any gateway call.
    Blocked(String),
    /// The gateway was called and reported a failure; the draft is intact
    /// and submission is re-enabled.
    Failed(String),
}

/// Dispatches validated drafts to the persistence gateway.
pub struct SubmissionCoordinator {
    gateway: Arc<dyn PersonaGateway>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
}

impl SubmissionCoordinator {
    pub fn new(
        gateway: Arc<dyn PersonaGateway>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            gateway,
            notifier,
            navigator,
        }
    }

    /// Submits the draft.
    ///
    /// An explicit cross-field error aborts immediately with a blocking
    /// user-facing message and no gateway call. Otherwise the request is
    /// built (applying the chunk-count normalization) and dispatched to the
    /// create or update call per `mode`; success requires every returned
    /// response to report ok.
    pub async fn submit(
        &self,
        mode: &EditorMode,
        draft: &PersonaDraft,
        cross_field_error: Option<&str>,
    ) -> SubmitOutcome {
        if let Some(message) = cross_field_error {
            tracing::info!("submission blocked by validation: {}", message);
            self.notifier.notify(NotificationKind::Error, message);
            return SubmitOutcome::Blocked(message.to_string());
        }

        let request = PersonaUpsertRequest::from_draft(draft);
        let response = match mode {
            EditorMode::Create => self.gateway.create_persona(request).await,
            EditorMode::Update {
                persona_id,
                prompt_id,
            } => {
                self.gateway
                    .update_persona(persona_id, prompt_id.as_deref(), request)
                    .await
            }
        };

        match response {
            Ok(response) if response.all_ok() => {
                let message = match mode {
                    EditorMode::Create => "Persona created",
                    EditorMode::Update { .. } => "Persona updated",
                };
                tracing::info!("persona submission succeeded");
                self.notifier.notify(NotificationKind::Success, message);
                self.navigator.navigate(PERSONA_TABLE_PATH);
                SubmitOutcome::Success
            }
            Ok(response) => {
                let message = response
                    .first_error()
                    .unwrap_or("Persona could not be saved")
                    .to_string();
                tracing::warn!("persona submission failed: {}", message);
                self.notifier.notify(NotificationKind::Error, &message);
                SubmitOutcome::Failed(message)
            }
            Err(e) => {
                let message = e.to_string();
                tracing::warn!("persona submission failed: {}", message);
                self.notifier.notify(NotificationKind::Error, &message);
                SubmitOutcome::Failed(message)
            }
        }
    }
}
