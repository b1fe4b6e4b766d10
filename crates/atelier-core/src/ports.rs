//! Collaborator ports.
//!
//! The editor engine owns no wire format, file format, or CLI surface; its
//! only protocol is the request/response shape of these traits. Each trait
//! is implemented by the hosting session: option lists are read-only
//! snapshots supplied once per editing session, preview building is
//! idempotent and side-effect-free on the backend, and persistence is the
//! create/update pair.
//!
//! Notification is an explicit port scoped to the hosting session, never a
//! module-level singleton.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::persona::{DocumentSet, PersonaUpsertRequest};

/// Model-override options reported by the hosting backend.
///
/// The model-selection section is shown only when `options` is non-empty
/// and `default_model` is known.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModelOverrideOptions {
    pub options: Vec<String>,
    pub default_model: Option<String>,
}

/// Inputs to the preview builder. Field names are part of the backend
/// contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PromptTemplateRequest {
    pub system_prompt: String,
    pub task_prompt: String,
    pub retrieval_disabled: bool,
}

/// The assembled prompt template returned by the preview builder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PromptTemplateResponse {
    pub final_prompt_template: String,
}

/// Outcome of one persistence sub-call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CallResult {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_body: Option<String>,
}

impl CallResult {
    pub fn success() -> Self {
        Self {
            ok: true,
            error_body: None,
        }
    }

    pub fn failure(body: impl Into<String>) -> Self {
        Self {
            ok: false,
            error_body: Some(body.into()),
        }
    }
}

/// The two independent responses yielded by a create or update call: one
/// for the prompt sub-resource and one for the persona resource. The
/// persona response may be absent in flows where it is not needed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpsertResponse {
    pub prompt: CallResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persona: Option<CallResult>,
}

impl UpsertResponse {
    /// Success requires every present result to report ok.
    pub fn all_ok(&self) -> bool {
        self.prompt.ok && self.persona.as_ref().is_none_or(|r| r.ok)
    }

    /// The first error body encountered, in response order.
    pub fn first_error(&self) -> Option<&str> {
        if !self.prompt.ok {
            return self.prompt.error_body.as_deref();
        }
        match &self.persona {
            Some(result) if !result.ok => result.error_body.as_deref(),
            _ => None,
        }
    }
}

/// Supplies the document sets a persona may be restricted to.
#[async_trait]
pub trait DocumentSetProvider: Send + Sync {
    /// Returns the available document sets in provider order.
    async fn list_document_sets(&self) -> Result<Vec<DocumentSet>>;
}

/// Supplies the model names an operator may override the default with.
#[async_trait]
pub trait ModelOverrideProvider: Send + Sync {
    async fn list_model_overrides(&self) -> Result<ModelOverrideOptions>;
}

/// Builds the fully assembled prompt template for the live preview.
#[async_trait]
pub trait PreviewBuilder: Send + Sync {
    /// Asynchronous, idempotent, side-effect-free on the backend.
    async fn build_final_prompt(
        &self,
        request: PromptTemplateRequest,
    ) -> Result<PromptTemplateResponse>;
}

/// Persists personas.
#[async_trait]
pub trait PersonaGateway: Send + Sync {
    /// Creates a new persona from the request.
    async fn create_persona(&self, request: PersonaUpsertRequest) -> Result<UpsertResponse>;

    /// Updates an existing persona, carrying its identifier and its first
    /// prompt's identifier if any.
    async fn update_persona(
        &self,
        persona_id: &str,
        existing_prompt_id: Option<&str>,
        request: PersonaUpsertRequest,
    ) -> Result<UpsertResponse>;
}

/// User-visible notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Error,
}

/// Fire-and-forget user notification channel; no acknowledgment.
pub trait Notifier: Send + Sync {
    fn notify(&self, kind: NotificationKind, message: &str);
}

/// External routing side effect, invoked only after confirmed submission
/// success.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}
