//! Persona upsert request model.
//!
//! The wire shape sent to the persistence gateway for both create and
//! update. Field names are part of the backend contract and must not be
//! renamed.

use serde::{Deserialize, Serialize};

use super::draft::PersonaDraft;
use super::model::StarterMessage;

/// The full draft plus the effective chunk count, as sent to the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersonaUpsertRequest {
    pub name: String,
    pub description: String,
    pub system_prompt: String,
    pub task_prompt: String,
    /// Already normalized: 0 when retrieval is disabled, the stored value
    /// otherwise, falling back to the default when unset
    pub num_chunks: u32,
    pub document_set_ids: Vec<String>,
    pub include_citations: bool,
    pub llm_relevance_filter: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub llm_model_version_override: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starter_messages: Option<Vec<StarterMessage>>,
}

impl PersonaUpsertRequest {
    /// Builds the request from the current draft, applying the single
    /// submission-time normalization rule for the chunk count.
    pub fn from_draft(draft: &PersonaDraft) -> Self {
        Self {
            name: draft.name.clone(),
            description: draft.description.clone(),
            system_prompt: draft.system_prompt.clone(),
            task_prompt: draft.task_prompt.clone(),
            num_chunks: draft.effective_num_chunks(),
            document_set_ids: draft.document_set_ids.items().to_vec(),
            include_citations: draft.include_citations,
            llm_relevance_filter: draft.llm_relevance_filter,
            llm_model_version_override: draft.llm_model_version_override.clone(),
            starter_messages: if draft.starter_messages.is_empty() {
                None
            } else {
                Some(draft.starter_messages.items().to_vec())
            },
        }
    }
}
