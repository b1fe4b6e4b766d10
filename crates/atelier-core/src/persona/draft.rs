//! The editable persona draft.
//!
//! A `PersonaDraft` is held as in-memory state, owned exclusively by one
//! editor instance for its lifetime. It is created at editor mount (empty in
//! create mode, seeded from an existing persona in update mode), mutated
//! only through the editor's field-change handlers and list operations, and
//! discarded on successful submission or unmount.

use serde::{Deserialize, Serialize};

use super::list_field::ListField;
use super::model::{Persona, StarterMessage};

/// Chunk count used at submission when the operator left the field unset.
pub const DEFAULT_NUM_CHUNKS: u32 = 10;

/// Upper bound on the retrieved chunk count, to limit model input size.
pub const MAX_NUM_CHUNKS: u32 = 20;

/// The editable state behind the persona form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersonaDraft {
    /// Display name; immutable once the persona exists (the editor rejects
    /// name changes in update mode)
    pub name: String,
    pub description: String,
    /// Optional individually; at least one of `system_prompt` and
    /// `task_prompt` must be non-empty (cross-field rule)
    pub system_prompt: String,
    pub task_prompt: String,
    /// Hides retrieval-dependent sections and forces the effective chunk
    /// count to 0 at submission; stored values are preserved, not cleared
    pub disable_retrieval: bool,
    /// Referenced document-set identifiers; empty means "search all"
    pub document_set_ids: ListField<String>,
    /// `None` means "use default (10)" at submission; valid range is [0, 20]
    pub num_chunks: Option<u32>,
    pub include_citations: bool,
    pub llm_relevance_filter: bool,
    pub llm_model_version_override: Option<String>,
    pub starter_messages: ListField<StarterMessage>,
}

impl PersonaDraft {
    /// Creates the draft for a brand-new persona (create mode).
    pub fn empty() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            system_prompt: String::new(),
            task_prompt: String::new(),
            disable_retrieval: false,
            document_set_ids: ListField::new(),
            num_chunks: None,
            include_citations: true,
            llm_relevance_filter: false,
            llm_model_version_override: None,
            starter_messages: ListField::new(),
        }
    }

    /// Seeds the draft from an existing persona and its first prompt
    /// (update mode).
    ///
    /// A stored chunk count of exactly 0 means retrieval was disabled when
    /// the persona was saved, so `disable_retrieval` initializes to true.
    pub fn from_persona(persona: &Persona) -> Self {
        let prompt = persona.first_prompt();
        Self {
            name: persona.name.clone(),
            description: persona.description.clone(),
            system_prompt: prompt.map(|p| p.system_prompt.clone()).unwrap_or_default(),
            task_prompt: prompt.map(|p| p.task_prompt.clone()).unwrap_or_default(),
            disable_retrieval: persona.num_chunks == Some(0),
            document_set_ids: persona.document_set_ids.clone().into(),
            num_chunks: persona.num_chunks,
            include_citations: persona.include_citations,
            llm_relevance_filter: persona.llm_relevance_filter,
            llm_model_version_override: persona.llm_model_version_override.clone(),
            starter_messages: persona.starter_messages.clone().unwrap_or_default().into(),
        }
    }

    /// The chunk count actually sent at submission time.
    ///
    /// This is the single normalization rule: disabling retrieval forces 0
    /// regardless of the stored value, and an unset field falls back to the
    /// default. The stored `num_chunks` is never mutated by this rule.
    pub fn effective_num_chunks(&self) -> u32 {
        if self.disable_retrieval {
            0
        } else {
            self.num_chunks.unwrap_or(DEFAULT_NUM_CHUNKS)
        }
    }
}
