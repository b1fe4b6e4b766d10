//! The persona editor session.
//!
//! `PersonaEditor` is the single owner of all mutable editing state: the
//! draft, the validation report, the preview notice, and the in-flight
//! submission guard. Every field-change handler follows the same control
//! flow: mutate the draft, re-evaluate validation, and — when the change
//! affects the assembled prompt — issue an asynchronous preview
//! recomputation.

use std::collections::BTreeSet;
use std::sync::Arc;

use atelier_core::error::Result;
use atelier_core::persona::{
    validate, visible_sections, DocumentSet, FieldError, FieldId, Persona, PersonaDraft, Section,
    StarterMessage, ValidationReport,
};
use atelier_core::ports::{
    DocumentSetProvider, ModelOverrideOptions, ModelOverrideProvider, Navigator, Notifier,
    PersonaGateway, PreviewBuilder,
};
use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;

use crate::preview::PreviewSynchronizer;
use crate::submit::{SubmissionCoordinator, SubmitOutcome};

/// Whether the editor creates a new persona or edits an existing one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditorMode {
    Create,
    Update {
        persona_id: String,
        /// Identifier of the persona's first prompt, if it had one
        prompt_id: Option<String>,
    },
}

/// Which sub-field of a starter message an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StarterMessageField {
    Name,
    Description,
    Message,
}

/// The collaborator ports one editor session is wired to.
///
/// All of these are owned by the hosting session and passed in explicitly;
/// in particular the notifier is a session-scoped port, not a process-wide
/// singleton.
pub struct EditorPorts {
    pub document_sets: Arc<dyn DocumentSetProvider>,
    pub model_overrides: Arc<dyn ModelOverrideProvider>,
    pub preview_builder: Arc<dyn PreviewBuilder>,
    pub gateway: Arc<dyn PersonaGateway>,
    pub notifier: Arc<dyn Notifier>,
    pub navigator: Arc<dyn Navigator>,
}

/// The stateful configuration-editing engine behind the persona form.
pub struct PersonaEditor {
    mode: EditorMode,
    draft: PersonaDraft,
    document_sets: Vec<DocumentSet>,
    model_options: ModelOverrideOptions,
    validation: ValidationReport,
    /// Cross-field failure mirrored next to the preview display,
    /// independent of per-field inline errors
    preview_notice: Option<String>,
    preview: PreviewSynchronizer,
    coordinator: SubmissionCoordinator,
    pending_preview: Option<JoinHandle<()>>,
    submitting: bool,
}

impl PersonaEditor {
    /// Mounts an editor session.
    ///
    /// Fetches the document-set and model-override snapshots once, seeds
    /// the draft (empty in create mode, from the persona and its first
    /// prompt in update mode), runs initial validation, and — in update
    /// mode — eagerly requests a preview from the stored prompt values so
    /// the preview is populated before any user edit.
    pub async fn mount(ports: EditorPorts, existing: Option<Persona>) -> Result<Self> {
        let document_sets = ports.document_sets.list_document_sets().await?;
        let model_options = ports.model_overrides.list_model_overrides().await?;

        let (mode, draft) = match existing {
            Some(persona) => {
                let prompt_id = persona.first_prompt().map(|p| p.id.clone());
                let draft = PersonaDraft::from_persona(&persona);
                (
                    EditorMode::Update {
                        persona_id: persona.id.clone(),
                        prompt_id,
                    },
                    draft,
                )
            }
            None => (EditorMode::Create, PersonaDraft::empty()),
        };
        tracing::debug!(?mode, "mounting persona editor");

        let preview = PreviewSynchronizer::new(ports.preview_builder);
        let coordinator =
            SubmissionCoordinator::new(ports.gateway, ports.notifier, ports.navigator);

        let mut editor = Self {
            mode,
            draft,
            document_sets,
            model_options,
            validation: ValidationReport::default(),
            preview_notice: None,
            preview,
            coordinator,
            pending_preview: None,
            submitting: false,
        };
        editor.revalidate();
        if editor.is_update() {
            editor.refresh_preview();
        }
        Ok(editor)
    }

    // ============================================================================
    // Read accessors
    // ============================================================================

    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    pub fn is_update(&self) -> bool {
        matches!(self.mode, EditorMode::Update { .. })
    }

    pub fn draft(&self) -> &PersonaDraft {
        &self.draft
    }

    pub fn validation(&self) -> &ValidationReport {
        &self.validation
    }

    /// Cross-field notice shown next to the preview (the second channel of
    /// the cross-field error).
    pub fn preview_notice(&self) -> Option<&str> {
        self.preview_notice.as_deref()
    }

    pub fn current_preview(&self) -> Option<String> {
        self.preview.current()
    }

    /// The document-set snapshot, in provider order.
    pub fn document_sets(&self) -> &[DocumentSet] {
        &self.document_sets
    }

    pub fn model_options(&self) -> &ModelOverrideOptions {
        &self.model_options
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Sections the rendering layer should currently show.
    pub fn visible_sections(&self) -> BTreeSet<Section> {
        visible_sections(&self.draft, &self.model_options)
    }

    /// Field errors whose owning section is currently visible.
    ///
    /// Errors on hidden sections stay in the full report (the values are
    /// preserved, not cleared) but are dormant for display purposes.
    pub fn live_field_errors(&self) -> Vec<&FieldError> {
        let sections = self.visible_sections();
        self.validation
            .field_errors
            .iter()
            .filter(|e| match e.field {
                FieldId::NumChunks => sections.contains(&Section::RetrievalCustomization),
                FieldId::StarterMessage(_) => sections.contains(&Section::StarterMessages),
                FieldId::Name | FieldId::Description => true,
            })
            .collect()
    }

    // ============================================================================
    // Field-change handlers
    // ============================================================================

    /// Sets the display name. Rejected in update mode: the name is
    /// immutable once the persona exists.
    pub fn set_name(&mut self, name: impl Into<String>) {
        if self.is_update() {
            tracing::debug!("ignoring name change: name is immutable once the persona exists");
            return;
        }
        self.draft.name = name.into();
        self.revalidate();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
        self.revalidate();
    }

    pub fn set_system_prompt(&mut self, system_prompt: impl Into<String>) {
        self.draft.system_prompt = system_prompt.into();
        self.revalidate();
        self.refresh_preview();
    }

    pub fn set_task_prompt(&mut self, task_prompt: impl Into<String>) {
        self.draft.task_prompt = task_prompt.into();
        self.revalidate();
        self.refresh_preview();
    }

    pub fn set_disable_retrieval(&mut self, disable_retrieval: bool) {
        self.draft.disable_retrieval = disable_retrieval;
        self.revalidate();
        self.refresh_preview();
    }

    pub fn set_num_chunks(&mut self, num_chunks: Option<u32>) {
        self.draft.num_chunks = num_chunks;
        self.revalidate();
    }

    pub fn set_include_citations(&mut self, include_citations: bool) {
        self.draft.include_citations = include_citations;
        self.revalidate();
    }

    pub fn set_llm_relevance_filter(&mut self, llm_relevance_filter: bool) {
        self.draft.llm_relevance_filter = llm_relevance_filter;
        self.revalidate();
    }

    pub fn set_model_override(&mut self, model: Option<String>) {
        self.draft.llm_model_version_override = model;
        self.revalidate();
    }

    /// Adds the document set if absent, removes it if present.
    pub fn toggle_document_set(&mut self, document_set_id: impl Into<String>) {
        self.draft.document_set_ids.toggle(document_set_id.into());
        self.revalidate();
    }

    /// Appends a blank starter-message row.
    pub fn push_starter_message(&mut self) {
        self.draft.starter_messages.push(StarterMessage::blank());
        self.revalidate();
    }

    /// Removes the starter message at the displayed row index.
    pub fn remove_starter_message(&mut self, index: usize) {
        self.draft.starter_messages.remove_at(index);
        self.revalidate();
    }

    pub fn update_starter_message(
        &mut self,
        index: usize,
        field: StarterMessageField,
        value: impl Into<String>,
    ) {
        if let Some(message) = self.draft.starter_messages.get_mut(index) {
            match field {
                StarterMessageField::Name => message.name = value.into(),
                StarterMessageField::Description => message.description = value.into(),
                StarterMessageField::Message => message.message = value.into(),
            }
        }
        self.revalidate();
    }

    // ============================================================================
    // Submission
    // ============================================================================

    /// Submits the current draft.
    ///
    /// Serialized: while one submission is pending no second one can be
    /// issued from the same draft. On failure the draft stays intact and
    /// submission is re-enabled.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.submitting {
            return SubmitOutcome::Blocked("A submission is already in progress".to_string());
        }
        self.submitting = true;
        let outcome = self
            .coordinator
            .submit(
                &self.mode,
                &self.draft,
                self.validation.cross_field_error.as_deref(),
            )
            .await;
        self.submitting = false;
        outcome
    }

    /// Awaits the most recently issued preview recomputation, if any.
    ///
    /// Hosts that want a settled preview (and tests) call this; the UI path
    /// simply lets requests land whenever they resolve.
    pub async fn settle_preview(&mut self) {
        if let Some(handle) = self.pending_preview.take() {
            let _ = handle.await;
        }
    }

    fn revalidate(&mut self) {
        self.validation = validate::evaluate(&self.draft);
        // Second channel of the cross-field error, consumed by the preview
        // display.
        self.preview_notice = self.validation.cross_field_error.clone();
    }

    fn refresh_preview(&mut self) {
        self.pending_preview = Some(self.preview.request(
            &self.draft.system_prompt,
            &self.draft.task_prompt,
            self.draft.disable_retrieval,
        ));
    }
}
