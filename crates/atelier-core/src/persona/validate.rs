//! Draft validation engine.
//!
//! An ordered list of pure per-field rules plus one cross-field rule,
//! re-evaluated on every state transition. No schema library, no
//! reflection: each rule is a plain function from the draft to zero or more
//! field errors.

use serde::{Deserialize, Serialize};

use super::draft::{PersonaDraft, MAX_NUM_CHUNKS};

/// Shared message for the system-prompt-or-task-prompt rule, surfaced both
/// inline near the prompt fields and as a submission blocker.
pub const PROMPT_REQUIRED_MESSAGE: &str =
    "Must provide at least one of System Prompt or Task Prompt";

/// Identifies the draft field an error is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    Name,
    Description,
    NumChunks,
    /// Indexed by the starter message's position in the list
    StarterMessage(usize),
}

/// A single inline validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: FieldId,
    pub message: String,
}

impl FieldError {
    fn new(field: FieldId, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// The result of evaluating every rule against the current draft.
///
/// Field errors are displayed inline and never block submission on their
/// own; the cross-field error blocks submission and also feeds the notice
/// shown next to the preview.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub field_errors: Vec<FieldError>,
    pub cross_field_error: Option<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.field_errors.is_empty() && self.cross_field_error.is_none()
    }

    /// The inline message for one field, if any.
    pub fn error_for(&self, field: FieldId) -> Option<&str> {
        self.field_errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

type Rule = fn(&PersonaDraft) -> Vec<FieldError>;

/// Per-field rules, evaluated in order.
const RULES: &[Rule] = &[
    require_name,
    require_description,
    bound_num_chunks,
    complete_starter_messages,
];

/// Evaluates every per-field rule and the cross-field rule.
pub fn evaluate(draft: &PersonaDraft) -> ValidationReport {
    let mut field_errors = Vec::new();
    for rule in RULES {
        field_errors.extend(rule(draft));
    }
    ValidationReport {
        field_errors,
        cross_field_error: cross_field_rule(draft),
    }
}

/// The system-prompt-or-task-prompt rule.
///
/// Returns an explicit verdict: `Some(message)` is failure, `None` is
/// success. Consumers must never interpret a missing explicit verdict as
/// success; there is no third state.
pub fn cross_field_rule(draft: &PersonaDraft) -> Option<String> {
    if draft.system_prompt.is_empty() && draft.task_prompt.is_empty() {
        Some(PROMPT_REQUIRED_MESSAGE.to_string())
    } else {
        None
    }
}

fn require_name(draft: &PersonaDraft) -> Vec<FieldError> {
    if draft.name.trim().is_empty() {
        vec![FieldError::new(
            FieldId::Name,
            "Name is required and cannot be empty",
        )]
    } else {
        Vec::new()
    }
}

fn require_description(draft: &PersonaDraft) -> Vec<FieldError> {
    if draft.description.trim().is_empty() {
        vec![FieldError::new(
            FieldId::Description,
            "Description is required and cannot be empty",
        )]
    } else {
        Vec::new()
    }
}

fn bound_num_chunks(draft: &PersonaDraft) -> Vec<FieldError> {
    match draft.num_chunks {
        Some(n) if n > MAX_NUM_CHUNKS => vec![FieldError::new(
            FieldId::NumChunks,
            format!("Number of chunks must be at most {}", MAX_NUM_CHUNKS),
        )],
        _ => Vec::new(),
    }
}

fn complete_starter_messages(draft: &PersonaDraft) -> Vec<FieldError> {
    draft
        .starter_messages
        .items()
        .iter()
        .enumerate()
        .filter(|(_, msg)| !msg.is_complete())
        .map(|(index, _)| {
            FieldError::new(
                FieldId::StarterMessage(index),
                "Starter messages require a name, description, and message",
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persona::model::StarterMessage;

    fn valid_draft() -> PersonaDraft {
        let mut draft = PersonaDraft::empty();
        draft.name = "Support Bot".to_string();
        draft.description = "helps support".to_string();
        draft.system_prompt = "You are helpful.".to_string();
        draft
    }

    #[test]
    fn test_valid_draft_passes() {
        let report = evaluate(&valid_draft());
        assert!(report.is_valid());
    }

    #[test]
    fn test_both_prompts_empty_fails_cross_field() {
        let mut draft = valid_draft();
        draft.system_prompt = String::new();
        draft.task_prompt = String::new();

        let report = evaluate(&draft);
        assert_eq!(
            report.cross_field_error.as_deref(),
            Some(PROMPT_REQUIRED_MESSAGE)
        );
        assert!(!report.is_valid());
    }

    #[test]
    fn test_exactly_one_prompt_passes_cross_field() {
        let mut draft = valid_draft();
        draft.system_prompt = String::new();
        draft.task_prompt = "Answer questions.".to_string();
        assert_eq!(cross_field_rule(&draft), None);

        draft.system_prompt = "You are helpful.".to_string();
        draft.task_prompt = String::new();
        assert_eq!(cross_field_rule(&draft), None);
    }

    #[test]
    fn test_cross_field_verdict_is_always_explicit() {
        // Every draft yields either Some(message) or None; a caller that
        // treats Some(_) as failure can never observe a silent invalid
        // state.
        let mut draft = valid_draft();
        draft.system_prompt = String::new();
        draft.task_prompt = String::new();
        assert!(cross_field_rule(&draft).is_some());

        draft.task_prompt = "x".to_string();
        assert!(cross_field_rule(&draft).is_none());
    }

    #[test]
    fn test_name_required() {
        let mut draft = valid_draft();
        draft.name = "   ".to_string();
        let report = evaluate(&draft);
        assert!(report.error_for(FieldId::Name).is_some());
    }

    #[test]
    fn test_description_required() {
        let mut draft = valid_draft();
        draft.description = String::new();
        let report = evaluate(&draft);
        assert!(report.error_for(FieldId::Description).is_some());
    }

    #[test]
    fn test_num_chunks_upper_bound() {
        let mut draft = valid_draft();
        draft.num_chunks = Some(21);
        let report = evaluate(&draft);
        assert!(report.error_for(FieldId::NumChunks).is_some());

        draft.num_chunks = Some(20);
        let report = evaluate(&draft);
        assert!(report.error_for(FieldId::NumChunks).is_none());

        draft.num_chunks = None;
        let report = evaluate(&draft);
        assert!(report.is_valid());
    }

    #[test]
    fn test_incomplete_starter_message_is_flagged_by_index() {
        let mut draft = valid_draft();
        draft.starter_messages.push(StarterMessage {
            name: "Greeting".to_string(),
            description: "Say hello".to_string(),
            message: "Hello!".to_string(),
        });
        draft.starter_messages.push(StarterMessage::blank());

        let report = evaluate(&draft);
        assert!(report.error_for(FieldId::StarterMessage(0)).is_none());
        assert!(report.error_for(FieldId::StarterMessage(1)).is_some());
    }
}
