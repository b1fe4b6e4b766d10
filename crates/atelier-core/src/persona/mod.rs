//! Persona domain module.
//!
//! This module contains the persona entity models, the editable draft, its
//! validation and visibility rules, the generic list-field controller, and
//! the wire-compatible upsert request shape.
//!
//! # Module Structure
//!
//! - `model`: Persisted entities (`Persona`, `Prompt`, `StarterMessage`, `DocumentSet`)
//! - `draft`: The editable `PersonaDraft` and its seeding/normalization rules
//! - `validate`: Per-field rules plus the system-prompt-or-task-prompt cross-field rule
//! - `visibility`: Pure derivation of visible form sections from draft state
//! - `list_field`: Generic ordered-collection controller for the two sub-entity lists
//! - `request`: `PersonaUpsertRequest` sent to the persistence gateway

mod draft;
mod list_field;
mod model;
mod request;
pub mod validate;
pub mod visibility;

// Re-export public API
pub use draft::{PersonaDraft, DEFAULT_NUM_CHUNKS, MAX_NUM_CHUNKS};
pub use list_field::ListField;
pub use model::{DocumentSet, Persona, Prompt, StarterMessage};
pub use request::PersonaUpsertRequest;
pub use validate::{FieldError, FieldId, ValidationReport, PROMPT_REQUIRED_MESSAGE};
pub use visibility::{visible_sections, Section};
