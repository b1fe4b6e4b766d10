//! Application layer for the Atelier persona editor.
//!
//! Wires the domain rules from `atelier-core` into one stateful editing
//! session per mounted form: the `PersonaEditor` owns the draft, the
//! `PreviewSynchronizer` keeps the derived prompt template eventually
//! consistent, and the `SubmissionCoordinator` turns the validated draft
//! into a persistence call.

pub mod editor;
pub mod preview;
pub mod submit;

pub use editor::{EditorMode, EditorPorts, PersonaEditor, StarterMessageField};
pub use preview::PreviewSynchronizer;
pub use submit::{SubmissionCoordinator, SubmitOutcome, PERSONA_TABLE_PATH};
