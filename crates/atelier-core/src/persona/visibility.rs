//! Section visibility rules.
//!
//! A pure derivation from draft state and the model-override snapshot,
//! re-evaluated on every change. Cheap by construction: O(field count), no
//! memoization.
//!
//! Hiding a section never clears its stored values; they are simply ignored
//! at submission via the chunk-count normalization rule.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::draft::PersonaDraft;
use crate::ports::ModelOverrideOptions;

/// Identifies a form section the rendering layer may show or hide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    /// Citation toggle; retrieval-dependent
    Citations,
    /// Document-set selection; retrieval-dependent
    DataAccess,
    /// Model override picker; requires known options and a default model
    ModelSelection,
    /// Chunk count and relevance filter; retrieval-dependent
    RetrievalCustomization,
    /// Always shown
    StarterMessages,
}

/// Derives the set of currently visible sections.
pub fn visible_sections(
    draft: &PersonaDraft,
    model_options: &ModelOverrideOptions,
) -> BTreeSet<Section> {
    let mut sections = BTreeSet::new();
    sections.insert(Section::StarterMessages);

    if !draft.disable_retrieval {
        sections.insert(Section::Citations);
        sections.insert(Section::DataAccess);
        sections.insert(Section::RetrievalCustomization);
    }

    if !model_options.options.is_empty() && model_options.default_model.is_some() {
        sections.insert(Section::ModelSelection);
    }

    sections
}
