//! Dictionary entries: a computed profile paired with a user-owned overlay.
//!
//! The two halves never share fields. Re-profiling replaces the profile and
//! carries the overlay forward untouched.

use serde::{Deserialize, Serialize};

use crate::{SemanticType, Sensitivity, VariableProfile};

/// Number of distinct values rendered in the dictionary "Values / Codes" cell.
pub const DICTIONARY_VALUE_LIMIT: usize = 10;

/// Editorial metadata owned by the user once created.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Overlay {
    pub label: String,
    pub definition: String,
    pub unit: String,
    pub sensitivity: Sensitivity,
    pub source: String,
    pub notes: String,
    pub missing_code: String,
    /// Whether label/definition/unit were seeded from the controlled vocabulary.
    #[serde(default)]
    pub dhs_mapped: bool,
    /// Explicit type chosen by the user; the only way to reach `date`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_override: Option<SemanticType>,
}

impl Overlay {
    pub fn is_labelled(&self) -> bool {
        !self.label.is_empty() && !self.definition.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub profile: VariableProfile,
    pub overlay: Overlay,
}

impl DictionaryEntry {
    pub fn name(&self) -> &str {
        &self.profile.name
    }

    /// The user override when present, otherwise the inferred type.
    pub fn effective_type(&self) -> SemanticType {
        self.overlay
            .type_override
            .unwrap_or(self.profile.inferred_type)
    }

    /// Comma-separated codes for binary and categorical entries, empty otherwise.
    pub fn values_display(&self) -> String {
        if !self.effective_type().is_coded() {
            return String::new();
        }
        self.profile
            .values
            .iter()
            .take(DICTIONARY_VALUE_LIMIT)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// An assembled codebook for one dataset, in header order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Codebook {
    /// Display name of the source dataset (usually the file name).
    pub dataset: String,
    /// Data rows in the profiled table.
    pub rows: usize,
    pub entries: Vec<DictionaryEntry>,
}

impl Codebook {
    pub fn get(&self, name: &str) -> Option<&DictionaryEntry> {
        self.entries.iter().find(|entry| entry.name() == name)
    }

    pub fn variable_count(&self) -> usize {
        self.entries.len()
    }
}
