//! User edits to the overlay half of a dictionary entry.
//!
//! Edits never touch the computed profile. They produce a new entry
//! sequence; the input is left as it was.

use serde::{Deserialize, Serialize};

use crate::{Codebook, DictionaryEntry, ModelError, Overlay, Result, SemanticType, Sensitivity};

/// A single overlay field assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum OverlayEdit {
    Label(String),
    Definition(String),
    Unit(String),
    Sensitivity(Sensitivity),
    Source(String),
    Notes(String),
    MissingCode(String),
    /// `None` clears the override and falls back to the inferred type.
    Type(Option<SemanticType>),
}

impl OverlayEdit {
    pub fn apply_to(self, overlay: &mut Overlay) {
        match self {
            OverlayEdit::Label(value) => overlay.label = value,
            OverlayEdit::Definition(value) => overlay.definition = value,
            OverlayEdit::Unit(value) => overlay.unit = value,
            OverlayEdit::Sensitivity(value) => overlay.sensitivity = value,
            OverlayEdit::Source(value) => overlay.source = value,
            OverlayEdit::Notes(value) => overlay.notes = value,
            OverlayEdit::MissingCode(value) => overlay.missing_code = value,
            OverlayEdit::Type(value) => overlay.type_override = value,
        }
    }
}

/// Returns a copy of `entries` with `edit` applied to the entry named `name`.
///
/// # Errors
///
/// [`ModelError::UnknownVariable`] when no entry has that name.
pub fn apply_edit(
    entries: &[DictionaryEntry],
    name: &str,
    edit: OverlayEdit,
) -> Result<Vec<DictionaryEntry>> {
    let position = entries
        .iter()
        .position(|entry| entry.name() == name)
        .ok_or_else(|| ModelError::UnknownVariable {
            name: name.to_string(),
        })?;
    let mut updated = entries.to_vec();
    edit.apply_to(&mut updated[position].overlay);
    Ok(updated)
}

impl Codebook {
    /// Returns a new codebook with `edit` applied to variable `name`.
    pub fn update(&self, name: &str, edit: OverlayEdit) -> Result<Codebook> {
        Ok(Codebook {
            dataset: self.dataset.clone(),
            rows: self.rows,
            entries: apply_edit(&self.entries, name, edit)?,
        })
    }
}
