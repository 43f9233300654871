//! Read-only views over an assembled dictionary: counts, filters and the
//! data-sharing checklist.

use serde::Serialize;

use codebook_model::{DictionaryEntry, SemanticType, Sensitivity};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DictionaryStats {
    pub variables: usize,
    /// Entries with both a label and a definition.
    pub labelled: usize,
    /// Entries seeded from the vocabulary.
    pub mapped: usize,
    /// Entries marked `PII` or `Highly Sensitive`.
    pub identifying: usize,
}

impl DictionaryStats {
    pub fn from_entries(entries: &[DictionaryEntry]) -> Self {
        entries.iter().fold(
            Self {
                variables: entries.len(),
                ..Self::default()
            },
            |mut stats, entry| {
                stats.labelled += usize::from(entry.overlay.is_labelled());
                stats.mapped += usize::from(entry.overlay.dhs_mapped);
                stats.identifying += usize::from(entry.overlay.sensitivity.is_identifying());
                stats
            },
        )
    }

    pub fn all_labelled(&self) -> bool {
        self.labelled == self.variables
    }
}

/// Entries that need a disclosure review, in header order.
pub fn sensitive_entries(entries: &[DictionaryEntry]) -> Vec<&DictionaryEntry> {
    entries
        .iter()
        .filter(|entry| entry.overlay.sensitivity.needs_review())
        .collect()
}

/// Search and facet filter for dictionary entries.
///
/// An empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFilter {
    /// Case-insensitive substring of the name, label or definition.
    pub search: Option<String>,
    /// Matched against the effective type.
    pub semantic_type: Option<SemanticType>,
    pub sensitivity: Option<Sensitivity>,
}

impl EntryFilter {
    pub fn matches(&self, entry: &DictionaryEntry) -> bool {
        if self
            .semantic_type
            .is_some_and(|wanted| entry.effective_type() != wanted)
        {
            return false;
        }
        if self
            .sensitivity
            .is_some_and(|wanted| entry.overlay.sensitivity != wanted)
        {
            return false;
        }
        match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(query) => {
                let query = query.to_lowercase();
                [
                    entry.name(),
                    entry.overlay.label.as_str(),
                    entry.overlay.definition.as_str(),
                ]
                .iter()
                .any(|field| field.to_lowercase().contains(&query))
            }
        }
    }

    pub fn apply<'a>(&self, entries: &'a [DictionaryEntry]) -> Vec<&'a DictionaryEntry> {
        entries.iter().filter(|entry| self.matches(entry)).collect()
    }
}

/// Items of the data-sharing checklist, in display order.
pub const CHECKLIST_ITEMS: [&str; 7] = [
    "All variables have labels and definitions",
    "Missing codes are documented",
    "PII variables identified and handled",
    "Value codes explained for categorical variables",
    "Units specified for continuous variables",
    "Data source documented for each variable",
    "Allowed range specified for validation",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChecklistStatus {
    Done,
    Pending,
    /// Not checked automatically.
    Manual,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChecklistItem {
    pub title: &'static str,
    pub status: ChecklistStatus,
}

/// Evaluates the data-sharing checklist for `entries`.
///
/// Only the labelling and PII items are checked automatically.
pub fn sharing_checklist(entries: &[DictionaryEntry]) -> Vec<ChecklistItem> {
    let stats = DictionaryStats::from_entries(entries);
    CHECKLIST_ITEMS
        .into_iter()
        .enumerate()
        .map(|(index, title)| {
            let status = match index {
                0 => automatic(stats.all_labelled()),
                2 => automatic(stats.identifying > 0),
                _ => ChecklistStatus::Manual,
            };
            ChecklistItem { title, status }
        })
        .collect()
}

fn automatic(done: bool) -> ChecklistStatus {
    if done {
        ChecklistStatus::Done
    } else {
        ChecklistStatus::Pending
    }
}
