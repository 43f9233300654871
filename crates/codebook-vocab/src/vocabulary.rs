use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Standard label, definition and unit for one known variable code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub code: String,
    pub label: String,
    pub definition: String,
    pub unit: String,
}

/// A small controlled vocabulary keyed by variable code.
///
/// Lookups are exact and case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    /// Display name (e.g., "DHS").
    pub name: String,
    entries: BTreeMap<String, VocabularyEntry>,
}

impl Vocabulary {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: BTreeMap::new(),
        }
    }

    /// Adds an entry, returning the one it replaced.
    pub fn insert(&mut self, entry: VocabularyEntry) -> Option<VocabularyEntry> {
        self.entries.insert(lookup_key(&entry.code), entry)
    }

    pub fn lookup(&self, column: &str) -> Option<&VocabularyEntry> {
        self.entries.get(&lookup_key(column))
    }

    pub fn contains(&self, column: &str) -> bool {
        self.lookup(column).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries ordered by lowercase code.
    pub fn iter(&self) -> impl Iterator<Item = &VocabularyEntry> {
        self.entries.values()
    }
}

fn lookup_key(code: &str) -> String {
    code.to_lowercase()
}
