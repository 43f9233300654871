//! Merges profiles, vocabulary lookups and prior overlays into dictionary entries.

use std::collections::HashMap;
use std::time::Instant;

use tracing::{debug, info};

use codebook_model::{Codebook, DictionaryEntry, Overlay, RawTable};
use codebook_profile::profile_table;
use codebook_vocab::Vocabulary;

use crate::AssembleOptions;

/// Builds dictionary entries for a table.
///
/// Statistics are always recomputed. The overlay of a column already present
/// in `previous` is copied verbatim; a new column gets a seeded overlay from
/// the vocabulary and the [`AssembleOptions`] defaults.
#[derive(Debug, Clone, Default)]
pub struct Assembler<'a> {
    vocabulary: Option<&'a Vocabulary>,
    options: AssembleOptions,
}

impl<'a> Assembler<'a> {
    pub fn new(vocabulary: Option<&'a Vocabulary>) -> Self {
        Self {
            vocabulary,
            options: AssembleOptions::default(),
        }
    }

    pub fn with_options(mut self, options: AssembleOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &AssembleOptions {
        &self.options
    }

    /// Overlay for a column seen for the first time.
    pub fn seed_overlay(&self, column: &str) -> Overlay {
        let mut overlay = Overlay {
            sensitivity: self.options.sensitivity_for(column),
            missing_code: self.options.default_missing_code.clone(),
            ..Overlay::default()
        };
        if let Some(entry) = self.vocabulary.and_then(|vocab| vocab.lookup(column)) {
            overlay.label = entry.label.clone();
            overlay.definition = entry.definition.clone();
            overlay.unit = entry.unit.clone();
            overlay.dhs_mapped = true;
        }
        overlay
    }

    /// One entry per column of `table`, in header order.
    ///
    /// Entries of `previous` whose column is gone are dropped. `previous` is
    /// only read.
    pub fn assemble(
        &self,
        table: &RawTable,
        previous: Option<&[DictionaryEntry]>,
    ) -> Vec<DictionaryEntry> {
        let start = Instant::now();
        let mut prior: HashMap<&str, &Overlay> = HashMap::new();
        for entry in previous.unwrap_or_default() {
            prior.entry(entry.name()).or_insert(&entry.overlay);
        }

        let mut carried = 0usize;
        let entries: Vec<DictionaryEntry> = profile_table(table)
            .into_iter()
            .map(|profile| {
                let overlay = match prior.get(profile.name.as_str()) {
                    Some(overlay) => {
                        carried += 1;
                        debug!(column = %profile.name, "carried overlay forward");
                        (*overlay).clone()
                    }
                    None => self.seed_overlay(&profile.name),
                };
                DictionaryEntry { profile, overlay }
            })
            .collect();

        info!(
            columns = entries.len(),
            carried,
            dropped = prior.len() - carried,
            mapped = entries.iter().filter(|entry| entry.overlay.dhs_mapped).count(),
            duration_ms = start.elapsed().as_millis(),
            "assembled dictionary"
        );
        entries
    }
}

/// Assembles with default options.
pub fn assemble(
    table: &RawTable,
    vocabulary: Option<&Vocabulary>,
    previous: Option<&[DictionaryEntry]>,
) -> Vec<DictionaryEntry> {
    Assembler::new(vocabulary).assemble(table, previous)
}

/// Assembles a complete codebook document for `dataset`.
pub fn build_codebook(
    dataset: impl Into<String>,
    table: &RawTable,
    vocabulary: Option<&Vocabulary>,
    previous: Option<&Codebook>,
) -> Codebook {
    let previous = previous.map(|codebook| codebook.entries.as_slice());
    Codebook {
        dataset: dataset.into(),
        rows: table.row_count(),
        entries: assemble(table, vocabulary, previous),
    }
}
