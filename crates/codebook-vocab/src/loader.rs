//! Vocabulary loading from CSV files.
//!
//! A vocabulary file has one row per code with the columns
//! `Code`, `Label`, `Definition` and `Unit` (header names are matched
//! case-insensitively; column order is free).

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use tracing::{debug, info};

use crate::{Result, Vocabulary, VocabularyEntry, VocabularyError, dhs_vocabulary};

/// Environment variable naming a vocabulary CSV to use by default.
pub const VOCABULARY_ENV_VAR: &str = "CODEBOOK_VOCABULARY";

const REQUIRED_COLUMNS: [&str; 4] = ["code", "label", "definition", "unit"];

/// Loads the vocabulary named by `CODEBOOK_VOCABULARY`, or the built-in DHS set.
pub fn default_vocabulary() -> Result<Vocabulary> {
    match std::env::var_os(VOCABULARY_ENV_VAR) {
        Some(path) if !path.is_empty() => load_vocabulary(&PathBuf::from(path)),
        _ => Ok(dhs_vocabulary()),
    }
}

/// Loads a vocabulary from a CSV file. The vocabulary is named after the file stem.
pub fn load_vocabulary(path: &Path) -> Result<Vocabulary> {
    let file = std::fs::File::open(path).map_err(|source| VocabularyError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let headers = reader
        .headers()
        .map_err(|error| VocabularyError::csv(path, &error))?
        .clone();
    let positions: BTreeMap<String, usize> = headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (name.trim_matches('\u{feff}').to_lowercase(), idx))
        .collect();
    for column in REQUIRED_COLUMNS {
        if !positions.contains_key(column) {
            return Err(VocabularyError::MissingColumn {
                path: path.to_path_buf(),
                column: column.to_string(),
            });
        }
    }
    let field = |record: &csv::StringRecord, column: &str| -> String {
        positions
            .get(column)
            .and_then(|idx| record.get(*idx))
            .unwrap_or("")
            .to_string()
    };

    let name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("vocabulary");
    let mut vocabulary = Vocabulary::new(name);
    for record in reader.records() {
        let record = record.map_err(|error| VocabularyError::csv(path, &error))?;
        let code = field(&record, "code");
        if code.is_empty() {
            debug!(path = %path.display(), "skipping vocabulary row without code");
            continue;
        }
        let entry = VocabularyEntry {
            code: code.clone(),
            label: field(&record, "label"),
            definition: field(&record, "definition"),
            unit: field(&record, "unit"),
        };
        if vocabulary.insert(entry).is_some() {
            return Err(VocabularyError::DuplicateCode {
                path: path.to_path_buf(),
                code,
            });
        }
    }
    info!(
        path = %path.display(),
        entries = vocabulary.len(),
        "loaded vocabulary"
    );
    Ok(vocabulary)
}
