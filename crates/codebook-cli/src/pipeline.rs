//! Load, profile and assemble stages shared by the commands.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span, trace};

use codebook_core::build_codebook;
use codebook_ingest::{SourceTable, load_table};
use codebook_model::Codebook;
use codebook_report::load_codebook;
use codebook_vocab::{Vocabulary, default_vocabulary, load_vocabulary};

use crate::logging::redact_value;

/// Where controlled-vocabulary labels come from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum VocabularySource {
    /// `CODEBOOK_VOCABULARY` when set, otherwise the built-in DHS table.
    #[default]
    Default,
    File(PathBuf),
    Disabled,
}

impl VocabularySource {
    pub fn from_flags(path: Option<PathBuf>, disabled: bool) -> Self {
        match (path, disabled) {
            (_, true) => VocabularySource::Disabled,
            (Some(path), false) => VocabularySource::File(path),
            (None, false) => VocabularySource::Default,
        }
    }

    pub fn load(&self) -> Result<Option<Vocabulary>> {
        let vocabulary = match self {
            VocabularySource::Default => default_vocabulary().context("load default vocabulary")?,
            VocabularySource::File(path) => load_vocabulary(path)
                .with_context(|| format!("load vocabulary {}", path.display()))?,
            VocabularySource::Disabled => return Ok(None),
        };
        Ok(Some(vocabulary))
    }
}

/// Everything needed to build one codebook.
#[derive(Debug, Clone)]
pub struct ProfileRequest {
    pub input: PathBuf,
    /// Overrides the name reported by the source.
    pub dataset: Option<String>,
    pub previous: Option<PathBuf>,
    pub vocabulary: VocabularySource,
}

impl ProfileRequest {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            dataset: None,
            previous: None,
            vocabulary: VocabularySource::Default,
        }
    }
}

/// Loads the input, profiles it and merges the previous document.
pub fn build(request: &ProfileRequest) -> Result<Codebook> {
    let span = info_span!("build", input = %request.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let source = load_table(&request.input)
        .with_context(|| format!("load dataset {}", request.input.display()))?;
    let vocabulary = request.vocabulary.load()?;
    let previous = request
        .previous
        .as_deref()
        .map(|path| {
            load_codebook(path)
                .with_context(|| format!("load previous codebook {}", path.display()))
        })
        .transpose()?;

    let dataset = match &request.dataset {
        Some(name) => name.clone(),
        None => source.display_name(&fallback_name(&request.input)),
    };
    let codebook = build_codebook(dataset, &source.table, vocabulary.as_ref(), previous.as_ref());
    log_entries(&codebook, &source);
    info!(
        dataset = %codebook.dataset,
        rows = codebook.rows,
        variables = codebook.variable_count(),
        vocabulary = vocabulary.as_ref().map_or("none", |vocab| vocab.name.as_str()),
        carried_from = ?request.previous,
        duration_ms = start.elapsed().as_millis(),
        "codebook built"
    );
    Ok(codebook)
}

fn log_entries(codebook: &Codebook, source: &SourceTable) {
    for entry in &codebook.entries {
        let profile = &entry.profile;
        if let Some(reported) = source.column_types.get(entry.name()) {
            debug!(
                column = entry.name(),
                reported = %reported,
                inferred = %profile.inferred_type,
                "source reported a column type"
            );
        }
        trace!(
            column = entry.name(),
            example = redact_value(&profile.example),
            min = redact_value(&profile.min),
            max = redact_value(&profile.max),
            "column values"
        );
    }
}

fn fallback_name(input: &Path) -> String {
    input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "dataset".to_string())
}

/// Default export directory: `output/` next to the input.
pub fn default_output_dir(input: &Path) -> PathBuf {
    input
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
        .join("output")
}
