use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::Local;
use tracing::{info, info_span};

use codebook_core::EntryFilter;
use codebook_model::{Codebook, OverlayEdit};
use codebook_report::{ReportFormat, ReportKind, load_codebook, save_codebook, write_reports};
use codebook_vocab::Vocabulary;

use codebook_cli::pipeline::{ProfileRequest, VocabularySource, build, default_output_dir};

use crate::cli::{CodebookArgs, DictionaryArgs, EditArgs, ProfileArgs, VocabularyArgs};
use crate::types::RunResult;

pub fn run_codebook(args: &CodebookArgs) -> Result<RunResult> {
    run_profile(
        &args.profile,
        ReportKind::Codebook,
        &args.format.formats(),
        EntryFilter::default(),
    )
}

pub fn run_dictionary(args: &DictionaryArgs) -> Result<RunResult> {
    let filter = EntryFilter {
        search: args.search.clone(),
        semantic_type: args.semantic_type,
        sensitivity: args.sensitivity,
    };
    run_profile(
        &args.profile,
        ReportKind::Dictionary,
        &args.format.formats(),
        filter,
    )
}

fn run_profile(
    args: &ProfileArgs,
    kind: ReportKind,
    formats: &[ReportFormat],
    filter: EntryFilter,
) -> Result<RunResult> {
    let span = info_span!("run", %kind);
    let _guard = span.enter();
    let request = ProfileRequest {
        input: args.input.clone(),
        dataset: args.dataset.clone(),
        previous: args.previous.clone(),
        vocabulary: vocabulary_source(&args.vocabulary),
    };
    let codebook = build(&request)?;

    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| default_output_dir(&args.input));
    let outputs = if args.dry_run {
        info!("dry run, skipping exports");
        Vec::new()
    } else {
        let generated = Local::now().date_naive();
        write_reports(&output_dir, &codebook, kind, formats, generated)
            .with_context(|| format!("write {kind} exports to {}", output_dir.display()))?
    };

    let saved = match &args.save {
        Some(path) => {
            save_codebook(path, &codebook)
                .with_context(|| format!("save codebook {}", path.display()))?;
            Some(path.clone())
        }
        None => None,
    };

    Ok(RunResult {
        kind,
        codebook,
        output_dir,
        outputs,
        saved,
        filter,
    })
}

/// Applies every requested edit and writes the document back.
pub fn run_edit(args: &EditArgs) -> Result<(Codebook, PathBuf)> {
    let edits = collect_edits(args);
    if edits.is_empty() {
        bail!("nothing to edit: pass at least one field option (see --help)");
    }
    let mut codebook = load_codebook(&args.document)
        .with_context(|| format!("load codebook {}", args.document.display()))?;
    for edit in edits {
        codebook = codebook
            .update(&args.variable, edit)
            .with_context(|| format!("edit {}", args.document.display()))?;
    }
    let target = args.output.clone().unwrap_or_else(|| args.document.clone());
    save_codebook(&target, &codebook)
        .with_context(|| format!("save codebook {}", target.display()))?;
    info!(variable = %args.variable, path = %target.display(), "edited variable");
    Ok((codebook, target))
}

fn collect_edits(args: &EditArgs) -> Vec<OverlayEdit> {
    let mut edits = Vec::new();
    if let Some(value) = &args.label {
        edits.push(OverlayEdit::Label(value.clone()));
    }
    if let Some(value) = &args.definition {
        edits.push(OverlayEdit::Definition(value.clone()));
    }
    if let Some(value) = &args.unit {
        edits.push(OverlayEdit::Unit(value.clone()));
    }
    if let Some(value) = args.sensitivity {
        edits.push(OverlayEdit::Sensitivity(value));
    }
    if let Some(value) = &args.source {
        edits.push(OverlayEdit::Source(value.clone()));
    }
    if let Some(value) = &args.notes {
        edits.push(OverlayEdit::Notes(value.clone()));
    }
    if let Some(value) = &args.missing_code {
        edits.push(OverlayEdit::MissingCode(value.clone()));
    }
    if let Some(value) = args.semantic_type {
        edits.push(OverlayEdit::Type(Some(value)));
    }
    if args.clear_type {
        edits.push(OverlayEdit::Type(None));
    }
    edits
}

pub fn run_vocabulary(args: &VocabularyArgs) -> Result<Option<Vocabulary>> {
    vocabulary_source(args).load()
}

fn vocabulary_source(args: &VocabularyArgs) -> VocabularySource {
    VocabularySource::from_flags(args.vocabulary.clone(), args.no_vocabulary)
}
