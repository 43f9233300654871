//! Rendering exports to files in an output directory.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::info;

use codebook_model::Codebook;

use crate::{
    ReportError, Result, codebook_csv, codebook_markdown, codebook_text, dictionary_csv,
    dictionary_markdown,
};

/// Which view of the codebook to export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    Codebook,
    Dictionary,
}

impl ReportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Codebook => "codebook",
            ReportKind::Dictionary => "data_dictionary",
        }
    }

    /// Formats this kind can be exported to.
    pub fn formats(&self) -> &'static [ReportFormat] {
        match self {
            ReportKind::Codebook => &[ReportFormat::Csv, ReportFormat::Text, ReportFormat::Markdown],
            ReportKind::Dictionary => &[ReportFormat::Csv, ReportFormat::Markdown],
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportFormat {
    Csv,
    Text,
    Markdown,
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Csv => "csv",
            ReportFormat::Text => "text",
            ReportFormat::Markdown => "markdown",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Csv => "csv",
            ReportFormat::Text => "txt",
            ReportFormat::Markdown => "md",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// File name of an export, e.g. `codebook_survey.csv` for dataset `survey.csv`.
pub fn output_file_name(kind: ReportKind, format: ReportFormat, dataset: &str) -> String {
    let stem = Path::new(dataset)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .unwrap_or("dataset");
    format!("{}_{stem}.{}", kind.as_str(), format.extension())
}

fn render(
    codebook: &Codebook,
    kind: ReportKind,
    format: ReportFormat,
    generated: NaiveDate,
) -> Result<String> {
    match (kind, format) {
        (ReportKind::Codebook, ReportFormat::Csv) => codebook_csv(codebook),
        (ReportKind::Codebook, ReportFormat::Text) => Ok(codebook_text(codebook, generated)),
        (ReportKind::Codebook, ReportFormat::Markdown) => Ok(codebook_markdown(codebook)),
        (ReportKind::Dictionary, ReportFormat::Csv) => dictionary_csv(codebook),
        (ReportKind::Dictionary, ReportFormat::Markdown) => Ok(dictionary_markdown(codebook)),
        (ReportKind::Dictionary, ReportFormat::Text) => {
            Err(ReportError::UnsupportedFormat { kind, format })
        }
    }
}

/// Renders one export into `output_dir` and returns its path.
pub fn write_report(
    output_dir: &Path,
    codebook: &Codebook,
    kind: ReportKind,
    format: ReportFormat,
    generated: NaiveDate,
) -> Result<PathBuf> {
    let contents = render(codebook, kind, format, generated)?;
    fs::create_dir_all(output_dir).map_err(|error| ReportError::io(output_dir, error))?;
    let path = output_dir.join(output_file_name(kind, format, &codebook.dataset));
    fs::write(&path, contents).map_err(|error| ReportError::io(&path, error))?;
    info!(path = %path.display(), %kind, %format, "wrote report");
    Ok(path)
}

/// Writes every requested format, in order.
pub fn write_reports(
    output_dir: &Path,
    codebook: &Codebook,
    kind: ReportKind,
    formats: &[ReportFormat],
    generated: NaiveDate,
) -> Result<Vec<PathBuf>> {
    formats
        .iter()
        .map(|format| write_report(output_dir, codebook, kind, *format, generated))
        .collect()
}
