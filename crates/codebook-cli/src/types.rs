use std::path::PathBuf;

use codebook_core::EntryFilter;
use codebook_model::Codebook;
use codebook_report::ReportKind;

#[derive(Debug)]
pub struct RunResult {
    pub kind: ReportKind,
    pub codebook: Codebook,
    pub output_dir: PathBuf,
    /// Export files, empty on a dry run.
    pub outputs: Vec<PathBuf>,
    pub saved: Option<PathBuf>,
    /// Restricts the dictionary listing; the exports always hold every variable.
    pub filter: EntryFilter,
}
