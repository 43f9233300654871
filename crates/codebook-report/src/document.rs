//! JSON persistence of an assembled codebook.
//!
//! The saved document is the `previous` input of the next run, so overlays
//! edited by hand survive re-profiling.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use codebook_model::Codebook;

use crate::{ReportError, Result};

/// Writes `codebook` as pretty-printed JSON, creating parent directories.
pub fn save_codebook(path: &Path, codebook: &Codebook) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|error| ReportError::io(parent, error))?;
    }
    let file = File::create(path).map_err(|error| ReportError::io(path, error))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, codebook).map_err(|source| {
        ReportError::Document {
            path: path.to_path_buf(),
            source,
        }
    })?;
    writer.flush().map_err(|error| ReportError::io(path, error))?;
    info!(
        path = %path.display(),
        variables = codebook.variable_count(),
        "saved codebook document"
    );
    Ok(())
}

pub fn load_codebook(path: &Path) -> Result<Codebook> {
    let text = fs::read_to_string(path).map_err(|error| ReportError::read(path, error))?;
    let codebook: Codebook =
        serde_json::from_str(&text).map_err(|source| ReportError::Document {
            path: path.to_path_buf(),
            source,
        })?;
    info!(
        path = %path.display(),
        variables = codebook.variable_count(),
        "loaded codebook document"
    );
    Ok(codebook)
}
