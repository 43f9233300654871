use std::collections::BTreeMap;
use std::path::Path;

use tracing::info;

use codebook_model::RawTable;

use crate::{IngestError, PreviewTable, Result, parse_delimited};

/// A parsed table together with what the source said about it.
#[derive(Debug, Clone)]
pub struct SourceTable {
    pub table: RawTable,
    pub dataset_name: Option<String>,
    pub dataset_id: Option<String>,
    /// Type hints reported by the external source. Advisory only.
    pub column_types: BTreeMap<String, String>,
}

impl SourceTable {
    pub fn from_text(text: &str) -> Result<Self> {
        Ok(Self {
            table: parse_delimited(text)?,
            dataset_name: None,
            dataset_id: None,
            column_types: BTreeMap::new(),
        })
    }

    /// Name to show in exports: the source's filename, then its id, then `fallback`.
    pub fn display_name(&self, fallback: &str) -> String {
        self.dataset_name
            .clone()
            .or_else(|| self.dataset_id.as_ref().map(|id| format!("{id}.csv")))
            .unwrap_or_else(|| fallback.to_string())
    }
}

/// Loads a table from disk. `.json` files are read as previews, anything
/// else as delimited text.
pub fn load_table(path: &Path) -> Result<SourceTable> {
    let text = std::fs::read_to_string(path).map_err(|error| IngestError::io(path, error))?;
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let mut source = if is_json {
        PreviewTable::from_json(&text)?.into_source()?
    } else {
        SourceTable::from_text(&text)?
    };
    if source.dataset_name.is_none() && source.dataset_id.is_none() {
        source.dataset_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .map(String::from);
    }
    info!(
        path = %path.display(),
        columns = source.table.column_count(),
        rows = source.table.row_count(),
        "loaded table"
    );
    Ok(source)
}
