//! Normalization of dataset previews supplied by an external data source.
//!
//! A preview is a JSON object of the form
//! `{"headers": [...], "rows": [{...}], "column_types": {...}, "filename": ..., "dataset_id": ...}`.
//! Cells may hold any JSON value; they are coerced to strings before profiling.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::{Map, Value};

use codebook_model::RawTable;

use crate::{IngestError, Result, SourceTable};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PreviewTable {
    #[serde(default)]
    pub headers: Vec<Value>,
    #[serde(default)]
    pub rows: Vec<Map<String, Value>>,
    #[serde(default)]
    pub column_types: BTreeMap<String, String>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub dataset_id: Option<Value>,
}

/// String form of a JSON cell. `null` becomes the empty string.
pub fn coerce_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        other => other.to_string(),
    }
}

impl PreviewTable {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Coerces every header and cell to a string and builds the table.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::EmptyInput`] when the preview has no headers.
    pub fn into_source(self) -> Result<SourceTable> {
        if self.headers.is_empty() {
            return Err(IngestError::EmptyInput);
        }
        let headers: Vec<String> = self.headers.iter().map(coerce_cell).collect();
        let records = self
            .rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|(key, value)| {
                        let cell = coerce_cell(&value);
                        (key, cell)
                    })
                    .collect::<BTreeMap<String, String>>()
            })
            .collect();
        let table = RawTable::from_records(headers, records)?;
        Ok(SourceTable {
            table,
            dataset_name: self.filename,
            dataset_id: self.dataset_id.as_ref().map(coerce_cell),
            column_types: self.column_types,
        })
    }
}
