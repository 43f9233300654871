#![deny(unsafe_code)]

use std::collections::{BTreeMap, BTreeSet};

use crate::{ModelError, Result};

/// Rectangular table of string cells with a unique, ordered header.
///
/// Every row holds exactly one cell per header; short rows are padded with
/// empty strings and surplus cells are dropped on construction.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RawTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Builds a table from positional rows.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        ensure_unique(&headers)?;
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
        Ok(Self { headers, rows })
    }

    /// Builds a table from rows keyed by column name. Absent keys become empty cells.
    pub fn from_records(headers: Vec<String>, records: Vec<BTreeMap<String, String>>) -> Result<Self> {
        ensure_unique(&headers)?;
        let rows = records
            .into_iter()
            .map(|mut record| {
                headers
                    .iter()
                    .map(|header| record.remove(header).unwrap_or_default())
                    .collect()
            })
            .collect();
        Ok(Self { headers, rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Cells of the column at `index`, in row order.
    pub fn column(&self, index: usize) -> impl Iterator<Item = &str> + '_ {
        self.rows
            .iter()
            .map(move |row| row.get(index).map(String::as_str).unwrap_or(""))
    }
}

fn ensure_unique(headers: &[String]) -> Result<()> {
    let mut seen = BTreeSet::new();
    for header in headers {
        if !seen.insert(header.as_str()) {
            return Err(ModelError::DuplicateColumn {
                name: header.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_string()).collect()
    }

    #[test]
    fn pads_short_rows_and_drops_extra_cells() {
        let table = RawTable::new(
            strings(&["a", "b"]),
            vec![strings(&["1"]), strings(&["1", "2", "3"])],
        )
        .unwrap();
        assert_eq!(table.rows()[0], strings(&["1", ""]));
        assert_eq!(table.rows()[1], strings(&["1", "2"]));
    }

    #[test]
    fn rejects_duplicate_headers() {
        let error = RawTable::new(strings(&["id", "id"]), vec![]).unwrap_err();
        assert!(matches!(error, ModelError::DuplicateColumn { name } if name == "id"));
    }

    #[test]
    fn records_fill_absent_cells() {
        let mut record = BTreeMap::new();
        record.insert("b".to_string(), "x".to_string());
        record.insert("zzz".to_string(), "ignored".to_string());
        let table = RawTable::from_records(strings(&["a", "b"]), vec![record]).unwrap();
        assert_eq!(table.rows()[0], strings(&["", "x"]));
        assert_eq!(table.column_count(), 2);
    }
}
