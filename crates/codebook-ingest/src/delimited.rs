//! Comma-delimited text parsing.
//!
//! The format is deliberately simple: one record per line, fields split on
//! every comma, surrounding whitespace and one pair of enclosing double
//! quotes stripped. Quoted fields that contain a comma are split like any
//! other field.

use tracing::{debug, warn};

use codebook_model::RawTable;

use crate::{IngestError, Result};

/// Field separator.
pub const DELIMITER: char = ',';

/// Trims a raw field and strips a single pair of enclosing double quotes.
pub fn clean_field(raw: &str) -> String {
    let trimmed = raw.trim();
    let unquoted = trimmed
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(trimmed);
    unquoted.to_string()
}

/// Splits one line into cleaned fields.
pub fn split_line(line: &str) -> Vec<String> {
    line.split(DELIMITER).map(clean_field).collect()
}

/// Parses delimited text into a [`RawTable`].
///
/// The first non-blank line is the header. Blank lines are skipped. Short
/// rows are padded with empty cells, long rows lose their extra fields.
///
/// # Errors
///
/// Returns [`IngestError::EmptyInput`] when the text has no header line and
/// [`IngestError::Model`] when the header repeats a column name.
pub fn parse_delimited(text: &str) -> Result<RawTable> {
    let mut lines = text
        .trim_start_matches('\u{feff}')
        .lines()
        .filter(|line| !line.trim().is_empty());
    let header_line = lines.next().ok_or(IngestError::EmptyInput)?;
    let headers = split_line(header_line);
    let width = headers.len();

    let mut rows = Vec::new();
    let mut truncated = 0usize;
    for line in lines {
        let fields = split_line(line);
        if fields.len() > width {
            truncated += 1;
        }
        rows.push(fields);
    }
    if truncated > 0 {
        warn!(
            rows = truncated,
            columns = width,
            "dropped fields beyond the header width"
        );
    }
    debug!(columns = width, rows = rows.len(), "parsed delimited text");

    Ok(RawTable::new(headers, rows)?)
}
