use std::time::Instant;

use tracing::{debug, info};

use codebook_model::{RawTable, VariableProfile};

use crate::classify::classify;
use crate::missing::{is_missing, missing_count, missing_pct};
use crate::summary::summarize;

/// Profiles one column from its cells (missing ones included).
pub fn profile_column<'a>(name: &str, cells: impl IntoIterator<Item = &'a str>) -> VariableProfile {
    let cells: Vec<&str> = cells.into_iter().collect();
    let total_rows = cells.len();
    let missing = missing_count(cells.iter().copied());
    let present: Vec<&str> = cells.into_iter().filter(|cell| !is_missing(cell)).collect();
    let inferred_type = classify(&present);
    let summary = summarize(&present);
    debug!(
        column = name,
        inferred_type = %inferred_type,
        n = summary.n,
        missing,
        unique = summary.unique,
        "profiled column"
    );
    VariableProfile {
        name: name.to_string(),
        inferred_type,
        n: summary.n,
        missing,
        missing_pct: missing_pct(missing, total_rows),
        unique: summary.unique,
        min: summary.min,
        max: summary.max,
        mean: summary.mean,
        values: summary.values,
        example: summary.example,
    }
}

/// Profiles every column of `table` in header order.
pub fn profile_table(table: &RawTable) -> Vec<VariableProfile> {
    let start = Instant::now();
    let profiles: Vec<VariableProfile> = table
        .headers()
        .iter()
        .enumerate()
        .map(|(index, name)| profile_column(name, table.column(index)))
        .collect();
    info!(
        columns = profiles.len(),
        rows = table.row_count(),
        duration_ms = start.elapsed().as_millis(),
        "profiled table"
    );
    profiles
}
