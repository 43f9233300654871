use std::collections::HashSet;

use crate::numeric::{format_number, parse_numeric};

/// Columns with more distinct values than this get no value list.
pub const VALUE_LIST_LIMIT: usize = 15;

/// Statistics of a column's present values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnSummary {
    pub n: usize,
    pub unique: usize,
    pub min: String,
    pub max: String,
    pub mean: String,
    pub values: Vec<String>,
    pub example: String,
}

/// Summarizes the non-missing values of one column.
///
/// When any value is numeric, `min`/`max`/`mean` come from the numeric
/// subset; otherwise `min`/`max` are the lexicographic extremes of all
/// values and `mean` is empty.
pub fn summarize(values: &[&str]) -> ColumnSummary {
    let mut numbers: Vec<f64> = values.iter().filter_map(|value| parse_numeric(value)).collect();
    // Sorted so the sum, and therefore the mean, does not depend on row order.
    numbers.sort_by(f64::total_cmp);

    let (min, max, mean) = match (numbers.first(), numbers.last()) {
        (Some(&low), Some(&high)) => {
            let sum: f64 = numbers.iter().sum();
            let mean = sum / numbers.len() as f64;
            (format_number(low), format_number(high), format_mean(mean))
        }
        _ => (
            values.iter().min().map(|v| (*v).to_string()).unwrap_or_default(),
            values.iter().max().map(|v| (*v).to_string()).unwrap_or_default(),
            String::new(),
        ),
    };

    let mut seen = HashSet::new();
    let distinct: Vec<&str> = values
        .iter()
        .copied()
        .filter(|value| seen.insert(*value))
        .collect();
    let listed: Vec<String> = if distinct.len() <= VALUE_LIST_LIMIT {
        distinct.iter().map(|value| (*value).to_string()).collect()
    } else {
        Vec::new()
    };

    ColumnSummary {
        n: values.len(),
        unique: distinct.len(),
        min,
        max,
        mean,
        values: listed,
        example: values.first().map(|v| (*v).to_string()).unwrap_or_default(),
    }
}

/// Two-decimal mean, with exact halves rounded away from zero.
fn format_mean(mean: f64) -> String {
    let rounded = (mean * 100.0).round() / 100.0;
    format!("{rounded:.2}")
}
