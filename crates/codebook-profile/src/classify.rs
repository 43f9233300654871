//! Semantic type inference from a column's present values.
//!
//! # Algorithm
//!
//! Applied in order, first match wins:
//!
//! 1. **Numeric share** above [`NUMERIC_RATIO_THRESHOLD`]:
//!    at most [`BINARY_MAX_DISTINCT`] distinct numeric values is `binary`,
//!    otherwise `numeric`.
//! 2. **Text cardinality** (everything else, including empty columns):
//!    exactly two distinct values is `binary`, otherwise
//!    up to [`CATEGORICAL_MAX_DISTINCT`] is `categorical` and
//!    more is `text`.
//!
//! The two-value case is checked ahead of the categorical limit, so a text
//! dichotomy such as `M`/`F` is `binary` rather than `categorical` even
//! though it is within that limit.
//!
//! `date` is never inferred.

use std::collections::HashSet;

use codebook_model::SemanticType;

use crate::numeric::parse_numeric;

/// Share of numeric values a column must exceed to be treated as numeric.
pub const NUMERIC_RATIO_THRESHOLD: f64 = 0.85;

/// Largest distinct count still considered a dichotomy.
pub const BINARY_MAX_DISTINCT: usize = 2;

/// Largest distinct count of a non-numeric column still considered coded.
pub const CATEGORICAL_MAX_DISTINCT: usize = 10;

/// Classifies a column from its non-missing values.
///
/// The result depends only on the set of values, never on their order.
pub fn classify(values: &[&str]) -> SemanticType {
    let numeric: Vec<&str> = values
        .iter()
        .copied()
        .filter(|value| parse_numeric(value).is_some())
        .collect();
    let numeric_ratio = if values.is_empty() {
        0.0
    } else {
        numeric.len() as f64 / values.len() as f64
    };

    if numeric_ratio > NUMERIC_RATIO_THRESHOLD {
        let unique_numeric: HashSet<&str> = numeric.into_iter().collect();
        return if unique_numeric.len() <= BINARY_MAX_DISTINCT {
            SemanticType::Binary
        } else {
            SemanticType::Numeric
        };
    }

    let unique_all: HashSet<&str> = values.iter().copied().collect();
    match unique_all.len() {
        0 => SemanticType::Text,
        BINARY_MAX_DISTINCT => SemanticType::Binary,
        count if count <= CATEGORICAL_MAX_DISTINCT => SemanticType::Categorical,
        _ => SemanticType::Text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(count: usize) -> Vec<String> {
        (0..count).map(|idx| format!("level-{idx}")).collect()
    }

    #[test]
    fn zero_one_column_is_binary() {
        assert_eq!(classify(&["0", "1", "0", "1"]), SemanticType::Binary);
        assert_eq!(classify(&["1", "1", "1"]), SemanticType::Binary);
    }

    #[test]
    fn three_numeric_values_is_numeric() {
        assert_eq!(classify(&["34", "29", "41"]), SemanticType::Numeric);
    }

    #[test]
    fn eighty_percent_numeric_falls_through() {
        assert_eq!(
            classify(&["1", "2", "3", "4", "x"]),
            SemanticType::Categorical
        );
    }

    #[test]
    fn ninety_percent_numeric_is_numeric() {
        let values = ["1", "2", "3", "4", "5", "6", "7", "8", "9", "x"];
        assert_eq!(classify(&values), SemanticType::Numeric);
    }

    #[test]
    fn two_text_levels_are_binary() {
        assert_eq!(classify(&["M", "F", "M", "F"]), SemanticType::Binary);
    }

    #[test]
    fn single_text_level_is_categorical() {
        assert_eq!(classify(&["yes", "yes"]), SemanticType::Categorical);
    }

    #[test]
    fn categorical_text_boundary() {
        let ten = labels(10);
        let ten: Vec<&str> = ten.iter().map(String::as_str).collect();
        assert_eq!(classify(&ten), SemanticType::Categorical);

        let eleven = labels(11);
        let eleven: Vec<&str> = eleven.iter().map(String::as_str).collect();
        assert_eq!(classify(&eleven), SemanticType::Text);
    }

    #[test]
    fn empty_column_is_text() {
        assert_eq!(classify(&[]), SemanticType::Text);
    }
}
