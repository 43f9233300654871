use serde::{Deserialize, Serialize};

use crate::SemanticType;

/// Computed summary of one column. Every field is recomputed on re-profiling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableProfile {
    pub name: String,
    pub inferred_type: SemanticType,
    /// Non-missing cell count.
    pub n: usize,
    pub missing: usize,
    /// `round(missing / rows * 100)`, 0 for an empty table.
    pub missing_pct: u32,
    /// Distinct non-missing values.
    pub unique: usize,
    pub min: String,
    pub max: String,
    /// Two-decimal mean of the numeric cells; empty when there are none.
    pub mean: String,
    /// Distinct values in first-seen order, only when the column has few of them.
    pub values: Vec<String>,
    /// First non-missing value.
    pub example: String,
}

impl VariableProfile {
    /// Profile of a column with no non-missing values and no rows.
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inferred_type: SemanticType::Text,
            n: 0,
            missing: 0,
            missing_pct: 0,
            unique: 0,
            min: String::new(),
            max: String::new(),
            mean: String::new(),
            values: Vec::new(),
            example: String::new(),
        }
    }

    pub fn total_rows(&self) -> usize {
        self.n + self.missing
    }

    pub fn has_mean(&self) -> bool {
        !self.mean.is_empty()
    }
}
