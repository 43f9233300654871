//! Defaults applied to entries seen for the first time.

use serde::{Deserialize, Serialize};

use codebook_model::Sensitivity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssembleOptions {
    /// Missing-value code recorded for new entries.
    pub default_missing_code: String,
    /// Substrings of a lowercase column name that mark it as identifying.
    pub identifying_markers: Vec<String>,
    /// Sensitivity of columns matching an identifying marker.
    pub identifying_sensitivity: Sensitivity,
    /// Sensitivity of all other columns.
    pub default_sensitivity: Sensitivity,
}

impl Default for AssembleOptions {
    fn default() -> Self {
        Self {
            default_missing_code: ".".to_string(),
            identifying_markers: vec!["id".to_string(), "name".to_string()],
            identifying_sensitivity: Sensitivity::Pii,
            default_sensitivity: Sensitivity::Internal,
        }
    }
}

impl AssembleOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_missing_code(mut self, code: impl Into<String>) -> Self {
        self.default_missing_code = code.into();
        self
    }

    /// Sensitivity a new entry named `column` starts with.
    pub fn sensitivity_for(&self, column: &str) -> Sensitivity {
        let lower = column.to_lowercase();
        if self
            .identifying_markers
            .iter()
            .any(|marker| lower.contains(marker.as_str()))
        {
            self.identifying_sensitivity
        } else {
            self.default_sensitivity
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifying_names_default_to_pii() {
        let options = AssembleOptions::default();
        assert_eq!(options.sensitivity_for("PatientID"), Sensitivity::Pii);
        assert_eq!(options.sensitivity_for("first_name"), Sensitivity::Pii);
        assert_eq!(options.sensitivity_for("v012"), Sensitivity::Internal);
        // substring match, as documented
        assert_eq!(options.sensitivity_for("paid"), Sensitivity::Pii);
    }
}
