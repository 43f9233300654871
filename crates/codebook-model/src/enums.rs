//! Type-safe enumerations for codebook metadata.
//!
//! These enums replace the free-text type and sensitivity strings used by
//! spreadsheet codebooks with closed sets that round-trip through
//! [`FromStr`] and [`fmt::Display`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// Semantic type of a column.
///
/// Automatic inference only ever produces `Numeric`, `Binary`, `Categorical`
/// or `Text`. `Date` exists so a user can tag a column explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SemanticType {
    /// Continuous numeric measurement.
    Numeric,
    /// Dichotomous variable (at most two distinct codes).
    Binary,
    /// Low-cardinality coded variable.
    Categorical,
    /// Free text or high-cardinality strings.
    Text,
    /// Calendar date; only reachable through an explicit override.
    Date,
}

impl SemanticType {
    /// All types, in the order presented to editors.
    pub const ALL: [SemanticType; 5] = [
        SemanticType::Numeric,
        SemanticType::Binary,
        SemanticType::Categorical,
        SemanticType::Text,
        SemanticType::Date,
    ];

    /// Canonical lowercase name used by codebook exports.
    pub fn as_str(&self) -> &'static str {
        match self {
            SemanticType::Numeric => "numeric",
            SemanticType::Binary => "binary",
            SemanticType::Categorical => "categorical",
            SemanticType::Text => "text",
            SemanticType::Date => "date",
        }
    }

    /// Name used by data dictionary exports.
    pub fn dictionary_label(&self) -> &'static str {
        match self {
            SemanticType::Numeric => "Continuous",
            SemanticType::Binary => "Binary",
            SemanticType::Categorical => "Categorical",
            SemanticType::Text => "Text",
            SemanticType::Date => "Date",
        }
    }

    /// Returns true for types whose distinct values are worth listing as codes.
    pub fn is_coded(&self) -> bool {
        matches!(self, SemanticType::Binary | SemanticType::Categorical)
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SemanticType {
    type Err = ModelError;

    /// Accepts both the codebook names and the dictionary labels, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "numeric" | "continuous" => Ok(SemanticType::Numeric),
            "binary" => Ok(SemanticType::Binary),
            "categorical" => Ok(SemanticType::Categorical),
            "text" => Ok(SemanticType::Text),
            "date" => Ok(SemanticType::Date),
            _ => Err(ModelError::InvalidType(s.to_string())),
        }
    }
}

/// Disclosure classification attached to a dictionary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Sensitivity {
    Public,
    #[default]
    Internal,
    Sensitive,
    #[serde(rename = "PII")]
    Pii,
    #[serde(rename = "Highly Sensitive")]
    HighlySensitive,
}

impl Sensitivity {
    pub const ALL: [Sensitivity; 5] = [
        Sensitivity::Public,
        Sensitivity::Internal,
        Sensitivity::Sensitive,
        Sensitivity::Pii,
        Sensitivity::HighlySensitive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sensitivity::Public => "Public",
            Sensitivity::Internal => "Internal",
            Sensitivity::Sensitive => "Sensitive",
            Sensitivity::Pii => "PII",
            Sensitivity::HighlySensitive => "Highly Sensitive",
        }
    }

    /// Personally identifying levels (`PII` and `Highly Sensitive`).
    pub fn is_identifying(&self) -> bool {
        matches!(self, Sensitivity::Pii | Sensitivity::HighlySensitive)
    }

    /// Levels that need review before data is shared.
    pub fn needs_review(&self) -> bool {
        !matches!(self, Sensitivity::Public | Sensitivity::Internal)
    }
}

impl fmt::Display for Sensitivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Sensitivity {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        match normalized.as_str() {
            "PUBLIC" => Ok(Sensitivity::Public),
            "INTERNAL" => Ok(Sensitivity::Internal),
            "SENSITIVE" => Ok(Sensitivity::Sensitive),
            "PII" => Ok(Sensitivity::Pii),
            "HIGHLY SENSITIVE" | "HIGHLY_SENSITIVE" | "HIGHLY-SENSITIVE" => {
                Ok(Sensitivity::HighlySensitive)
            }
            _ => Err(ModelError::InvalidSensitivity(s.to_string())),
        }
    }
}
