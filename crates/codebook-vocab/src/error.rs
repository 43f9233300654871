#![deny(unsafe_code)]

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum VocabularyError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV {path}: {message}")]
    Csv { path: PathBuf, message: String },

    #[error("vocabulary {path} is missing required column: {column}")]
    MissingColumn { path: PathBuf, column: String },

    #[error("duplicate vocabulary code in {path}: {code}")]
    DuplicateCode { path: PathBuf, code: String },
}

impl VocabularyError {
    pub(crate) fn csv(path: impl Into<PathBuf>, error: &csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            message: error.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, VocabularyError>;
