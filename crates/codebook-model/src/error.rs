use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("duplicate column name: {name}")]
    DuplicateColumn { name: String },
    #[error("unknown variable: {name}")]
    UnknownVariable { name: String },
    #[error("invalid variable type: {0}")]
    InvalidType(String),
    #[error("invalid sensitivity level: {0}")]
    InvalidSensitivity(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
