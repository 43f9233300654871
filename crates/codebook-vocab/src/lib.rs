#![deny(unsafe_code)]

pub mod dhs;
pub mod error;
pub mod loader;
pub mod vocabulary;

pub use crate::dhs::dhs_vocabulary;
pub use crate::error::{Result, VocabularyError};
pub use crate::loader::{VOCABULARY_ENV_VAR, default_vocabulary, load_vocabulary};
pub use crate::vocabulary::{Vocabulary, VocabularyEntry};
