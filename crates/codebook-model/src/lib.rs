pub mod codebook;
pub mod edit;
pub mod enums;
pub mod error;
pub mod profile;
pub mod table;

pub use codebook::{Codebook, DICTIONARY_VALUE_LIMIT, DictionaryEntry, Overlay};
pub use edit::{OverlayEdit, apply_edit};
pub use enums::{SemanticType, Sensitivity};
pub use error::{ModelError, Result};
pub use profile::VariableProfile;
pub use table::RawTable;
