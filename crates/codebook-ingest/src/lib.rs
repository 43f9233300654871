pub mod delimited;
pub mod error;
pub mod preview;
pub mod source;

pub use delimited::{DELIMITER, clean_field, parse_delimited, split_line};
pub use error::{IngestError, Result};
pub use preview::{PreviewTable, coerce_cell};
pub use source::{SourceTable, load_table};
