//! Codebook and data dictionary exports.
//!
//! Two variants are produced from the same [`Codebook`](codebook_model::Codebook):
//!
//! - **Codebook**: statistics-first view (CSV, plain text, markdown table)
//! - **Dictionary**: documentation-first view (CSV, markdown table)
//!
//! Column order and quoting are fixed; downstream tooling relies on them.
//! The [`document`] module persists a codebook as JSON so it can seed the
//! next run.

mod csv_export;
pub mod document;
mod error;
mod markdown;
mod output;
mod text;

pub use csv_export::{
    CODEBOOK_CSV_HEADERS, DICTIONARY_CSV_HEADERS, codebook_csv, dictionary_csv,
    write_codebook_csv, write_dictionary_csv,
};
pub use document::{load_codebook, save_codebook};
pub use error::{ReportError, Result};
pub use markdown::{codebook_markdown, dictionary_markdown};
pub use output::{ReportFormat, ReportKind, output_file_name, write_report, write_reports};
pub use text::{RULE_WIDTH, codebook_text};
