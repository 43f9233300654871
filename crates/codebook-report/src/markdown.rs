//! Pipe-delimited tables for pasting into documents.

use codebook_model::{Codebook, DictionaryEntry};

const CODEBOOK_HEADER: &str = "| Variable | Label | Type | N | Missing% | Range |";
const CODEBOOK_SEPARATOR: &str = "|---|---|---|---|---|---|";
const DICTIONARY_HEADER: &str =
    "| Variable | Label | Type | Definition | Values | Unit | Sensitivity |";
const DICTIONARY_SEPARATOR: &str = "|---|---|---|---|---|---|---|";

/// Escapes a cell so it cannot break the row.
fn cell(value: &str) -> String {
    value.replace('|', "\\|").replace(['\r', '\n'], " ")
}

fn cell_or_dash(value: &str) -> String {
    if value.is_empty() {
        "-".to_string()
    } else {
        cell(value)
    }
}

fn codebook_row(entry: &DictionaryEntry) -> String {
    let profile = &entry.profile;
    format!(
        "| {} | {} | {} | {} | {}% | {}–{} |",
        cell(&profile.name),
        cell_or_dash(&entry.overlay.label),
        entry.effective_type(),
        profile.n,
        profile.missing_pct,
        cell(&profile.min),
        cell(&profile.max),
    )
}

fn dictionary_row(entry: &DictionaryEntry) -> String {
    let overlay = &entry.overlay;
    format!(
        "| {} | {} | {} | {} | {} | {} | {} |",
        cell(entry.name()),
        cell_or_dash(&overlay.label),
        entry.effective_type().dictionary_label(),
        cell_or_dash(&overlay.definition),
        cell_or_dash(&entry.values_display()),
        cell(&overlay.unit),
        overlay.sensitivity,
    )
}

pub fn codebook_markdown(codebook: &Codebook) -> String {
    let mut lines = vec![CODEBOOK_HEADER.to_string(), CODEBOOK_SEPARATOR.to_string()];
    lines.extend(codebook.entries.iter().map(codebook_row));
    lines.join("\n")
}

/// Dictionary table under a `# Data Dictionary — <dataset>` heading.
pub fn dictionary_markdown(codebook: &Codebook) -> String {
    let mut lines = vec![
        format!("# Data Dictionary — {}", codebook.dataset),
        String::new(),
        DICTIONARY_HEADER.to_string(),
        DICTIONARY_SEPARATOR.to_string(),
    ];
    lines.extend(codebook.entries.iter().map(dictionary_row));
    lines.join("\n")
}
