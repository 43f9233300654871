//! CSV exports.
//!
//! Every field is quoted, embedded quotes are doubled and records end with
//! `\n`.

use std::io::Write;

use csv::{QuoteStyle, Terminator, WriterBuilder};

use codebook_model::{Codebook, DictionaryEntry};

use crate::Result;

pub const CODEBOOK_CSV_HEADERS: [&str; 12] = [
    "Variable",
    "Label",
    "Type",
    "N",
    "Missing",
    "Missing%",
    "Unique Values",
    "Min",
    "Max",
    "Mean",
    "Value Labels",
    "Notes",
];

pub const DICTIONARY_CSV_HEADERS: [&str; 14] = [
    "Variable Name",
    "Label",
    "Definition",
    "Type",
    "Unit",
    "Values / Codes",
    "Min",
    "Max",
    "Missing Code",
    "Sensitivity",
    "Source",
    "N",
    "Missing%",
    "Notes",
];

fn codebook_record(entry: &DictionaryEntry) -> Vec<String> {
    let profile = &entry.profile;
    vec![
        profile.name.clone(),
        entry.overlay.label.clone(),
        entry.effective_type().as_str().to_string(),
        profile.n.to_string(),
        profile.missing.to_string(),
        format!("{}%", profile.missing_pct),
        profile.unique.to_string(),
        profile.min.clone(),
        profile.max.clone(),
        profile.mean.clone(),
        profile.values.join(" | "),
        entry.overlay.notes.clone(),
    ]
}

fn dictionary_record(entry: &DictionaryEntry) -> Vec<String> {
    let profile = &entry.profile;
    let overlay = &entry.overlay;
    // The dictionary reports a range only for columns with numeric values.
    let (min, max) = if profile.has_mean() {
        (profile.min.clone(), profile.max.clone())
    } else {
        (String::new(), String::new())
    };
    vec![
        profile.name.clone(),
        overlay.label.clone(),
        overlay.definition.clone(),
        entry.effective_type().dictionary_label().to_string(),
        overlay.unit.clone(),
        entry.values_display(),
        min,
        max,
        overlay.missing_code.clone(),
        overlay.sensitivity.as_str().to_string(),
        overlay.source.clone(),
        profile.n.to_string(),
        format!("{}%", profile.missing_pct),
        overlay.notes.clone(),
    ]
}

fn write_records<W: Write>(
    writer: W,
    headers: &[&str],
    records: impl Iterator<Item = Vec<String>>,
) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);
    writer.write_record(headers)?;
    for record in records {
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the codebook CSV variant.
pub fn write_codebook_csv<W: Write>(writer: W, codebook: &Codebook) -> Result<()> {
    write_records(
        writer,
        &CODEBOOK_CSV_HEADERS,
        codebook.entries.iter().map(codebook_record),
    )
}

/// Writes the dictionary CSV variant.
pub fn write_dictionary_csv<W: Write>(writer: W, codebook: &Codebook) -> Result<()> {
    write_records(
        writer,
        &DICTIONARY_CSV_HEADERS,
        codebook.entries.iter().map(dictionary_record),
    )
}

pub fn codebook_csv(codebook: &Codebook) -> Result<String> {
    let mut buffer = Vec::new();
    write_codebook_csv(&mut buffer, codebook)?;
    Ok(String::from_utf8(buffer)?)
}

pub fn dictionary_csv(codebook: &Codebook) -> Result<String> {
    let mut buffer = Vec::new();
    write_dictionary_csv(&mut buffer, codebook)?;
    Ok(String::from_utf8(buffer)?)
}
