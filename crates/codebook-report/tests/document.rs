//! Persistence of codebook documents.

use chrono::NaiveDate;
use codebook_core::build_codebook;
use codebook_ingest::parse_delimited;
use codebook_model::{OverlayEdit, Sensitivity};
use codebook_report::{
    ReportError, ReportFormat, ReportKind, load_codebook, save_codebook, write_reports,
};
use tempfile::TempDir;

#[test]
fn saved_overlays_seed_the_next_run() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("dictionary.json");

    let table = parse_delimited("patient_name,score\nAda,3\nBo,5\n").unwrap();
    let codebook = build_codebook("scores.csv", &table, None, None)
        .update("score", OverlayEdit::Sensitivity(Sensitivity::Sensitive))
        .unwrap();
    save_codebook(&path, &codebook).unwrap();

    let loaded = load_codebook(&path).unwrap();
    assert_eq!(loaded, codebook);

    let grown = parse_delimited("patient_name,score\nAda,3\nBo,5\nCy,NA\n").unwrap();
    let rebuilt = build_codebook("scores.csv", &grown, None, Some(&loaded));
    let score = rebuilt.get("score").unwrap();
    assert_eq!(score.overlay.sensitivity, Sensitivity::Sensitive);
    assert_eq!(score.profile.missing, 1);
    assert_eq!(
        rebuilt.get("patient_name").unwrap().overlay.sensitivity,
        Sensitivity::Pii
    );
}

#[test]
fn invalid_document_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{\"dataset\": 3}").unwrap();
    let error = load_codebook(&path).unwrap_err();
    assert!(matches!(error, ReportError::Document { .. }));
    assert!(error.to_string().contains("broken.json"));
}

#[test]
fn missing_document_is_a_read_error() {
    let dir = TempDir::new().unwrap();
    let error = load_codebook(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(error, ReportError::Read { .. }));
}

#[test]
fn writes_requested_formats() {
    let dir = TempDir::new().unwrap();
    let table = parse_delimited("a\n1\n").unwrap();
    let codebook = build_codebook("tiny.csv", &table, None, None);
    let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let paths = write_reports(
        dir.path(),
        &codebook,
        ReportKind::Codebook,
        ReportKind::Codebook.formats(),
        date,
    )
    .unwrap();
    let names: Vec<String> = paths
        .iter()
        .map(|path| path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        vec!["codebook_tiny.csv", "codebook_tiny.txt", "codebook_tiny.md"]
    );
    assert!(std::fs::read_to_string(&paths[1]).unwrap().starts_with("VARIABLE CODEBOOK\n"));

    let error = write_reports(
        dir.path(),
        &codebook,
        ReportKind::Dictionary,
        &[ReportFormat::Text],
        date,
    )
    .unwrap_err();
    assert!(matches!(error, ReportError::UnsupportedFormat { .. }));
}
