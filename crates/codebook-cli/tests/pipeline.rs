//! Integration tests for the pipeline module.

use std::fs;

use tempfile::TempDir;

use codebook_cli::logging::{REDACTED_VALUE, log_data_enabled, redact_value};
use codebook_cli::pipeline::{ProfileRequest, VocabularySource, build, default_output_dir};
use codebook_model::{OverlayEdit, SemanticType, Sensitivity};
use codebook_report::save_codebook;

#[test]
fn builds_from_delimited_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("survey.csv");
    fs::write(&input, "caseid,v012,sex\n1,34,M\n2,29,F\n3,NA,M\n4,41,F\n").unwrap();

    let codebook = build(&ProfileRequest::new(&input)).unwrap();
    assert_eq!(codebook.dataset, "survey.csv");
    assert_eq!(codebook.rows, 4);
    let age = codebook.get("v012").unwrap();
    assert_eq!(age.profile.inferred_type, SemanticType::Numeric);
    assert_eq!(age.profile.mean, "34.67");
}

#[test]
fn preview_json_uses_source_name() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("preview.json");
    fs::write(
        &input,
        r#"{"headers": ["age", "smoker"],
            "rows": [{"age": 34, "smoker": true}, {"age": null, "smoker": false}],
            "column_types": {"age": "integer"},
            "dataset_id": 17}"#,
    )
    .unwrap();

    let codebook = build(&ProfileRequest::new(&input)).unwrap();
    assert_eq!(codebook.dataset, "17.csv");
    let age = codebook.get("age").unwrap();
    assert_eq!(age.profile.missing, 1);
    assert_eq!(
        codebook.get("smoker").unwrap().profile.inferred_type,
        SemanticType::Binary
    );
}

#[test]
fn dataset_override_and_disabled_vocabulary() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("ir.csv");
    fs::write(&input, "v012\n20\n").unwrap();
    let request = ProfileRequest {
        dataset: Some("Individual recode".to_string()),
        vocabulary: VocabularySource::Disabled,
        ..ProfileRequest::new(&input)
    };
    let codebook = build(&request).unwrap();
    assert_eq!(codebook.dataset, "Individual recode");
    let entry = codebook.get("v012").unwrap();
    assert!(!entry.overlay.dhs_mapped);
    assert_eq!(entry.overlay.label, "");
}

#[test]
fn custom_vocabulary_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("clinic.csv");
    fs::write(&input, "BMI\n22.5\n27.1\n").unwrap();
    let vocabulary = dir.path().join("clinic_vocab.csv");
    fs::write(
        &vocabulary,
        "Code,Label,Definition,Unit\nbmi,Body mass index,Weight over height squared,kg/m2\n",
    )
    .unwrap();
    let request = ProfileRequest {
        vocabulary: VocabularySource::File(vocabulary),
        ..ProfileRequest::new(&input)
    };
    let entry = build(&request).unwrap().entries.remove(0);
    assert_eq!(entry.overlay.label, "Body mass index");
    assert_eq!(entry.overlay.unit, "kg/m2");
    assert!(entry.overlay.dhs_mapped);
}

#[test]
fn previous_document_is_carried_forward() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("survey.csv");
    fs::write(&input, "name,score\nAda,3\n").unwrap();
    let first = build(&ProfileRequest::new(&input))
        .unwrap()
        .update("name", OverlayEdit::Sensitivity(Sensitivity::HighlySensitive))
        .unwrap();
    let document = dir.path().join("survey.json");
    save_codebook(&document, &first).unwrap();

    fs::write(&input, "name,score\nAda,3\nBo,NA\n").unwrap();
    let request = ProfileRequest {
        previous: Some(document),
        ..ProfileRequest::new(&input)
    };
    let second = build(&request).unwrap();
    let name = second.get("name").unwrap();
    assert_eq!(name.overlay.sensitivity, Sensitivity::HighlySensitive);
    assert_eq!(second.get("score").unwrap().profile.missing_pct, 50);
}

#[test]
fn missing_input_mentions_path() {
    let dir = TempDir::new().unwrap();
    let error = build(&ProfileRequest::new(dir.path().join("absent.csv"))).unwrap_err();
    assert!(format!("{error:#}").contains("absent.csv"));
}

#[test]
fn empty_input_is_an_error() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("empty.csv");
    fs::write(&input, "\n\n").unwrap();
    assert!(build(&ProfileRequest::new(&input)).is_err());
}

#[test]
fn vocabulary_flags() {
    assert_eq!(
        VocabularySource::from_flags(None, false),
        VocabularySource::Default
    );
    assert_eq!(
        VocabularySource::from_flags(Some("v.csv".into()), true),
        VocabularySource::Disabled
    );
}

#[test]
fn output_dir_defaults_next_to_input() {
    assert_eq!(
        default_output_dir("data/survey.csv".as_ref()),
        std::path::PathBuf::from("data/output")
    );
    assert_eq!(
        default_output_dir("survey.csv".as_ref()),
        std::path::PathBuf::from("./output")
    );
}

#[test]
fn values_are_redacted_by_default() {
    assert!(!log_data_enabled());
    assert_eq!(redact_value("Ada Lovelace"), REDACTED_VALUE);
}
