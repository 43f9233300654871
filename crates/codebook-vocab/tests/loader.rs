#![allow(missing_docs)]

use std::path::PathBuf;

use codebook_vocab::{VocabularyError, dhs_vocabulary, load_vocabulary};

fn write_vocabulary(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn dhs_vocabulary_maps_known_codes() {
    let vocabulary = dhs_vocabulary();
    assert_eq!(vocabulary.name, "DHS");
    assert_eq!(vocabulary.len(), 9);

    let age = vocabulary.lookup("V012").expect("v012 should be mapped");
    assert_eq!(age.label, "Respondent age");
    assert_eq!(age.unit, "Years");
    assert!(vocabulary.lookup("HW70").is_some());
    assert!(vocabulary.lookup("age").is_none());
}

#[test]
fn loads_csv_vocabulary_with_any_column_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_vocabulary(
        &dir,
        "mics.csv",
        "Unit,Code,Label,Definition\n\
         Years,HL6,Age of household member,Age in completed years\n\
         None, HL4 ,Sex,\"Sex of household member (1=Male, 2=Female)\"\n",
    );

    let vocabulary = load_vocabulary(&path).unwrap();
    assert_eq!(vocabulary.name, "mics");
    assert_eq!(vocabulary.len(), 2);
    let sex = vocabulary.lookup("hl4").unwrap();
    assert_eq!(sex.code, "HL4");
    assert_eq!(sex.definition, "Sex of household member (1=Male, 2=Female)");
    assert_eq!(sex.unit, "None");
}

#[test]
fn rows_without_code_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_vocabulary(
        &dir,
        "partial.csv",
        "code,label,definition,unit\n,orphan,,\nq1,Question 1,,Score\n",
    );
    let vocabulary = load_vocabulary(&path).unwrap();
    assert_eq!(vocabulary.len(), 1);
}

#[test]
fn missing_column_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_vocabulary(&dir, "bad.csv", "Code,Label,Unit\nx,X,None\n");
    let error = load_vocabulary(&path).unwrap_err();
    assert!(matches!(
        error,
        VocabularyError::MissingColumn { column, .. } if column == "definition"
    ));
}

#[test]
fn duplicate_codes_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_vocabulary(
        &dir,
        "dupes.csv",
        "Code,Label,Definition,Unit\nb5,Child alive,,None\nB5,Again,,None\n",
    );
    let error = load_vocabulary(&path).unwrap_err();
    assert!(matches!(error, VocabularyError::DuplicateCode { code, .. } if code == "B5"));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let error = load_vocabulary(&dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(error, VocabularyError::Io { .. }));
}
