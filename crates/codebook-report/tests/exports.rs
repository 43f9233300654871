//! Export format tests over a small survey extract.

use chrono::NaiveDate;
use codebook_core::build_codebook;
use codebook_ingest::parse_delimited;
use codebook_model::{Codebook, OverlayEdit, SemanticType};
use codebook_report::{
    codebook_csv, codebook_markdown, codebook_text, dictionary_csv, dictionary_markdown,
};
use codebook_vocab::dhs_vocabulary;

const SURVEY: &str = "caseid,v012,sex,notes\n1,34,M,ok\n2,29,F,\n3,NA,M,late\n4,41,F,retest\n";

fn survey_codebook() -> Codebook {
    let vocabulary = dhs_vocabulary();
    let table = parse_delimited(SURVEY).unwrap();
    build_codebook("survey.csv", &table, Some(&vocabulary), None)
        .update("sex", OverlayEdit::Label("Sex of respondent".to_string()))
        .unwrap()
        .update("sex", OverlayEdit::Notes("Self-reported".to_string()))
        .unwrap()
}

#[test]
fn codebook_csv_snapshot() {
    let csv = codebook_csv(&survey_codebook()).unwrap();
    insta::assert_snapshot!(csv, @r#"
    "Variable","Label","Type","N","Missing","Missing%","Unique Values","Min","Max","Mean","Value Labels","Notes"
    "caseid","","numeric","4","0","0%","4","1","4","2.50","1 | 2 | 3 | 4",""
    "v012","Respondent age","numeric","3","1","25%","3","29","41","34.67","34 | 29 | 41",""
    "sex","Sex of respondent","binary","4","0","0%","2","F","M","","M | F","Self-reported"
    "notes","","categorical","3","1","25%","3","late","retest","","ok | late | retest",""
    "#);
}

#[test]
fn dictionary_csv_snapshot() {
    let csv = dictionary_csv(&survey_codebook()).unwrap();
    insta::assert_snapshot!(csv, @r#"
    "Variable Name","Label","Definition","Type","Unit","Values / Codes","Min","Max","Missing Code","Sensitivity","Source","N","Missing%","Notes"
    "caseid","","","Continuous","","","1","4",".","PII","","4","0%",""
    "v012","Respondent age","Age of respondent in completed years at time of interview","Continuous","Years","","29","41",".","Internal","","3","25%",""
    "sex","Sex of respondent","","Binary","","M, F","","",".","Internal","","4","0%","Self-reported"
    "notes","","","Categorical","","ok, late, retest","","",".","Internal","","3","25%",""
    "#);
}

#[test]
fn codebook_text_layout() {
    let generated = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
    let text = codebook_text(&survey_codebook(), generated);
    let expected = format!(
        "VARIABLE CODEBOOK\n\
         Dataset: survey.csv\n\
         Rows: 4 | Variables: 4\n\
         Generated: 2024-03-09\n\
         {rule}\n\
         \n\
         1. caseid\n   Label:    (no label)\n   Type:     numeric\n   N:        4 (0 missing, 0%)\n   Range:    1 — 4\n   Mean:     2.50\n   Values:   1, 2, 3, 4\n\
         \n\
         2. v012\n   Label:    Respondent age\n   Type:     numeric\n   N:        3 (1 missing, 25%)\n   Range:    29 — 41\n   Mean:     34.67\n   Values:   34, 29, 41\n\
         \n\
         3. sex\n   Label:    Sex of respondent\n   Type:     binary\n   N:        4 (0 missing, 0%)\n   Range:    F — M\n   Values:   M, F\n   Notes:    Self-reported\n\
         \n\
         4. notes\n   Label:    (no label)\n   Type:     categorical\n   N:        3 (1 missing, 25%)\n   Range:    late — retest\n   Values:   ok, late, retest\n\
         \n",
        rule = "=".repeat(60)
    );
    assert_eq!(text, expected);
}

#[test]
fn codebook_markdown_table() {
    let table = codebook_markdown(&survey_codebook());
    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines[0], "| Variable | Label | Type | N | Missing% | Range |");
    assert_eq!(lines[1], "|---|---|---|---|---|---|");
    assert_eq!(lines[2], "| caseid | - | numeric | 4 | 0% | 1–4 |");
    assert_eq!(lines[3], "| v012 | Respondent age | numeric | 3 | 25% | 29–41 |");
    assert_eq!(lines.len(), 6);
}

#[test]
fn dictionary_markdown_table() {
    let table = dictionary_markdown(&survey_codebook());
    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines[0], "# Data Dictionary — survey.csv");
    assert_eq!(lines[1], "");
    assert_eq!(
        lines[2],
        "| Variable | Label | Type | Definition | Values | Unit | Sensitivity |"
    );
    assert_eq!(lines[4], "| caseid | - | Continuous | - | - |  | PII |");
    assert_eq!(
        lines[6],
        "| sex | Sex of respondent | Binary | - | M, F |  | Internal |"
    );
}

#[test]
fn date_override_shows_in_exports() {
    let codebook = survey_codebook()
        .update("notes", OverlayEdit::Type(Some(SemanticType::Date)))
        .unwrap();
    let csv = dictionary_csv(&codebook).unwrap();
    let notes = csv.lines().last().unwrap();
    assert!(notes.starts_with(r#""notes","","","Date","","","#));
}
