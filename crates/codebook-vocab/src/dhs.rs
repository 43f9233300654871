//! Built-in vocabulary of Demographic and Health Surveys (DHS) recode variables.

use crate::{Vocabulary, VocabularyEntry};

const DHS_ENTRIES: &[(&str, &str, &str, &str)] = &[
    (
        "v012",
        "Respondent age",
        "Age of respondent in completed years at time of interview",
        "Years",
    ),
    ("v025", "Type of residence", "Urban (1) or Rural (2) residence", "None"),
    (
        "v106",
        "Highest education level",
        "Highest level of education attained (0=None,1=Primary,2=Secondary,3=Higher)",
        "None",
    ),
    (
        "v190",
        "Wealth index",
        "Household wealth index quintile (1=Poorest to 5=Richest)",
        "None",
    ),
    (
        "v201",
        "Total children ever born",
        "Total number of children ever born to respondent",
        "Count",
    ),
    (
        "v313",
        "Current contraceptive use",
        "Current use of any contraceptive method (0=No,1=Yes)",
        "None",
    ),
    (
        "b5",
        "Child alive",
        "Whether child is still alive at time of interview (0=No,1=Yes)",
        "None",
    ),
    (
        "hw70",
        "Height-for-age z-score",
        "Height-for-age z-score (WHO standards) x100",
        "Score",
    ),
    (
        "hw71",
        "Weight-for-height z-score",
        "Weight-for-height z-score (WHO standards) x100",
        "Score",
    ),
];

/// The DHS recode vocabulary used when no other vocabulary is configured.
pub fn dhs_vocabulary() -> Vocabulary {
    let mut vocabulary = Vocabulary::new("DHS");
    for (code, label, definition, unit) in DHS_ENTRIES {
        vocabulary.insert(VocabularyEntry {
            code: (*code).to_string(),
            label: (*label).to_string(),
            definition: (*definition).to_string(),
            unit: (*unit).to_string(),
        });
    }
    vocabulary
}
