//! Property tests for the merge of prior overlays.

use codebook_core::assemble;
use codebook_model::{DictionaryEntry, Overlay, OverlayEdit, RawTable, Sensitivity, apply_edit};
use codebook_vocab::dhs_vocabulary;
use proptest::prelude::*;

const HEADERS: [&str; 4] = ["caseid", "v012", "sex", "notes"];

fn cell() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("NA".to_string()),
        (0i32..90).prop_map(|value| value.to_string()),
        "[a-d]{1,3}",
    ]
}

fn table() -> impl Strategy<Value = RawTable> {
    prop::collection::vec(prop::collection::vec(cell(), HEADERS.len()), 0..25).prop_map(|rows| {
        let headers = HEADERS.iter().map(|name| name.to_string()).collect();
        RawTable::new(headers, rows).unwrap()
    })
}

fn overlays(entries: &[DictionaryEntry]) -> Vec<Overlay> {
    entries.iter().map(|entry| entry.overlay.clone()).collect()
}

fn edit() -> impl Strategy<Value = (usize, OverlayEdit)> {
    (
        0..HEADERS.len(),
        prop_oneof![
            "[A-Za-z ]{0,12}".prop_map(OverlayEdit::Label),
            "[A-Za-z ]{0,12}".prop_map(OverlayEdit::Notes),
            Just(OverlayEdit::Sensitivity(Sensitivity::HighlySensitive)),
            Just(OverlayEdit::MissingCode("99".to_string())),
        ],
    )
}

proptest! {
    #[test]
    fn merge_is_idempotent(
        first in table(),
        second in table(),
        edits in prop::collection::vec(edit(), 0..6)
    ) {
        let vocabulary = dhs_vocabulary();
        let mut previous = assemble(&first, Some(&vocabulary), None);
        for (index, edit) in edits {
            previous = apply_edit(&previous, HEADERS[index], edit).unwrap();
        }

        let once = assemble(&second, Some(&vocabulary), Some(&previous));
        let twice = assemble(&second, Some(&vocabulary), Some(&once));
        prop_assert_eq!(overlays(&once), overlays(&twice));
        prop_assert_eq!(overlays(&once), overlays(&previous));
    }
}
