//! Codebook assembly and review.
//!
//! The [`Assembler`] turns a [`RawTable`](codebook_model::RawTable) into
//! dictionary entries, carrying forward the overlay of any entry that already
//! existed in a previous run. The [`review`] helpers summarize an assembled
//! dictionary for sharing.

pub mod assemble;
pub mod options;
pub mod review;

pub use assemble::{Assembler, assemble, build_codebook};
pub use options::AssembleOptions;
pub use review::{
    CHECKLIST_ITEMS, ChecklistItem, ChecklistStatus, DictionaryStats, EntryFilter,
    sensitive_entries, sharing_checklist,
};
