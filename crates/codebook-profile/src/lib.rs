//! Column profiling for raw tables.
//!
//! Profiling is a pure, per-column computation:
//!
//! 1. [`missing`] separates missing sentinels from present values.
//! 2. [`classify`] assigns a semantic type from the present values.
//! 3. [`summary`] computes counts, extrema, mean and the value list.
//!
//! [`profile_table`] runs all three for every column in header order.

pub mod classify;
pub mod missing;
pub mod numeric;
pub mod profile;
pub mod summary;

pub use classify::{
    BINARY_MAX_DISTINCT, CATEGORICAL_MAX_DISTINCT, NUMERIC_RATIO_THRESHOLD, classify,
};
pub use missing::{MISSING_SENTINELS, is_missing, missing_count, missing_pct};
pub use numeric::{format_number, parse_numeric};
pub use profile::{profile_column, profile_table};
pub use summary::{ColumnSummary, VALUE_LIST_LIMIT, summarize};
