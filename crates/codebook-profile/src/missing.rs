/// Literal cell values treated as absent data. Matching is exact after trimming.
pub const MISSING_SENTINELS: [&str; 4] = ["", "NA", "null", "NULL"];

pub fn is_missing(cell: &str) -> bool {
    MISSING_SENTINELS.contains(&cell.trim())
}

pub fn missing_count<'a>(cells: impl IntoIterator<Item = &'a str>) -> usize {
    cells.into_iter().filter(|cell| is_missing(cell)).count()
}

/// Missing share as a whole percentage, rounded half-up. Zero rows gives 0.
pub fn missing_pct(missing: usize, total_rows: usize) -> u32 {
    if total_rows == 0 {
        return 0;
    }
    (missing as f64 / total_rows as f64 * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels_are_case_sensitive() {
        assert!(is_missing(""));
        assert!(is_missing("  NA "));
        assert!(is_missing("null"));
        assert!(is_missing("NULL"));
        assert!(!is_missing("na"));
        assert!(!is_missing("Null"));
        assert!(!is_missing("N/A"));
        assert!(!is_missing("."));
    }

    #[test]
    fn pct_rounds_half_up() {
        assert_eq!(missing_pct(1, 4), 25);
        assert_eq!(missing_pct(1, 8), 13);
        assert_eq!(missing_pct(1, 3), 33);
        assert_eq!(missing_pct(2, 3), 67);
        assert_eq!(missing_pct(0, 0), 0);
    }

    #[test]
    fn counts_missing_cells() {
        assert_eq!(missing_count(["1", "NA", "", "x", "null"]), 3);
    }
}
