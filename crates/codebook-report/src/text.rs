use chrono::NaiveDate;

use codebook_model::{Codebook, DictionaryEntry};

/// Width of the `=` rule under the text header.
pub const RULE_WIDTH: usize = 60;

/// Plain text codebook: a header followed by one numbered block per variable.
///
/// Optional lines (mean, values, notes) are left out when empty.
pub fn codebook_text(codebook: &Codebook, generated: NaiveDate) -> String {
    let mut out = String::new();
    out.push_str("VARIABLE CODEBOOK\n");
    out.push_str(&format!("Dataset: {}\n", codebook.dataset));
    out.push_str(&format!(
        "Rows: {} | Variables: {}\n",
        codebook.rows,
        codebook.variable_count()
    ));
    out.push_str(&format!("Generated: {}\n", generated.format("%Y-%m-%d")));
    out.push_str(&"=".repeat(RULE_WIDTH));
    out.push_str("\n\n");
    for (index, entry) in codebook.entries.iter().enumerate() {
        push_block(&mut out, index + 1, entry);
        out.push('\n');
    }
    out
}

fn push_block(out: &mut String, number: usize, entry: &DictionaryEntry) {
    let profile = &entry.profile;
    let label = if entry.overlay.label.is_empty() {
        "(no label)"
    } else {
        entry.overlay.label.as_str()
    };
    out.push_str(&format!("{number}. {}\n", profile.name));
    out.push_str(&format!("   Label:    {label}\n"));
    out.push_str(&format!("   Type:     {}\n", entry.effective_type()));
    out.push_str(&format!(
        "   N:        {} ({} missing, {}%)\n",
        profile.n, profile.missing, profile.missing_pct
    ));
    out.push_str(&format!("   Range:    {} — {}\n", profile.min, profile.max));
    if profile.has_mean() {
        out.push_str(&format!("   Mean:     {}\n", profile.mean));
    }
    if !profile.values.is_empty() {
        out.push_str(&format!("   Values:   {}\n", profile.values.join(", ")));
    }
    if !entry.overlay.notes.is_empty() {
        out.push_str(&format!("   Notes:    {}\n", entry.overlay.notes));
    }
}
