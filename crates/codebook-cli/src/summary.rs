use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use codebook_core::{ChecklistStatus, DictionaryStats, sensitive_entries, sharing_checklist};
use codebook_model::{DictionaryEntry, SemanticType, Sensitivity};
use codebook_report::ReportKind;
use codebook_vocab::Vocabulary;

use crate::types::RunResult;

pub fn print_summary(result: &RunResult) {
    println!("Dataset: {}", result.codebook.dataset);
    println!(
        "Rows: {} | Variables: {}",
        result.codebook.rows,
        result.codebook.variable_count()
    );
    match result.kind {
        ReportKind::Codebook => print_codebook_table(&result.codebook.entries),
        ReportKind::Dictionary => print_dictionary(result),
    }
    if result.outputs.is_empty() {
        println!("Output: none (dry run)");
    } else {
        println!("Output: {}", result.output_dir.display());
        for path in &result.outputs {
            println!("  {}", path.display());
        }
    }
    if let Some(path) = &result.saved {
        println!("Saved: {}", path.display());
    }
}

fn print_codebook_table(entries: &[DictionaryEntry]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Variable"),
        header_cell("Type"),
        header_cell("N"),
        header_cell("Missing%"),
        header_cell("Unique"),
        header_cell("Range"),
        header_cell("Label"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for entry in entries {
        let profile = &entry.profile;
        table.add_row(vec![
            variable_cell(entry.name()),
            type_cell(entry.effective_type()),
            Cell::new(profile.n),
            missing_cell(profile.missing_pct),
            Cell::new(profile.unique),
            range_cell(&profile.min, &profile.max),
            text_cell(&entry.overlay.label),
        ]);
    }
    println!("{table}");
}

fn print_dictionary(result: &RunResult) {
    let entries = &result.codebook.entries;
    let stats = DictionaryStats::from_entries(entries);
    println!(
        "Labelled: {}/{} | Vocabulary mapped: {} | PII variables: {}",
        stats.labelled, stats.variables, stats.mapped, stats.identifying
    );

    let listed = result.filter.apply(entries);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Variable"),
        header_cell("Label"),
        header_cell("Type"),
        header_cell("Values"),
        header_cell("Unit"),
        header_cell("Sensitivity"),
        header_cell("Mapped"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 6, CellAlignment::Center);
    for entry in &listed {
        table.add_row(vec![
            variable_cell(entry.name()),
            text_cell(&entry.overlay.label),
            Cell::new(entry.effective_type().dictionary_label()),
            text_cell(&entry.values_display()),
            text_cell(&entry.overlay.unit),
            sensitivity_cell(entry.overlay.sensitivity),
            mapped_cell(entry.overlay.dhs_mapped),
        ]);
    }
    println!("{table}");
    if listed.len() < entries.len() {
        println!("Showing {} of {} variables", listed.len(), entries.len());
    }

    print_sensitive_table(entries);
    print_checklist(entries);
}

fn print_sensitive_table(entries: &[DictionaryEntry]) {
    let sensitive = sensitive_entries(entries);
    if sensitive.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Variable"),
        header_cell("Label"),
        header_cell("Sensitivity"),
        header_cell("Notes"),
    ]);
    apply_table_style(&mut table);
    for entry in sensitive {
        table.add_row(vec![
            variable_cell(entry.name()),
            text_cell(&entry.overlay.label),
            sensitivity_cell(entry.overlay.sensitivity),
            text_cell(&entry.overlay.notes),
        ]);
    }
    println!();
    println!("Sensitive variables:");
    println!("{table}");
}

fn print_checklist(entries: &[DictionaryEntry]) {
    println!();
    println!("Data sharing checklist:");
    for item in sharing_checklist(entries) {
        let mark = match item.status {
            ChecklistStatus::Done => "[x]",
            ChecklistStatus::Pending => "[ ]",
            ChecklistStatus::Manual => "[?]",
        };
        println!("  {mark} {}", item.title);
    }
}

pub fn print_vocabulary(vocabulary: &Vocabulary) {
    let mut table = Table::new();
    table.set_header(vec!["Code", "Label", "Unit", "Definition"]);
    apply_table_style(&mut table);
    for entry in vocabulary.iter() {
        table.add_row(vec![
            entry.code.clone(),
            entry.label.clone(),
            entry.unit.clone(),
            entry.definition.clone(),
        ]);
    }
    println!("Vocabulary: {} ({} codes)", vocabulary.name, vocabulary.len());
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
    if table.column_count() >= 7 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(24)),
            ColumnConstraint::UpperBoundary(Width::Percentage(30)),
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
            ColumnConstraint::UpperBoundary(Width::Percentage(25)),
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
            ColumnConstraint::UpperBoundary(Width::Percentage(25)),
            ColumnConstraint::UpperBoundary(Width::Percentage(35)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn variable_cell(name: &str) -> Cell {
    Cell::new(name)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn type_cell(semantic_type: SemanticType) -> Cell {
    let color = match semantic_type {
        SemanticType::Numeric => Color::Green,
        SemanticType::Binary => Color::Magenta,
        SemanticType::Categorical => Color::Yellow,
        SemanticType::Text => Color::White,
        SemanticType::Date => Color::Cyan,
    };
    Cell::new(semantic_type).fg(color)
}

fn missing_cell(missing_pct: u32) -> Cell {
    match missing_pct {
        0 => dim_cell("0%"),
        pct if pct > 20 => Cell::new(format!("{pct}%"))
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        pct => Cell::new(format!("{pct}%")).fg(Color::Yellow),
    }
}

fn range_cell(min: &str, max: &str) -> Cell {
    if min.is_empty() && max.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(format!("{min} – {max}"))
    }
}

fn sensitivity_cell(sensitivity: Sensitivity) -> Cell {
    match sensitivity {
        Sensitivity::Public | Sensitivity::Internal => Cell::new(sensitivity),
        Sensitivity::Sensitive => Cell::new(sensitivity).fg(Color::Yellow),
        Sensitivity::Pii | Sensitivity::HighlySensitive => Cell::new(sensitivity)
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
    }
}

fn mapped_cell(mapped: bool) -> Cell {
    if mapped {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
    }
}

fn text_cell(value: &str) -> Cell {
    if value.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(value)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
