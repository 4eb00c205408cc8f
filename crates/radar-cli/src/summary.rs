use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use radar_model::SchemaCatalog;
use radar_verify::{IssueCategory, IssueSeverity, VerifyReport};

pub fn print_tables(catalog: &SchemaCatalog) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Columns"),
        header_cell("Foreign keys"),
        header_cell("Checks"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for def in catalog.tables() {
        table.add_row(vec![
            Cell::new(&def.name).fg(Color::Blue),
            Cell::new(def.columns.len()),
            Cell::new(def.foreign_keys.len()),
            Cell::new(def.check_constraints.len()),
        ]);
    }
    println!("{table}");
    println!(
        "{} tables, {} enum types",
        catalog.table_count(),
        catalog.enum_type_count()
    );
}

pub fn print_verify_summary(report: &VerifyReport) {
    println!(
        "Checked {} table name(s) and {} enum type(s)",
        report.checked_tables, report.checked_enums
    );
    if report.is_pass() {
        println!("OK: every expected statement was rendered");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Severity"),
        header_cell("Category"),
        header_cell("Name"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Center);
    for issue in &report.issues {
        table.add_row(vec![
            severity_cell(issue.severity),
            Cell::new(category_label(issue.category)),
            Cell::new(&issue.name),
            Cell::new(&issue.message),
        ]);
    }
    println!("{table}");
    eprintln!(
        "FAIL: {} issue(s); missing tables: {:?}",
        report.error_count(),
        report.missing_tables()
    );
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn severity_cell(severity: IssueSeverity) -> Cell {
    match severity {
        IssueSeverity::Error => Cell::new("ERROR").fg(Color::Red),
        IssueSeverity::Warning => Cell::new("WARN").fg(Color::Yellow),
    }
}

fn category_label(category: IssueCategory) -> &'static str {
    match category {
        IssueCategory::MissingTable => "missing table",
        IssueCategory::MissingEnum => "missing enum",
        IssueCategory::EnumOrderMismatch => "enum order",
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
