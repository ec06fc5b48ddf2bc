//! Console summary rendering for cleaning runs.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use scrub_ingest::format_numeric;
use scrub_report::TableSummary;

use crate::types::CleanResult;

pub fn print_summary(result: &CleanResult) {
    println!("Input: {}", result.input.display());
    println!("Output: {}", result.output.display());
    for path in &result.report_paths {
        println!("Report: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Rows")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("raw"), Cell::new(result.raw_rows)]);
    table.add_row(vec![Cell::new("cleaned"), Cell::new(result.cleaned_rows)]);
    let dropped = result.raw_rows.saturating_sub(result.cleaned_rows);
    table.add_row(vec![
        Cell::new("dropped").add_attribute(Attribute::Bold),
        count_cell(dropped, Color::Yellow),
    ]);
    println!("{table}");

    if let Some(summary) = &result.cleaned_summary {
        print_column_table(summary);
    }

    if !result.warnings.is_empty() {
        eprintln!("Warnings:");
        for warning in &result.warnings {
            eprintln!("- {warning}");
        }
    }
}

fn print_column_table(summary: &TableSummary) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Count"),
        header_cell("Distinct"),
        header_cell("Mean"),
        header_cell("Min"),
        header_cell("Max"),
    ]);
    apply_table_style(&mut table);
    for idx in 1..=5 {
        align_column(&mut table, idx, CellAlignment::Right);
    }
    for column in &summary.columns {
        table.add_row(vec![
            Cell::new(&column.name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(column.count),
            Cell::new(column.distinct),
            stat_cell(column.mean),
            stat_cell(column.min),
            stat_cell(column.max),
        ]);
    }
    println!();
    println!("Cleaned columns:");
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
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

fn count_cell(value: usize, color: Color) -> Cell {
    if value > 0 {
        Cell::new(value).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(value)
    }
}

fn stat_cell(value: Option<f64>) -> Cell {
    match value {
        Some(number) => Cell::new(format_numeric(number)),
        None => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
