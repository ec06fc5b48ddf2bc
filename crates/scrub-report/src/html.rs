//! HTML report rendering for table summaries.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use scrub_ingest::format_numeric;

use crate::summary::{ColumnSummary, TableSummary};

/// Render a table summary as a standalone HTML document.
pub fn write_html_report(path: &Path, summary: &TableSummary) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    writer.write_all(b"<!DOCTYPE html>\n")?;
    let mut html = Writer::new_with_indent(writer, b' ', 2);

    html.write_event(Event::Start(BytesStart::new("html")))?;
    html.write_event(Event::Start(BytesStart::new("head")))?;
    write_text_element(&mut html, "title", &title(summary))?;
    html.write_event(Event::End(BytesEnd::new("head")))?;

    html.write_event(Event::Start(BytesStart::new("body")))?;
    write_text_element(&mut html, "h1", &title(summary))?;
    write_text_element(&mut html, "p", &format!("{} rows", summary.row_count))?;

    let mut table = BytesStart::new("table");
    table.push_attribute(("border", "1"));
    html.write_event(Event::Start(table))?;
    html.write_event(Event::Start(BytesStart::new("tr")))?;
    for header in ["Column", "Count", "Distinct", "Mean", "Min", "Max"] {
        write_text_element(&mut html, "th", header)?;
    }
    html.write_event(Event::End(BytesEnd::new("tr")))?;
    for column in &summary.columns {
        write_summary_row(&mut html, column)?;
    }
    html.write_event(Event::End(BytesEnd::new("table")))?;

    html.write_event(Event::End(BytesEnd::new("body")))?;
    html.write_event(Event::End(BytesEnd::new("html")))?;
    Ok(())
}

fn title(summary: &TableSummary) -> String {
    format!("Data Report - {}", summary.label)
}

fn write_summary_row<W: Write>(writer: &mut Writer<W>, column: &ColumnSummary) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new("tr")))?;
    write_text_element(writer, "td", &column.name)?;
    write_text_element(writer, "td", &column.count.to_string())?;
    write_text_element(writer, "td", &column.distinct.to_string())?;
    write_text_element(writer, "td", &stat_cell(column.mean))?;
    write_text_element(writer, "td", &stat_cell(column.min))?;
    write_text_element(writer, "td", &stat_cell(column.max))?;
    writer.write_event(Event::End(BytesEnd::new("tr")))?;
    Ok(())
}

fn stat_cell(value: Option<f64>) -> String {
    match value {
        Some(number) => format_numeric(number),
        None => "-".to_string(),
    }
}

/// Write a simple text element.
fn write_text_element<W: Write>(writer: &mut Writer<W>, name: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}
