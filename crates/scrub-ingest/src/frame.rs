use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};
use tracing::debug;

use crate::csv_table::{CsvTable, read_csv_table};

/// Convert a raw CSV table into a string-typed `DataFrame`.
///
/// Cells that are empty after trimming become nulls so the cleaning rules
/// can distinguish missing values from collected ones.
pub fn table_to_frame(table: &CsvTable) -> Result<DataFrame> {
    let mut columns: Vec<Column> = Vec::with_capacity(table.headers.len());
    for (idx, header) in table.headers.iter().enumerate() {
        let mut values: Vec<Option<String>> = Vec::with_capacity(table.rows.len());
        for row in &table.rows {
            let cell = row.get(idx).map(String::as_str).unwrap_or("");
            if cell.trim().is_empty() {
                values.push(None);
            } else {
                values.push(Some(cell.to_string()));
            }
        }
        columns.push(Series::new(header.as_str().into(), values).into_column());
    }
    DataFrame::new(columns).context("build dataframe from csv table")
}

/// Read a customer record CSV file into a `DataFrame`.
pub fn read_customer_frame(path: &Path) -> Result<DataFrame> {
    let table = read_csv_table(path)?;
    let frame = table_to_frame(&table)?;
    debug!(
        path = %path.display(),
        rows = frame.height(),
        columns = frame.width(),
        "loaded csv table"
    );
    Ok(frame)
}
