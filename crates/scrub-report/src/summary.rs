//! Descriptive statistics for a table, computed per column.

use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::{AnyValue, DataFrame};
use serde::Serialize;

use scrub_ingest::{any_to_f64, any_to_string_non_empty};

/// Per-column descriptive statistics.
///
/// `mean`/`min`/`max` are present only when every non-null cell in the
/// column is numeric; `distinct` counts unique non-null values.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnSummary {
    pub name: String,
    pub count: usize,
    pub distinct: usize,
    pub mean: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TableSummary {
    pub label: String,
    pub row_count: usize,
    pub columns: Vec<ColumnSummary>,
}

/// Compute per-column statistics for a table under the given label.
pub fn summarize(df: &DataFrame, label: &str) -> TableSummary {
    let mut columns = Vec::with_capacity(df.width());
    for column in df.get_columns() {
        let name = column.name().as_str().to_string();
        let mut count = 0usize;
        let mut numeric = 0usize;
        let mut sum = 0.0f64;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut uniques: BTreeSet<String> = BTreeSet::new();
        for idx in 0..df.height() {
            let value = column.get(idx).unwrap_or(AnyValue::Null);
            let Some(text) = any_to_string_non_empty(value.clone()) else {
                continue;
            };
            count += 1;
            uniques.insert(text);
            if let Some(number) = any_to_f64(value) {
                numeric += 1;
                sum += number;
                min = min.min(number);
                max = max.max(number);
            }
        }
        let is_numeric = count > 0 && numeric == count;
        columns.push(ColumnSummary {
            name,
            count,
            distinct: uniques.len(),
            mean: is_numeric.then(|| sum / numeric as f64),
            min: is_numeric.then_some(min),
            max: is_numeric.then_some(max),
        });
    }
    TableSummary {
        label: label.to_string(),
        row_count: df.height(),
        columns,
    }
}

/// Write the summary as pretty-printed JSON, creating parent directories.
pub fn write_json_summary(path: &Path, summary: &TableSummary) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), summary)
        .with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use polars::prelude::{Column, IntoColumn, NamedFrom, Series};

    use super::*;

    fn test_df() -> DataFrame {
        DataFrame::new(vec![
            Series::new(
                "Name".into(),
                vec![Some("Alice".to_string()), Some("Bob".to_string()), None],
            )
            .into_column(),
            Series::new("Age".into(), vec![Some(25i64), Some(35), None]).into_column(),
        ])
        .unwrap()
    }

    #[test]
    fn counts_skip_nulls() {
        let summary = summarize(&test_df(), "raw");
        assert_eq!(summary.row_count, 3);
        let name = &summary.columns[0];
        assert_eq!(name.count, 2);
        assert_eq!(name.distinct, 2);
        assert_eq!(name.mean, None);
    }

    #[test]
    fn numeric_columns_get_mean_min_max() {
        let summary = summarize(&test_df(), "raw");
        let age = &summary.columns[1];
        assert_eq!(age.count, 2);
        assert_eq!(age.mean, Some(30.0));
        assert_eq!(age.min, Some(25.0));
        assert_eq!(age.max, Some(35.0));
    }

    #[test]
    fn mixed_text_column_is_not_numeric() {
        let df = DataFrame::new(vec![
            Series::new(
                "Income".into(),
                vec![Some("100".to_string()), Some("abc".to_string())],
            )
            .into_column(),
        ])
        .unwrap();
        let summary = summarize(&df, "raw");
        assert_eq!(summary.columns[0].mean, None);
        assert_eq!(summary.columns[0].count, 2);
    }

    #[test]
    fn empty_frame_summarizes() {
        let df = DataFrame::new(vec![
            Series::new("Name".into(), Vec::<Option<String>>::new()).into_column(),
        ])
        .unwrap();
        let summary = summarize(&df, "raw");
        assert_eq!(summary.row_count, 0);
        assert_eq!(summary.columns[0].count, 0);
        assert_eq!(summary.columns[0].distinct, 0);
    }
}
