use std::fs;

use polars::prelude::{DataFrame, IntoColumn, NamedFrom, Series};

use scrub_report::{summarize, write_html_report, write_json_summary};

fn sample_df() -> DataFrame {
    DataFrame::new(vec![
        Series::new(
            "Name".into(),
            vec![Some("Alice".to_string()), Some("Bob".to_string())],
        )
        .into_column(),
        Series::new("Income".into(), vec![Some(50000i64), Some(60000)]).into_column(),
    ])
    .unwrap()
}

#[test]
fn html_report_contains_title_and_stats() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("raw_report.html");
    let summary = summarize(&sample_df(), "raw");

    write_html_report(&path, &summary).unwrap();

    let html = fs::read_to_string(&path).unwrap();
    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains("Data Report - raw"));
    assert!(html.contains("<td>Income</td>"));
    assert!(html.contains("<td>55000</td>"), "mean cell missing: {html}");
    assert!(html.contains("2 rows"));
}

#[test]
fn html_report_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reports").join("cleaned_report.html");
    let summary = summarize(&sample_df(), "cleaned");

    write_html_report(&path, &summary).unwrap();

    assert!(path.exists());
}

#[test]
fn json_summary_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("raw_summary.json");
    let summary = summarize(&sample_df(), "raw");

    write_json_summary(&path, &summary).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["label"], "raw");
    assert_eq!(value["row_count"], 2);
    assert_eq!(value["columns"][1]["name"], "Income");
    assert_eq!(value["columns"][1]["mean"], 55000.0);
}
