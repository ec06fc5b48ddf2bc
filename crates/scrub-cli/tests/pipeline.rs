//! End-to-end tests for the cleaning pipeline.

use std::fs;
use std::path::{Path, PathBuf};

use scrub_cli::pipeline::{ReportOptions, run_pipeline};

fn no_reports() -> ReportOptions {
    ReportOptions {
        report_dir: PathBuf::from("unused"),
        enabled: false,
        render_pdf: false,
    }
}

fn write_input(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("raw.csv");
    fs::write(&path, contents).expect("write input");
    path
}

#[test]
fn cleans_a_messy_dataset_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(
        dir.path(),
        " Name ,Email,Age,Country,SignUpDate,Income,Status\n\
         Alice, ALICE@Example.com ,25,usa,2023-01-01,\"$50,000\",active\n\
         Alice, ALICE@Example.com ,25,usa,2023-01-01,\"$50,000\",active\n\
         Bob,invalid-email,,UK,2023-02-01,60000,inactive\n\
         ,x@y.z,40,usa,2023-03-01,70000,active\n\
         Carol,carol@example.com,35,Canada,not a date,-300,active\n\
         Dave,dave@example.com,45,  Germany ,2023-04-01,80000,\n",
    );
    let output = dir.path().join("out").join("cleaned.csv");

    let result = run_pipeline(&input, &output, &no_reports()).unwrap();

    // Duplicate Alice row, the blank-name row, and Carol's negative income
    // are gone; Bob and Dave survive with cleaned values.
    assert_eq!(result.raw_rows, 6);
    assert_eq!(result.cleaned_rows, 3);
    assert!(result.warnings.is_empty());

    let cleaned = fs::read_to_string(&output).unwrap();
    let mut lines = cleaned.lines();
    assert_eq!(
        lines.next().unwrap(),
        "Name,Email,Age,Country,SignUpDate,Income,Status"
    );
    assert_eq!(
        lines.next().unwrap(),
        "Alice,alice@example.com,25,United States,2023-01-01,50000,Active"
    );
    // Bob's missing age takes the median of 25, 35, 45.
    assert_eq!(
        lines.next().unwrap(),
        "Bob,,35,United Kingdom,2023-02-01,60000,Inactive"
    );
    assert_eq!(
        lines.next().unwrap(),
        "Dave,dave@example.com,45,Germany,2023-04-01,80000,Unknown"
    );
    assert_eq!(lines.next(), None);
}

#[test]
fn reports_are_written_next_to_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(
        dir.path(),
        "Name,Email,Age,Country,SignUpDate,Income,Status\n\
         Alice,a@b.com,25,usa,2023-01-01,50000,active\n",
    );
    let output = dir.path().join("cleaned.csv");
    let report_dir = dir.path().join("reports");
    let options = ReportOptions {
        report_dir: report_dir.clone(),
        enabled: true,
        render_pdf: false,
    };

    let result = run_pipeline(&input, &output, &options).unwrap();

    assert!(report_dir.join("raw_data_report.html").exists());
    assert!(report_dir.join("raw_data_summary.json").exists());
    assert!(report_dir.join("cleaned_data_report.html").exists());
    assert!(report_dir.join("cleaned_data_summary.json").exists());
    assert_eq!(result.report_paths.len(), 4);
    assert!(result.raw_summary.is_some());
    assert!(result.cleaned_summary.is_some());
}

#[test]
fn missing_schema_column_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "Name,Email\nAlice,a@b.com\n");
    let output = dir.path().join("cleaned.csv");

    let error = run_pipeline(&input, &output, &no_reports()).unwrap_err();

    assert!(format!("{error:#}").contains("missing"), "got: {error:#}");
    assert!(!output.exists());
}

#[test]
fn header_only_input_produces_header_only_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(
        dir.path(),
        "Name,Email,Age,Country,SignUpDate,Income,Status\n",
    );
    let output = dir.path().join("cleaned.csv");

    let result = run_pipeline(&input, &output, &no_reports()).unwrap();

    assert_eq!(result.raw_rows, 0);
    assert_eq!(result.cleaned_rows, 0);
    let cleaned = fs::read_to_string(&output).unwrap();
    assert_eq!(
        cleaned.trim_end(),
        "Name,Email,Age,Country,SignUpDate,Income,Status"
    );
}

#[test]
fn missing_input_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("absent.csv");
    let output = dir.path().join("cleaned.csv");

    assert!(run_pipeline(&input, &output, &no_reports()).is_err());
}
