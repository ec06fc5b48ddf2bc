//! The cleaning pipeline with explicit stages.
//!
//! Stages run in order:
//! 1. **Ingest**: read the raw CSV into a string-typed table
//! 2. **Report (raw)**: summarize the table before cleaning
//! 3. **Normalize**: apply the field-level cleaning rules
//! 4. **Output**: write the cleaned CSV
//! 5. **Report (cleaned)**: summarize the table after cleaning
//!
//! Report failures are collected as warnings; the cleaned CSV is the primary
//! deliverable and is produced even when every report fails.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use polars::prelude::{AnyValue, DataFrame};
use tracing::{info, info_span, warn};

use scrub_core::normalize;
use scrub_ingest::{any_to_string, read_customer_frame};
use scrub_report::{TableSummary, render_pdf, summarize, write_html_report, write_json_summary};

use crate::types::CleanResult;

/// Report generation settings for a pipeline run.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub report_dir: PathBuf,
    pub enabled: bool,
    pub render_pdf: bool,
}

/// Run the full pipeline: ingest, report, normalize, write, report.
pub fn run_pipeline(input: &Path, output: &Path, report: &ReportOptions) -> Result<CleanResult> {
    let pipeline_span = info_span!("pipeline", input = %input.display());
    let _pipeline_guard = pipeline_span.enter();
    let mut warnings = Vec::new();
    let mut report_paths = Vec::new();

    let ingest_start = Instant::now();
    let raw = read_customer_frame(input)
        .with_context(|| format!("load raw data from {}", input.display()))?;
    info!(
        rows = raw.height(),
        columns = raw.width(),
        duration_ms = ingest_start.elapsed().as_millis() as u64,
        "loaded raw data"
    );

    let raw_summary = generate_reports(&raw, "raw_data", report, &mut warnings, &mut report_paths);

    let normalize_start = Instant::now();
    let cleaned = normalize(&raw).context("normalize records")?;
    info!(
        rows_in = raw.height(),
        rows_out = cleaned.height(),
        duration_ms = normalize_start.elapsed().as_millis() as u64,
        "normalized records"
    );

    write_frame_csv(output, &cleaned)
        .with_context(|| format!("write cleaned data to {}", output.display()))?;
    info!(path = %output.display(), rows = cleaned.height(), "wrote cleaned data");

    let cleaned_summary = generate_reports(
        &cleaned,
        "cleaned_data",
        report,
        &mut warnings,
        &mut report_paths,
    );

    Ok(CleanResult {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        raw_rows: raw.height(),
        cleaned_rows: cleaned.height(),
        raw_summary,
        cleaned_summary,
        report_paths,
        warnings,
    })
}

/// Write a table to CSV with nulls as empty cells, creating parent
/// directories as needed.
pub fn write_frame_csv(path: &Path, df: &DataFrame) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("create {}", path.display()))?;
    let headers: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.as_str().to_string())
        .collect();
    writer.write_record(&headers).context("write header row")?;
    let columns = df.get_columns();
    for idx in 0..df.height() {
        let mut record = Vec::with_capacity(columns.len());
        for column in columns {
            record.push(any_to_string(column.get(idx).unwrap_or(AnyValue::Null)));
        }
        writer
            .write_record(&record)
            .with_context(|| format!("write row {idx}"))?;
    }
    writer.flush().context("flush csv writer")?;
    Ok(())
}

/// Summarize a table and render its reports.
///
/// Every failure lands in `warnings` instead of aborting the run; the
/// summary itself is returned for the console output when computed.
fn generate_reports(
    df: &DataFrame,
    label: &str,
    options: &ReportOptions,
    warnings: &mut Vec<String>,
    report_paths: &mut Vec<PathBuf>,
) -> Option<TableSummary> {
    if !options.enabled {
        return None;
    }
    let report_span = info_span!("report", label);
    let _report_guard = report_span.enter();
    let summary = summarize(df, label);

    let html_path = options.report_dir.join(format!("{label}_report.html"));
    let mut html_ok = false;
    match write_html_report(&html_path, &summary) {
        Ok(()) => {
            info!(path = %html_path.display(), "wrote html report");
            report_paths.push(html_path.clone());
            html_ok = true;
        }
        Err(error) => {
            warn!(label, %error, "html report failed");
            warnings.push(format!("{label} html report: {error:#}"));
        }
    }

    let json_path = options.report_dir.join(format!("{label}_summary.json"));
    match write_json_summary(&json_path, &summary) {
        Ok(()) => {
            info!(path = %json_path.display(), "wrote json summary");
            report_paths.push(json_path);
        }
        Err(error) => {
            warn!(label, %error, "json summary failed");
            warnings.push(format!("{label} json summary: {error:#}"));
        }
    }

    if options.render_pdf && html_ok {
        let pdf_path = options.report_dir.join(format!("{label}_report.pdf"));
        match render_pdf(&html_path, &pdf_path) {
            Ok(()) => {
                info!(path = %pdf_path.display(), "wrote pdf report");
                report_paths.push(pdf_path);
            }
            Err(error) => {
                warn!(label, %error, "pdf export failed");
                warnings.push(format!("{label} pdf export: {error:#}"));
            }
        }
    }

    Some(summary)
}
