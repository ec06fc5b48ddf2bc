use std::path::PathBuf;

use scrub_report::TableSummary;

/// Outcome of a cleaning run, consumed by the console summary.
#[derive(Debug)]
pub struct CleanResult {
    pub input: PathBuf,
    pub output: PathBuf,
    pub raw_rows: usize,
    pub cleaned_rows: usize,
    pub raw_summary: Option<TableSummary>,
    pub cleaned_summary: Option<TableSummary>,
    pub report_paths: Vec<PathBuf>,
    pub warnings: Vec<String>,
}
