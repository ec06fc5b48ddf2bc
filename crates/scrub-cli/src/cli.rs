//! CLI argument definitions for the customer record scrubber.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "scrub",
    version,
    about = "Customer record scrubber - clean messy CSV datasets",
    long_about = "Clean a customer record CSV dataset.\n\n\
                  Applies a fixed sequence of normalization rules (duplicate\n\
                  removal, email validation, median age imputation, country\n\
                  canonicalization, date parsing, income filtering, status\n\
                  normalization) and renders before/after summary reports."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean a raw CSV dataset and write the normalized copy.
    Clean(CleanArgs),

    /// List the expected input columns.
    Columns,
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Path to the raw customer record CSV file.
    #[arg(value_name = "RAW_CSV")]
    pub input: PathBuf,

    /// Path the cleaned CSV file is written to.
    #[arg(value_name = "CLEANED_CSV")]
    pub output: PathBuf,

    /// Directory for before/after summary reports.
    #[arg(long = "report-dir", value_name = "DIR", default_value = "reports")]
    pub report_dir: PathBuf,

    /// Skip report generation entirely.
    #[arg(long = "no-report")]
    pub no_report: bool,

    /// Skip PDF export (HTML and JSON reports are still written).
    ///
    /// PDF export shells out to wkhtmltopdf; set WKHTMLTOPDF_PATH to point
    /// at the binary when it is not on the search path.
    #[arg(long = "no-pdf")]
    pub no_pdf: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
