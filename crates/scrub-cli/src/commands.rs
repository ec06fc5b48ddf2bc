use anyhow::Result;
use comfy_table::Table;

use scrub_model::SchemaColumn;

use crate::cli::CleanArgs;
use scrub_cli::pipeline::{ReportOptions, run_pipeline};
use scrub_cli::summary::apply_table_style;
use scrub_cli::types::CleanResult;

pub fn run_clean(args: &CleanArgs) -> Result<CleanResult> {
    let report = ReportOptions {
        report_dir: args.report_dir.clone(),
        enabled: !args.no_report,
        render_pdf: !args.no_pdf,
    };
    run_pipeline(&args.input, &args.output, &report)
}

pub fn run_columns() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Column", "Cleaning rule"]);
    apply_table_style(&mut table);
    for column in SchemaColumn::ALL {
        table.add_row(vec![column.as_str(), column.description()]);
    }
    println!("{table}");
    Ok(())
}
