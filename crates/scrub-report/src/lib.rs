pub mod html;
pub mod pdf;
pub mod summary;

pub use html::write_html_report;
pub use pdf::{WKHTMLTOPDF_ENV, render_pdf, wkhtmltopdf_binary};
pub use summary::{ColumnSummary, TableSummary, summarize, write_json_summary};
