//! PDF export via the external `wkhtmltopdf` renderer.
//!
//! The renderer binary is resolved from the `WKHTMLTOPDF_PATH` environment
//! variable, falling back to `wkhtmltopdf` on the search path. Export
//! failures are reported to the caller, who treats them as warnings rather
//! than fatal errors.

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result, bail};
use tracing::debug;

/// Environment variable naming the wkhtmltopdf binary.
pub const WKHTMLTOPDF_ENV: &str = "WKHTMLTOPDF_PATH";

/// Resolve the renderer binary path.
pub fn wkhtmltopdf_binary() -> PathBuf {
    std::env::var_os(WKHTMLTOPDF_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("wkhtmltopdf"))
}

/// Render an HTML file to PDF with the external renderer.
pub fn render_pdf(html_path: &Path, pdf_path: &Path) -> Result<()> {
    let binary = wkhtmltopdf_binary();
    debug!(
        binary = %binary.display(),
        html = %html_path.display(),
        pdf = %pdf_path.display(),
        "rendering pdf"
    );
    let output = Command::new(&binary)
        .arg(html_path)
        .arg(pdf_path)
        .output()
        .with_context(|| format!("run {}", binary.display()))?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!(
            "{} exited with {}: {}",
            binary.display(),
            output.status,
            stderr.trim()
        );
    }
    Ok(())
}
