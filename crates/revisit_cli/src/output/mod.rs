//! Output formatting module

mod json;
mod text;

use miette::Result;
use revisit_core::PassReport;

use crate::cli::OutputFormat;

pub fn output_reports(reports: &[PassReport], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => json::output_json(reports)?,
        OutputFormat::Text => text::output_text(reports),
    }

    Ok(())
}
