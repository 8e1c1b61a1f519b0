//! JSON output formatter

use miette::{IntoDiagnostic, Result};
use revisit_core::PassReport;

pub fn output_json(reports: &[PassReport]) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(reports).into_diagnostic()?
    );
    Ok(())
}
