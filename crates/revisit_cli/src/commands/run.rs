//! Run command implementation

use miette::{IntoDiagnostic, Result};
use revisit_core::{ComponentKind, OperationKind, PassConfig, PassPlan};
use tracing::{debug, info};

use crate::cli::{Cli, OutputFormat};
use crate::output::output_reports;

pub fn run_passes(
    cli: &Cli,
    elements: &[ComponentKind],
    operations: &[OperationKind],
    format: OutputFormat,
    parallel: bool,
) -> Result<()> {
    let mut config = if let Some(ref path) = cli.config {
        PassConfig::from_file(path).into_diagnostic()?
    } else {
        find_config()?
    };

    if !elements.is_empty() {
        config.elements = elements.to_vec();
    }
    if !operations.is_empty() {
        config.operations = operations.to_vec();
    }
    if parallel {
        config.parallel = true;
    }

    let plan = PassPlan::from_config(&config);
    debug!(
        "Running {} operation(s) over {} element(s)",
        plan.operations.len(),
        plan.elements.len()
    );

    let reports = plan.execute();
    output_reports(&reports, format)
}

pub fn find_config() -> Result<PassConfig> {
    if let Some(path) = PassConfig::discover(".") {
        info!("Using config: {}", path.display());
        return PassConfig::from_file(&path).into_diagnostic();
    }

    info!("No config file found, using defaults");
    Ok(PassConfig::new())
}
