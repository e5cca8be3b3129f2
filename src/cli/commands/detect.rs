//! Detection run: expand inputs, inspect each bundle, render the report.

use crate::cli::{Args, RuntimeConfig};
use crate::error::{CliError, Result};
use crate::inspect::{Inspector, expand_inputs};
use crate::render::{ReportFormat, Role, render};

/// Inspect every bundle named by `args` and print the report.
///
/// Returns the process exit code. Skipped bundles produce a warning each but
/// do not change the exit code.
pub(super) async fn execute_detect(args: &Args, config: &RuntimeConfig) -> Result<i32> {
    let bundles = expand_inputs(&args.inputs);
    if bundles.is_empty() {
        return Err(CliError::NoBundlesFound {
            inputs: args.inputs.clone(),
        }
        .into());
    }
    log::debug!("expanded {} input(s) to {} path(s)", args.inputs.len(), bundles.len());

    let inspector = Inspector::system(config.facets());
    let report = inspector.inspect_all(&bundles).await;

    for skipped in &report.skipped {
        let warning = config.palette().paint(Role::Warning, &skipped.to_string());
        config.output().println(&warning);
    }

    let mut rendered = render(
        &report.bundles,
        config.format(),
        config.facets(),
        config.palette(),
    )?;
    if let ReportFormat::Json(_) = config.format() {
        rendered.push('\n');
    }

    config.output().report(&rendered)?;
    Ok(0)
}
