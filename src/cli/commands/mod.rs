//! Command execution.
//!
//! Validates arguments, then hands off to the detection run.

mod detect;

use crate::cli::{Args, RuntimeConfig};
use crate::error::{DetectError, Result};

use detect::execute_detect;

/// Execute a detection run based on parsed arguments
///
/// Failures are reported through the run's own output settings and turned
/// into exit code 1.
pub async fn execute_command(args: Args) -> Result<i32> {
    let config = RuntimeConfig::from(&args);

    if let Err(validation_error) = args.validate() {
        config.output().println(&Args::usage());
        config.output().report_error(&DetectError::from(validation_error));
        return Ok(1);
    }

    match execute_detect(&args, &config).await {
        Ok(exit_code) => Ok(exit_code),
        Err(e) => {
            config.output().report_error(&e);
            Ok(1)
        }
    }
}
