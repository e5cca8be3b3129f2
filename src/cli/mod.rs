//! Command line interface for kodegen_app_detect.
//!
//! Parses arguments, resolves colors and facets, and runs detection with
//! diagnostics on stderr and the report on stdout.

mod args;
pub mod commands;
mod output;
mod scheme;

pub use args::{Args, ColorMode, RuntimeConfig};
pub use commands::execute_command;
pub use output::OutputManager;
pub use scheme::load_color_scheme;

use crate::error::Result;
use clap::CommandFactory;

/// Main CLI entry point
///
/// Invoked with no arguments at all, prints help and exits successfully.
pub async fn run() -> Result<i32> {
    if std::env::args_os().len() <= 1 {
        Args::command().print_help()?;
        println!();
        return Ok(0);
    }

    let args = Args::parse_args();
    execute_command(args).await
}
