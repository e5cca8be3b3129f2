//! External tool gateway.
//!
//! All binary inspection goes through the [`ToolRunner`] trait so the parsers
//! never spawn processes themselves. [`SystemTools`] is the real implementation;
//! tests substitute canned output.

use crate::inspect::error::{Error, Result};
use std::ffi::OsStr;
use std::future::Future;

/// Runs a named external program and returns its decoded output.
pub trait ToolRunner {
    /// Run `program` with `args`.
    ///
    /// On success returns stdout followed by stderr, decoded lossily as UTF-8.
    /// Any failure (missing binary, spawn error, non-zero exit) is an `Err`.
    fn run(&self, program: &str, args: &[&OsStr]) -> impl Future<Output = Result<String>> + Send;
}

/// Tool runner backed by `tokio::process::Command`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTools;

impl ToolRunner for SystemTools {
    fn run(&self, program: &str, args: &[&OsStr]) -> impl Future<Output = Result<String>> + Send {
        async move {
            let resolved = which::which(program).map_err(|source| Error::ToolNotFound {
                tool: program.to_string(),
                source,
            })?;

            let output = tokio::process::Command::new(&resolved)
                .args(args)
                .output()
                .await
                .map_err(|error| Error::CommandFailed {
                    command: program.to_string(),
                    error,
                })?;

            let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
            text.push_str(&String::from_utf8_lossy(&output.stderr));

            if !output.status.success() {
                return Err(Error::NonZeroExit {
                    command: program.to_string(),
                    status: output.status.code(),
                    output: text,
                });
            }

            Ok(text)
        }
    }
}

impl<T: ToolRunner> ToolRunner for &T {
    fn run(&self, program: &str, args: &[&OsStr]) -> impl Future<Output = Result<String>> + Send {
        (**self).run(program, args)
    }
}

/// Collapse a tool result to text, treating every failure as "no information".
pub fn output_or_empty(result: Result<String>) -> String {
    match result {
        Ok(text) => text,
        Err(e) => {
            log::debug!("tool produced no usable output: {}", e);
            String::new()
        }
    }
}
