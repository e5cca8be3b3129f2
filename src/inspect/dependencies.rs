//! Linked-library listing from `otool -L` output.

use crate::inspect::tool::{ToolRunner, output_or_empty};
use crate::metadata::{DependencyRecord, LinkedLibrary};
use regex::Regex;
use std::ffi::OsStr;
use std::path::Path;
use std::sync::LazyLock;

static DEPENDENCY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(.*?)\s+\(compatibility\s+version\s+([^,]+),\s+current\s+version\s+([0-9.]+)(,\s*weak)?\)$",
    )
    .expect("dependency regex is valid")
});

/// List the libraries linked by the binary at `binary`.
pub async fn list_dependencies<R: ToolRunner>(tools: &R, binary: &Path) -> Vec<DependencyRecord> {
    let listing = output_or_empty(
        tools
            .run("otool", &[OsStr::new("-L"), binary.as_os_str()])
            .await,
    );
    parse_dependencies(&listing)
}

/// Structure an `otool -L` listing.
///
/// The first line names the binary itself and is always skipped. Blank lines
/// are dropped; lines of unexpected shape become [`DependencyRecord::Raw`].
pub fn parse_dependencies(listing: &str) -> Vec<DependencyRecord> {
    listing
        .lines()
        .skip(1)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> DependencyRecord {
    match DEPENDENCY_RE.captures(line) {
        Some(caps) => DependencyRecord::Linked(LinkedLibrary {
            path: caps[1].to_string(),
            compatibility_version: caps[2].to_string(),
            current_version: caps[3].to_string(),
            weak: caps.get(4).is_some(),
        }),
        None => DependencyRecord::Raw {
            raw: line.to_string(),
        },
    }
}
