//! Mach-O UUID extraction from `otool -l` output.

use regex::Regex;
use std::sync::LazyLock;

static UUID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"uuid\s+([0-9A-Fa-f-]+)").expect("UUID regex is valid"));

/// First `LC_UUID` value in a load-command dump, or an empty string.
pub fn extract_uuid(load_commands: &str) -> String {
    UUID_RE
        .captures(load_commands)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
