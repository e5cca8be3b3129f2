//! SDK version extraction from `otool -l` output.
//!
//! Toolchains of different eras record the SDK under different load commands,
//! so resolution walks an ordered list of matchers and stops at the first hit.

use regex::Regex;
use std::sync::LazyLock;

/// A named pattern whose first capture group is the SDK version.
struct SdkMatcher {
    name: &'static str,
    pattern: Regex,
}

impl SdkMatcher {
    fn new(name: &'static str, pattern: &str) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).expect("SDK regex is valid"),
        }
    }

    fn find<'t>(&self, load_commands: &'t str) -> Option<&'t str> {
        self.pattern
            .captures(load_commands)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

static SDK_MATCHERS: LazyLock<[SdkMatcher; 4]> = LazyLock::new(|| {
    [
        SdkMatcher::new("standalone sdk line", r"(?m)^\s*sdk\s+([0-9.]+)"),
        SdkMatcher::new("LC_BUILD_VERSION", r"(?s)cmd LC_BUILD_VERSION.*?sdk\s+([0-9.]+)"),
        SdkMatcher::new(
            "LC_VERSION_MIN_MACOSX",
            r"(?s)cmd LC_VERSION_MIN_MACOSX.*?sdk\s+([0-9.]+)",
        ),
        SdkMatcher::new("any sdk mention", r"sdk\s+([0-9.]+)"),
    ]
});

/// SDK version recorded in a load-command dump, or an empty string.
pub fn extract_sdk_version(load_commands: &str) -> String {
    for matcher in SDK_MATCHERS.iter() {
        if let Some(version) = matcher.find(load_commands) {
            log::trace!("SDK version {} resolved via {}", version, matcher.name);
            return version.to_string();
        }
    }
    String::new()
}
