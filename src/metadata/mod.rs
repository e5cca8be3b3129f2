//! Metadata records produced by bundle inspection.
//!
//! These types are the serialized output contract: field names and shapes are
//! exactly what the JSON renderer emits, and decoding that JSON reproduces the
//! same records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Metadata extracted from a single `.app` bundle.
///
/// Optional facets are `None` when they were not requested (or, for binary
/// facets, when the main executable is missing) and are omitted from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleMetadata {
    /// Path of the bundle directory, trailing separators stripped
    pub app: String,

    /// Short version string, build version, or `N/A`
    pub version: String,

    /// Declared minimum macOS version or `N/A`
    pub minimum_macos: String,

    /// Architecture of the main executable
    pub architecture: Architecture,

    /// Mach-O build UUID (empty when the binary carries none)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,

    /// Linked libraries in load order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<DependencyRecord>>,

    /// SDK version the binary was built against (empty when unresolvable)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sdk_version: Option<String>,

    /// Facts reported by `codesign`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codesign_info: Option<Vec<SigningFact>>,
}

/// Semantic architecture label for a binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Architecture {
    /// No binary, or no slices reported
    NotAvailable,
    /// More than one slice
    Universal,
    /// `arm64`
    AppleSilicon,
    /// `x86_64`
    Intel64,
    /// `i386`
    Intel32,
    /// Unrecognized single slice, reported verbatim
    Other(String),
}

impl Architecture {
    /// Human-readable label, also used as the serialized form.
    pub fn label(&self) -> &str {
        match self {
            Self::NotAvailable => "N/A",
            Self::Universal => "Universal",
            Self::AppleSilicon => "Apple Silicon",
            Self::Intel64 => "Intel [64-bit]",
            Self::Intel32 => "Intel [32-bit]",
            Self::Other(raw) => raw.as_str(),
        }
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<Architecture> for String {
    fn from(arch: Architecture) -> Self {
        arch.label().to_string()
    }
}

impl From<String> for Architecture {
    fn from(label: String) -> Self {
        match label.as_str() {
            "N/A" => Self::NotAvailable,
            "Universal" => Self::Universal,
            "Apple Silicon" => Self::AppleSilicon,
            "Intel [64-bit]" => Self::Intel64,
            "Intel [32-bit]" => Self::Intel32,
            _ => Self::Other(label),
        }
    }
}

/// One line of a binary's linked-library listing.
///
/// Lines that do not have the expected shape are kept verbatim so nothing is
/// silently dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DependencyRecord {
    /// Library with parsed version information
    Linked(LinkedLibrary),
    /// Unparsed listing line
    Raw {
        /// Trimmed source line
        raw: String,
    },
}

/// Parsed linked-library entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedLibrary {
    /// Install name of the library
    pub path: String,
    /// Compatibility version
    pub compatibility_version: String,
    /// Current version
    pub current_version: String,
    /// Weakly linked
    pub weak: bool,
}

/// Kind of code-signing fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SigningKind {
    /// Certificate in the signing chain
    Authority,
    /// Developer team identifier
    TeamIdentifier,
    /// Signature summary (e.g. `adhoc`)
    Signature,
}

impl SigningKind {
    /// All recognized kinds.
    pub const ALL: [SigningKind; 3] = [Self::Authority, Self::TeamIdentifier, Self::Signature];

    /// Name as it appears in `codesign` output and in JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Authority => "Authority",
            Self::TeamIdentifier => "TeamIdentifier",
            Self::Signature => "Signature",
        }
    }
}

impl fmt::Display for SigningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single `Key=value` fact reported by `codesign`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigningFact {
    /// Fact kind
    #[serde(rename = "type")]
    pub kind: SigningKind,
    /// Everything after the first `=`
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_architecture_serializes_as_label() {
        assert_eq!(
            serde_json::to_value(Architecture::Intel64).unwrap(),
            json!("Intel [64-bit]")
        );
        assert_eq!(
            serde_json::to_value(Architecture::Other("ppc".into())).unwrap(),
            json!("ppc")
        );
    }

    #[test]
    fn test_architecture_label_round_trip() {
        for arch in [
            Architecture::NotAvailable,
            Architecture::Universal,
            Architecture::AppleSilicon,
            Architecture::Intel64,
            Architecture::Intel32,
            Architecture::Other("arm64e".into()),
        ] {
            assert_eq!(Architecture::from(String::from(arch.clone())), arch);
        }
    }

    #[test]
    fn test_dependency_shapes() {
        let linked = DependencyRecord::Linked(LinkedLibrary {
            path: "/usr/lib/libSystem.B.dylib".into(),
            compatibility_version: "1.0.0".into(),
            current_version: "1319.0.0".into(),
            weak: false,
        });
        assert_eq!(
            serde_json::to_value(&linked).unwrap(),
            json!({
                "path": "/usr/lib/libSystem.B.dylib",
                "compatibility_version": "1.0.0",
                "current_version": "1319.0.0",
                "weak": false
            })
        );

        let raw = DependencyRecord::Raw { raw: "garbage".into() };
        assert_eq!(serde_json::to_value(&raw).unwrap(), json!({ "raw": "garbage" }));
        assert_eq!(
            serde_json::from_value::<DependencyRecord>(json!({ "raw": "garbage" })).unwrap(),
            raw
        );
    }

    #[test]
    fn test_signing_fact_uses_type_key() {
        let fact = SigningFact {
            kind: SigningKind::TeamIdentifier,
            value: "ABCDE12345".into(),
        };
        assert_eq!(
            serde_json::to_value(&fact).unwrap(),
            json!({ "type": "TeamIdentifier", "value": "ABCDE12345" })
        );
    }

    #[test]
    fn test_absent_facets_are_omitted() {
        let record = BundleMetadata {
            app: "/Applications/Foo.app".into(),
            version: "1.0".into(),
            minimum_macos: "N/A".into(),
            architecture: Architecture::NotAvailable,
            uuid: None,
            dependencies: None,
            sdk_version: None,
            codesign_info: None,
        };
        let value = serde_json::to_value(&record).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys.len(), 4);
        for key in ["app", "version", "minimum_macos", "architecture"] {
            assert!(keys.contains(&key), "missing {key}");
        }
    }
}
