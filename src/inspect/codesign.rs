//! Code-signing facts from `codesign -dv --verbose=4` output.

use crate::inspect::tool::{ToolRunner, output_or_empty};
use crate::metadata::{SigningFact, SigningKind};
use std::ffi::OsStr;
use std::path::Path;

/// Collect signing facts for the bundle at `bundle`.
///
/// Targets the bundle itself rather than its executable, so this can succeed
/// even when the main binary is unreadable.
pub async fn signing_info<R: ToolRunner>(tools: &R, bundle: &Path) -> Vec<SigningFact> {
    let dump = output_or_empty(
        tools
            .run(
                "codesign",
                &[OsStr::new("-dv"), OsStr::new("--verbose=4"), bundle.as_os_str()],
            )
            .await,
    );
    parse_signing_info(&dump)
}

/// Extract `Authority=`, `TeamIdentifier=` and `Signature=` lines in order.
pub fn parse_signing_info(dump: &str) -> Vec<SigningFact> {
    dump.lines().filter_map(|line| parse_fact(line.trim())).collect()
}

fn parse_fact(line: &str) -> Option<SigningFact> {
    let (key, value) = line.split_once('=')?;
    let kind = SigningKind::ALL.into_iter().find(|kind| kind.as_str() == key)?;
    Some(SigningFact {
        kind,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DUMP: &str = "\
Executable=/Applications/Foo.app/Contents/MacOS/Foo
Identifier=com.example.foo
Format=app bundle with Mach-O universal (x86_64 arm64)
CodeDirectory v=20500 size=1234 flags=0x10000(runtime) hashes=27+7 location=embedded
Hash type=sha256 size=32
Authority=Developer ID Application: Example Corp (ABCDE12345)
Authority=Developer ID Certification Authority
Authority=Apple Root CA
Timestamp=Jan 1, 2024 at 12:00:00 PM
TeamIdentifier=ABCDE12345
Sealed Resources version=2 rules=13 files=42
";

    #[test]
    fn test_recognized_lines_in_order() {
        let facts = parse_signing_info(DUMP);
        let kinds: Vec<SigningKind> = facts.iter().map(|f| f.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SigningKind::Authority,
                SigningKind::Authority,
                SigningKind::Authority,
                SigningKind::TeamIdentifier,
            ]
        );
        assert_eq!(
            facts[0].value,
            "Developer ID Application: Example Corp (ABCDE12345)"
        );
        assert_eq!(facts[3].value, "ABCDE12345");
    }

    #[test]
    fn test_split_on_first_equals_only() {
        let facts = parse_signing_info("Signature=adhoc=yes\n");
        assert_eq!(
            facts,
            vec![SigningFact {
                kind: SigningKind::Signature,
                value: "adhoc=yes".to_string(),
            }]
        );
    }

    #[test]
    fn test_unsigned_output_has_no_facts() {
        assert!(parse_signing_info("Foo.app: code object is not signed at all\n").is_empty());
        assert!(parse_signing_info("").is_empty());
    }

    #[test]
    fn test_indented_lines_are_trimmed() {
        let facts = parse_signing_info("   Authority=Apple Inc.\n");
        assert_eq!(facts.len(), 1);
        assert_eq!(facts[0].value, "Apple Inc.");
    }
}
