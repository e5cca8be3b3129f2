//! Architecture classification from `lipo -archs` output.

use crate::inspect::tool::{ToolRunner, output_or_empty};
use crate::metadata::Architecture;
use std::ffi::OsStr;
use std::path::Path;

/// Classify the architectures of the binary at `binary`.
pub async fn detect_architecture<R: ToolRunner>(tools: &R, binary: &Path) -> Architecture {
    let listing = output_or_empty(
        tools
            .run("lipo", &[OsStr::new("-archs"), binary.as_os_str()])
            .await,
    );
    classify_architecture(&listing)
}

/// Map a slice listing to a semantic label.
///
/// Any listing with more than one token is `Universal`, even if the tokens
/// repeat.
pub fn classify_architecture(listing: &str) -> Architecture {
    let mut tokens = listing.split_whitespace();
    let Some(first) = tokens.next() else {
        return Architecture::NotAvailable;
    };
    if tokens.next().is_some() {
        return Architecture::Universal;
    }

    match first {
        "arm64" => Architecture::AppleSilicon,
        "x86_64" => Architecture::Intel64,
        "i386" => Architecture::Intel32,
        other => Architecture::Other(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_listing_is_not_available() {
        assert_eq!(classify_architecture(""), Architecture::NotAvailable);
        assert_eq!(classify_architecture("  \n"), Architecture::NotAvailable);
    }

    #[test]
    fn test_multiple_slices_are_universal() {
        assert_eq!(classify_architecture("x86_64 arm64\n"), Architecture::Universal);
        assert_eq!(classify_architecture("i386 ppc"), Architecture::Universal);
        assert_eq!(classify_architecture("arm64\tarm64e"), Architecture::Universal);
    }

    #[test]
    fn test_duplicate_tokens_still_universal() {
        assert_eq!(classify_architecture("arm64 arm64"), Architecture::Universal);
    }

    #[test]
    fn test_known_single_slices() {
        assert_eq!(classify_architecture("arm64\n"), Architecture::AppleSilicon);
        assert_eq!(classify_architecture("x86_64"), Architecture::Intel64);
        assert_eq!(classify_architecture("i386"), Architecture::Intel32);
    }

    #[test]
    fn test_unknown_single_slice_passes_through() {
        assert_eq!(
            classify_architecture("arm64e\n"),
            Architecture::Other("arm64e".to_string())
        );
    }
}
