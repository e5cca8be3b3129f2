//! Expansion of command-line inputs into candidate bundle paths.

use std::collections::BTreeSet;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

/// Bundle directory suffix.
pub const BUNDLE_SUFFIX: &str = ".app";

/// Strip trailing path separators, keeping a lone root intact.
pub fn strip_trailing_separators(input: &str) -> &str {
    let trimmed = input.trim_end_matches(MAIN_SEPARATOR);
    if trimmed.is_empty() { input } else { trimmed }
}

/// Whether `path` names a bundle directory (by suffix only).
pub fn has_bundle_suffix(path: &Path) -> bool {
    path.to_string_lossy().ends_with(BUNDLE_SUFFIX)
}

/// Expand directories and glob patterns into `.app` paths.
///
/// - a directory ending in `.app` is taken as-is
/// - any other directory contributes its `*.app` children
/// - anything else is treated as a glob pattern
///
/// Results are de-duplicated and sorted.
pub fn expand_inputs<S: AsRef<str>>(inputs: &[S]) -> Vec<PathBuf> {
    let mut found = BTreeSet::new();

    for input in inputs {
        let input = strip_trailing_separators(input.as_ref());
        let path = Path::new(input);

        if path.is_dir() {
            if has_bundle_suffix(path) {
                found.insert(path.to_path_buf());
            } else {
                let pattern = format!(
                    "{}{}*{}",
                    glob::Pattern::escape(input),
                    MAIN_SEPARATOR,
                    BUNDLE_SUFFIX
                );
                found.extend(glob_paths(&pattern));
            }
        } else {
            found.extend(glob_paths(input));
        }
    }

    found.into_iter().collect()
}

fn glob_paths(pattern: &str) -> Vec<PathBuf> {
    match glob::glob(pattern) {
        Ok(entries) => entries
            .filter_map(|entry| match entry {
                Ok(path) => Some(path),
                Err(e) => {
                    log::debug!("skipping unreadable glob entry: {}", e);
                    None
                }
            })
            .collect(),
        Err(e) => {
            log::warn!("invalid pattern '{}': {}", pattern, e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_strip_trailing_separators() {
        assert_eq!(strip_trailing_separators("/Applications/Foo.app/"), "/Applications/Foo.app");
        assert_eq!(strip_trailing_separators("/Applications/Foo.app//"), "/Applications/Foo.app");
        assert_eq!(strip_trailing_separators("Foo.app"), "Foo.app");
        assert_eq!(strip_trailing_separators("/"), "/");
    }

    #[test]
    fn test_directory_expands_to_bundles() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("One.app")).unwrap();
        fs::create_dir(dir.path().join("Two.app")).unwrap();
        fs::create_dir(dir.path().join("NotABundle")).unwrap();

        let found = expand_inputs(&[dir.path().to_string_lossy().into_owned()]);
        assert_eq!(
            found,
            vec![dir.path().join("One.app"), dir.path().join("Two.app")]
        );
    }

    #[test]
    fn test_bundle_directory_taken_as_is_and_deduplicated() {
        let dir = tempfile::tempdir().unwrap();
        let bundle = dir.path().join("One.app");
        fs::create_dir(&bundle).unwrap();

        let plain = bundle.to_string_lossy().into_owned();
        let slashed = format!("{}{}", plain, MAIN_SEPARATOR);
        let found = expand_inputs(&[plain, slashed]);
        assert_eq!(found, vec![bundle]);
    }

    #[test]
    fn test_glob_pattern() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("Alpha.app")).unwrap();
        fs::create_dir(dir.path().join("Beta.app")).unwrap();

        let pattern = format!("{}{}A*.app", dir.path().display(), MAIN_SEPARATOR);
        assert_eq!(expand_inputs(&[pattern]), vec![dir.path().join("Alpha.app")]);
    }

    #[test]
    fn test_nothing_found() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("Missing.app").to_string_lossy().into_owned();
        assert!(expand_inputs(&[missing]).is_empty());
    }
}
