//! Color scheme file loading.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;

/// Load a color scheme: a JSON object mapping role names to color names.
pub fn load_color_scheme(path: &Path) -> Result<HashMap<String, String>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    serde_json::from_str(&text)
        .context("Color scheme must be a JSON object of role names to color strings")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loads_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scheme.json");
        std::fs::write(&path, r#"{"path": "magenta", "arch": "none"}"#).unwrap();

        let scheme = load_color_scheme(&path).unwrap();
        assert_eq!(scheme.get("path").map(String::as_str), Some("magenta"));
        assert_eq!(scheme.len(), 2);
    }

    #[test]
    fn test_missing_file_names_path() {
        let err = load_color_scheme(Path::new("/nonexistent/scheme.json")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/scheme.json"));
    }

    #[test]
    fn test_rejects_non_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scheme.json");
        std::fs::write(&path, "[1, 2]").unwrap();
        assert!(load_color_scheme(&path).is_err());
    }
}
