//! Bundle descriptor (Contents/Info.plist) reader.

use crate::inspect::error::{ErrorExt, Result};
use std::path::{Path, PathBuf};

const SHORT_VERSION_KEY: &str = "CFBundleShortVersionString";
const BUILD_VERSION_KEY: &str = "CFBundleVersion";
const MINIMUM_SYSTEM_KEY: &str = "LSMinimumSystemVersion";
const EXECUTABLE_KEY: &str = "CFBundleExecutable";

/// Placeholder for descriptor fields that are absent.
pub const NOT_AVAILABLE: &str = "N/A";

/// Location of the descriptor inside a bundle.
pub fn descriptor_path(bundle: &Path) -> PathBuf {
    bundle.join("Contents").join("Info.plist")
}

/// Scalar fields of a bundle's Info.plist needed for inspection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BundleDescriptor {
    /// `CFBundleShortVersionString`
    pub short_version: Option<String>,
    /// `CFBundleVersion`
    pub build_version: Option<String>,
    /// `LSMinimumSystemVersion`
    pub minimum_system_version: Option<String>,
    /// `CFBundleExecutable`
    pub executable: Option<String>,
}

impl BundleDescriptor {
    /// Read the descriptor of `bundle`.
    ///
    /// Malformed, missing, or unreadable files yield an empty descriptor.
    pub async fn read(bundle: &Path) -> Self {
        let path = descriptor_path(bundle);
        match Self::load(&path).await {
            Ok(descriptor) => descriptor,
            Err(e) => {
                log::debug!("using empty descriptor for {}: {}", bundle.display(), e);
                Self::default()
            }
        }
    }

    async fn load(path: &Path) -> Result<Self> {
        let bytes = tokio::fs::read(path)
            .await
            .fs_context("reading descriptor", path)?;
        let dict: plist::Dictionary = plist::from_bytes(&bytes)?;
        Ok(Self::from_dictionary(&dict))
    }

    /// Extract the scalar fields from a decoded property list.
    pub fn from_dictionary(dict: &plist::Dictionary) -> Self {
        Self {
            short_version: scalar(dict, SHORT_VERSION_KEY),
            build_version: scalar(dict, BUILD_VERSION_KEY),
            minimum_system_version: scalar(dict, MINIMUM_SYSTEM_KEY),
            executable: scalar(dict, EXECUTABLE_KEY),
        }
    }

    /// Short version, falling back to the build version, then `N/A`.
    pub fn version(&self) -> String {
        self.short_version
            .as_deref()
            .filter(|v| !v.is_empty())
            .or(self.build_version.as_deref())
            .unwrap_or(NOT_AVAILABLE)
            .to_string()
    }

    /// Declared minimum macOS version or `N/A`.
    pub fn minimum_os(&self) -> String {
        self.minimum_system_version
            .clone()
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    /// Path of the main executable inside `bundle`.
    ///
    /// An absent executable name resolves to the `Contents/MacOS` directory
    /// itself, which callers reject as not being a regular file.
    pub fn executable_path(&self, bundle: &Path) -> PathBuf {
        bundle
            .join("Contents")
            .join("MacOS")
            .join(self.executable.as_deref().unwrap_or_default())
    }
}

fn scalar(dict: &plist::Dictionary, key: &str) -> Option<String> {
    match dict.get(key)? {
        plist::Value::String(s) => Some(s.clone()),
        plist::Value::Integer(i) => Some(i.to_string()),
        plist::Value::Real(r) => Some(r.to_string()),
        _ => None,
    }
}
