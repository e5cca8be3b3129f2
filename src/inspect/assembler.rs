//! Per-bundle metadata assembly.
//!
//! The [`Inspector`] combines the descriptor reader and the binary parsers into
//! one [`BundleMetadata`] per bundle. Bundles are processed one at a time and no
//! failure inside a bundle aborts the batch.

use crate::inspect::{
    arch::detect_architecture,
    codesign::signing_info,
    dependencies::list_dependencies,
    descriptor::{BundleDescriptor, descriptor_path},
    discovery::{has_bundle_suffix, strip_trailing_separators},
    sdk::extract_sdk_version,
    tool::{SystemTools, ToolRunner, output_or_empty},
    uuid::extract_uuid,
};
use crate::metadata::{Architecture, BundleMetadata};
use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};

/// Optional facets to extract in addition to the always-present fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Facets {
    /// Mach-O UUID
    pub uuid: bool,
    /// Linked libraries
    pub dependencies: bool,
    /// SDK version
    pub sdk_version: bool,
    /// Code-signing facts
    pub codesign: bool,
}

impl Facets {
    /// Every optional facet enabled.
    pub fn all() -> Self {
        Self {
            uuid: true,
            dependencies: true,
            sdk_version: true,
            codesign: true,
        }
    }
}

/// A bundle that was recognized but could not be inspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedBundle {
    /// Bundle directory
    pub bundle: PathBuf,
    /// Descriptor file that was expected
    pub descriptor: PathBuf,
}

impl fmt::Display for SkippedBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Warning: {} not found. Skipping {}.",
            self.descriptor.display(),
            self.bundle.display()
        )
    }
}

/// Outcome of inspecting one candidate path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inspection {
    /// Metadata was assembled
    Inspected(BundleMetadata),
    /// Path is not a `.app` directory; ignored silently
    NotABundle,
    /// Bundle has no descriptor
    Skipped(SkippedBundle),
}

/// Result of inspecting a batch of paths, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InspectionReport {
    /// Successfully inspected bundles
    pub bundles: Vec<BundleMetadata>,
    /// Bundles skipped for a missing descriptor
    pub skipped: Vec<SkippedBundle>,
}

/// Assembles bundle metadata using a [`ToolRunner`].
#[derive(Debug, Clone)]
pub struct Inspector<R = SystemTools> {
    tools: R,
    facets: Facets,
}

impl Inspector<SystemTools> {
    /// Inspector backed by the system's `lipo`, `otool` and `codesign`.
    pub fn system(facets: Facets) -> Self {
        Self::new(SystemTools, facets)
    }
}

impl<R: ToolRunner> Inspector<R> {
    /// Create an inspector with the given tool runner and facets.
    pub fn new(tools: R, facets: Facets) -> Self {
        Self { tools, facets }
    }

    /// Requested facets.
    pub fn facets(&self) -> Facets {
        self.facets
    }

    /// Inspect every path in order.
    pub async fn inspect_all<P: AsRef<Path>>(&self, paths: &[P]) -> InspectionReport {
        let mut report = InspectionReport::default();
        for path in paths {
            match self.inspect(path.as_ref()).await {
                Inspection::Inspected(metadata) => report.bundles.push(metadata),
                Inspection::Skipped(skipped) => report.skipped.push(skipped),
                Inspection::NotABundle => {
                    log::debug!("ignoring non-bundle path {}", path.as_ref().display());
                }
            }
        }
        report
    }

    /// Inspect a single candidate path.
    pub async fn inspect(&self, path: &Path) -> Inspection {
        let app = strip_trailing_separators(&path.to_string_lossy()).to_string();
        let bundle = Path::new(&app);

        if !(bundle.is_dir() && has_bundle_suffix(bundle)) {
            return Inspection::NotABundle;
        }

        let descriptor = descriptor_path(bundle);
        if !descriptor.is_file() {
            return Inspection::Skipped(SkippedBundle {
                bundle: bundle.to_path_buf(),
                descriptor,
            });
        }

        log::info!("Inspecting {}", app);

        let info = BundleDescriptor::read(bundle).await;
        let binary = info.executable_path(bundle);
        let has_binary = binary.is_file();

        let architecture = if has_binary {
            detect_architecture(&self.tools, &binary).await
        } else {
            log::debug!("main executable {} not found", binary.display());
            Architecture::NotAvailable
        };

        // UUID and SDK version share one load-command dump
        let load_commands = if has_binary && (self.facets.uuid || self.facets.sdk_version) {
            Some(self.load_commands(&binary).await)
        } else {
            None
        };

        let uuid = match &load_commands {
            Some(dump) if self.facets.uuid => Some(extract_uuid(dump)),
            _ => None,
        };

        let dependencies = if self.facets.dependencies && has_binary {
            Some(list_dependencies(&self.tools, &binary).await)
        } else {
            None
        };

        let sdk_version = match &load_commands {
            Some(dump) if self.facets.sdk_version => Some(extract_sdk_version(dump)),
            _ => None,
        };

        let codesign_info = if self.facets.codesign {
            Some(signing_info(&self.tools, bundle).await)
        } else {
            None
        };

        Inspection::Inspected(BundleMetadata {
            app,
            version: info.version(),
            minimum_macos: info.minimum_os(),
            architecture,
            uuid,
            dependencies,
            sdk_version,
            codesign_info,
        })
    }

    async fn load_commands(&self, binary: &Path) -> String {
        output_or_empty(
            self.tools
                .run("otool", &[OsStr::new("-l"), binary.as_os_str()])
                .await,
        )
    }
}
