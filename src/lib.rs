//! # kodegen_app_detect
//!
//! Metadata extraction for macOS application bundles.
//!
//! For each `.app` bundle this crate reports the version, the minimum macOS
//! release, and the architecture of the main executable, and optionally the
//! Mach-O UUID, linked libraries, SDK version and code-signing facts. Binary
//! facts come from the system's `lipo`, `otool` and `codesign`.
//!
//! ## Usage
//!
//! ```bash
//! kodegen_app_detect /Applications/Safari.app
//! kodegen_app_detect -j -p -u -d -s -c '/Applications/*.app'
//! ```
//!
//! ## Library
//!
//! ```no_run
//! use kodegen_app_detect::{Facets, Inspector, expand_inputs};
//!
//! # async fn demo() {
//! let bundles = expand_inputs(&["/Applications"]);
//! let report = Inspector::system(Facets::all()).inspect_all(&bundles).await;
//! for bundle in &report.bundles {
//!     println!("{} {} {}", bundle.app, bundle.version, bundle.architecture);
//! }
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod cli;
pub mod error;
pub mod inspect;
pub mod metadata;
pub mod render;

pub use cli::Args;
pub use error::{CliError, DetectError, Result};
pub use inspect::{Facets, Inspector, SystemTools, ToolRunner, expand_inputs};
pub use metadata::{Architecture, BundleMetadata, DependencyRecord, SigningFact, SigningKind};
pub use render::{Palette, ReportFormat, render};
