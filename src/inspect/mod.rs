//! Extraction of metadata from macOS application bundles.
//!
//! The engine reads a bundle's `Contents/Info.plist` and runs `lipo`, `otool`
//! and `codesign` against it, turning their text output into the typed
//! records of [`crate::metadata`].
//!
//! # Module Organization
//!
//! - [`tool`] - external tool gateway ([`ToolRunner`], [`SystemTools`])
//! - [`descriptor`] - Info.plist reader
//! - [`arch`], [`uuid`], [`dependencies`], [`sdk`] - binary metadata parsers
//! - [`codesign`] - signing facts parser
//! - [`assembler`] - per-bundle orchestration ([`Inspector`])
//! - [`discovery`] - input expansion into bundle paths
//!
//! # Failure Model
//!
//! Inspection is total: tool failures become empty text, an unreadable
//! descriptor becomes an empty field set, and only a missing descriptor causes
//! a bundle to be skipped.

pub mod arch;
pub mod assembler;
pub mod codesign;
pub mod dependencies;
pub mod descriptor;
pub mod discovery;
mod error;
pub mod sdk;
pub mod tool;
pub mod uuid;

pub use assembler::{Facets, Inspection, InspectionReport, Inspector, SkippedBundle};
pub use discovery::expand_inputs;
pub use error::{Error, ErrorExt, Result};
pub use tool::{SystemTools, ToolRunner, output_or_empty};
