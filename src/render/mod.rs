//! Report rendering.
//!
//! Records are rendered either as JSON ([`json`]) or as an indented text report
//! ([`text`]). Both draw their colors from a [`Palette`].

pub mod json;
pub mod palette;
pub mod text;

pub use json::{Layout, highlight_json, render_json};
pub use palette::{Palette, Role, detect_truecolor};
pub use text::render_text;

use crate::inspect::Facets;
use crate::metadata::BundleMetadata;

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// JSON array with the given layout
    Json(Layout),
    /// Text report
    Text,
}

/// Render `records` in `format`.
pub fn render(
    records: &[BundleMetadata],
    format: ReportFormat,
    facets: Facets,
    palette: &Palette,
) -> serde_json::Result<String> {
    match format {
        ReportFormat::Json(layout) => render_json(records, layout, palette),
        ReportFormat::Text => Ok(render_text(records, facets, palette)),
    }
}
