//! Plain-text report.

use crate::inspect::Facets;
use crate::metadata::{BundleMetadata, DependencyRecord, LinkedLibrary};
use crate::render::palette::{Palette, Role};
use std::fmt::Write;

/// Render `records` as an indented text report.
///
/// Optional sections appear only for requested facets, even when a record has
/// no value for them.
pub fn render_text(records: &[BundleMetadata], facets: Facets, palette: &Palette) -> String {
    let mut out = String::new();
    for record in records {
        write_record(&mut out, record, facets, palette);
    }
    out
}

fn write_record(out: &mut String, record: &BundleMetadata, facets: Facets, p: &Palette) {
    let _ = writeln!(
        out,
        "{}{}App:{} {}",
        p.start(Role::Emphasis),
        p.start(Role::Title),
        p.reset(),
        record.app
    );
    let _ = writeln!(out, "  {} {}", label(p, "Version:"), p.paint(Role::Version, &record.version));
    let _ = writeln!(
        out,
        "  {} {}",
        label(p, "Minimum macOS:"),
        p.paint(Role::Version, &record.minimum_macos)
    );
    let _ = writeln!(
        out,
        "  {} {}",
        label(p, "Architecture:"),
        p.paint(Role::Arch, record.architecture.label())
    );

    if facets.uuid {
        let uuid = record.uuid.as_deref().unwrap_or_default();
        let _ = writeln!(out, "  {} {}", label(p, "UUID:"), p.paint(Role::String, uuid));
    }

    if facets.dependencies {
        let _ = writeln!(out, "  {}", label(p, "Dependencies:"));
        for dep in record.dependencies.iter().flatten() {
            match dep {
                DependencyRecord::Raw { raw } => {
                    let _ = writeln!(out, "    {}", p.paint(Role::Dependency, raw));
                }
                DependencyRecord::Linked(lib) => {
                    let _ = writeln!(out, "    {}", linked_line(lib, p));
                }
            }
        }
    }

    if facets.sdk_version {
        let sdk = record.sdk_version.as_deref().unwrap_or_default();
        let _ = writeln!(out, "  {} {}", label(p, "SDK Version:"), p.paint(Role::Version, sdk));
    }

    if facets.codesign {
        let _ = writeln!(out, "  {}", label(p, "Code Signing Info:"));
        match record.codesign_info.as_deref() {
            Some(facts) if !facts.is_empty() => {
                for fact in facts {
                    let _ = writeln!(
                        out,
                        "    {}{}",
                        p.paint(Role::Property, &format!("{}=", fact.kind)),
                        p.paint(Role::Certificate, &fact.value)
                    );
                }
            }
            _ => {
                let _ = writeln!(out, "    {}", p.paint(Role::Error, "None"));
            }
        }
    }

    out.push('\n');
}

fn label(p: &Palette, text: &str) -> String {
    p.paint(Role::Property, text)
}

fn linked_line(lib: &LinkedLibrary, p: &Palette) -> String {
    let weak = if lib.weak {
        p.paint(Role::Success, "Yes")
    } else {
        p.paint(Role::Error, "No")
    };
    format!(
        "{} (compat: {}, current: {}, weak: {})",
        p.paint(Role::Path, &lib.path),
        p.paint(Role::Version, &lib.compatibility_version),
        p.paint(Role::Version, &lib.current_version),
        weak
    )
}
