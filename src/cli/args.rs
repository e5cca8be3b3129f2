//! Command line argument parsing and validation.
//!
//! Flags map one-to-one onto the output format, the optional facets, and the
//! color settings. [`RuntimeConfig`] resolves them into ready-to-use values.

use super::OutputManager;
use super::scheme::load_color_scheme;
use crate::error::CliError;
use crate::inspect::Facets;
use crate::render::{Layout, Palette, ReportFormat, detect_truecolor};
use clap::{CommandFactory, Parser, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;
use termcolor::ColorChoice;

/// Extract version, minimum macOS, architecture and binary metadata from .app bundles
#[derive(Parser, Debug)]
#[command(
    name = "kodegen_app_detect",
    version,
    about = "Extract version, minimum macOS requirement, architecture and binary metadata from .app bundles",
    long_about = "Extract version, minimum macOS requirement, architecture, and additional binary
metadata from .app bundles. Uses the external tools lipo, otool and codesign.",
    after_help = "Examples:
  kodegen_app_detect /Applications/Safari.app
  kodegen_app_detect '/Applications/*.app'
  kodegen_app_detect -p -u -d -s -c -C always /Applications /path/to/MyApp.app"
)]
pub struct Args {
    /// App bundle(s), directories to scan, or glob pattern(s)
    #[arg(value_name = "APP_BUNDLE")]
    pub inputs: Vec<String>,

    /// Produce JSON output
    #[arg(short, long)]
    pub json: bool,

    /// Pretty print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Include Mach-O UUID
    #[arg(short, long)]
    pub uuid: bool,

    /// Include dynamic library dependencies (structured)
    #[arg(short, long)]
    pub deps: bool,

    /// Include SDK version info
    #[arg(short, long)]
    pub sdk: bool,

    /// Include code signing details
    #[arg(short, long)]
    pub codesign: bool,

    /// Colorize output (auto: only when stdout is a terminal)
    #[arg(short = 'C', long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Path to custom color scheme JSON file
    ///
    /// A JSON object mapping role names (title, emphasis, error, success,
    /// warning, property, string, numeric, keyword, certificate, path,
    /// dependency, version, arch, reset) to a color name, `bold`, `none`, or a
    /// raw escape sequence.
    #[arg(long, value_name = "FILE", env = "KODEGEN_APP_DETECT_COLOR_SCHEME")]
    pub color_scheme: Option<PathBuf>,
}

/// When to emit color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorMode {
    /// Color when stdout is a terminal
    #[default]
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

impl ColorMode {
    /// Whether reports on stdout are colored
    pub fn enabled(self) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }

    fn diagnostics_choice(self) -> ColorChoice {
        match self {
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
            ColorMode::Auto if std::io::stderr().is_terminal() => ColorChoice::Auto,
            ColorMode::Auto => ColorChoice::Never,
        }
    }
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// One-line usage string
    pub fn usage() -> String {
        Self::command().render_usage().to_string()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), CliError> {
        if self.inputs.is_empty() {
            return Err(CliError::MissingArgument {
                argument: "APP_BUNDLE".to_string(),
            });
        }

        if self.inputs.iter().any(|input| input.trim().is_empty()) {
            return Err(CliError::InvalidArguments {
                reason: "bundle paths and patterns must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Optional facets requested on the command line
    pub fn facets(&self) -> Facets {
        Facets {
            uuid: self.uuid,
            dependencies: self.deps,
            sdk_version: self.sdk,
            codesign: self.codesign,
        }
    }

    /// Output format; `--pretty` only affects JSON
    pub fn format(&self) -> ReportFormat {
        match (self.json, self.pretty) {
            (true, true) => ReportFormat::Json(Layout::Pretty),
            (true, false) => ReportFormat::Json(Layout::Compact),
            (false, _) => ReportFormat::Text,
        }
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for colored terminal output
    output: OutputManager,
    palette: Palette,
    facets: Facets,
    format: ReportFormat,
}

impl RuntimeConfig {
    /// Get a reference to the output manager
    pub fn output(&self) -> &OutputManager {
        &self.output
    }

    /// Report palette
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Requested facets
    pub fn facets(&self) -> Facets {
        self.facets
    }

    /// Report format
    pub fn format(&self) -> ReportFormat {
        self.format
    }
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        let output = OutputManager::new(args.color.diagnostics_choice());

        let scheme = args.color_scheme.as_deref().and_then(|path| {
            load_color_scheme(path)
                .map_err(|e| {
                    output.warn(&format!(
                        "Warning: Could not load color scheme from {}: {:#}",
                        path.display(),
                        e
                    ));
                })
                .ok()
        });

        let palette = if args.color.enabled() {
            let truecolor = detect_truecolor();
            match &scheme {
                Some(scheme) => Palette::with_scheme(truecolor, scheme),
                None => Palette::new(truecolor),
            }
        } else {
            Palette::disabled()
        };

        Self {
            output,
            palette,
            facets: args.facets(),
            format: args.format(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("kodegen_app_detect").chain(argv.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_short_flags() {
        let args = parse(&["-j", "-p", "-u", "-d", "-s", "-c", "-C", "never", "Foo.app"]);
        assert_eq!(args.inputs, vec!["Foo.app"]);
        assert_eq!(args.color, ColorMode::Never);
        assert_eq!(args.facets(), Facets::all());
        assert_eq!(args.format(), ReportFormat::Json(Layout::Pretty));
    }

    #[test]
    fn test_pretty_without_json_is_text() {
        let args = parse(&["-p", "Foo.app"]);
        assert_eq!(args.format(), ReportFormat::Text);
        assert_eq!(args.facets(), Facets::default());
    }

    #[test]
    fn test_validate_requires_inputs() {
        let args = parse(&["-j"]);
        assert!(matches!(
            args.validate(),
            Err(CliError::MissingArgument { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_empty_input() {
        let args = parse(&["Foo.app", ""]);
        assert!(matches!(
            args.validate(),
            Err(CliError::InvalidArguments { .. })
        ));
    }

    #[test]
    fn test_never_disables_palette() {
        let args = parse(&["-C", "never", "Foo.app"]);
        assert!(!RuntimeConfig::from(&args).palette().is_enabled());
    }

    #[test]
    fn test_always_enables_palette() {
        let args = parse(&["-C", "always", "Foo.app"]);
        assert!(RuntimeConfig::from(&args).palette().is_enabled());
    }

    #[test]
    fn test_rejects_unknown_color_mode() {
        let result = Args::try_parse_from(["kodegen_app_detect", "-C", "sometimes", "Foo.app"]);
        assert!(result.is_err());
    }
}
