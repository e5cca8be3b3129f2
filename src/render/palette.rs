//! Semantic color roles and their terminal markers.
//!
//! Renderers never hard-code escape sequences. They ask the [`Palette`] for the
//! start marker of a [`Role`] and for the reset marker; a disabled palette
//! answers with empty strings so the same rendering code produces plain text.

use std::collections::{BTreeMap, HashMap};
use termcolor::{Buffer, Color, ColorSpec, WriteColor};

/// Semantic role of a piece of rendered output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    /// Record titles
    Title,
    /// Emphasized text
    Emphasis,
    /// Errors and negative values
    Error,
    /// Positive values
    Success,
    /// Warnings
    Warning,
    /// Field labels and JSON keys
    Property,
    /// JSON string values
    String,
    /// JSON numbers
    Numeric,
    /// `true`, `false`, `null`
    Keyword,
    /// Signing facts
    Certificate,
    /// File paths
    Path,
    /// Unparsed dependency lines
    Dependency,
    /// Version numbers
    Version,
    /// Architecture labels
    Arch,
}

impl Role {
    /// Every role.
    pub const ALL: [Role; 14] = [
        Role::Title,
        Role::Emphasis,
        Role::Error,
        Role::Success,
        Role::Warning,
        Role::Property,
        Role::String,
        Role::Numeric,
        Role::Keyword,
        Role::Certificate,
        Role::Path,
        Role::Dependency,
        Role::Version,
        Role::Arch,
    ];

    /// Name used in color scheme files.
    pub fn name(self) -> &'static str {
        match self {
            Role::Title => "title",
            Role::Emphasis => "emphasis",
            Role::Error => "error",
            Role::Success => "success",
            Role::Warning => "warning",
            Role::Property => "property",
            Role::String => "string",
            Role::Numeric => "numeric",
            Role::Keyword => "keyword",
            Role::Certificate => "certificate",
            Role::Path => "path",
            Role::Dependency => "dependency",
            Role::Version => "version",
            Role::Arch => "arch",
        }
    }

    /// Look up a role by its scheme name.
    pub fn from_name(name: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|role| role.name() == name)
    }

    fn base(self) -> Base {
        match self {
            Role::Title | Role::Property | Role::Path => Base::Cyan,
            Role::Emphasis => Base::Bold,
            Role::Error => Base::Red,
            Role::Success | Role::String | Role::Dependency => Base::Green,
            Role::Warning | Role::Keyword | Role::Version => Base::Yellow,
            Role::Numeric | Role::Arch => Base::Blue,
            Role::Certificate => Base::Magenta,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Base {
    Red,
    Green,
    Yellow,
    Blue,
    Cyan,
    Magenta,
    Bold,
}

impl Base {
    /// ANSI color and its 24-bit counterpart; `None` for attribute-only bases.
    fn colors(self) -> Option<(Color, (u8, u8, u8))> {
        match self {
            Base::Red => Some((Color::Red, (255, 85, 85))),
            Base::Green => Some((Color::Green, (85, 255, 85))),
            Base::Yellow => Some((Color::Yellow, (255, 255, 85))),
            Base::Blue => Some((Color::Blue, (85, 85, 255))),
            Base::Cyan => Some((Color::Cyan, (85, 255, 255))),
            Base::Magenta => Some((Color::Magenta, (255, 85, 255))),
            Base::Bold => None,
        }
    }

    fn spec(self, truecolor: bool) -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_reset(false);

        match self.colors() {
            None => {
                spec.set_bold(true);
            }
            Some((_, (r, g, b))) if truecolor => {
                spec.set_fg(Some(Color::Rgb(r, g, b)));
            }
            Some((color, _)) => {
                // 8-color yellow is only legible in bold
                spec.set_fg(Some(color)).set_bold(matches!(self, Base::Yellow));
            }
        }
        spec
    }
}

/// Whether the terminal advertises 24-bit color via `COLORTERM`.
pub fn detect_truecolor() -> bool {
    std::env::var("COLORTERM")
        .map(|v| matches!(v.to_ascii_lowercase().as_str(), "truecolor" | "24bit"))
        .unwrap_or(false)
}

/// Start markers per role plus the shared reset marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    markers: BTreeMap<Role, String>,
    reset: String,
}

impl Palette {
    /// Palette whose markers are all empty.
    pub fn disabled() -> Self {
        Self {
            markers: BTreeMap::new(),
            reset: String::new(),
        }
    }

    /// Default colors, 24-bit when `truecolor` is set.
    pub fn new(truecolor: bool) -> Self {
        let markers = Role::ALL
            .into_iter()
            .map(|role| (role, marker(&role.base().spec(truecolor))))
            .collect();

        let mut buffer = Buffer::ansi();
        let _ = buffer.reset();

        Self {
            markers,
            reset: String::from_utf8_lossy(buffer.as_slice()).into_owned(),
        }
    }

    /// Default colors with per-role overrides from a color scheme.
    ///
    /// Scheme values are `bold`, `none`, any color accepted by
    /// `termcolor::Color` (`red`, `214`, `255,85,85`, ...), or a raw escape
    /// sequence such as `"\u001b[1;36m"`, which is used verbatim. The `reset`
    /// key takes a raw escape sequence. `heading` and `prompt` are accepted and
    /// have nothing to color. Other unknown keys and unparsable colors are
    /// ignored with a warning.
    pub fn with_scheme(truecolor: bool, scheme: &HashMap<String, String>) -> Self {
        let mut palette = Self::new(truecolor);

        for (name, value) in scheme {
            if name == RESET_KEY {
                if is_escape_sequence(value) {
                    palette.reset = value.clone();
                } else {
                    log::warn!("ignoring reset '{}': expected an escape sequence", value);
                }
                continue;
            }

            let Some(role) = Role::from_name(name) else {
                if UNRENDERED_KEYS.contains(&name.as_str()) {
                    log::debug!("color role '{}' is not used in reports", name);
                } else {
                    log::warn!("ignoring unknown color role '{}'", name);
                }
                continue;
            };

            if is_escape_sequence(value) {
                palette.markers.insert(role, value.clone());
                continue;
            }

            let mut spec = ColorSpec::new();
            spec.set_reset(false);
            match value.trim().to_ascii_lowercase().as_str() {
                "none" => {
                    palette.markers.insert(role, String::new());
                    continue;
                }
                "bold" => {
                    spec.set_bold(true);
                }
                other => match other.parse::<Color>() {
                    Ok(color) => {
                        spec.set_fg(Some(color));
                    }
                    Err(e) => {
                        log::warn!("ignoring color '{}' for role '{}': {}", value, name, e);
                        continue;
                    }
                },
            }
            palette.markers.insert(role, marker(&spec));
        }

        palette
    }

    /// Whether any markers are emitted.
    pub fn is_enabled(&self) -> bool {
        !self.reset.is_empty()
    }

    /// Start marker for `role`.
    pub fn start(&self, role: Role) -> &str {
        self.markers.get(&role).map(String::as_str).unwrap_or("")
    }

    /// Reset marker.
    pub fn reset(&self) -> &str {
        &self.reset
    }

    /// Wrap `text` in the markers of `role`.
    pub fn paint(&self, role: Role, text: &str) -> String {
        format!("{}{}{}", self.start(role), text, self.reset)
    }
}

// Scheme keys that name the reset marker and roles with no report output
const RESET_KEY: &str = "reset";
const UNRENDERED_KEYS: [&str; 2] = ["heading", "prompt"];

fn is_escape_sequence(value: &str) -> bool {
    value.starts_with('\x1b')
}

fn marker(spec: &ColorSpec) -> String {
    let mut buffer = Buffer::ansi();
    let _ = buffer.set_color(spec);
    String::from_utf8_lossy(buffer.as_slice()).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_palette_is_plain() {
        let palette = Palette::disabled();
        assert!(!palette.is_enabled());
        assert_eq!(palette.paint(Role::Path, "/Applications"), "/Applications");
    }

    #[test]
    fn test_basic_colors() {
        let palette = Palette::new(false);
        assert!(palette.is_enabled());
        assert_eq!(palette.reset(), "\x1b[0m");
        assert_eq!(palette.start(Role::Error), "\x1b[31m");
        assert_eq!(palette.start(Role::Emphasis), "\x1b[1m");
        assert_eq!(palette.paint(Role::Path, "x"), "\x1b[36mx\x1b[0m");
    }

    #[test]
    fn test_truecolor() {
        let palette = Palette::new(true);
        assert_eq!(palette.start(Role::Certificate), "\x1b[38;2;255;85;255m");
    }

    #[test]
    fn test_scheme_overrides() {
        let scheme = HashMap::from([
            ("path".to_string(), "magenta".to_string()),
            ("arch".to_string(), "none".to_string()),
            ("bogus".to_string(), "red".to_string()),
            ("version".to_string(), "not-a-color".to_string()),
        ]);
        let palette = Palette::with_scheme(false, &scheme);
        let defaults = Palette::new(false);

        assert_eq!(palette.start(Role::Path), "\x1b[35m");
        assert_eq!(palette.start(Role::Arch), "");
        assert_eq!(palette.start(Role::Version), defaults.start(Role::Version));
    }

    #[test]
    fn test_scheme_accepts_raw_escape_sequences() {
        let scheme = HashMap::from([
            ("path".to_string(), "\x1b[1;95m".to_string()),
            ("reset".to_string(), "\x1b[39;22m".to_string()),
            ("heading".to_string(), "\x1b[0;36m".to_string()),
            ("prompt".to_string(), "\x1b[0;36m".to_string()),
        ]);
        let palette = Palette::with_scheme(false, &scheme);

        assert_eq!(palette.start(Role::Path), "\x1b[1;95m");
        assert_eq!(palette.reset(), "\x1b[39;22m");
        assert_eq!(palette.paint(Role::Path, "x"), "\x1b[1;95mx\x1b[39;22m");
        assert_eq!(palette.start(Role::Title), Palette::new(false).start(Role::Title));
    }

    #[test]
    fn test_scheme_reset_requires_escape_sequence() {
        let scheme = HashMap::from([("reset".to_string(), "reset".to_string())]);
        assert_eq!(Palette::with_scheme(false, &scheme).reset(), "\x1b[0m");
    }

    #[test]
    fn test_role_names_round_trip() {
        for role in Role::ALL {
            assert_eq!(Role::from_name(role.name()), Some(role));
        }
        assert_eq!(Role::from_name("heading"), None);
    }
}
