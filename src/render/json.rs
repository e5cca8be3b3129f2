//! JSON rendering with optional syntax highlighting.
//!
//! Highlighting runs after serialization as an ordered pipeline of rewrite
//! stages. Each stage only sees text that no earlier stage has claimed, so a
//! string value is never re-wrapped as a key and a `true` inside a string is
//! never colored as a keyword.

use crate::metadata::BundleMetadata;
use crate::render::palette::{Palette, Role};
use regex::{Captures, Regex};
use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter, Serializer};
use std::io;
use std::sync::LazyLock;

/// JSON layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// Single line
    #[default]
    Compact,
    /// Four-space indentation
    Pretty,
}

/// Serialize `records` as a JSON array, highlighted when `palette` is enabled.
///
/// Output is pure ASCII: non-ASCII characters are written as `\uXXXX`
/// escapes. The compact layout separates items with `", "` and keys from
/// values with `": "`.
pub fn render_json(
    records: &[BundleMetadata],
    layout: Layout,
    palette: &Palette,
) -> serde_json::Result<String> {
    let formatter = match layout {
        Layout::Compact => AsciiFormatter::Compact,
        Layout::Pretty => AsciiFormatter::Pretty(PrettyFormatter::with_indent(b"    ")),
    };

    let mut out = Vec::new();
    let mut ser = Serializer::with_formatter(&mut out, formatter);
    records.serialize(&mut ser)?;
    let text = String::from_utf8_lossy(&out).into_owned();

    Ok(if palette.is_enabled() {
        highlight_json(&text, palette)
    } else {
        text
    })
}

/// JSON formatter that escapes every non-ASCII character.
enum AsciiFormatter<'a> {
    Compact,
    Pretty(PrettyFormatter<'a>),
}

impl Formatter for AsciiFormatter<'_> {
    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        match self {
            Self::Compact => writer.write_all(b"["),
            Self::Pretty(pretty) => pretty.begin_array(writer),
        }
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        match self {
            Self::Compact => writer.write_all(b"]"),
            Self::Pretty(pretty) => pretty.end_array(writer),
        }
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        match self {
            Self::Compact if first => Ok(()),
            Self::Compact => writer.write_all(b", "),
            Self::Pretty(pretty) => pretty.begin_array_value(writer, first),
        }
    }

    fn end_array_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        match self {
            Self::Compact => Ok(()),
            Self::Pretty(pretty) => pretty.end_array_value(writer),
        }
    }

    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        match self {
            Self::Compact => writer.write_all(b"{"),
            Self::Pretty(pretty) => pretty.begin_object(writer),
        }
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        match self {
            Self::Compact => writer.write_all(b"}"),
            Self::Pretty(pretty) => pretty.end_object(writer),
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        match self {
            Self::Compact if first => Ok(()),
            Self::Compact => writer.write_all(b", "),
            Self::Pretty(pretty) => pretty.begin_object_key(writer, first),
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        match self {
            Self::Compact => writer.write_all(b": "),
            Self::Pretty(pretty) => pretty.begin_object_value(writer),
        }
    }

    fn end_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        match self {
            Self::Compact => Ok(()),
            Self::Pretty(pretty) => pretty.end_object_value(writer),
        }
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (i, ch) in fragment.char_indices().filter(|(_, ch)| !ch.is_ascii()) {
            writer.write_all(&fragment.as_bytes()[start..i])?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = i + ch.len_utf8();
        }
        writer.write_all(&fragment.as_bytes()[start..])
    }
}

/// A piece of output text, either still open for rewriting or already colored.
#[derive(Debug)]
enum Span {
    Plain(String),
    Painted(String),
}

type Rewrite = fn(&Captures<'_>, &Palette) -> Vec<Span>;

struct Stage {
    pattern: Regex,
    rewrite: Rewrite,
}

// A JSON string literal, escape-aware
const STRING: &str = r#""(?:[^"\\]|\\.)*""#;

static STRING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(STRING).expect("string regex is valid"));

static STAGES: LazyLock<[Stage; 5]> = LazyLock::new(|| {
    [
        // key names
        Stage::new(&format!(r"({STRING})(\s*):"), |caps, p| {
            vec![
                Span::Painted(format!(
                    "{}{}{}{}",
                    p.start(Role::Property),
                    p.start(Role::Emphasis),
                    &caps[1],
                    p.reset()
                )),
                Span::Plain(format!("{}:", &caps[2])),
            ]
        }),
        // elements of arrays made only of strings
        Stage::new(&format!(r"(\[\s*)((?:{STRING},?\s*)+)(\])"), |caps, p| {
            let elements = STRING_RE.replace_all(&caps[2], |m: &Captures<'_>| {
                p.paint(Role::Certificate, &m[0])
            });
            vec![
                Span::Plain(caps[1].to_string()),
                Span::Painted(elements.into_owned()),
                Span::Plain(caps[3].to_string()),
            ]
        }),
        // remaining string values
        Stage::new(&format!(r":(\s*)({STRING})"), |caps, p| {
            vec![
                Span::Plain(format!(":{}", &caps[1])),
                Span::Painted(p.paint(Role::String, &caps[2])),
            ]
        }),
        Stage::new(r"\b(true|false|null)\b", |caps, p| {
            vec![Span::Painted(p.paint(Role::Keyword, &caps[1]))]
        }),
        Stage::new(r":(\s*)(-?\d+(?:\.\d+)?)", |caps, p| {
            vec![
                Span::Plain(format!(":{}", &caps[1])),
                Span::Painted(p.paint(Role::Numeric, &caps[2])),
            ]
        }),
    ]
});

impl Stage {
    fn new(pattern: &str, rewrite: Rewrite) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("highlight regex is valid"),
            rewrite,
        }
    }

    fn apply(&self, spans: Vec<Span>, palette: &Palette) -> Vec<Span> {
        let mut out = Vec::with_capacity(spans.len());
        for span in spans {
            let text = match span {
                Span::Plain(text) => text,
                painted => {
                    out.push(painted);
                    continue;
                }
            };

            let mut last = 0;
            for caps in self.pattern.captures_iter(&text) {
                let Some(whole) = caps.get(0) else { continue };
                push_span(&mut out, Span::Plain(text[last..whole.start()].to_string()));
                for span in (self.rewrite)(&caps, palette) {
                    push_span(&mut out, span);
                }
                last = whole.end();
            }
            push_span(&mut out, Span::Plain(text[last..].to_string()));
        }
        out
    }
}

/// Append `span`, joining it onto a preceding plain span.
///
/// Later stages match across what an earlier stage left behind, such as the
/// `:` after a key and the value that follows it.
fn push_span(spans: &mut Vec<Span>, span: Span) {
    if let Span::Plain(text) = &span {
        if text.is_empty() {
            return;
        }
        if let Some(Span::Plain(prev)) = spans.last_mut() {
            prev.push_str(text);
            return;
        }
    }
    spans.push(span);
}

/// Apply the highlighting pipeline to serialized JSON.
///
/// Removing every marker from the result yields `json` unchanged.
pub fn highlight_json(json: &str, palette: &Palette) -> String {
    let spans = STAGES
        .iter()
        .fold(vec![Span::Plain(json.to_string())], |spans, stage| {
            stage.apply(spans, palette)
        });

    spans
        .into_iter()
        .map(|span| match span {
            Span::Plain(text) | Span::Painted(text) => text,
        })
        .collect()
}
