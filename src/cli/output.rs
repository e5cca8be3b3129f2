//! Colored terminal output for detection runs
//!
//! Diagnostics go to stderr; reports go to stdout untouched.

use crate::error::DetectError;
use std::io::{IsTerminal, Write};
use termcolor::{BufferWriter, Color, ColorChoice, ColorSpec, WriteColor};

/// Output manager for consistent colored terminal output
#[derive(Debug)]
pub struct OutputManager {
    diagnostics: BufferWriter,
    choice: ColorChoice,
}

impl Clone for OutputManager {
    fn clone(&self) -> Self {
        Self::new(self.choice)
    }
}

impl Default for OutputManager {
    /// Colors only when stderr is a terminal
    fn default() -> Self {
        if std::io::stderr().is_terminal() {
            Self::new(ColorChoice::Auto)
        } else {
            Self::new(ColorChoice::Never)
        }
    }
}

impl OutputManager {
    /// Create a new output manager coloring diagnostics per `choice`
    pub fn new(choice: ColorChoice) -> Self {
        Self {
            diagnostics: BufferWriter::stderr(choice),
            choice,
        }
    }

    /// Print a warning diagnostic
    pub fn warn(&self, message: &str) {
        let mut buffer = self.diagnostics.buffer();
        let _ = buffer.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)));
        let _ = write!(&mut buffer, "{}", message);
        let _ = buffer.reset();
        let _ = writeln!(&mut buffer);
        let _ = self.diagnostics.print(&buffer);
    }

    /// Print an error message (always shown)
    pub fn error(&self, message: &str) {
        let mut buffer = self.diagnostics.buffer();

        if buffer.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true)).is_err()
            || write!(&mut buffer, "✗").is_err()
            || buffer.reset().is_err()
            || buffer.set_color(ColorSpec::new().set_fg(Some(Color::Red))).is_err()
            || write!(&mut buffer, " {}", message).is_err()
            || buffer.reset().is_err()
            || writeln!(&mut buffer).is_err()
            || self.diagnostics.print(&buffer).is_err()
        {
            // stderr is gone; nothing left to report to
            log::error!("{}", message);
        }
    }

    /// Print a fatal error followed by its recovery suggestions
    pub fn report_error(&self, error: &DetectError) {
        self.error(&format!("Fatal error: {error}"));

        let suggestions = error.recovery_suggestions();
        if !suggestions.is_empty() {
            self.println("\n💡 Recovery suggestions:");
            for suggestion in suggestions {
                self.indent(&suggestion);
            }
        }
    }

    /// Print a plain diagnostic line
    pub fn println(&self, message: &str) {
        let mut buffer = self.diagnostics.buffer();
        let _ = writeln!(&mut buffer, "{}", message);
        let _ = self.diagnostics.print(&buffer);
    }

    /// Print indented text (for sub-items)
    pub fn indent(&self, message: &str) {
        self.println(&format!("    {}", message));
    }

    /// Write a rendered report to stdout verbatim.
    ///
    /// Reports carry their own color markers, so no color handling happens here.
    pub fn report(&self, text: &str) -> std::io::Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_keeps_color_choice() {
        let output = OutputManager::new(ColorChoice::Never);
        assert_eq!(output.clone().choice, ColorChoice::Never);
    }
}
