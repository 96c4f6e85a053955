//! Human-readable error reports using miette's graphical handler.
//!
//! Errors carry a diagnostic code and, where it helps, a hint. This module
//! turns them into the boxed report format shown on a terminal.

use crate::Error;
use miette::{GraphicalReportHandler, GraphicalTheme};
use std::io::Write;

/// Character set for rendering error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    /// Use Unicode characters for rich visual output.
    #[default]
    Unicode,
    /// Use ASCII-only characters for compatibility.
    Ascii,
}

/// Configuration for error rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    pub charset: CharSet,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            color: true,
            charset: CharSet::Unicode,
        }
    }
}

impl RenderConfig {
    fn theme(&self) -> GraphicalTheme {
        match (self.charset, self.color) {
            (CharSet::Unicode, true) => GraphicalTheme::unicode(),
            (CharSet::Unicode, false) => GraphicalTheme::unicode_nocolor(),
            (CharSet::Ascii, true) => GraphicalTheme::ascii(),
            (CharSet::Ascii, false) => GraphicalTheme::none(),
        }
    }
}

/// Render an error to stderr using the default config.
pub fn render_error(error: &Error) {
    render_error_to(error, &mut std::io::stderr(), &RenderConfig::default()).ok();
}

/// Render an error to a writer with the given configuration.
pub fn render_error_to(
    error: &Error,
    writer: &mut dyn Write,
    config: &RenderConfig,
) -> std::io::Result<()> {
    let report = render_error_string(error, config);
    writer.write_all(report.as_bytes())
}

/// Render an error into a string.
pub fn render_error_string(error: &Error, config: &RenderConfig) -> String {
    let handler = GraphicalReportHandler::new_themed(config.theme()).with_links(false);
    let mut out = String::new();
    if handler.render_report(&mut out, error).is_err() {
        // Fall back to the plain message
        out = format!("Error: {error}\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Builtin;

    const UNICODE_CONFIG: RenderConfig = RenderConfig {
        color: false,
        charset: CharSet::Unicode,
    };

    const ASCII_CONFIG: RenderConfig = RenderConfig {
        color: false,
        charset: CharSet::Ascii,
    };

    fn unknown_builtin() -> Error {
        Builtin::lookup("array_frobnicate").unwrap_err()
    }

    #[test]
    fn test_report_has_code_message_and_help() {
        let output = render_error_string(&unknown_builtin(), &UNICODE_CONFIG);
        assert!(output.contains("arraywrap::invalid_callback"), "{output}");
        assert!(output.contains("invalid callback `array_frobnicate`: unknown builtin"));
        assert!(output.contains("pass a closure, or the name of a supported builtin"));
    }

    #[test]
    fn test_ascii_report_is_ascii() {
        let output = render_error_string(&unknown_builtin(), &ASCII_CONFIG);
        assert!(output.is_ascii(), "{output}");
    }

    #[test]
    fn test_uncolored_report_has_no_escapes() {
        let err = Error::EmptyAggregate { operation: "avg" };
        let output = render_error_string(&err, &UNICODE_CONFIG);
        assert!(!output.contains('\u{1b}'), "{output}");
        assert!(output.contains("cannot compute avg of an empty array"));
    }

    #[test]
    fn test_render_to_writer() {
        let mut buf = Vec::new();
        render_error_to(&unknown_builtin(), &mut buf, &ASCII_CONFIG).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            render_error_string(&unknown_builtin(), &ASCII_CONFIG)
        );
    }

    #[test]
    fn test_charset_default_is_unicode() {
        assert_eq!(CharSet::default(), CharSet::Unicode);
        assert_eq!(RenderConfig::default().charset, CharSet::Unicode);
    }
}
