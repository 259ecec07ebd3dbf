//! The core diagnostic type for the animation pack error system.
//!
//! A [`Diagnostic`] represents a single error with an error code, a message,
//! the source line it was found on and optional help text.

use std::fmt;

use crate::error::ErrorCode;

/// A diagnostic message with source line information.
///
/// # Example
///
/// ```text
/// error[E203]: invalid action `spin` (line 3)
///    = help: expected one of: rotate, scale, translateX, translateY, color, fade
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    code: ErrorCode,
    message: String,
    line: Option<usize>,
    help: Option<String>,
}

impl Diagnostic {
    /// Create a diagnostic.
    ///
    /// # Example
    ///
    /// ```
    /// # use apack_parser::error::{Diagnostic, ErrorCode};
    /// let diag = Diagnostic::new(ErrorCode::E204, "action `fade` missing params")
    ///     .with_line(2)
    ///     .with_help("write at least one parameter after the action name");
    ///
    /// assert_eq!(diag.line(), Some(2));
    /// ```
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            line: None,
            help: None,
        }
    }

    /// Get the error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Get the primary message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the 1-based source line, if any.
    pub fn line(&self) -> Option<usize> {
        self.line
    }

    /// Get the help text, if any.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Set the 1-based source line.
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: "error[E201]: message (line 4)" or "error[E001]: message"
        write!(f, "error[{}]: {}", self.code, self.message)?;
        if let Some(line) = self.line {
            write!(f, " (line {line})")?;
        }
        Ok(())
    }
}

impl std::error::Error for Diagnostic {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_new() {
        let diag = Diagnostic::new(ErrorCode::E200, "invalid tag `(oops`");

        assert_eq!(diag.code(), ErrorCode::E200);
        assert_eq!(diag.message(), "invalid tag `(oops`");
        assert!(diag.line().is_none());
        assert!(diag.help().is_none());
    }

    #[test]
    fn test_diagnostic_with_help() {
        let diag = Diagnostic::new(ErrorCode::E202, "invalid duration time unit `days`")
            .with_help("known units: ms, s, m, h");

        assert_eq!(diag.help(), Some("known units: ms, s, m, h"));
    }

    #[test]
    fn test_diagnostic_display_with_line() {
        let diag = Diagnostic::new(ErrorCode::E101, "mixed indentation characters").with_line(7);

        assert_eq!(
            diag.to_string(),
            "error[E101]: mixed indentation characters (line 7)"
        );
    }

    #[test]
    fn test_diagnostic_display_without_line() {
        let diag = Diagnostic::new(ErrorCode::E002, "no actions configured");

        assert_eq!(diag.to_string(), "error[E002]: no actions configured");
    }
}
