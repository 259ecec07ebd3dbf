//! The ParseError type for failures while parsing a text.

use thiserror::Error;

use crate::error::{Diagnostic, ErrorCode};

/// A type alias for `Result<T, ParseError>`.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Error type for the parsing lifecycle.
///
/// The variant tells which stage rejected the text; the wrapped
/// [`Diagnostic`] says why and where.
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// The input is not text.
    #[error("{0}")]
    Input(Diagnostic),

    /// A line's indentation is mixed or inconsistent.
    #[error("{0}")]
    Indentation(Diagnostic),

    /// A line's tag, duration or actions are malformed.
    #[error("{0}")]
    Line(Diagnostic),
}

impl ParseError {
    /// Get the underlying diagnostic.
    pub fn diagnostic(&self) -> &Diagnostic {
        match self {
            ParseError::Input(diag) | ParseError::Indentation(diag) | ParseError::Line(diag) => {
                diag
            }
        }
    }

    /// Get the error code.
    pub fn code(&self) -> ErrorCode {
        self.diagnostic().code()
    }

    /// Get the 1-based source line the error was found on, if any.
    pub fn line(&self) -> Option<usize> {
        self.diagnostic().line()
    }

    /// Returns `true` for indentation errors.
    pub fn is_indentation(&self) -> bool {
        matches!(self, ParseError::Indentation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_accessors() {
        let err = ParseError::Indentation(
            Diagnostic::new(ErrorCode::E102, "inconsistent indentation").with_line(4),
        );

        assert!(err.is_indentation());
        assert_eq!(err.code(), ErrorCode::E102);
        assert_eq!(err.line(), Some(4));
    }

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::Line(
            Diagnostic::new(ErrorCode::E201, "invalid duration `@fast`").with_line(2),
        );

        assert!(!err.is_indentation());
        assert_eq!(
            err.to_string(),
            "error[E201]: invalid duration `@fast` (line 2)"
        );
    }
}
