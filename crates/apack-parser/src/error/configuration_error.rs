//! The error raised while building a syntax profile.

use thiserror::Error;

use crate::error::{Diagnostic, ErrorCode};

/// A syntax configuration was rejected.
///
/// Raised when a [`SyntaxProfile`](crate::SyntaxProfile) is built, before
/// any text is parsed.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct ConfigurationError(Diagnostic);

impl ConfigurationError {
    /// Create a configuration error from a diagnostic.
    pub fn new(diagnostic: Diagnostic) -> Self {
        Self(diagnostic)
    }

    /// Get the underlying diagnostic.
    pub fn diagnostic(&self) -> &Diagnostic {
        &self.0
    }

    /// Get the error code.
    pub fn code(&self) -> ErrorCode {
        self.0.code()
    }
}

impl From<Diagnostic> for ConfigurationError {
    fn from(diagnostic: Diagnostic) -> Self {
        Self(diagnostic)
    }
}
