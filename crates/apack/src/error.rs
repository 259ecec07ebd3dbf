//! Error types for animation pack operations.
//!
//! [`ApackError`] wraps the two failure kinds of the pipeline: an invalid
//! configuration, caught before any text is parsed, and a rejected text.

use thiserror::Error;

use apack_parser::{ConfigurationError, ParseError};

/// The main error type for animation pack operations.
#[derive(Debug, Clone, Error)]
pub enum ApackError {
    #[error("{0}")]
    Configuration(#[from] ConfigurationError),

    #[error("{0}")]
    Parse(#[from] ParseError),
}

impl ApackError {
    /// Get the underlying diagnostic.
    pub fn diagnostic(&self) -> &apack_parser::Diagnostic {
        match self {
            ApackError::Configuration(err) => err.diagnostic(),
            ApackError::Parse(err) => err.diagnostic(),
        }
    }
}
