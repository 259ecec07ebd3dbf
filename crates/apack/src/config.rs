//! Configuration types for animation pack parsing.
//!
//! All types implement [`serde::Deserialize`] and are usually loaded from a
//! TOML document:
//!
//! ```toml
//! [syntax]
//! tag_marks = ["[", "]"]
//! actions_delimiter = ";"
//! parameters_delimiter = { pattern = '\s+' }
//! actions = ["rotate", "scale", "blink"]
//! ```
//!
//! Every key is optional; missing keys take the default grammar.
//!
//! # Example
//!
//! ```
//! # use apack::config::AppConfig;
//! let config = AppConfig::from_toml_str("[syntax]\ncomment_prefix = \"//\"\n")?;
//! # Ok::<(), apack::ApackError>(())
//! ```

use serde::Deserialize;

use apack_parser::{ConfigurationError, Diagnostic, ErrorCode, SyntaxConfig};

use crate::ApackError;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Grammar section.
    #[serde(default)]
    syntax: SyntaxConfig,
}

impl AppConfig {
    pub fn new(syntax: SyntaxConfig) -> Self {
        Self { syntax }
    }

    /// Load a configuration from TOML text.
    ///
    /// Only the document shape is checked here; the grammar itself is
    /// validated when a [`PackBuilder`](crate::PackBuilder) is created.
    ///
    /// # Errors
    ///
    /// Returns [`ApackError::Configuration`] (E005) if the text is not valid
    /// TOML, has unknown keys, or has values of the wrong type.
    pub fn from_toml_str(content: &str) -> Result<Self, ApackError> {
        toml::from_str(content).map_err(|err| {
            let diagnostic = Diagnostic::new(
                ErrorCode::E005,
                format!("malformed configuration: {}", err.message()),
            )
            .with_help("see the `[syntax]` section keys in the configuration docs");
            let diagnostic = match err.span() {
                Some(span) => diagnostic.with_line(line_at(content, span.start)),
                None => diagnostic,
            };
            ApackError::Configuration(ConfigurationError::new(diagnostic))
        })
    }

    /// Returns the grammar configuration.
    pub fn syntax(&self) -> &SyntaxConfig {
        &self.syntax
    }
}

/// 1-based line of the byte at `offset`.
fn line_at(content: &str, offset: usize) -> usize {
    content
        .as_bytes()
        .iter()
        .take(offset)
        .filter(|&&byte| byte == b'\n')
        .count()
        + 1
}
