//! Apack - parse animation pack text into trees of timed, tagged actions.
//!
//! This crate ties the grammar configuration and the parser together behind a
//! single [`PackBuilder`]. The tree types live in [`tree`] and the unit table
//! in [`duration`].

pub mod config;

mod error;

pub use apack_core::{duration, tree};
pub use apack_parser::{
    ConfigurationError, Diagnostic, ErrorCode, ParseError, SyntaxConfig, SyntaxProfile,
};

pub use error::ApackError;

use log::{debug, info, trace};

use apack_parser::Parser;

use config::AppConfig;
use tree::TreeNode;

/// Builder for parsing animation packs.
///
/// The grammar is resolved once when the builder is created; parsing never
/// fails because of the configuration afterwards.
///
/// # Examples
///
/// ```
/// use apack::{PackBuilder, config::AppConfig};
///
/// let config = AppConfig::from_toml_str("[syntax]\ntag_marks = [\"[\", \"]\"]\n")
///     .expect("Failed to load config");
/// let builder = PackBuilder::new(config).expect("Invalid syntax");
///
/// let tree = builder.parse("rotate 45 @1s [spin]").expect("Failed to parse");
/// assert_eq!(tree.children()[0].tag(), Some("spin"));
///
/// // Or use the default grammar
/// let builder = PackBuilder::default();
/// ```
#[derive(Debug, Clone, Default)]
pub struct PackBuilder {
    parser: Parser,
}

impl PackBuilder {
    /// Create a new builder with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApackError::Configuration`] if the `[syntax]` section
    /// describes an invalid grammar.
    pub fn new(config: AppConfig) -> Result<Self, ApackError> {
        let parser = Parser::new(config.syntax().clone())?;
        debug!(actions_count = parser.profile().actions().count(); "Pack builder configured");
        Ok(Self { parser })
    }

    /// Returns the resolved grammar.
    pub fn profile(&self) -> &SyntaxProfile {
        self.parser.profile()
    }

    /// Parse source text into a tree.
    ///
    /// # Errors
    ///
    /// Returns [`ApackError::Parse`] for indentation errors or the first
    /// malformed line.
    pub fn parse(&self, source: &str) -> Result<TreeNode, ApackError> {
        info!(source_len = source.len(); "Parsing animation pack");

        let tree = self.parser.parse(source)?;

        debug!(nodes_count = tree.len(), depth = tree.depth(); "Animation pack parsed");
        trace!(tree:?; "Parsed tree");

        Ok(tree)
    }

    /// Parse raw bytes into a tree.
    ///
    /// # Errors
    ///
    /// Returns [`ApackError::Parse`] if the bytes are not UTF-8 text (E100),
    /// or for the same reasons as [`PackBuilder::parse`].
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<TreeNode, ApackError> {
        info!(bytes_len = bytes.len(); "Parsing animation pack bytes");

        let tree = self.parser.parse_bytes(bytes)?;

        debug!(nodes_count = tree.len(), depth = tree.depth(); "Animation pack parsed");
        trace!(tree:?; "Parsed tree");

        Ok(tree)
    }
}
