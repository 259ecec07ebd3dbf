//! # Animation Pack Parser
//!
//! Parser for the animation pack language: an indentation-structured text
//! format where each line lists visual actions with an optional duration and
//! tag, and indentation nests lines under each other.
//!
//! ```text
//! # intro sequence
//! rotate 45, scale 2 @300ms (spin)
//!     fade 0.5 @1s
//! (checkpoint)
//! ```
//!
//! The grammar is configurable through a [`SyntaxProfile`]: the duration and
//! tag marks, the delimiters, the comment prefix and the set of recognized
//! actions.
//!
//! ## Usage
//!
//! ```
//! # use apack_parser::{ParseError, Parser};
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = "rotate 45 @300ms (mark1)\n    fade 0.5\n";
//!
//!     let tree = Parser::default().parse(source)?;
//!     let node = &tree.children()[0];
//!     assert_eq!(node.tag(), Some("mark1"));
//!     assert_eq!(node.duration(), Some(300.0));
//!     assert_eq!(node.children().len(), 1);
//!     Ok(())
//! }
//! ```

mod builder;
pub mod error;
mod line_parser;
mod lines;
mod patterns;
pub mod syntax;

pub use error::{ConfigurationError, Diagnostic, ErrorCode, ParseError};
pub use syntax::{Delimiter, DelimiterSpec, Marks, SyntaxConfig, SyntaxProfile};

use apack_core::tree::TreeNode;

/// Parse source text into a tree using the given profile.
///
/// The pipeline has two stages:
///
/// 1. **Preprocess** - Strip comments and blank lines, measure indentation
///    and link every line to its parent
/// 2. **Build** - Parse each line and assemble the tree in source order
///
/// # Errors
///
/// Returns [`ParseError::Indentation`] for mixed or inconsistent indentation
/// and [`ParseError::Line`] for the first malformed line. Both carry the
/// 1-based line number.
///
/// # Example
///
/// ```
/// # use apack_parser::{parse, ParseError, SyntaxProfile};
///
/// fn main() -> Result<(), ParseError> {
///     let tree = parse("rotate 45", &SyntaxProfile::default())?;
///     assert_eq!(tree.children()[0].actions()[0].name(), "rotate");
///     Ok(())
/// }
/// ```
pub fn parse(source: &str, profile: &SyntaxProfile) -> Result<TreeNode, ParseError> {
    // Step 1: Preprocess
    let lines = lines::preprocess(source, profile)?;

    // Step 2: Build
    builder::build_tree(&lines, profile)
}

/// A reusable parser bound to one syntax profile.
///
/// A `Parser` holds no per-parse state; it can be shared between threads and
/// used for any number of texts.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    profile: SyntaxProfile,
}

impl Parser {
    /// Create a parser from a syntax configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] if the configuration is invalid. See
    /// [`SyntaxProfile::new`].
    pub fn new(config: SyntaxConfig) -> Result<Self, ConfigurationError> {
        SyntaxProfile::new(config).map(Self::from_profile)
    }

    /// Create a parser from an already resolved profile.
    pub fn from_profile(profile: SyntaxProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &SyntaxProfile {
        &self.profile
    }

    /// Parse source text into a tree.
    ///
    /// # Errors
    ///
    /// See [`parse`].
    pub fn parse(&self, source: &str) -> Result<TreeNode, ParseError> {
        parse(source, &self.profile)
    }

    /// Parse raw bytes, which must be UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Input`] (E100) if `bytes` is not valid UTF-8,
    /// with the line of the first invalid byte. Otherwise see [`parse`].
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<TreeNode, ParseError> {
        let source = std::str::from_utf8(bytes).map_err(|err| {
            let line = lines::line_number_at(bytes, err.valid_up_to());
            ParseError::Input(
                Diagnostic::new(ErrorCode::E100, "input is not valid UTF-8 text")
                    .with_line(line)
                    .with_help(format!(
                        "invalid byte sequence at offset {}",
                        err.valid_up_to()
                    )),
            )
        })?;
        self.parse(source)
    }
}
