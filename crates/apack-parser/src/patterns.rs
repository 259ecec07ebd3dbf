//! Matchers derived from a syntax profile's marks.
//!
//! Both matchers are built once per [`SyntaxProfile`](crate::SyntaxProfile)
//! and applied to whole, already trimmed strings:
//!
//! - [`TagPattern`]: `open` + at least one character + `close`
//! - [`DurationPattern`]: `open` + number + optional whitespace + optional
//!   unit word + `close`

use regex::Regex;
use winnow::{
    Parser as _,
    ascii::{digit0, digit1},
    combinator::{eof, opt},
    error::ModalResult,
    token::{literal, take_while},
};

use crate::{
    error::{ConfigurationError, Diagnostic, ErrorCode},
    syntax::Marks,
};

/// Matches a complete tag such as `(mark1)`.
#[derive(Debug, Clone)]
pub(crate) struct TagPattern(Regex);

impl TagPattern {
    pub(crate) fn new(marks: &Marks) -> Result<Self, ConfigurationError> {
        let source = format!(
            "^{}(.+){}$",
            regex::escape(marks.open()),
            regex::escape(marks.close())
        );
        let regex = Regex::new(&source).map_err(|err| {
            Diagnostic::new(
                ErrorCode::E003,
                format!("tag marks `{}` `{}` cannot form a pattern", marks.open(), marks.close()),
            )
            .with_help(err.to_string())
        })?;
        Ok(Self(regex))
    }

    /// The text between the marks, or `None` if `text` is not a single tag.
    ///
    /// Whitespace inside the marks is kept as written.
    pub(crate) fn content<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.0
            .captures(text)
            .and_then(|captures| captures.get(1))
            .map(|content| content.as_str())
    }
}

/// Matches a complete duration such as `@300ms` or `@1.5 s`.
#[derive(Debug, Clone)]
pub(crate) struct DurationPattern {
    open: String,
    close: String,
}

impl DurationPattern {
    pub(crate) fn new(marks: &Marks) -> Self {
        Self {
            open: marks.open().to_string(),
            close: marks.close().to_string(),
        }
    }

    /// Splits a duration into its numeric value and unit word.
    ///
    /// The unit is empty when none was written. Returns `None` if `text` is
    /// not a single duration.
    pub(crate) fn split<'t>(&self, text: &'t str) -> Option<(&'t str, &'t str)> {
        let mut input = text;
        duration_literal(&self.open, &self.close, &mut input).ok()
    }
}

/// Parse `open digits[.digits] ws* unit close` up to the end of input.
fn duration_literal<'i>(
    open: &str,
    close: &str,
    input: &mut &'i str,
) -> ModalResult<(&'i str, &'i str)> {
    (
        literal(open),
        (digit1, opt(('.', digit0))).take(),
        take_while(0.., char::is_whitespace),
        take_while(0.., |c: char| c.is_ascii_alphanumeric() || c == '_'),
        literal(close),
        eof,
    )
        .map(|(_, value, _, unit, _, _)| (value, unit))
        .parse_next(input)
}
