//! Syntax configuration and the compiled syntax profile.
//!
//! The grammar of an animation pack is configurable: the marks around
//! durations and tags, the delimiters between actions and parameters, the
//! comment prefix and the set of known actions can all be changed.
//!
//! - [`SyntaxConfig`] is the partial, caller-facing form. Every field is
//!   optional and the type can be deserialized with serde.
//! - [`SyntaxProfile`] is the validated, fully resolved form. It is built once
//!   from a config, fills missing fields from the defaults below, compiles
//!   the derived tag and duration matchers, and is then shared read-only by
//!   every parse.
//!
//! # Example
//!
//! ```
//! # use apack_parser::{DelimiterSpec, SyntaxConfig, SyntaxProfile};
//! let config = SyntaxConfig::default()
//!     .with_tag_marks("[", "]")
//!     .with_actions_delimiter(DelimiterSpec::literal(";"))
//!     .with_actions(["rotate", "blink"]);
//!
//! let profile = SyntaxProfile::new(config).expect("valid syntax");
//! assert!(profile.is_action("blink"));
//! assert!(!profile.is_action("fade"));
//! assert_eq!(profile.duration_marks().open(), "@");
//! ```

use indexmap::IndexSet;
use log::debug;
use regex::Regex;
use serde::Deserialize;

use crate::{
    error::{ConfigurationError, Diagnostic, ErrorCode},
    patterns::{DurationPattern, TagPattern},
};

/// Default duration marks: `@300ms`.
pub const DEFAULT_DURATION_MARKS: (&str, &str) = ("@", "");

/// Default tag marks: `(name)`.
pub const DEFAULT_TAG_MARKS: (&str, &str) = ("(", ")");

/// Default separator between actions on one line.
pub const DEFAULT_ACTIONS_DELIMITER: &str = ",";

/// Default separator between an action name and its parameters (a pattern).
pub const DEFAULT_PARAMETERS_PATTERN: &str = r"\s+";

/// Default comment prefix.
pub const DEFAULT_COMMENT_PREFIX: &str = "#";

/// Default set of recognized actions.
pub const DEFAULT_ACTIONS: [&str; 6] = [
    "rotate",
    "scale",
    "translateX",
    "translateY",
    "color",
    "fade",
];

/// An open/close mark pair delimiting an annotation.
///
/// Deserializes from a sequence of one or two strings; a missing close mark
/// is the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<String>")]
pub struct Marks {
    open: String,
    close: String,
}

impl Marks {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    pub fn open(&self) -> &str {
        &self.open
    }

    pub fn close(&self) -> &str {
        &self.close
    }
}

impl TryFrom<Vec<String>> for Marks {
    type Error = String;

    fn try_from(marks: Vec<String>) -> Result<Self, Self::Error> {
        let count = marks.len();
        let mut marks = marks.into_iter();
        match (marks.next(), marks.next()) {
            (Some(open), close) if count <= 2 => Ok(Self::new(open, close.unwrap_or_default())),
            _ => Err(format!("expected one or two marks, found {count}")),
        }
    }
}

/// A delimiter as written in a configuration: a literal string or a regular
/// expression.
///
/// Deserializes from a plain string (literal) or a table with a `pattern`
/// key:
///
/// ```toml
/// actions_delimiter = ";"
/// parameters_delimiter = { pattern = '\s+' }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum DelimiterSpec {
    Literal(String),
    Pattern { pattern: String },
}

impl DelimiterSpec {
    pub fn literal(text: impl Into<String>) -> Self {
        DelimiterSpec::Literal(text.into())
    }

    pub fn pattern(pattern: impl Into<String>) -> Self {
        DelimiterSpec::Pattern {
            pattern: pattern.into(),
        }
    }
}

/// A compiled delimiter.
#[derive(Debug, Clone)]
pub enum Delimiter {
    Literal(String),
    Pattern(Regex),
}

impl Delimiter {
    /// Compile a delimiter spec. `field` names the configuration field in
    /// diagnostics.
    fn compile(spec: &DelimiterSpec, field: &str) -> Result<Self, ConfigurationError> {
        match spec {
            DelimiterSpec::Literal(text) if text.is_empty() => Err(Diagnostic::new(
                ErrorCode::E004,
                format!("`{field}` is empty"),
            )
            .with_help("use a non-empty string, or a pattern table such as `{ pattern = '\\s+' }`")
            .into()),
            DelimiterSpec::Literal(text) => Ok(Delimiter::Literal(text.clone())),
            DelimiterSpec::Pattern { pattern } => {
                let regex = Regex::new(pattern).map_err(|err| {
                    Diagnostic::new(
                        ErrorCode::E003,
                        format!("`{field}` pattern `{pattern}` does not compile"),
                    )
                    .with_help(err.to_string())
                })?;
                if regex.is_match("") {
                    return Err(Diagnostic::new(
                        ErrorCode::E003,
                        format!("`{field}` pattern `{pattern}` matches the empty string"),
                    )
                    .with_help("a delimiter pattern must match at least one character")
                    .into());
                }
                Ok(Delimiter::Pattern(regex))
            }
        }
    }

    /// Split `text` on every occurrence of this delimiter.
    ///
    /// Always returns at least one part; empty parts are kept.
    pub fn split<'t>(&self, text: &'t str) -> Vec<&'t str> {
        match self {
            Delimiter::Literal(literal) => text.split(literal.as_str()).collect(),
            Delimiter::Pattern(regex) => regex.split(text).collect(),
        }
    }

    /// Byte offset of the first occurrence of this delimiter in `text`.
    pub fn find(&self, text: &str) -> Option<usize> {
        match self {
            Delimiter::Literal(literal) => text.find(literal.as_str()),
            Delimiter::Pattern(regex) => regex.find(text).map(|found| found.start()),
        }
    }
}

/// Partial syntax configuration.
///
/// Fields left as `None` take their default when the configuration is turned
/// into a [`SyntaxProfile`]. Unknown keys are rejected when deserializing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SyntaxConfig {
    duration_marks: Option<Marks>,
    tag_marks: Option<Marks>,
    actions_delimiter: Option<DelimiterSpec>,
    parameters_delimiter: Option<DelimiterSpec>,
    comment_prefix: Option<DelimiterSpec>,
    actions: Option<Vec<String>>,
}

impl SyntaxConfig {
    pub fn with_duration_marks(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
        self.duration_marks = Some(Marks::new(open, close));
        self
    }

    pub fn with_tag_marks(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
        self.tag_marks = Some(Marks::new(open, close));
        self
    }

    pub fn with_actions_delimiter(mut self, delimiter: DelimiterSpec) -> Self {
        self.actions_delimiter = Some(delimiter);
        self
    }

    pub fn with_parameters_delimiter(mut self, delimiter: DelimiterSpec) -> Self {
        self.parameters_delimiter = Some(delimiter);
        self
    }

    pub fn with_comment_prefix(mut self, prefix: DelimiterSpec) -> Self {
        self.comment_prefix = Some(prefix);
        self
    }

    pub fn with_actions<I, S>(mut self, actions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.actions = Some(actions.into_iter().map(Into::into).collect());
        self
    }
}

/// A validated, fully resolved grammar.
///
/// Built once with [`SyntaxProfile::new`] and then only read. The profile
/// holds no interior mutability, so it can be shared between threads and
/// reused for any number of parses.
#[derive(Debug, Clone)]
pub struct SyntaxProfile {
    duration_marks: Marks,
    tag_marks: Marks,
    actions_delimiter: Delimiter,
    parameters_delimiter: Delimiter,
    comment_prefix: Delimiter,
    actions: IndexSet<String>,
    tag_pattern: TagPattern,
    duration_pattern: DurationPattern,
}

impl SyntaxProfile {
    /// Resolve and validate a syntax configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] if:
    /// - an open mark is empty (E001)
    /// - the action set is empty or contains an empty name (E002)
    /// - a delimiter pattern does not compile or matches the empty string (E003)
    /// - a literal delimiter or the comment prefix is empty (E004)
    pub fn new(config: SyntaxConfig) -> Result<Self, ConfigurationError> {
        let duration_marks = resolve_marks(
            config.duration_marks,
            DEFAULT_DURATION_MARKS,
            "duration_marks",
        )?;
        let tag_marks = resolve_marks(config.tag_marks, DEFAULT_TAG_MARKS, "tag_marks")?;

        let actions_delimiter = Delimiter::compile(
            &config
                .actions_delimiter
                .unwrap_or_else(|| DelimiterSpec::literal(DEFAULT_ACTIONS_DELIMITER)),
            "actions_delimiter",
        )?;
        let parameters_delimiter = Delimiter::compile(
            &config
                .parameters_delimiter
                .unwrap_or_else(|| DelimiterSpec::pattern(DEFAULT_PARAMETERS_PATTERN)),
            "parameters_delimiter",
        )?;
        let comment_prefix = Delimiter::compile(
            &config
                .comment_prefix
                .unwrap_or_else(|| DelimiterSpec::literal(DEFAULT_COMMENT_PREFIX)),
            "comment_prefix",
        )?;

        let actions = resolve_actions(config.actions)?;

        let tag_pattern = TagPattern::new(&tag_marks)?;
        let duration_pattern = DurationPattern::new(&duration_marks);

        debug!(
            actions_count = actions.len(),
            duration_open = duration_marks.open(),
            tag_open = tag_marks.open();
            "Syntax profile compiled"
        );

        Ok(Self {
            duration_marks,
            tag_marks,
            actions_delimiter,
            parameters_delimiter,
            comment_prefix,
            actions,
            tag_pattern,
            duration_pattern,
        })
    }

    pub fn duration_marks(&self) -> &Marks {
        &self.duration_marks
    }

    pub fn tag_marks(&self) -> &Marks {
        &self.tag_marks
    }

    pub fn actions_delimiter(&self) -> &Delimiter {
        &self.actions_delimiter
    }

    pub fn parameters_delimiter(&self) -> &Delimiter {
        &self.parameters_delimiter
    }

    pub fn comment_prefix(&self) -> &Delimiter {
        &self.comment_prefix
    }

    /// Recognized action names, in the order they were configured.
    pub fn actions(&self) -> impl Iterator<Item = &str> {
        self.actions.iter().map(String::as_str)
    }

    /// Returns `true` if `name` is a recognized action.
    pub fn is_action(&self, name: &str) -> bool {
        self.actions.contains(name)
    }

    pub(crate) fn tag_pattern(&self) -> &TagPattern {
        &self.tag_pattern
    }

    pub(crate) fn duration_pattern(&self) -> &DurationPattern {
        &self.duration_pattern
    }
}

impl Default for SyntaxProfile {
    fn default() -> Self {
        Self::new(SyntaxConfig::default()).expect("default syntax is valid")
    }
}

fn resolve_marks(
    marks: Option<Marks>,
    (open, close): (&str, &str),
    field: &str,
) -> Result<Marks, ConfigurationError> {
    let marks = marks.unwrap_or_else(|| Marks::new(open, close));
    if marks.open().is_empty() {
        return Err(Diagnostic::new(ErrorCode::E001, format!("`{field}` open mark is empty"))
            .with_help(format!("use a non-empty open mark, such as `{open}`"))
            .into());
    }
    Ok(marks)
}

fn resolve_actions(actions: Option<Vec<String>>) -> Result<IndexSet<String>, ConfigurationError> {
    let actions: IndexSet<String> = match actions {
        Some(actions) => actions.into_iter().collect(),
        None => DEFAULT_ACTIONS.iter().map(|name| name.to_string()).collect(),
    };
    if actions.is_empty() {
        return Err(Diagnostic::new(ErrorCode::E002, "no actions configured")
            .with_help("list at least one action name in `actions`")
            .into());
    }
    if actions.iter().any(String::is_empty) {
        return Err(Diagnostic::new(ErrorCode::E002, "empty action name in `actions`").into());
    }
    Ok(actions)
}
