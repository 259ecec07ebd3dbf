//! Parsing of a single logical line.
//!
//! A line is either a tag on its own, or one or more actions optionally
//! followed by a duration and a tag:
//!
//! ```text
//! (checkpoint)
//! rotate 45, scale 2 @300ms (spin)
//! rotate 45 @300ms(spin)
//! ```
//!
//! The duration and tag are attached to the last action token and may be
//! written without a separating space, so they are detached from it before
//! the actions themselves are parsed. See [`Suffix`].

use apack_core::{duration::DurationUnit, tree::Action};

use crate::{
    error::{Diagnostic, ErrorCode, ParseError, Result},
    syntax::SyntaxProfile,
};

/// The parsed content of one line, before it is placed in the tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct ParsedLine {
    pub tag: Option<String>,
    /// Milliseconds.
    pub duration: Option<f64>,
    pub actions: Vec<Action>,
}

/// The annotation detached from the end of the last action token.
///
/// Candidates still carry their open mark and are validated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Suffix {
    None,
    Duration(String),
    Tag(String),
    DurationAndTag { duration: String, tag: String },
}

impl Suffix {
    /// Detach a trailing duration and/or tag from `token`.
    ///
    /// The duration mark is looked for first. Everything after it belongs to
    /// the duration, unless that remainder itself contains a tag open mark,
    /// in which case it is split once more into duration and tag. Only when
    /// there is no duration is the token searched for a tag directly.
    fn detach<'t>(token: &'t str, duration_open: &str, tag_open: &str) -> (&'t str, Suffix) {
        if let Some((head, rest)) = token.split_once(duration_open) {
            let candidate = format!("{duration_open}{rest}");
            let split = candidate
                .split_once(tag_open)
                .map(|(duration, after)| (duration.to_string(), tag_candidate(after, tag_open)));
            let suffix = match split {
                Some((duration, tag)) => Suffix::DurationAndTag { duration, tag },
                None => Suffix::Duration(candidate),
            };
            return (head, suffix);
        }

        match token.split_once(tag_open) {
            Some((head, after)) => (head, Suffix::Tag(tag_candidate(after, tag_open))),
            None => (token, Suffix::None),
        }
    }

    /// Split into `(duration, tag)` candidates.
    fn into_candidates(self) -> (Option<String>, Option<String>) {
        match self {
            Suffix::None => (None, None),
            Suffix::Duration(duration) => (Some(duration), None),
            Suffix::Tag(tag) => (None, Some(tag)),
            Suffix::DurationAndTag { duration, tag } => (Some(duration), Some(tag)),
        }
    }
}

/// Text up to the next open mark, with the open mark put back in front.
fn tag_candidate(after_open: &str, tag_open: &str) -> String {
    let inner = after_open.split(tag_open).next().unwrap_or(after_open);
    format!("{tag_open}{inner}")
}

/// Parse the trimmed `content` of the line numbered `number`.
///
/// # Errors
///
/// Returns [`ParseError::Line`] for an invalid tag (E200), an invalid
/// duration (E201) or duration unit (E202), an unknown action (E203), or an
/// action without parameters (E204).
pub(crate) fn parse_line(content: &str, number: usize, profile: &SyntaxProfile) -> Result<ParsedLine> {
    if let Some(tag) = profile.tag_pattern().content(content) {
        return Ok(ParsedLine {
            tag: Some(tag.to_string()),
            ..ParsedLine::default()
        });
    }

    let mut tokens = profile.actions_delimiter().split(content);
    let last = tokens.pop().unwrap_or_default();
    let (last, suffix) = Suffix::detach(
        last,
        profile.duration_marks().open(),
        profile.tag_marks().open(),
    );
    tokens.push(last);

    let (duration, tag) = suffix.into_candidates();
    let tag = tag
        .map(|candidate| parse_tag(&candidate, number, profile))
        .transpose()?;
    let duration = duration
        .map(|candidate| parse_duration(&candidate, number, profile))
        .transpose()?;
    let actions = tokens
        .into_iter()
        .map(|token| parse_action(token, number, profile))
        .collect::<Result<Vec<_>>>()?;

    Ok(ParsedLine {
        tag,
        duration,
        actions,
    })
}

fn line_error(code: ErrorCode, message: String, number: usize) -> Diagnostic {
    Diagnostic::new(code, message).with_line(number)
}

fn parse_tag(candidate: &str, number: usize, profile: &SyntaxProfile) -> Result<String> {
    let candidate = candidate.trim();
    profile
        .tag_pattern()
        .content(candidate)
        .map(str::to_string)
        .ok_or_else(|| {
            let marks = profile.tag_marks();
            ParseError::Line(
                line_error(
                    ErrorCode::E200,
                    format!("{} `{candidate}`", ErrorCode::E200.description()),
                    number,
                )
                .with_help(format!(
                    "write a tag as `{}name{}` at the end of the line",
                    marks.open(),
                    marks.close()
                )),
            )
        })
}

/// Resolve a duration candidate to milliseconds.
fn parse_duration(candidate: &str, number: usize, profile: &SyntaxProfile) -> Result<f64> {
    let candidate = candidate.trim();
    let invalid = || {
        let marks = profile.duration_marks();
        ParseError::Line(
            line_error(
                ErrorCode::E201,
                format!("{} `{candidate}`", ErrorCode::E201.description()),
                number,
            )
            .with_help(format!(
                "write a duration as a number with an optional unit, such as `{}300ms{}`",
                marks.open(),
                marks.close()
            )),
        )
    };

    let (value, unit) = profile.duration_pattern().split(candidate).ok_or_else(invalid)?;
    let unit = DurationUnit::from_alias(unit).ok_or_else(|| {
        let known: Vec<String> = DurationUnit::ALL.iter().map(ToString::to_string).collect();
        ParseError::Line(
            line_error(
                ErrorCode::E202,
                format!("{} `{unit}`", ErrorCode::E202.description()),
                number,
            )
            .with_help(format!("known units: {}", known.join(", "))),
        )
    })?;
    let value: f64 = value.parse().map_err(|_| invalid())?;

    Ok(unit.to_millis(value))
}

fn parse_action(token: &str, number: usize, profile: &SyntaxProfile) -> Result<Action> {
    let mut parts = profile.parameters_delimiter().split(token.trim()).into_iter();
    let name = parts.next().unwrap_or_default();
    let params: Vec<&str> = parts.collect();

    if !profile.is_action(name) {
        let message = if name.is_empty() {
            ErrorCode::E203.description().to_string()
        } else {
            format!("{} `{name}`", ErrorCode::E203.description())
        };
        let known: Vec<&str> = profile.actions().collect();
        return Err(ParseError::Line(
            line_error(ErrorCode::E203, message, number)
                .with_help(format!("expected one of: {}", known.join(", "))),
        ));
    }

    if params.is_empty() {
        return Err(ParseError::Line(
            line_error(
                ErrorCode::E204,
                format!("action `{name}` {}", ErrorCode::E204.description()),
                number,
            )
            .with_help(format!("write at least one parameter after `{name}`")),
        ));
    }

    Ok(Action::new(name, params))
}
