//! Line preprocessing: from raw text to logical lines.
//!
//! The preprocessor splits the source into physical lines, strips comments,
//! drops blank lines, measures indentation and links every remaining line to
//! its parent. The result is a flat arena of [`LogicalLine`]s where the parent
//! is stored as an index into the arena, always pointing at an earlier line.
//!
//! ```text
//! rotate 45          level 0, parent None
//!     scale 2        level 1, parent Some(0)
//!         fade 1     level 2, parent Some(1)
//!     color red      level 1, parent Some(0)
//! ```

use log::debug;

use crate::{
    error::{Diagnostic, ErrorCode, ParseError, Result},
    syntax::{Delimiter, SyntaxProfile},
};

/// One non-blank, comment-stripped source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LogicalLine<'src> {
    /// 1-based physical line number, for diagnostics.
    pub number: usize,
    /// Position among the logical lines.
    pub index: usize,
    /// Trimmed content.
    pub content: &'src str,
    /// Indentation level, in units of the first indented line.
    pub level: usize,
    /// Index of the nearest earlier line with a smaller level.
    pub parent: Option<usize>,
}

/// The indentation established by the first indented line.
#[derive(Debug, Clone, Copy)]
struct IndentUnit {
    character: char,
    width: usize,
}

impl IndentUnit {
    fn character_name(&self) -> &'static str {
        match self.character {
            ' ' => "space",
            '\t' => "tab",
            _ => "whitespace character",
        }
    }

    fn describe(&self) -> String {
        match self.width {
            1 => format!("1 {}", self.character_name()),
            width => format!("{width} {}s", self.character_name()),
        }
    }
}

/// Turn source text into logical lines with parent links.
///
/// # Errors
///
/// Returns [`ParseError::Indentation`] if a line mixes whitespace characters
/// in its indentation (E101) or is not indented by a whole multiple of the
/// indentation unit (E102).
pub(crate) fn preprocess<'src>(
    source: &'src str,
    profile: &SyntaxProfile,
) -> Result<Vec<LogicalLine<'src>>> {
    let mut unit: Option<IndentUnit> = None;
    let mut lines: Vec<LogicalLine<'src>> = Vec::new();
    // Lines that can still be a parent, levels strictly increasing.
    let mut open: Vec<usize> = Vec::new();

    for (offset, raw) in physical_lines(source).enumerate() {
        let number = offset + 1;
        let text = strip_comment(raw, profile.comment_prefix());
        let content = text.trim();
        if content.is_empty() {
            continue;
        }

        let level = indent_level(text, number, &mut unit)?;
        while open.last().is_some_and(|&index| lines[index].level >= level) {
            open.pop();
        }
        let parent = open.last().copied();
        let index = lines.len();

        lines.push(LogicalLine {
            number,
            index,
            content,
            level,
            parent,
        });
        open.push(index);
    }

    debug!(
        lines_count = lines.len(),
        indent_unit = unit.map(|unit| unit.describe()).unwrap_or_default();
        "Source preprocessed"
    );

    Ok(lines)
}

/// Split on `\n`, `\r\n` and lone `\r`.
fn physical_lines(source: &str) -> impl Iterator<Item = &str> {
    source.lines().flat_map(|line| line.split('\r'))
}

/// 1-based number of the physical line holding the byte at `offset`, with
/// the same terminators as [`physical_lines`].
pub(crate) fn line_number_at(bytes: &[u8], offset: usize) -> usize {
    let offset = offset.min(bytes.len());
    let terminators = bytes[..offset]
        .iter()
        .enumerate()
        .filter(|&(position, &byte)| {
            byte == b'\n' || (byte == b'\r' && bytes.get(position + 1) != Some(&b'\n'))
        })
        .count();
    terminators + 1
}

fn strip_comment<'a>(line: &'a str, prefix: &Delimiter) -> &'a str {
    match prefix.find(line) {
        Some(start) => &line[..start],
        None => line,
    }
}

/// Compute the indentation level of `text`, establishing the indentation unit
/// on the first indented line.
fn indent_level(text: &str, number: usize, unit: &mut Option<IndentUnit>) -> Result<usize> {
    let indent = &text[..text.len() - text.trim_start().len()];
    let Some(first) = indent.chars().next() else {
        return Ok(0);
    };
    let width = indent.chars().count();
    let unit = *unit.get_or_insert(IndentUnit {
        character: first,
        width,
    });

    if indent.chars().any(|c| c != unit.character) {
        return Err(ParseError::Indentation(
            Diagnostic::new(ErrorCode::E101, ErrorCode::E101.description())
                .with_line(number)
                .with_help(format!(
                    "indent with {}s only, like the first indented line",
                    unit.character_name()
                )),
        ));
    }

    if width % unit.width != 0 {
        return Err(ParseError::Indentation(
            Diagnostic::new(ErrorCode::E102, ErrorCode::E102.description())
                .with_line(number)
                .with_help(format!(
                    "indent in multiples of {}, found {width}",
                    unit.describe()
                )),
        ));
    }

    Ok(width / unit.width)
}
