//! Error codes for the animation pack diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E0xx` - Syntax configuration errors
//! - `E1xx` - Input and indentation errors
//! - `E2xx` - Line errors (tags, durations, actions)

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Configuration Errors (E0xx)
    // =========================================================================
    /// Empty open mark.
    ///
    /// Duration and tag marks need a non-empty open mark to be found in a line.
    E001,

    /// Invalid action set.
    ///
    /// The set of recognized actions is empty or contains an empty name.
    E002,

    /// Invalid delimiter pattern.
    ///
    /// A delimiter pattern does not compile, or matches the empty string.
    E003,

    /// Empty delimiter.
    ///
    /// A literal delimiter or comment prefix is the empty string.
    E004,

    /// Malformed configuration document.
    ///
    /// The configuration could not be read into a syntax configuration, for
    /// example because it is not a table or a field has the wrong type.
    E005,

    // =========================================================================
    // Input Errors (E1xx)
    // =========================================================================
    /// Input is not text.
    ///
    /// The bytes given to the parser are not valid UTF-8.
    E100,

    /// Mixed indentation characters.
    ///
    /// A line is indented with a whitespace character other than the one used
    /// by the first indented line.
    E101,

    /// Inconsistent indentation.
    ///
    /// A line's indentation is not a whole multiple of the indentation width
    /// established by the first indented line.
    E102,

    // =========================================================================
    // Line Errors (E2xx)
    // =========================================================================
    /// Invalid tag.
    ///
    /// Text following a tag open mark is not a well-formed tag.
    E200,

    /// Invalid duration.
    ///
    /// Text following a duration open mark is not a number with an optional unit.
    E201,

    /// Invalid duration time unit.
    ///
    /// The duration unit is not one of the recognized aliases.
    E202,

    /// Invalid action.
    ///
    /// The action name is not in the configured action set.
    E203,

    /// Missing action parameters.
    ///
    /// An action was written without any parameters.
    E204,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            // Configuration errors
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E003 => "E003",
            ErrorCode::E004 => "E004",
            ErrorCode::E005 => "E005",
            // Input errors
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            // Line errors
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            ErrorCode::E202 => "E202",
            ErrorCode::E203 => "E203",
            ErrorCode::E204 => "E204",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            // Configuration errors
            ErrorCode::E001 => "empty open mark",
            ErrorCode::E002 => "invalid action set",
            ErrorCode::E003 => "invalid delimiter pattern",
            ErrorCode::E004 => "empty delimiter",
            ErrorCode::E005 => "malformed configuration",
            // Input errors
            ErrorCode::E100 => "input is not text",
            ErrorCode::E101 => "mixed indentation characters",
            ErrorCode::E102 => "inconsistent indentation",
            // Line errors
            ErrorCode::E200 => "invalid tag",
            ErrorCode::E201 => "invalid duration",
            ErrorCode::E202 => "invalid duration time unit",
            ErrorCode::E203 => "invalid action",
            ErrorCode::E204 => "missing params",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E001.to_string(), "E001");
        assert_eq!(ErrorCode::E101.to_string(), "E101");
        assert_eq!(ErrorCode::E204.to_string(), "E204");
    }

    #[test]
    fn test_error_code_as_str() {
        assert_eq!(ErrorCode::E005.as_str(), "E005");
        assert_eq!(ErrorCode::E200.as_str(), "E200");
    }

    #[test]
    fn test_error_code_description() {
        assert_eq!(ErrorCode::E101.description(), "mixed indentation characters");
        assert_eq!(ErrorCode::E202.description(), "invalid duration time unit");
        assert_eq!(ErrorCode::E204.description(), "missing params");
    }
}
