//! Error and diagnostic system for the animation pack parser.
//!
//! Every failure is fatal and is described by a single [`Diagnostic`]: an
//! [`ErrorCode`], a message, the 1-based source line when one applies, and
//! optional help text. Diagnostics are wrapped in one of two error types
//! depending on when they occur:
//!
//! - [`ConfigurationError`] while a syntax profile is being built, before any
//!   text is parsed.
//! - [`ParseError`] while a text is being parsed.
//!
//! # Example
//!
//! ```
//! # use apack_parser::error::{Diagnostic, ErrorCode, ParseError};
//! let err = ParseError::Line(
//!     Diagnostic::new(ErrorCode::E203, "invalid action `spin`")
//!         .with_line(3)
//!         .with_help("expected one of: rotate, scale"),
//! );
//!
//! assert_eq!(err.line(), Some(3));
//! assert_eq!(err.to_string(), "error[E203]: invalid action `spin` (line 3)");
//! ```

mod configuration_error;
mod diagnostic;
mod error_code;
mod parse_error;

pub(crate) use parse_error::Result;

pub use configuration_error::ConfigurationError;
pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use parse_error::ParseError;
