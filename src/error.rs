//! Error handling for the JSON parser.
//!
//! Every failure is a [`ParseError`]: a closed [`ErrorKind`], the byte offset
//! where it was detected, and the grammar rule ([`Context`]) that detected it.
//! The innermost frame builds the error and enclosing frames only propagate it,
//! so the first recorded failure is the one the caller sees.

use std::fmt;

use thiserror::Error;

/// Closed set of parse failure kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ErrorKind {
    /// Input ended where more tokens were required (code 1)
    #[error("unexpected end of input")]
    UnexpectedEnd,

    /// A byte that cannot start or continue the current rule (code 2)
    #[error("unexpected token")]
    UnexpectedToken,

    /// Backslash followed by an unknown escape or a malformed `\u` (code 3)
    #[error("invalid escape sequence")]
    InvalidEscape,

    /// Numeric scan found no mantissa digits or an unparseable value (code 4)
    #[error("invalid number")]
    InvalidNumber,

    /// End of input before the closing quote (code 5)
    #[error("unterminated string")]
    UnterminatedString,

    /// Non-whitespace bytes after the root object (code 6)
    #[error("trailing characters after document")]
    TrailingGarbage,

    /// Nesting deeper than `Limits::max_nesting_depth` (code 7)
    #[error("excessive nesting")]
    ExcessiveNesting,
}

impl ErrorKind {
    /// Get the numeric error code.
    pub const fn code(&self) -> u32 {
        match self {
            ErrorKind::UnexpectedEnd => 1,
            ErrorKind::UnexpectedToken => 2,
            ErrorKind::InvalidEscape => 3,
            ErrorKind::InvalidNumber => 4,
            ErrorKind::UnterminatedString => 5,
            ErrorKind::TrailingGarbage => 6,
            ErrorKind::ExcessiveNesting => 7,
        }
    }

    /// Get the error name as a string.
    pub const fn name(&self) -> &'static str {
        match self {
            ErrorKind::UnexpectedEnd => "UnexpectedEnd",
            ErrorKind::UnexpectedToken => "UnexpectedToken",
            ErrorKind::InvalidEscape => "InvalidEscape",
            ErrorKind::InvalidNumber => "InvalidNumber",
            ErrorKind::UnterminatedString => "UnterminatedString",
            ErrorKind::TrailingGarbage => "TrailingGarbage",
            ErrorKind::ExcessiveNesting => "ExcessiveNesting",
        }
    }
}

/// Grammar rule that was active when a failure was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Context {
    /// Top level: the root object and what follows it
    Document,
    /// Value dispatch, including the `null`/`true`/`false` literals
    Value,
    /// Object members, `:` and `,` separators
    Object,
    /// Array elements and `,` separators
    Array,
    /// String body and escapes
    String,
    /// Numeric scan
    Number,
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Context::Document => "document",
            Context::Value => "value",
            Context::Object => "object",
            Context::Array => "array",
            Context::String => "string",
            Context::Number => "number",
        };
        f.write_str(name)
    }
}

/// A parse failure with its location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("{kind} in {context} at byte {offset}")]
pub struct ParseError {
    /// What went wrong
    pub kind: ErrorKind,
    /// Byte offset into the input where it was detected
    pub offset: usize,
    /// Grammar rule that detected it
    pub context: Context,
}

impl ParseError {
    /// Create an error of `kind` detected by `context` at `offset`.
    pub const fn new(kind: ErrorKind, context: Context, offset: usize) -> Self {
        Self {
            kind,
            offset,
            context,
        }
    }

    /// Numeric code of the error kind.
    pub const fn code(&self) -> u32 {
        self.kind.code()
    }
}

/// Result type for parse operations.
pub type JsonResult<T> = Result<T, ParseError>;
