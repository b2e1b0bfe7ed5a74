//! Byte-level scanner shared by the grammar rules.
//!
//! Owns the cursor into the input buffer. Whitespace skipping, literal
//! matching, and the string and number scans live here; the parser decides
//! what to scan next.

use super::types::JsonStr;
use crate::error::{Context, ErrorKind, JsonResult, ParseError};

/// Cursor over an input buffer.
pub struct Scanner<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    /// Create a scanner positioned at the start of `input`.
    pub fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }

    /// Get the current position in the input.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Unconsumed input.
    pub fn remaining(&self) -> &'a [u8] {
        self.input.get(self.pos..).unwrap_or_default()
    }

    /// Peek at the current byte without consuming it.
    pub fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// Consume and return the current byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek();
        if b.is_some() {
            self.pos += 1;
        }
        b
    }

    /// Skip space, tab, CR and LF, then return the next significant byte
    /// without consuming it. `None` at end of input.
    pub fn skip(&mut self) -> Option<u8> {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.pos += 1;
        }
        self.peek()
    }

    /// Consume `literal` if the remaining input starts with it.
    ///
    /// A literal ending exactly at the end of the buffer matches.
    pub fn match_literal(&mut self, literal: &[u8]) -> bool {
        if self.remaining().starts_with(literal) {
            self.pos += literal.len();
            true
        } else {
            false
        }
    }

    fn error(&self, kind: ErrorKind, context: Context, offset: usize) -> ParseError {
        ParseError::new(kind, context, offset)
    }

    /// Scan a quoted string and return the raw bytes between the quotes.
    ///
    /// Escapes are validated but not substituted. `\u` must be followed by
    /// four hex digits, which are skipped.
    pub fn scan_string(&mut self) -> JsonResult<JsonStr<'a>> {
        match self.peek() {
            Some(b'"') => self.pos += 1,
            Some(_) => {
                return Err(self.error(ErrorKind::UnexpectedToken, Context::String, self.pos))
            }
            None => return Err(self.error(ErrorKind::UnexpectedEnd, Context::String, self.pos)),
        }

        let start = self.pos;
        loop {
            match self.bump() {
                None => {
                    return Err(self.error(
                        ErrorKind::UnterminatedString,
                        Context::String,
                        self.pos,
                    ))
                }
                Some(b'"') => {
                    let raw = &self.input[start..self.pos - 1];
                    return Ok(JsonStr::new(raw));
                }
                Some(b'\\') => self.scan_escape()?,
                Some(_) => {}
            }
        }
    }

    /// Validate the escape following a backslash.
    fn scan_escape(&mut self) -> JsonResult<()> {
        let offset = self.pos;
        match self.bump() {
            None => Err(self.error(ErrorKind::UnterminatedString, Context::String, offset)),
            Some(b'"' | b'\\' | b'/' | b'b' | b'f' | b'r' | b't' | b'n') => Ok(()),
            Some(b'u') => {
                for _ in 0..4 {
                    let offset = self.pos;
                    match self.bump() {
                        None => {
                            return Err(self.error(
                                ErrorKind::UnterminatedString,
                                Context::String,
                                offset,
                            ))
                        }
                        Some(b) if b.is_ascii_hexdigit() => {}
                        Some(_) => {
                            return Err(self.error(
                                ErrorKind::InvalidEscape,
                                Context::String,
                                offset,
                            ))
                        }
                    }
                }
                Ok(())
            }
            Some(_) => Err(self.error(ErrorKind::InvalidEscape, Context::String, offset)),
        }
    }

    fn skip_digits(&mut self) -> usize {
        let start = self.pos;
        while let Some(b'0'..=b'9') = self.peek() {
            self.pos += 1;
        }
        self.pos - start
    }

    /// Scan a number the way a permissive `strtod` would.
    ///
    /// Accepts an optional sign, digits, an optional fraction and an optional
    /// exponent. The exponent is only consumed when at least one digit follows
    /// `e`/`E` and its sign, so `1e` scans as `1` and leaves `e` in place.
    pub fn scan_number(&mut self) -> JsonResult<f64> {
        let start = self.pos;

        if let Some(b'+' | b'-') = self.peek() {
            self.pos += 1;
        }

        let mut mantissa_digits = self.skip_digits();
        if self.peek() == Some(b'.') {
            self.pos += 1;
            mantissa_digits += self.skip_digits();
        }
        if mantissa_digits == 0 {
            return Err(self.error(ErrorKind::InvalidNumber, Context::Number, start));
        }

        if let Some(b'e' | b'E') = self.peek() {
            let mut lookahead = self.pos + 1;
            if let Some(b'+' | b'-') = self.input.get(lookahead) {
                lookahead += 1;
            }
            if let Some(b'0'..=b'9') = self.input.get(lookahead) {
                self.pos = lookahead;
                self.skip_digits();
            }
        }

        let text = std::str::from_utf8(&self.input[start..self.pos])
            .map_err(|_| self.error(ErrorKind::InvalidNumber, Context::Number, start))?;
        text.parse::<f64>()
            .map_err(|_| self.error(ErrorKind::InvalidNumber, Context::Number, start))
    }
}
