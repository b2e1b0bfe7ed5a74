//! Recursive descent parser.
//!
//! One method per grammar rule. The scanner cursor and the nesting depth live
//! on the [`Parser`] and every rule takes `&mut self`, so a parse is strictly
//! single-threaded and each parse gets its own instance.
//!
//! Containers collect their children in owned vectors. When a rule fails, the
//! error is returned with `?` and the partially built children are dropped on
//! the way out, nested values included.

use super::limits::Limits;
use super::scanner::Scanner;
use super::types::{Array, Member, Object, Value};
use crate::error::{Context, ErrorKind, JsonResult, ParseError};

/// Recursive descent parser over one input buffer.
pub struct Parser<'a> {
    scanner: Scanner<'a>,
    limits: Limits,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given input.
    pub fn new(input: &'a [u8], limits: Limits) -> Self {
        Self {
            scanner: Scanner::new(input),
            limits,
            depth: 0,
        }
    }

    /// Parse one top-level object and require nothing but whitespace after it.
    pub fn parse(&mut self) -> JsonResult<Object<'a>> {
        match self.scanner.skip() {
            Some(b'{') => {}
            Some(_) => return Err(self.error(ErrorKind::UnexpectedToken, Context::Document)),
            None => return Err(self.error(ErrorKind::UnexpectedEnd, Context::Document)),
        }

        let root = self.parse_object()?;

        if self.scanner.skip().is_some() {
            return Err(self.error(ErrorKind::TrailingGarbage, Context::Document));
        }

        Ok(root)
    }

    fn error(&self, kind: ErrorKind, context: Context) -> ParseError {
        ParseError::new(kind, context, self.scanner.position())
    }

    /// Error for a missing or wrong byte at the cursor.
    fn unexpected(&self, found: Option<u8>, context: Context) -> ParseError {
        match found {
            Some(_) => self.error(ErrorKind::UnexpectedToken, context),
            None => self.error(ErrorKind::UnexpectedEnd, context),
        }
    }

    /// Skip whitespace and consume `expected`.
    fn expect(&mut self, expected: u8, context: Context) -> JsonResult<()> {
        match self.scanner.skip() {
            Some(b) if b == expected => {
                self.scanner.bump();
                Ok(())
            }
            found => Err(self.unexpected(found, context)),
        }
    }

    /// Enter a container, enforcing the nesting cap.
    fn enter(&mut self, context: Context) -> JsonResult<()> {
        self.depth += 1;
        if self.depth > self.limits.max_nesting_depth {
            return Err(self.error(ErrorKind::ExcessiveNesting, context));
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    /// Parse a single JSON value.
    fn parse_value(&mut self) -> JsonResult<Value<'a>> {
        match self.scanner.skip() {
            None => Err(self.error(ErrorKind::UnexpectedEnd, Context::Value)),
            Some(b'"') => Ok(Value::String(self.scanner.scan_string()?)),
            Some(b'{') => Ok(Value::Object(self.parse_object()?)),
            Some(b'[') => Ok(Value::Array(self.parse_array()?)),
            Some(b'0'..=b'9' | b'+' | b'-') => Ok(Value::Number(self.scanner.scan_number()?)),
            Some(_) => self.parse_literal(),
        }
    }

    /// Match `null`, `true` or `false` exactly.
    fn parse_literal(&mut self) -> JsonResult<Value<'a>> {
        if self.scanner.match_literal(b"null") {
            Ok(Value::Null)
        } else if self.scanner.match_literal(b"true") {
            Ok(Value::Bool(true))
        } else if self.scanner.match_literal(b"false") {
            Ok(Value::Bool(false))
        } else {
            Err(self.error(ErrorKind::UnexpectedToken, Context::Value))
        }
    }

    /// Parse a JSON object. The cursor is on `{`.
    fn parse_object(&mut self) -> JsonResult<Object<'a>> {
        self.enter(Context::Object)?;
        self.expect(b'{', Context::Object)?;

        let mut members = Vec::new();

        // Empty object
        if self.scanner.skip() == Some(b'}') {
            self.scanner.bump();
            self.leave();
            return Ok(Object::from_members(members));
        }

        loop {
            // Expect string key; a `}` here means a trailing comma
            match self.scanner.skip() {
                Some(b'"') => {}
                found => return Err(self.unexpected(found, Context::Object)),
            }
            let key = self.scanner.scan_string()?;

            self.expect(b':', Context::Object)?;

            let value = self.parse_value()?;
            members.push(Member::new(key, value));

            // Expect comma or closing brace
            match self.scanner.skip() {
                Some(b',') => {
                    self.scanner.bump();
                }
                Some(b'}') => {
                    self.scanner.bump();
                    break;
                }
                found => return Err(self.unexpected(found, Context::Object)),
            }
        }

        self.leave();
        Ok(Object::from_members(members))
    }

    /// Parse a JSON array. The cursor is on `[`.
    fn parse_array(&mut self) -> JsonResult<Array<'a>> {
        self.enter(Context::Array)?;
        self.expect(b'[', Context::Array)?;

        let mut elements = Vec::new();

        // Empty array
        if self.scanner.skip() == Some(b']') {
            self.scanner.bump();
            self.leave();
            return Ok(Array::from_elements(elements));
        }

        loop {
            let value = self.parse_value()?;
            elements.push(value);

            // Expect comma or closing bracket
            match self.scanner.skip() {
                Some(b',') => {
                    self.scanner.bump();
                    // Trailing comma is not allowed
                    if self.scanner.skip() == Some(b']') {
                        return Err(self.error(ErrorKind::UnexpectedToken, Context::Array));
                    }
                }
                Some(b']') => {
                    self.scanner.bump();
                    break;
                }
                found => return Err(self.unexpected(found, Context::Array)),
            }
        }

        self.leave();
        Ok(Array::from_elements(elements))
    }
}

/// Parse a top-level JSON object with default limits.
pub fn parse(input: &[u8]) -> JsonResult<Object<'_>> {
    parse_with_limits(input, Limits::standard())
}

/// Parse a top-level JSON object with custom limits.
pub fn parse_with_limits(input: &[u8], limits: Limits) -> JsonResult<Object<'_>> {
    let result = Parser::new(input, limits).parse();
    match &result {
        Ok(root) => tracing::debug!(bytes = input.len(), members = root.len(), "parsed document"),
        Err(err) => tracing::debug!(bytes = input.len(), error = %err, "parse failed"),
    }
    result
}
