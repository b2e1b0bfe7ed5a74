//! Parser-state record and tree lifecycle.
//!
//! [`JsonState`] owns the root of the most recent parse together with its
//! validity flag and the first error. The string slices in the tree borrow the
//! input, so the buffer must outlive the state; the `'a` lifetime enforces it.
//!
//! Teardown is a single drop of the root. Every member and element is owned by
//! exactly one parent, so each node is released once, bottom-up.

use super::dump::dump;
use super::limits::Limits;
use super::parser::Parser;
use super::types::Object;
use crate::error::ParseError;

/// Result record for parsing one document.
#[derive(Debug, Default)]
pub struct JsonState<'a> {
    limits: Limits,
    root: Option<Object<'a>>,
    valid: bool,
    error: Option<ParseError>,
}

impl<'a> JsonState<'a> {
    /// Empty state with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty state with custom limits.
    pub fn with_limits(limits: Limits) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    /// Parse one top-level object from `input`.
    ///
    /// Any tree held from an earlier parse is released first. Returns whether
    /// the parse succeeded; on failure [`JsonState::error`] holds the first
    /// error and no partial tree is kept.
    pub fn parse(&mut self, input: &'a [u8]) -> bool {
        self.free();

        match Parser::new(input, self.limits).parse() {
            Ok(root) => {
                tracing::debug!(bytes = input.len(), members = root.len(), "parsed document");
                self.root = Some(root);
                self.valid = true;
            }
            Err(err) => {
                tracing::debug!(bytes = input.len(), error = %err, "parse failed");
                self.error = Some(err);
            }
        }
        self.valid
    }

    /// Whether the state holds a successfully parsed tree.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// First error of the last parse, if it failed.
    pub fn error(&self) -> Option<&ParseError> {
        self.error.as_ref()
    }

    /// Root object of the last successful parse.
    pub fn root(&self) -> Option<&Object<'a>> {
        self.root.as_ref()
    }

    /// Limits used by [`JsonState::parse`].
    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Take ownership of the tree, leaving the state invalid.
    pub fn take_root(&mut self) -> Option<Object<'a>> {
        self.valid = false;
        self.root.take()
    }

    /// Release the whole tree and mark the state invalid.
    ///
    /// Calling it again is a no-op.
    pub fn free(&mut self) {
        if let Some(root) = self.root.take() {
            tracing::trace!(members = root.len(), "releasing document");
            drop(root);
        }
        self.valid = false;
        self.error = None;
    }

    /// Debug rendering of the root, or `None` when nothing is held.
    pub fn dump(&self) -> Option<String> {
        self.root.as_ref().map(dump)
    }
}
