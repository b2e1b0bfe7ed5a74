//! Parse limits.
//!
//! Recursion in the parser follows input nesting, so the depth is capped to
//! keep hostile inputs from exhausting the call stack. Exceeding the cap fails
//! with `ErrorKind::ExcessiveNesting`.

use serde::{Deserialize, Serialize};

/// Default maximum nesting depth for objects and arrays.
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 512;

/// Limits applied while parsing.
///
/// Deserializable so that callers can load them from a config file; missing
/// fields fall back to [`Limits::standard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Limits {
    /// Maximum nesting depth for objects and arrays, root object included
    pub max_nesting_depth: usize,
}

impl Limits {
    /// Default limits.
    pub const fn standard() -> Self {
        Self {
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }

    /// Tight limits for small, flat documents from untrusted sources.
    pub const fn strict() -> Self {
        Self {
            max_nesting_depth: 32,
        }
    }

    /// Replace the nesting cap.
    pub const fn with_max_nesting_depth(mut self, depth: usize) -> Self {
        self.max_nesting_depth = depth;
        self
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::standard()
    }
}
