//! json-slice - zero-copy JSON object parser.
//!
//! Parses a byte buffer holding one JSON object into an immutable tree whose
//! strings borrow from the buffer, and offers typed, ASCII case-insensitive
//! lookups over it.
//!
//! - [`json`] - Value tree, parser, lifecycle and serializers
//! - [`error`] - Error kinds with byte offsets
//!
//! ```
//! use json_slice::{JsonState, ValueType, Lookup};
//!
//! let input = br#"{"a": 1, "b": [1, 2, 3]}"#;
//! let mut state = JsonState::new();
//! assert!(state.parse(input));
//!
//! let root = state.root().unwrap();
//! assert_eq!(root.get_number("A"), Some(1.0));
//! assert!(matches!(
//!     root.find_key_with_value_type("a", ValueType::String),
//!     Lookup::WrongType { found: ValueType::Number, .. }
//! ));
//!
//! state.free();
//! assert!(!state.is_valid());
//! ```

// Library code reports failures through `ParseError`, never by panicking.
// Tests are checked separately with `cargo test`.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod error;
pub mod json;

// Re-export commonly used types
pub use error::{Context, ErrorKind, JsonResult, ParseError};
pub use json::{
    dump, encode, parse, parse_with_limits, Array, JsonState, JsonStr, Limits, Lookup, Member,
    Object, Value, ValueType,
};
