//! JSON parsing into a borrowed value tree.
//!
//! # Architecture
//!
//! - [`types`] - Value tree and case-insensitive typed lookup
//! - [`limits`] - Nesting cap and other parse policy
//! - [`scanner`] - Cursor, whitespace, literal, string and number scanning
//! - [`parser`] - Recursive descent over objects, arrays and values
//! - [`state`] - Parser-state record: root, validity, first error, teardown
//! - [`dump`] - Diagnostic rendering
//! - [`encode`] - Compact JSON output
//! - [`escape`] - On-demand decoding of raw string slices
//!
//! # Strings
//!
//! Keys and string values are raw slices of the input between the quotes.
//! Escapes are validated during parsing but not substituted, and nothing is
//! copied. The tree therefore borrows the input buffer for its whole life.
//! Call [`JsonStr::unescape`] when decoded text is needed.
//!
//! # Example
//!
//! ```
//! use json_slice::json::parse;
//!
//! let root = parse(br#"{"Name": "deck", "flds": [1, 2, 3]}"#).unwrap();
//!
//! // Lookups ignore ASCII case
//! assert_eq!(root.get_string("name").unwrap().as_bytes(), b"deck");
//! assert_eq!(root.get_array("FLDS").unwrap().len(), 3);
//! assert_eq!(root.get_number("name"), None);
//! ```

pub mod dump;
pub mod encode;
pub mod escape;
pub mod limits;
pub mod parser;
pub mod scanner;
pub mod state;
pub mod types;

// Re-export commonly used items
pub use dump::{dump, dump_value};
pub use encode::{encode, encode_value};
pub use limits::Limits;
pub use parser::{parse, parse_with_limits};
pub use state::JsonState;
pub use types::{Array, JsonStr, Lookup, Member, Object, Value, ValueType};
