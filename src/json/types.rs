//! JSON value tree and lookup accessors.
//!
//! A parsed document is an owned tree of [`Value`]s whose string keys and
//! values borrow their bytes from the input buffer. The tree is read-only:
//! nothing here hands out a mutable reference, and dropping the root releases
//! every node at once.
//!
//! Object lookups are linear, ASCII case-insensitive and exact-length. When a
//! key appears more than once the first occurrence wins.

use std::fmt;
use std::slice;

/// Type tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// `null`
    Null,
    /// `true`
    True,
    /// `false`
    False,
    /// `{ ... }`
    Object,
    /// `[ ... ]`
    Array,
    /// Any numeric literal
    Number,
    /// `"..."`
    String,
}

impl ValueType {
    /// Lowercase name for messages.
    pub const fn name(&self) -> &'static str {
        match self {
            ValueType::Null => "null",
            ValueType::True => "true",
            ValueType::False => "false",
            ValueType::Object => "object",
            ValueType::Array => "array",
            ValueType::Number => "number",
            ValueType::String => "string",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A string slice borrowed from the input buffer.
///
/// Holds the raw bytes between the quotes. Escape sequences are kept as they
/// appear in the source; use [`JsonStr::unescape`] for decoded text.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct JsonStr<'a> {
    raw: &'a [u8],
}

impl<'a> JsonStr<'a> {
    pub(crate) const fn new(raw: &'a [u8]) -> Self {
        Self { raw }
    }

    /// Raw bytes between the quotes.
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.raw
    }

    /// Raw length in bytes.
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns true for `""`.
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// The raw bytes as `&str`, if they are valid UTF-8.
    pub fn to_str(&self) -> Result<&'a str, std::str::Utf8Error> {
        std::str::from_utf8(self.raw)
    }

    /// The raw bytes as text, replacing invalid UTF-8.
    pub fn to_string_lossy(&self) -> std::borrow::Cow<'a, str> {
        String::from_utf8_lossy(self.raw)
    }

    /// Compare against `text`. Lengths must match exactly; case folding is
    /// ASCII only.
    pub fn equals(&self, text: &str, case_insensitive: bool) -> bool {
        let text = text.as_bytes();
        if text.len() != self.raw.len() {
            return false;
        }
        if case_insensitive {
            self.raw.eq_ignore_ascii_case(text)
        } else {
            self.raw == text
        }
    }
}

impl fmt::Debug for JsonStr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.to_string_lossy(), f)
    }
}

impl fmt::Display for JsonStr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

/// A JSON value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// JSON null literal
    Null,
    /// JSON boolean (true/false)
    Bool(bool),
    /// JSON number; integral and fractional input are not distinguished
    Number(f64),
    /// JSON string as a raw slice of the input
    String(JsonStr<'a>),
    /// JSON array
    Array(Array<'a>),
    /// JSON object
    Object(Object<'a>),
}

impl<'a> Value<'a> {
    /// Type tag of this value.
    pub const fn value_type(&self) -> ValueType {
        match self {
            Value::Null => ValueType::Null,
            Value::Bool(true) => ValueType::True,
            Value::Bool(false) => ValueType::False,
            Value::Number(_) => ValueType::Number,
            Value::String(_) => ValueType::String,
            Value::Array(_) => ValueType::Array,
            Value::Object(_) => ValueType::Object,
        }
    }

    /// Returns true if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the boolean value if this is a Bool, None otherwise.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the number if this is a Number, None otherwise.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the string slice if this is a String, None otherwise.
    pub fn as_str(&self) -> Option<JsonStr<'a>> {
        match self {
            Value::String(s) => Some(*s),
            _ => None,
        }
    }

    /// Returns a reference to the array if this is an Array, None otherwise.
    pub fn as_array(&self) -> Option<&Array<'a>> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Returns a reference to the object if this is an Object, None otherwise.
    pub fn as_object(&self) -> Option<&Object<'a>> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }
}

/// A key/value pair inside an object.
#[derive(Debug, Clone, PartialEq)]
pub struct Member<'a> {
    key: JsonStr<'a>,
    value: Value<'a>,
}

impl<'a> Member<'a> {
    pub(crate) fn new(key: JsonStr<'a>, value: Value<'a>) -> Self {
        Self { key, value }
    }

    /// Raw key.
    pub fn key(&self) -> JsonStr<'a> {
        self.key
    }

    /// Member value.
    pub fn value(&self) -> &Value<'a> {
        &self.value
    }
}

/// Outcome of a typed key lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup<'t, 'a> {
    /// Key present with the requested type
    Found(&'t Member<'a>),
    /// Key present, but its value has another type
    WrongType {
        /// The first member carrying the key
        member: &'t Member<'a>,
        /// Type it actually has
        found: ValueType,
    },
    /// No member with that key
    Missing,
}

impl<'t, 'a> Lookup<'t, 'a> {
    /// The member, only when it was found with the requested type.
    pub fn found(self) -> Option<&'t Member<'a>> {
        match self {
            Lookup::Found(member) => Some(member),
            _ => None,
        }
    }

    /// Returns true if no member has the key.
    pub fn is_missing(&self) -> bool {
        matches!(self, Lookup::Missing)
    }
}

/// An object: members in insertion order, duplicates allowed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Object<'a> {
    members: Vec<Member<'a>>,
}

impl<'a> Object<'a> {
    pub(crate) fn from_members(members: Vec<Member<'a>>) -> Self {
        Self { members }
    }

    /// Number of members, duplicates included.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true for `{}`.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members in insertion order.
    pub fn members(&self) -> &[Member<'a>] {
        &self.members
    }

    /// Iterate members in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, Member<'a>> {
        self.members.iter()
    }

    /// First member whose key equals `name`, ignoring ASCII case.
    pub fn find_key(&self, name: &str) -> Option<&Member<'a>> {
        self.members.iter().find(|m| m.key.equals(name, true))
    }

    /// Look up `name` and check that its value has type `value_type`.
    ///
    /// Only the first member with a matching key is considered; a later
    /// duplicate with the right type does not turn `WrongType` into `Found`.
    pub fn find_key_with_value_type(&self, name: &str, value_type: ValueType) -> Lookup<'_, 'a> {
        match self.find_key(name) {
            None => Lookup::Missing,
            Some(member) => {
                let found = member.value.value_type();
                if found == value_type {
                    Lookup::Found(member)
                } else {
                    Lookup::WrongType { member, found }
                }
            }
        }
    }

    /// String value of `name`; `None` if missing or not a string.
    pub fn get_string(&self, name: &str) -> Option<JsonStr<'a>> {
        self.find_key_with_value_type(name, ValueType::String)
            .found()
            .and_then(|m| m.value.as_str())
    }

    /// Array value of `name`; `None` if missing or not an array.
    pub fn get_array(&self, name: &str) -> Option<&Array<'a>> {
        self.find_key_with_value_type(name, ValueType::Array)
            .found()
            .and_then(|m| m.value.as_array())
    }

    /// Numeric value of `name`; `None` if missing or not a number.
    pub fn get_number(&self, name: &str) -> Option<f64> {
        self.find_key_with_value_type(name, ValueType::Number)
            .found()
            .and_then(|m| m.value.as_number())
    }

    /// Object value of `name`; `None` if missing or not an object.
    pub fn get_object(&self, name: &str) -> Option<&Object<'a>> {
        self.find_key_with_value_type(name, ValueType::Object)
            .found()
            .and_then(|m| m.value.as_object())
    }

    /// Boolean value of `name`; `None` if missing or not `true`/`false`.
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.find_key(name).and_then(|m| m.value.as_bool())
    }
}

impl<'t, 'a> IntoIterator for &'t Object<'a> {
    type Item = &'t Member<'a>;
    type IntoIter = slice::Iter<'t, Member<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An array: elements in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Array<'a> {
    elements: Vec<Value<'a>>,
}

impl<'a> Array<'a> {
    pub(crate) fn from_elements(elements: Vec<Value<'a>>) -> Self {
        Self { elements }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true for `[]`.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Element at `index`.
    pub fn get(&self, index: usize) -> Option<&Value<'a>> {
        self.elements.get(index)
    }

    /// Elements in source order.
    pub fn as_slice(&self) -> &[Value<'a>] {
        &self.elements
    }

    /// Iterate elements in source order.
    pub fn iter(&self) -> slice::Iter<'_, Value<'a>> {
        self.elements.iter()
    }
}

impl<'t, 'a> IntoIterator for &'t Array<'a> {
    type Item = &'t Value<'a>;
    type IntoIter = slice::Iter<'t, Value<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
