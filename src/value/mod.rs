//! The Value enum, a loosely typed way of representing any valid JSON value.

mod access;
mod from;
mod index;

use crate::de::{self, ParseOptions};
use crate::Result;
use std::fmt;
use std::io;
use std::str::FromStr;

pub use crate::number::Number;
pub use index::ValueIndex;

/// The map type used for objects.
pub type Map<K, V> = indexmap::IndexMap<K, V>;

/// The value every failed navigation resolves to.
pub(crate) static NULL: Value = Value::Null;

/// Represents any valid JSON value.
///
/// A `Value` is created once from input and is never re-tagged afterwards. Navigating into
/// arrays and objects never fails: missing keys, out-of-range indices and mismatched variants
/// all resolve to `Value::Null`.
///
/// ```
/// use dynjson::Value;
/// # use std::error::Error;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let value = Value::from_text(r#"{"users": [{"name": "alice", "age": 42}]}"#)?;
///
/// assert_eq!(value["users"][0]["name"].string(), Some("alice"));
/// assert_eq!(value["users"][0]["age"].int_value(), 42);
/// assert!(value["users"][1]["name"].is_null());
/// #     Ok(())
/// # }
/// ```
#[derive(Debug, PartialEq, Clone, Default)]
pub enum Value {
    /// Represents a null value.
    #[default]
    Null,
    /// Represents a boolean.
    Bool(bool),
    /// Represents a number, either integer or float.
    Number(Number),
    /// Represents a string.
    String(String),
    /// Represents an array.
    Array(Vec<Value>),
    /// Represents an object.
    Object(Map<String, Value>),
}

/// The variant of a [`Value`].
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Kind {
    /// `Value::Null`.
    Null,
    /// `Value::Bool`.
    Bool,
    /// `Value::Number`.
    Number,
    /// `Value::String`.
    String,
    /// `Value::Array`.
    Array,
    /// `Value::Object`.
    Object,
}

impl Kind {
    /// Returns the lowercase name of the variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    /// Returns `Value::Null`.
    pub const fn null() -> Value {
        Value::Null
    }

    /// Parses JSON text into a `Value`. Top-level scalars are accepted.
    ///
    /// Returns an error if `s` is not a valid JSON document.
    ///
    /// ```
    /// use dynjson::{Error, Value};
    ///
    /// assert_eq!(Value::from_text("[1, 2]").unwrap()[1].int(), Some(2));
    /// assert!(matches!(Value::from_text("{"), Err(Error::MalformedJson(_))));
    /// ```
    pub fn from_text(s: &str) -> Result<Value> {
        Value::from_bytes(s.as_bytes())
    }

    /// Transcodes UTF-16 text to UTF-8 and parses it into a `Value`.
    ///
    /// Returns `Error::InvalidEncoding` if `units` is not valid UTF-16.
    pub fn from_utf16(units: &[u16]) -> Result<Value> {
        let text = String::from_utf16(units)?;
        Value::from_text(&text)
    }

    /// Parses a JSON document from raw bytes using the default `ParseOptions`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Value> {
        Value::from_bytes_with(bytes, &ParseOptions::default())
    }

    /// Parses a JSON document from raw bytes.
    ///
    /// Returns `Error::MalformedJson` if the parser rejects the input. No partial result is
    /// produced.
    pub fn from_bytes_with(bytes: &[u8], opts: &ParseOptions) -> Result<Value> {
        de::from_slice(bytes, opts)
    }

    /// Reads the whole reader and parses its contents as a JSON document.
    pub fn from_reader<R>(reader: R, opts: &ParseOptions) -> Result<Value>
    where
        R: io::Read,
    {
        de::from_reader(reader, opts)
    }

    /// Returns the variant of the `Value`.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Number(_) => Kind::Number,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    /// Returns true if the `Value` is a Null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true if the `Value` is a Bool.
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns true if the `Value` is a Number.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns true if the `Value` is a String.
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns true if the `Value` is an Array.
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns true if the `Value` is an Object.
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns the number of elements of an array or entries of an object, `0` for every other
    /// variant.
    pub fn len(&self) -> usize {
        match self {
            Value::Array(array) => array.len(),
            Value::Object(object) => object.len(),
            _ => 0,
        }
    }

    /// Returns true if `len()` is zero.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FromStr for Value {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Value::from_text(s)
    }
}
