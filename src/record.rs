//! User-defined records that convert to and from JSON.
//!
//! A record describes its fields explicitly through [`Record::json_fields`], usually via the
//! [`json_record!`][crate::json_record] macro. Serialization keeps the fields which have a JSON
//! form and renders them as an object. The opposite direction, [`FromJson`], is implemented by
//! each record by hand and reports missing or mismatched fields as typed errors.
//!
//! ```
//! use dynjson::{json_record, FromJson, Result, ToJsonText, Value};
//!
//! #[derive(Debug, PartialEq)]
//! struct User {
//!     name: String,
//!     age: i64,
//!     email: Option<String>,
//! }
//!
//! json_record!(User { name, age, email });
//!
//! impl FromJson for User {
//!     fn from_json(value: &Value) -> Result<Self> {
//!         Ok(User {
//!             name: value.field("name")?,
//!             age: value.field("age")?,
//!             email: value.field("email")?,
//!         })
//!     }
//! }
//!
//! let user = User { name: "alice".into(), age: 42, email: None };
//! let text = user.to_json_text();
//! assert_eq!(text, r#"{"name":"alice","age":42}"#);
//!
//! let value = Value::from_text(&text).unwrap();
//! assert_eq!(User::from_json(&value).unwrap(), user);
//! ```

use crate::json_text::{object_text, ToJsonText};
use crate::{Error, Kind, Result, Value};

/// A user-defined type that describes its fields for JSON serialization.
pub trait Record {
    /// Returns the name and value of every field, in declaration order.
    fn json_fields(&self) -> Vec<(&'static str, &dyn ToJsonText)>;
}

/// Renders a record as a JSON object.
///
/// Fields whose value has no JSON form (for example `None` or an [`Opaque`][crate::Opaque]
/// value) are left out.
pub fn record_json_text<R>(record: &R) -> String
where
    R: Record + ?Sized,
{
    object_text(record.json_fields())
}

/// Implements [`Record`] and [`ToJsonText`] for a struct from a list of its fields.
///
/// Every listed field must implement `ToJsonText`. Fields that are not listed are never
/// serialized.
///
/// ```
/// use dynjson::{json_record, ToJsonText};
///
/// struct Point {
///     x: f64,
///     y: f64,
///     label: &'static str,
/// }
///
/// json_record!(Point { x, y });
///
/// let point = Point { x: 1.0, y: -2.5, label: "ignored" };
/// assert_eq!(point.to_json_text(), r#"{"x":1.0,"y":-2.5}"#);
/// # let _ = point.label;
/// ```
#[macro_export]
macro_rules! json_record {
    ($ty:ty { $($field:ident),* $(,)? }) => {
        impl $crate::Record for $ty {
            fn json_fields(&self) -> ::std::vec::Vec<(&'static str, &dyn $crate::ToJsonText)> {
                ::std::vec![$((::std::stringify!($field), &self.$field as &dyn $crate::ToJsonText)),*]
            }
        }

        impl $crate::ToJsonText for $ty {
            fn to_json_text(&self) -> ::std::string::String {
                $crate::record_json_text(self)
            }
        }
    };
}

/// A type that can be constructed from a `Value`.
///
/// Unlike navigating a `Value`, construction does not degrade to defaults: a required field that
/// is missing or of the wrong variant is an error.
pub trait FromJson: Sized {
    /// Constructs `Self` from `value`.
    fn from_json(value: &Value) -> Result<Self>;

    /// The value to use when an object field is absent. `None` makes the field required.
    #[doc(hidden)]
    fn from_missing() -> Option<Self> {
        None
    }
}

impl Value {
    /// Reads the field `key` of an object and converts it with [`FromJson`].
    ///
    /// Returns `Error::MissingField` if `self` is not an object or has no such key, unless
    /// `T` accepts absent values (like `Option<U>`). Returns `Error::InvalidField` if the
    /// field is present but cannot be converted.
    pub fn field<T>(&self, key: &str) -> Result<T>
    where
        T: FromJson,
    {
        match self.object().and_then(|object| object.get(key)) {
            Some(value) => T::from_json(value).map_err(|err| Error::invalid_field(key, err)),
            None => T::from_missing().ok_or_else(|| Error::MissingField(key.to_string())),
        }
    }
}

fn require<T>(value: &Value, expected: Kind, extracted: Option<T>) -> Result<T> {
    extracted.ok_or_else(|| Error::invalid_type(expected, value.kind()))
}

impl FromJson for Value {
    fn from_json(value: &Value) -> Result<Self> {
        Ok(value.clone())
    }
}

impl FromJson for String {
    fn from_json(value: &Value) -> Result<Self> {
        require(value, Kind::String, value.string().map(String::from))
    }
}

impl FromJson for bool {
    fn from_json(value: &Value) -> Result<Self> {
        require(value, Kind::Bool, value.bool())
    }
}

impl FromJson for f64 {
    fn from_json(value: &Value) -> Result<Self> {
        require(value, Kind::Number, value.double())
    }
}

impl FromJson for i64 {
    /// Only integral numbers in range convert; floats are rejected rather than truncated.
    fn from_json(value: &Value) -> Result<Self> {
        require(value, Kind::Number, value.number().and_then(|n| n.as_i64()))
    }
}

impl FromJson for u64 {
    fn from_json(value: &Value) -> Result<Self> {
        require(value, Kind::Number, value.number().and_then(|n| n.as_u64()))
    }
}

impl FromJson for i32 {
    fn from_json(value: &Value) -> Result<Self> {
        let n = value
            .number()
            .and_then(|n| n.as_i64())
            .and_then(|n| i32::try_from(n).ok());

        require(value, Kind::Number, n)
    }
}

impl<T> FromJson for Vec<T>
where
    T: FromJson,
{
    fn from_json(value: &Value) -> Result<Self> {
        require(value, Kind::Array, value.array())?
            .iter()
            .map(T::from_json)
            .collect()
    }
}

impl<T> FromJson for Option<T>
where
    T: FromJson,
{
    fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            value => T::from_json(value).map(Some),
        }
    }

    fn from_missing() -> Option<Self> {
        Some(None)
    }
}
