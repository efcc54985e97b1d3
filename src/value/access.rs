//! Typed views over a `Value`.
//!
//! Every accessor comes in two flavours: an optional one which returns `None` if the variant
//! does not match, and a `*_value` one which falls back to a default instead. None of them ever
//! fail.

use super::{Map, Number, Value};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

impl Value {
    /// If the `Value` is a Number, returns the associated `Number`. Returns None otherwise.
    pub fn number(&self) -> Option<&Number> {
        match self {
            Value::Number(num) => Some(num),
            _ => None,
        }
    }

    /// Returns the associated `Number`, or zero if the `Value` is not a Number.
    pub fn number_value(&self) -> Number {
        self.number().copied().unwrap_or_default()
    }

    /// If the `Value` is a Number, returns its integer view. Floats are truncated toward zero.
    /// Returns None otherwise.
    pub fn int(&self) -> Option<i64> {
        self.number().map(Number::to_i64)
    }

    /// Returns the integer view of a Number, or `0` for every other variant.
    pub fn int_value(&self) -> i64 {
        self.int().unwrap_or(0)
    }

    /// If the `Value` is a Number, returns it as f64. Returns None otherwise.
    pub fn double(&self) -> Option<f64> {
        self.number().map(Number::as_f64)
    }

    /// Returns a Number as f64, or `0.0` for every other variant.
    pub fn double_value(&self) -> f64 {
        self.double().unwrap_or(0.0)
    }

    /// If the `Value` is a Bool, returns the boolean. Returns None otherwise.
    ///
    /// Numbers are never read as booleans.
    pub fn bool(&self) -> Option<bool> {
        match *self {
            Value::Bool(b) => Some(b),
            _ => None,
        }
    }

    /// Returns the boolean of a Bool, or `true` for every other variant.
    ///
    /// ```
    /// use dynjson::Value;
    ///
    /// assert!(!Value::Bool(false).bool_value());
    /// assert!(Value::Null.bool_value());
    /// ```
    pub fn bool_value(&self) -> bool {
        self.bool().unwrap_or(true)
    }

    /// If the `Value` is a String, returns the associated str. Returns None otherwise.
    pub fn string(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the str of a String, or an empty str for every other variant.
    pub fn string_value(&self) -> &str {
        self.string().unwrap_or_default()
    }

    /// If the `Value` is an Array, returns its elements. Returns None otherwise.
    pub fn array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(array) => Some(array),
            _ => None,
        }
    }

    /// If the `Value` is an Object, returns the associated Map. Returns None otherwise.
    pub fn object(&self) -> Option<&Map<String, Value>> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Interprets an object of the form `{"$date": <millis>}` as a point in time.
    ///
    /// The number is read through its integer view as milliseconds since the Unix epoch.
    /// Returns None if the `Value` is not an Object, has no `$date` key, or `$date` is not a
    /// Number.
    ///
    /// ```
    /// use dynjson::Value;
    /// use std::time::{Duration, UNIX_EPOCH};
    ///
    /// let value = Value::from_text(r#"{"$date": 1000}"#).unwrap();
    /// assert_eq!(value.date(), Some(UNIX_EPOCH + Duration::from_secs(1)));
    /// ```
    pub fn date(&self) -> Option<SystemTime> {
        let millis = self.get("$date").int()?;
        let offset = Duration::from_millis(millis.unsigned_abs());

        if millis < 0 {
            UNIX_EPOCH.checked_sub(offset)
        } else {
            UNIX_EPOCH.checked_add(offset)
        }
    }
}
