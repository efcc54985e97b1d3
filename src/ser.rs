//! Rendering a `Value` back to JSON text.
//!
//! Arrays and objects are written by `serde_json`, scalars render their plain text. Rendering
//! never panics: the infallible entry points report a writer failure as `None` (or an empty
//! string for `Display`).

use crate::{Error, Result, Value};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use std::fmt;

/// Options that control how a `Value` is rendered.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Pretty print arrays and objects instead of writing them compactly.
    pub pretty: bool,
}

impl RenderOptions {
    /// Creates new `RenderOptions` for compact output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates new `RenderOptions` for pretty printed output.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => n.serialize(serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(array) => {
                let mut seq = serializer.serialize_seq(Some(array.len()))?;
                for element in array {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Object(object) => {
                let mut map = serializer.serialize_map(Some(object.len()))?;
                for (k, v) in object {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl Value {
    /// Renders the value as text.
    ///
    /// Arrays and objects are rendered as JSON documents, honoring `opts.pretty`. Strings render
    /// their raw, unquoted text, numbers and booleans their literal and null renders `null`.
    /// Returns `None` if the JSON writer rejects the value.
    ///
    /// ```
    /// use dynjson::{ser::RenderOptions, Value};
    ///
    /// let value = Value::from_text(r#"{"a": ["b", 1.5]}"#).unwrap();
    /// let opts = RenderOptions::new();
    ///
    /// assert_eq!(value.raw_string(&opts).as_deref(), Some(r#"{"a":["b",1.5]}"#));
    /// assert_eq!(value["a"][0].raw_string(&opts).as_deref(), Some("b"));
    /// assert_eq!(value["x"].raw_string(&opts).as_deref(), Some("null"));
    /// ```
    pub fn raw_string(&self, opts: &RenderOptions) -> Option<String> {
        self.try_raw_string(opts).ok()
    }

    /// Like `raw_string`, but reports why the writer rejected the value.
    pub fn try_raw_string(&self, opts: &RenderOptions) -> Result<String> {
        match self {
            Value::Null => Ok(String::from("null")),
            Value::Bool(b) => Ok(b.to_string()),
            Value::Number(n) => Ok(n.to_string()),
            Value::String(s) => Ok(s.clone()),
            Value::Array(_) | Value::Object(_) => self.to_json_string(opts),
        }
    }

    /// Renders the value as a complete JSON document. Unlike `raw_string`, strings are quoted
    /// and escaped, so the result can always be parsed again.
    pub fn to_json_string(&self, opts: &RenderOptions) -> Result<String> {
        if opts.pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
        .map_err(Error::UnwritableValue)
    }
}

impl fmt::Display for Value {
    /// Displays the raw text of a value as produced by [`Value::raw_string`].
    ///
    /// The alternate flag (`{:#}`) selects pretty printing. If rendering fails the output is
    /// empty.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let opts = RenderOptions {
            pretty: f.alternate(),
        };

        f.write_str(self.raw_string(&opts).as_deref().unwrap_or_default())
    }
}
