//! dynjson provides a dynamically typed JSON [`Value`].
//!
//! Input is parsed once into a closed set of variants. Reading it back never fails: typed
//! accessors either return an `Option` or fall back to a default, and navigating with `[]`
//! resolves anything missing to `Value::Null`, so lookups can be chained freely.
//!
//! ```
//! use dynjson::Value;
//! # use std::error::Error;
//! #
//! # fn main() -> Result<(), Box<dyn Error>> {
//! let value = Value::from_text(r#"{"string": "value", "number": 5, "null": null}"#)?;
//!
//! assert_eq!(value["string"].string(), Some("value"));
//! assert_eq!(value["number"].int(), Some(5));
//! assert!(value["null"].is_null());
//! assert_eq!(value["missing"]["deeper"][3].int_value(), 0);
//! #     Ok(())
//! # }
//! ```
//!
//! Plain Rust data and user-defined records render themselves as JSON text through the
//! [`ToJsonText`] capability, see the [`record`] module.

#![deny(missing_docs)]

pub mod de;
mod error;
mod json_text;
mod number;
pub mod record;
pub mod ser;
mod source;
mod value;

pub use error::*;
pub use json_text::{Opaque, ToJsonText};
pub use number::Number;
pub use record::{record_json_text, FromJson, Record};
pub use source::Source;
pub use value::{Kind, Map, Value, ValueIndex};
