//! This module provides the options and entry points for parsing JSON input into a `Value`.
//!
//! Parsing is delegated to `serde_json`. Its generic value is converted into a `Value` in a
//! single pass and is not kept around afterwards.

use crate::{Error, Result, Value};
use serde::de::Error as _;
use std::io::Read;

/// Options for parsing JSON input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Accept documents whose top-level value is a scalar (number, string, bool or null).
    ///
    /// If `false`, only arrays and objects are accepted at the top level. Defaults to `true`.
    pub allow_fragments: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            allow_fragments: true,
        }
    }
}

impl ParseOptions {
    /// Creates new `ParseOptions`.
    pub fn new() -> Self {
        Self::default()
    }
}

/// A `ParseOptionsBuilder` can be used to build `ParseOptions`.
///
/// ## Example
///
/// ```
/// use dynjson::{de::ParseOptionsBuilder, Error, Value};
///
/// let opts = ParseOptionsBuilder::new().allow_fragments(false).build();
///
/// assert!(Value::from_bytes_with(b"[5]", &opts).is_ok());
/// assert!(matches!(
///     Value::from_bytes_with(b"5", &opts),
///     Err(Error::MalformedJson(_))
/// ));
/// ```
#[derive(Debug, Default, Clone)]
pub struct ParseOptionsBuilder {
    opts: ParseOptions,
}

impl ParseOptionsBuilder {
    /// Creates a new `ParseOptionsBuilder`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Controls whether top-level scalars are accepted.
    pub fn allow_fragments(&mut self, yes: bool) -> &mut Self {
        self.opts.allow_fragments = yes;
        self
    }

    /// Builds the `ParseOptions`.
    pub fn build(&self) -> ParseOptions {
        self.opts.clone()
    }
}

/// Parses a JSON document from a byte slice.
pub(crate) fn from_slice(bytes: &[u8], opts: &ParseOptions) -> Result<Value> {
    let generic: serde_json::Value = serde_json::from_slice(bytes).map_err(Error::MalformedJson)?;

    check_fragment(&generic, opts)?;

    Ok(Value::from(generic))
}

/// Reads `reader` to the end and parses its contents.
pub(crate) fn from_reader<R>(mut reader: R, opts: &ParseOptions) -> Result<Value>
where
    R: Read,
{
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    from_slice(&buf, opts)
}

fn check_fragment(generic: &serde_json::Value, opts: &ParseOptions) -> Result<()> {
    if opts.allow_fragments || generic.is_array() || generic.is_object() {
        return Ok(());
    }

    Err(Error::MalformedJson(serde_json::Error::custom(
        "top-level value must be an array or object",
    )))
}
