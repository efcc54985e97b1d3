//! Defines the `Error` and `Result` types used by this crate.

use crate::Kind;
use std::string::FromUtf16Error;
use thiserror::Error;

/// A type alias for `Result<T, Error>`.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The error returned by all fallible operations within this crate.
///
/// Navigating a [`Value`][crate::Value] never produces an error. Errors are only returned while
/// constructing a `Value` from input, while rendering one to text through the fallible variants
/// of the rendering methods, and while building typed records via [`FromJson`][crate::FromJson].
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    /// The input text could not be transcoded to UTF-8.
    #[error("input is not valid UTF-16 text")]
    InvalidEncoding(#[from] FromUtf16Error),

    /// The input is not a valid JSON document.
    #[error("malformed JSON: {0}")]
    MalformedJson(#[source] serde_json::Error),

    /// The JSON writer rejected the value.
    #[error("value cannot be written as JSON: {0}")]
    UnwritableValue(#[source] serde_json::Error),

    /// IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A value had a different variant than the one required.
    #[error("invalid type: expected {expected}, found {found}")]
    InvalidType {
        /// The variant that was required.
        expected: Kind,
        /// The variant that was found.
        found: Kind,
    },

    /// A required object field is absent.
    #[error("missing field `{0}`")]
    MissingField(String),

    /// An object field is present but could not be converted.
    #[error("invalid field `{field}`: {source}")]
    InvalidField {
        /// The name of the offending field.
        field: String,
        /// The reason the conversion failed.
        source: Box<Error>,
    },
}

impl Error {
    pub(crate) fn invalid_type(expected: Kind, found: Kind) -> Self {
        Self::InvalidType { expected, found }
    }

    pub(crate) fn invalid_field<T>(field: T, source: Error) -> Self
    where
        T: AsRef<str>,
    {
        Self::InvalidField {
            field: field.as_ref().to_string(),
            source: Box::new(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display() {
        assert_eq!(
            Error::invalid_type(Kind::String, Kind::Number).to_string(),
            "invalid type: expected string, found number"
        );
        assert_eq!(
            Error::MissingField("name".into()).to_string(),
            "missing field `name`"
        );
        assert_eq!(
            Error::invalid_field("age", Error::invalid_type(Kind::Number, Kind::Null)).to_string(),
            "invalid field `age`: invalid type: expected number, found null"
        );
    }
}
