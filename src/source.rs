use crate::de::ParseOptions;
use crate::{Result, Value};
use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;

/// A source for a JSON document.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    /// Stdin source.
    Stdin,
    /// Local file source.
    Path(PathBuf),
}

impl Source {
    /// Returns a reader to read from the source.
    ///
    /// ## Errors
    ///
    /// Returns an error if the source is `Source::Path` and the file cannot be opened.
    pub fn to_reader(&self) -> Result<impl io::Read> {
        let reader: Box<dyn io::Read> = match self {
            Self::Stdin => Box::new(io::stdin()),
            Self::Path(path) => Box::new(fs::File::open(path)?),
        };

        Ok(reader)
    }

    /// Reads the source to the end and parses it into a `Value`.
    ///
    /// ## Errors
    ///
    /// Returns `Error::Io` if the source cannot be read and `Error::MalformedJson` if its
    /// contents are not a valid JSON document.
    pub fn read_value(&self, opts: &ParseOptions) -> Result<Value> {
        Value::from_reader(self.to_reader()?, opts)
    }
}

impl From<&str> for Source {
    fn from(s: &str) -> Self {
        if s == "-" {
            Self::Stdin
        } else {
            Self::Path(PathBuf::from(s))
        }
    }
}

impl FromStr for Source {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(From::from(s))
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => write!(f, "<stdin>"),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}
