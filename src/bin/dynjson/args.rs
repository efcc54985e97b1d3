//! Command line arguments for dynjson.

use clap::{Args, Parser, ValueHint};
use dynjson::{de::ParseOptions, ser::RenderOptions, Source, Value};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Read a JSON document and print the value found at a path.
///
/// Every SEGMENT after the source navigates one level deeper into the document. A segment made
/// of digits only selects an array element, every other segment selects an object key. Prefix a
/// segment with `=` to always treat it as a key (`=0` selects the key "0").
///
/// Navigation never fails: a missing key, an out-of-range index or a segment applied to the
/// wrong kind of value selects `null`.
#[derive(Parser, Debug)]
#[command(name = "dynjson", version)]
pub struct Options {
    /// Input source. Use '-' or omit it to read from stdin.
    #[arg(name = "SOURCE", value_hint = ValueHint::FilePath)]
    pub source: Option<Source>,

    /// Path segments to navigate into the document.
    #[arg(name = "SEGMENT")]
    pub path: Vec<Segment>,

    /// Options for parsing the input.
    #[clap(flatten)]
    pub input: InputOptions,

    /// Options for printing the selected value.
    #[clap(flatten)]
    pub output: OutputOptions,
}

/// Options that configure parsing of the input.
#[derive(Args, Debug)]
pub struct InputOptions {
    /// Reject documents whose top-level value is not an array or object.
    #[arg(long, help_heading = "Input Options")]
    pub strict: bool,
}

impl From<&InputOptions> for ParseOptions {
    fn from(opts: &InputOptions) -> Self {
        Self {
            allow_fragments: !opts.strict,
        }
    }
}

/// Options that configure how the selected value is printed.
#[derive(Args, Debug)]
pub struct OutputOptions {
    /// Pretty print arrays and objects.
    #[arg(short = 'n', long, help_heading = "Output Options")]
    pub pretty: bool,

    /// Print the value as a JSON document, quoting strings.
    ///
    /// By default strings are printed as raw text.
    #[arg(short = 'q', long, help_heading = "Output Options")]
    pub quoted: bool,

    /// Print the kind of the selected value (null, bool, number, string, array or object)
    /// instead of the value itself.
    #[arg(
        short = 'k',
        long,
        conflicts_with_all = ["pretty", "quoted"],
        help_heading = "Output Options"
    )]
    pub kind: bool,
}

impl From<&OutputOptions> for RenderOptions {
    fn from(opts: &OutputOptions) -> Self {
        Self {
            pretty: opts.pretty,
        }
    }
}

/// A single navigation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Selects an array element.
    Index(usize),
    /// Selects an object entry.
    Key(String),
}

impl Segment {
    /// Applies the segment to `value`.
    pub fn select<'a>(&self, value: &'a Value) -> &'a Value {
        match self {
            Segment::Index(index) => value.get(*index),
            Segment::Key(key) => value.get(key),
        }
    }

    /// Returns `true` if `value` has an element or entry for this segment.
    pub fn exists_in(&self, value: &Value) -> bool {
        match self {
            Segment::Index(index) => value.array().map_or(false, |array| *index < array.len()),
            Segment::Key(key) => value
                .object()
                .map_or(false, |object| object.contains_key(key)),
        }
    }
}

impl FromStr for Segment {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(key) = s.strip_prefix('=') {
            return Ok(Segment::Key(key.to_owned()));
        }

        let segment = match s.parse::<usize>() {
            Ok(index) if s.bytes().all(|b| b.is_ascii_digit()) => Segment::Index(index),
            _ => Segment::Key(s.to_owned()),
        };

        Ok(segment)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Index(index) => write!(f, "[{}]", index),
            Segment::Key(key) => write!(f, "[{:?}]", key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_verify_command() {
        Options::command().debug_assert();
    }

    #[test]
    fn test_parse_segment() {
        assert_eq!("0".parse(), Ok(Segment::Index(0)));
        assert_eq!("12".parse(), Ok(Segment::Index(12)));
        assert_eq!("+1".parse(), Ok(Segment::Key("+1".into())));
        assert_eq!("-1".parse(), Ok(Segment::Key("-1".into())));
        assert_eq!("=0".parse(), Ok(Segment::Key("0".into())));
        assert_eq!("name".parse(), Ok(Segment::Key("name".into())));
        assert_eq!("".parse(), Ok(Segment::Key("".into())));
    }

    #[test]
    fn test_select() {
        let value = Value::from_text(r#"{"a": [{"0": "zero"}]}"#).unwrap();
        let path: Vec<Segment> = ["a", "0", "=0"].iter().map(|s| s.parse().unwrap()).collect();

        let selected = path.iter().fold(&value, |value, segment| segment.select(value));
        assert_eq!(selected.string(), Some("zero"));

        assert!(Segment::Index(0).select(&value).is_null());
        assert!(Segment::Key("a".into()).exists_in(&value));
        assert!(!Segment::Key("b".into()).exists_in(&value));
        assert!(!Segment::Index(0).exists_in(&value));
        assert!(Segment::Index(0).exists_in(&value["a"]));
    }

    #[test]
    fn test_display_segment() {
        assert_eq!(Segment::Index(3).to_string(), "[3]");
        assert_eq!(Segment::Key("a b".into()).to_string(), r#"["a b"]"#);
    }
}
