//! The `ToJsonText` capability: values that render themselves as JSON text.
//!
//! Unlike [`Value::to_json_string`], which goes through `serde_json`, this is a small,
//! self-contained protocol meant for ad-hoc output of plain Rust data. Containers dispatch to
//! their elements through the trait and apply a per-container policy to elements that do not
//! have a JSON form (see [`ToJsonText::has_json_text`]):
//!
//! - string-keyed maps drop such entries,
//! - sequences keep them and emit their fallback text.
//!
//! ```
//! use dynjson::{Opaque, ToJsonText};
//! use std::collections::BTreeMap;
//!
//! let mut map: BTreeMap<&str, Option<i32>> = BTreeMap::new();
//! map.insert("a", Some(1));
//! map.insert("b", None);
//! assert_eq!(map.to_json_text(), r#"{"a":1}"#);
//!
//! let seq: Vec<Box<dyn ToJsonText>> = vec![Box::new("x"), Box::new(Opaque(1.5))];
//! assert_eq!(seq.to_json_text(), r#"["x",1.5]"#);
//! ```

use crate::Value;
use indexmap::IndexMap;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// A value that can render itself as JSON text.
pub trait ToJsonText {
    /// Renders `self` as JSON text.
    ///
    /// If `has_json_text` returns `false` this is the fallback text used by sequences instead.
    fn to_json_text(&self) -> String;

    /// Returns `false` if this particular value has no JSON form.
    ///
    /// Maps and records skip such values, sequences render their fallback text.
    fn has_json_text(&self) -> bool {
        true
    }
}

/// Wraps a value that has no JSON form.
///
/// Its fallback text is the `Display` output of the wrapped value, written as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Opaque<T>(pub T);

impl<T> ToJsonText for Opaque<T>
where
    T: fmt::Display,
{
    fn to_json_text(&self) -> String {
        self.0.to_string()
    }

    fn has_json_text(&self) -> bool {
        false
    }
}

/// Renders string-keyed entries as a JSON object, dropping entries without a JSON form.
pub(crate) fn object_text<'a, I, K, V>(entries: I) -> String
where
    I: IntoIterator<Item = (K, &'a V)>,
    K: AsRef<str>,
    V: ToJsonText + ?Sized + 'a,
{
    let parts: Vec<String> = entries
        .into_iter()
        .filter(|(_, value)| value.has_json_text())
        .map(|(key, value)| format!("{}:{}", quote(key.as_ref()), value.to_json_text()))
        .collect();

    format!("{{{}}}", parts.join(","))
}

/// Renders elements as a JSON array. Elements without a JSON form emit their fallback text.
fn array_text<'a, I, T>(elements: I) -> String
where
    I: IntoIterator<Item = &'a T>,
    T: ToJsonText + ?Sized + 'a,
{
    let parts: Vec<String> = elements.into_iter().map(T::to_json_text).collect();

    format!("[{}]", parts.join(","))
}

/// Quotes and escapes a string the way the JSON writer does.
fn quote(s: &str) -> String {
    serde_json::Value::from(s).to_string()
}

impl ToJsonText for str {
    fn to_json_text(&self) -> String {
        quote(self)
    }
}

impl ToJsonText for String {
    fn to_json_text(&self) -> String {
        quote(self)
    }
}

impl ToJsonText for bool {
    fn to_json_text(&self) -> String {
        String::from(if *self { "true" } else { "false" })
    }
}

macro_rules! impl_integer_json_text {
    ($($ty:ty),*) => {
        $(
            impl ToJsonText for $ty {
                fn to_json_text(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_integer_json_text!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_float_json_text {
    ($($ty:ty),*) => {
        $(
            impl ToJsonText for $ty {
                /// Writes the shortest text that reads back as the same float. Non-finite floats
                /// have no JSON literal and render as `null`.
                fn to_json_text(&self) -> String {
                    serde_json::to_string(self).unwrap_or_else(|_| String::from("null"))
                }
            }
        )*
    };
}

impl_float_json_text!(f32, f64);

impl ToJsonText for SystemTime {
    /// Renders the time as a quoted ISO-8601 UTC timestamp with millisecond precision.
    fn to_json_text(&self) -> String {
        let millis = match self.duration_since(UNIX_EPOCH) {
            Ok(after) => i64::try_from(after.as_millis()).unwrap_or(i64::MAX),
            Err(err) => i64::try_from(err.duration().as_millis())
                .map(|before| -before)
                .unwrap_or(i64::MIN),
        };

        quote(&format_iso_millis(millis))
    }
}

/// Formats milliseconds since the Unix epoch as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
fn format_iso_millis(millis: i64) -> String {
    let days = millis.div_euclid(86_400_000);
    let ms_of_day = millis.rem_euclid(86_400_000);
    let (year, month, day) = civil_from_days(days);

    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
        year,
        month,
        day,
        ms_of_day / 3_600_000,
        ms_of_day / 60_000 % 60,
        ms_of_day / 1000 % 60,
        ms_of_day % 1000
    )
}

/// Converts days since the Unix epoch to a (year, month, day) date in the proleptic Gregorian
/// calendar.
fn civil_from_days(days: i64) -> (i64, i64, i64) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i64::from(month <= 2);

    (year, month, day)
}

impl ToJsonText for Value {
    /// Renders the value as a compact JSON document.
    fn to_json_text(&self) -> String {
        match self {
            Value::Null => String::from("null"),
            Value::Bool(b) => b.to_json_text(),
            Value::Number(n) => n.to_string(),
            Value::String(s) => quote(s),
            Value::Array(array) => array_text(array),
            Value::Object(object) => object_text(object),
        }
    }
}

impl<T> ToJsonText for Option<T>
where
    T: ToJsonText,
{
    fn to_json_text(&self) -> String {
        match self {
            Some(value) => value.to_json_text(),
            None => String::from("null"),
        }
    }

    fn has_json_text(&self) -> bool {
        self.as_ref().map_or(false, T::has_json_text)
    }
}

macro_rules! impl_pointer_json_text {
    ($($ty:ident),*) => {
        $(
            impl<T> ToJsonText for $ty<T>
            where
                T: ToJsonText + ?Sized,
            {
                fn to_json_text(&self) -> String {
                    (**self).to_json_text()
                }

                fn has_json_text(&self) -> bool {
                    (**self).has_json_text()
                }
            }
        )*
    };
}

impl_pointer_json_text!(Box, Rc, Arc);

impl<T> ToJsonText for &T
where
    T: ToJsonText + ?Sized,
{
    fn to_json_text(&self) -> String {
        (**self).to_json_text()
    }

    fn has_json_text(&self) -> bool {
        (**self).has_json_text()
    }
}

impl<T> ToJsonText for [T]
where
    T: ToJsonText,
{
    fn to_json_text(&self) -> String {
        array_text(self)
    }
}

impl<T, const N: usize> ToJsonText for [T; N]
where
    T: ToJsonText,
{
    fn to_json_text(&self) -> String {
        array_text(self)
    }
}

impl<T> ToJsonText for Vec<T>
where
    T: ToJsonText,
{
    fn to_json_text(&self) -> String {
        array_text(self)
    }
}

impl<T> ToJsonText for VecDeque<T>
where
    T: ToJsonText,
{
    fn to_json_text(&self) -> String {
        array_text(self)
    }
}

impl<K, V, S> ToJsonText for HashMap<K, V, S>
where
    K: AsRef<str>,
    V: ToJsonText,
{
    fn to_json_text(&self) -> String {
        object_text(self)
    }
}

impl<K, V> ToJsonText for BTreeMap<K, V>
where
    K: AsRef<str>,
    V: ToJsonText,
{
    fn to_json_text(&self) -> String {
        object_text(self)
    }
}

impl<K, V, S> ToJsonText for IndexMap<K, V, S>
where
    K: AsRef<str>,
    V: ToJsonText,
{
    fn to_json_text(&self) -> String {
        object_text(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    #[test]
    fn test_scalars() {
        assert_eq!(5i32.to_json_text(), "5");
        assert_eq!((-5i64).to_json_text(), "-5");
        assert_eq!(1.5f64.to_json_text(), "1.5");
        assert_eq!(2.0f64.to_json_text(), "2.0");
        assert_eq!(f64::NAN.to_json_text(), "null");
        assert_eq!(0.1f32.to_json_text(), "0.1");
        assert_eq!((-2.5f32).to_json_text(), "-2.5");
        assert_eq!(f32::INFINITY.to_json_text(), "null");
        assert_eq!(true.to_json_text(), "true");
        assert_eq!(false.to_json_text(), "false");
        assert_eq!("abc".to_json_text(), r#""abc""#);
    }

    #[test]
    fn test_string_escaping() {
        assert_eq!(
            String::from("say \"hi\"\n\\ \t\u{1}").to_json_text(),
            r#""say \"hi\"\n\\ \t\u0001""#
        );
        assert_eq!("ü€".to_json_text(), "\"ü€\"");

        let escaped = "a\"b\u{7f}\u{0}".to_json_text();
        let parsed = Value::from_text(&escaped).unwrap();
        assert_eq!(parsed.string(), Some("a\"b\u{7f}\u{0}"));

        let map = BTreeMap::from([("k\"ey\n", 1)]);
        assert_eq!(map.to_json_text(), r#"{"k\"ey\n":1}"#);
    }

    #[test]
    fn test_map() {
        let mut map: HashMap<&str, Box<dyn ToJsonText>> = HashMap::new();
        map.insert("a", Box::new(1));
        map.insert("b", Box::new("x"));
        let text = map.to_json_text();

        assert!(
            text == r#"{"a":1,"b":"x"}"# || text == r#"{"b":"x","a":1}"#,
            "unexpected text: {text}"
        );
    }

    #[test]
    fn test_map_drops_entries_without_json_text() {
        let mut map: BTreeMap<String, Box<dyn ToJsonText>> = BTreeMap::new();
        map.insert("a".into(), Box::new(1));
        map.insert("b".into(), Box::new(Opaque("skipped")));
        map.insert("c".into(), Box::new(None::<String>));
        map.insert("d".into(), Box::new(Some(vec![1, 2])));

        assert_eq!(map.to_json_text(), r#"{"a":1,"d":[1,2]}"#);
    }

    #[test]
    fn test_sequence_falls_back_for_elements_without_json_text() {
        let seq: Vec<Box<dyn ToJsonText>> = vec![
            Box::new(1),
            Box::new(Opaque("raw text")),
            Box::new(None::<i32>),
            Box::new("s"),
        ];

        assert_eq!(seq.to_json_text(), r#"[1,raw text,null,"s"]"#);
        assert_eq!([1u8, 2, 3].to_json_text(), "[1,2,3]");
        assert_eq!(Vec::<i32>::new().to_json_text(), "[]");
        assert_eq!(VecDeque::from([true]).to_json_text(), "[true]");
    }

    #[test]
    fn test_nested() {
        let mut inner = IndexMap::new();
        inner.insert("list", vec![Some(1.5), None]);

        let outer = BTreeMap::from([("inner", inner)]);

        assert_eq!(outer.to_json_text(), r#"{"inner":{"list":[1.5,null]}}"#);
    }

    #[test]
    fn test_system_time() {
        assert_eq!(
            (UNIX_EPOCH + Duration::from_millis(1000)).to_json_text(),
            r#""1970-01-01T00:00:01.000Z""#
        );
        assert_eq!(
            (UNIX_EPOCH + Duration::from_millis(951_782_400_123)).to_json_text(),
            r#""2000-02-29T00:00:00.123Z""#
        );
        assert_eq!(
            (UNIX_EPOCH - Duration::from_millis(1)).to_json_text(),
            r#""1969-12-31T23:59:59.999Z""#
        );
    }

    #[test]
    fn test_value() {
        let value = Value::from_text(r#"{"a": [1, "b\"", null, true, 0.5]}"#).unwrap();

        assert_eq!(value.to_json_text(), r#"{"a":[1,"b\"",null,true,0.5]}"#);
        assert_eq!(Value::from_text(&value.to_json_text()).unwrap(), value);
    }
}
