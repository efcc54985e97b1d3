//! Conversions into `Value`.
//!
//! Everything funnels into two helpers, [`array`] and [`object`], which tag each element on the
//! way in. Parsed input goes through the same helpers exactly once, so a `Value` never holds an
//! untagged generic value.

use super::{Number, Value};
use serde_json::Value as JsonValue;

/// Builds an Array, converting each element.
fn array<I>(elements: I) -> Value
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    Value::Array(elements.into_iter().map(Into::into).collect())
}

/// Builds an Object, converting each entry. Later duplicates of a key replace earlier ones.
fn object<I, K, V>(entries: I) -> Value
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    Value::Object(
        entries
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect(),
    )
}

macro_rules! impl_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Number(Number::from(n))
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, Number);

impl From<f64> for Value {
    /// Non-finite floats are not JSON numbers and convert to `Value::Null`.
    fn from(f: f64) -> Self {
        Number::from_f64(f).map_or(Value::Null, Value::Number)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl<T> From<Vec<T>> for Value
where
    T: Into<Value>,
{
    fn from(elements: Vec<T>) -> Self {
        array(elements)
    }
}

impl<T> FromIterator<T> for Value
where
    T: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        array(iter)
    }
}

impl<K, V> FromIterator<(K, V)> for Value
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        object(iter)
    }
}

impl From<JsonValue> for Value {
    fn from(generic: JsonValue) -> Self {
        match generic {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(b),
            JsonValue::Number(n) => Value::Number(Number::from(&n)),
            JsonValue::String(s) => Value::String(s),
            JsonValue::Array(elements) => array(elements),
            JsonValue::Object(entries) => object(entries),
        }
    }
}

impl From<Value> for JsonValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => JsonValue::Null,
            Value::Bool(b) => JsonValue::Bool(b),
            Value::Number(n) => JsonValue::Number(n.into()),
            Value::String(s) => JsonValue::String(s),
            Value::Array(elements) => elements.into_iter().map(JsonValue::from).collect(),
            Value::Object(entries) => JsonValue::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, JsonValue::from(value)))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_tagging_pass() {
        let value = Value::from(json!({
            "a": [1, -2, 1.5, true, null],
            "b": {"c": "d"}
        }));

        let expected: Value = [
            (
                "a",
                Value::from(vec![
                    Value::from(1),
                    Value::from(-2),
                    Value::from(1.5),
                    Value::from(true),
                    Value::Null,
                ]),
            ),
            ("b", [("c", "d")].into_iter().collect()),
        ]
        .into_iter()
        .collect();

        assert_eq!(value, expected);
        assert_eq!(value["a"][3].kind(), crate::Kind::Bool);
    }

    #[test]
    fn test_back_to_generic() {
        let generic = json!({"a": [1, -2, 1.5, true, null], "b": {"c": "d"}});
        assert_eq!(JsonValue::from(Value::from(generic.clone())), generic);
    }

    #[test]
    fn test_from_scalars() {
        assert_eq!(Value::from(f64::NAN), Value::Null);
        assert_eq!(Value::from(Some("a")), Value::String("a".into()));
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Number::zero()), Value::from(0u8));
        assert_eq!(Value::from(vec![1, 2]), (1..=2).collect());
    }
}
