use super::{Value, NULL};
use std::ops;

/// A type that can be used to navigate into a `Value`.
///
/// Integers select elements of arrays and strings select entries of objects. Looking up an index
/// in a value of the wrong variant, a missing key or an out-of-range position never fails; it
/// yields `None` here and `Value::Null` through [`Value::get`] and the `[]` operator.
///
/// This trait is sealed and cannot be implemented outside of `dynjson`.
pub trait ValueIndex: private::Sealed {
    /// Returns the element or entry of `value` selected by `self`, if any.
    #[doc(hidden)]
    fn index_into<'v>(&self, value: &'v Value) -> Option<&'v Value>;
}

mod private {
    pub trait Sealed {}

    impl Sealed for usize {}
    impl Sealed for isize {}
    impl Sealed for i64 {}
    impl Sealed for i32 {}
    impl Sealed for u32 {}
    impl Sealed for str {}
    impl Sealed for String {}
    impl<T> Sealed for &T where T: ?Sized + Sealed {}
}

impl ValueIndex for usize {
    fn index_into<'v>(&self, value: &'v Value) -> Option<&'v Value> {
        value.array()?.get(*self)
    }
}

macro_rules! impl_integer_index {
    ($($ty:ty),*) => {
        $(
            impl ValueIndex for $ty {
                fn index_into<'v>(&self, value: &'v Value) -> Option<&'v Value> {
                    // Negative positions fail the conversion.
                    usize::try_from(*self).ok()?.index_into(value)
                }
            }
        )*
    };
}

impl_integer_index!(isize, i64, i32, u32);

impl ValueIndex for str {
    fn index_into<'v>(&self, value: &'v Value) -> Option<&'v Value> {
        value.object()?.get(self)
    }
}

impl ValueIndex for String {
    fn index_into<'v>(&self, value: &'v Value) -> Option<&'v Value> {
        self.as_str().index_into(value)
    }
}

impl<T> ValueIndex for &T
where
    T: ?Sized + ValueIndex,
{
    fn index_into<'v>(&self, value: &'v Value) -> Option<&'v Value> {
        (**self).index_into(value)
    }
}

impl Value {
    /// Navigates into an array by position or into an object by key.
    ///
    /// Returns `Value::Null` if `self` is of the wrong variant, the key is missing or the
    /// position is out of range. Lookups are exact and case-sensitive; keys are never
    /// interpreted as paths.
    ///
    /// ```
    /// use dynjson::Value;
    ///
    /// let value = Value::from_text(r#"{"a": [10, 20]}"#).unwrap();
    ///
    /// assert_eq!(value.get("a").get(1).int(), Some(20));
    /// assert!(value.get("a").get(-1).is_null());
    /// assert!(value.get("A").is_null());
    /// assert!(value.get(0).is_null());
    /// ```
    pub fn get<I>(&self, index: I) -> &Value
    where
        I: ValueIndex,
    {
        index.index_into(self).unwrap_or(&NULL)
    }
}

impl<I> ops::Index<I> for Value
where
    I: ValueIndex,
{
    type Output = Value;

    /// Same as [`Value::get`]. Never panics.
    fn index(&self, index: I) -> &Value {
        self.get(index)
    }
}

#[cfg(test)]
mod tests {
    use crate::Value;
    use pretty_assertions::assert_eq;

    fn parse(s: &str) -> Value {
        Value::from_text(s).unwrap()
    }

    #[test]
    fn test_index_array() {
        let value = parse("[1, 2, 3]");

        assert_eq!(value[0].int(), Some(1));
        assert_eq!(value[2usize].int(), Some(3));
        assert_eq!(value[5], Value::Null);
        assert_eq!(value[3], Value::Null);
        assert_eq!(value[-1], Value::Null);
        assert_eq!(value[isize::MIN], Value::Null);
        assert_eq!(value[i64::MAX], Value::Null);
        assert_eq!(value["0"], Value::Null);
    }

    #[test]
    fn test_index_object() {
        let value = parse(r#"{"string": "value", "number": 5, "null": null, "a.b": 1}"#);

        assert_eq!(value["string"].string(), Some("value"));
        assert_eq!(value[String::from("number")].int(), Some(5));
        assert!(value["null"].is_null());
        assert!(value["missing"].is_null());
        assert!(value["String"].is_null());
        assert_eq!(value["a.b"].int(), Some(1));
        assert_eq!(value[0], Value::Null);
    }

    #[test]
    fn test_index_scalars() {
        for value in [parse("1"), parse("\"abc\""), parse("true"), parse("null")] {
            assert_eq!(value[0], Value::Null);
            assert_eq!(value["a"], Value::Null);
        }
    }

    #[test]
    fn test_chained_navigation() {
        let value = parse(r#"{"a": {"b": [0, 1, {"c": true}]}}"#);

        assert_eq!(value["a"]["b"][2]["c"].bool(), Some(true));
        assert_eq!(value["a"]["x"][2]["c"], Value::Null);
        assert_eq!(value["a"]["b"][9]["c"][0]["d"], Value::Null);

        let key = String::from("a");
        assert!(value.get(&key).is_object());
        assert!(value.get(&&key).is_object());
    }
}
