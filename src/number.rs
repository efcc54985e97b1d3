use serde::{Serialize, Serializer};
use serde_json::Number as JsonNumber;
use std::fmt::{self, Debug, Display};

/// Represents a JSON number.
///
/// A `Number` is always finite. It keeps integers and floats apart so that both the integer and
/// the floating point view of a number are exact whenever the input allows it.
#[derive(PartialEq, Clone, Copy)]
pub struct Number {
    n: N,
}

#[derive(Clone, Copy)]
enum N {
    /// Represents a positive integer.
    PosInt(u64),
    /// Represents a negative integer.
    NegInt(i64),
    /// Represents a float.
    Float(f64),
}

impl PartialEq for N {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (N::PosInt(a), N::PosInt(b)) => a == b,
            (N::NegInt(a), N::NegInt(b)) => a == b,
            (N::Float(a), N::Float(b)) => a == b,
            _ => false,
        }
    }
}

impl Default for Number {
    fn default() -> Self {
        Number::zero()
    }
}

impl Number {
    /// Returns the integer zero.
    pub const fn zero() -> Number {
        Number { n: N::PosInt(0) }
    }

    /// Represents the `Number` as f64. Large integers may lose precision.
    pub fn as_f64(&self) -> f64 {
        match self.n {
            N::PosInt(n) => n as f64,
            N::NegInt(n) => n as f64,
            N::Float(n) => n,
        }
    }

    /// If the `Number` is an integer, represent it as i64 if possible. Returns None otherwise.
    pub fn as_i64(&self) -> Option<i64> {
        match self.n {
            N::PosInt(n) => i64::try_from(n).ok(),
            N::NegInt(n) => Some(n),
            N::Float(_) => None,
        }
    }

    /// If the `Number` is an integer, represent it as u64 if possible. Returns None otherwise.
    pub fn as_u64(&self) -> Option<u64> {
        match self.n {
            N::PosInt(n) => Some(n),
            N::NegInt(_) | N::Float(_) => None,
        }
    }

    /// Converts the `Number` to an i64.
    ///
    /// Floats are truncated toward zero. Values outside of the i64 range saturate at
    /// `i64::MIN`/`i64::MAX`.
    ///
    /// ```
    /// use dynjson::Number;
    ///
    /// assert_eq!(Number::from_f64(-2.9).unwrap().to_i64(), -2);
    /// assert_eq!(Number::from(u64::MAX).to_i64(), i64::MAX);
    /// ```
    pub fn to_i64(&self) -> i64 {
        match self.n {
            N::PosInt(n) => i64::try_from(n).unwrap_or(i64::MAX),
            N::NegInt(n) => n,
            // Float to int casts saturate and truncate toward zero.
            N::Float(f) => f as i64,
        }
    }

    /// Returns true if the `Number` is a float.
    pub fn is_f64(&self) -> bool {
        matches!(self.n, N::Float(_))
    }

    /// Returns true if the `Number` is an integer between `i64::MIN` and `i64::MAX`.
    pub fn is_i64(&self) -> bool {
        match self.n {
            N::PosInt(v) => v <= i64::MAX as u64,
            N::NegInt(_) => true,
            N::Float(_) => false,
        }
    }

    /// Returns true if the `Number` is an integer between zero and `u64::MAX`.
    pub fn is_u64(&self) -> bool {
        matches!(self.n, N::PosInt(_))
    }

    /// Converts a finite `f64` to a `Number`. Infinite or NaN values are not JSON
    /// numbers.
    pub fn from_f64(f: f64) -> Option<Number> {
        if f.is_finite() {
            Some(Number { n: N::Float(f) })
        } else {
            None
        }
    }
}

macro_rules! impl_from_unsigned {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(u: $ty) -> Self {
                    Number { n: N::PosInt(u as u64) }
                }
            }
        )*
    };
}

macro_rules! impl_from_signed {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(i: $ty) -> Self {
                    let n = if i < 0 {
                        N::NegInt(i as i64)
                    } else {
                        N::PosInt(i as u64)
                    };

                    Number { n }
                }
            }
        )*
    };
}

impl_from_unsigned!(u8, u16, u32, u64, usize);
impl_from_signed!(i8, i16, i32, i64, isize);

impl From<&JsonNumber> for Number {
    fn from(num: &JsonNumber) -> Self {
        if let Some(pos) = num.as_u64() {
            pos.into()
        } else if let Some(neg) = num.as_i64() {
            neg.into()
        } else {
            // Without `arbitrary_precision` serde_json only produces finite floats.
            Number {
                n: N::Float(num.as_f64().unwrap_or_default()),
            }
        }
    }
}

impl From<Number> for JsonNumber {
    fn from(num: Number) -> Self {
        match num.n {
            N::PosInt(i) => i.into(),
            N::NegInt(i) => i.into(),
            N::Float(f) => JsonNumber::from_f64(f).unwrap_or_else(|| 0.into()),
        }
    }
}

impl Display for Number {
    /// Formats the number the way the JSON writer does, so floats keep their fractional part.
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&JsonNumber::from(*self), formatter)
    }
}

impl Debug for Number {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        let mut debug = formatter.debug_tuple("Number");

        match self.n {
            N::PosInt(i) => debug.field(&i),
            N::NegInt(i) => debug.field(&i),
            N::Float(f) => debug.field(&f),
        };

        debug.finish()
    }
}

impl Serialize for Number {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.n {
            N::PosInt(i) => serializer.serialize_u64(i),
            N::NegInt(i) => serializer.serialize_i64(i),
            N::Float(f) => serializer.serialize_f64(f),
        }
    }
}
