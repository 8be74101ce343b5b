//! Extended integer values
//!
//! Elements are 64-bit integers plus the two infinity sentinels. Aggregates
//! are kept in `i128` so that summing a full structure of `i64` extremes is
//! exact.

use std::cmp::Ordering;
use std::fmt;

/// An integer or one of the infinity sentinels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Value {
    NegInfinity,
    Finite(i128),
    PosInfinity,
    /// Result of `inf + -inf`; absorbing for every operation.
    Undefined,
}

impl Value {
    pub const ZERO: Value = Value::Finite(0);

    /// Parse a value token: an `i64`, or `inf`/`infinity` with an optional sign.
    ///
    /// Returns `None` for anything else; the caller reports the token.
    pub fn parse_token(token: &str) -> Option<Value> {
        match token.to_ascii_lowercase().as_str() {
            "inf" | "infinity" | "+inf" | "+infinity" => Some(Value::PosInfinity),
            "-inf" | "-infinity" => Some(Value::NegInfinity),
            _ => token.parse::<i64>().ok().map(Value::from),
        }
    }

    /// Exact addition with extended-real rules.
    pub fn add(self, other: Value) -> Value {
        match (self, other) {
            (Value::Undefined, _) | (_, Value::Undefined) => Value::Undefined,
            (Value::PosInfinity, Value::NegInfinity) | (Value::NegInfinity, Value::PosInfinity) => {
                Value::Undefined
            }
            (Value::PosInfinity, _) | (_, Value::PosInfinity) => Value::PosInfinity,
            (Value::NegInfinity, _) | (_, Value::NegInfinity) => Value::NegInfinity,
            (Value::Finite(a), Value::Finite(b)) => match a.checked_add(b) {
                Some(sum) => Value::Finite(sum),
                None if a > 0 => Value::PosInfinity,
                None => Value::NegInfinity,
            },
        }
    }

    pub fn min(self, other: Value) -> Value {
        match self.compare(other) {
            None => Value::Undefined,
            Some(Ordering::Greater) => other,
            Some(_) => self,
        }
    }

    pub fn max(self, other: Value) -> Value {
        match self.compare(other) {
            None => Value::Undefined,
            Some(Ordering::Less) => other,
            Some(_) => self,
        }
    }

    /// Whether a finite value fits the element range.
    pub fn fits_element(&self) -> bool {
        match self {
            Value::Finite(v) => i64::try_from(*v).is_ok(),
            _ => true,
        }
    }

    fn compare(self, other: Value) -> Option<Ordering> {
        fn rank(v: Value) -> Option<(u8, i128)> {
            match v {
                Value::NegInfinity => Some((0, 0)),
                Value::Finite(n) => Some((1, n)),
                Value::PosInfinity => Some((2, 0)),
                Value::Undefined => None,
            }
        }
        Some(rank(self)?.cmp(&rank(other)?))
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::ZERO
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Finite(i128::from(v))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::NegInfinity => f.write_str("-inf"),
            Value::Finite(v) => write!(f, "{}", v),
            Value::PosInfinity => f.write_str("inf"),
            Value::Undefined => f.write_str("nan"),
        }
    }
}
