//! Numeric leaves.

use serde::{Serialize, Serializer};

/// A numeric document value.
///
/// Property lists distinguish integers from reals, and integers may use the
/// full unsigned 64-bit range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i64),
    Unsigned(u64),
    Real(f64),
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::Integer(n)
    }
}

impl From<u64> for Number {
    fn from(n: u64) -> Self {
        Number::Unsigned(n)
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Number::Real(n)
    }
}

impl Serialize for Number {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match *self {
            Number::Integer(n) => serializer.serialize_i64(n),
            Number::Unsigned(n) => serializer.serialize_u64(n),
            // JSON has no representation for NaN or infinities.
            Number::Real(n) if n.is_finite() => serializer.serialize_f64(n),
            Number::Real(_) => serializer.serialize_unit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_finite_serializes_as_null() {
        let json = serde_json::to_string(&Number::Real(f64::NAN)).unwrap();
        assert_eq!(json, "null");

        let json = serde_json::to_string(&Number::Real(2.5)).unwrap();
        assert_eq!(json, "2.5");
    }
}
