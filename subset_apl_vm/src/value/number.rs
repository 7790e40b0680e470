//! Scalar numbers.
//!
//! Big integers that fit in an `i64` are shrunk to `Int`, and rationals with
//! a unit denominator become integers. Only `Number::Int` is usable as an
//! index; a `BigInt` never fits an axis and is rejected as a non-integer
//! index.

use std::fmt;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Number {
    /// Machine integer
    Int(i64),
    /// Integer too large for `i64`
    BigInt(BigInt),
    /// Exact rational in lowest terms, `den > 1`
    Rational { num: BigInt, den: BigInt },
    /// Floating point
    Float(f64),
}

impl Number {
    /// Build an integer, shrinking to `Int` when it fits.
    pub fn big(value: BigInt) -> Self {
        match value.to_i64() {
            Some(v) => Number::Int(v),
            None => Number::BigInt(value),
        }
    }

    /// Build `num/den` in lowest terms. Returns `None` for a zero denominator.
    pub fn rational(num: impl Into<BigInt>, den: impl Into<BigInt>) -> Option<Self> {
        let mut num = num.into();
        let mut den = den.into();
        if den.is_zero() {
            return None;
        }
        if den.is_negative() {
            num = -num;
            den = -den;
        }
        let gcd = num.gcd(&den);
        if !gcd.is_zero() && !gcd.is_one() {
            num /= &gcd;
            den /= &gcd;
        }
        if den.is_one() {
            return Some(Number::big(num));
        }
        Some(Number::Rational { num, den })
    }

    /// Machine integer value, if this is an `Int`.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Number::Int(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Number::Int(v)
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Number::Float(v)
    }
}

impl From<BigInt> for Number {
    fn from(v: BigInt) -> Self {
        Number::big(v)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(v) => write!(f, "{}", v),
            Number::BigInt(v) => write!(f, "{}", v),
            Number::Rational { num, den } => write!(f, "{}/{}", num, den),
            Number::Float(v) => write!(f, "{}", v),
        }
    }
}
