// ============================================================================
// Runtime Numeric Value
// Tagged union over the three representations for dynamically typed callers
// ============================================================================

use super::errors::{MathError, MathResult};
use super::numeric::{sealed, Numeric, NumericKind};
use crate::numeric::FixedPoint;
use std::cmp::Ordering;
use std::fmt;

/// A number in one of the three supported representations.
///
/// The generic functions in [`math`](super) accept `Value` like any other
/// [`Numeric`] type. All arguments of one call must share a variant; a mixed
/// call fails with [`MathError::VariantMismatch`] once the operation has to
/// combine them. Values of different variants are unordered and unequal.
#[derive(Debug, Clone, Copy)]
pub enum Value<const D: u8 = 18> {
    Fixed(FixedPoint<D>),
    Integer(i64),
    Float(f64),
}

impl<const D: u8> Value<D> {
    pub fn as_fixed(self) -> Option<FixedPoint<D>> {
        match self {
            Value::Fixed(x) => Some(x),
            _ => None,
        }
    }

    pub fn as_integer(self) -> Option<i64> {
        match self {
            Value::Integer(x) => Some(x),
            _ => None,
        }
    }

    pub fn as_float(self) -> Option<f64> {
        match self {
            Value::Float(x) => Some(x),
            _ => None,
        }
    }

    /// First variant mismatch against `self`, as an error.
    fn mismatch(self, others: &[Self]) -> MathError {
        let expected = self.kind();
        let found = others
            .iter()
            .map(Numeric::kind)
            .find(|kind| *kind != expected)
            .unwrap_or(expected);
        MathError::VariantMismatch { expected, found }
    }
}

/// Unwraps every value with `extract`, or reports the first foreign variant.
fn unwrap_all<T, const D: u8>(
    expected: NumericKind,
    values: &[Value<D>],
    extract: fn(Value<D>) -> Option<T>,
) -> MathResult<Vec<T>> {
    values
        .iter()
        .map(|&value| {
            extract(value).ok_or(MathError::VariantMismatch {
                expected,
                found: value.kind(),
            })
        })
        .collect()
}

impl<const D: u8> From<FixedPoint<D>> for Value<D> {
    fn from(value: FixedPoint<D>) -> Self {
        Value::Fixed(value)
    }
}

impl<const D: u8> From<i64> for Value<D> {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl<const D: u8> From<f64> for Value<D> {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl<const D: u8> PartialEq for Value<D> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Fixed(a), Value::Fixed(b)) => a == b,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            _ => false,
        }
    }
}

impl<const D: u8> PartialOrd for Value<D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Value::Fixed(a), Value::Fixed(b)) => a.partial_cmp(b),
            (Value::Integer(a), Value::Integer(b)) => a.partial_cmp(b),
            (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

impl<const D: u8> fmt::Display for Value<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Fixed(x) => write!(f, "{}", x),
            Value::Integer(x) => write!(f, "{}", x),
            Value::Float(x) => write!(f, "{}", x),
        }
    }
}

impl<const D: u8> sealed::Sealed for Value<D> {}

impl<const D: u8> Numeric for Value<D> {
    fn kind(&self) -> NumericKind {
        match self {
            Value::Fixed(_) => NumericKind::FixedPoint,
            Value::Integer(_) => NumericKind::Integer,
            Value::Float(_) => NumericKind::Float,
        }
    }

    fn is_finite(&self) -> bool {
        match self {
            Value::Fixed(x) => x.is_finite(),
            Value::Integer(_) => true,
            Value::Float(x) => x.is_finite(),
        }
    }

    fn is_nan(&self) -> bool {
        match self {
            Value::Fixed(x) => x.is_nan(),
            Value::Integer(_) => false,
            Value::Float(x) => x.is_nan(),
        }
    }

    fn maximum_of(first: Self, rest: &[Self]) -> MathResult<Self> {
        let expected = first.kind();
        match first {
            Value::Fixed(x) => {
                let rest = unwrap_all(expected, rest, Value::as_fixed)?;
                FixedPoint::maximum_of(x, &rest).map(Value::Fixed)
            },
            Value::Integer(x) => {
                let rest = unwrap_all(expected, rest, Value::as_integer)?;
                i64::maximum_of(x, &rest).map(Value::Integer)
            },
            Value::Float(x) => {
                let rest = unwrap_all(expected, rest, Value::as_float)?;
                f64::maximum_of(x, &rest).map(Value::Float)
            },
        }
    }

    fn minimum_of(first: Self, rest: &[Self]) -> MathResult<Self> {
        let expected = first.kind();
        match first {
            Value::Fixed(x) => {
                let rest = unwrap_all(expected, rest, Value::as_fixed)?;
                FixedPoint::minimum_of(x, &rest).map(Value::Fixed)
            },
            Value::Integer(x) => {
                let rest = unwrap_all(expected, rest, Value::as_integer)?;
                i64::minimum_of(x, &rest).map(Value::Integer)
            },
            Value::Float(x) => {
                let rest = unwrap_all(expected, rest, Value::as_float)?;
                f64::minimum_of(x, &rest).map(Value::Float)
            },
        }
    }

    fn within(self, other: Self, abs_tol: Self) -> MathResult<bool> {
        match (self, other, abs_tol) {
            (Value::Fixed(a), Value::Fixed(b), Value::Fixed(tol)) => a.within(b, tol),
            (Value::Integer(a), Value::Integer(b), Value::Integer(tol)) => a.within(b, tol),
            (Value::Float(a), Value::Float(b), Value::Float(tol)) => a.within(b, tol),
            _ => Err(self.mismatch(&[other, abs_tol])),
        }
    }

    fn checked_exp(self) -> MathResult<Self> {
        match self {
            Value::Fixed(x) => x.checked_exp().map(Value::Fixed),
            Value::Integer(x) => x.checked_exp().map(Value::Integer),
            Value::Float(x) => x.checked_exp().map(Value::Float),
        }
    }

    fn checked_sqrt(self) -> MathResult<Self> {
        match self {
            Value::Fixed(x) => x.checked_sqrt().map(Value::Fixed),
            Value::Integer(x) => x.checked_sqrt().map(Value::Integer),
            Value::Float(x) => x.checked_sqrt().map(Value::Float),
        }
    }
}
