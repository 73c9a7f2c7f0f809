// ============================================================================
// Numeric Variant Trait
// Closed set of representations the math functions dispatch over
// ============================================================================

use super::errors::{MathError, MathResult};
use crate::numeric::{integer_math, FixedPoint, NumericError};
use std::fmt;

pub(super) mod sealed {
    pub trait Sealed {}
}

/// The three supported numeric representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericKind {
    FixedPoint,
    Integer,
    Float,
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericKind::FixedPoint => write!(f, "fixed-point"),
            NumericKind::Integer => write!(f, "integer"),
            NumericKind::Float => write!(f, "float"),
        }
    }
}

/// Per-variant policy behind the generic math functions.
///
/// Sealed: implemented for `FixedPoint`, the native signed integers, the
/// native floats and the runtime [`Value`](super::Value) union. Integer and
/// float implementations delegate to native operations; the fixed-point
/// implementation layers IEEE-style handling of infinities and NaN on top
/// of the scaled-integer backend.
pub trait Numeric: sealed::Sealed + Copy + PartialOrd + fmt::Debug + fmt::Display {
    /// Which representation this value uses.
    fn kind(&self) -> NumericKind;

    /// False for infinities and NaN. Integers are always finite.
    fn is_finite(&self) -> bool;

    fn is_nan(&self) -> bool;

    /// Greatest of `first` and `rest`.
    fn maximum_of(first: Self, rest: &[Self]) -> MathResult<Self>;

    /// Least of `first` and `rest`.
    fn minimum_of(first: Self, rest: &[Self]) -> MathResult<Self>;

    /// `|self - other| <= abs_tol` for finite operands, without overflow.
    fn within(self, other: Self, abs_tol: Self) -> MathResult<bool>;

    /// e^self in this representation.
    fn checked_exp(self) -> MathResult<Self>;

    /// Square root in this representation; negative input is a domain error.
    fn checked_sqrt(self) -> MathResult<Self>;
}

pub(super) fn domain_error(operation: &'static str, value: impl fmt::Display) -> MathError {
    MathError::Domain {
        operation,
        value: value.to_string(),
    }
}

// ============================================================================
// Fixed-Point
// ============================================================================

impl<const D: u8> sealed::Sealed for FixedPoint<D> {}

impl<const D: u8> Numeric for FixedPoint<D> {
    fn kind(&self) -> NumericKind {
        NumericKind::FixedPoint
    }

    fn is_finite(&self) -> bool {
        FixedPoint::<D>::is_finite(*self)
    }

    fn is_nan(&self) -> bool {
        FixedPoint::<D>::is_nan(*self)
    }

    // Any NaN wins immediately. Ties keep the latest value in scan order.
    fn maximum_of(first: Self, rest: &[Self]) -> MathResult<Self> {
        let mut current = Self::NEG_INFINITY;
        for &arg in std::iter::once(&first).chain(rest) {
            if arg.is_nan() {
                return Ok(arg);
            }
            if arg >= current {
                current = arg;
            }
        }
        Ok(current)
    }

    fn minimum_of(first: Self, rest: &[Self]) -> MathResult<Self> {
        let mut current = Self::INFINITY;
        for &arg in std::iter::once(&first).chain(rest) {
            if arg.is_nan() {
                return Ok(arg);
            }
            if arg <= current {
                current = arg;
            }
        }
        Ok(current)
    }

    fn within(self, other: Self, abs_tol: Self) -> MathResult<bool> {
        match (self.raw_value(), other.raw_value(), abs_tol.raw_value()) {
            (Some(a), Some(b), Some(tol)) => Ok(tol >= 0 && a.abs_diff(b) <= tol.unsigned_abs()),
            _ => Err(NumericError::NotFinite.into()),
        }
    }

    fn checked_exp(self) -> MathResult<Self> {
        match self.raw_value() {
            // e^nan = nan, e^inf = inf, e^-inf is reported as -inf
            None => Ok(self),
            Some(raw) => Ok(Self::from_raw(integer_math::exp::<D>(raw)?)),
        }
    }

    fn checked_sqrt(self) -> MathResult<Self> {
        if self.is_negative() {
            return Err(domain_error("sqrt", self));
        }
        match self.raw_value() {
            None => Ok(self),
            Some(raw) => Ok(Self::from_raw(integer_math::sqrt::<D>(raw)?)),
        }
    }
}

// ============================================================================
// Native Integers
// ============================================================================

macro_rules! impl_numeric_int {
    ($($t:ty),*) => {$(
        impl sealed::Sealed for $t {}

        impl Numeric for $t {
            fn kind(&self) -> NumericKind {
                NumericKind::Integer
            }

            fn is_finite(&self) -> bool {
                true
            }

            fn is_nan(&self) -> bool {
                false
            }

            fn maximum_of(first: Self, rest: &[Self]) -> MathResult<Self> {
                Ok(rest.iter().copied().fold(first, Ord::max))
            }

            fn minimum_of(first: Self, rest: &[Self]) -> MathResult<Self> {
                Ok(rest.iter().copied().fold(first, Ord::min))
            }

            fn within(self, other: Self, abs_tol: Self) -> MathResult<bool> {
                Ok(abs_tol >= 0 && self.abs_diff(other) <= abs_tol.unsigned_abs())
            }

            // Truncates the float result like a native float-to-int cast.
            fn checked_exp(self) -> MathResult<Self> {
                let result = (self as f64).exp().trunc();
                if result < <$t>::MAX as f64 {
                    Ok(result as $t)
                } else {
                    Err(NumericError::Overflow.into())
                }
            }

            fn checked_sqrt(self) -> MathResult<Self> {
                self.checked_isqrt().ok_or_else(|| domain_error("sqrt", self))
            }
        }
    )*};
}

impl_numeric_int!(i32, i64, i128);

// ============================================================================
// Native Floats
// ============================================================================

macro_rules! impl_numeric_float {
    ($($t:ty),*) => {$(
        impl sealed::Sealed for $t {}

        impl Numeric for $t {
            fn kind(&self) -> NumericKind {
                NumericKind::Float
            }

            fn is_finite(&self) -> bool {
                <$t>::is_finite(*self)
            }

            fn is_nan(&self) -> bool {
                <$t>::is_nan(*self)
            }

            fn maximum_of(first: Self, rest: &[Self]) -> MathResult<Self> {
                Ok(rest.iter().copied().fold(first, <$t>::max))
            }

            fn minimum_of(first: Self, rest: &[Self]) -> MathResult<Self> {
                Ok(rest.iter().copied().fold(first, <$t>::min))
            }

            fn within(self, other: Self, abs_tol: Self) -> MathResult<bool> {
                Ok((self - other).abs() <= abs_tol)
            }

            fn checked_exp(self) -> MathResult<Self> {
                Ok(<$t>::exp(self))
            }

            fn checked_sqrt(self) -> MathResult<Self> {
                if self < 0.0 {
                    Err(domain_error("sqrt", self))
                } else {
                    Ok(<$t>::sqrt(self))
                }
            }
        }
    )*};
}

impl_numeric_float!(f32, f64);
