// ============================================================================
// Fixed-Point Decimal
// Scaled-integer decimal with IEEE-style infinities and NaN
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::integer_math::{decimal_to_raw, mul_div, pow10};
use rust_decimal::{Decimal, RoundingStrategy};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Fixed-point decimal number with compile-time precision.
///
/// Finite values are stored as `value × 10^DECIMALS` in an i128. Alongside
/// the finite state the type carries positive infinity, negative infinity
/// and NaN as explicit states, so a large scaled value is never mistaken
/// for an infinity.
///
/// # Type Parameter
/// - `DECIMALS`: Number of decimal places (0-18). Default is 18.
///
/// # Value Range
/// With DECIMALS=18 (default):
/// - Finite range: about ±1.7e20
/// - Precision: 0.000000000000000001
///
/// # Semantics
/// - NaN is unordered and unequal to everything, itself included.
/// - Infinities order as absolute extremes.
/// - Operators (`+ - * /`) follow IEEE rules: finite overflow saturates to
///   the signed infinity, `x / 0` is a signed infinity, and `0 / 0`,
///   `inf - inf`, `0 * inf` are NaN. The `checked_*` methods report finite
///   overflow and division by zero as errors instead.
///
/// # Example
/// ```
/// use fixed_point_math::numeric::{Fixed18, NumericError};
///
/// let a: Fixed18 = "2.5".parse()?;
/// let b = Fixed18::from_integer(4);
/// assert_eq!((a * b).to_string(), "10.000000000000000000");
/// assert!((Fixed18::INFINITY - Fixed18::INFINITY).is_nan());
/// # Ok::<(), NumericError>(())
/// ```
#[derive(Clone, Copy)]
pub struct FixedPoint<const DECIMALS: u8 = 18>(Repr);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Repr {
    Finite(i128),
    PosInfinity,
    NegInfinity,
    Nan,
}

/// Classification of a [`FixedPoint`] value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Finite,
    PositiveInfinity,
    NegativeInfinity,
    Nan,
}

// ============================================================================
// Constants
// ============================================================================

impl<const D: u8> FixedPoint<D> {
    /// The scale factor (10^DECIMALS)
    pub const SCALE: i128 = {
        assert!(D <= 18, "FixedPoint supports at most 18 decimal places");
        pow10(D)
    };

    /// Zero value
    pub const ZERO: Self = Self(Repr::Finite(0));

    /// One (1.0)
    pub const ONE: Self = Self(Repr::Finite(Self::SCALE));

    /// Largest finite value
    pub const MAX: Self = Self(Repr::Finite(i128::MAX));

    /// Smallest finite value
    pub const MIN: Self = Self(Repr::Finite(i128::MIN));

    /// Positive infinity
    pub const INFINITY: Self = Self(Repr::PosInfinity);

    /// Negative infinity
    pub const NEG_INFINITY: Self = Self(Repr::NegInfinity);

    /// Not a number
    pub const NAN: Self = Self(Repr::Nan);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from raw internal representation (`value × 10^DECIMALS`).
    #[inline]
    pub const fn from_raw(raw: i128) -> Self {
        Self(Repr::Finite(raw))
    }

    /// Create from an integer value.
    ///
    /// Every i64 fits once scaled, so this cannot fail.
    #[inline]
    pub const fn from_integer(value: i64) -> Self {
        Self(Repr::Finite(value as i128 * Self::SCALE))
    }

    /// Create from integer and fractional parts.
    ///
    /// # Arguments
    /// - `integer`: The integer part (can be negative)
    /// - `fraction`: The fractional part (must be < SCALE, always positive)
    ///
    /// # Example
    /// ```
    /// use fixed_point_math::numeric::FixedPoint;
    ///
    /// // 123.456 with 4 decimals
    /// let x = FixedPoint::<4>::from_parts(123, 4_560)?;
    /// assert_eq!(x.to_string(), "123.4560");
    /// # Ok::<(), fixed_point_math::numeric::NumericError>(())
    /// ```
    #[inline]
    pub fn from_parts(integer: i128, fraction: u64) -> NumericResult<Self> {
        if i128::from(fraction) >= Self::SCALE {
            return Err(NumericError::InvalidInput);
        }

        let int_scaled = integer
            .checked_mul(Self::SCALE)
            .ok_or(NumericError::Overflow)?;

        let frac_signed = if integer < 0 {
            -i128::from(fraction)
        } else {
            i128::from(fraction)
        };

        int_scaled
            .checked_add(frac_signed)
            .map(Self::from_raw)
            .ok_or(NumericError::Overflow)
    }

    /// Create from an `f64`.
    ///
    /// Infinities and NaN map to the matching state. Finite values are
    /// truncated toward zero to DECIMALS places.
    ///
    /// # Errors
    /// Returns `Overflow` if the value is too large to represent.
    pub fn from_f64(value: f64) -> NumericResult<Self> {
        use rust_decimal::prelude::FromPrimitive;

        if value.is_nan() {
            return Ok(Self::NAN);
        }
        if value.is_infinite() {
            return Ok(Self::infinity(value.is_sign_positive()));
        }
        let d = Decimal::from_f64(value).ok_or(NumericError::Overflow)?;
        decimal_to_raw::<D>(d).map(Self::from_raw)
    }

    /// Returns the infinity with the requested sign.
    #[inline]
    pub const fn infinity(positive: bool) -> Self {
        if positive {
            Self::INFINITY
        } else {
            Self::NEG_INFINITY
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the raw internal value (scaled), or `None` for non-finite values.
    #[inline]
    pub const fn raw_value(self) -> Option<i128> {
        match self.0 {
            Repr::Finite(raw) => Some(raw),
            _ => None,
        }
    }

    /// Classify this value.
    #[inline]
    pub const fn category(self) -> Category {
        match self.0 {
            Repr::Finite(_) => Category::Finite,
            Repr::PosInfinity => Category::PositiveInfinity,
            Repr::NegInfinity => Category::NegativeInfinity,
            Repr::Nan => Category::Nan,
        }
    }

    /// Get the integer part (truncated toward zero).
    #[inline]
    pub const fn integer_part(self) -> Option<i128> {
        match self.0 {
            Repr::Finite(raw) => Some(raw / Self::SCALE),
            _ => None,
        }
    }

    /// Get the fractional part as a positive value.
    #[inline]
    pub const fn fractional_part(self) -> Option<u64> {
        match self.0 {
            Repr::Finite(raw) => Some((raw % Self::SCALE).unsigned_abs() as u64),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_finite(self) -> bool {
        matches!(self.0, Repr::Finite(_))
    }

    #[inline]
    pub const fn is_nan(self) -> bool {
        matches!(self.0, Repr::Nan)
    }

    #[inline]
    pub const fn is_infinite(self) -> bool {
        matches!(self.0, Repr::PosInfinity | Repr::NegInfinity)
    }

    /// Check if value is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        matches!(self.0, Repr::Finite(0))
    }

    /// Check if value is positive (including positive infinity).
    #[inline]
    pub const fn is_positive(self) -> bool {
        match self.0 {
            Repr::Finite(raw) => raw > 0,
            Repr::PosInfinity => true,
            _ => false,
        }
    }

    /// Check if value is negative (including negative infinity).
    #[inline]
    pub const fn is_negative(self) -> bool {
        match self.0 {
            Repr::Finite(raw) => raw < 0,
            Repr::NegInfinity => true,
            _ => false,
        }
    }

    /// Absolute value. `|MIN|` saturates to positive infinity.
    #[inline]
    pub fn abs(self) -> Self {
        match self.0 {
            Repr::Finite(raw) => raw.checked_abs().map_or(Self::INFINITY, Self::from_raw),
            Repr::PosInfinity | Repr::NegInfinity => Self::INFINITY,
            Repr::Nan => Self::NAN,
        }
    }

    /// Absolute value.
    ///
    /// # Errors
    /// Returns `Overflow` for `MIN`.
    #[inline]
    pub fn checked_abs(self) -> NumericResult<Self> {
        match self.0 {
            Repr::Finite(raw) => raw
                .checked_abs()
                .map(Self::from_raw)
                .ok_or(NumericError::Overflow),
            _ => Ok(self.abs()),
        }
    }

    /// Convert to the nearest `f64`.
    pub fn to_f64(self) -> f64 {
        match self.0 {
            Repr::Finite(raw) => raw as f64 / Self::SCALE as f64,
            Repr::PosInfinity => f64::INFINITY,
            Repr::NegInfinity => f64::NEG_INFINITY,
            Repr::Nan => f64::NAN,
        }
    }

    /// -1, 0 or 1; NaN reports 0.
    const fn sign(self) -> i8 {
        match self.0 {
            Repr::Finite(raw) => raw.signum() as i8,
            Repr::PosInfinity => 1,
            Repr::NegInfinity => -1,
            Repr::Nan => 0,
        }
    }

    /// Ordering key: infinities bracket every finite value, NaN has none.
    const fn rank(self) -> Option<(u8, i128)> {
        match self.0 {
            Repr::NegInfinity => Some((0, 0)),
            Repr::Finite(raw) => Some((1, raw)),
            Repr::PosInfinity => Some((2, 0)),
            Repr::Nan => None,
        }
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition.
    ///
    /// Non-finite operands follow IEEE rules (`inf + -inf` is NaN).
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if a finite result is out of range.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        match (self.0, rhs.0) {
            (Repr::Finite(a), Repr::Finite(b)) => {
                a.checked_add(b).map(Self::from_raw).ok_or(if b > 0 {
                    NumericError::Overflow
                } else {
                    NumericError::Underflow
                })
            },
            (Repr::Nan, _) | (_, Repr::Nan) => Ok(Self::NAN),
            (Repr::PosInfinity, Repr::NegInfinity) | (Repr::NegInfinity, Repr::PosInfinity) => {
                Ok(Self::NAN)
            },
            (Repr::PosInfinity, _) | (_, Repr::PosInfinity) => Ok(Self::INFINITY),
            (Repr::NegInfinity, _) | (_, Repr::NegInfinity) => Ok(Self::NEG_INFINITY),
        }
    }

    /// Checked subtraction.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if a finite result is out of range.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        match (self.0, rhs.0) {
            (Repr::Finite(a), Repr::Finite(b)) => {
                a.checked_sub(b).map(Self::from_raw).ok_or(if b < 0 {
                    NumericError::Overflow
                } else {
                    NumericError::Underflow
                })
            },
            (Repr::Nan, _) | (_, Repr::Nan) => Ok(Self::NAN),
            (Repr::PosInfinity, Repr::PosInfinity) | (Repr::NegInfinity, Repr::NegInfinity) => {
                Ok(Self::NAN)
            },
            (Repr::PosInfinity, _) | (_, Repr::NegInfinity) => Ok(Self::INFINITY),
            (Repr::NegInfinity, _) | (_, Repr::PosInfinity) => Ok(Self::NEG_INFINITY),
        }
    }

    /// Checked multiplication, truncated toward zero.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if a finite result is out of range.
    #[inline]
    pub fn checked_mul(self, rhs: Self) -> NumericResult<Self> {
        match (self.0, rhs.0) {
            (Repr::Finite(a), Repr::Finite(b)) => mul_div(a, b, Self::SCALE)
                .map(Self::from_raw)
                .ok_or(if (a < 0) == (b < 0) {
                    NumericError::Overflow
                } else {
                    NumericError::Underflow
                }),
            (Repr::Nan, _) | (_, Repr::Nan) => Ok(Self::NAN),
            _ => Ok(match self.sign() * rhs.sign() {
                0 => Self::NAN,
                s => Self::infinity(s > 0),
            }),
        }
    }

    /// Checked division, truncated toward zero.
    ///
    /// # Errors
    /// Returns `DivisionByZero` for a finite dividend over zero, and
    /// `Overflow` or `Underflow` if a finite result is out of range.
    #[inline]
    pub fn checked_div(self, rhs: Self) -> NumericResult<Self> {
        match (self.0, rhs.0) {
            (Repr::Nan, _) | (_, Repr::Nan) => Ok(Self::NAN),
            (Repr::Finite(_), Repr::Finite(0)) => Err(NumericError::DivisionByZero),
            (Repr::Finite(a), Repr::Finite(b)) => mul_div(a, Self::SCALE, b)
                .map(Self::from_raw)
                .ok_or(if (a < 0) == (b < 0) {
                    NumericError::Overflow
                } else {
                    NumericError::Underflow
                }),
            (Repr::Finite(_), _) => Ok(Self::ZERO),
            (_, Repr::Finite(b)) => Ok(Self::infinity((self.sign() > 0) == (b >= 0))),
            _ => Ok(Self::NAN),
        }
    }

    /// Maps a checked result onto IEEE saturation.
    #[inline]
    fn saturate(result: NumericResult<Self>) -> Self {
        match result {
            Ok(value) => value,
            Err(NumericError::Overflow) => Self::INFINITY,
            Err(NumericError::Underflow) => Self::NEG_INFINITY,
            Err(_) => Self::NAN,
        }
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<const D: u8> Default for FixedPoint<D> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const D: u8> From<i64> for FixedPoint<D> {
    #[inline]
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl<const D: u8> PartialEq for FixedPoint<D> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        !self.is_nan() && self.0 == other.0
    }
}

impl<const D: u8> PartialOrd for FixedPoint<D> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.rank()?.cmp(&other.rank()?))
    }
}

impl<const D: u8> Neg for FixedPoint<D> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        match self.0 {
            Repr::Finite(raw) => raw.checked_neg().map_or(Self::INFINITY, Self::from_raw),
            Repr::PosInfinity => Self::NEG_INFINITY,
            Repr::NegInfinity => Self::INFINITY,
            Repr::Nan => Self::NAN,
        }
    }
}

impl<const D: u8> Add for FixedPoint<D> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::saturate(self.checked_add(rhs))
    }
}

impl<const D: u8> Sub for FixedPoint<D> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::saturate(self.checked_sub(rhs))
    }
}

impl<const D: u8> Mul for FixedPoint<D> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self::saturate(self.checked_mul(rhs))
    }
}

impl<const D: u8> Div for FixedPoint<D> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        match self.checked_div(rhs) {
            Err(NumericError::DivisionByZero) => match self.sign() {
                0 => Self::NAN,
                s => Self::infinity(s > 0),
            },
            result => Self::saturate(result),
        }
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl<const D: u8> fmt::Debug for FixedPoint<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Repr::Finite(raw) => write!(f, "FixedPoint<{}>({}, raw={})", D, self, raw),
            _ => write!(f, "FixedPoint<{}>({})", D, self),
        }
    }
}

impl<const D: u8> fmt::Display for FixedPoint<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let raw = match self.0 {
            Repr::Finite(raw) => raw,
            Repr::PosInfinity => return write!(f, "inf"),
            Repr::NegInfinity => return write!(f, "-inf"),
            Repr::Nan => return write!(f, "nan"),
        };
        let int_part = raw / Self::SCALE;
        let frac_part = (raw % Self::SCALE).unsigned_abs();

        if D == 0 {
            write!(f, "{}", int_part)
        } else if raw < 0 && int_part == 0 {
            // Handle -0.xxx case
            write!(f, "-0.{:0>width$}", frac_part, width = D as usize)
        } else {
            write!(f, "{}.{:0>width$}", int_part, frac_part, width = D as usize)
        }
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl<const D: u8> FixedPoint<D> {
    /// Convert from rust_decimal::Decimal.
    ///
    /// # Errors
    /// - `PrecisionLoss` if the decimal has significant digits past DECIMALS
    /// - `Overflow` if the value is too large
    pub fn from_decimal(d: Decimal) -> NumericResult<Self> {
        let truncated = d.round_dp_with_strategy(u32::from(D), RoundingStrategy::ToZero);
        if truncated != d {
            return Err(NumericError::PrecisionLoss);
        }
        decimal_to_raw::<D>(d).map(Self::from_raw)
    }

    /// Convert to rust_decimal::Decimal.
    ///
    /// # Errors
    /// - `NotFinite` for infinities and NaN
    /// - `Overflow` if the raw value exceeds Decimal's 96-bit mantissa
    pub fn to_decimal(self) -> NumericResult<Decimal> {
        let raw = self.raw_value().ok_or(NumericError::NotFinite)?;
        Decimal::try_from_i128_with_scale(raw, u32::from(D)).map_err(|_| NumericError::Overflow)
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl<const D: u8> std::str::FromStr for FixedPoint<D> {
    type Err = NumericError;

    /// Parse from a decimal string.
    ///
    /// # Examples
    /// - "123" -> 123.0
    /// - "-0.001" -> -0.001
    /// - "inf", "-Infinity", "NaN" -> the matching non-finite state
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(NumericError::InvalidInput);
        }

        let (is_negative, s) = if let Some(rest) = s.strip_prefix('-') {
            (true, rest)
        } else {
            (false, s.strip_prefix('+').unwrap_or(s))
        };

        if s.eq_ignore_ascii_case("inf") || s.eq_ignore_ascii_case("infinity") {
            return Ok(Self::infinity(!is_negative));
        }
        if s.eq_ignore_ascii_case("nan") {
            return Ok(Self::NAN);
        }

        let (int_str, frac_str) = match s.split_once('.') {
            Some((int_str, frac_str)) => (int_str, frac_str),
            None => (s, ""),
        };
        if int_str.is_empty() && frac_str.is_empty() {
            return Err(NumericError::InvalidInput);
        }
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(int_str) || !all_digits(frac_str) {
            return Err(NumericError::InvalidInput);
        }

        // Signed parse so the integer part of MIN stays in range
        let int_val: i128 = if int_str.is_empty() {
            0
        } else if is_negative {
            format!("-{}", int_str)
                .parse()
                .map_err(|_| NumericError::Overflow)?
        } else {
            int_str.parse().map_err(|_| NumericError::Overflow)?
        };

        let frac_val: u64 = if frac_str.is_empty() {
            0
        } else if frac_str.len() > D as usize {
            return Err(NumericError::PrecisionLoss);
        } else {
            // Pad with zeros to reach DECIMALS length
            let padded = format!("{:0<width$}", frac_str, width = D as usize);
            padded.parse().map_err(|_| NumericError::InvalidInput)?
        };

        // from_parts takes its sign from the integer part, so -0.x needs help
        if is_negative && int_val == 0 {
            return Ok(-Self::from_parts(0, frac_val)?);
        }
        Self::from_parts(int_val, frac_val)
    }
}

// ============================================================================
// Serde (string form, so infinities and NaN survive a round trip)
// ============================================================================

#[cfg(feature = "serde")]
impl<const D: u8> serde::Serialize for FixedPoint<D> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de, const D: u8> serde::Deserialize<'de> for FixedPoint<D> {
    fn deserialize<De: serde::Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Type Aliases for Common Use Cases
// ============================================================================

/// Fixed-point value with 18 decimal places
pub type Fixed18 = FixedPoint<18>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    type FP = FixedPoint<18>;

    fn fp(s: &str) -> FP {
        s.parse().unwrap()
    }

    #[test]
    fn test_constants() {
        assert_eq!(FP::SCALE, 1_000_000_000_000_000_000);
        assert_eq!(FP::ZERO.raw_value(), Some(0));
        assert_eq!(FP::ONE.raw_value(), Some(1_000_000_000_000_000_000));
        assert_eq!(FP::INFINITY.raw_value(), None);
        assert_eq!(FP::NAN.category(), Category::Nan);
    }

    #[test]
    fn test_from_integer() {
        let x = FP::from_integer(100);
        assert_eq!(x.raw_value(), Some(100_000_000_000_000_000_000));
        assert_eq!(x.integer_part(), Some(100));
        assert_eq!(x.fractional_part(), Some(0));
    }

    #[test]
    fn test_from_parts() {
        let x = FP::from_parts(123, 456_000_000_000_000_000).unwrap();
        assert_eq!(x.integer_part(), Some(123));
        assert_eq!(x.fractional_part(), Some(456_000_000_000_000_000));

        let y = FP::from_parts(-5, 500_000_000_000_000_000).unwrap();
        assert_eq!(y.integer_part(), Some(-5));
        assert!(y.is_negative());
    }

    #[test]
    fn test_from_parts_invalid() {
        let result = FP::from_parts(1, 1_000_000_000_000_000_000);
        assert_eq!(result, Err(NumericError::InvalidInput));
    }

    #[test]
    fn test_from_f64() {
        assert_eq!(FP::from_f64(1.5).unwrap(), fp("1.5"));
        assert_eq!(FP::from_f64(-2.25).unwrap(), fp("-2.25"));
        assert_eq!(FP::from_f64(1000.0).unwrap(), FP::from_integer(1000));
        assert!(FP::from_f64(f64::NAN).unwrap().is_nan());
        assert_eq!(FP::from_f64(f64::INFINITY).unwrap(), FP::INFINITY);
        assert_eq!(FP::from_f64(f64::NEG_INFINITY).unwrap(), FP::NEG_INFINITY);
    }

    #[test]
    fn test_to_f64() {
        assert_eq!(fp("2.5").to_f64(), 2.5);
        assert_eq!(FP::NEG_INFINITY.to_f64(), f64::NEG_INFINITY);
        assert!(FP::NAN.to_f64().is_nan());
    }

    #[test]
    fn test_classification() {
        assert!(FP::ONE.is_finite());
        assert!(!FP::INFINITY.is_finite());
        assert!(FP::NEG_INFINITY.is_infinite());
        assert!(FP::NAN.is_nan());
        assert!(!FP::NAN.is_finite());
        assert!(FP::INFINITY.is_positive());
        assert!(FP::NEG_INFINITY.is_negative());
        assert!(!FP::NAN.is_positive() && !FP::NAN.is_negative());
        assert!(FP::ZERO.is_zero());
    }

    #[test]
    fn test_nan_is_unordered() {
        assert_ne!(FP::NAN, FP::NAN);
        assert!(FP::NAN.partial_cmp(&FP::ONE).is_none());
        assert!(!(FP::NAN >= FP::NEG_INFINITY));
        assert!(!(FP::NAN <= FP::INFINITY));
    }

    #[test]
    fn test_infinity_ordering() {
        assert!(FP::INFINITY > FP::MAX);
        assert!(FP::NEG_INFINITY < FP::MIN);
        assert!(FP::NEG_INFINITY < FP::INFINITY);
        assert_eq!(FP::INFINITY, FP::INFINITY);
        assert_ne!(FP::INFINITY, FP::NEG_INFINITY);
    }

    #[test]
    fn test_comparison() {
        let a = FP::from_integer(100);
        let b = FP::from_integer(50);

        assert!(a > b);
        assert!(b < a);
        assert_eq!(a, a);
        assert_ne!(a, b);
    }

    #[test]
    fn test_checked_add() {
        let c = FP::from_integer(100).checked_add(FP::from_integer(50)).unwrap();
        assert_eq!(c.integer_part(), Some(150));

        assert_eq!(FP::MAX.checked_add(FP::ONE), Err(NumericError::Overflow));
        assert_eq!(FP::MIN.checked_add(-FP::ONE), Err(NumericError::Underflow));
    }

    #[test]
    fn test_checked_sub() {
        let a = FP::from_integer(100);
        let b = FP::from_integer(30);
        assert_eq!(a.checked_sub(b).unwrap().integer_part(), Some(70));
        assert_eq!(b.checked_sub(a).unwrap().integer_part(), Some(-70));
        assert_eq!(FP::MIN.checked_sub(FP::ONE), Err(NumericError::Underflow));
    }

    #[test]
    fn test_checked_mul() {
        assert_eq!(fp("2.5").checked_mul(FP::from_integer(4)).unwrap(), fp("10"));
        assert_eq!(fp("1.5").checked_mul(fp("1.5")).unwrap(), fp("2.25"));
        assert_eq!(fp("-1.5").checked_mul(fp("1.5")).unwrap(), fp("-2.25"));
        assert_eq!(fp("100").checked_mul(fp("100")).unwrap(), fp("10000"));
    }

    #[test]
    fn test_checked_mul_truncates() {
        let third = FP::from_raw(333_333_333_333_333_333);
        let result = third.checked_mul(FP::from_integer(3)).unwrap();
        assert_eq!(result.raw_value(), Some(999_999_999_999_999_999));
    }

    #[test]
    fn test_checked_mul_overflow() {
        let large = FP::from_integer(1_000_000_000_000);
        assert_eq!(large.checked_mul(large), Err(NumericError::Overflow));
        assert_eq!(large.checked_mul(-large), Err(NumericError::Underflow));
    }

    #[test]
    fn test_checked_div() {
        assert_eq!(FP::ONE.checked_div(FP::from_integer(4)).unwrap(), fp("0.25"));
        assert_eq!(
            FP::ONE.checked_div(FP::from_integer(3)).unwrap().raw_value(),
            Some(333_333_333_333_333_333)
        );
        assert_eq!(FP::ONE.checked_div(FP::ZERO), Err(NumericError::DivisionByZero));
        assert_eq!(FP::ONE.checked_div(FP::INFINITY).unwrap(), FP::ZERO);
    }

    #[test]
    fn test_non_finite_arithmetic() {
        assert_eq!(FP::INFINITY + FP::ONE, FP::INFINITY);
        assert_eq!(FP::NEG_INFINITY - FP::ONE, FP::NEG_INFINITY);
        assert!((FP::INFINITY + FP::NEG_INFINITY).is_nan());
        assert!((FP::INFINITY - FP::INFINITY).is_nan());
        assert_eq!(FP::INFINITY - FP::NEG_INFINITY, FP::INFINITY);
        assert_eq!(FP::ONE - FP::INFINITY, FP::NEG_INFINITY);
        assert!((FP::NAN + FP::ONE).is_nan());
        assert_eq!(FP::INFINITY * -FP::ONE, FP::NEG_INFINITY);
        assert!((FP::INFINITY * FP::ZERO).is_nan());
        assert!((FP::INFINITY / FP::INFINITY).is_nan());
        assert_eq!(FP::NEG_INFINITY / FP::from_integer(2), FP::NEG_INFINITY);
    }

    #[test]
    fn test_operators_saturate() {
        assert_eq!(FP::MAX + FP::ONE, FP::INFINITY);
        assert_eq!(FP::MIN - FP::ONE, FP::NEG_INFINITY);
        assert_eq!(FP::ONE / FP::ZERO, FP::INFINITY);
        assert_eq!(-FP::ONE / FP::ZERO, FP::NEG_INFINITY);
        assert!((FP::ZERO / FP::ZERO).is_nan());
    }

    #[test]
    fn test_negation() {
        let x = FP::from_integer(100);
        assert_eq!((-x).integer_part(), Some(-100));
        assert_eq!(-(-x), x);
        assert_eq!(-FP::INFINITY, FP::NEG_INFINITY);
        assert!((-FP::NAN).is_nan());
        assert_eq!(-FP::MIN, FP::INFINITY);
    }

    #[test]
    fn test_abs() {
        assert_eq!(FP::from_integer(-100).abs(), FP::from_integer(100));
        assert_eq!(FP::NEG_INFINITY.abs(), FP::INFINITY);
        assert!(FP::NAN.abs().is_nan());
        assert_eq!(FP::MIN.checked_abs(), Err(NumericError::Overflow));
    }

    #[test]
    fn test_display() {
        assert_eq!(fp("123.456").to_string(), "123.456000000000000000");
        assert_eq!(FP::ZERO.to_string(), "0.000000000000000000");
        assert_eq!(fp("-0.1").to_string(), "-0.100000000000000000");
        assert_eq!(FP::INFINITY.to_string(), "inf");
        assert_eq!(FP::NEG_INFINITY.to_string(), "-inf");
        assert_eq!(FP::NAN.to_string(), "nan");
    }

    #[test]
    fn test_debug() {
        assert_eq!(
            format!("{:?}", FixedPoint::<2>::from_integer(3)),
            "FixedPoint<2>(3.00, raw=300)"
        );
        assert_eq!(format!("{:?}", FP::NAN), "FixedPoint<18>(nan)");
    }

    #[test]
    fn test_from_str() {
        let x = fp("123.456");
        assert_eq!(x.integer_part(), Some(123));
        assert_eq!(x.fractional_part(), Some(456_000_000_000_000_000));

        let y = fp("-0.001");
        assert!(y.is_negative());
        assert_eq!(y.fractional_part(), Some(1_000_000_000_000_000));

        assert_eq!(fp("+42"), FP::from_integer(42));
        assert_eq!(fp(".5"), fp("0.5"));
        assert_eq!(fp("-0"), FP::ZERO);
        assert_eq!(fp("-12.75").raw_value(), Some(-12_750_000_000_000_000_000));
    }

    #[test]
    fn test_from_str_extremes_round_trip() {
        assert_eq!(FP::MIN.to_string().parse::<FP>(), Ok(FP::MIN));
        assert_eq!(FP::MAX.to_string().parse::<FP>(), Ok(FP::MAX));
        assert_eq!(
            FixedPoint::<4>::MIN.to_string().parse::<FixedPoint<4>>(),
            Ok(FixedPoint::<4>::MIN)
        );
        assert_eq!(
            FixedPoint::<0>::MIN.to_string().parse::<FixedPoint<0>>(),
            Ok(FixedPoint::<0>::MIN)
        );
    }

    #[test]
    fn test_from_str_non_finite() {
        assert_eq!(fp("inf"), FP::INFINITY);
        assert_eq!(fp("+Infinity"), FP::INFINITY);
        assert_eq!(fp("-inf"), FP::NEG_INFINITY);
        assert!(fp("nan").is_nan());
        assert!(fp("NaN").is_nan());
    }

    #[test]
    fn test_from_str_invalid() {
        let parse = |s: &str| s.parse::<FP>();
        assert_eq!(parse("not_a_number"), Err(NumericError::InvalidInput));
        assert_eq!(parse(""), Err(NumericError::InvalidInput));
        assert_eq!(parse("."), Err(NumericError::InvalidInput));
        assert_eq!(parse("--5"), Err(NumericError::InvalidInput));
        assert_eq!(parse("1.-5"), Err(NumericError::InvalidInput));
        // 19 decimals
        assert_eq!(
            parse("1.1234567890123456789"),
            Err(NumericError::PrecisionLoss)
        );
    }

    #[test]
    fn test_from_decimal() {
        let d = Decimal::new(12345, 2); // 123.45
        let x = FP::from_decimal(d).unwrap();
        assert_eq!(x, fp("123.45"));

        let too_precise = Decimal::new(1, 20);
        assert_eq!(FP::from_decimal(too_precise), Err(NumericError::PrecisionLoss));
    }

    #[test]
    fn test_to_decimal() {
        let x = FixedPoint::<9>::from_parts(123, 456_000_000).unwrap();
        assert_eq!(x.to_decimal().unwrap().to_string(), "123.456000000");
        assert_eq!(FP::NAN.to_decimal(), Err(NumericError::NotFinite));
    }

    #[test]
    fn test_different_decimal_places() {
        type FP4 = FixedPoint<4>;

        assert_eq!(FP4::SCALE, 10_000);
        let x = FP4::from_parts(123, 4567).unwrap();
        assert_eq!(x.to_string(), "123.4567");
        assert_eq!(FixedPoint::<0>::from_integer(7).to_string(), "7");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_string_form() {
        let json = serde_json::to_string(&fp("1.5")).unwrap();
        assert_eq!(json, "\"1.500000000000000000\"");
        let back: FP = serde_json::from_str("\"-inf\"").unwrap();
        assert_eq!(back, FP::NEG_INFINITY);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_extremes_round_trip() {
        for x in [FP::MIN, FP::MAX, FP::INFINITY] {
            let json = serde_json::to_string(&x).unwrap();
            let back: FP = serde_json::from_str(&json).unwrap();
            assert_eq!(back, x);
        }
        let json = serde_json::to_string(&FP::NAN).unwrap();
        assert!(serde_json::from_str::<FP>(&json).unwrap().is_nan());
    }
}
