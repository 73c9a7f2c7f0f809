// ============================================================================
// Generic Math Functions
// clip / minimum / maximum / isclose / exp / sqrt over every Numeric variant
// ============================================================================

use super::errors::{MathError, MathResult};
use super::numeric::Numeric;

/// Clip `x` to `[low, high]`, inclusive.
///
/// A NaN `x` stays NaN for every variant. Infinite bounds act as true
/// extremes.
///
/// # Errors
/// Returns `InvalidRange` if `low > high`.
///
/// # Example
/// ```
/// use fixed_point_math::math::clip;
/// use fixed_point_math::numeric::Fixed18;
///
/// let x = clip(Fixed18::NAN, -Fixed18::ONE, Fixed18::ONE)?;
/// assert!(x.is_nan());
/// assert_eq!(clip(3, -3, -1)?, -1);
/// # Ok::<(), fixed_point_math::math::MathError>(())
/// ```
pub fn clip<T: Numeric>(x: T, low: T, high: T) -> MathResult<T> {
    if low > high {
        return Err(MathError::InvalidRange {
            low: low.to_string(),
            high: high.to_string(),
        });
    }
    // Native float min/max skip NaN operands.
    if x.is_nan() {
        return Ok(x);
    }
    minimum(&[maximum(&[x, low])?, high])
}

/// Least of `args`.
///
/// For fixed-point values any NaN argument is returned as the result. Integers
/// and floats use their native `min`.
///
/// # Errors
/// Returns `EmptyArguments` if `args` is empty.
pub fn minimum<T: Numeric>(args: &[T]) -> MathResult<T> {
    let (&first, rest) = args
        .split_first()
        .ok_or(MathError::EmptyArguments { operation: "minimum" })?;
    T::minimum_of(first, rest)
}

/// Greatest of `args`.
///
/// For fixed-point values any NaN argument is returned as the result. Integers
/// and floats use their native `max`.
///
/// # Errors
/// Returns `EmptyArguments` if `args` is empty.
pub fn maximum<T: Numeric>(args: &[T]) -> MathResult<T> {
    let (&first, rest) = args
        .split_first()
        .ok_or(MathError::EmptyArguments { operation: "maximum" })?;
    T::maximum_of(first, rest)
}

/// Whether `|a - b| <= abs_tol`.
///
/// No relative tolerance: fixed-point accuracy does not depend on scale.
/// If either operand is infinite or NaN the answer is plain `a == b`, so NaN
/// is never close to anything and equal infinities are always close.
///
/// # Errors
/// Returns `InvalidTolerance` if both operands are finite and `abs_tol` is not.
///
/// # Example
/// ```
/// use fixed_point_math::math::isclose;
/// use fixed_point_math::numeric::Fixed18;
///
/// let a: Fixed18 = "1.0".parse()?;
/// let b: Fixed18 = "1.00001".parse()?;
/// assert!(isclose(a, b, "0.00001".parse()?)?);
/// assert!(!isclose(a, b, "0.000001".parse()?)?);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn isclose<T: Numeric>(a: T, b: T, abs_tol: T) -> MathResult<bool> {
    if !a.is_finite() || !b.is_finite() {
        return Ok(a == b);
    }
    if !abs_tol.is_finite() {
        return Err(MathError::InvalidTolerance {
            abs_tol: abs_tol.to_string(),
        });
    }
    a.within(b, abs_tol)
}

/// e^x.
///
/// Fixed-point infinities and NaN are returned unchanged; finite values go
/// through the scaled-integer backend. Integers truncate the native float
/// result.
///
/// # Errors
/// Returns `Numeric(Overflow)` if the result does not fit the type.
pub fn exp<T: Numeric>(x: T) -> MathResult<T> {
    x.checked_exp()
}

/// Square root of `x`.
///
/// NaN maps to NaN and positive infinity to itself.
///
/// # Errors
/// Returns `Domain` for negative input, negative infinity included.
pub fn sqrt<T: Numeric>(x: T) -> MathResult<T> {
    x.checked_sqrt()
}
