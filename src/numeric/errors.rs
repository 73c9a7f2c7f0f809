// ============================================================================
// Numeric Errors
// Error types for fixed-point construction and scaled-integer arithmetic
// ============================================================================

use std::fmt;

/// Failures of `FixedPoint` construction, checked arithmetic and the
/// scaled-integer backend.
///
/// Non-finite results are not errors here: the IEEE-style operators produce
/// infinities and NaN directly. These variants only come from the `checked_*`
/// paths and conversions, where a finite answer was required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Finite result above `FixedPoint::MAX`, or a backend result past `i128`
    Overflow,
    /// Finite result below `FixedPoint::MIN`
    Underflow,
    /// Finite dividend over a finite zero
    DivisionByZero,
    /// Digits past the configured number of decimal places
    PrecisionLoss,
    /// Malformed decimal text, or an argument outside a constructor's range
    InvalidInput,
    /// Infinity or NaN where only a finite value converts
    NotFinite,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            NumericError::Overflow => "fixed-point overflow: result above the largest finite value",
            NumericError::Underflow => "fixed-point underflow: result below the smallest finite value",
            NumericError::DivisionByZero => "fixed-point division by zero",
            NumericError::PrecisionLoss => "too many decimal places for this fixed-point precision",
            NumericError::InvalidInput => "malformed fixed-point input",
            NumericError::NotFinite => "expected a finite fixed-point value, found inf or nan",
        };
        f.write_str(message)
    }
}

impl std::error::Error for NumericError {}

/// `Result` over [`NumericError`].
pub type NumericResult<T> = Result<T, NumericError>;
