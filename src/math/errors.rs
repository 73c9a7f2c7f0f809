// ============================================================================
// Math Errors
// Failures surfaced by the generic numeric dispatch layer
// ============================================================================

use super::numeric::NumericKind;
use crate::numeric::NumericError;
use std::fmt;

/// Errors returned by `clip`, `minimum`, `maximum`, `isclose`, `exp` and `sqrt`.
///
/// Every failure is reported to the caller as-is; nothing here is retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    /// `clip` called with `low > high`
    InvalidRange { low: String, high: String },
    /// `isclose` called with an infinite or NaN tolerance
    InvalidTolerance { abs_tol: String },
    /// Input outside the operation's domain (e.g. sqrt of a negative)
    Domain {
        operation: &'static str,
        value: String,
    },
    /// `minimum`/`maximum` called with no arguments
    EmptyArguments { operation: &'static str },
    /// A `Value` call mixed numeric variants
    VariantMismatch {
        expected: NumericKind,
        found: NumericKind,
    },
    /// Failure inside the fixed-point type or its integer backend
    Numeric(NumericError),
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::InvalidRange { low, high } => {
                write!(f, "invalid range: low={} must be <= high={}", low, high)
            },
            MathError::InvalidTolerance { abs_tol } => {
                write!(f, "invalid tolerance: abs_tol={} must be finite", abs_tol)
            },
            MathError::Domain { operation, value } => {
                write!(f, "math domain error: {}({}) is undefined", operation, value)
            },
            MathError::EmptyArguments { operation } => {
                write!(f, "{} expected at least one argument", operation)
            },
            MathError::VariantMismatch { expected, found } => write!(
                f,
                "variant mismatch: expected {} argument, found {}",
                expected, found
            ),
            MathError::Numeric(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for MathError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MathError::Numeric(err) => Some(err),
            _ => None,
        }
    }
}

impl From<NumericError> for MathError {
    fn from(err: NumericError) -> Self {
        MathError::Numeric(err)
    }
}

/// Result type alias for math operations
pub type MathResult<T> = Result<T, MathError>;
