// ============================================================================
// Fixed-Point Math Library
// Order and elementary functions over fixed-point, integer and float values
// ============================================================================

//! # Fixed-Point Math
//!
//! `clip`, `minimum`, `maximum`, `isclose`, `exp` and `sqrt`, generic over
//! three numeric representations:
//!
//! - **Fixed-point**: [`FixedPoint`](numeric::FixedPoint), a scaled `i128`
//!   decimal that also carries positive infinity, negative infinity and NaN
//! - **Integer**: `i32`, `i64`, `i128`
//! - **Float**: `f32`, `f64`
//!
//! Floats and integers keep their native behavior. Fixed-point values get
//! IEEE-style treatment of non-finite values layered on top: NaN poisons
//! `minimum`/`maximum`, infinities compare as absolute extremes, and `exp`
//! and `sqrt` map non-finite input the way their float counterparts do.
//!
//! ## Example
//!
//! ```rust
//! use fixed_point_math::prelude::*;
//!
//! let low = Fixed18::from_integer(-1);
//! let high = Fixed18::ONE;
//!
//! // NaN survives clipping
//! assert!(clip(Fixed18::NAN, low, high)?.is_nan());
//!
//! // Native floats pass straight through
//! assert_eq!(minimum(&[1.0, 3.0, 0.5])?, 0.5);
//!
//! // Absolute tolerance only
//! let a: Fixed18 = "1.0".parse()?;
//! let b: Fixed18 = "1.00001".parse()?;
//! assert!(isclose(a, b, "0.00001".parse()?)?);
//!
//! // e^1 at 18 decimals
//! assert_eq!(exp(Fixed18::ONE)?.to_string(), "2.718281828459045235");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod math;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::math::{
        clip, exp, isclose, maximum, minimum, sqrt, MathError, MathResult, Numeric, NumericKind,
        Value,
    };
    pub use crate::numeric::{Category, Fixed18, FixedPoint, NumericError, NumericResult};
}
