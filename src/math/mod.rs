// ============================================================================
// Math Module
// Order and elementary functions generic over numeric representations
// ============================================================================
//
// This module provides:
// - clip, minimum, maximum, isclose, exp, sqrt: generic over `Numeric`
// - Numeric: sealed trait implemented by FixedPoint, native ints and floats
// - Value: runtime tagged union of the three representations
// - MathError: failures reported by the functions above
//
// Design principles:
// - Fixed-point NaN is dominant in min/max and never equal to anything
// - Infinities compare as absolute extremes
// - Floats and integers keep their native semantics
// - Pure functions: no state, no logging, errors returned immediately

mod errors;
mod functions;
mod numeric;
mod value;

pub use errors::{MathError, MathResult};
pub use functions::{clip, exp, isclose, maximum, minimum, sqrt};
pub use numeric::{Numeric, NumericKind};
pub use value::Value;
