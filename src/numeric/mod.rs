// ============================================================================
// Numeric Module
// Fixed-point decimal with explicit non-finite states
// ============================================================================
//
// This module provides:
// - FixedPoint<D>: scaled i128 decimal plus +inf, -inf and NaN states
// - integer_math: exp / sqrt / mul_div on raw scaled integers
// - NumericError: Error types for construction and arithmetic
// - Fixed18 type alias for the common 18-decimal precision
//
// Design principles:
// - Non-finite states are enum variants, never sentinel integers
// - Checked arithmetic returns Result; operators saturate IEEE-style
// - Compile-time configurable precision via const generics

mod errors;
mod fixed_point;
pub mod integer_math;

pub use errors::{NumericError, NumericResult};
pub use fixed_point::{Category, Fixed18, FixedPoint};
