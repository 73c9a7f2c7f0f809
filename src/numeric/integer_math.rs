// ============================================================================
// Scaled-Integer Math
// Elementary functions on raw `value × 10^DECIMALS` integers
// ============================================================================
//
// Every function here takes and returns raw scaled integers, the internal
// representation of `FixedPoint`. Non-finite values never reach this module;
// the callers in `FixedPoint` and `math` filter them out first.

use super::errors::{NumericError, NumericResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// ln(2) to 28 decimal places, the full precision of `Decimal`.
const LN2_MANTISSA: i128 = 6_931_471_805_599_453_094_172_321_215;
const LN2_SCALE: u32 = 28;

/// Largest `k` for which `e^r · 2^k` can still fit a raw `i128`.
const MAX_SHIFT: u64 = 127;

/// Powers of two up to this are applied in `Decimal`; the rest in `i128`.
const DECIMAL_SHIFT: u64 = 63;

/// Upper bound on Taylor terms for `e^r` with `|r| <= ln(2) / 2`.
/// The series reaches `Decimal`'s resolution after roughly 25 terms.
const TAYLOR_TERMS: i64 = 40;

/// Compute 10^n at compile time
pub const fn pow10(n: u8) -> i128 {
    let mut result: i128 = 1;
    let mut i = 0;
    while i < n {
        result *= 10;
        i += 1;
    }
    result
}

/// Computes `a * b / d`, truncated toward zero.
///
/// Falls back to splitting both factors by `d` when the plain product
/// would overflow `i128`, so the result is available whenever it fits.
///
/// Returns `None` if `d` is zero or the result does not fit.
pub fn mul_div(a: i128, b: i128, d: i128) -> Option<i128> {
    if d == 0 {
        return None;
    }
    if let Some(product) = a.checked_mul(b) {
        return product.checked_div(d);
    }

    // a = q*d + r, b = bq*d + br  =>  a*b/d = q*b + r*bq + r*br/d
    let (q, r) = (a / d, a % d);
    let (bq, br) = (b / d, b % d);
    q.checked_mul(b)?
        .checked_add(r.checked_mul(bq)?)?
        .checked_add(r.checked_mul(br)?.checked_div(d)?)
}

/// Computes `e^x` where `x` is scaled by `10^D`, truncated toward zero.
///
/// The argument is reduced to `x = k·ln2 + r` with `|r| <= ln2 / 2`, `e^r`
/// is summed as a Taylor series in 28-digit `Decimal` arithmetic and the
/// result is scaled by `2^k`. Shifts past `2^63` finish on the raw integer,
/// so low precisions reach the full `i128` range with a relative error
/// near `Decimal`'s 28-digit resolution.
///
/// # Errors
/// Returns `Overflow` if the result does not fit the scaled `i128`.
/// Results smaller than one unit in the last place are returned as zero.
pub fn exp<const D: u8>(x: i128) -> NumericResult<i128> {
    let scale = pow10(D);

    // e^x < 10^-D once x < -(D + 1) * 2.31, since ln(10) < 2.31.
    let floor = -((D as i128 + 1) * 231 * scale / 100);
    if x < floor {
        tracing::trace!(raw = %x, decimals = D, "exp underflows to zero");
        return Ok(0);
    }

    let value = Decimal::try_from_i128_with_scale(x, u32::from(D)).map_err(|_| {
        tracing::trace!(raw = %x, decimals = D, "exp argument out of range");
        NumericError::Overflow
    })?;
    let ln2 = Decimal::from_i128_with_scale(LN2_MANTISSA, LN2_SCALE);

    let k = value
        .checked_div(ln2)
        .and_then(|q| q.round().to_i64())
        .ok_or(NumericError::Overflow)?;
    let shift = k.unsigned_abs();
    if shift > MAX_SHIFT {
        tracing::trace!(raw = %x, shift = k, "exp overflows");
        return Err(NumericError::Overflow);
    }

    let r = ln2
        .checked_mul(Decimal::from(k))
        .and_then(|k_ln2| value.checked_sub(k_ln2))
        .ok_or(NumericError::Overflow)?;

    let mut sum = Decimal::ONE;
    let mut term = Decimal::ONE;
    for n in 1..=TAYLOR_TERMS {
        term = term
            .checked_mul(r)
            .and_then(|t| t.checked_div(Decimal::from(n)))
            .ok_or(NumericError::Overflow)?;
        if term.is_zero() {
            break;
        }
        sum = sum.checked_add(term).ok_or(NumericError::Overflow)?;
    }

    if k < 0 && shift > DECIMAL_SHIFT {
        // e^r · 2^-64 < 10^-18
        return Ok(0);
    }
    let decimal_shift = shift.min(DECIMAL_SHIFT);
    let pow2 = Decimal::from(1u64 << decimal_shift);
    let result = if k >= 0 {
        sum.checked_mul(pow2)
    } else {
        sum.checked_div(pow2)
    }
    .ok_or(NumericError::Overflow)?;

    let raw = decimal_to_raw::<D>(result)?;
    match shift - decimal_shift {
        0 => Ok(raw),
        rest => raw.checked_mul(1i128 << rest).ok_or_else(|| {
            tracing::trace!(raw = %x, shift = k, "exp overflows");
            NumericError::Overflow
        }),
    }
}

/// Computes `sqrt(x)` where `x` is scaled by `10^D`, rounded down.
///
/// `sqrt(x / 10^D) · 10^D == sqrt(x · 10^D)`, so the raw value is widened by
/// the largest power of ten that still fits `u128` and the remaining factor
/// is applied to the root. Values up to about `3.4e20 / 10^(D-18)` are exact.
///
/// # Errors
/// Returns `InvalidInput` for negative input.
pub fn sqrt<const D: u8>(x: i128) -> NumericResult<i128> {
    if x < 0 {
        return Err(NumericError::InvalidInput);
    }
    let x = x.unsigned_abs();
    let decimals = u32::from(D);

    let root = (0..=decimals)
        .rev()
        .filter(|s| (decimals - s) % 2 == 0)
        .find_map(|s| {
            x.checked_mul(10u128.pow(s))
                .map(|widened| widened.isqrt() * 10u128.pow((decimals - s) / 2))
        })
        .unwrap_or_else(|| (x / 10).isqrt() * 10u128.pow((decimals + 1) / 2));

    i128::try_from(root).map_err(|_| NumericError::Overflow)
}

/// Truncates a `Decimal` to `D` places and returns its scaled mantissa.
pub(crate) fn decimal_to_raw<const D: u8>(value: Decimal) -> NumericResult<i128> {
    let truncated = value.round_dp_with_strategy(u32::from(D), RoundingStrategy::ToZero);
    let missing = u32::from(D)
        .checked_sub(truncated.scale())
        .ok_or(NumericError::PrecisionLoss)?;
    truncated
        .mantissa()
        .checked_mul(pow10(missing as u8))
        .ok_or(NumericError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCALE: i128 = pow10(18);

    #[test]
    fn test_pow10() {
        assert_eq!(pow10(0), 1);
        assert_eq!(pow10(9), 1_000_000_000);
        assert_eq!(pow10(18), 1_000_000_000_000_000_000);
    }

    #[test]
    fn test_mul_div_small() {
        assert_eq!(mul_div(6, 7, 2), Some(21));
        assert_eq!(mul_div(-6, 7, 4), Some(-10));
        assert_eq!(mul_div(1, 1, 0), None);
    }

    #[test]
    fn test_mul_div_wide_product() {
        // 100.0 * 100.0 overflows the raw product but not the result
        let hundred = 100 * SCALE;
        assert_eq!(mul_div(hundred, hundred, SCALE), Some(10_000 * SCALE));
        assert_eq!(mul_div(-hundred, hundred, SCALE), Some(-10_000 * SCALE));
    }

    #[test]
    fn test_mul_div_result_overflow() {
        assert_eq!(mul_div(i128::MAX, 2, 1), None);
    }

    #[test]
    fn test_exp_zero() {
        assert_eq!(exp::<18>(0), Ok(SCALE));
    }

    #[test]
    fn test_exp_one() {
        assert_eq!(exp::<18>(SCALE), Ok(2_718_281_828_459_045_235));
    }

    #[test]
    fn test_exp_negative_one() {
        assert_eq!(exp::<18>(-SCALE), Ok(367_879_441_171_442_321));
    }

    #[test]
    fn test_exp_other_precision() {
        assert_eq!(exp::<4>(10_000), Ok(27_182));
    }

    #[test]
    fn test_exp_full_range_at_low_precision() {
        // e^87 ~ 6.08e37 needs a shift beyond 2^63
        let raw = exp::<0>(87).unwrap();
        let expected = 87f64.exp();
        assert!(((raw as f64) / expected - 1.0).abs() < 1e-12);

        let raw = exp::<4>(70 * pow10(4)).unwrap();
        let expected = 70f64.exp() * 1e4;
        assert!(((raw as f64) / expected - 1.0).abs() < 1e-12);

        // e^89 ~ 4.5e38 exceeds i128
        assert_eq!(exp::<0>(89), Err(NumericError::Overflow));
    }

    #[test]
    fn test_exp_underflow_to_zero() {
        assert_eq!(exp::<18>(-50 * SCALE), Ok(0));
    }

    #[test]
    fn test_exp_overflow() {
        // e^50 ~ 5.2e21 exceeds i128 at 18 decimals
        assert_eq!(exp::<18>(50 * SCALE), Err(NumericError::Overflow));
        assert_eq!(exp::<18>(i128::MAX), Err(NumericError::Overflow));
    }

    #[test]
    fn test_sqrt_exact() {
        assert_eq!(sqrt::<18>(SCALE), Ok(SCALE));
        assert_eq!(sqrt::<18>(4 * SCALE), Ok(2 * SCALE));
        assert_eq!(sqrt::<18>(0), Ok(0));
    }

    #[test]
    fn test_sqrt_rounds_down() {
        assert_eq!(sqrt::<18>(5 * SCALE), Ok(2_236_067_977_499_789_696));
    }

    #[test]
    fn test_sqrt_odd_decimals() {
        // sqrt(2.0) at 3 decimals
        assert_eq!(sqrt::<3>(2_000), Ok(1_414));
    }

    #[test]
    fn test_sqrt_large_value() {
        // 10^18 as a value; widening by 10^18 no longer fits u128
        let x = pow10(18) * SCALE;
        assert_eq!(sqrt::<18>(x), Ok(pow10(9) * SCALE));
    }

    #[test]
    fn test_sqrt_negative() {
        assert_eq!(sqrt::<18>(-1), Err(NumericError::InvalidInput));
    }
}
