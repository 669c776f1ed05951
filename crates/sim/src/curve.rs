//! The two-parameter base curve and its algebraic inverse.
//!
//! `a / (max_utilization - u) + b` is the floating curve stripped of any
//! demand skew. Dashboards sample it to draw utilization charts, and the
//! inverse maps a quoted APR back to the utilization that produces it
//! (useful when positioning a marker on those charts). Both helpers share
//! the WAD arithmetic and error taxonomy of the full engine.

use alloy_primitives::I256;

use crate::error::MathError;
use crate::math::{div_wad, mul_wad};

/// The plain asymptotic curve: `a / (max_utilization - u) + b`.
///
/// Fails with [`MathError::DivisionByZero`] at `u == max_utilization`;
/// callers sampling for charts skip the undefined tail above it.
pub fn base_rate(a: I256, b: I256, max_utilization: I256, u: I256) -> Result<I256, MathError> {
    let slope = div_wad(
        a,
        max_utilization.checked_sub(u).ok_or(MathError::Overflow)?,
    )?;
    slope.checked_add(b).ok_or(MathError::Overflow)
}

/// Inverse of [`base_rate`]: the utilization at which the curve quotes `apr`.
///
/// Algebraically `|((apr - b)·max_utilization - a) / (apr - b)|`; the
/// absolute value folds the symmetric branch below the intercept back into
/// the positive domain. Fails with [`MathError::DivisionByZero`] at
/// `apr == b`, where the curve never arrives. Round-trips with
/// [`base_rate`] within a few units of WAD rounding error.
pub fn inverse_base_rate(
    a: I256,
    b: I256,
    max_utilization: I256,
    apr: I256,
) -> Result<I256, MathError> {
    let num = mul_wad(apr, max_utilization)?
        .checked_sub(mul_wad(b, max_utilization)?)
        .and_then(|v| v.checked_sub(a))
        .ok_or(MathError::Overflow)?;
    let u = div_wad(num, b.checked_sub(apr).ok_or(MathError::Overflow)?)?;
    if u.is_negative() {
        u.checked_neg().ok_or(MathError::Overflow)
    } else {
        Ok(u)
    }
}
