//! Interest rate model for Exactly floating and fixed pools.
//!
//! This module computes the borrow rates the protocol quotes when previewing
//! an operation, from pool utilization figures and a set of calibration
//! constants read off-chain by the caller.
//!
//! # How the model works
//!
//! ## 1. The floating curve
//!
//! The instantaneous variable borrow rate starts from an asymptotic base
//! curve and is skewed by how much of the protocol's global liquidity has
//! been drawn down:
//!
//! ```text
//! base = a / (max_utilization - u_floating) + b
//!
//! If u_global == 1:          rate = max_rate            // hard ceiling
//! If u_global == 0:          rate = base                // nothing borrowed
//! If u_global >= u_floating: rate = base * e^(-growth_speed * ln(1 - sig * u_global))
//! Otherwise:                 rate = base
//! ```
//!
//! where `sig` is a logistic factor comparing the logit of `u_global` with
//! the logit of `natural_utilization`, scaled by `sigmoid_speed`. The curve
//! is asymptotic at `max_utilization` and capped at `max_rate`.
//!
//! ## 2. The fixed curve
//!
//! Borrowing at a specific maturity layers a term premium on the floating
//! base. Demand concentration per maturity slot feeds a factor `z` (an
//! alpha-weighted blend of the normalized demand and its square root), and
//! time to maturity decays the premium:
//!
//! ```text
//! rate = base * (1 + e^(maturity_speed * ln(ttm/tt_max)) * (time_preference + spread_factor * z))
//! ```
//!
//! Both functions are pure: no clock reads, no state, bit-identical output
//! for identical input. The caller supplies `timestamp` explicitly; wrappers
//! that want wall-clock behavior default it themselves.
//!
//! # Example
//!
//! ```rust
//! use exactly_rs_sim::irm::{floating_rate, FloatingParameters};
//! use alloy_primitives::I256;
//!
//! let params = FloatingParameters {
//!     a: "13829000000000000".parse().unwrap(),
//!     b: "17429000000000000".parse().unwrap(),
//!     max_utilization: "1100000000000000000".parse().unwrap(),
//!     natural_utilization: "700000000000000000".parse().unwrap(),
//!     sigmoid_speed: "2500000000000000000".parse().unwrap(),
//!     growth_speed: "1000000000000000000".parse().unwrap(),
//!     max_rate: "150000000000000000000".parse().unwrap(),
//! };
//!
//! // With nothing borrowed anywhere, the curve sits at its intercept.
//! let rate = floating_rate(&params, I256::ZERO, I256::ZERO).unwrap();
//! assert_eq!(rate.to_string(), "30000818181818181");
//! ```

use alloy_primitives::I256;

use crate::error::MathError;
use crate::math::{div_wad, exp_wad, from_u64, ln_wad, min, mul_wad, sqrt_wad, WAD};

/// Spacing between available maturity dates: 28 days in seconds.
pub const INTERVAL: u64 = 4 * 7 * 24 * 60 * 60;

/// 10^36, for demand normalizations that cancel two WAD scales at once.
const WAD_SQUARED: I256 = I256::from_raw(alloy_primitives::U256::from_limbs([
    0xB34B_9F10_0000_0000,
    0xC0_97CE_7BC9_0715,
    0,
    0,
]));

/// Calibration constants for the floating-pool borrow curve.
///
/// All fields are WAD-scaled. Calibrations keep
/// `0 < natural_utilization < max_utilization` and `max_rate > 0`;
/// `max_utilization` may exceed one WAD so the curve stays defined slightly
/// past full utilization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatingParameters {
    /// Curve numerator constant.
    pub a: I256,
    /// Curve intercept.
    pub b: I256,
    /// Utilization at which the base curve diverges.
    pub max_utilization: I256,
    /// Utilization at which the sigmoid skew is centered (zero skew).
    pub natural_utilization: I256,
    /// Steepness of the sigmoid skew around the natural utilization.
    pub sigmoid_speed: I256,
    /// Exponent applied to the liquidity draw-down dampening.
    pub growth_speed: I256,
    /// Hard ceiling on the returned rate.
    pub max_rate: I256,
}

/// Calibration constants for a fixed-maturity borrow, on top of the
/// floating curve.
///
/// `max_pools`, `maturity`, and `timestamp` are raw integers (a pool count
/// and unix seconds); the rest are WAD-scaled. `maturity` is a multiple of
/// [`INTERVAL`] on-chain, and `timestamp` is required here: the engine
/// never reads the system clock, so previews are reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedParameters {
    /// Floating-curve calibration, reused for the base rate.
    pub floating: FloatingParameters,
    /// Number of simultaneously active maturity slots.
    pub max_pools: u64,
    /// Maturity being quoted, unix seconds.
    pub maturity: u64,
    /// Time of the preview, unix seconds.
    pub timestamp: u64,
    /// Weight of the demand factor `z` in the premium.
    pub spread_factor: I256,
    /// Constant term of the premium.
    pub time_preference: I256,
    /// Exponent of the time-to-maturity decay.
    pub maturity_speed: I256,
}

/// Computes the instantaneous floating borrow rate.
///
/// `u_floating` is the floating pool's own utilization and `u_global` the
/// protocol-wide utilization, both WAD-scaled. Neither is clamped: values
/// at or above one WAD probe the saturation behavior and fail or clamp as
/// the curve dictates.
///
/// # Errors
///
/// - [`MathError::DivisionByZero`] at `u_floating == max_utilization`
///   (the curve is asymptotic there; callers must stay below it).
/// - [`MathError::DomainError`] when `u_global` exceeds one WAD and the
///   logit becomes undefined.
pub fn floating_rate(
    params: &FloatingParameters,
    u_floating: I256,
    u_global: I256,
) -> Result<I256, MathError> {
    let slope = div_wad(
        params.a,
        params
            .max_utilization
            .checked_sub(u_floating)
            .ok_or(MathError::Overflow)?,
    )?;
    let r = slope.checked_add(params.b).ok_or(MathError::Overflow)?;
    if u_global == WAD {
        return Ok(params.max_rate);
    }
    if u_global.is_zero() {
        return Ok(r);
    }
    if u_global >= u_floating {
        let logit_global = ln_wad(div_wad(u_global, WAD - u_global)?)?;
        let logit_natural = ln_wad(div_wad(
            params.natural_utilization,
            WAD - params.natural_utilization,
        )?)?;
        let sig = div_wad(
            WAD,
            WAD.checked_add(exp_wad(mul_wad(
                -params.sigmoid_speed,
                logit_global - logit_natural,
            )?)?)
            .ok_or(MathError::Overflow)?,
        )?;
        let dampening = exp_wad(mul_wad(
            -params.growth_speed,
            ln_wad(WAD - mul_wad(sig, u_global)?)?,
        )?)?;
        return Ok(min(mul_wad(dampening, r)?, params.max_rate));
    }
    // Backup liquidity has not caught up with the floating pool; the plain
    // asymptotic curve governs with no skew.
    Ok(r)
}

/// Computes the borrow rate for a specific maturity.
///
/// `u_fixed` is the utilization of the quoted maturity pool, `u_floating`
/// and `u_global` as in [`floating_rate`]. The premium scales with demand
/// concentration per maturity slot and decays as the maturity approaches.
///
/// # Errors
///
/// Everything [`floating_rate`] returns, plus:
///
/// - [`MathError::DomainError`] when the maturity is not in the future of
///   `params.timestamp` (the time-decay logarithm is undefined).
/// - [`MathError::DivisionByZero`] when `u_global` is zero while `u_fixed`
///   is not - an inconsistent state the protocol cannot reach.
pub fn fixed_rate(
    params: &FixedParameters,
    u_fixed: I256,
    u_floating: I256,
    u_global: I256,
) -> Result<I256, MathError> {
    let base = floating_rate(&params.floating, u_floating, u_global)?;
    if u_fixed.is_zero() {
        return Ok(base);
    }

    let max_pools = from_u64(params.max_pools);
    let fixed_natural = WAD
        .checked_sub(params.floating.natural_utilization)
        .ok_or(MathError::Overflow)?;

    // Demand per maturity slot, normalized by the slots' natural share.
    let sq_alpha = div_wad(
        max_pools.checked_mul(WAD).ok_or(MathError::Overflow)?,
        fixed_natural,
    )?;
    let alpha = sqrt_wad(sq_alpha)?;
    let demand = max_pools
        .checked_mul(u_fixed)
        .and_then(|v| v.checked_mul(WAD_SQUARED))
        .ok_or(MathError::Overflow)?;
    let backup = u_global
        .checked_mul(fixed_natural)
        .ok_or(MathError::Overflow)?;
    let sq_x = demand.checked_div(backup).ok_or(MathError::DivisionByZero)?;
    let x = sqrt_wad(sq_x)?;

    // Alpha-weighted blend of the linear and square-root transforms of the
    // normalized demand; super-linear once a slot departs its natural share.
    let weight = div_wad(WAD + WAD - sq_alpha, mul_wad(alpha, WAD - alpha)?)?;
    let blend = weight
        .checked_mul(x)
        .and_then(|v| (WAD - weight).checked_mul(sq_x).and_then(|w| v.checked_add(w)))
        .ok_or(MathError::Overflow)?;
    let z = blend.checked_div(WAD).ok_or(MathError::Overflow)? - WAD;

    // Time to maturity against the furthest reachable maturity, aligned to
    // the current interval boundary.
    let timestamp = from_u64(params.timestamp);
    let interval = from_u64(INTERVAL);
    let ttm = from_u64(params.maturity) - timestamp;
    let tt_max = timestamp - timestamp % interval
        + max_pools
            .checked_mul(interval)
            .ok_or(MathError::Overflow)?;

    let decay = exp_wad(mul_wad(params.maturity_speed, ln_wad(div_wad(ttm, tt_max)?)?)?)?;
    let spread = params
        .time_preference
        .checked_add(mul_wad(params.spread_factor, z)?)
        .ok_or(MathError::Overflow)?;
    let premium = mul_wad(decay, spread)?;
    mul_wad(
        base,
        WAD.checked_add(premium).ok_or(MathError::Overflow)?,
    )
}
