//! Exactly Rate Preview SDK
//!
//! This crate computes the borrow rates the Exactly protocol quotes for its
//! floating pool and its fixed-maturity pools, in the exact fixed-point
//! arithmetic the chain uses.
//!
//! # Overview
//!
//! The crate allows you to:
//! - Compute the instantaneous floating borrow rate from utilization figures
//! - Compute the rate for borrowing at a specific future maturity
//! - Sample the plain base curve and invert it for chart positioning
//! - Stay bit-for-bit compatible with on-chain previews: all arithmetic is
//!   256-bit integer WAD math, never native floats
//!
//! Everything is a pure function of its inputs. Utilizations and
//! calibration parameters arrive as plain values the caller has already
//! read from the chain; nothing here fetches, caches, or reads the clock.
//!
//! # Example
//!
//! ```rust
//! use exactly_rs_sim::{fixed_rate, floating_rate, FixedParameters, FloatingParameters};
//! use alloy_primitives::I256;
//!
//! let floating = FloatingParameters {
//!     a: "13829000000000000".parse().unwrap(),
//!     b: "17429000000000000".parse().unwrap(),
//!     max_utilization: "1100000000000000000".parse().unwrap(),
//!     natural_utilization: "700000000000000000".parse().unwrap(),
//!     sigmoid_speed: "2500000000000000000".parse().unwrap(),
//!     growth_speed: "1000000000000000000".parse().unwrap(),
//!     max_rate: "150000000000000000000".parse().unwrap(),
//! };
//!
//! let u_floating: I256 = "500000000000000000".parse().unwrap();
//! let u_global: I256 = "800000000000000000".parse().unwrap();
//! let base = floating_rate(&floating, u_floating, u_global).unwrap();
//!
//! let params = FixedParameters {
//!     floating,
//!     max_pools: 3,
//!     maturity: 1_720_051_200,
//!     timestamp: 1_717_200_000,
//!     spread_factor: "200000000000000000".parse().unwrap(),
//!     time_preference: "10000000000000000".parse().unwrap(),
//!     maturity_speed: "500000000000000000".parse().unwrap(),
//! };
//! let u_fixed: I256 = "400000000000000000".parse().unwrap();
//! let quoted = fixed_rate(&params, u_fixed, u_floating, u_global).unwrap();
//!
//! // The maturity premium tops the floating base.
//! assert!(quoted > base);
//! ```

pub mod curve;
pub mod error;
pub mod irm;
pub mod math;

// Re-export commonly used types
pub use error::MathError;

// Curve exports
pub use curve::{base_rate, inverse_base_rate};

// IRM exports
pub use irm::{fixed_rate, floating_rate, FixedParameters, FloatingParameters, INTERVAL};

// Math exports
pub use math::{div_wad, exp_wad, ln_wad, mul_wad, rate_to_f64, sqrt_wad, WAD};
