//! Error types for the rate-preview library.

use thiserror::Error;

/// Errors surfaced by the fixed-point math library and the rate engine.
///
/// Every failure is returned to the caller as a typed value; the engine
/// never substitutes a sentinel number for a computation it cannot do.
/// Callers (UI layers, the CLI) decide how to present an undefined rate.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// A denominator evaluated to zero, e.g. the floating curve at
    /// `u_floating == max_utilization` or the inverse curve at `apr == b`.
    #[error("division by zero")]
    DivisionByZero,

    /// An argument outside the function domain: `ln` of a non-positive
    /// value, `sqrt` of a negative value, or a non-positive
    /// time-to-maturity ratio.
    #[error("argument outside the function domain")]
    DomainError,

    /// An intermediate value left the 256-bit integer range.
    #[error("intermediate value exceeds the 256-bit range")]
    Overflow,
}
