//! Command implementations.

pub mod curve;
pub mod fixed;
pub mod floating;

pub use curve::run_curve;
pub use fixed::run_fixed;
pub use floating::run_floating;
