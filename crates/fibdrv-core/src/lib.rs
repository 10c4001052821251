//! # fibdrv-core
//!
//! Fixed-width Fibonacci engine for the fibdrv workspace: a two-word
//! 128-bit integer, linear and Fast Doubling strategies over it, and an
//! exact decimal renderer built on schoolbook digit-string arithmetic.

pub mod calculator;
pub mod constants;
pub mod decimal;
pub mod fastdoubling;
pub mod linear;
pub mod render;
pub mod strategy;
pub mod wide;

// Re-exports
pub use calculator::{compare, verify, Comparison, FibError};
pub use constants::{
    exit_codes, DEFAULT_DIGIT_BUDGET, MAX_DIGIT_CAPACITY, MAX_EXACT_INDEX, MAX_LINEAR_INDEX,
    MAX_U64_INDEX, TWO_POW_64_DECIMAL,
};
pub use decimal::{DecimalBigString, DecimalError};
pub use render::render_decimal;
pub use strategy::Strategy;
pub use wide::WideUint128;

/// Compute F(n) using Fast Doubling.
///
/// # Example
/// ```
/// assert_eq!(fibdrv_core::fibonacci(10).to_string(), "55");
/// assert_eq!(fibdrv_core::fibonacci(0).to_string(), "0");
/// ```
#[must_use]
pub fn fibonacci(n: u64) -> WideUint128 {
    Strategy::FastDoubling.compute(n)
}
