//! Error type and side-by-side strategy comparison.

use std::time::{Duration, Instant};

use crate::constants::MAX_EXACT_INDEX;
use crate::decimal::DecimalError;
use crate::strategy::Strategy;
use crate::wide::WideUint128;

/// Error type for Fibonacci computation and rendering.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FibError {
    /// Invalid argument to the decimal layer.
    #[error("decimal error: {0}")]
    Decimal(#[from] DecimalError),

    /// The two strategies disagreed where both must be exact.
    #[error("strategy mismatch at index {index}")]
    Mismatch { index: u64 },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Both strategies run on one index, with their wall-clock cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    pub index: u64,
    pub linear: WideUint128,
    pub fast_doubling: WideUint128,
    pub linear_elapsed: Duration,
    pub fast_doubling_elapsed: Duration,
}

impl Comparison {
    /// Whether both strategies produced the same bits.
    #[must_use]
    pub fn agree(&self) -> bool {
        self.linear == self.fast_doubling
    }
}

fn timed(strategy: Strategy, k: u64) -> (WideUint128, Duration) {
    let start = Instant::now();
    let value = strategy.compute(k);
    (value, start.elapsed())
}

/// Run both strategies on `k`, timing each with a monotonic clock.
#[must_use]
pub fn compare(k: u64) -> Comparison {
    let (linear, linear_elapsed) = timed(Strategy::Linear, k);
    let (fast_doubling, fast_doubling_elapsed) = timed(Strategy::FastDoubling, k);
    Comparison {
        index: k,
        linear,
        fast_doubling,
        linear_elapsed,
        fast_doubling_elapsed,
    }
}

/// [`compare`], failing with [`FibError::Mismatch`] if the strategies
/// disagree at an index up to [`MAX_EXACT_INDEX`].
///
/// Past that index the fixed-width results may legitimately differ.
pub fn verify(k: u64) -> Result<Comparison, FibError> {
    let comparison = compare(k);
    if !comparison.agree() {
        if k <= MAX_EXACT_INDEX {
            tracing::warn!(index = k, "strategies disagree inside the exact domain");
            return Err(FibError::Mismatch { index: k });
        }
        tracing::debug!(index = k, "strategies diverge past the exact domain");
    }
    Ok(comparison)
}
