//! Presentation seam and result types.

use std::time::Duration;

use fibdrv_core::{DecimalBigString, Strategy, WideUint128};

use crate::client::Reading;

/// Trait for presenting device activity and results to the user.
pub trait ResultPresenter {
    /// Present the return value of one dummy write.
    fn present_write(&self, returned: usize);

    /// Present one read from the client walk.
    fn present_reading(&self, reading: &Reading);

    /// Present a single-index calculation.
    fn present_result(&self, result: &CalculationResult, details: bool);

    /// Present a side-by-side summary of several strategies.
    fn present_comparison(&self, results: &[CalculationResult]);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Result of running one strategy on one index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculationResult {
    pub strategy: Strategy,
    pub index: u64,
    pub value: WideUint128,
    /// `value` rendered within the caller's digit budget.
    pub decimal: DecimalBigString,
    pub duration: Duration,
}
