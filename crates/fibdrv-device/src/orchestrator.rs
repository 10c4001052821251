//! Single-index runs: execute strategies sequentially and compare them.

use std::time::Instant;

use fibdrv_core::{render_decimal, FibError, Strategy, MAX_EXACT_INDEX, MAX_LINEAR_INDEX};

use crate::interfaces::CalculationResult;

/// Run each strategy on `index` in turn, timing each and rendering the value.
///
/// The linear strategy is refused past [`MAX_LINEAR_INDEX`].
pub fn execute_calculations(
    strategies: &[Strategy],
    index: u64,
    digit_budget: usize,
) -> Result<Vec<CalculationResult>, FibError> {
    if index > MAX_LINEAR_INDEX && strategies.contains(&Strategy::Linear) {
        return Err(FibError::Config(format!(
            "index {index} is past the linear strategy limit {MAX_LINEAR_INDEX}, use --algo fast"
        )));
    }
    if index > MAX_EXACT_INDEX {
        tracing::warn!(
            index,
            max = MAX_EXACT_INDEX,
            "index past the exact domain, results are truncated to 128 bits"
        );
    }

    let mut results = Vec::with_capacity(strategies.len());
    for &strategy in strategies {
        let start = Instant::now();
        let value = strategy.compute(index);
        let duration = start.elapsed();
        tracing::debug!(%strategy, index, ?duration, "computed");

        results.push(CalculationResult {
            strategy,
            index,
            value,
            decimal: render_decimal(value, digit_budget)?,
            duration,
        });
    }
    Ok(results)
}

/// Check that every result carries the same value.
///
/// Disagreement is only an error inside the exact domain.
pub fn analyze_comparison_results(results: &[CalculationResult]) -> Result<(), FibError> {
    let Some((first, rest)) = results.split_first() else {
        return Err(FibError::Config("no results to compare".into()));
    };

    for result in rest {
        if result.value != first.value && result.index <= MAX_EXACT_INDEX {
            return Err(FibError::Mismatch {
                index: result.index,
            });
        }
    }
    Ok(())
}
