//! Strategy selection logic.

use fibdrv_core::{FibError, Strategy};

/// Get strategies to run based on the `--algo` selection.
pub fn strategies_to_run(algo: &str) -> Result<Vec<Strategy>, FibError> {
    match algo {
        "all" => Ok(Strategy::ALL.to_vec()),
        name => Ok(vec![name.parse()?]),
    }
}
