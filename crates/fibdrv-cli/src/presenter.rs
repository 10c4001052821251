//! CLI result presenter.

use fibdrv_device::{CalculationResult, Reading, ResultPresenter};

use crate::output::{format_comparison, format_error, format_reading, format_result, format_write};

/// Prints to stdout, errors to stderr.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// The stdout lines for one reading.
    fn reading_lines(&self, reading: &Reading) -> Vec<String> {
        if self.quiet {
            return vec![reading.decimal.to_string()];
        }
        let mut lines = vec![format_reading(reading)];
        if self.verbose && reading.position != reading.offset {
            lines.push(format!("  (clamped to index {})", reading.position));
        }
        lines
    }

    fn result_text(&self, result: &CalculationResult, details: bool) -> String {
        if self.quiet {
            result.decimal.to_string()
        } else {
            format_result(result, details)
        }
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_write(&self, returned: usize) {
        if !self.quiet {
            println!("{}", format_write(returned));
        }
    }

    fn present_reading(&self, reading: &Reading) {
        for line in self.reading_lines(reading) {
            println!("{line}");
        }
    }

    fn present_result(&self, result: &CalculationResult, details: bool) {
        println!("{}", self.result_text(result, details));
    }

    fn present_comparison(&self, results: &[CalculationResult]) {
        if !self.quiet {
            println!("{}", format_comparison(results));
        }
    }

    fn present_error(&self, error: &str) {
        eprintln!("{}", format_error(error));
    }
}
