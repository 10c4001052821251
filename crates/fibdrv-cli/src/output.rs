//! CLI output formatting.

use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use fibdrv_core::DecimalBigString;
use fibdrv_device::{CalculationResult, Reading, DEVICE_PATH};

/// Format a duration for display.
#[must_use]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.000_001 {
        format!("{}ns", d.as_nanos())
    } else if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else {
        format!("{secs:.3}s")
    }
}

/// The line printed for each dummy write.
#[must_use]
pub fn format_write(returned: usize) -> String {
    format!("Writing to {DEVICE_PATH}, returned the sequence {returned}")
}

/// The line printed for each read of the client walk.
#[must_use]
pub fn format_reading(reading: &Reading) -> String {
    let mut line = format!(
        "Reading from {DEVICE_PATH} at offset {}, returned the sequence {}.",
        reading.offset, reading.decimal
    );
    if let Some(timing) = reading.timing {
        line.push_str(&format!(
            " [linear {}, fast doubling {}]",
            format_duration(timing.linear),
            format_duration(timing.fast_doubling)
        ));
    }
    line
}

/// The block printed for a single-index result.
#[must_use]
pub fn format_result(result: &CalculationResult, details: bool) -> String {
    let mut out = format!(
        "Algorithm: {}\nN: {}\nDuration: {}\n",
        result.strategy,
        result.index,
        format_duration(result.duration)
    );
    if details {
        out.push_str(&format!(
            "Result bits: {}\nResult digits: {}\nWords: high = {:#018x}, low = {:#018x}\n",
            result.value.bits(),
            result.decimal.len(),
            result.value.high,
            result.value.low
        ));
    }
    out.push_str(&format!("F({}) = {}", result.index, result.decimal));
    out
}

/// A side-by-side table of strategy runs, each marked against the first.
#[must_use]
pub fn format_comparison(results: &[CalculationResult]) -> String {
    let mut out = format!("\nComparison Results:\n{:-<60}", "");
    let Some(first) = results.first() else {
        return out;
    };
    for result in results {
        let status = if result.value == first.value {
            "OK"
        } else {
            "DIFFERS"
        };
        out.push_str(&format!(
            "\n  {:<20} {:>12} [{}]",
            result.strategy.name(),
            format_duration(result.duration),
            status,
        ));
    }
    out
}

#[must_use]
pub fn format_error(error: &str) -> String {
    format!("Error: {error}")
}

/// Write a rendered value to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &Path, value: &DecimalBigString) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "{value}")?;
    Ok(())
}
