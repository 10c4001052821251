//! Application configuration from CLI flags and environment.

use std::io;
use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use fibdrv_core::decimal::check_budget;
use fibdrv_core::{FibError, DEFAULT_DIGIT_BUDGET};
use fibdrv_device::calculator_selection::strategies_to_run;
use fibdrv_device::DEFAULT_MAX_INDEX;

/// fibdrv: exact 128-bit Fibonacci numbers from a simulated character device.
#[derive(Parser, Debug)]
#[command(name = "fibdrv", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Highest offset the client walk reads, ascending then descending.
    #[arg(long, default_value_t = 100, env = "FIBDRV_OFFSET")]
    pub offset: u64,

    /// Compute a single Fibonacci index instead of walking the device.
    #[arg(short = 'n', long, env = "FIBDRV_INDEX")]
    pub index: Option<u64>,

    /// Algorithm to use: linear, fast, or all.
    #[arg(long, default_value = "fast")]
    pub algo: String,

    /// Time both algorithms on every device read.
    #[arg(long)]
    pub timing: bool,

    /// Digit budget for decimal rendering.
    #[arg(long, default_value_t = DEFAULT_DIGIT_BUDGET)]
    pub digits: usize,

    /// Largest index the device seeks to.
    #[arg(long, default_value_t = DEFAULT_MAX_INDEX)]
    pub max_index: u64,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Show detailed information.
    #[arg(short, long)]
    pub details: bool,

    /// Write the last rendered value to this file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Quiet mode (only output the numbers).
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Write a completion script for `shell` covering every flag above.
    pub fn write_completion(shell: Shell, out: &mut dyn io::Write) {
        let mut cmd = Self::command();
        let name = cmd.get_name().to_owned();
        clap_complete::generate(shell, &mut cmd, name, out);
    }

    /// Reject an unusable digit budget or algorithm name.
    pub fn validate(&self) -> Result<(), FibError> {
        check_budget(self.digits)?;
        strategies_to_run(&self.algo)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("fibdrv").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn defaults() {
        let config = parse(&[]);
        assert_eq!(config.offset, 100);
        assert_eq!(config.index, None);
        assert_eq!(config.algo, "fast");
        assert_eq!(config.digits, 50);
        assert_eq!(config.max_index, 100);
        assert!(!config.timing);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn single_index_flags() {
        let config = parse(&["-n", "186", "--algo", "all", "-d", "-o", "out.txt"]);
        assert_eq!(config.index, Some(186));
        assert_eq!(config.algo, "all");
        assert!(config.details);
        assert_eq!(config.output, Some(PathBuf::from("out.txt")));
    }

    #[test]
    fn validate_rejects_bad_values() {
        let config = parse(&["--digits", "0"]);
        assert!(matches!(config.validate(), Err(FibError::Decimal(_))));

        let config = parse(&["--algo", "matrix"]);
        assert!(matches!(config.validate(), Err(FibError::Config(_))));
    }

    #[test]
    fn rejects_negative_offset() {
        assert!(AppConfig::try_parse_from(["fibdrv", "--offset", "-1"]).is_err());
    }

    #[test]
    fn command_is_well_formed() {
        AppConfig::command().debug_assert();
    }

    #[test]
    fn bash_completion_lists_device_flags() {
        let mut buf = Vec::new();
        AppConfig::write_completion(Shell::Bash, &mut buf);
        let script = String::from_utf8(buf).unwrap();
        assert!(script.contains("_fibdrv()"));
        for flag in ["--offset", "--max-index", "--timing", "--digits"] {
            assert!(script.contains(flag), "missing {flag}");
        }
    }
}
