//! Named Fibonacci strategies.
//!
//! `Linear` is the O(k) baseline; `FastDoubling` is the O(log k) engine.
//! Both are kept so one can be timed against the other.

use std::fmt;
use std::str::FromStr;

use crate::calculator::FibError;
use crate::fastdoubling::fib_sequence_fast_doubling;
use crate::linear::fib_sequence;
use crate::wide::WideUint128;

/// Algorithm used to compute F(k).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Additive recurrence, O(k) wide additions.
    Linear,
    /// Doubling identities, O(log k) wide multiplications.
    FastDoubling,
}

impl Strategy {
    /// Every strategy, baseline first.
    pub const ALL: [Strategy; 2] = [Strategy::Linear, Strategy::FastDoubling];

    /// Compute F(k) with this strategy.
    #[must_use]
    pub fn compute(self, k: u64) -> WideUint128 {
        match self {
            Strategy::Linear => fib_sequence(k),
            Strategy::FastDoubling => fib_sequence_fast_doubling(k),
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Linear => "Linear",
            Strategy::FastDoubling => "FastDoubling",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = FibError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "linear" | "naive" => Ok(Strategy::Linear),
            "fast" | "fast-doubling" | "fastdoubling" | "doubling" => Ok(Strategy::FastDoubling),
            _ => Err(FibError::Config(format!("unknown strategy: {s}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names() {
        assert_eq!("linear".parse::<Strategy>().unwrap(), Strategy::Linear);
        assert_eq!("fast".parse::<Strategy>().unwrap(), Strategy::FastDoubling);
        assert_eq!(
            "Fast-Doubling".parse::<Strategy>().unwrap(),
            Strategy::FastDoubling
        );
        assert!("matrix".parse::<Strategy>().is_err());
    }

    #[test]
    fn strategies_agree_on_small_indices() {
        for k in 0..=50 {
            assert_eq!(
                Strategy::Linear.compute(k),
                Strategy::FastDoubling.compute(k),
                "F({k})"
            );
        }
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(Strategy::FastDoubling.to_string(), "FastDoubling");
        assert_eq!(Strategy::ALL.len(), 2);
    }
}
