//! Domain limits and shared constants.

/// Largest Fibonacci index whose value fits in 128 bits.
///
/// F(186) = 332,825,110,087,067,562,321,196,029,789,634,457,848 and
/// F(187) exceeds `2^128 - 1`. Indices above this wrap (or, for fast
/// doubling, may saturate) per the fixed-width arithmetic policy.
pub const MAX_EXACT_INDEX: u64 = 186;

/// Largest Fibonacci index whose value fits in the low word alone.
/// F(93) = 12200160415121876738
pub const MAX_U64_INDEX: u64 = 93;

/// Largest index the linear strategy is asked to compute.
///
/// Linear costs one wide addition per index, so this bounds a run to a few
/// seconds. Fast doubling has no such limit.
pub const MAX_LINEAR_INDEX: u64 = 1 << 32;

/// Digit budget used by the companion client when rendering results.
pub const DEFAULT_DIGIT_BUDGET: usize = 50;

/// Upper bound accepted for any digit budget.
pub const MAX_DIGIT_CAPACITY: usize = 4096;

/// Decimal digits of `2^128 - 1`.
pub const U128_MAX_DIGITS: usize = 39;

/// Decimal representation of 2^64, the weight of the high word.
pub const TWO_POW_64_DECIMAL: &str = "18446744073709551616";

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Strategies disagreed inside the exact domain.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// The device was already held by another session (EBUSY).
    pub const ERROR_BUSY: i32 = 16;
}
