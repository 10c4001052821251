//! Linear-iteration Fibonacci, the baseline for Fast Doubling.

use crate::wide::WideUint128;

/// Compute F(k) by iterating the additive recurrence k - 1 times.
///
/// Every addition wraps modulo 2^128, so for any `k` the result is
/// F(k) mod 2^128.
#[must_use]
pub fn fib_sequence(k: u64) -> WideUint128 {
    if k == 0 {
        return WideUint128::ZERO;
    }

    let mut prev = WideUint128::ZERO;
    let mut curr = WideUint128::ONE;
    for _ in 2..=k {
        let next = prev.wrapping_add(curr);
        prev = curr;
        curr = next;
    }
    curr
}
