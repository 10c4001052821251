//! Fast Doubling over two-word integers.
//!
//! Uses the doubling identities:
//!   F(2m)   = F(m) * (2*F(m+1) - F(m))
//!   F(2m+1) = F(m+1)^2 + F(m)^2
//!
//! Walks the bits of `k` from MSB to LSB, so F(k) costs O(log k)
//! fixed-width multiplications.

use crate::wide::WideUint128;

/// Compute F(k) by fast doubling.
///
/// Only the significant bits of `k` are scanned. Leading zero bits would
/// map `(F(0), F(1))` onto itself, so this matches a fixed-width scan.
///
/// Exact for `k <= MAX_EXACT_INDEX`. Past that, products wrap and the
/// `2*F(m+1) - F(m)` term saturates, so the result is the fixed-width
/// value, not F(k) mod 2^128 in general.
///
/// # Example
/// ```
/// use fibdrv_core::fastdoubling::fib_sequence_fast_doubling;
///
/// assert_eq!(fib_sequence_fast_doubling(10).to_string(), "55");
/// assert_eq!(
///     fib_sequence_fast_doubling(100).to_string(),
///     "354224848179261915075"
/// );
/// ```
#[must_use]
pub fn fib_sequence_fast_doubling(k: u64) -> WideUint128 {
    let num_bits = u64::BITS - k.leading_zeros();

    // (a, b) = (F(m), F(m+1)) for the prefix m of k read so far.
    let mut a = WideUint128::ZERO;
    let mut b = WideUint128::ONE;

    for i in (0..num_bits).rev() {
        let t = b.wrapping_add(b).saturating_sub(a);
        let f2m = a.wrapping_mul(t);
        let f2m1 = b.wrapping_mul(b).wrapping_add(a.wrapping_mul(a));
        a = f2m;
        b = f2m1;

        if (k >> i) & 1 == 1 {
            let next = a.wrapping_add(b);
            a = b;
            b = next;
        }
    }

    a
}
