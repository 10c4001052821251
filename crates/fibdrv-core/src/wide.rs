//! Fixed-width two-word unsigned integer.
//!
//! `WideUint128` holds `high * 2^64 + low`. Addition and multiplication wrap
//! modulo 2^128. Subtraction saturates: if the subtrahend is larger than the
//! minuend the result is zero, never a wrapped value.

use std::fmt;
use std::ops::{Add, Mul, Sub};

use crate::constants::U128_MAX_DIGITS;
use crate::render::render_decimal;

/// Unsigned 128-bit integer stored as two 64-bit words.
///
/// Field order gives the derived `Ord` the numeric ordering (high word first).
///
/// # Example
/// ```
/// use fibdrv_core::wide::WideUint128;
///
/// let x = WideUint128::new(0, u64::MAX);
/// let y = x.wrapping_add(WideUint128::ONE);
/// assert_eq!(y, WideUint128::new(1, 0));
/// assert_eq!(y.to_string(), "18446744073709551616");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WideUint128 {
    /// Upper 64 bits.
    pub high: u64,
    /// Lower 64 bits.
    pub low: u64,
}

impl WideUint128 {
    /// The value 0.
    pub const ZERO: Self = Self { high: 0, low: 0 };
    /// The value 1.
    pub const ONE: Self = Self { high: 0, low: 1 };
    /// The value `2^128 - 1`.
    pub const MAX: Self = Self {
        high: u64::MAX,
        low: u64::MAX,
    };
    /// Size of the little-endian byte encoding.
    pub const BYTES: usize = 16;

    #[must_use]
    pub const fn new(high: u64, low: u64) -> Self {
        Self { high, low }
    }

    #[must_use]
    pub const fn from_u64(value: u64) -> Self {
        Self {
            high: 0,
            low: value,
        }
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.high == 0 && self.low == 0
    }

    /// Number of significant bits (0 for zero).
    #[must_use]
    pub const fn bits(self) -> u32 {
        if self.high != 0 {
            128 - self.high.leading_zeros()
        } else {
            64 - self.low.leading_zeros()
        }
    }

    /// Addition modulo 2^128.
    ///
    /// The carry out of the low word feeds the high word; a carry out of the
    /// high word is dropped.
    #[must_use]
    pub fn wrapping_add(self, rhs: Self) -> Self {
        let (low, carry) = self.low.overflowing_add(rhs.low);
        let high = self
            .high
            .wrapping_add(rhs.high)
            .wrapping_add(u64::from(carry));
        Self { high, low }
    }

    /// Subtraction that clamps to zero when `rhs > self`.
    #[must_use]
    pub fn saturating_sub(self, rhs: Self) -> Self {
        let (low, borrow) = self.low.overflowing_sub(rhs.low);
        let high = self
            .high
            .checked_sub(rhs.high)
            .and_then(|h| h.checked_sub(u64::from(borrow)));
        match high {
            Some(high) => Self { high, low },
            None => Self::ZERO,
        }
    }

    /// Shift-and-add multiplication modulo 2^128.
    ///
    /// Every set bit of `rhs.low` adds a shifted copy of `self` through
    /// [`wrapping_add`](Self::wrapping_add). The high word of `rhs` can only
    /// reach the high word of the product, so its set bits add `self.low`
    /// shifted straight into `product.high`, discarding anything that
    /// would land above bit 127.
    #[must_use]
    pub fn wrapping_mul(self, rhs: Self) -> Self {
        let mut product = Self::ZERO;
        for bit in 0..u64::BITS {
            if (rhs.low >> bit) & 1 == 1 {
                product = product.wrapping_add(self.shl_word(bit));
            }
        }
        for bit in 0..u64::BITS {
            if (rhs.high >> bit) & 1 == 1 {
                product.high = product.high.wrapping_add(self.low << bit);
            }
        }
        product
    }

    /// Left shift by less than one word, spilling low bits into the high word.
    fn shl_word(self, shift: u32) -> Self {
        debug_assert!(shift < u64::BITS);
        if shift == 0 {
            return self;
        }
        Self {
            high: (self.high << shift) | (self.low >> (u64::BITS - shift)),
            low: self.low << shift,
        }
    }

    /// Little-endian encoding: low word first, then high word.
    #[must_use]
    pub fn to_le_bytes(self) -> [u8; Self::BYTES] {
        let mut out = [0u8; Self::BYTES];
        out[..8].copy_from_slice(&self.low.to_le_bytes());
        out[8..].copy_from_slice(&self.high.to_le_bytes());
        out
    }

    #[must_use]
    pub fn from_le_bytes(bytes: [u8; Self::BYTES]) -> Self {
        let mut low = [0u8; 8];
        let mut high = [0u8; 8];
        low.copy_from_slice(&bytes[..8]);
        high.copy_from_slice(&bytes[8..]);
        Self {
            high: u64::from_le_bytes(high),
            low: u64::from_le_bytes(low),
        }
    }
}

impl Add for WideUint128 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.wrapping_add(rhs)
    }
}

impl Sub for WideUint128 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.saturating_sub(rhs)
    }
}

impl Mul for WideUint128 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.wrapping_mul(rhs)
    }
}

impl From<u64> for WideUint128 {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<u128> for WideUint128 {
    #[allow(clippy::cast_possible_truncation)]
    fn from(value: u128) -> Self {
        Self {
            high: (value >> 64) as u64,
            low: value as u64,
        }
    }
}

impl From<WideUint128> for u128 {
    fn from(value: WideUint128) -> Self {
        (u128::from(value.high) << 64) | u128::from(value.low)
    }
}

impl fmt::Display for WideUint128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decimal = render_decimal(*self, U128_MAX_DIGITS).map_err(|_| fmt::Error)?;
        f.pad(&decimal.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(v: u128) -> WideUint128 {
        WideUint128::from(v)
    }

    #[test]
    fn add_carries_into_high_word() {
        let sum = WideUint128::new(0, u64::MAX) + WideUint128::ONE;
        assert_eq!(sum, WideUint128::new(1, 0));

        let x = WideUint128::new(3, u64::MAX - 1);
        let y = WideUint128::new(4, 5);
        assert_eq!(u128::from(x + y), u128::from(x) + u128::from(y));
    }

    #[test]
    fn add_wraps_at_max() {
        assert_eq!(WideUint128::MAX + WideUint128::ONE, WideUint128::ZERO);
        assert_eq!(WideUint128::MAX + WideUint128::MAX, w(u128::MAX - 1));
    }

    #[test]
    fn sub_borrows_from_high_word() {
        let diff = WideUint128::new(1, 0) - WideUint128::ONE;
        assert_eq!(diff, WideUint128::new(0, u64::MAX));
    }

    #[test]
    fn sub_saturates_to_zero() {
        assert_eq!(WideUint128::ONE - WideUint128::new(0, 2), WideUint128::ZERO);
        // Low word alone would not borrow, high word underflows.
        assert_eq!(
            WideUint128::new(1, 9) - WideUint128::new(2, 0),
            WideUint128::ZERO
        );
        // High words equal, borrow from the low word underflows.
        assert_eq!(
            WideUint128::new(5, 1) - WideUint128::new(5, 2),
            WideUint128::ZERO
        );
        assert_eq!(WideUint128::ZERO - WideUint128::MAX, WideUint128::ZERO);
    }

    #[test]
    fn sub_self_is_zero() {
        let x = WideUint128::new(0xdead_beef, 0x1234_5678);
        assert_eq!(x - x, WideUint128::ZERO);
    }

    #[test]
    fn mul_small_values() {
        assert_eq!(w(6) * w(7), w(42));
        assert_eq!(w(12_345) * WideUint128::ZERO, WideUint128::ZERO);
        assert_eq!(w(12_345) * WideUint128::ONE, w(12_345));
    }

    #[test]
    fn mul_crosses_word_boundary() {
        let x = w(u128::from(u64::MAX));
        assert_eq!(x * x, w(u128::from(u64::MAX) * u128::from(u64::MAX)));
        assert_eq!(w(1 << 63) * w(4), w(1 << 65));
    }

    #[test]
    fn mul_uses_high_word_of_multiplier() {
        let x = w(3);
        let y = WideUint128::new(5, 7);
        assert_eq!(x * y, w(3 * u128::from(y)));
        // Only x.low * y.high survives in the high word.
        let x = WideUint128::new(2, 3);
        assert_eq!(x * WideUint128::new(1, 0), WideUint128::new(3, 0));
    }

    #[test]
    fn mul_wraps_modulo_2_pow_128() {
        let a = 0xffff_0000_ffff_0000_1234_5678_9abc_def0_u128;
        let b = 0x0f0f_0f0f_0f0f_0f0f_f0f0_f0f0_f0f0_f0f0_u128;
        assert_eq!(w(a) * w(b), w(a.wrapping_mul(b)));
        assert_eq!(WideUint128::MAX * WideUint128::MAX, WideUint128::ONE);
    }

    #[test]
    fn ordering_follows_numeric_value() {
        assert!(WideUint128::new(1, 0) > WideUint128::new(0, u64::MAX));
        assert!(WideUint128::new(1, 1) > WideUint128::new(1, 0));
    }

    #[test]
    fn bits_counts_significant_bits() {
        assert_eq!(WideUint128::ZERO.bits(), 0);
        assert_eq!(WideUint128::ONE.bits(), 1);
        assert_eq!(WideUint128::new(1, 0).bits(), 65);
        assert_eq!(WideUint128::MAX.bits(), 128);
    }

    #[test]
    fn le_bytes_layout_matches_native_u128() {
        let v = 0x0102_0304_0506_0708_090a_0b0c_0d0e_0f10_u128;
        assert_eq!(w(v).to_le_bytes(), v.to_le_bytes());
        assert_eq!(WideUint128::from_le_bytes(v.to_le_bytes()), w(v));
    }

    #[test]
    fn display_renders_exact_decimal() {
        assert_eq!(WideUint128::ZERO.to_string(), "0");
        assert_eq!(WideUint128::MAX.to_string(), u128::MAX.to_string());
        assert_eq!(format!("{:>5}", w(42)), "   42");
    }
}
