//! Exact base-10 rendering of two-word integers.
//!
//! Computes `decimal(high) * 2^64 + decimal(low)` entirely in decimal-string
//! arithmetic, so no native 128-bit to decimal conversion is needed.

use crate::constants::TWO_POW_64_DECIMAL;
use crate::decimal::{check_budget, DecimalBigString, DecimalError};
use crate::wide::WideUint128;

/// Render `value` as decimal, keeping at most `digit_budget` digits.
///
/// Exact whenever the value has no more than `digit_budget` digits
/// (39 always suffice); otherwise the low-order digits are kept.
///
/// # Example
/// ```
/// use fibdrv_core::render::render_decimal;
/// use fibdrv_core::wide::WideUint128;
///
/// let f100 = WideUint128::new(19, 3_736_710_778_780_434_371);
/// let s = render_decimal(f100, 50).unwrap();
/// assert_eq!(s.to_string(), "354224848179261915075");
/// ```
pub fn render_decimal(
    value: WideUint128,
    digit_budget: usize,
) -> Result<DecimalBigString, DecimalError> {
    check_budget(digit_budget)?;

    let scale: DecimalBigString = TWO_POW_64_DECIMAL.parse()?;
    let mut out = DecimalBigString::zero();
    let mut high = DecimalBigString::from_u64(value.high);
    high.multiply(&scale, digit_budget)?;
    out.add(&high, digit_budget)?;
    out.add(&DecimalBigString::from_u64(value.low), digit_budget)?;
    Ok(out)
}
