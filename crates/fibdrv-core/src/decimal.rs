//! Variable-length decimal digit strings with schoolbook arithmetic.
//!
//! Digits are kept least-significant first so carries walk forward through
//! the buffer; callers only ever see the most-significant-first form.
//! Every operation is bounded by a digit budget: results keep the low-order
//! `budget` digits (the value modulo `10^budget`) and are then put back in
//! canonical form, with no leading zeros except for the value zero itself.

use std::fmt;
use std::str::FromStr;

use crate::constants::MAX_DIGIT_CAPACITY;

/// Invalid-argument failures of the decimal layer.
///
/// Capacity overflow is not an error: it truncates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecimalError {
    /// A digit budget of zero was supplied.
    #[error("digit budget must be non-zero")]
    ZeroBudget,

    /// The digit budget exceeds the supported capacity.
    #[error("digit budget {requested} exceeds capacity {max}")]
    BudgetTooLarge { requested: usize, max: usize },

    /// An operand of `multiply` holds no digits.
    #[error("operand has no digits")]
    EmptyOperand,

    /// Parsing an empty string.
    #[error("cannot parse empty decimal string")]
    EmptyInput,

    /// Parsing hit a non-digit character.
    #[error("invalid digit {found:?} at position {position}")]
    InvalidDigit { position: usize, found: char },
}

/// Reject budgets outside `1..=MAX_DIGIT_CAPACITY`.
pub fn check_budget(budget: usize) -> Result<(), DecimalError> {
    if budget == 0 {
        return Err(DecimalError::ZeroBudget);
    }
    if budget > MAX_DIGIT_CAPACITY {
        return Err(DecimalError::BudgetTooLarge {
            requested: budget,
            max: MAX_DIGIT_CAPACITY,
        });
    }
    Ok(())
}

/// A non-negative integer as a string of decimal digits.
///
/// # Example
/// ```
/// use fibdrv_core::decimal::DecimalBigString;
///
/// let mut x: DecimalBigString = "999".parse().unwrap();
/// x.add(&DecimalBigString::from_u64(1), 50).unwrap();
/// assert_eq!(x.to_string(), "1000");
///
/// x.multiply(&"25".parse().unwrap(), 50).unwrap();
/// assert_eq!(x.to_string(), "25000");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DecimalBigString {
    /// Digit values `0..=9`, least-significant first.
    digits: Vec<u8>,
}

impl DecimalBigString {
    /// An empty string. Acts as zero for `add`; `multiply` rejects it.
    #[must_use]
    pub fn new() -> Self {
        Self { digits: Vec::new() }
    }

    /// The string "0".
    #[must_use]
    pub fn zero() -> Self {
        Self { digits: vec![0] }
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_u64(mut value: u64) -> Self {
        if value == 0 {
            return Self::zero();
        }
        let mut digits = Vec::with_capacity(20);
        while value > 0 {
            digits.push((value % 10) as u8);
            value /= 10;
        }
        Self { digits }
    }

    /// Number of digits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.digits == [0]
    }

    /// Positional addition into `self`, keeping at most `digit_budget` digits.
    ///
    /// Returns the new length.
    pub fn add(&mut self, addend: &Self, digit_budget: usize) -> Result<usize, DecimalError> {
        check_budget(digit_budget)?;

        let width = self.digits.len().max(addend.digits.len()).min(digit_budget);
        let mut sum = Vec::with_capacity(width + 1);
        let mut carry = 0u8;
        for i in 0..width {
            let column = digit_at(&self.digits, i) + digit_at(&addend.digits, i) + carry;
            sum.push(column % 10);
            carry = column / 10;
        }
        if carry > 0 && sum.len() < digit_budget {
            sum.push(carry);
        }

        self.digits = sum;
        self.normalize();
        Ok(self.digits.len())
    }

    /// Schoolbook long multiplication into `self`, keeping at most
    /// `digit_budget` digits.
    ///
    /// Each digit of `multiplier` yields a partial product shifted by its
    /// position, and the partials are summed with [`add`](Self::add).
    /// Returns the new length.
    pub fn multiply(
        &mut self,
        multiplier: &Self,
        digit_budget: usize,
    ) -> Result<usize, DecimalError> {
        check_budget(digit_budget)?;
        if self.is_empty() || multiplier.is_empty() {
            return Err(DecimalError::EmptyOperand);
        }
        if self.is_zero() || multiplier.is_zero() {
            *self = Self::zero();
            return Ok(1);
        }

        let mut product = Self::zero();
        for (shift, &m) in multiplier.digits.iter().enumerate() {
            // Partials shifted past the budget only touch dropped digits.
            if shift >= digit_budget {
                break;
            }
            if m == 0 {
                continue;
            }

            let mut partial =
                Vec::with_capacity((shift + self.digits.len() + 1).min(digit_budget));
            partial.resize(shift, 0);
            let mut carry = 0u8;
            for &d in &self.digits {
                if partial.len() == digit_budget {
                    break;
                }
                let p = m * d + carry;
                partial.push(p % 10);
                carry = p / 10;
            }
            if carry > 0 && partial.len() < digit_budget {
                partial.push(carry);
            }

            let mut partial = Self { digits: partial };
            partial.normalize();
            product.add(&partial, digit_budget)?;
        }

        *self = product;
        Ok(self.digits.len())
    }

    /// Strip leading (high-order) zeros, keeping a single zero digit.
    fn normalize(&mut self) {
        while self.digits.len() > 1 && self.digits.last() == Some(&0) {
            self.digits.pop();
        }
    }
}

fn digit_at(digits: &[u8], i: usize) -> u8 {
    digits.get(i).copied().unwrap_or(0)
}

impl fmt::Display for DecimalBigString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: String = self
            .digits
            .iter()
            .rev()
            .map(|&d| char::from(b'0' + d))
            .collect();
        f.pad(&s)
    }
}

impl FromStr for DecimalBigString {
    type Err = DecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(DecimalError::EmptyInput);
        }
        let mut digits = Vec::with_capacity(s.len());
        for (position, found) in s.chars().enumerate() {
            let Some(d) = found.to_digit(10) else {
                return Err(DecimalError::InvalidDigit { position, found });
            };
            #[allow(clippy::cast_possible_truncation)]
            digits.push(d as u8);
        }
        digits.reverse();
        let mut value = Self { digits };
        value.normalize();
        Ok(value)
    }
}

impl From<u64> for DecimalBigString {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}
