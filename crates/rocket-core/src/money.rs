//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Catalog JSON          rocket-core               Cart display           │
//! │  ────────────          ───────────               ────────────           │
//! │  "price": 139.9  ──►  parse_decimal("139.9") ──►  Money(13990)          │
//! │                        (digits, not floats)          │                  │
//! │                                                      ▼                  │
//! │                                   line subtotal = 13990 × amount        │
//! │                                   cart subtotal = Σ line subtotals      │
//! │                                                                         │
//! │  0.1 + 0.2 != 0.3 in f64. Cents never drift.                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rocket_core::money::Money;
//!
//! let price = Money::parse_decimal("139.9").unwrap();
//! assert_eq!(price.cents(), 13990);
//!
//! let line = price.multiply_quantity(2);
//! assert_eq!(line.to_string(), "$279.80");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: zero-cost over the raw integer, room for any catalog price
/// - **Serialized as a plain integer**: the persisted cart stores cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use rocket_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Parses a decimal string such as `"179.9"` into cents without going
    /// through floating point.
    ///
    /// ## Rules
    /// - Optional leading `-`
    /// - Digits, optionally followed by `.` and more digits
    /// - Digits past the second decimal place round half up on the third
    ///
    /// ## Example
    /// ```rust
    /// use rocket_core::money::Money;
    ///
    /// assert_eq!(Money::parse_decimal("179.9").unwrap().cents(), 17990);
    /// assert_eq!(Money::parse_decimal("12").unwrap().cents(), 1200);
    /// assert!(Money::parse_decimal("1e3").is_err());
    /// ```
    pub fn parse_decimal(input: &str) -> Result<Money, ValidationError> {
        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: reason.to_string(),
        };

        let text = input.trim();
        let (negative, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        let (whole, frac) = digits.split_once('.').unwrap_or((digits, ""));

        if whole.is_empty() && frac.is_empty() {
            return Err(invalid("empty value"));
        }
        if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid("expected digits with an optional decimal point"));
        }

        let whole_value: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid("value too large"))?
        };

        let mut frac_digits = frac.bytes().map(|b| i64::from(b - b'0'));
        let tenths = frac_digits.next().unwrap_or(0);
        let hundredths = frac_digits.next().unwrap_or(0);
        let round_up = frac_digits.next().is_some_and(|d| d >= 5);

        let cents = whole_value
            .checked_mul(100)
            .and_then(|c| c.checked_add(tenths * 10 + hundredths + i64::from(round_up)))
            .ok_or_else(|| invalid("value too large"))?;

        Ok(Money(if negative { -cents } else { cents }))
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Multiplies money by a line amount, saturating at the `i64` bounds.
    ///
    /// ## Example
    /// ```rust
    /// use rocket_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299);
    /// assert_eq!(unit_price.multiply_quantity(3).cents(), 897);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0.saturating_mul(qty as i64))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-friendly display. The app formats with its configured symbol.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::parse_decimal(s)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    /// Saturates at the `i64` bounds.
    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::zero()), "$0.00");
    }

    #[test]
    fn test_parse_decimal_catalog_prices() {
        assert_eq!(Money::parse_decimal("179.9").unwrap().cents(), 17990);
        assert_eq!(Money::parse_decimal("139.90").unwrap().cents(), 13990);
        assert_eq!(Money::parse_decimal("220").unwrap().cents(), 22000);
        assert_eq!(Money::parse_decimal(".5").unwrap().cents(), 50);
        assert_eq!(Money::parse_decimal("-5.5").unwrap().cents(), -550);
    }

    #[test]
    fn test_parse_decimal_rounds_third_place() {
        assert_eq!(Money::parse_decimal("0.005").unwrap().cents(), 1);
        assert_eq!(Money::parse_decimal("0.004").unwrap().cents(), 0);
        assert_eq!(Money::parse_decimal("1.999").unwrap().cents(), 200);
    }

    #[test]
    fn test_parse_decimal_rejects_garbage() {
        for bad in ["", ".", "abc", "1e3", "1.2.3", "--1", "12,50"] {
            assert!(
                matches!(
                    Money::parse_decimal(bad),
                    Err(ValidationError::InvalidFormat { .. })
                ),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_sum_and_multiply() {
        let total: Money = [Money::from_cents(299), Money::from_cents(1)]
            .into_iter()
            .sum();
        assert_eq!(total.cents(), 300);
        assert_eq!(Money::from_cents(299).multiply_quantity(3).cents(), 897);
    }

    #[test]
    fn test_arithmetic_saturates() {
        let price = Money::parse_decimal("25000000").unwrap();
        assert_eq!(price.multiply_quantity(u32::MAX).cents(), i64::MAX);
        assert_eq!(
            Money::from_cents(-2_500_000_000).multiply_quantity(u32::MAX).cents(),
            i64::MIN
        );
        assert_eq!((Money::from_cents(i64::MAX) + Money::from_cents(1)).cents(), i64::MAX);
    }

    #[test]
    fn test_serializes_as_integer_cents() {
        let json = serde_json::to_string(&Money::from_cents(13990)).unwrap();
        assert_eq!(json, "13990");
    }
}
