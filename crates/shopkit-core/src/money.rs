//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │    0.1 + 0.2 = 0.30000000000000004                                      │
//! │                                                                         │
//! │  A 10% coupon on $0.30 should be $0.27, not $0.26999999999999996.      │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    30 cents - (30 × 1000 bps + 5000) / 10000 = 27 cents                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The one place floats enter is [`Money::convert`]: exchange rates arrive
//! from an external service as `f64`, and the result is rounded back to
//! whole cents immediately.
//!
//! ## Usage
//! ```rust
//! use shopkit_core::money::Money;
//!
//! let price = Money::from_cents(1099);
//! assert_eq!(price.to_string(), "$10.99");
//!
//! let parsed: Money = "12.50".parse().unwrap();
//! assert_eq!(parsed.cents(), 1250);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::types::Discount;
use crate::BPS_SCALE;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents for USD).
///
/// ## Where Money is Used
/// ```text
/// Coupon discount ──► calculate_discount ──► discounted price
/// Order.total_amount ──► PaymentGateway::charge
/// ShippingQuote.cost ──► "Shipping Cost: $10 (2 Days)"
/// price × exchange rate ──► get_price_in_currency
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// ## Example
    /// ```rust
    /// use shopkit_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_minor(10, 99).cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        Money(major * 100 + minor)
    }

    /// Creates a Money value from a dollar amount held as a float, rounding
    /// to the nearest cent. Used where amounts arrive as JSON numbers.
    ///
    /// ```rust
    /// use shopkit_core::money::Money;
    ///
    /// assert_eq!(Money::from_dollars_f64(0.1 + 0.2).cents(), 30);
    /// assert_eq!(Money::from_dollars_f64(10.999).cents(), 1100);
    /// ```
    pub fn from_dollars_f64(dollars: f64) -> Self {
        Money((dollars * 100.0).round() as i64)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion, always 0-99.
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Applies a coupon discount and returns the discounted price.
    ///
    /// The amount taken off is `(amount × bps + 5000) / 10000`, so half
    /// cents of discount round up.
    ///
    /// ## Example
    /// ```rust
    /// use shopkit_core::money::Money;
    /// use shopkit_core::types::Discount;
    ///
    /// let price = Money::from_cents(10000); // $100.00
    /// let discounted = price.apply_discount(Discount::from_bps(1000)); // 10% off
    /// assert_eq!(discounted.cents(), 9000);
    /// ```
    pub fn apply_discount(&self, discount: Discount) -> Money {
        let taken = (self.0 as i128 * discount.bps() as i128 + (BPS_SCALE / 2) as i128)
            / BPS_SCALE as i128;
        Money(self.0 - taken as i64)
    }

    /// Converts into another currency at `rate`, rounding to whole cents.
    pub fn convert(&self, rate: f64) -> Money {
        Money((self.0 as f64 * rate).round() as i64)
    }

    /// Like `Display`, but drops the cents when they are zero ("$10").
    pub fn to_compact_string(&self) -> String {
        if self.cents_part() == 0 {
            let sign = if self.0 < 0 { "-" } else { "" };
            format!("{}${}", sign, self.dollars().abs())
        } else {
            self.to_string()
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

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

/// Parses "12", "12.5", "12.50", "$12.50" and "-3.25".
///
/// At most two fractional digits; anything finer is rejected rather than
/// rounded, so no amount is silently changed on the way in.
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "amount".to_string(),
            reason: reason.to_string(),
        };

        let trimmed = s.trim();
        let (negative, body) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let body = body.strip_prefix('$').unwrap_or(body);
        let (major, minor) = body.split_once('.').unwrap_or((body, ""));

        if major.is_empty() || !major.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("expected digits before the decimal point"));
        }
        if minor.len() > 2 || !minor.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("expected at most two digits after the decimal point"));
        }

        let major: i64 = major.parse().map_err(|_| invalid("amount is too large"))?;
        let minor: i64 = match minor.len() {
            0 => 0,
            1 => minor.parse::<i64>().map_err(|_| invalid("bad cents"))? * 10,
            _ => minor.parse().map_err(|_| invalid("bad cents"))?,
        };

        let cents = major
            .checked_mul(100)
            .and_then(|c| c.checked_add(minor))
            .ok_or_else(|| invalid("amount is too large"))?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
