//! # Domain Types
//!
//! Core domain types used throughout shopkit.
//!
//! ## Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Coupon      │   │      Order      │   │  PaymentMethod  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  code           │   │  total_amount   │   │  card number    │       │
//! │  │  discount (bps) │   └────────┬────────┘   └────────┬────────┘       │
//! │  └─────────────────┘            └──────────┬──────────┘                │
//! │                                            ▼                            │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  ShippingQuote  │   │  ChargeResult   │──►│  OrderOutcome   │       │
//! │  │  cost, days     │   │  status         │   │  success, error │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐                                                    │
//! │  │  BusinessHours  │  [open_hour, close_hour)                          │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here has a lifecycle: values are built, used and dropped inside a
//! single call.

use std::fmt;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::money::Money;
use crate::BPS_SCALE;

// =============================================================================
// Discount
// =============================================================================

/// Discount rate in basis points (1000 bps = 10 %).
///
/// A coupon's discount is a fraction in (0, 1]; in basis points that is the
/// integer range 1..=10000.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Discount(u32);

impl Discount {
    /// Creates a discount from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Discount(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a fraction (0.1 for 10 %). Display only.
    #[inline]
    pub fn fraction(&self) -> f64 {
        self.0 as f64 / BPS_SCALE as f64
    }

    /// True for rates in (0, 100 %].
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.0 > 0 && self.0 <= BPS_SCALE
    }
}

// =============================================================================
// Coupon
// =============================================================================

/// A named discount code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coupon {
    /// Code the customer types in ("SAVE10").
    pub code: String,

    /// Discount granted by the code.
    #[serde(rename = "discount_bps")]
    pub discount: Discount,
}

impl Coupon {
    pub fn new(code: impl Into<String>, discount_bps: u32) -> Self {
        Coupon {
            code: code.into(),
            discount: Discount::from_bps(discount_bps),
        }
    }
}

// =============================================================================
// Orders & Payments
// =============================================================================

/// An order ready for payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Amount to charge.
    pub total_amount: Money,
}

impl Order {
    pub fn new(total_amount: Money) -> Self {
        Order { total_amount }
    }
}

/// Card details supplied by the customer.
///
/// `Debug` masks the number so it never lands in logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub credit_card_number: String,
}

impl PaymentMethod {
    pub fn card(number: impl Into<String>) -> Self {
        PaymentMethod {
            credit_card_number: number.into(),
        }
    }

    /// The card number with everything but the last four digits hidden.
    pub fn masked(&self) -> String {
        let digits: Vec<char> = self.credit_card_number.chars().collect();
        let shown = digits.len().min(4);
        let tail: String = digits[digits.len() - shown..].iter().collect();
        format!("****{}", tail)
    }
}

impl fmt::Debug for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentMethod")
            .field("credit_card_number", &self.masked())
            .finish()
    }
}

/// Status reported by the payment gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChargeStatus {
    Success,
    Failed,
    /// Any status string this crate does not know about.
    #[serde(other)]
    Unknown,
}

/// What the payment gateway returned for one charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeResult {
    pub status: ChargeStatus,
}

impl ChargeResult {
    pub fn new(status: ChargeStatus) -> Self {
        ChargeResult { status }
    }
}

/// Why an order was not placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderFailure {
    /// The gateway answered with a non-success status.
    PaymentError,
}

impl fmt::Display for OrderFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderFailure::PaymentError => write!(f, "payment_error"),
        }
    }
}

/// Result of `submit_order`.
///
/// ## Serialization
/// ```json
/// { "success": true }
/// { "success": false, "error": "payment_error" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderOutcome {
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<OrderFailure>,
}

impl OrderOutcome {
    pub const fn success() -> Self {
        OrderOutcome {
            success: true,
            error: None,
        }
    }

    pub const fn failure(reason: OrderFailure) -> Self {
        OrderOutcome {
            success: false,
            error: Some(reason),
        }
    }

    #[inline]
    pub const fn is_success(&self) -> bool {
        self.success
    }
}

// =============================================================================
// Shipping
// =============================================================================

/// A shipping quote for one destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingQuote {
    pub cost: Money,
    pub estimated_days: u32,
}

impl ShippingQuote {
    pub fn new(cost: Money, estimated_days: u32) -> Self {
        ShippingQuote {
            cost,
            estimated_days,
        }
    }
}

// =============================================================================
// Business Hours
// =============================================================================

/// Opening window, by hour of the local day: `[open_hour, close_hour)`.
///
/// ```text
///  07:59  closed
///  08:00  open     ◄── open_hour (inclusive)
///  19:59  open
///  20:00  closed   ◄── close_hour (exclusive)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessHours {
    #[serde(default = "default_open_hour")]
    pub open_hour: u32,

    #[serde(default = "default_close_hour")]
    pub close_hour: u32,
}

fn default_open_hour() -> u32 {
    8
}

fn default_close_hour() -> u32 {
    20
}

impl Default for BusinessHours {
    fn default() -> Self {
        BusinessHours {
            open_hour: default_open_hour(),
            close_hour: default_close_hour(),
        }
    }
}

impl BusinessHours {
    pub fn new(open_hour: u32, close_hour: u32) -> Self {
        BusinessHours {
            open_hour,
            close_hour,
        }
    }

    /// True if `time` falls inside the window.
    pub fn is_open_at(&self, time: NaiveTime) -> bool {
        let hour = time.hour();
        hour >= self.open_hour && hour < self.close_hour
    }

    /// Opening must come before closing, and closing at most at 24.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.close_hour > 24 || self.open_hour >= self.close_hour {
            return Err(ValidationError::OutOfRange {
                field: "hours".to_string(),
                min: 0,
                max: 24,
            });
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
