//! # shopkit-core: Pure Storefront Rules
//!
//! This crate holds every decision shopkit makes that does not need the
//! outside world: discount math, coupon lookup, input validation and the
//! per-jurisdiction driving-age rules.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         shopkit Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/cli  (`shopkit`)                        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    shopkit-services                             │   │
//! │  │   submit_order, sign_up, login, render_page, is_online, ...     │   │
//! │  │   (talks to payment, email, analytics, rates, shipping, clock)  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shopkit-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌────────────┐ ┌─────────┐ ┌───────┐  │   │
//! │  │   │  money  │ │ coupons │ │ validation │ │ driving │ │ loose │  │   │
//! │  │   └─────────┘ └─────────┘ └────────────┘ └─────────┘ └───────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO NETWORK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Coupon, Order, ShippingQuote, BusinessHours, ...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`coupons`] - The coupon catalog and discount calculation
//! - [`validation`] - Username, age and price-range rules
//! - [`driving`] - Minimum driving age per jurisdiction
//! - [`loose`] - Runtime type checks for untyped (JSON) arguments
//! - [`intro`] - Small numeric helpers (max, fizz-buzz, averages)
//!
//! ## Example Usage
//!
//! ```rust
//! use shopkit_core::coupons::calculate_discount;
//! use shopkit_core::money::Money;
//!
//! let price = Money::from_major_minor(100, 0);
//! let discounted = calculate_discount(price, "SAVE10").unwrap();
//! assert_eq!(discounted, Money::from_major_minor(90, 0));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod coupons;
pub mod driving;
pub mod error;
pub mod intro;
pub mod loose;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use coupons::{calculate_discount, get_coupons, CouponCatalog};
pub use driving::{can_drive, DrivingRules};
pub use error::{CoreError, CoreResult, UserField, UserInputErrors, ValidationError};
pub use money::Money;
pub use types::*;
pub use validation::{is_price_in_range, is_valid_username, validate_user_input};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Shortest accepted username for sign-up forms (`validate_user_input`).
pub const USER_INPUT_MIN_USERNAME: usize = 3;

/// Usernames must be strictly shorter than this in `validate_user_input`.
pub const USER_INPUT_USERNAME_LIMIT: usize = 256;

/// Youngest accepted age, inclusive.
pub const MIN_AGE: i64 = 18;

/// Oldest accepted age, inclusive.
pub const MAX_AGE: i64 = 100;

/// Account-name bounds used by `is_valid_username` (inclusive).
pub const USERNAME_MIN_LENGTH: usize = 5;
pub const USERNAME_MAX_LENGTH: usize = 15;

/// Basis points in a whole (100 %).
pub const BPS_SCALE: u32 = 10_000;
