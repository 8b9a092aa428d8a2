//! # Coupons
//!
//! The coupon catalog and the discount it grants.
//!
//! ## Lookup Flow
//! ```text
//! calculate_discount($100.00, "SAVE10")
//!      │
//!      ├── price < 0?          → CoreError::InvalidPrice
//!      │
//!      ├── code in catalog?    → $100.00 - 10% = $90.00
//!      │
//!      └── unknown code        → $100.00 (unchanged)
//! ```
//!
//! The standard catalog is built once per process and never mutated. A
//! different catalog (from shop.toml) is just another `CouponCatalog` value.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{Coupon, Discount};

static STANDARD_CATALOG: Lazy<CouponCatalog> = Lazy::new(|| {
    CouponCatalog::new(vec![Coupon::new("SAVE10", 1000), Coupon::new("SAVE20", 2000)])
});

/// An immutable list of coupons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CouponCatalog {
    #[serde(rename = "catalog")]
    coupons: Vec<Coupon>,
}

impl Default for CouponCatalog {
    fn default() -> Self {
        STANDARD_CATALOG.clone()
    }
}

impl CouponCatalog {
    pub fn new(coupons: Vec<Coupon>) -> Self {
        CouponCatalog { coupons }
    }

    /// The built-in catalog: SAVE10 (10 %) and SAVE20 (20 %).
    pub fn standard() -> &'static CouponCatalog {
        &STANDARD_CATALOG
    }

    pub fn coupons(&self) -> &[Coupon] {
        &self.coupons
    }

    /// Discount for `code`, or `None` if no coupon matches exactly.
    pub fn discount_for(&self, code: &str) -> Option<Discount> {
        self.coupons
            .iter()
            .find(|c| c.code == code)
            .map(|c| c.discount)
    }

    /// Applies the coupon named by `code` to `price`.
    ///
    /// ## Rules
    /// - Negative prices are rejected
    /// - Zero is a valid price (free items stay free)
    /// - Unknown codes leave the price unchanged
    pub fn calculate_discount(&self, price: Money, code: &str) -> CoreResult<Money> {
        if price.is_negative() {
            return Err(CoreError::InvalidPrice {
                reason: format!("{} is negative", price),
            });
        }

        Ok(match self.discount_for(code) {
            Some(discount) => price.apply_discount(discount),
            None => price,
        })
    }

    /// Checks the catalog invariants: at least one coupon, non-empty unique
    /// codes, discounts in (0, 1].
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.coupons.is_empty() {
            return Err(ValidationError::Required {
                field: "coupons".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for coupon in &self.coupons {
            if coupon.code.trim().is_empty() {
                return Err(ValidationError::Required {
                    field: "coupon code".to_string(),
                });
            }
            if !coupon.discount.is_valid() {
                return Err(ValidationError::OutOfRange {
                    field: format!("discount for {}", coupon.code),
                    min: 1,
                    max: crate::BPS_SCALE as i64,
                });
            }
            if !seen.insert(coupon.code.as_str()) {
                return Err(ValidationError::Duplicate {
                    field: "coupon code".to_string(),
                    value: coupon.code.clone(),
                });
            }
        }

        Ok(())
    }
}

/// Returns the standard coupon catalog. Same contents on every call.
pub fn get_coupons() -> &'static [Coupon] {
    CouponCatalog::standard().coupons()
}

/// Applies a code from the standard catalog to `price`.
///
/// ## Example
/// ```rust
/// use shopkit_core::coupons::calculate_discount;
/// use shopkit_core::money::Money;
///
/// let price = Money::from_major_minor(100, 0);
/// assert_eq!(calculate_discount(price, "SAVE20").unwrap().cents(), 8000);
/// assert_eq!(calculate_discount(price, "INVALID").unwrap(), price);
/// assert!(calculate_discount(Money::from_cents(-100), "SAVE10").is_err());
/// ```
pub fn calculate_discount(price: Money, code: &str) -> CoreResult<Money> {
    CouponCatalog::standard().calculate_discount(price, code)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_get_coupons_is_populated() {
        let coupons = get_coupons();
        assert!(!coupons.is_empty());

        for coupon in coupons {
            assert!(!coupon.code.is_empty());
            assert!(coupon.discount.fraction() > 0.0);
            assert!(coupon.discount.fraction() <= 1.0);
        }
    }

    #[test]
    fn test_get_coupons_is_stable() {
        assert_eq!(get_coupons(), get_coupons());
        assert!(std::ptr::eq(get_coupons(), get_coupons()));
    }

    #[test]
    fn test_calculate_discount_known_codes() {
        let price = Money::from_major_minor(100, 0);
        assert_eq!(calculate_discount(price, "SAVE10").unwrap(), Money::from_major_minor(90, 0));
        assert_eq!(calculate_discount(price, "SAVE20").unwrap(), Money::from_major_minor(80, 0));
    }

    #[test]
    fn test_calculate_discount_unknown_code() {
        let price = Money::from_major_minor(100, 0);
        assert_eq!(calculate_discount(price, "INVALID").unwrap(), price);
        // Codes are matched exactly
        assert_eq!(calculate_discount(price, "save10").unwrap(), price);
    }

    #[test]
    fn test_calculate_discount_negative_price() {
        let err = calculate_discount(Money::from_major_minor(-100, 0), "SAVE10").unwrap_err();
        assert!(matches!(err, CoreError::InvalidPrice { .. }));
        assert!(err.to_string().to_lowercase().contains("invalid"));
    }

    #[test]
    fn test_zero_price_is_accepted() {
        assert_eq!(calculate_discount(Money::zero(), "SAVE10").unwrap(), Money::zero());
    }

    #[test]
    fn test_custom_catalog() {
        let catalog = CouponCatalog::new(vec![Coupon::new("HALF", 5000)]);
        let price = Money::from_cents(4000);
        assert_eq!(catalog.calculate_discount(price, "HALF").unwrap().cents(), 2000);
        assert_eq!(catalog.calculate_discount(price, "SAVE10").unwrap(), price);
    }

    #[test]
    fn test_catalog_validation() {
        assert!(CouponCatalog::standard().validate().is_ok());
        assert!(CouponCatalog::new(vec![]).validate().is_err());
        assert!(CouponCatalog::new(vec![Coupon::new("", 1000)]).validate().is_err());
        assert!(CouponCatalog::new(vec![Coupon::new("ZERO", 0)]).validate().is_err());
        assert!(CouponCatalog::new(vec![Coupon::new("MORE", 10_001)]).validate().is_err());
        assert!(matches!(
            CouponCatalog::new(vec![Coupon::new("A", 100), Coupon::new("A", 200)]).validate(),
            Err(ValidationError::Duplicate { .. })
        ));
    }

    proptest! {
        #[test]
        fn prop_unknown_code_returns_price(cents in 0i64..1_000_000_000, code in "[a-z]{1,12}") {
            let price = Money::from_cents(cents);
            prop_assert_eq!(calculate_discount(price, &code).unwrap(), price);
        }

        #[test]
        fn prop_negative_price_is_invalid(cents in i64::MIN / 2..0, code in "SAVE10|SAVE20|[A-Z]{0,8}") {
            let result = calculate_discount(Money::from_cents(cents), &code);
            let rejected = matches!(result, Err(CoreError::InvalidPrice { .. }));
            prop_assert!(rejected, "{} with {:?} was accepted", cents, code);
        }

        #[test]
        fn prop_discount_never_raises_price(cents in 0i64..1_000_000_000) {
            let price = Money::from_cents(cents);
            for coupon in get_coupons() {
                let discounted = calculate_discount(price, &coupon.code).unwrap();
                prop_assert!(discounted <= price);
                prop_assert!(!discounted.is_negative());
            }
        }
    }
}
