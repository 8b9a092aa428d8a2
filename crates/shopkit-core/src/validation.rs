//! # Validation Module
//!
//! Input validation rules for shopkit.
//!
//! ## Validation Layers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Loose boundary (`loose` module)                              │
//! │  ├── serde_json::Value arguments                                       │
//! │  └── Runtime type checks → ValidationError::WrongType                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (typed arguments)                                │
//! │  ├── Length rules (usernames)                                          │
//! │  ├── Range rules (age, price)                                          │
//! │  └── Violations collected, never short-circuited                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shopkit_core::validation::{validate_user_input, is_valid_username};
//!
//! assert!(validate_user_input("john", 20).is_ok());
//! assert!(validate_user_input("jo", 10).is_err());
//! assert!(is_valid_username("alice_b"));
//! ```

use crate::error::{CoreResult, UserField, UserInputErrors, ValidationError};
use crate::money::Money;
use crate::{
    MAX_AGE, MIN_AGE, USERNAME_MAX_LENGTH, USERNAME_MIN_LENGTH, USER_INPUT_MIN_USERNAME,
    USER_INPUT_USERNAME_LIMIT,
};

/// Message shown when `validate_user_input` passes.
pub const VALIDATION_SUCCESS: &str = "Validation successful";

// =============================================================================
// User Input
// =============================================================================

/// Validates a sign-up form.
///
/// ## Rules
/// - Username: at least 3 characters, fewer than 256
/// - Age: between 18 and 100, inclusive
///
/// Both fields are always checked, so a form with two problems reports two
/// problems.
///
/// ## User Workflow
/// ```text
/// validate_user_input("jo", 10)
///      │
///      ├── username "jo"  → TooShort    ─┐
///      │                                 ├──► Err(InvalidUserInput([..2 violations..]))
///      └── age 10         → OutOfRange  ─┘
/// ```
pub fn validate_user_input(username: &str, age: i64) -> CoreResult<()> {
    let mut errors = UserInputErrors::new();
    if let Some(err) = username_violation(username) {
        errors.push(UserField::Username, err);
    }
    if let Some(err) = age_violation(age) {
        errors.push(UserField::Age, err);
    }
    errors.into_result()
}

pub(crate) fn username_violation(username: &str) -> Option<ValidationError> {
    let len = username.chars().count();

    if len < USER_INPUT_MIN_USERNAME {
        return Some(ValidationError::TooShort {
            field: "username".to_string(),
            min: USER_INPUT_MIN_USERNAME,
        });
    }

    if len >= USER_INPUT_USERNAME_LIMIT {
        return Some(ValidationError::TooLong {
            field: "username".to_string(),
            max: USER_INPUT_USERNAME_LIMIT - 1,
        });
    }

    None
}

fn age_violation(age: i64) -> Option<ValidationError> {
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Some(ValidationError::OutOfRange {
            field: "age".to_string(),
            min: MIN_AGE,
            max: MAX_AGE,
        });
    }
    None
}

// =============================================================================
// Prices
// =============================================================================

/// Inclusive range check: `min <= price <= max`.
///
/// ## Example
/// ```rust
/// use shopkit_core::money::Money;
/// use shopkit_core::validation::is_price_in_range;
///
/// let (min, max) = (Money::zero(), Money::from_cents(10000));
/// assert!(is_price_in_range(min, min, max));
/// assert!(is_price_in_range(max, min, max));
/// assert!(!is_price_in_range(Money::from_cents(-1), min, max));
/// ```
pub fn is_price_in_range(price: Money, min: Money, max: Money) -> bool {
    price >= min && price <= max
}

// =============================================================================
// Usernames
// =============================================================================

/// Account-name rule: between 5 and 15 characters, inclusive.
pub fn is_valid_username(username: &str) -> bool {
    let len = username.chars().count();
    (USERNAME_MIN_LENGTH..=USERNAME_MAX_LENGTH).contains(&len)
}

// =============================================================================
// Unit Tests
// =============================================================================
