//! # Loose Input Boundary
//!
//! Entry points for callers holding untyped values: JSON request bodies,
//! form posts decoded into `serde_json::Value`, scripting bridges.
//!
//! Each function checks the runtime type of every argument first and turns
//! a mismatch into a tagged error, then hands the typed values to the rule
//! in `coupons`, `validation` or `driving`. Nothing is coerced: the string
//! `"100"` is not a price and the string `"20"` is not an age.
//!
//! ```text
//! Value ──► type check ──┬── wrong type ──► CoreError / false
//!                        └── typed value ─► rule function
//! ```

use serde_json::Value;

use crate::coupons;
use crate::driving::DrivingRules;
use crate::error::{CoreError, CoreResult, UserField, UserInputErrors, ValidationError};
use crate::money::Money;
use crate::validation::{self, username_violation};
use crate::{MAX_AGE, MIN_AGE};

fn wrong_type(field: &str, expected: &'static str) -> ValidationError {
    ValidationError::WrongType {
        field: field.to_string(),
        expected,
    }
}

/// Reads a price given in dollars (`100`, `12.5`), rounded to the cent.
/// Non-numbers and negative amounts are rejected.
fn price_from_value(price: &Value) -> CoreResult<Money> {
    let dollars = price.as_f64().ok_or_else(|| CoreError::InvalidPrice {
        reason: format!("expected a number, got {}", type_name(price)),
    })?;
    if !dollars.is_finite() || dollars < 0.0 {
        return Err(CoreError::InvalidPrice {
            reason: format!("{} is negative", price),
        });
    }
    Ok(Money::from_dollars_f64(dollars))
}

/// Reads an age as any JSON number, whole or not.
fn age_from_value(age: &Value) -> Option<f64> {
    age.as_f64().filter(|years| years.is_finite())
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// `coupons::calculate_discount` for untyped arguments.
///
/// ```rust
/// use serde_json::json;
/// use shopkit_core::loose;
///
/// assert_eq!(loose::calculate_discount(&json!(100), &json!("SAVE10")).unwrap().cents(), 9000);
/// assert!(loose::calculate_discount(&json!("100"), &json!("SAVE10")).is_err());
/// assert!(loose::calculate_discount(&json!(100), &json!(10)).is_err());
/// ```
pub fn calculate_discount(price: &Value, code: &Value) -> CoreResult<Money> {
    let price = price_from_value(price)?;
    let code = code
        .as_str()
        .ok_or_else(|| CoreError::InvalidCouponCode(format!("expected a string, got {}", type_name(code))))?;
    coupons::calculate_discount(price, code)
}

/// `validation::validate_user_input` for untyped arguments.
///
/// A wrong type counts as a violation of that field, so both fields are
/// still reported together.
pub fn validate_user_input(username: &Value, age: &Value) -> CoreResult<()> {
    let mut errors = UserInputErrors::new();

    let username_error = match username.as_str() {
        Some(name) => username_violation(name),
        None => Some(wrong_type("username", "string")),
    };
    if let Some(err) = username_error {
        errors.push(UserField::Username, err);
    }

    let age_error = match age_from_value(age) {
        Some(years) if (MIN_AGE as f64..=MAX_AGE as f64).contains(&years) => None,
        Some(_) => Some(ValidationError::OutOfRange {
            field: "age".to_string(),
            min: MIN_AGE,
            max: MAX_AGE,
        }),
        None => Some(wrong_type("age", "number")),
    };
    if let Some(err) = age_error {
        errors.push(UserField::Age, err);
    }

    errors.into_result()
}

/// `validation::is_valid_username` for untyped arguments; non-strings are
/// simply invalid.
pub fn is_valid_username(username: &Value) -> bool {
    username.as_str().is_some_and(validation::is_valid_username)
}

/// `driving::can_drive` for untyped arguments. Fractional ages compare
/// as-is against the jurisdiction's minimum.
pub fn can_drive(age: &Value, country_code: &Value) -> CoreResult<bool> {
    let code = country_code
        .as_str()
        .ok_or_else(|| CoreError::InvalidCountry(country_code.to_string()))?;
    let years = age_from_value(age)
        .filter(|years| *years >= 0.0)
        .ok_or_else(|| wrong_type("age", "non-negative number"))?;
    let minimum = DrivingRules::standard()
        .minimum_age(code)
        .ok_or_else(|| CoreError::InvalidCountry(code.to_string()))?;
    Ok(years >= f64::from(minimum))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn is_invalid<T: std::fmt::Debug>(result: CoreResult<T>) -> bool {
        result.unwrap_err().to_string().to_lowercase().contains("invalid")
    }

    #[test]
    fn test_calculate_discount_numbers() {
        assert_eq!(
            calculate_discount(&json!(100), &json!("SAVE10")).unwrap(),
            Money::from_major_minor(90, 0)
        );
        assert_eq!(
            calculate_discount(&json!(100), &json!("SAVE20")).unwrap(),
            Money::from_major_minor(80, 0)
        );
        assert_eq!(
            calculate_discount(&json!(12.5), &json!("INVALID")).unwrap(),
            Money::from_cents(1250)
        );
    }

    #[test]
    fn test_calculate_discount_rejects_wrong_types() {
        assert!(is_invalid(calculate_discount(&json!("100"), &json!("SAVE10"))));
        assert!(is_invalid(calculate_discount(&json!(null), &json!("SAVE10"))));
        assert!(is_invalid(calculate_discount(&json!(-100), &json!("SAVE10"))));
        assert!(is_invalid(calculate_discount(&json!(100), &json!(10))));
    }

    #[test]
    fn test_calculate_discount_accepts_any_non_negative_number() {
        assert_eq!(
            calculate_discount(&json!(0.1 + 0.2), &json!("INVALID")).unwrap(),
            Money::from_cents(30)
        );
        assert_eq!(
            calculate_discount(&json!(1e16), &json!("INVALID")).unwrap(),
            Money::from_cents(1_000_000_000_000_000_000)
        );
        assert_eq!(
            calculate_discount(&json!(10.999), &json!("SAVE10")).unwrap(),
            Money::from_cents(990)
        );
        assert!(is_invalid(calculate_discount(&json!(-0.01), &json!("SAVE10"))));
    }

    #[test]
    fn test_negative_price_wins_over_bad_code() {
        let err = calculate_discount(&json!(-5), &json!(10)).unwrap_err();
        assert!(matches!(err, CoreError::InvalidPrice { .. }));
    }

    #[test]
    fn test_validate_user_input_types() {
        assert!(validate_user_input(&json!("john"), &json!(20)).is_ok());
        assert!(is_invalid(validate_user_input(&json!(123), &json!(20))));
        assert!(is_invalid(validate_user_input(&json!("john"), &json!("20"))));
        assert!(is_invalid(validate_user_input(&json!("john"), &json!(null))));
    }

    #[test]
    fn test_validate_user_input_accepts_float_ages() {
        assert!(validate_user_input(&json!("john"), &json!(20.0)).is_ok());
        assert!(validate_user_input(&json!("john"), &json!(20.5)).is_ok());
        assert!(is_invalid(validate_user_input(&json!("john"), &json!(17.9))));
        assert!(is_invalid(validate_user_input(&json!("john"), &json!(100.5))));
    }

    #[test]
    fn test_validate_user_input_both_invalid() {
        let text = validate_user_input(&json!(0), &json!(""))
            .unwrap_err()
            .to_string()
            .to_lowercase();
        assert!(text.contains("invalid username"));
        assert!(text.contains("invalid age"));
    }

    #[test]
    fn test_is_valid_username_types() {
        assert!(is_valid_username(&json!("alice")));
        assert!(!is_valid_username(&json!(null)));
        assert!(!is_valid_username(&json!(123)));
        assert!(!is_valid_username(&json!(["alice"])));
    }

    #[test]
    fn test_can_drive_types() {
        assert!(can_drive(&json!(16), &json!("US")).unwrap());
        assert!(is_invalid(can_drive(&json!(20), &json!("INVALID"))));
        assert!(is_invalid(can_drive(&json!(20), &json!(1))));
        assert!(is_invalid(can_drive(&json!(-1), &json!("US"))));
    }

    #[test]
    fn test_can_drive_float_ages() {
        assert!(can_drive(&json!(16.0), &json!("US")).unwrap());
        assert!(!can_drive(&json!(15.5), &json!("US")).unwrap());
        assert!(can_drive(&json!(17.0), &json!("uk")).unwrap());
    }
}
