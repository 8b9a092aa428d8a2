//! Subcommand handlers. Each returns the text printed on stdout.

use shopkit_core::validation::{self, VALIDATION_SUCCESS};
use shopkit_core::{CoreResult, Money};
use shopkit_services::{is_online, ShopConfig, SystemClock};

pub fn coupons(config: &ShopConfig) -> String {
    config
        .coupons
        .coupons()
        .iter()
        .map(|c| format!("{:<12} {}%", c.code, c.discount.bps() as f64 / 100.0))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn discount(config: &ShopConfig, price: Money, code: &str) -> CoreResult<String> {
    Ok(config.coupons.calculate_discount(price, code)?.to_string())
}

pub fn validate_user(username: &str, age: i64) -> CoreResult<String> {
    validation::validate_user_input(username, age)?;
    Ok(VALIDATION_SUCCESS.to_string())
}

pub fn price_in_range(price: Money, min: Money, max: Money) -> String {
    validation::is_price_in_range(price, min, max).to_string()
}

pub fn username(name: &str) -> String {
    if validation::is_valid_username(name) {
        "valid".to_string()
    } else {
        "invalid".to_string()
    }
}

pub fn can_drive(config: &ShopConfig, age: u32, country: &str) -> CoreResult<String> {
    Ok(config.driving.can_drive(age, country)?.to_string())
}

pub fn online(config: &ShopConfig) -> String {
    if is_online(&SystemClock, &config.hours) {
        "online".to_string()
    } else {
        "offline".to_string()
    }
}
