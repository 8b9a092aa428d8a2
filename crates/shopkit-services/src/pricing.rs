//! Price conversion through the exchange-rate service.

use tracing::debug;

use shopkit_core::Money;

use crate::collaborators::ExchangeRates;
use crate::error::{ServiceError, ServiceResult};

/// Converts `price` into `currency_code` at the current rate.
///
/// The rate is fetched on every call; lookup errors are returned unchanged.
/// A rate that is negative or not finite is refused instead of being
/// multiplied into a nonsense price.
pub fn get_price_in_currency(
    rates: &dyn ExchangeRates,
    price: Money,
    currency_code: &str,
) -> ServiceResult<Money> {
    let rate = rates.exchange_rate(currency_code)?;
    if !rate.is_finite() || rate < 0.0 {
        return Err(ServiceError::collaborator(
            "exchange rates",
            format!("unusable rate {} for {}", rate, currency_code),
        ));
    }

    let converted = price.convert(rate);
    debug!(currency = currency_code, rate, %price, %converted, "Converted price");
    Ok(converted)
}
