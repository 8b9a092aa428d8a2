//! # Collaborator Contracts
//!
//! External services the flows depend on. shopkit ships no implementation
//! except [`SystemClock`]; callers plug in their own clients, tests plug in
//! doubles.
//!
//! Payment and email are network round trips and are async; the rest are
//! plain calls.

use async_trait::async_trait;
use chrono::NaiveDateTime;

use shopkit_core::{ChargeResult, Money, PaymentMethod, ShippingQuote};

use crate::error::ServiceResult;

/// Currency exchange-rate lookup.
pub trait ExchangeRates: Send + Sync {
    /// Multiplier from the store currency into `currency_code`.
    fn exchange_rate(&self, currency_code: &str) -> ServiceResult<f64>;
}

/// Shipping quote lookup. `None` means the destination is not served.
pub trait ShippingQuotes: Send + Sync {
    fn quote(&self, destination: &str) -> Option<ShippingQuote>;
}

/// Page-view tracking. Fire-and-forget: there is nothing to wait for and
/// nothing to report back.
pub trait Analytics: Send + Sync {
    fn track_page_view(&self, path: &str);
}

/// Card payments.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn charge(&self, payment_method: &PaymentMethod, amount: Money)
        -> ServiceResult<ChargeResult>;
}

/// Outgoing email. `body` is sent exactly as given.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send_email(&self, to: &str, body: &str) -> ServiceResult<()>;
}

/// One-time login codes.
pub trait SecurityCodes: Send + Sync {
    fn generate_code(&self) -> u32;
}

/// Local wall-clock time.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// The machine's local clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}
