//! Test doubles for the collaborator traits.
//!
//! Every double answers from a fixed script and records what it was called
//! with, so tests can assert on both sides of the conversation.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};

use shopkit_core::{ChargeResult, ChargeStatus, Money, PaymentMethod, ShippingQuote};

use crate::collaborators::{
    Analytics, Clock, EmailSender, ExchangeRates, PaymentGateway, SecurityCodes, ShippingQuotes,
};
use crate::error::{ServiceError, ServiceResult};

type CallLog<T> = Arc<Mutex<Vec<T>>>;

fn record<T>(log: &CallLog<T>, entry: T) {
    log.lock().unwrap().push(entry);
}

fn snapshot<T: Clone>(log: &CallLog<T>) -> Vec<T> {
    log.lock().unwrap().clone()
}

// =============================================================================
// Exchange rates
// =============================================================================

#[derive(Default)]
pub struct FixedRates {
    rates: HashMap<String, f64>,
    pub calls: CallLog<String>,
}

impl FixedRates {
    pub fn with(mut self, currency: &str, rate: f64) -> Self {
        self.rates.insert(currency.to_string(), rate);
        self
    }
}

impl ExchangeRates for FixedRates {
    fn exchange_rate(&self, currency_code: &str) -> ServiceResult<f64> {
        record(&self.calls, currency_code.to_string());
        self.rates
            .get(currency_code)
            .copied()
            .ok_or_else(|| ServiceError::Unavailable(format!("exchange rate for {}", currency_code)))
    }
}

// =============================================================================
// Shipping
// =============================================================================

pub struct StubShipping {
    quote: Option<ShippingQuote>,
    pub calls: CallLog<String>,
}

impl StubShipping {
    pub fn answering(quote: Option<ShippingQuote>) -> Self {
        StubShipping {
            quote,
            calls: Default::default(),
        }
    }
}

impl ShippingQuotes for StubShipping {
    fn quote(&self, destination: &str) -> Option<ShippingQuote> {
        record(&self.calls, destination.to_string());
        self.quote
    }
}

// =============================================================================
// Analytics
// =============================================================================

#[derive(Default)]
pub struct RecordingAnalytics {
    pub views: CallLog<String>,
}

impl RecordingAnalytics {
    pub fn paths(&self) -> Vec<String> {
        snapshot(&self.views)
    }
}

impl Analytics for RecordingAnalytics {
    fn track_page_view(&self, path: &str) {
        record(&self.views, path.to_string());
    }
}

// =============================================================================
// Payments
// =============================================================================

pub struct ScriptedGateway {
    answer: Result<ChargeStatus, String>,
    pub charges: CallLog<(PaymentMethod, Money)>,
}

impl ScriptedGateway {
    pub fn answering(status: ChargeStatus) -> Self {
        ScriptedGateway {
            answer: Ok(status),
            charges: Default::default(),
        }
    }

    pub fn failing(reason: &str) -> Self {
        ScriptedGateway {
            answer: Err(reason.to_string()),
            charges: Default::default(),
        }
    }

    pub fn calls(&self) -> Vec<(PaymentMethod, Money)> {
        snapshot(&self.charges)
    }
}

#[async_trait]
impl PaymentGateway for ScriptedGateway {
    async fn charge(
        &self,
        payment_method: &PaymentMethod,
        amount: Money,
    ) -> ServiceResult<ChargeResult> {
        record(&self.charges, (payment_method.clone(), amount));
        match &self.answer {
            Ok(status) => Ok(ChargeResult::new(*status)),
            Err(reason) => Err(ServiceError::collaborator("payment gateway", reason.clone())),
        }
    }
}

// =============================================================================
// Email
// =============================================================================

#[derive(Default)]
pub struct RecordingMailer {
    fail_with: Option<String>,
    pub sent: CallLog<(String, String)>,
}

impl RecordingMailer {
    pub fn failing(reason: &str) -> Self {
        RecordingMailer {
            fail_with: Some(reason.to_string()),
            sent: Default::default(),
        }
    }

    pub fn messages(&self) -> Vec<(String, String)> {
        snapshot(&self.sent)
    }
}

#[async_trait]
impl EmailSender for RecordingMailer {
    async fn send_email(&self, to: &str, body: &str) -> ServiceResult<()> {
        record(&self.sent, (to.to_string(), body.to_string()));
        match &self.fail_with {
            Some(reason) => Err(ServiceError::collaborator("email", reason.clone())),
            None => Ok(()),
        }
    }
}

// =============================================================================
// Security codes
// =============================================================================

pub struct FixedCodes {
    code: u32,
    pub generated: CallLog<u32>,
}

impl FixedCodes {
    pub fn new(code: u32) -> Self {
        FixedCodes {
            code,
            generated: Default::default(),
        }
    }

    pub fn times_called(&self) -> usize {
        self.generated.lock().unwrap().len()
    }
}

impl SecurityCodes for FixedCodes {
    fn generate_code(&self) -> u32 {
        record(&self.generated, self.code);
        self.code
    }
}

// =============================================================================
// Clock
// =============================================================================

pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    /// 2024-01-15 at `hour:minute`.
    pub fn at(hour: u32, minute: u32) -> Self {
        let time = NaiveDate::from_ymd_opt(2024, 1, 15)
            .and_then(|d| d.and_hms_opt(hour, minute, 0))
            .unwrap();
        FixedClock(time)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
