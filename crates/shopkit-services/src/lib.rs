//! # shopkit-services: Collaborator Orchestration
//!
//! Each flow in this crate calls one (sometimes two) external services,
//! interprets the answer, and returns a plain value. Collaborators are
//! passed in as trait objects; nothing here owns a connection or any state.
//!
//! ## Flows
//! ```text
//! ┌────────────────────────┬───────────────────────────┬──────────────────┐
//! │ Flow                   │ Collaborator(s)           │ Returns          │
//! ├────────────────────────┼───────────────────────────┼──────────────────┤
//! │ get_price_in_currency  │ ExchangeRates             │ Money            │
//! │ get_shipping_info      │ ShippingQuotes            │ message          │
//! │ render_page            │ Analytics                 │ page content     │
//! │ submit_order           │ PaymentGateway            │ OrderOutcome     │
//! │ sign_up                │ EmailSender               │ bool             │
//! │ login                  │ SecurityCodes, EmailSender│ ()               │
//! │ is_online              │ Clock                     │ bool             │
//! └────────────────────────┴───────────────────────────┴──────────────────┘
//! ```
//!
//! ## Failure Semantics
//! No retries, no fallbacks. A collaborator error comes back as
//! `Err(ServiceError)` from the flow that called it. The only argument
//! the flows judge themselves is the sign-up email, and a malformed one
//! comes back as `Ok(false)`. Nothing panics.

pub mod accounts;
pub mod availability;
pub mod collaborators;
pub mod config;
pub mod data;
pub mod error;
pub mod orders;
pub mod pages;
pub mod pricing;
pub mod shipping;

#[cfg(test)]
pub(crate) mod testing;

pub use accounts::{is_valid_email, login, sign_up};
pub use availability::is_online;
pub use collaborators::{
    Analytics, Clock, EmailSender, ExchangeRates, PaymentGateway, SecurityCodes, ShippingQuotes,
    SystemClock,
};
pub use config::{ConfigError, ShopConfig};
pub use data::fetch_data;
pub use error::{ServiceError, ServiceResult};
pub use orders::submit_order;
pub use pages::render_page;
pub use pricing::get_price_in_currency;
pub use shipping::get_shipping_info;
