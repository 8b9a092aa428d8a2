//! # Order Submission
//!
//! ```text
//! submit_order(order, card)
//!      │
//!      ▼
//! PaymentGateway::charge(card, order.total_amount)
//!      │
//!      ├── Err(e)            → Err(e)        (gateway broke)
//!      ├── status: success   → { success: true }
//!      └── anything else     → { success: false, error: "payment_error" }
//! ```

use tracing::{info, warn};

use shopkit_core::{ChargeStatus, Order, OrderFailure, OrderOutcome, PaymentMethod};

use crate::collaborators::PaymentGateway;
use crate::error::ServiceResult;

/// Charges `payment_method` for the order total and reports the outcome.
///
/// The gateway is called exactly once, with the caller's payment method and
/// `order.total_amount`. No retry on decline.
pub async fn submit_order(
    payments: &dyn PaymentGateway,
    order: &Order,
    payment_method: &PaymentMethod,
) -> ServiceResult<OrderOutcome> {
    let result = payments
        .charge(payment_method, order.total_amount)
        .await?;

    match result.status {
        ChargeStatus::Success => {
            info!(amount = %order.total_amount, card = %payment_method.masked(), "Order paid");
            Ok(OrderOutcome::success())
        }
        status => {
            warn!(
                ?status,
                amount = %order.total_amount,
                card = %payment_method.masked(),
                "Payment declined"
            );
            Ok(OrderOutcome::failure(OrderFailure::PaymentError))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;
    use crate::testing::ScriptedGateway;
    use shopkit_core::Money;

    fn order() -> Order {
        Order::new(Money::from_major_minor(10, 0))
    }

    fn card() -> PaymentMethod {
        PaymentMethod::card("1234")
    }

    #[tokio::test]
    async fn test_charges_card_for_order_total() {
        let gateway = ScriptedGateway::answering(ChargeStatus::Success);
        submit_order(&gateway, &order(), &card()).await.unwrap();

        assert_eq!(gateway.calls(), vec![(card(), Money::from_cents(1000))]);
    }

    #[tokio::test]
    async fn test_success() {
        let gateway = ScriptedGateway::answering(ChargeStatus::Success);
        let outcome = submit_order(&gateway, &order(), &card()).await.unwrap();
        assert_eq!(outcome, OrderOutcome::success());
        assert!(outcome.is_success());
    }

    #[tokio::test]
    async fn test_failed_charge_is_payment_error() {
        let gateway = ScriptedGateway::answering(ChargeStatus::Failed);
        let outcome = submit_order(&gateway, &order(), &card()).await.unwrap();
        assert_eq!(
            serde_json::to_value(outcome).unwrap(),
            serde_json::json!({ "success": false, "error": "payment_error" })
        );
    }

    #[tokio::test]
    async fn test_unknown_status_is_payment_error() {
        let gateway = ScriptedGateway::answering(ChargeStatus::Unknown);
        let outcome = submit_order(&gateway, &order(), &card()).await.unwrap();
        assert_eq!(outcome, OrderOutcome::failure(OrderFailure::PaymentError));
    }

    #[tokio::test]
    async fn test_gateway_error_is_returned() {
        let gateway = ScriptedGateway::failing("timeout");
        let err = submit_order(&gateway, &order(), &card()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Collaborator { .. }));
        assert_eq!(gateway.calls().len(), 1);
    }
}
