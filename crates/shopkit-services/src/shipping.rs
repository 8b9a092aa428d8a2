//! Shipping quote formatting.

use tracing::info;

use crate::collaborators::ShippingQuotes;

/// Returned when the shipping service has no quote for a destination.
pub const SHIPPING_UNAVAILABLE: &str = "Shipping Unavailable";

/// Looks up a quote for `destination` and renders it for the checkout page.
///
/// ```text
/// Some({ cost: $10.00, estimated_days: 2 })  →  "Shipping Cost: $10 (2 Days)"
/// None                                       →  "Shipping Unavailable"
/// ```
pub fn get_shipping_info(quotes: &dyn ShippingQuotes, destination: &str) -> String {
    match quotes.quote(destination) {
        Some(quote) => format!(
            "Shipping Cost: {} ({} Days)",
            quote.cost.to_compact_string(),
            quote.estimated_days
        ),
        None => {
            info!(destination, "No shipping quote for destination");
            SHIPPING_UNAVAILABLE.to_string()
        }
    }
}
