//! Checkout arithmetic, order-message rendering, and the WhatsApp deep link.
//!
//! Checkout happens off-platform: the store renders a human-readable order
//! summary, percent-encodes it, and appends it to a `wa.me` deep link that
//! opens a chat with the shop pre-filled with the message. Producing the URL
//! is this module's whole job; opening it belongs to the caller.

use std::fmt::Write as _;

use amoneph_core::{Price, Quantity, Size};

use crate::cart::LineItem;
use crate::error::CheckoutError;

/// Default WhatsApp number orders are sent to.
const DEFAULT_WHATSAPP_NUMBER: &str = "254768427602";

/// Orders at or above this subtotal ship free.
const FREE_DELIVERY_THRESHOLD: Price = Price::new(2000);

/// Flat delivery fee below the free-delivery threshold.
const FLAT_DELIVERY_FEE: Price = Price::new(200);

/// Unit price the bulk-discount quote is projected against.
const BULK_QUOTE_UNIT_PRICE: Price = Price::new(450);

/// Checkout rules and destination.
#[derive(Debug, Clone)]
pub struct CheckoutConfig {
    /// WhatsApp number (international format, digits only) the deep link
    /// targets.
    pub whatsapp_number: String,
    /// Subtotal at which the delivery fee is waived.
    pub free_delivery_threshold: Price,
    /// Flat fee charged below the threshold.
    pub delivery_fee: Price,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            whatsapp_number: DEFAULT_WHATSAPP_NUMBER.to_owned(),
            free_delivery_threshold: FREE_DELIVERY_THRESHOLD,
            delivery_fee: FLAT_DELIVERY_FEE,
        }
    }
}

/// Derived checkout figures. Never stored, always recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckoutSummary {
    pub subtotal: Price,
    pub delivery_fee: Price,
    pub grand_total: Price,
}

impl CheckoutSummary {
    /// Apply the delivery rule to a subtotal.
    #[must_use]
    pub fn compute(subtotal: Price, config: &CheckoutConfig) -> Self {
        let delivery_fee = if subtotal >= config.free_delivery_threshold {
            Price::ZERO
        } else {
            config.delivery_fee
        };
        Self {
            subtotal,
            delivery_fee,
            grand_total: subtotal + delivery_fee,
        }
    }
}

/// Render the full, line-item-enumerated order message.
///
/// # Errors
///
/// Returns [`CheckoutError::EmptyCart`] when `items` is empty.
pub fn render_order_message(
    items: &[LineItem],
    config: &CheckoutConfig,
) -> Result<String, CheckoutError> {
    if items.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let subtotal: Price = items.iter().map(LineItem::line_total).sum();
    let summary = CheckoutSummary::compute(subtotal, config);

    let mut message = String::new();
    message.push_str("Hello Amoneph Botanicals! I'd like to place an order:\n\n");
    message.push_str("*ORDER SUMMARY*\n");
    message.push_str("================\n\n");

    for (index, item) in items.iter().enumerate() {
        let _ = writeln!(message, "{}. {}", index + 1, item.name);
        let _ = writeln!(message, "   Size: {}", item.size);
        let _ = writeln!(message, "   Qty: {}", item.quantity);
        let _ = writeln!(message, "   Price: {}\n", item.line_total());
    }

    message.push_str("================\n");
    let _ = writeln!(message, "Subtotal: {}", summary.subtotal);
    let _ = writeln!(message, "Delivery: {}", DeliveryLabel(summary.delivery_fee));
    let _ = writeln!(message, "*TOTAL: {}*\n", summary.grand_total);
    message.push_str("Please let me know the next steps!");

    Ok(message)
}

/// Render the short single-product message used by the buy-now flow.
#[must_use]
pub fn render_buy_now_message(
    name: &str,
    size: &Size,
    quantity: Quantity,
    total: Price,
) -> String {
    format!(
        "Hello Amoneph Botanicals! I'd like to order:\n\n\
         *Product:* {name}\n\
         *Size:* {size}\n\
         *Quantity:* {quantity}\n\
         *Total:* {total}\n\n\
         Please let me know the next steps!"
    )
}

/// Build the `wa.me` deep link carrying the percent-encoded message.
#[must_use]
pub fn deep_link(message: &str, config: &CheckoutConfig) -> String {
    format!(
        "https://wa.me/{}?text={}",
        config.whatsapp_number,
        urlencoding::encode(message)
    )
}

/// Informational bulk-discount quote. Never applied to totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulkQuote {
    /// Quantity the quote was computed for.
    pub quantity: u32,
    /// Discount percentage earned at this quantity (0, 10, or 20).
    pub percent: u8,
    /// Projected saving at the reference unit price.
    pub projected_saving: Price,
}

impl BulkQuote {
    /// Quote the discount tier for a quantity: 10% at 5+, 20% at 10+.
    #[must_use]
    pub fn for_quantity(quantity: u32) -> Self {
        let percent: u8 = if quantity >= 10 {
            20
        } else if quantity >= 5 {
            10
        } else {
            0
        };
        let projected_saving = Price::new(
            BULK_QUOTE_UNIT_PRICE.amount() * u64::from(quantity) * u64::from(percent) / 100,
        );
        Self {
            quantity,
            percent,
            projected_saving,
        }
    }
}

/// Formats a delivery fee as `FREE` when waived, the price otherwise.
struct DeliveryLabel(Price);

impl std::fmt::Display for DeliveryLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_zero() {
            write!(f, "FREE")
        } else {
            write!(f, "{}", self.0)
        }
    }
}
