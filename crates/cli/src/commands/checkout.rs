//! Checkout and quote commands.

use amoneph_store::BulkQuote;

use crate::config::CliConfig;

/// Render the order message and the WhatsApp deep link.
///
/// An empty cart is reported as an error so the shell exit code reflects
/// the rejection.
///
/// # Errors
///
/// Returns an error when the cart is empty or the data directory cannot be
/// opened.
pub fn run(config: &CliConfig) -> Result<(), Box<dyn std::error::Error>> {
    let store = super::open_store(config)?;

    let message = store.render_order_message(&config.checkout)?;
    let url = store.checkout_url(&config.checkout)?;

    println!("{message}");
    println!();
    println!("Order link: {url}");
    Ok(())
}

/// Print the informational bulk-discount quote for a quantity.
pub fn quote(quantity: u32) {
    let quote = BulkQuote::for_quantity(quantity);
    if quote.percent == 0 {
        println!("Order 5+ items to get 10% discount, 10+ for 20%");
    } else {
        println!("You get {}% off on {} items!", quote.percent, quote.quantity);
        println!("Save up to {}", quote.projected_saving);
    }
}
