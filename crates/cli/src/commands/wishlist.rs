//! Wishlist commands: toggle, list.

use amoneph_core::ProductId;
use amoneph_store::WishlistToggle;

use crate::config::CliConfig;

/// Toggle a product's wishlist membership.
///
/// # Errors
///
/// Returns an error if persistence fails.
pub fn toggle(config: &CliConfig, product_id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let product_id = ProductId::new(product_id);

    let mut store = super::open_store(config)?;
    match store.toggle_wishlist(product_id.clone())? {
        WishlistToggle::Added => println!("{product_id} added to wishlist!"),
        WishlistToggle::Removed => println!("{product_id} removed from wishlist"),
    }
    Ok(())
}

/// List wishlisted products.
///
/// # Errors
///
/// Returns an error if the data directory cannot be opened.
pub fn list(config: &CliConfig) -> Result<(), Box<dyn std::error::Error>> {
    let store = super::open_store(config)?;

    if store.wishlist().is_empty() {
        println!("Your wishlist is empty");
        return Ok(());
    }

    for product_id in store.wishlist() {
        println!("{product_id}");
    }
    Ok(())
}
