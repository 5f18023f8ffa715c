//! Cart commands: add, remove, set-quantity, show.

use amoneph_core::{Price, ProductId, Quantity, Size};
use amoneph_store::SetQuantityOutcome;
use amoneph_store::checkout::{deep_link, render_buy_now_message};

use crate::config::CliConfig;

/// Add a `(product, size)` line to the cart.
///
/// With `buy_now`, also prints the single-product order message and deep
/// link so the order can be placed immediately.
///
/// # Errors
///
/// Returns an error for an invalid quantity or price, or if persistence
/// fails.
pub fn add(
    config: &CliConfig,
    product_id: &str,
    size: &str,
    price: u64,
    quantity: u32,
    buy_now: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let product_id = ProductId::new(product_id);
    let size = Size::new(size);
    let price = Price::new(price);
    let quantity = Quantity::new(quantity)?;

    let mut store = super::open_store(config)?;
    let outcome = store.add_item(product_id.clone(), size.clone(), price, quantity)?;

    if outcome.merged {
        println!("{product_id} updated in cart ({} items total)", outcome.item_count);
    } else {
        println!("{product_id} added to cart! ({} items total)", outcome.item_count);
    }

    if buy_now {
        let message =
            render_buy_now_message(&outcome.name, &size, quantity, price.times(quantity.get()));
        println!("\n{message}");
        println!("\nOrder link: {}", deep_link(&message, &config.checkout));
    }

    Ok(())
}

/// Remove a `(product, size)` line from the cart.
///
/// # Errors
///
/// Returns an error if persistence fails.
pub fn remove(
    config: &CliConfig,
    product_id: &str,
    size: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let product_id = ProductId::new(product_id);
    let size = Size::new(size);

    let mut store = super::open_store(config)?;
    let outcome = store.remove_item(&product_id, &size)?;

    if outcome.removed {
        println!("{product_id} ({size}) removed from cart");
    } else {
        println!("{product_id} ({size}) was not in the cart");
    }
    Ok(())
}

/// Set a line's quantity; zero removes the line.
///
/// # Errors
///
/// Returns an error for an over-bound quantity or if persistence fails.
pub fn set_quantity(
    config: &CliConfig,
    product_id: &str,
    size: &str,
    quantity: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let product_id = ProductId::new(product_id);
    let size = Size::new(size);

    let mut store = super::open_store(config)?;
    match store.set_quantity(&product_id, &size, quantity)? {
        SetQuantityOutcome::Updated => {
            println!("{product_id} ({size}) quantity set to {quantity}");
        }
        SetQuantityOutcome::Removed => println!("{product_id} ({size}) removed from cart"),
        SetQuantityOutcome::NotFound => println!("{product_id} ({size}) is not in the cart"),
    }
    Ok(())
}

/// Show the cart contents and checkout summary.
///
/// # Errors
///
/// Returns an error if the data directory cannot be opened.
pub fn show(config: &CliConfig) -> Result<(), Box<dyn std::error::Error>> {
    let store = super::open_store(config)?;

    if store.is_empty() {
        println!("Your cart is empty");
        return Ok(());
    }

    for item in store.items() {
        println!(
            "{} ({}) x{} - {}",
            item.name,
            item.size,
            item.quantity,
            item.line_total()
        );
    }

    let summary = store.checkout_summary(&config.checkout);
    println!();
    println!("Subtotal: {}", summary.subtotal);
    if summary.delivery_fee.is_zero() {
        println!("Delivery: FREE");
    } else {
        println!("Delivery: {}", summary.delivery_fee);
    }
    println!("Total:    {}", summary.grand_total);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use amoneph_store::CheckoutConfig;
    use tempfile::TempDir;

    fn test_config(tmp: &TempDir) -> CliConfig {
        CliConfig {
            data_dir: tmp.path().to_path_buf(),
            checkout: CheckoutConfig::default(),
        }
    }

    #[test]
    fn test_add_persists_under_data_dir() {
        let tmp = TempDir::new().expect("temp dir");
        let config = test_config(&tmp);

        add(&config, "honey", "500g", 450, 2, false).expect("add");

        assert!(tmp.path().join("amoneph-cart.json").exists());
        let store = super::super::open_store(&config).expect("open");
        assert_eq!(store.item_count(), 2);
    }

    #[test]
    fn test_set_quantity_and_remove_round_trip() {
        let tmp = TempDir::new().expect("temp dir");
        let config = test_config(&tmp);

        add(&config, "honey", "500g", 450, 2, false).expect("add");
        add(&config, "hibiscus", "200g", 600, 1, false).expect("add");
        set_quantity(&config, "honey", "500g", 5).expect("set quantity");
        remove(&config, "hibiscus", "200g").expect("remove");

        let store = super::super::open_store(&config).expect("open");
        assert_eq!(store.items().len(), 1);
        assert_eq!(store.items().first().expect("line").quantity.get(), 5);
    }

    #[test]
    fn test_add_rejects_out_of_range_quantity() {
        let tmp = TempDir::new().expect("temp dir");
        let config = test_config(&tmp);

        assert!(add(&config, "honey", "500g", 450, 0, false).is_err());
        assert!(add(&config, "honey", "500g", 450, 21, false).is_err());

        let store = super::super::open_store(&config).expect("open");
        assert!(store.is_empty());
    }

    #[test]
    fn test_show_handles_empty_and_filled_cart() {
        let tmp = TempDir::new().expect("temp dir");
        let config = test_config(&tmp);

        show(&config).expect("show empty");
        add(&config, "honey", "500g", 450, 1, true).expect("add with buy-now");
        show(&config).expect("show filled");
    }
}
