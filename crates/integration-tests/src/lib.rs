//! Integration tests for the Amoneph cart engine.
//!
//! These tests exercise the public API of `amoneph-store` against the
//! file-backed store in temporary directories, covering what unit tests in
//! the store crate cannot: state surviving a full close-and-reopen cycle of
//! both the store and its backing files.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p amoneph-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_persistence` - Round-trip and fail-soft rehydration on disk
//! - `checkout_flow` - Add-to-order end-to-end message and deep link

#![cfg_attr(not(test), forbid(unsafe_code))]

use amoneph_core::{Price, ProductId, Quantity, Size};
use amoneph_store::{CartStore, Catalog, FileStore};
use std::path::Path;

/// Open a file-backed cart store rooted at `dir`.
///
/// # Panics
///
/// Panics if the directory cannot be created; integration tests treat that
/// as a harness failure, not a result.
#[must_use]
pub fn open_cart(dir: &Path) -> CartStore<FileStore> {
    let storage = FileStore::open(dir).expect("open file store");
    CartStore::open(storage, Catalog::default())
}

/// Add a line to the cart, panicking on any error.
///
/// # Panics
///
/// Panics if the add is rejected or persistence fails.
pub fn add_line(
    cart: &mut CartStore<FileStore>,
    product: &str,
    size: &str,
    price: u64,
    quantity: u32,
) {
    cart.add_item(
        ProductId::new(product),
        Size::new(size),
        Price::new(price),
        Quantity::new(quantity).expect("test quantity in range"),
    )
    .expect("add item");
}
