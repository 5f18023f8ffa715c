//! Amoneph Store - the cart engine.
//!
//! This crate owns the shopping cart and wishlist for the Amoneph Botanicals
//! shop: an ordered collection of line items and a set of wishlisted product
//! ids, both mirrored into a durable local key/value store after every
//! mutation and rehydrated on construction. Derived figures (subtotal,
//! delivery fee, grand total) are always recomputed, never stored.
//!
//! The store is deliberately presentation-free: mutations return plain
//! outcome data and the checkout renderer returns strings, leaving display
//! to whatever surface drives the store (the `amoneph` CLI here).
//!
//! # Example
//!
//! ```rust
//! use amoneph_core::{Price, ProductId, Quantity, Size};
//! use amoneph_store::{CartStore, Catalog, MemoryStore};
//!
//! let storage = MemoryStore::new();
//! let mut cart = CartStore::open(storage, Catalog::default());
//!
//! cart.add_item(
//!     ProductId::new("honey"),
//!     Size::new("500g"),
//!     Price::new(450),
//!     Quantity::new(2)?,
//! )?;
//! assert_eq!(cart.subtotal(), Price::new(900));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod storage;

pub use cart::{AddOutcome, CartStore, LineItem, RemoveOutcome, SetQuantityOutcome, WishlistToggle};
pub use catalog::{Catalog, CatalogEntry};
pub use checkout::{BulkQuote, CheckoutConfig, CheckoutSummary};
pub use error::{CartError, CheckoutError, StorageError};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
