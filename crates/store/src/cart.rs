//! The cart store: line items, wishlist, and their persistence contract.
//!
//! One `CartStore` exists per process. It owns an ordered collection of
//! [`LineItem`]s and a set of wishlisted product ids; both are mirrored into
//! the backing [`KeyValueStore`] after every mutation and rehydrated when the
//! store is opened. Absent or malformed stored data falls back to an empty
//! collection, never an error.
//!
//! Identity invariant: the `(product_id, size)` pair is unique within the
//! collection. Adding an existing pair merges quantities instead of
//! duplicating a row.
//!
//! Mutations return plain outcome data; rendering those outcomes is the
//! caller's concern.

use std::collections::BTreeSet;

use amoneph_core::{Price, ProductId, Quantity, Size};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::checkout::{self, CheckoutConfig, CheckoutSummary};
use crate::error::{CartError, CheckoutError};
use crate::storage::KeyValueStore;

/// Storage key for the serialized line-item collection.
pub const CART_KEY: &str = "amoneph-cart";

/// Storage key for the serialized wishlist.
pub const WISHLIST_KEY: &str = "amoneph-wishlist";

/// One `(product, size)` entry in the cart.
///
/// `name` and `image` are display metadata snapshotted from the catalog at
/// add-time. Field names in the persisted document are camelCase, matching
/// the documents the original site wrote to browser storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub product_id: ProductId,
    pub name: String,
    pub size: Size,
    pub price: Price,
    pub quantity: Quantity,
    pub image: String,
}

impl LineItem {
    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity.get())
    }

    fn matches(&self, product_id: &ProductId, size: &Size) -> bool {
        self.product_id == *product_id && self.size == *size
    }
}

/// Result of [`CartStore::add_item`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOutcome {
    /// The product that was added, for the caller's confirmation message.
    pub product_id: ProductId,
    /// Display name snapshotted onto the line (catalog entry or placeholder).
    pub name: String,
    /// Whether the add merged into an existing line rather than appending.
    pub merged: bool,
    /// Total item count across all lines after the add.
    pub item_count: u32,
}

/// Result of [`CartStore::remove_item`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoveOutcome {
    /// Whether a matching line existed and was removed.
    pub removed: bool,
    /// Total item count across all lines after the removal.
    pub item_count: u32,
}

/// Result of [`CartStore::set_quantity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetQuantityOutcome {
    /// The matching line's quantity was updated in place.
    Updated,
    /// Quantity zero: the matching line was removed.
    Removed,
    /// No line matched the pair; nothing changed.
    NotFound,
}

/// Result of [`CartStore::toggle_wishlist`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WishlistToggle {
    /// The product was not wishlisted and is now.
    Added,
    /// The product was wishlisted and no longer is.
    Removed,
}

/// The cart engine: line items plus wishlist, mirrored to durable storage.
#[derive(Debug)]
pub struct CartStore<S: KeyValueStore> {
    storage: S,
    catalog: Catalog,
    items: Vec<LineItem>,
    wishlist: BTreeSet<ProductId>,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Open the store, rehydrating both collections from storage.
    ///
    /// Rehydration is fail-soft: an absent key, a read error, or a document
    /// that does not parse as the expected shape yields an empty collection
    /// (with a warning in the log), never an error.
    pub fn open(storage: S, catalog: Catalog) -> Self {
        let items = load_collection(&storage, CART_KEY);
        let wishlist = load_collection(&storage, WISHLIST_KEY);
        Self {
            storage,
            catalog,
            items,
            wishlist,
        }
    }

    /// Add `quantity` units of a `(product, size)` pair at the given unit
    /// price.
    ///
    /// Display metadata is snapshotted from the catalog (placeholder for
    /// unknown ids). If a line with the same pair exists, its quantity is
    /// incremented, capping at the per-line bound; otherwise a new line is
    /// appended. The collection is persisted before returning.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidPrice`] for a zero price, or
    /// [`CartError::Storage`] if persisting fails.
    pub fn add_item(
        &mut self,
        product_id: ProductId,
        size: Size,
        price: Price,
        quantity: Quantity,
    ) -> Result<AddOutcome, CartError> {
        if price.is_zero() {
            return Err(CartError::InvalidPrice);
        }

        let (name, merged) = match self
            .items
            .iter_mut()
            .find(|item| item.matches(&product_id, &size))
        {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(quantity);
                (existing.name.clone(), true)
            }
            None => {
                let entry = self.catalog.lookup(&product_id);
                let name = entry.name.clone();
                self.items.push(LineItem {
                    product_id: product_id.clone(),
                    name: entry.name,
                    size,
                    price,
                    quantity,
                    image: entry.image,
                });
                (name, false)
            }
        };

        self.persist_items()?;
        Ok(AddOutcome {
            product_id,
            name,
            merged,
            item_count: self.item_count(),
        })
    }

    /// Remove the line matching the `(product, size)` pair.
    ///
    /// An absent pair is a no-op, reported through the outcome rather than
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Storage`] if persisting fails.
    pub fn remove_item(
        &mut self,
        product_id: &ProductId,
        size: &Size,
    ) -> Result<RemoveOutcome, CartError> {
        let before = self.items.len();
        self.items.retain(|item| !item.matches(product_id, size));
        let removed = self.items.len() < before;

        if removed {
            self.persist_items()?;
        }
        Ok(RemoveOutcome {
            removed,
            item_count: self.item_count(),
        })
    }

    /// Set the quantity of the line matching the `(product, size)` pair.
    ///
    /// Zero behaves exactly like [`remove_item`](Self::remove_item). An
    /// absent pair is a no-op. The per-line bound applies: values above 20
    /// are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Quantity`] for an over-bound value on an
    /// existing line, or [`CartError::Storage`] if persisting fails.
    pub fn set_quantity(
        &mut self,
        product_id: &ProductId,
        size: &Size,
        new_quantity: u32,
    ) -> Result<SetQuantityOutcome, CartError> {
        let Some(index) = self
            .items
            .iter()
            .position(|item| item.matches(product_id, size))
        else {
            return Ok(SetQuantityOutcome::NotFound);
        };

        if new_quantity == 0 {
            self.items.remove(index);
            self.persist_items()?;
            return Ok(SetQuantityOutcome::Removed);
        }

        let quantity = Quantity::new(new_quantity)?;
        if let Some(item) = self.items.get_mut(index) {
            item.quantity = quantity;
        }
        self.persist_items()?;
        Ok(SetQuantityOutcome::Updated)
    }

    /// Toggle wishlist membership for a product and persist the set.
    ///
    /// Toggling twice restores the prior membership.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Storage`] if persisting fails.
    pub fn toggle_wishlist(&mut self, product_id: ProductId) -> Result<WishlistToggle, CartError> {
        let toggle = if self.wishlist.remove(&product_id) {
            WishlistToggle::Removed
        } else {
            self.wishlist.insert(product_id);
            WishlistToggle::Added
        };
        self.persist_wishlist()?;
        Ok(toggle)
    }

    /// The current line items, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total item count: the sum of quantities over all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity.get()).sum()
    }

    /// The wishlisted product ids.
    #[must_use]
    pub fn wishlist(&self) -> &BTreeSet<ProductId> {
        &self.wishlist
    }

    /// Whether a product is wishlisted.
    #[must_use]
    pub fn is_wishlisted(&self, product_id: &ProductId) -> bool {
        self.wishlist.contains(product_id)
    }

    /// Sum of `price × quantity` over all lines. Pure.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Subtotal, delivery fee, and grand total under the given rules. Pure.
    #[must_use]
    pub fn checkout_summary(&self, config: &CheckoutConfig) -> CheckoutSummary {
        CheckoutSummary::compute(self.subtotal(), config)
    }

    /// Render the full order message for checkout.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] when there are no lines.
    pub fn render_order_message(&self, config: &CheckoutConfig) -> Result<String, CheckoutError> {
        checkout::render_order_message(&self.items, config)
    }

    /// The WhatsApp deep link carrying the percent-encoded order message.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] when there are no lines.
    pub fn checkout_url(&self, config: &CheckoutConfig) -> Result<String, CheckoutError> {
        let message = self.render_order_message(config)?;
        Ok(checkout::deep_link(&message, config))
    }

    fn persist_items(&mut self) -> Result<(), CartError> {
        persist(&mut self.storage, CART_KEY, &self.items)
    }

    fn persist_wishlist(&mut self) -> Result<(), CartError> {
        persist(&mut self.storage, WISHLIST_KEY, &self.wishlist)
    }
}

fn persist<S: KeyValueStore, T: Serialize>(
    storage: &mut S,
    key: &str,
    collection: &T,
) -> Result<(), CartError> {
    let document = serde_json::to_string(collection).map_err(crate::error::StorageError::from)?;
    storage.set(key, &document)?;
    Ok(())
}

/// Read and parse one collection, falling back to its empty default.
fn load_collection<S, T>(storage: &S, key: &str) -> T
where
    S: KeyValueStore,
    T: DeserializeOwned + Default,
{
    let document = match storage.get(key) {
        Ok(Some(document)) => document,
        Ok(None) => return T::default(),
        Err(e) => {
            tracing::warn!(key, error = %e, "storage read failed, starting empty");
            return T::default();
        }
    };

    match serde_json::from_str(&document) {
        Ok(collection) => collection,
        Err(e) => {
            tracing::warn!(key, error = %e, "stored document did not parse, starting empty");
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn qty(n: u32) -> Quantity {
        Quantity::new(n).expect("test quantity in range")
    }

    fn empty_cart() -> CartStore<MemoryStore> {
        CartStore::open(MemoryStore::new(), Catalog::default())
    }

    #[test]
    fn test_add_snapshots_catalog_metadata() {
        let mut cart = empty_cart();
        cart.add_item(
            ProductId::new("honey"),
            Size::new("500g"),
            Price::new(450),
            qty(1),
        )
        .expect("add");

        let item = cart.items().first().expect("one line");
        assert_eq!(item.name, "Raw Kenyan Forest Honey");
        assert_eq!(item.image, "images/products/Honey.jpeg");
    }

    #[test]
    fn test_add_outcome_carries_snapshotted_name() {
        let mut cart = empty_cart();
        let outcome = cart
            .add_item(
                ProductId::new("honey"),
                Size::new("500g"),
                Price::new(450),
                qty(1),
            )
            .expect("add");
        assert_eq!(outcome.name, "Raw Kenyan Forest Honey");

        // Merging reports the name already on the line, not a fresh lookup.
        let merged = cart
            .add_item(
                ProductId::new("honey"),
                Size::new("500g"),
                Price::new(450),
                qty(1),
            )
            .expect("add");
        assert!(merged.merged);
        assert_eq!(merged.name, "Raw Kenyan Forest Honey");

        let unknown = cart
            .add_item(
                ProductId::new("moringa"),
                Size::new("250g"),
                Price::new(300),
                qty(1),
            )
            .expect("add");
        assert_eq!(unknown.name, "Product");
    }

    #[test]
    fn test_add_unknown_product_uses_placeholder() {
        let mut cart = empty_cart();
        cart.add_item(
            ProductId::new("moringa"),
            Size::new("250g"),
            Price::new(300),
            qty(1),
        )
        .expect("add");

        let item = cart.items().first().expect("one line");
        assert_eq!(item.name, "Product");
        assert_eq!(item.image, "");
    }

    #[test]
    fn test_same_pair_merges_quantities() {
        let mut cart = empty_cart();
        let honey = ProductId::new("honey");
        let size = Size::new("500g");

        cart.add_item(honey.clone(), size.clone(), Price::new(450), qty(2))
            .expect("first add");
        let outcome = cart
            .add_item(honey.clone(), size.clone(), Price::new(450), qty(3))
            .expect("second add");

        assert!(outcome.merged);
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items().first().expect("line").quantity.get(), 5);
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_different_size_is_a_separate_line() {
        let mut cart = empty_cart();
        let honey = ProductId::new("honey");

        cart.add_item(honey.clone(), Size::new("500g"), Price::new(450), qty(1))
            .expect("add");
        let outcome = cart
            .add_item(honey, Size::new("1kg"), Price::new(800), qty(1))
            .expect("add");

        assert!(!outcome.merged);
        assert_eq!(cart.items().len(), 2);
    }

    #[test]
    fn test_merge_caps_at_per_line_bound() {
        let mut cart = empty_cart();
        let honey = ProductId::new("honey");
        let size = Size::new("500g");

        cart.add_item(honey.clone(), size.clone(), Price::new(450), qty(15))
            .expect("add");
        cart.add_item(honey, size, Price::new(450), qty(15))
            .expect("add");

        assert_eq!(cart.items().first().expect("line").quantity, Quantity::MAX);
    }

    #[test]
    fn test_zero_price_rejected() {
        let mut cart = empty_cart();
        let err = cart
            .add_item(
                ProductId::new("honey"),
                Size::new("500g"),
                Price::ZERO,
                qty(1),
            )
            .expect_err("zero price");
        assert!(matches!(err, CartError::InvalidPrice));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_leaves_other_lines_untouched() {
        let mut cart = empty_cart();
        cart.add_item(
            ProductId::new("honey"),
            Size::new("500g"),
            Price::new(450),
            qty(1),
        )
        .expect("add");
        cart.add_item(
            ProductId::new("hibiscus"),
            Size::new("200g"),
            Price::new(600),
            qty(2),
        )
        .expect("add");

        let outcome = cart
            .remove_item(&ProductId::new("honey"), &Size::new("500g"))
            .expect("remove");
        assert!(outcome.removed);
        assert_eq!(cart.items().len(), 1);
        assert_eq!(
            cart.items().first().expect("line").product_id,
            ProductId::new("hibiscus")
        );
    }

    #[test]
    fn test_remove_absent_pair_is_noop() {
        let mut cart = empty_cart();
        let outcome = cart
            .remove_item(&ProductId::new("honey"), &Size::new("500g"))
            .expect("remove");
        assert!(!outcome.removed);
        assert_eq!(outcome.item_count, 0);
    }

    #[test]
    fn test_set_quantity_zero_matches_remove() {
        let mut cart = empty_cart();
        let honey = ProductId::new("honey");
        let size = Size::new("500g");
        cart.add_item(honey.clone(), size.clone(), Price::new(450), qty(2))
            .expect("add");

        let outcome = cart.set_quantity(&honey, &size, 0).expect("set");
        assert_eq!(outcome, SetQuantityOutcome::Removed);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_updates_in_place() {
        let mut cart = empty_cart();
        let honey = ProductId::new("honey");
        let size = Size::new("500g");
        cart.add_item(honey.clone(), size.clone(), Price::new(450), qty(2))
            .expect("add");

        let outcome = cart.set_quantity(&honey, &size, 7).expect("set");
        assert_eq!(outcome, SetQuantityOutcome::Updated);
        assert_eq!(cart.items().first().expect("line").quantity.get(), 7);
    }

    #[test]
    fn test_set_quantity_absent_pair_is_noop() {
        let mut cart = empty_cart();
        let outcome = cart
            .set_quantity(&ProductId::new("honey"), &Size::new("500g"), 3)
            .expect("set");
        assert_eq!(outcome, SetQuantityOutcome::NotFound);
    }

    #[test]
    fn test_set_quantity_over_bound_rejected() {
        let mut cart = empty_cart();
        let honey = ProductId::new("honey");
        let size = Size::new("500g");
        cart.add_item(honey.clone(), size.clone(), Price::new(450), qty(2))
            .expect("add");

        let err = cart.set_quantity(&honey, &size, 21).expect_err("over bound");
        assert!(matches!(err, CartError::Quantity(_)));
        assert_eq!(cart.items().first().expect("line").quantity.get(), 2);
    }

    #[test]
    fn test_wishlist_toggle_has_period_two() {
        let mut cart = empty_cart();
        let honey = ProductId::new("honey");

        assert_eq!(
            cart.toggle_wishlist(honey.clone()).expect("toggle"),
            WishlistToggle::Added
        );
        assert!(cart.is_wishlisted(&honey));

        assert_eq!(
            cart.toggle_wishlist(honey.clone()).expect("toggle"),
            WishlistToggle::Removed
        );
        assert!(!cart.is_wishlisted(&honey));
    }

    #[test]
    fn test_subtotal_sums_line_totals() {
        let mut cart = empty_cart();
        cart.add_item(
            ProductId::new("honey"),
            Size::new("500g"),
            Price::new(450),
            qty(2),
        )
        .expect("add");
        cart.add_item(
            ProductId::new("castor-oil"),
            Size::new("1L"),
            Price::new(1600),
            qty(1),
        )
        .expect("add");

        assert_eq!(cart.subtotal(), Price::new(2500));
    }

    #[test]
    fn test_mutations_round_trip_through_storage() {
        let mut cart = empty_cart();
        let honey = ProductId::new("honey");
        cart.add_item(honey.clone(), Size::new("500g"), Price::new(450), qty(2))
            .expect("add");
        cart.toggle_wishlist(ProductId::new("hibiscus"))
            .expect("toggle");

        // Reopen from the same backing storage, simulating a reload.
        let CartStore { storage, .. } = cart;
        let reopened = CartStore::open(storage, Catalog::default());

        assert_eq!(reopened.items().len(), 1);
        assert_eq!(reopened.items().first().expect("line").quantity.get(), 2);
        assert!(reopened.is_wishlisted(&ProductId::new("hibiscus")));
    }

    #[test]
    fn test_malformed_documents_rehydrate_empty() {
        let storage = MemoryStore::with_entry(CART_KEY, "{not json");
        let cart = CartStore::open(storage, Catalog::default());
        assert!(cart.is_empty());
        assert!(cart.wishlist().is_empty());
    }

    #[test]
    fn test_wrong_shape_rehydrates_empty() {
        // Parses as JSON but not as a line-item collection.
        let storage = MemoryStore::with_entry(CART_KEY, "{\"productId\":\"honey\"}");
        let cart = CartStore::open(storage, Catalog::default());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_out_of_range_stored_quantity_rehydrates_empty() {
        let document = r#"[{"productId":"honey","name":"Raw Kenyan Forest Honey","size":"500g","price":450,"quantity":99,"image":""}]"#;
        let storage = MemoryStore::with_entry(CART_KEY, document);
        let cart = CartStore::open(storage, Catalog::default());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_persisted_document_uses_camel_case_fields() {
        let mut cart = empty_cart();
        cart.add_item(
            ProductId::new("honey"),
            Size::new("500g"),
            Price::new(450),
            qty(1),
        )
        .expect("add");

        let CartStore { storage, .. } = cart;
        let document = storage.get(CART_KEY).expect("get").expect("present");
        assert!(document.contains("\"productId\":\"honey\""));
        assert!(document.contains("\"quantity\":1"));
    }
}
