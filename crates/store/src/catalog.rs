//! Static product catalog.
//!
//! The catalog is a read-only mapping from product id to display metadata,
//! snapshotted onto a line item at add-time. Unknown ids resolve to a
//! generic placeholder rather than an error, so the cart keeps working even
//! when an id falls out of the catalog.

use std::collections::HashMap;

use amoneph_core::ProductId;

/// Display metadata for one catalog product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Customer-facing product name.
    pub name: String,
    /// Relative path to the product image.
    pub image: String,
}

impl CatalogEntry {
    fn new(name: &str, image: &str) -> Self {
        Self {
            name: name.to_owned(),
            image: image.to_owned(),
        }
    }

    /// The generic fallback for ids the catalog does not know.
    #[must_use]
    pub fn placeholder() -> Self {
        Self::new("Product", "")
    }
}

/// Read-only product id -> display metadata mapping.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: HashMap<ProductId, CatalogEntry>,
}

impl Catalog {
    /// Build a catalog from explicit entries.
    #[must_use]
    pub fn new(entries: impl IntoIterator<Item = (ProductId, CatalogEntry)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Look up display metadata, falling back to the generic placeholder for
    /// unknown ids.
    #[must_use]
    pub fn lookup(&self, product_id: &ProductId) -> CatalogEntry {
        self.entries
            .get(product_id)
            .cloned()
            .unwrap_or_else(CatalogEntry::placeholder)
    }

    /// Whether the catalog knows this id.
    #[must_use]
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.entries.contains_key(product_id)
    }
}

impl Default for Catalog {
    /// The shop's four products.
    fn default() -> Self {
        Self::new([
            (
                ProductId::new("honey"),
                CatalogEntry::new("Raw Kenyan Forest Honey", "images/products/Honey.jpeg"),
            ),
            (
                ProductId::new("peanut-butter"),
                CatalogEntry::new("Natural Peanut Butter", "images/products/Peanut butter.jpeg"),
            ),
            (
                ProductId::new("hibiscus"),
                CatalogEntry::new("Hibiscus Wellness Powder", "images/products/Hibiscus.jpeg"),
            ),
            (
                ProductId::new("castor-oil"),
                CatalogEntry::new("Cold-Pressed Castor Oil", "images/products/Castor oil.jpeg"),
            ),
        ])
    }
}
