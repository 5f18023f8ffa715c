//! Error types for the cart engine.
//!
//! Each concern gets its own `thiserror` enum. Storage *reads* never surface
//! errors (malformed or missing data falls back to empty collections);
//! storage *writes* propagate through [`CartError::Storage`].

use amoneph_core::QuantityError;
use thiserror::Error;

/// Error accessing the durable key/value store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying filesystem operation failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding a collection for persistence failed.
    #[error("storage encoding error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Error mutating the cart.
#[derive(Debug, Error)]
pub enum CartError {
    /// Unit price must be a positive number of shillings.
    #[error("invalid price: must be at least KSh 1")]
    InvalidPrice,

    /// Quantity outside the per-line bound.
    #[error(transparent)]
    Quantity(#[from] QuantityError),

    /// Persisting the mutated collection failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Error producing a checkout message or deep link.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// There is nothing to order.
    #[error("your cart is empty")]
    EmptyCart,
}
