//! Bounded per-line quantity.
//!
//! A cart line holds between 1 and 20 units of a product. The bound is
//! enforced here, at the type level, rather than in whatever surface accepts
//! the input: construction and deserialization both reject out-of-range
//! values, so no in-memory or persisted line can violate it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error constructing a [`Quantity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("quantity must be between 1 and {max} (got {given})", max = Quantity::MAX.get())]
pub struct QuantityError {
    /// The rejected value.
    pub given: u32,
}

/// A per-line quantity in the range `[1, 20]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Quantity(u32);

impl Quantity {
    /// The smallest allowed quantity.
    pub const MIN: Self = Self(1);

    /// The largest allowed quantity per cart line.
    pub const MAX: Self = Self(20);

    /// Create a quantity, rejecting values outside `[1, 20]`.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError`] when `value` is zero or above the per-line
    /// bound.
    pub const fn new(value: u32) -> Result<Self, QuantityError> {
        if value >= Self::MIN.0 && value <= Self::MAX.0 {
            Ok(Self(value))
        } else {
            Err(QuantityError { given: value })
        }
    }

    /// The quantity as a plain integer.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Add two quantities, capping the result at the per-line bound.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        let sum = self.0 + other.0;
        if sum > Self::MAX.0 { Self::MAX } else { Self(sum) }
    }
}

impl TryFrom<u32> for Quantity {
    type Error = QuantityError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> Self {
        quantity.0
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
