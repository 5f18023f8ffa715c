//! Type-safe price representation in whole Kenyan Shillings.
//!
//! Prices never carry a fractional part: every catalog price, delivery fee,
//! and order total is a whole number of shillings. `Price` wraps a `u64` and
//! formats with thousands grouping (`KSh 1,600`) for display.

use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// A price in whole Kenyan Shillings.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// A zero price.
    pub const ZERO: Self = Self(0);

    /// Create a price from a whole number of shillings.
    #[must_use]
    pub const fn new(shillings: u64) -> Self {
        Self(shillings)
    }

    /// The amount in whole shillings.
    #[must_use]
    pub const fn amount(self) -> u64 {
        self.0
    }

    /// Whether this price is zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Multiply a unit price by a quantity to get a line total.
    ///
    /// Saturates at `u64::MAX` rather than wrapping on absurd inputs.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(u64::from(quantity)))
    }

    /// The amount grouped in thousands, without the currency prefix
    /// (e.g. `1,600`).
    #[must_use]
    pub fn grouped(self) -> String {
        let digits = self.0.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        let offset = digits.len() % 3;
        for (i, c) in digits.chars().enumerate() {
            if i != 0 && i % 3 == offset % 3 {
                out.push(',');
            }
            out.push(c);
        }
        out
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "KSh {}", self.grouped())
    }
}

impl Add for Price {
    type Output = Self;

    /// Saturating: totals never wrap, they stick at `u64::MAX`.
    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl From<u64> for Price {
    fn from(shillings: u64) -> Self {
        Self(shillings)
    }
}
