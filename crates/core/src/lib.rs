//! Amoneph Core - Shared types library.
//!
//! This crate provides common types used across all Amoneph components:
//! - `store` - The cart engine (line items, wishlist, persistence, checkout)
//! - `cli` - Command-line surface driving the store
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe keys, prices, and quantities

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
