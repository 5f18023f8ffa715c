//! CLI command implementations.

pub mod cart;
pub mod checkout;
pub mod wishlist;

use amoneph_store::{CartStore, Catalog, FileStore, StorageError};

use crate::config::CliConfig;

/// Open the file-backed cart store under the configured data directory.
fn open_store(config: &CliConfig) -> Result<CartStore<FileStore>, StorageError> {
    let storage = FileStore::open(&config.data_dir)?;
    Ok(CartStore::open(storage, Catalog::default()))
}
