use thiserror::Error;

use crate::catalog::{CatalogError, ProductId};
use crate::config::ConfigError;

/// Errors surfaced by the application root.
///
/// Cart, filter and reviews operations never fail; errors only come from
/// resolving product ids, the stock gate on adding, rebuilding state from history, and construction.
#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error("unknown product {0}")]
    UnknownProduct(ProductId),

    #[error("product {0} is out of stock")]
    OutOfStock(ProductId),

    #[error("replay failed at event {sequence}: {message}")]
    Replay { sequence: u64, message: String },

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T, E = StorefrontError> = std::result::Result<T, E>;
