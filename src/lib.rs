//! Storefront state core: a static product catalog, an event-sourced shopping
//! cart, filter panel values and the reviews viewer, owned by one
//! [`Storefront`] root that views observe through change listeners.

mod aggregate;
mod cart;
mod catalog;
mod config;
mod entity;
mod error;
mod filter;
mod notify;
mod reviews;
mod storefront;

pub use aggregate::{hydrate, Aggregate};
pub use cart::{Cart, CartItem};
pub use catalog::{stars, Catalog, CatalogError, Product, ProductId, Review, MAX_RATING};
pub use config::{ConfigError, StorefrontConfig};
pub use entity::{Entity, EventRecord, PayloadError};
pub use error::{Result, StorefrontError};
pub use filter::{FilterState, PriceRange};
pub use notify::{Change, ChangeNotifier};
pub use reviews::ReviewsViewer;
pub use storefront::Storefront;
