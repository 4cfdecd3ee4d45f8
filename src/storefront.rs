use std::fmt;

use crate::aggregate::hydrate;
use crate::cart::{Cart, CartItem};
use crate::catalog::{Catalog, Product, ProductId};
use crate::config::StorefrontConfig;
use crate::entity::{Entity, EventRecord};
use crate::error::{Result, StorefrontError};
use crate::filter::FilterState;
use crate::notify::{Change, ChangeNotifier};
use crate::reviews::ReviewsViewer;

/// Application root: owns every piece of storefront state and turns user
/// intents into store operations.
///
/// Each intent runs to completion, listeners included, before returning.
/// Listeners are only notified when the intent changed something.
pub struct Storefront {
    config: StorefrontConfig,
    catalog: Catalog,
    cart: Cart,
    cart_open: bool,
    filters: FilterState,
    reviews: ReviewsViewer,
    notifier: ChangeNotifier<Storefront>,
}

impl fmt::Debug for Storefront {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Storefront")
            .field("config", &self.config)
            .field("products", &self.catalog.len())
            .field("cart", &self.cart)
            .field("cart_open", &self.cart_open)
            .field("filters", &self.filters)
            .field("reviews", &self.reviews)
            .finish()
    }
}

impl Storefront {
    pub fn new(config: StorefrontConfig, catalog: Catalog) -> Result<Self> {
        config.validate()?;
        Ok(Storefront::assemble(config, catalog))
    }

    /// Default config over the compiled-in catalog.
    pub fn builtin() -> Self {
        Storefront::assemble(StorefrontConfig::default(), Catalog::builtin())
    }

    fn assemble(config: StorefrontConfig, catalog: Catalog) -> Self {
        Storefront {
            cart: Cart::new(config.cart_id.clone()),
            filters: FilterState::from_config(&config),
            config,
            catalog,
            cart_open: false,
            reviews: ReviewsViewer::new(),
            notifier: ChangeNotifier::new(),
        }
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn products(&self) -> &[Product] {
        self.catalog.products()
    }

    /// Register a listener for one kind of change.
    pub fn on<F>(&mut self, change: Change, listener: F)
    where
        F: Fn(&Storefront) + 'static,
    {
        self.notifier.on(change, listener);
    }

    fn notify(&self, change: Change) {
        self.notifier.emit(change, self);
    }

    // -- Cart --

    /// Add one unit of a catalog product. Out-of-stock products are refused.
    ///
    /// Returns `Ok(false)` when the line is already at its maximum quantity.
    pub fn add_to_cart(&mut self, product_id: ProductId) -> Result<bool> {
        let product = self
            .catalog
            .get(product_id)
            .ok_or(StorefrontError::UnknownProduct(product_id))?;
        if !product.in_stock {
            tracing::warn!(product_id, "refusing to add out-of-stock product");
            return Err(StorefrontError::OutOfStock(product_id));
        }

        let added = self.cart.add(product);
        if added {
            self.notify(Change::Cart);
        }
        Ok(added)
    }

    pub fn update_quantity(&mut self, product_id: ProductId, quantity: u32) -> bool {
        let changed = self.cart.update_quantity(product_id, quantity);
        if changed {
            self.notify(Change::Cart);
        }
        changed
    }

    pub fn remove_from_cart(&mut self, product_id: ProductId) -> bool {
        let changed = self.cart.remove(product_id);
        if changed {
            self.notify(Change::Cart);
        }
        changed
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_items(&self) -> &[CartItem] {
        self.cart.items()
    }

    /// Badge count: total quantity across lines.
    pub fn cart_count(&self) -> u64 {
        self.cart.total_count()
    }

    pub fn cart_total(&self) -> u64 {
        self.cart.total_price()
    }

    pub fn cart_history(&self) -> &[EventRecord] {
        self.cart.history()
    }

    /// Replace the cart with one rebuilt from `history`.
    ///
    /// Sequences must run 1, 2, 3... with no gaps. On a replay failure the
    /// current cart is left untouched.
    pub fn restore_cart(&mut self, history: Vec<EventRecord>) -> Result<()> {
        let mut entity = Entity::with_id(self.config.cart_id.clone());
        entity.load_from_history(history);
        self.cart = hydrate::<Cart>(entity)?;
        tracing::info!(
            lines = self.cart.len(),
            count = self.cart.total_count(),
            "cart restored"
        );
        self.notify(Change::Cart);
        Ok(())
    }

    // -- Cart panel --

    pub fn open_cart(&mut self) -> bool {
        self.set_cart_open(true)
    }

    pub fn close_cart(&mut self) -> bool {
        self.set_cart_open(false)
    }

    pub fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    fn set_cart_open(&mut self, open: bool) -> bool {
        if self.cart_open == open {
            return false;
        }
        self.cart_open = open;
        self.notify(Change::CartPanel);
        true
    }

    // -- Reviews --

    pub fn show_reviews(&mut self, product_id: ProductId) -> Result<()> {
        let product = self
            .catalog
            .get(product_id)
            .ok_or(StorefrontError::UnknownProduct(product_id))?;
        self.reviews.show(product);
        self.notify(Change::Reviews);
        Ok(())
    }

    pub fn close_reviews(&mut self) -> bool {
        let changed = self.reviews.close();
        if changed {
            self.notify(Change::Reviews);
        }
        changed
    }

    pub fn reviews(&self) -> &ReviewsViewer {
        &self.reviews
    }

    // -- Filters --

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn set_price_range(&mut self, low: u64, high: u64) -> bool {
        let changed = self.filters.set_price_range(low, high);
        self.after_filter_change(changed)
    }

    pub fn set_in_stock_only(&mut self, in_stock_only: bool) -> bool {
        let changed = self.filters.set_in_stock_only(in_stock_only);
        self.after_filter_change(changed)
    }

    pub fn set_min_rating(&mut self, rating: u8) -> bool {
        let changed = self.filters.set_min_rating(rating);
        self.after_filter_change(changed)
    }

    pub fn reset_filters(&mut self) -> bool {
        let changed = self.filters.reset();
        self.after_filter_change(changed)
    }

    fn after_filter_change(&self, changed: bool) -> bool {
        if changed {
            self.notify(Change::Filters);
        }
        changed
    }
}

impl Default for Storefront {
    fn default() -> Self {
        Storefront::builtin()
    }
}
