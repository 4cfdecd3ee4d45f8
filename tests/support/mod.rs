//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use storefront::{Catalog, Change, Product, ProductId, Review, Storefront};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn product(id: ProductId, price: u64) -> Product {
    Product {
        id,
        name: format!("Унты #{id}"),
        price,
        image: format!("https://cdn.example/unty-{id}.jpg"),
        rating: 4,
        reviews_count: 1,
        reviews: vec![Review {
            author: "Покупатель".to_string(),
            rating: 4,
            text: "Теплые".to_string(),
            date: "1 марта 2024".to_string(),
        }],
        in_stock: true,
    }
}

pub fn builtin_product(id: ProductId) -> Product {
    Catalog::builtin()
        .get(id)
        .cloned()
        .unwrap_or_else(|| panic!("builtin catalog has no product {id}"))
}

/// Record every notification of `change` as the cart badge count at that moment.
pub fn record_cart_counts(store: &mut Storefront, change: Change) -> Rc<RefCell<Vec<u64>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    store.on(change, move |store| sink.borrow_mut().push(store.cart_count()));
    seen
}
