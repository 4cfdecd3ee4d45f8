use serde::{Deserialize, Serialize};

use crate::catalog::{Product, ProductId};

/// One cart line. `id` is the product id and the dedup key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: ProductId,
    pub name: String,
    pub price: u64,
    pub image: String,
    /// Always at least 1.
    pub quantity: u32,
}

impl CartItem {
    pub(crate) fn first_of(product: &Product) -> Self {
        CartItem {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity: 1,
        }
    }

    pub fn line_total(&self) -> u64 {
        self.price.saturating_mul(u64::from(self.quantity))
    }
}
