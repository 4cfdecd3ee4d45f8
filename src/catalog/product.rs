use serde::{Deserialize, Serialize};

pub type ProductId = u32;

/// Highest value of any rating, product or review.
pub const MAX_RATING: u8 = 5;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub author: String,
    /// 1 to 5.
    pub rating: u8,
    pub text: String,
    /// Display string; carries no ordering.
    pub date: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Whole currency units.
    pub price: u64,
    pub image: String,
    /// Aggregate rating, 0 to 5.
    pub rating: u8,
    /// Advertised count; may exceed the number of bundled reviews.
    pub reviews_count: u32,
    pub reviews: Vec<Review>,
    pub in_stock: bool,
}

/// Lit state of the five stars for `rating`: star `n` is lit when `n <= rating`.
pub fn stars(rating: u8) -> [bool; MAX_RATING as usize] {
    let mut lit = [false; MAX_RATING as usize];
    for (star, slot) in (1..=MAX_RATING).zip(lit.iter_mut()) {
        *slot = star <= rating;
    }
    lit
}
