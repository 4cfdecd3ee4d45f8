//! Static product catalog.

mod builtin;
mod product;

use std::collections::HashSet;

use thiserror::Error;

pub use product::{stars, Product, ProductId, Review, MAX_RATING};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("duplicate product id {0}")]
    DuplicateProduct(ProductId),

    #[error("product {id} has rating {rating}, expected 0..={max}", max = MAX_RATING)]
    ProductRating { id: ProductId, rating: u8 },

    #[error("review by {author} on product {id} has rating {rating}, expected 1..={max}", max = MAX_RATING)]
    ReviewRating {
        id: ProductId,
        author: String,
        rating: u8,
    },
}

/// Immutable, validated list of products in display order.
#[derive(Clone, Debug)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateProduct(product.id));
            }
            if product.rating > MAX_RATING {
                return Err(CatalogError::ProductRating {
                    id: product.id,
                    rating: product.rating,
                });
            }
            if let Some(review) = product
                .reviews
                .iter()
                .find(|review| !(1..=MAX_RATING).contains(&review.rating))
            {
                return Err(CatalogError::ReviewRating {
                    id: product.id,
                    author: review.author.clone(),
                    rating: review.rating,
                });
            }
        }

        Ok(Catalog { products })
    }

    /// The compiled-in storefront catalog.
    pub fn builtin() -> Self {
        Catalog {
            products: builtin::products(),
        }
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: ProductId, rating: u8) -> Product {
        Product {
            id,
            name: format!("product {id}"),
            price: 1000,
            image: String::new(),
            rating,
            reviews_count: 0,
            reviews: Vec::new(),
            in_stock: true,
        }
    }

    #[test]
    fn builtin_catalog_is_valid() {
        let builtin = Catalog::builtin();
        let validated = Catalog::new(builtin.products().to_vec()).unwrap();
        assert_eq!(validated.len(), 4);
        assert_eq!(builtin.get(1).map(|p| p.price), Some(15900));
        assert!(!builtin.get(4).unwrap().in_stock);
    }

    #[test]
    fn keeps_display_order() {
        let catalog = Catalog::new(vec![product(3, 4), product(1, 5)]).unwrap();
        let ids: Vec<ProductId> = catalog.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = Catalog::new(vec![product(1, 5), product(1, 4)]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateProduct(1));
    }

    #[test]
    fn rejects_product_rating_above_five() {
        let err = Catalog::new(vec![product(2, 6)]).unwrap_err();
        assert_eq!(err, CatalogError::ProductRating { id: 2, rating: 6 });
    }

    #[test]
    fn rejects_zero_star_review() {
        let mut item = product(5, 3);
        item.reviews.push(Review {
            author: "Гость".to_string(),
            rating: 0,
            text: String::new(),
            date: String::new(),
        });

        let err = Catalog::new(vec![item]).unwrap_err();
        assert!(matches!(err, CatalogError::ReviewRating { id: 5, rating: 0, .. }));
    }

    #[test]
    fn missing_id_is_none() {
        assert!(Catalog::builtin().get(99).is_none());
        assert!(Catalog::new(Vec::new()).unwrap().is_empty());
    }
}
