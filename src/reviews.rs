use crate::catalog::{Product, Review};

/// Which product's reviews are shown, and whether the dialog is open.
///
/// Closing keeps the selection so the dialog can animate out with its content.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReviewsViewer {
    open: bool,
    selected: Option<Product>,
}

impl ReviewsViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `product` and open the dialog.
    pub fn show(&mut self, product: &Product) {
        self.selected = Some(product.clone());
        self.open = true;
        tracing::debug!(product_id = product.id, "reviews shown");
    }

    /// Close the dialog. Returns `false` if it was already closed.
    pub fn close(&mut self) -> bool {
        if !self.open {
            return false;
        }
        self.open = false;
        true
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn selected(&self) -> Option<&Product> {
        self.selected.as_ref()
    }

    /// Reviews of the selected product, empty when nothing was ever shown.
    pub fn reviews(&self) -> &[Review] {
        self.selected
            .as_ref()
            .map(|product| product.reviews.as_slice())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn starts_closed_without_selection() {
        let viewer = ReviewsViewer::new();
        assert!(!viewer.is_open());
        assert!(viewer.selected().is_none());
        assert!(viewer.reviews().is_empty());
    }

    #[test]
    fn close_keeps_selection() {
        let catalog = Catalog::builtin();
        let first = catalog.get(1).unwrap();
        let second = catalog.get(2).unwrap();
        let mut viewer = ReviewsViewer::new();

        viewer.show(first);
        assert!(viewer.is_open());
        assert_eq!(viewer.selected(), Some(first));
        assert_eq!(viewer.reviews().len(), 2);

        assert!(viewer.close());
        assert!(!viewer.is_open());
        assert_eq!(viewer.selected(), Some(first));

        viewer.show(second);
        assert!(viewer.is_open());
        assert_eq!(viewer.selected().map(|p| p.id), Some(2));
    }

    #[test]
    fn close_is_idempotent() {
        let mut viewer = ReviewsViewer::new();
        assert!(!viewer.close());

        viewer.show(Catalog::builtin().get(3).unwrap());
        assert!(viewer.close());
        let after = viewer.clone();
        assert!(!viewer.close());
        assert_eq!(viewer, after);
    }
}
