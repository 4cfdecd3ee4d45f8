//! Filter panel state: price range, stock flag, minimum rating.
//!
//! Values are held for the panel only; nothing here narrows the catalog.

use serde::{Deserialize, Serialize};

use crate::catalog::MAX_RATING;
use crate::config::StorefrontConfig;

/// Inclusive price interval, `low <= high`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub low: u64,
    pub high: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FilterState {
    #[serde(skip)]
    bounds: PriceRange,
    #[serde(skip)]
    step: u64,
    price_range: PriceRange,
    in_stock_only: bool,
    min_rating: u8,
}

impl Default for FilterState {
    fn default() -> Self {
        FilterState::from_config(&StorefrontConfig::default())
    }
}

impl FilterState {
    /// `step` of zero is treated as one.
    pub fn new(bounds: PriceRange, step: u64) -> Self {
        FilterState {
            bounds,
            step: step.max(1),
            price_range: bounds,
            in_stock_only: false,
            min_rating: 0,
        }
    }

    pub fn from_config(config: &StorefrontConfig) -> Self {
        FilterState::new(config.price_bounds(), config.price_step)
    }

    pub fn price_range(&self) -> PriceRange {
        self.price_range
    }

    pub fn in_stock_only(&self) -> bool {
        self.in_stock_only
    }

    pub fn min_rating(&self) -> u8 {
        self.min_rating
    }

    pub fn bounds(&self) -> PriceRange {
        self.bounds
    }

    pub fn step(&self) -> u64 {
        self.step
    }

    /// Set the price range the way the slider would: each end is clamped into
    /// the bounds and snapped to the step, and the ends are ordered.
    /// Returns whether the stored range changed.
    pub fn set_price_range(&mut self, low: u64, high: u64) -> bool {
        let (low, high) = if low > high {
            tracing::warn!(low, high, "price range ends swapped");
            (high, low)
        } else {
            (low, high)
        };

        let range = PriceRange {
            low: self.snap(low),
            high: self.snap(high),
        };
        if self.price_range == range {
            return false;
        }
        self.price_range = range;
        true
    }

    pub fn set_in_stock_only(&mut self, in_stock_only: bool) -> bool {
        if self.in_stock_only == in_stock_only {
            return false;
        }
        self.in_stock_only = in_stock_only;
        true
    }

    /// Ratings above five are clamped to five.
    pub fn set_min_rating(&mut self, rating: u8) -> bool {
        let rating = rating.min(MAX_RATING);
        if self.min_rating == rating {
            return false;
        }
        self.min_rating = rating;
        true
    }

    /// Full price range, all stock, any rating.
    pub fn reset(&mut self) -> bool {
        let fresh = FilterState::new(self.bounds, self.step);
        if *self == fresh {
            return false;
        }
        *self = fresh;
        tracing::debug!("filters reset");
        true
    }

    pub fn is_default(&self) -> bool {
        self.price_range == self.bounds && !self.in_stock_only && self.min_rating == 0
    }

    fn snap(&self, value: u64) -> u64 {
        let clamped = value.clamp(self.bounds.low, self.bounds.high);
        let offset = clamped - self.bounds.low;
        let below = offset - offset % self.step;
        // Round half up; the upper step may lie past u64::MAX.
        let snapped = if offset % self.step >= self.step - self.step / 2 {
            below.saturating_add(self.step)
        } else {
            below
        };
        self.bounds.low.saturating_add(snapped).min(self.bounds.high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let filters = FilterState::default();
        assert_eq!(filters.price_range(), PriceRange { low: 0, high: 25000 });
        assert!(!filters.in_stock_only());
        assert_eq!(filters.min_rating(), 0);
        assert!(filters.is_default());
    }

    #[test]
    fn reset_restores_defaults_from_any_state() {
        let mut filters = FilterState::default();
        filters.set_price_range(3000, 12000);
        filters.set_in_stock_only(true);
        filters.set_min_rating(4);
        assert!(!filters.is_default());

        assert!(filters.reset());
        assert_eq!(filters.price_range(), PriceRange { low: 0, high: 25000 });
        assert!(!filters.in_stock_only());
        assert_eq!(filters.min_rating(), 0);

        assert!(!filters.reset());
    }

    #[test]
    fn price_range_is_clamped_into_bounds() {
        let mut filters = FilterState::default();
        filters.set_price_range(0, 90000);
        assert_eq!(filters.price_range(), PriceRange { low: 0, high: 25000 });
    }

    #[test]
    fn price_range_snaps_to_step() {
        let mut filters = FilterState::default();
        filters.set_price_range(1240, 9760);
        assert_eq!(filters.price_range(), PriceRange { low: 1000, high: 10000 });
    }

    #[test]
    fn inverted_price_range_is_ordered() {
        let mut filters = FilterState::default();
        filters.set_price_range(20000, 5000);
        assert_eq!(filters.price_range(), PriceRange { low: 5000, high: 20000 });
    }

    #[test]
    fn snapping_respects_offset_bounds() {
        let mut filters = FilterState::new(PriceRange { low: 250, high: 1100 }, 500);
        filters.set_price_range(0, 1100);
        assert_eq!(filters.price_range(), PriceRange { low: 250, high: 1100 });

        filters.set_price_range(600, 700);
        assert_eq!(filters.price_range(), PriceRange { low: 750, high: 750 });
    }

    #[test]
    fn snapping_near_u64_max_saturates() {
        let mut filters = FilterState::new(PriceRange { low: 0, high: u64::MAX }, 1000);
        assert!(!filters.set_price_range(0, u64::MAX));
        assert!(filters.set_price_range(u64::MAX - 1, u64::MAX));
        assert_eq!(
            filters.price_range(),
            PriceRange { low: u64::MAX, high: u64::MAX }
        );

        let mut offset = FilterState::new(PriceRange { low: 10, high: u64::MAX }, 1000);
        offset.set_price_range(1509, u64::MAX);
        assert_eq!(offset.price_range(), PriceRange { low: 1010, high: u64::MAX });
    }

    #[test]
    fn min_rating_is_clamped() {
        let mut filters = FilterState::default();
        assert!(filters.set_min_rating(9));
        assert_eq!(filters.min_rating(), 5);
        assert!(!filters.set_min_rating(5));
    }

    #[test]
    fn setters_report_changes() {
        let mut filters = FilterState::default();
        assert!(filters.set_in_stock_only(true));
        assert!(!filters.set_in_stock_only(true));
        assert!(!filters.set_price_range(0, 25000));
    }
}
