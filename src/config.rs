use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::filter::PriceRange;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("price bounds are inverted: min {min} > max {max}")]
    InvertedPriceBounds { min: u64, max: u64 },

    #[error("price step must be positive")]
    ZeroPriceStep,
}

/// Storefront settings. Missing fields fall back to the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Lower end of the price slider.
    pub price_min: u64,
    /// Upper end of the price slider.
    pub price_max: u64,
    /// Slider granularity; filter prices snap to multiples of this above `price_min`.
    pub price_step: u64,
    /// Entity id of the cart's event log.
    pub cart_id: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        StorefrontConfig {
            price_min: 0,
            price_max: 25000,
            price_step: 500,
            cart_id: "cart".to_string(),
        }
    }
}

impl StorefrontConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: StorefrontConfig = serde_json::from_str(json)?;
        config.validate()?;
        tracing::info!(
            price_min = config.price_min,
            price_max = config.price_max,
            price_step = config.price_step,
            "storefront config loaded"
        );
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.price_min > self.price_max {
            return Err(ConfigError::InvertedPriceBounds {
                min: self.price_min,
                max: self.price_max,
            });
        }
        if self.price_step == 0 {
            return Err(ConfigError::ZeroPriceStep);
        }
        Ok(())
    }

    pub fn price_bounds(&self) -> PriceRange {
        PriceRange {
            low: self.price_min,
            high: self.price_max,
        }
    }
}
