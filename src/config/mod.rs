//! Configuration loading and management

use crate::core::{FilterCriteria, PriceRange};
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

/// Where the catalog is fetched from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// URL of a JSON endpoint returning an array of products
    pub url: String,

    /// Request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:3004/products".to_string(),
            timeout_ms: 5000,
        }
    }
}

/// Initial values of the filter controls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterDefaults {
    pub price_range: PriceRange,

    pub min_rating: f64,
}

impl Default for FilterDefaults {
    fn default() -> Self {
        Self {
            price_range: PriceRange::default(),
            min_rating: 0.0,
        }
    }
}

/// Complete configuration for a catalog session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub source: SourceConfig,

    pub defaults: FilterDefaults,

    /// Choices offered by a "N stars & up" rating picker
    pub rating_options: Vec<f64>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

impl CatalogConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    ///
    /// Missing sections fall back to [`CatalogConfig::default_config`]. The
    /// result is validated before being returned.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject defaults the engine would refuse
    pub fn validate(&self) -> Result<()> {
        self.defaults.price_range.validate()?;

        if let Some(bad) = self
            .rating_options
            .iter()
            .find(|r| !(0.0..=5.0).contains(*r))
        {
            bail!("Rating option {} is outside [0, 5]", bad);
        }

        if self.source.timeout_ms == 0 {
            bail!("Source timeout must be greater than zero");
        }

        Ok(())
    }

    /// Criteria the filter controls start from (and reset to)
    pub fn default_criteria(&self) -> FilterCriteria {
        FilterCriteria::default()
            .with_price_range(self.defaults.price_range)
            .with_min_rating(self.defaults.min_rating)
    }

    /// The storefront defaults: local json-server feed, `[0, 5000]`, 1 to 5 stars
    pub fn default_config() -> Self {
        Self {
            source: SourceConfig::default(),
            defaults: FilterDefaults::default(),
            rating_options: vec![1.0, 2.0, 3.0, 4.0, 5.0],
        }
    }
}
