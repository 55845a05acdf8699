// src/generation/config.rs

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Half-open range `[start, end)` that unique ids are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IdRange {
    pub start: u32,
    pub end: u32,
}

impl IdRange {
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, id: u32) -> bool {
        (self.start..self.end).contains(&id)
    }
}

/// Latitude/longitude box that node coordinates are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_long: f64,
    pub max_long: f64,
}

impl BoundingBox {
    pub fn contains(&self, lat: f64, long: f64) -> bool {
        (self.min_lat..=self.max_lat).contains(&lat)
            && (self.min_long..=self.max_long).contains(&long)
    }
}

impl Default for BoundingBox {
    // Roughly the state of Ohio.
    fn default() -> Self {
        Self {
            min_lat: 38.591114,
            max_lat: 41.343825,
            min_long: -84.858398,
            max_long: -80.485840,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemGenConfig {
    pub id_range: IdRange,
    pub umc_gamma_shape: f64,
    pub umc_gamma_scale: f64,
    pub urp_gamma_shape: f64,
    pub urp_gamma_scale: f64,
}

impl Default for ItemGenConfig {
    fn default() -> Self {
        Self {
            id_range: IdRange::new(1_000_000, 9_999_999),
            umc_gamma_shape: 2.0,
            umc_gamma_scale: 0.5,
            urp_gamma_shape: 6.0,
            urp_gamma_scale: 6.0,
        }
    }
}

/// How a store picks item ids from the catalog for its slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssortmentSampling {
    /// Independent draws; a store may stock the same item in several slots.
    #[default]
    WithReplacement,
    /// Every slot holds a different item.
    Distinct,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreGenConfig {
    pub id_range: IdRange,
    pub bounds: BoundingBox,
    pub mean_item_ratio: f64,
    pub std_item_ratio: f64,
    pub min_item_ratio: f64,
    pub max_item_ratio: f64,
    pub mean_cap: f64,
    pub std_cap: f64,
    pub inventory_batch: u32,
    pub assortment: AssortmentSampling,
}

impl Default for StoreGenConfig {
    fn default() -> Self {
        Self {
            id_range: IdRange::new(100_000, 999_999),
            bounds: BoundingBox::default(),
            mean_item_ratio: 0.75,
            std_item_ratio: 0.1,
            min_item_ratio: 0.25,
            max_item_ratio: 1.0,
            mean_cap: 3000.0,
            std_cap: 1500.0,
            inventory_batch: 10,
            assortment: AssortmentSampling::WithReplacement,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DcGenConfig {
    pub id_range: IdRange,
    pub bounds: BoundingBox,
    pub mean_cap: f64,
    pub std_cap: f64,
}

impl Default for DcGenConfig {
    fn default() -> Self {
        Self {
            id_range: IdRange::new(10_000, 99_999),
            bounds: BoundingBox::default(),
            mean_cap: 50_000.0,
            std_cap: 10_000.0,
        }
    }
}

/// Parameters for every generator, loadable from a JSON file.
///
/// Missing fields fall back to their defaults, so `{}` is a valid file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub items: ItemGenConfig,
    pub stores: StoreGenConfig,
    pub dcs: DcGenConfig,
}

impl GeneratorConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}
