// src/model/item.rs

use serde::{Deserialize, Serialize};

/// A stock-keeping unit tracked by the inventory network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub unit_manufacturing_cost: f64,
    pub unit_retail_price: f64,
    // Not validated; the generator starts every item at 0.
    pub quantity: i64,
}

impl Item {
    pub fn new(id: u32, unit_manufacturing_cost: f64, unit_retail_price: f64) -> Self {
        Self {
            id,
            unit_manufacturing_cost,
            unit_retail_price,
            quantity: 0,
        }
    }

    /// Retail price minus manufacturing cost. Negative when the item sells at a loss.
    pub fn unit_margin(&self) -> f64 {
        self.unit_retail_price - self.unit_manufacturing_cost
    }
}
