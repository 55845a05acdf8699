// src/model/store.rs

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::geo::GeoPoint;

/// A demand-facing node holding an assortment of items.
///
/// `items` and `inv` are parallel: `inv[i]` is the on-hand quantity of the
/// slot stocking `items[i]`. The same item id can occupy several slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    pub id: u32,
    pub lat: f64,
    pub long: f64,
    pub cap: i64,
    pub items: Vec<u32>,
    pub inv: Vec<u64>,
}

impl Store {
    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.long)
    }

    /// Sum of on-hand units across all slots.
    pub fn total_inventory(&self) -> u64 {
        self.inv.iter().sum()
    }

    /// Units filled past capacity. Zero when the store is under capacity.
    pub fn overshoot(&self) -> u64 {
        let total = self.total_inventory() as i64;
        if total > self.cap {
            (total - self.cap.max(0)) as u64
        } else {
            0
        }
    }

    pub fn distinct_items(&self) -> usize {
        self.items.iter().collect::<HashSet<_>>().len()
    }

    /// On-hand quantity of `item_id`, summed over every slot holding it.
    pub fn on_hand(&self, item_id: u32) -> u64 {
        self.items
            .iter()
            .zip(&self.inv)
            .filter(|&(&id, _)| id == item_id)
            .map(|(_, &q)| q)
            .sum()
    }
}
