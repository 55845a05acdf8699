// src/model/dc.rs

use serde::{Deserialize, Serialize};

use super::geo::GeoPoint;

/// A distribution center supplying stores downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dc {
    pub id: u32,
    pub lat: f64,
    pub long: f64,
    pub cap: i64,
}

impl Dc {
    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.long)
    }
}
