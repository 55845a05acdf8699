//! Seeded synthetic generation of items, stores and distribution centers.

pub mod config;
pub mod dcs;
pub mod items;
pub mod sampling;
pub mod stores;

pub use config::{
    AssortmentSampling, BoundingBox, DcGenConfig, GeneratorConfig, IdRange, ItemGenConfig,
    StoreGenConfig,
};
pub use dcs::generate_random_dcs;
pub use items::generate_random_items;
pub use sampling::seeded_rng;
pub use stores::generate_random_stores;
