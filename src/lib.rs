//! Synthetic data generation for a retail inventory network: items, stores,
//! distribution centers, and the graph that ties them to a demand node.

pub mod error;
pub mod generation;
pub mod io;
pub mod logging;
pub mod model;
pub mod simulation;

pub use error::{ConfigError, ExportError, GenerationError};
pub use model::{Dc, Item, Store};
pub use simulation::{EnvConfig, InventoryEnv};
