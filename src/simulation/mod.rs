pub mod config;
pub mod engine;
pub mod network;

pub use config::EnvConfig;
pub use engine::{InventoryEnv, NetworkSummary};
pub use network::{Edge, Network, NodeIndex, NodeKind, DEMAND_NODE};
