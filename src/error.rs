// src/error.rs

use thiserror::Error;

/// Failures raised while sampling entities.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("cannot draw {requested} unique {entity} ids from a range of {available}")]
    IdRangeExhausted {
        entity: &'static str,
        requested: usize,
        available: usize,
    },

    #[error("invalid {what} range: min {min} must be below max {max}")]
    InvalidRange { what: &'static str, min: f64, max: f64 },

    #[error("invalid {name} distribution: {reason}")]
    InvalidDistribution { name: &'static str, reason: String },

    #[error("inventory batch size must be positive")]
    InvalidBatchSize,

    #[error("store {store_id} has capacity {capacity} but no item slots to fill")]
    EmptyAssortment { store_id: u32, capacity: i64 },
}

/// Failures loading a generator config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failures writing CSV exports.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to prepare output: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to write csv: {0}")]
    Csv(#[from] csv::Error),
}
