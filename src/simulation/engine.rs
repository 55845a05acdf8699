// src/simulation/engine.rs

use std::collections::HashMap;

use serde::Serialize;
use tracing::info;

use crate::error::GenerationError;
use crate::generation::{
    generate_random_dcs, generate_random_items, generate_random_stores, seeded_rng,
};
use crate::model::{Dc, Item, Store};
use crate::simulation::config::EnvConfig;
use crate::simulation::network::Network;

// Serialize so the CLI can print it or write it alongside the CSV exports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkSummary {
    pub seed: u64,
    pub items: usize,
    pub stores: usize,
    pub dcs: usize,
    pub nodes: usize,
    pub edges: usize,
    pub total_store_capacity: i64,
    pub total_dc_capacity: i64,
    pub total_store_inventory: u64,
    pub inventory_value_at_cost: f64,
    pub inventory_value_at_retail: f64,
    pub mean_overshoot: f64,
}

/// The retail inventory network environment.
///
/// Holds the entity counts and generator parameters; `reset` samples a fresh
/// catalog, store set and DC set from a seed and rebuilds the graph.
pub struct InventoryEnv {
    config: EnvConfig,
    seed: Option<u64>,

    items: Vec<Item>,
    stores: Vec<Store>,
    dcs: Vec<Dc>,
    network: Network,
}

impl InventoryEnv {
    /// An environment that has not been reset yet: no entities, demand node only.
    pub fn new(config: EnvConfig) -> Self {
        Self {
            config,
            seed: None,
            items: Vec::new(),
            stores: Vec::new(),
            dcs: Vec::new(),
            network: Network::new(),
        }
    }

    /// Regenerates every entity from `seed` and rebuilds the network.
    ///
    /// On error the previous state is left untouched.
    pub fn reset(&mut self, seed: u64) -> Result<&Network, GenerationError> {
        let gens = &self.config.generators;
        let mut rng = seeded_rng(seed);

        let items = generate_random_items(&mut rng, self.config.n_items, &gens.items)?;
        let stores = generate_random_stores(&mut rng, self.config.n_stores, &items, &gens.stores)?;
        let dcs = generate_random_dcs(&mut rng, self.config.n_dcs, &gens.dcs)?;
        let network = Network::build(&dcs, &stores);

        info!(
            seed,
            items = items.len(),
            stores = stores.len(),
            dcs = dcs.len(),
            edges = network.edge_count(),
            "environment reset"
        );

        self.seed = Some(seed);
        self.items = items;
        self.stores = stores;
        self.dcs = dcs;
        self.network = network;
        Ok(&self.network)
    }

    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    /// Seed of the last successful reset.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn is_initialized(&self) -> bool {
        self.seed.is_some()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn stores(&self) -> &[Store] {
        &self.stores
    }

    pub fn dcs(&self) -> &[Dc] {
        &self.dcs
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn item(&self, id: u32) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn store(&self, id: u32) -> Option<&Store> {
        self.stores.iter().find(|store| store.id == id)
    }

    /// Aggregate figures for the current network. `None` before the first reset.
    pub fn summary(&self) -> Option<NetworkSummary> {
        let seed = self.seed?;
        let by_id: HashMap<u32, &Item> = self.items.iter().map(|item| (item.id, item)).collect();

        let mut value_at_cost = 0.0;
        let mut value_at_retail = 0.0;
        for store in &self.stores {
            for (id, &qty) in store.items.iter().zip(&store.inv) {
                if let Some(item) = by_id.get(id) {
                    value_at_cost += item.unit_manufacturing_cost * qty as f64;
                    value_at_retail += item.unit_retail_price * qty as f64;
                }
            }
        }

        let mean_overshoot = if self.stores.is_empty() {
            0.0
        } else {
            self.stores.iter().map(|s| s.overshoot() as f64).sum::<f64>() / self.stores.len() as f64
        };

        Some(NetworkSummary {
            seed,
            items: self.items.len(),
            stores: self.stores.len(),
            dcs: self.dcs.len(),
            nodes: self.network.node_count(),
            edges: self.network.edge_count(),
            total_store_capacity: self.stores.iter().map(|s| s.cap).sum(),
            total_dc_capacity: self.dcs.iter().map(|dc| dc.cap).sum(),
            total_store_inventory: self.stores.iter().map(Store::total_inventory).sum(),
            inventory_value_at_cost: value_at_cost,
            inventory_value_at_retail: value_at_retail,
            mean_overshoot,
        })
    }
}
