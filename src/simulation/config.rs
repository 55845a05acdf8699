// src/simulation/config.rs

use crate::generation::GeneratorConfig;

#[derive(Debug, Clone)]
pub struct EnvConfig {
    pub n_items: usize,
    pub n_stores: usize,
    pub n_dcs: usize,
    pub generators: GeneratorConfig,
}

impl EnvConfig {
    pub fn new(n_items: usize, n_stores: usize, n_dcs: usize) -> Self {
        Self {
            n_items,
            n_stores,
            n_dcs,
            generators: GeneratorConfig::default(),
        }
    }

    pub fn with_generators(mut self, generators: GeneratorConfig) -> Self {
        self.generators = generators;
        self
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::new(100, 20, 2)
    }
}
