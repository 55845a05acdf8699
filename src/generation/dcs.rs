// src/generation/dcs.rs

use rand::Rng;
use tracing::{debug, warn};

use super::config::DcGenConfig;
use super::sampling::{capacities, coordinates, unique_ids};
use crate::error::GenerationError;
use crate::model::Dc;

/// Generates distribution centers inside `config.bounds`.
///
/// Same draw order as stores: ids, latitudes, longitudes, capacities.
pub fn generate_random_dcs<R: Rng + ?Sized>(
    rng: &mut R,
    n_dcs: usize,
    config: &DcGenConfig,
) -> Result<Vec<Dc>, GenerationError> {
    let ids = unique_ids(rng, config.id_range, n_dcs, "dc")?;
    let (lats, longs) = coordinates(rng, &config.bounds, n_dcs)?;
    let caps = capacities(rng, config.mean_cap, config.std_cap, n_dcs)?;

    let dcs: Vec<Dc> = (0..n_dcs)
        .map(|i| Dc {
            id: ids[i],
            lat: lats[i],
            long: longs[i],
            cap: caps[i],
        })
        .collect();

    for dc in dcs.iter().filter(|dc| dc.cap <= 0) {
        warn!(dc_id = dc.id, cap = dc.cap, "sampled non-positive dc capacity");
    }
    debug!(count = dcs.len(), "generated dcs");
    Ok(dcs)
}
