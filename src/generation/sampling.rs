// src/generation/sampling.rs

//! Draw helpers shared by the item, store and DC generators.

use rand::seq::index;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Gamma, Normal};

use super::config::{BoundingBox, IdRange};
use crate::error::GenerationError;

/// Deterministic RNG for a given seed.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Rounds half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Draws `count` distinct ids from `range` without replacement.
pub fn unique_ids<R: Rng + ?Sized>(
    rng: &mut R,
    range: IdRange,
    count: usize,
    entity: &'static str,
) -> Result<Vec<u32>, GenerationError> {
    if range.end < range.start {
        return Err(GenerationError::InvalidRange {
            what: entity,
            min: range.start as f64,
            max: range.end as f64,
        });
    }
    if count > range.len() {
        return Err(GenerationError::IdRangeExhausted {
            entity,
            requested: count,
            available: range.len(),
        });
    }

    Ok(index::sample(rng, range.len(), count)
        .into_iter()
        .map(|offset| range.start + offset as u32)
        .collect())
}

pub fn gamma(name: &'static str, shape: f64, scale: f64) -> Result<Gamma<f64>, GenerationError> {
    if !(shape > 0.0 && shape.is_finite() && scale > 0.0 && scale.is_finite()) {
        return Err(GenerationError::InvalidDistribution {
            name,
            reason: format!("shape {shape}, scale {scale}: both must be positive and finite"),
        });
    }
    Gamma::new(shape, scale).map_err(|e| GenerationError::InvalidDistribution {
        name,
        reason: format!("shape {shape}, scale {scale}: {e}"),
    })
}

pub fn normal(name: &'static str, mean: f64, std_dev: f64) -> Result<Normal<f64>, GenerationError> {
    // `Normal::new` only rejects a non-finite spread.
    if !mean.is_finite() || !(std_dev >= 0.0) {
        return Err(GenerationError::InvalidDistribution {
            name,
            reason: format!("mean {mean}, std {std_dev}: needs a finite mean and std >= 0"),
        });
    }
    Normal::new(mean, std_dev).map_err(|e| GenerationError::InvalidDistribution {
        name,
        reason: format!("mean {mean}, std {std_dev}: {e}"),
    })
}

/// `count` draws from `dist`, each rounded to `decimals` places.
pub fn rounded_draws<R, D>(rng: &mut R, dist: &D, count: usize, decimals: i32) -> Vec<f64>
where
    R: Rng + ?Sized,
    D: Distribution<f64>,
{
    (0..count)
        .map(|_| round_to(dist.sample(rng), decimals))
        .collect()
}

/// `count` uniform draws in `[min, max)`, each rounded to `decimals` places.
pub fn uniform_draws<R: Rng + ?Sized>(
    rng: &mut R,
    min: f64,
    max: f64,
    count: usize,
    decimals: i32,
    what: &'static str,
) -> Result<Vec<f64>, GenerationError> {
    if !(min < max) {
        return Err(GenerationError::InvalidRange { what, min, max });
    }
    Ok((0..count)
        .map(|_| round_to(rng.gen_range(min..max), decimals))
        .collect())
}

/// Latitudes then longitudes, rounded to 6 decimals.
pub fn coordinates<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: &BoundingBox,
    count: usize,
) -> Result<(Vec<f64>, Vec<f64>), GenerationError> {
    let lats = uniform_draws(rng, bounds.min_lat, bounds.max_lat, count, 6, "latitude")?;
    let longs = uniform_draws(rng, bounds.min_long, bounds.max_long, count, 6, "longitude")?;
    Ok((lats, longs))
}

/// Capacities from a normal draw rounded to the nearest integer. Negative values are kept.
pub fn capacities<R: Rng + ?Sized>(
    rng: &mut R,
    mean: f64,
    std_dev: f64,
    count: usize,
) -> Result<Vec<i64>, GenerationError> {
    let dist = normal("capacity", mean, std_dev)?;
    Ok((0..count)
        .map(|_| dist.sample(rng).round() as i64)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn round_to_two_decimals() {
        assert_eq!(round_to(1.23456, 2), 1.23);
        assert_eq!(round_to(2.675_01, 2), 2.68);
        assert_eq!(round_to(-0.004, 2), -0.0);
    }

    #[test]
    fn unique_ids_can_exhaust_a_small_range() {
        let mut rng = seeded_rng(7);
        let ids = unique_ids(&mut rng, IdRange::new(10, 20), 10, "item").unwrap();
        let set: HashSet<_> = ids.iter().copied().collect();
        assert_eq!(set, (10..20).collect::<HashSet<u32>>());
    }

    #[test]
    fn unique_ids_rejects_oversized_requests() {
        let mut rng = seeded_rng(7);
        let err = unique_ids(&mut rng, IdRange::new(10, 20), 11, "item").unwrap_err();
        assert!(matches!(
            err,
            GenerationError::IdRangeExhausted { requested: 11, available: 10, .. }
        ));
    }

    #[test]
    fn inverted_id_range_is_rejected() {
        let mut rng = seeded_rng(7);
        let err = unique_ids(&mut rng, IdRange::new(20, 10), 0, "store").unwrap_err();
        assert!(matches!(err, GenerationError::InvalidRange { .. }));
    }

    #[test]
    fn bad_distribution_parameters_are_reported() {
        assert!(matches!(
            gamma("unit cost", 0.0, 1.0),
            Err(GenerationError::InvalidDistribution { .. })
        ));
        assert!(matches!(
            normal("capacity", 0.0, -1.0),
            Err(GenerationError::InvalidDistribution { .. })
        ));
        assert!(matches!(
            normal("capacity", f64::NAN, 1.0),
            Err(GenerationError::InvalidDistribution { .. })
        ));
        assert!(matches!(
            gamma("unit cost", f64::NAN, 1.0),
            Err(GenerationError::InvalidDistribution { .. })
        ));
        assert!(normal("capacity", 10.0, 0.0).is_ok());
    }

    #[test]
    fn same_seed_same_stream() {
        let a = capacities(&mut seeded_rng(3), 100.0, 10.0, 8).unwrap();
        let b = capacities(&mut seeded_rng(3), 100.0, 10.0, 8).unwrap();
        assert_eq!(a, b);
    }
}
