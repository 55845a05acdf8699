// src/generation/stores.rs

use rand::seq::{index, SliceRandom};
use rand::Rng;
use rand_distr::Distribution;
use tracing::{debug, warn};

use super::config::{AssortmentSampling, StoreGenConfig};
use super::sampling::{capacities, coordinates, normal, unique_ids};
use crate::error::GenerationError;
use crate::model::{Item, Store};

/// Generates stores stocked from the `items` catalog.
///
/// Each store carries `round(ratio * items.len())` slots, where `ratio` is a
/// normal draw clipped to `[min_item_ratio, max_item_ratio]`. Slots are then
/// filled by adding `inventory_batch` units to a random slot until the store
/// total reaches its capacity, so a store with positive capacity ends with
/// `cap <= total < cap + inventory_batch`. Stores with a capacity of zero or
/// less keep an all-zero inventory.
///
/// # Errors
/// * `IdRangeExhausted` if `n_stores` exceeds the size of the id range.
/// * `InvalidRange` if the bounding box or ratio bounds are inverted.
/// * `InvalidDistribution` if a standard deviation is negative.
/// * `InvalidBatchSize` if `inventory_batch` is zero.
/// * `EmptyAssortment` if a store with positive capacity ends up with no slots.
pub fn generate_random_stores<R: Rng + ?Sized>(
    rng: &mut R,
    n_stores: usize,
    items: &[Item],
    config: &StoreGenConfig,
) -> Result<Vec<Store>, GenerationError> {
    if config.inventory_batch == 0 {
        return Err(GenerationError::InvalidBatchSize);
    }
    if !(config.min_item_ratio <= config.max_item_ratio) {
        return Err(GenerationError::InvalidRange {
            what: "item ratio",
            min: config.min_item_ratio,
            max: config.max_item_ratio,
        });
    }
    let ratio_dist = normal("item ratio", config.mean_item_ratio, config.std_item_ratio)?;

    let ids = unique_ids(rng, config.id_range, n_stores, "store")?;
    let (lats, longs) = coordinates(rng, &config.bounds, n_stores)?;
    let caps = capacities(rng, config.mean_cap, config.std_cap, n_stores)?;

    let catalog: Vec<u32> = items.iter().map(|item| item.id).collect();
    let slot_counts: Vec<usize> = (0..n_stores)
        .map(|_| {
            let ratio = ratio_dist
                .sample(rng)
                .clamp(config.min_item_ratio, config.max_item_ratio);
            (ratio * catalog.len() as f64).round() as usize
        })
        .collect();

    let assortments: Vec<Vec<u32>> = slot_counts
        .iter()
        .map(|&n| sample_assortment(rng, &catalog, n, config.assortment))
        .collect();

    let mut stores = Vec::with_capacity(n_stores);
    for (i, store_items) in assortments.into_iter().enumerate() {
        let (id, cap) = (ids[i], caps[i]);
        if cap <= 0 {
            warn!(store_id = id, cap, "sampled non-positive store capacity");
        }
        let inv = fill_inventory(rng, store_items.len(), cap, config.inventory_batch).ok_or(
            GenerationError::EmptyAssortment {
                store_id: id,
                capacity: cap,
            },
        )?;

        stores.push(Store {
            id,
            lat: lats[i],
            long: longs[i],
            cap,
            items: store_items,
            inv,
        });
    }

    debug!(count = stores.len(), catalog = catalog.len(), "generated stores");
    Ok(stores)
}

fn sample_assortment<R: Rng + ?Sized>(
    rng: &mut R,
    catalog: &[u32],
    slots: usize,
    mode: AssortmentSampling,
) -> Vec<u32> {
    match mode {
        AssortmentSampling::WithReplacement => (0..slots)
            .filter_map(|_| catalog.choose(rng).copied())
            .collect(),
        // The ratio is clipped to at most 1.0, so this only saturates on
        // custom configs that allow ratios above it.
        AssortmentSampling::Distinct => {
            let n = slots.min(catalog.len());
            index::sample(rng, catalog.len(), n)
                .into_iter()
                .map(|i| catalog[i])
                .collect()
        }
    }
}

/// Tops up random slots by `batch` until the total reaches `cap`.
///
/// Returns `None` when there is capacity to fill but no slot to put it in.
/// Totals stay below `i64::MAX + u32::MAX`, so `u64` slots cannot overflow.
fn fill_inventory<R: Rng + ?Sized>(
    rng: &mut R,
    slots: usize,
    cap: i64,
    batch: u32,
) -> Option<Vec<u64>> {
    let mut inv = vec![0u64; slots];
    if cap <= 0 {
        return Some(inv);
    }
    if slots == 0 {
        return None;
    }

    let (cap, batch) = (cap as u64, u64::from(batch));
    let mut total: u64 = 0;
    while total < cap {
        inv[rng.gen_range(0..slots)] += batch;
        total += batch;
    }
    Some(inv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::sampling::seeded_rng;

    fn catalog(n: u32) -> Vec<Item> {
        (0..n).map(|i| Item::new(1_000_000 + i, 1.0, 10.0)).collect()
    }

    #[test]
    fn inventory_reaches_capacity_within_one_batch() {
        let mut rng = seeded_rng(11);
        let inv = fill_inventory(&mut rng, 4, 95, 10).unwrap();
        assert_eq!(inv.len(), 4);
        assert_eq!(inv.iter().sum::<u64>(), 100);
        assert!(inv.iter().all(|q| q % 10 == 0));
    }

    #[test]
    fn non_positive_capacity_leaves_inventory_empty() {
        let mut rng = seeded_rng(11);
        assert_eq!(fill_inventory(&mut rng, 3, 0, 10), Some(vec![0, 0, 0]));
        assert_eq!(fill_inventory(&mut rng, 3, -250, 10), Some(vec![0, 0, 0]));
        assert_eq!(fill_inventory(&mut rng, 0, -250, 10), Some(vec![]));
    }

    #[test]
    fn positive_capacity_without_slots_is_refused() {
        let mut rng = seeded_rng(11);
        assert_eq!(fill_inventory(&mut rng, 0, 10, 10), None);
    }

    #[test]
    fn empty_catalog_with_positive_capacity_errors() {
        let config = StoreGenConfig {
            mean_cap: 1000.0,
            std_cap: 0.0,
            ..StoreGenConfig::default()
        };
        let err = generate_random_stores(&mut seeded_rng(5), 2, &[], &config).unwrap_err();
        assert!(matches!(err, GenerationError::EmptyAssortment { capacity: 1000, .. }));
    }

    #[test]
    fn large_capacity_and_batch_fill_without_overflow() {
        let config = StoreGenConfig {
            mean_cap: 1e10,
            std_cap: 0.0,
            mean_item_ratio: 1.0,
            std_item_ratio: 0.0,
            inventory_batch: 1_000_000_000,
            ..StoreGenConfig::default()
        };
        let stores = generate_random_stores(&mut seeded_rng(3), 1, &catalog(1), &config).unwrap();
        assert_eq!(stores[0].cap, 10_000_000_000);
        assert_eq!(stores[0].inv, vec![10_000_000_000]);
    }

    #[test]
    fn negative_capacity_spread_is_rejected() {
        let config = StoreGenConfig {
            std_cap: -1.0,
            ..StoreGenConfig::default()
        };
        let err = generate_random_stores(&mut seeded_rng(5), 2, &catalog(4), &config).unwrap_err();
        assert!(matches!(err, GenerationError::InvalidDistribution { name: "capacity", .. }));
    }

    #[test]
    fn negative_ratio_spread_is_rejected() {
        let config = StoreGenConfig {
            std_item_ratio: -0.1,
            ..StoreGenConfig::default()
        };
        let err = generate_random_stores(&mut seeded_rng(5), 2, &catalog(4), &config).unwrap_err();
        assert!(matches!(err, GenerationError::InvalidDistribution { name: "item ratio", .. }));
    }

    #[test]
    fn inverted_ratio_bounds_are_rejected() {
        let config = StoreGenConfig {
            min_item_ratio: 0.9,
            max_item_ratio: 0.5,
            ..StoreGenConfig::default()
        };
        let err = generate_random_stores(&mut seeded_rng(5), 2, &catalog(4), &config).unwrap_err();
        assert!(matches!(err, GenerationError::InvalidRange { what: "item ratio", .. }));
    }

    #[test]
    fn ratio_rounding_to_zero_slots_errors() {
        // 0.25 of a one-item catalog rounds to zero slots.
        let config = StoreGenConfig {
            mean_item_ratio: 0.25,
            std_item_ratio: 0.0,
            mean_cap: 500.0,
            std_cap: 0.0,
            ..StoreGenConfig::default()
        };
        let err = generate_random_stores(&mut seeded_rng(5), 1, &catalog(1), &config).unwrap_err();
        assert!(matches!(err, GenerationError::EmptyAssortment { capacity: 500, .. }));
    }

    #[test]
    fn zero_batch_is_rejected() {
        let config = StoreGenConfig {
            inventory_batch: 0,
            ..StoreGenConfig::default()
        };
        let err = generate_random_stores(&mut seeded_rng(5), 1, &catalog(3), &config).unwrap_err();
        assert!(matches!(err, GenerationError::InvalidBatchSize));
    }

    #[test]
    fn slot_count_follows_clipped_ratio() {
        // Zero spread pins every ratio to the mean, which then clips to 1.0.
        let config = StoreGenConfig {
            mean_item_ratio: 1.7,
            std_item_ratio: 0.0,
            ..StoreGenConfig::default()
        };
        let stores = generate_random_stores(&mut seeded_rng(5), 3, &catalog(8), &config).unwrap();
        assert!(stores.iter().all(|s| s.items.len() == 8));

        let config = StoreGenConfig {
            mean_item_ratio: 0.0,
            std_item_ratio: 0.0,
            ..StoreGenConfig::default()
        };
        let stores = generate_random_stores(&mut seeded_rng(5), 3, &catalog(8), &config).unwrap();
        assert!(stores.iter().all(|s| s.items.len() == 2));
    }

    #[test]
    fn distinct_assortment_has_no_duplicates() {
        let config = StoreGenConfig {
            assortment: AssortmentSampling::Distinct,
            ..StoreGenConfig::default()
        };
        let stores =
            generate_random_stores(&mut seeded_rng(9), 10, &catalog(20), &config).unwrap();
        for store in &stores {
            assert_eq!(store.distinct_items(), store.items.len());
        }
    }

    #[test]
    fn store_items_come_from_the_catalog() {
        let items = catalog(12);
        let stores =
            generate_random_stores(&mut seeded_rng(9), 6, &items, &StoreGenConfig::default()).unwrap();
        for store in &stores {
            assert!(store.items.iter().all(|id| items.iter().any(|item| item.id == *id)));
        }
    }
}
