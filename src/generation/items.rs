// src/generation/items.rs

use rand::Rng;
use tracing::debug;

use super::config::ItemGenConfig;
use super::sampling::{gamma, rounded_draws, unique_ids};
use crate::error::GenerationError;
use crate::model::Item;

/// Generates the global item catalog.
///
/// Ids are unique within `config.id_range`. Manufacturing cost and retail
/// price come from two independent Gamma distributions, rounded to cents.
///
/// # Errors
/// * `IdRangeExhausted` if `n_items` exceeds the size of the id range.
/// * `InvalidDistribution` if a gamma shape or scale is not positive.
pub fn generate_random_items<R: Rng + ?Sized>(
    rng: &mut R,
    n_items: usize,
    config: &ItemGenConfig,
) -> Result<Vec<Item>, GenerationError> {
    let umc = gamma("unit manufacturing cost", config.umc_gamma_shape, config.umc_gamma_scale)?;
    let urp = gamma("unit retail price", config.urp_gamma_shape, config.urp_gamma_scale)?;

    let ids = unique_ids(rng, config.id_range, n_items, "item")?;
    let costs = rounded_draws(rng, &umc, n_items, 2);
    let prices = rounded_draws(rng, &urp, n_items, 2);

    let items: Vec<Item> = ids
        .into_iter()
        .zip(costs)
        .zip(prices)
        .map(|((id, cost), price)| Item::new(id, cost, price))
        .collect();

    debug!(count = items.len(), "generated items");
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::config::IdRange;
    use crate::generation::sampling::seeded_rng;

    #[test]
    fn generates_requested_count_with_defaults() {
        let mut rng = seeded_rng(42);
        let items = generate_random_items(&mut rng, 5, &ItemGenConfig::default()).unwrap();

        assert_eq!(items.len(), 5);
        for item in &items {
            assert!((1_000_000..9_999_999).contains(&item.id));
            assert!(item.unit_manufacturing_cost >= 0.0);
            assert!(item.unit_retail_price >= 0.0);
            assert_eq!(item.quantity, 0);
        }
    }

    #[test]
    fn zero_items_is_empty_not_an_error() {
        let mut rng = seeded_rng(1);
        let items = generate_random_items(&mut rng, 0, &ItemGenConfig::default()).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn too_many_items_for_the_range() {
        let config = ItemGenConfig {
            id_range: IdRange::new(1, 4),
            ..ItemGenConfig::default()
        };
        let err = generate_random_items(&mut seeded_rng(1), 4, &config).unwrap_err();
        assert!(matches!(err, GenerationError::IdRangeExhausted { entity: "item", .. }));
    }

    #[test]
    fn non_positive_gamma_scale_is_rejected() {
        let config = ItemGenConfig {
            urp_gamma_scale: 0.0,
            ..ItemGenConfig::default()
        };
        let err = generate_random_items(&mut seeded_rng(1), 3, &config).unwrap_err();
        assert!(matches!(err, GenerationError::InvalidDistribution { .. }));
    }
}
