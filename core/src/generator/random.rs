use rand::Rng;
use rand::prelude::*;

use crate::*;

/// Picks `k` distinct items uniformly at random, without replacement.
///
/// Runs a partial Fisher-Yates shuffle over the first `k` slots, so every k-subset is equally
/// likely. The order of the returned items is arbitrary.
pub fn sample<T, R: Rng + ?Sized>(mut items: Vec<T>, k: usize, rng: &mut R) -> Result<Vec<T>> {
    let available = items.len();
    if available < k {
        return Err(GameError::InsufficientCandidates {
            requested: k,
            available,
        });
    }

    for i in 0..k {
        let j = rng.random_range(i..available);
        items.swap(i, j);
    }
    items.truncate(k);
    Ok(items)
}

/// Listing offset for category discovery, uniform over the configured inclusive range.
pub fn random_offset<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> u32 {
    rng.random_range(config.min_offset..=config.max_offset)
}

pub(crate) fn seeded_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}
