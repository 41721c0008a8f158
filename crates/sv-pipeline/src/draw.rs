use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::{InputError, Result};
use crate::token::TokenProb;

/// Draw one token from a final distribution using a seeded RNG.
///
/// Same seed and same distribution always select the same token.
pub fn draw(dist: &[TokenProb], seed: u64) -> Result<&TokenProb> {
    if dist.is_empty() {
        return Err(InputError::Empty.into());
    }

    let weights: Vec<f64> = dist.iter().map(|t| t.prob).collect();
    let index = match WeightedIndex::new(&weights) {
        Ok(d) => {
            let mut rng = StdRng::seed_from_u64(seed);
            d.sample(&mut rng)
        }
        // Unusable weights (e.g. all zero): fall back to the head token.
        Err(_) => 0,
    };

    Ok(&dist[index])
}
