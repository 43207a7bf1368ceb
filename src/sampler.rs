use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::data::LabeledTweet;
use crate::errors::PrepError;

/// Draw a uniform random subset of `sample_size` rows without replacement.
///
/// The draw is fully determined by `seed`: repeated calls with the same table,
/// size, and seed return identical rows in identical order. Requesting more
/// rows than the table holds is an error rather than a silent truncation.
pub fn sample_without_replacement(
    rows: &[LabeledTweet],
    sample_size: usize,
    seed: u64,
) -> Result<Vec<LabeledTweet>, PrepError> {
    if sample_size > rows.len() {
        return Err(PrepError::Sampling {
            requested: sample_size,
            available: rows.len(),
        });
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let picked = rand::seq::index::sample(&mut rng, rows.len(), sample_size);
    debug!(requested = sample_size, population = rows.len(), seed, "sample drawn");
    Ok(picked.iter().map(|idx| rows[idx].clone()).collect())
}
