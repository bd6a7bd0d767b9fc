//! Parallel fan-out of the scoring pipeline over independent populations.
//!
//! Scoring one commit's file population never reads another's, so a batch
//! of commits shards across the rayon pool with no coordination.

use rayon::prelude::*;

use crate::config::ScoringWeights;
use crate::core::types::FileSample;
use crate::scoring::badness::badness_scores;
use crate::scoring::drift::drift_score;

/// Drift score for each population, in input order
pub fn drift_scores_for_populations(
    populations: &[Vec<FileSample>],
    weights: &ScoringWeights,
) -> Vec<f64> {
    populations
        .par_iter()
        .map(|samples| drift_score(&badness_scores(samples, weights)))
        .collect()
}
