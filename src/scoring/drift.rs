//! Population drift score and its per-file decomposition.
//!
//! The drift score is Shannon entropy over the badness distribution of the
//! "active" files, normalized to [0,1] and scaled by mean active badness.
//! It is high only when cost is both large in magnitude and spread broadly:
//! a single terrible file in an otherwise clean tree scores 0, because
//! concentration is cheap to fix and carries no distributional information.

use crate::config::ACTIVE_EPSILON;

/// Indices of files whose badness clears the negligibility threshold
fn active_set(badness: &[f64]) -> Vec<usize> {
    badness
        .iter()
        .enumerate()
        .filter(|(_, &b)| b > ACTIVE_EPSILON)
        .map(|(i, _)| i)
        .collect()
}

/// Population drift score, >= 0.
///
/// Zero when no file is active, when only one is (no spread), or when the
/// active total vanishes. Otherwise `H_norm * mean`, where `H_norm` is the
/// active set's Shannon entropy normalized by `log2(|A|)`.
pub fn drift_score(badness: &[f64]) -> f64 {
    let active = active_set(badness);
    if active.len() <= 1 {
        return 0.0;
    }

    let total: f64 = active.iter().map(|&i| badness[i]).sum();
    if total == 0.0 {
        return 0.0;
    }

    let entropy: f64 = active
        .iter()
        .map(|&i| {
            let p = badness[i] / total;
            -p * p.log2()
        })
        .sum();

    let normalized = entropy / (active.len() as f64).log2();
    let mean = total / active.len() as f64;
    (normalized * mean).max(0.0)
}

/// Per-file diffusion contributions: each active file's `-p * log2(p)`
/// term, 0 for inactive files. Sums to the unnormalized entropy.
///
/// Ranks files by how much each one individually spreads the population's
/// disorder; a moderately bad file among few other bad files can outrank
/// the single worst file here.
pub fn diffusion_contributions(badness: &[f64]) -> Vec<f64> {
    let active = active_set(badness);
    let mut contributions = vec![0.0; badness.len()];
    if active.len() <= 1 {
        return contributions;
    }

    let total: f64 = active.iter().map(|&i| badness[i]).sum();
    if total == 0.0 {
        return contributions;
    }

    for &i in &active {
        let p = badness[i] / total;
        contributions[i] = -p * p.log2();
    }
    contributions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_singleton_populations_score_zero() {
        assert_eq!(drift_score(&[]), 0.0);
        assert_eq!(drift_score(&[42.0]), 0.0);
        assert_eq!(drift_score(&[0.0, 0.0, 5.0]), 0.0);
    }

    #[test]
    fn equal_badness_scores_the_shared_value() {
        // Uniform distribution: H_norm == 1, so the score is the mean
        let badness = vec![0.8; 5];
        assert!((drift_score(&badness) - 0.8).abs() < 1e-12);
    }

    #[test]
    fn below_epsilon_files_are_ignored() {
        let badness = vec![1e-12, 1e-10, 0.5, 0.5];
        assert!((drift_score(&badness) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn concentration_scores_below_even_spread() {
        let spread = drift_score(&[1.0, 1.0, 1.0, 1.0]);
        let concentrated = drift_score(&[3.7, 0.1, 0.1, 0.1]);
        assert!(concentrated < spread);
    }

    #[test]
    fn contributions_sum_to_unnormalized_entropy() {
        let badness = [0.2, 0.7, 0.1, 1.4];
        let total: f64 = badness.iter().sum();
        let entropy: f64 = badness
            .iter()
            .map(|b| {
                let p = b / total;
                -p * p.log2()
            })
            .sum();
        let sum: f64 = diffusion_contributions(&badness).iter().sum();
        assert!((sum - entropy).abs() < 1e-12);
    }

    #[test]
    fn inactive_files_contribute_nothing() {
        let contributions = diffusion_contributions(&[0.0, 0.4, 0.6, 1e-15]);
        assert_eq!(contributions[0], 0.0);
        assert_eq!(contributions[3], 0.0);
        assert!(contributions[1] > 0.0 && contributions[2] > 0.0);
    }
}
