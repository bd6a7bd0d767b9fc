//! Per-file badness: the weighted combination of normalized cost signals.

use crate::config::ScoringWeights;
use crate::core::types::FileSample;
use crate::scoring::normalize::{normalize_feature, Feature};

/// One non-negative badness scalar per sample.
///
/// Maintainability is inverted before weighing: a file at the population's
/// maintainability ceiling adds nothing on that axis, the floor adds the
/// full weight. Empty input yields empty output.
pub fn badness_scores(samples: &[FileSample], weights: &ScoringWeights) -> Vec<f64> {
    if samples.is_empty() {
        return Vec::new();
    }

    let complexity = normalize_feature(samples, Feature::Complexity);
    let sloc = normalize_feature(samples, Feature::Sloc);
    let smells = normalize_feature(samples, Feature::Smells);
    let coupling = normalize_feature(samples, Feature::Coupling);
    let maintainability = normalize_feature(samples, Feature::Maintainability);

    (0..samples.len())
        .map(|i| {
            weights.complexity * complexity[i]
                + weights.sloc * sloc[i]
                + weights.smells * smells[i]
                + weights.coupling * coupling[i]
                + weights.maintainability * (1.0 - maintainability[i])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::SmellCounts;

    fn flat_sample(path: &str) -> FileSample {
        FileSample {
            sloc: 100,
            avg_cyclomatic: 2.0,
            maintainability: 80.0,
            smells: SmellCounts::new(0, 1, 0),
            coupling: 3.0,
            ..FileSample::new(path)
        }
    }

    #[test]
    fn empty_population_scores_nothing() {
        assert!(badness_scores(&[], &ScoringWeights::default()).is_empty());
    }

    #[test]
    fn uniform_population_scores_only_the_inverted_floor() {
        // All features degenerate: everything normalizes to 0, leaving only
        // the inverted-maintainability term, identical across files.
        let samples = vec![flat_sample("a.rs"), flat_sample("b.rs")];
        let weights = ScoringWeights::default();
        let scores = badness_scores(&samples, &weights);
        assert_eq!(scores, vec![weights.maintainability, weights.maintainability]);
    }

    #[test]
    fn file_at_maintainability_ceiling_with_flat_features_scores_zero() {
        let mut low = flat_sample("a.rs");
        low.maintainability = 40.0;
        let mut high = flat_sample("b.rs");
        high.maintainability = 90.0;
        let scores = badness_scores(&[low, high], &ScoringWeights::default());
        assert_eq!(scores[1], 0.0);
        assert!(scores[0] > 0.0);
    }

    #[test]
    fn badness_is_never_negative() {
        let mut worst = flat_sample("a.rs");
        worst.avg_cyclomatic = 50.0;
        worst.maintainability = 1.0;
        worst.smells = SmellCounts::new(9, 9, 9);
        let best = FileSample {
            maintainability: 100.0,
            ..FileSample::new("b.rs")
        };
        for score in badness_scores(&[worst, best], &ScoringWeights::default()) {
            assert!(score >= 0.0);
        }
    }

    #[test]
    fn healthier_file_scores_lower() {
        let mut bad = flat_sample("a.rs");
        bad.avg_cyclomatic = 30.0;
        bad.maintainability = 20.0;
        let mut good = flat_sample("b.rs");
        good.avg_cyclomatic = 1.0;
        good.maintainability = 95.0;
        let scores = badness_scores(&[bad, good], &ScoringWeights::default());
        assert!(scores[0] > scores[1]);
    }
}
