//! Refactor-priority scoring: rank files by a caller-selected subset of
//! the normalized cost signals instead of the full badness blend.

use std::str::FromStr;

use crate::config::ScoringWeights;
use crate::core::types::FileSample;
use crate::scoring::badness::badness_scores;
use crate::scoring::normalize::{min_max_normalize, Feature};

/// A single selectable scoring axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sloc,
    Cc,
    Mi,
    Smells,
    Coupling,
}

impl FromStr for Focus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "sloc" => Ok(Focus::Sloc),
            "cc" => Ok(Focus::Cc),
            "mi" => Ok(Focus::Mi),
            "smells" => Ok(Focus::Smells),
            "coupling" => Ok(Focus::Coupling),
            _ => Err(()),
        }
    }
}

impl Focus {
    /// Normalized [0,1] scores for this axis alone. Maintainability is
    /// inverted by normalizing the negated raw values, so a degenerate
    /// population still collapses to all zeros.
    fn scores(&self, samples: &[FileSample]) -> Vec<f64> {
        let raw: Vec<f64> = match self {
            Focus::Sloc => samples.iter().map(|s| Feature::Sloc.raw(s)).collect(),
            Focus::Cc => samples.iter().map(|s| Feature::Complexity.raw(s)).collect(),
            Focus::Mi => samples
                .iter()
                .map(|s| -Feature::Maintainability.raw(s))
                .collect(),
            Focus::Smells => samples.iter().map(|s| Feature::Smells.raw(s)).collect(),
            Focus::Coupling => samples.iter().map(|s| Feature::Coupling.raw(s)).collect(),
        };
        min_max_normalize(&raw)
    }
}

/// Parse a comma-separated focus selector. `None` means "fall back to raw
/// badness": an empty selector, `overall`, or any unrecognized token. The
/// fallback applies to the selector as a whole so a typo never silently
/// drops one axis from a combination.
pub fn parse_focus(selector: &str) -> Option<Vec<Focus>> {
    let tokens: Vec<&str> = selector
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect();
    if tokens.is_empty() {
        return None;
    }
    tokens.iter().map(|t| Focus::from_str(t).ok()).collect()
}

/// One priority score per sample.
///
/// A recognized focus yields [0,1] scores: the single axis's normalized
/// value, or the mean across a combination. Anything else yields the raw
/// badness score, which is not bounded to [0,1].
pub fn refactor_scores(samples: &[FileSample], selector: &str, weights: &ScoringWeights) -> Vec<f64> {
    match parse_focus(selector) {
        Some(foci) => {
            let per_axis: Vec<Vec<f64>> = foci.iter().map(|f| f.scores(samples)).collect();
            (0..samples.len())
                .map(|i| per_axis.iter().map(|axis| axis[i]).sum::<f64>() / foci.len() as f64)
                .collect()
        }
        None => badness_scores(samples, weights),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::SmellCounts;
    use crate::scoring::normalize::normalize_feature;

    fn samples() -> Vec<FileSample> {
        vec![
            FileSample {
                sloc: 500,
                avg_cyclomatic: 12.0,
                maintainability: 35.0,
                smells: SmellCounts::new(2, 1, 0),
                coupling: 9.0,
                ..FileSample::new("big.rs")
            },
            FileSample {
                sloc: 40,
                avg_cyclomatic: 2.0,
                maintainability: 88.0,
                smells: SmellCounts::default(),
                coupling: 1.0,
                ..FileSample::new("small.rs")
            },
        ]
    }

    #[test]
    fn single_focus_matches_normalized_feature() {
        let samples = samples();
        let scores = refactor_scores(&samples, "cc", &ScoringWeights::default());
        assert_eq!(scores, normalize_feature(&samples, Feature::Complexity));
    }

    #[test]
    fn mi_focus_ranks_low_maintainability_high() {
        let scores = refactor_scores(&samples(), "mi", &ScoringWeights::default());
        assert_eq!(scores, vec![1.0, 0.0]);
    }

    #[test]
    fn combination_averages_axes() {
        let samples = samples();
        let combined = refactor_scores(&samples, "cc, coupling", &ScoringWeights::default());
        let cc = normalize_feature(&samples, Feature::Complexity);
        let coupling = normalize_feature(&samples, Feature::Coupling);
        for i in 0..samples.len() {
            assert!((combined[i] - (cc[i] + coupling[i]) / 2.0).abs() < 1e-12);
        }
    }

    #[test]
    fn unrecognized_focus_falls_back_to_badness() {
        let samples = samples();
        let weights = ScoringWeights::default();
        let expected = badness_scores(&samples, &weights);
        assert_eq!(refactor_scores(&samples, "overall", &weights), expected);
        assert_eq!(refactor_scores(&samples, "wat", &weights), expected);
        assert_eq!(refactor_scores(&samples, "cc,wat", &weights), expected);
        assert_eq!(refactor_scores(&samples, "", &weights), expected);
    }

    #[test]
    fn degenerate_axis_scores_zero_everywhere() {
        let flat = vec![
            FileSample {
                coupling: 4.0,
                ..FileSample::new("a.rs")
            },
            FileSample {
                coupling: 4.0,
                ..FileSample::new("b.rs")
            },
        ];
        assert_eq!(
            refactor_scores(&flat, "coupling", &ScoringWeights::default()),
            vec![0.0, 0.0]
        );
    }
}
