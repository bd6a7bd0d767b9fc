//! Per-file feature normalization.
//!
//! Every cost signal is rescaled to [0,1] across the file population before
//! it is weighed, so no single raw unit (lines vs. imports vs. complexity)
//! dominates by magnitude alone. A population with no spread in a feature
//! produces all zeros for it: a signal shared by every file discriminates
//! nothing.

use crate::core::types::FileSample;

/// The five per-file cost signals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Complexity,
    Sloc,
    Smells,
    Coupling,
    Maintainability,
}

impl Feature {
    /// Raw extraction, before population normalization.
    ///
    /// SLOC is log-damped so a single huge file does not flatten the rest
    /// of the population into indistinguishability.
    pub fn raw(&self, sample: &FileSample) -> f64 {
        match self {
            Feature::Complexity => sample.avg_cyclomatic,
            Feature::Sloc => (1.0 + sample.sloc as f64).ln(),
            Feature::Smells => sample.smells.weighted(),
            Feature::Coupling => sample.coupling,
            Feature::Maintainability => sample.maintainability,
        }
    }
}

/// Min/max rescale to [0,1]. Degenerate populations (all values equal,
/// including the single-file case) map to all zeros.
pub fn min_max_normalize(values: &[f64]) -> Vec<f64> {
    let Some(min) = values.iter().copied().reduce(f64::min) else {
        return Vec::new();
    };
    let max = values.iter().copied().fold(min, f64::max);
    let range = max - min;
    if range == 0.0 {
        return vec![0.0; values.len()];
    }
    values.iter().map(|v| (v - min) / range).collect()
}

/// One normalized value per sample for the given feature
pub fn normalize_feature(samples: &[FileSample], feature: Feature) -> Vec<f64> {
    let raw: Vec<f64> = samples.iter().map(|s| feature.raw(s)).collect();
    min_max_normalize(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::SmellCounts;

    fn sample(path: &str, sloc: u64, cc: f64) -> FileSample {
        FileSample {
            sloc,
            avg_cyclomatic: cc,
            ..FileSample::new(path)
        }
    }

    #[test]
    fn normalizes_to_unit_interval() {
        let normalized = min_max_normalize(&[2.0, 5.0, 8.0]);
        assert_eq!(normalized, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn degenerate_population_is_all_zero() {
        assert_eq!(min_max_normalize(&[3.0, 3.0, 3.0]), vec![0.0, 0.0, 0.0]);
        assert_eq!(min_max_normalize(&[7.5]), vec![0.0]);
        assert!(min_max_normalize(&[]).is_empty());
    }

    #[test]
    fn sloc_is_log_damped() {
        let samples = vec![sample("a.rs", 0, 0.0), sample("b.rs", 1, 0.0)];
        assert_eq!(Feature::Sloc.raw(&samples[0]), 0.0);
        assert!((Feature::Sloc.raw(&samples[1]) - 2.0_f64.ln()).abs() < 1e-12);
        let normalized = normalize_feature(&samples, Feature::Sloc);
        assert_eq!(normalized, vec![0.0, 1.0]);
    }

    #[test]
    fn smell_feature_uses_severity_weighting() {
        let mut heavy = sample("a.rs", 10, 1.0);
        heavy.smells = SmellCounts::new(1, 0, 0);
        let mut light = sample("b.rs", 10, 1.0);
        light.smells = SmellCounts::new(0, 0, 3);
        // 3*1 == 3*low, so both raw values match and normalization collapses
        let normalized = normalize_feature(&[heavy, light], Feature::Smells);
        assert_eq!(normalized, vec![0.0, 0.0]);
    }
}
