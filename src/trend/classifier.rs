//! Time-series classification of drift scores.
//!
//! Detectors run over the current snapshot's history series; the verdict
//! comes from an ordered guard chain. HeatWave is deliberately checked
//! before HeatSpike: a sustained elevated plateau is judged more severe
//! than a single jump that may already have subsided.

use serde::{Deserialize, Serialize};

use crate::config::TrendThresholds;
use crate::core::stats::{mean, std_dev, step_differences};
use crate::core::types::{HistorySeries, RepoSnapshot};
use crate::trend::grading::{grade_score, percentile_standing};

/// Six-state classification of drift behavior between two snapshots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Stable,
    Warming,
    Cooling,
    HeatSpike,
    HeatWave,
    ColdFront,
}

impl Verdict {
    pub fn display_name(&self) -> &'static str {
        match self {
            Verdict::Stable => "Stable",
            Verdict::Warming => "Warming",
            Verdict::Cooling => "Cooling",
            Verdict::HeatSpike => "Heat Spike",
            Verdict::HeatWave => "Heat Wave",
            Verdict::ColdFront => "Cold Front",
        }
    }

    /// One-paragraph summary template for the verdict
    pub fn summary(&self) -> &'static str {
        match self {
            Verdict::Stable => {
                "Structural drift is holding steady. No sustained movement in \
                 either direction; keep an eye on individual hotspots rather \
                 than the population."
            }
            Verdict::Warming => {
                "Structural drift is creeping upward. Cost signals are spreading \
                 across more files commit over commit; worth scheduling cleanup \
                 before the trend hardens."
            }
            Verdict::Cooling => {
                "Structural drift is easing. Recent commits have reduced or \
                 concentrated the population's cost signals."
            }
            Verdict::HeatSpike => {
                "A single commit jumped the drift score well outside the recent \
                 step distribution. Review that change for broad, accidental \
                 complexity before it normalizes into the baseline."
            }
            Verdict::HeatWave => {
                "The drift score has climbed and settled onto an elevated \
                 plateau. The codebase has absorbed a sustained increase in \
                 spread-out cost; this is the most pressing regime to unwind."
            }
            Verdict::ColdFront => {
                "Drift has been falling steadily across recent commits, a \
                 sustained cleanup front. Whatever is driving it is working."
            }
        }
    }
}

/// Mean of successive first differences; 0 with fewer than 2 points
pub fn trend(series: &[f64]) -> f64 {
    if series.len() < 2 {
        return 0.0;
    }
    mean(&step_differences(series))
}

/// A single statistically-outlying upward jump that is also large in
/// absolute terms. The absolute guard keeps near-flat noisy series from
/// flagging every wiggle.
pub fn detect_heat_spike(series: &[f64], thresholds: &TrendThresholds) -> bool {
    if series.len() < 3 {
        return false;
    }
    let steps = step_differences(series);
    let max_step = steps.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    max_step > mean(&steps) + 1.5 * std_dev(&steps) && max_step > thresholds.elevation
}

/// A sustained elevated plateau: every recent point sits above a reference
/// level, and the window is no longer climbing faster than it rose.
pub fn detect_heat_wave(series: &[f64], min_window: usize, thresholds: &TrendThresholds) -> bool {
    let n = series.len();
    if n < min_window + 2 {
        return false;
    }
    let ref_idx = n - min_window - 1;
    let reference = series[ref_idx];

    if series[ref_idx + 1..]
        .iter()
        .any(|&s| s <= reference + thresholds.elevation)
    {
        return false;
    }

    let elevation = series[ref_idx + 1] - reference;
    let window_rise = series[n - 1] - series[ref_idx + 1];
    elevation > thresholds.elevation && window_rise.abs() < elevation
}

/// Sustained decline: at least 70% of the last `min_window` steps go down
pub fn detect_cold_front(series: &[f64], min_window: usize) -> bool {
    let n = series.len();
    if n < min_window + 1 {
        return false;
    }
    let declining = series[n - min_window - 1..]
        .windows(2)
        .filter(|w| w[1] < w[0])
        .count();
    declining >= (0.7 * min_window as f64).ceil() as usize
}

/// Window length used by the plateau and decline detectors
const DETECTOR_WINDOW: usize = 3;

/// Classify the movement from `baseline` to `current`, in the context of
/// the series terminating at `current`. First matching rule wins.
pub fn classify(
    baseline: &RepoSnapshot,
    current: &RepoSnapshot,
    history: &HistorySeries,
    thresholds: &TrendThresholds,
) -> Verdict {
    let series = history.scores();
    let delta = current.drift_score - baseline.drift_score;
    let slope = trend(&series);

    if current.drift_score > baseline.drift_score
        && detect_heat_wave(&series, DETECTOR_WINDOW, thresholds)
    {
        Verdict::HeatWave
    } else if delta > 0.0 && detect_heat_spike(&series, thresholds) {
        Verdict::HeatSpike
    } else if delta < -thresholds.elevation && detect_cold_front(&series, DETECTOR_WINDOW) {
        Verdict::ColdFront
    } else if slope > thresholds.warming_slope && delta > thresholds.warming_delta {
        Verdict::Warming
    } else if slope < -thresholds.warming_slope && delta <= 0.0 {
        Verdict::Cooling
    } else {
        Verdict::Stable
    }
}

/// A verdict with its supporting narrative, derived on demand and never
/// persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub verdict: Verdict,
    pub label: String,
    pub summary: String,
    pub observations: Vec<String>,
}

/// Build the full assessment of `current` against `baseline`
pub fn assess(
    baseline: &RepoSnapshot,
    current: &RepoSnapshot,
    history: &HistorySeries,
    thresholds: &TrendThresholds,
) -> Assessment {
    let verdict = classify(baseline, current, history, thresholds);
    let series = history.scores();
    let delta = current.drift_score - baseline.drift_score;

    let mut observations = vec![
        format!(
            "drift score moved {:+.4} ({:.4} -> {:.4}) between {} and {}",
            delta, baseline.drift_score, current.drift_score, baseline.id, current.id
        ),
        format!(
            "current score {:.4} grades as {}",
            current.drift_score,
            grade_score(current.drift_score).display_name()
        ),
    ];

    let slope = trend(&series);
    if series.len() >= 2 {
        observations.push(format!(
            "mean per-commit movement over {} snapshots: {:+.4}",
            series.len(),
            slope
        ));
    }

    if let Some((rank, band)) = percentile_standing(&series, current.drift_score) {
        observations.push(format!(
            "score sits at the {:.0}th percentile of its history ({})",
            rank,
            band.display_name()
        ));
    }

    match verdict {
        Verdict::HeatWave => observations.push(
            "recent scores form a sustained plateau above the pre-elevation level".to_string(),
        ),
        Verdict::HeatSpike => observations
            .push("a single step is an upward statistical outlier in this series".to_string()),
        Verdict::ColdFront => observations
            .push("most recent steps decline; the drop looks sustained, not noise".to_string()),
        _ => {}
    }

    Assessment {
        verdict,
        label: verdict.display_name().to_string(),
        summary: verdict.summary().to_string(),
        observations,
    }
}
