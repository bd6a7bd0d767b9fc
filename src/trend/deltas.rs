//! Per-commit delta derivation and statistical outlier classification.

use serde::{Deserialize, Serialize};

use crate::core::stats::{mean, std_dev};
use crate::core::types::{CommitDelta, HistorySeries};

/// Floor for the troubled threshold and ceiling (negated) for the heroic
/// one, so a near-flat history cannot flag ordinary jitter as an outlier.
const MIN_OUTLIER_DELTA: f64 = 0.02;

/// One delta record per snapshot, in series order. The first record is
/// all-zero by convention: it has no prior snapshot to compare against.
pub fn deltas_from_history(history: &HistorySeries) -> Vec<CommitDelta> {
    let snapshots = history.snapshots();
    snapshots
        .iter()
        .enumerate()
        .map(|(i, snap)| match i.checked_sub(1).map(|j| &snapshots[j]) {
            None => CommitDelta {
                id: snap.id.clone(),
                timestamp: snap.timestamp,
                drift_delta: 0.0,
                drift_delta_pct: 0.0,
                sloc_delta: 0,
                file_delta: 0,
            },
            Some(prev) => {
                let drift_delta = snap.drift_score - prev.drift_score;
                let drift_delta_pct = if prev.drift_score == 0.0 {
                    0.0
                } else {
                    100.0 * drift_delta / prev.drift_score
                };
                CommitDelta {
                    id: snap.id.clone(),
                    timestamp: snap.timestamp,
                    drift_delta,
                    drift_delta_pct,
                    sloc_delta: snap.total_sloc as i64 - prev.total_sloc as i64,
                    file_delta: snap.total_files as i64 - prev.total_files as i64,
                }
            }
        })
        .collect()
}

/// Outlier commits, split by direction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeltaClassification {
    /// Deltas strictly above the troubled threshold, worst first
    pub troubled: Vec<CommitDelta>,
    /// Deltas strictly below the heroic threshold, best first
    pub heroic: Vec<CommitDelta>,
}

/// Flag commits whose drift delta is a statistical outlier.
///
/// The first delta is skipped (always 0 by convention). Thresholds sit at
/// 1.5 sigma from the mean but never inside +/-0.02, so the two lists can
/// never overlap. Comparison is strict: in an all-equal series sigma is 0
/// and the threshold lands on the shared delta itself, which must flag
/// nothing.
pub fn classify_deltas(deltas: &[CommitDelta]) -> DeltaClassification {
    if deltas.len() < 2 {
        return DeltaClassification::default();
    }

    let rest = &deltas[1..];
    let values: Vec<f64> = rest.iter().map(|d| d.drift_delta).collect();
    let mu = mean(&values);
    let sigma = std_dev(&values);

    let troubled_threshold = (mu + 1.5 * sigma).max(MIN_OUTLIER_DELTA);
    let heroic_threshold = (mu - 1.5 * sigma).min(-MIN_OUTLIER_DELTA);

    let mut troubled: Vec<CommitDelta> = rest
        .iter()
        .filter(|d| d.drift_delta > troubled_threshold)
        .cloned()
        .collect();
    troubled.sort_by(|a, b| {
        b.drift_delta
            .partial_cmp(&a.drift_delta)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut heroic: Vec<CommitDelta> = rest
        .iter()
        .filter(|d| d.drift_delta < heroic_threshold)
        .cloned()
        .collect();
    heroic.sort_by(|a, b| {
        a.drift_delta
            .partial_cmp(&b.drift_delta)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    DeltaClassification { troubled, heroic }
}
