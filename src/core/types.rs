//! Common type definitions used across the codebase

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::errors::{DriftscopeError, DriftscopeResult};

/// Smell counts bucketed by severity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmellCounts {
    #[serde(default)]
    pub high: u32,
    #[serde(default)]
    pub medium: u32,
    #[serde(default)]
    pub low: u32,
}

impl SmellCounts {
    pub fn new(high: u32, medium: u32, low: u32) -> Self {
        Self { high, medium, low }
    }

    /// Severity-weighted scalar: high counts 3x, medium 2x, low 1x
    pub fn weighted(&self) -> f64 {
        (3 * self.high + 2 * self.medium + self.low) as f64
    }

    pub fn total(&self) -> u32 {
        self.high + self.medium + self.low
    }
}

/// One file's measurements at one point in time.
///
/// Produced fresh on every scan by the collection pipeline and never mutated.
/// Complexity and smell measurements come from an external analyzer and
/// default to 0 when that analyzer has no data for the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileSample {
    /// Path relative to the repository root, unique within a sample set
    pub path: String,
    /// Language tag as reported by the collector (e.g. "rust", "python")
    #[serde(default)]
    pub language: String,
    /// Non-comment source line count
    #[serde(default)]
    pub sloc: u64,
    /// Average cyclomatic complexity across the file's functions
    #[serde(default)]
    pub avg_cyclomatic: f64,
    /// Maintainability index, conventionally 0-100, higher = healthier
    #[serde(default)]
    pub maintainability: f64,
    /// Smell counts by severity
    #[serde(default)]
    pub smells: SmellCounts,
    /// Raw dependency/import count, used as a coupling proxy
    #[serde(default)]
    pub coupling: f64,
}

impl FileSample {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            language: String::new(),
            sloc: 0,
            avg_cyclomatic: 0.0,
            maintainability: 0.0,
            smells: SmellCounts::default(),
            coupling: 0.0,
        }
    }
}

/// One population-level record: the drift score of a whole tree at one commit
/// or scan instant. Append-only once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoSnapshot {
    /// Commit hash or scan timestamp string
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub total_files: usize,
    pub total_sloc: u64,
    /// Population drift score, >= 0
    pub drift_score: f64,
}

/// An ordered, validated sequence of snapshots.
///
/// Invariants enforced at construction: entries unique by `id`,
/// non-decreasing in timestamp. The engine only ever reads a series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<RepoSnapshot>", into = "Vec<RepoSnapshot>")]
pub struct HistorySeries {
    snapshots: Vec<RepoSnapshot>,
}

impl HistorySeries {
    pub fn from_snapshots(snapshots: Vec<RepoSnapshot>) -> DriftscopeResult<Self> {
        for pair in snapshots.windows(2) {
            if pair[1].timestamp < pair[0].timestamp {
                return Err(DriftscopeError::History(format!(
                    "snapshot {} precedes {} in time but follows it in order",
                    pair[1].id, pair[0].id
                )));
            }
        }
        let mut seen = std::collections::HashSet::new();
        for snap in &snapshots {
            if !seen.insert(snap.id.as_str()) {
                return Err(DriftscopeError::History(format!(
                    "duplicate snapshot identifier: {}",
                    snap.id
                )));
            }
        }
        Ok(Self { snapshots })
    }

    pub fn snapshots(&self) -> &[RepoSnapshot] {
        &self.snapshots
    }

    /// Drift scores in series order
    pub fn scores(&self) -> Vec<f64> {
        self.snapshots.iter().map(|s| s.drift_score).collect()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn last(&self) -> Option<&RepoSnapshot> {
        self.snapshots.last()
    }
}

impl TryFrom<Vec<RepoSnapshot>> for HistorySeries {
    type Error = DriftscopeError;

    fn try_from(snapshots: Vec<RepoSnapshot>) -> Result<Self, Self::Error> {
        Self::from_snapshots(snapshots)
    }
}

impl From<HistorySeries> for Vec<RepoSnapshot> {
    fn from(series: HistorySeries) -> Self {
        series.snapshots
    }
}

/// Score movement between two timestamp-adjacent snapshots.
///
/// The first entry in any series carries all-zero deltas by convention,
/// since it has no prior reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitDelta {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    /// Absolute drift-score change from the previous snapshot
    pub drift_delta: f64,
    /// Relative change; 0 when the previous score is 0
    pub drift_delta_pct: f64,
    pub sloc_delta: i64,
    pub file_delta: i64,
}

/// Per-file report row assembled for output: raw badness, diffusion
/// contribution, and the focus-selected refactor score side by side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileReport {
    pub path: String,
    pub badness: f64,
    pub contribution: f64,
    pub refactor_score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn snap(id: &str, secs: i64, score: f64) -> RepoSnapshot {
        RepoSnapshot {
            id: id.to_string(),
            timestamp: Utc.timestamp_opt(secs, 0).unwrap(),
            total_files: 10,
            total_sloc: 1000,
            drift_score: score,
        }
    }

    #[test]
    fn weighted_smells_follow_severity() {
        let smells = SmellCounts::new(2, 3, 4);
        assert_eq!(smells.weighted(), (3 * 2 + 2 * 3 + 4) as f64);
        assert_eq!(smells.total(), 9);
    }

    #[test]
    fn history_rejects_duplicate_ids() {
        let result = HistorySeries::from_snapshots(vec![snap("a", 1, 0.1), snap("a", 2, 0.2)]);
        assert!(result.is_err());
    }

    #[test]
    fn history_rejects_time_travel() {
        let result = HistorySeries::from_snapshots(vec![snap("a", 5, 0.1), snap("b", 2, 0.2)]);
        assert!(result.is_err());
    }

    #[test]
    fn history_accepts_equal_timestamps() {
        let series =
            HistorySeries::from_snapshots(vec![snap("a", 5, 0.1), snap("b", 5, 0.2)]).unwrap();
        assert_eq!(series.scores(), vec![0.1, 0.2]);
    }
}
