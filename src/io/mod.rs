//! JSON ingestion and output plumbing.
//!
//! Collaborating components (the VCS walker, the external complexity
//! analyzer, the snapshot store) hand their results to the CLI as JSON
//! documents; everything here is serde glue around the engine's types.

pub mod output;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::core::errors::DriftscopeResult;
use crate::core::types::{FileSample, HistorySeries, RepoSnapshot};

/// Read a file-sample population produced by a collector
pub fn read_samples(path: &Path) -> DriftscopeResult<Vec<FileSample>> {
    let reader = BufReader::new(File::open(path)?);
    let samples: Vec<FileSample> = serde_json::from_reader(reader)?;
    log::debug!("read {} file samples from {}", samples.len(), path.display());
    Ok(samples)
}

/// Read a snapshot history from the time-series store's export.
///
/// Validates the series invariants (unique ids, ordered timestamps) on the
/// way in; the engine itself treats the result as read-only.
pub fn read_history(path: &Path) -> DriftscopeResult<HistorySeries> {
    let reader = BufReader::new(File::open(path)?);
    let snapshots: Vec<RepoSnapshot> = serde_json::from_reader(reader)?;
    log::debug!("read {} snapshots from {}", snapshots.len(), path.display());
    HistorySeries::from_snapshots(snapshots)
}
