pub mod errors;
pub mod stats;
pub mod types;

pub use errors::{DriftscopeError, DriftscopeResult};
pub use types::{
    CommitDelta, FileReport, FileSample, HistorySeries, RepoSnapshot, SmellCounts,
};
