// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;
pub mod scoring;
pub mod trend;

// Re-export commonly used types
pub use crate::core::{
    CommitDelta, DriftscopeError, DriftscopeResult, FileReport, FileSample, HistorySeries,
    RepoSnapshot, SmellCounts,
};

pub use crate::config::{DriftscopeConfig, ScoringWeights, TrendThresholds};

pub use crate::scoring::{
    badness_scores, diffusion_contributions, drift_score, drift_scores_for_populations,
    min_max_normalize, normalize_feature, parse_focus, refactor_scores, Feature, Focus,
};

pub use crate::trend::{
    assess, classify, classify_deltas, deltas_from_history, detect_cold_front, detect_heat_spike,
    detect_heat_wave, grade_score, percentile_standing, trend, Assessment, DeltaClassification,
    Grade, PercentileBand, Verdict,
};
