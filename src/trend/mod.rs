//! Time-series analysis of drift scores: verdict classification, commit
//! delta outliers, and grade/percentile banding.

pub mod classifier;
pub mod deltas;
pub mod grading;

pub use classifier::{
    assess, classify, detect_cold_front, detect_heat_spike, detect_heat_wave, trend, Assessment,
    Verdict,
};
pub use deltas::{classify_deltas, deltas_from_history, DeltaClassification};
pub use grading::{grade_score, percentile_standing, Grade, PercentileBand};
