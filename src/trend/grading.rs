//! Grade and percentile banding.
//!
//! Band boundaries live in ordered threshold tables so every output surface
//! (console, JSON, HTML renderers downstream) shares one source of truth.

use serde::{Deserialize, Serialize};

use crate::core::stats::percentile_rank;

/// Absolute drift-score grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    Excellent,
    Good,
    Fair,
    Poor,
    Critical,
}

/// Upper bounds (exclusive) for each grade; scores past the last bound
/// are Critical.
const GRADE_BANDS: &[(f64, Grade)] = &[
    (0.3, Grade::Excellent),
    (0.7, Grade::Good),
    (1.2, Grade::Fair),
    (2.0, Grade::Poor),
];

impl Grade {
    pub fn display_name(&self) -> &'static str {
        match self {
            Grade::Excellent => "Excellent",
            Grade::Good => "Good",
            Grade::Fair => "Fair",
            Grade::Poor => "Poor",
            Grade::Critical => "Critical",
        }
    }
}

/// Band an absolute drift score
pub fn grade_score(score: f64) -> Grade {
    for &(bound, grade) in GRADE_BANDS {
        if score < bound {
            return grade;
        }
    }
    Grade::Critical
}

/// Where the current score sits relative to its own history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PercentileBand {
    NearLow,
    BelowAverage,
    AboveAverage,
    NearHigh,
    AllTimeHigh,
}

/// Upper bounds (inclusive) on the percentile rank for each band
const PERCENTILE_BANDS: &[(f64, PercentileBand)] = &[
    (25.0, PercentileBand::NearLow),
    (50.0, PercentileBand::BelowAverage),
    (75.0, PercentileBand::AboveAverage),
    (90.0, PercentileBand::NearHigh),
];

impl PercentileBand {
    pub fn display_name(&self) -> &'static str {
        match self {
            PercentileBand::NearLow => "near historical low",
            PercentileBand::BelowAverage => "below historical average",
            PercentileBand::AboveAverage => "above historical average",
            PercentileBand::NearHigh => "near historical high",
            PercentileBand::AllTimeHigh => "at or near all-time high",
        }
    }
}

/// Percentile rank and band of `current` within `history`.
///
/// Needs at least 3 history points to say anything meaningful.
pub fn percentile_standing(history: &[f64], current: f64) -> Option<(f64, PercentileBand)> {
    if history.len() < 3 {
        return None;
    }
    let rank = percentile_rank(history, current);
    for &(bound, band) in PERCENTILE_BANDS {
        if rank <= bound {
            return Some((rank, band));
        }
    }
    Some((rank, PercentileBand::AllTimeHigh))
}
