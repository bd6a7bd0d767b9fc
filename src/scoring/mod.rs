//! Per-file and population-level scoring: feature normalization, badness,
//! the entropy drift score and its decomposition, and refactor ranking.

pub mod badness;
pub mod drift;
pub mod normalize;
pub mod populations;
pub mod refactor;

pub use badness::badness_scores;
pub use drift::{diffusion_contributions, drift_score};
pub use normalize::{min_max_normalize, normalize_feature, Feature};
pub use populations::drift_scores_for_populations;
pub use refactor::{parse_focus, refactor_scores, Focus};
