//! CLI command implementations.
//!
//! Each submodule is a thin handler: read collaborator-produced JSON, run
//! the pure scoring/classification functions, write the result. No command
//! touches a repository, invokes an analyzer, or persists anything itself.

pub mod deltas;
pub mod refactor;
pub mod score;
pub mod trend;

pub use deltas::handle_deltas;
pub use refactor::handle_refactor;
pub use score::handle_score;
pub use trend::handle_trend;
