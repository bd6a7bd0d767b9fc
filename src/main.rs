use anyhow::Result;
use clap::Parser;
use driftscope::cli::{Cli, Commands};
use driftscope::commands::{
    deltas::DeltasConfig, refactor::RefactorConfig, score::ScoreConfig, trend::TrendConfig,
};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Score {
            samples,
            format,
            output,
            top,
        } => driftscope::commands::handle_score(ScoreConfig {
            samples,
            format,
            output,
            top,
        }),
        Commands::Refactor {
            samples,
            focus,
            format,
            output,
            top,
        } => driftscope::commands::handle_refactor(RefactorConfig {
            samples,
            focus,
            format,
            output,
            top,
        }),
        Commands::Trend {
            history,
            baseline,
            format,
            output,
        } => driftscope::commands::handle_trend(TrendConfig {
            history,
            baseline,
            format,
            output,
        }),
        Commands::Deltas {
            history,
            format,
            output,
        } => driftscope::commands::handle_deltas(DeltasConfig {
            history,
            format,
            output,
        }),
    }
}
