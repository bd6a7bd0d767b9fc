use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Machine-readable JSON
    Json,
    /// Plain terminal summary
    Terminal,
}

#[derive(Parser, Debug)]
#[command(name = "driftscope")]
#[command(about = "Entropy-based codebase health drift scoring", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a file-sample population: per-file badness, contributions, and
    /// the population drift score
    Score {
        /// JSON file of FileSample records produced by a collector
        samples: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show only the top N files by badness
        #[arg(long)]
        top: Option<usize>,
    },

    /// Rank files for refactoring by a selectable feature focus
    Refactor {
        /// JSON file of FileSample records
        samples: PathBuf,

        /// Focus: sloc, cc, mi, smells, coupling, overall, or a
        /// comma-separated combination
        #[arg(long, default_value = "overall")]
        focus: String,

        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show only the top N files by priority
        #[arg(long)]
        top: Option<usize>,
    },

    /// Classify the drift trend between a baseline snapshot and the newest
    /// one in a history series
    Trend {
        /// JSON file of RepoSnapshot records, oldest first
        history: PathBuf,

        /// Baseline snapshot id (defaults to the oldest snapshot)
        #[arg(long)]
        baseline: Option<String>,

        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Derive per-commit deltas from a history series and flag outlier
    /// commits
    Deltas {
        /// JSON file of RepoSnapshot records, oldest first
        history: PathBuf,

        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
