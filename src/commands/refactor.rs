use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::config::DriftscopeConfig;
use crate::io::output::{create_writer, write_json};
use crate::scoring::{parse_focus, refactor_scores};

pub struct RefactorConfig {
    pub samples: PathBuf,
    pub focus: String,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub top: Option<usize>,
}

#[derive(Debug, Serialize)]
struct RankedFile {
    path: String,
    score: f64,
}

#[derive(Debug, Serialize)]
struct RefactorReport {
    focus: String,
    /// False when the selector fell back to the raw badness blend
    focused: bool,
    files: Vec<RankedFile>,
}

pub fn handle_refactor(config: RefactorConfig) -> anyhow::Result<()> {
    let samples = crate::io::read_samples(&config.samples)?;
    let app_config = DriftscopeConfig::load_or_default()?;

    let scores = refactor_scores(&samples, &config.focus, &app_config.weights);
    let mut files: Vec<RankedFile> = samples
        .iter()
        .zip(scores.iter())
        .map(|(sample, &score)| RankedFile {
            path: sample.path.clone(),
            score,
        })
        .collect();
    files.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    if let Some(n) = config.top {
        files.truncate(n);
    }

    let focused = parse_focus(&config.focus).is_some();
    if !focused {
        log::info!(
            "focus {:?} not recognized as a feature list; ranking by overall badness",
            config.focus
        );
    }

    let report = RefactorReport {
        focus: config.focus,
        focused,
        files,
    };

    let mut writer = create_writer(config.output.as_deref())?;
    match config.format {
        OutputFormat::Json => write_json(writer.as_mut(), &report)?,
        OutputFormat::Terminal => write_terminal(writer.as_mut(), &report)?,
    }
    Ok(())
}

fn write_terminal(writer: &mut dyn Write, report: &RefactorReport) -> anyhow::Result<()> {
    let axis = if report.focused {
        report.focus.as_str()
    } else {
        "overall badness"
    };
    writeln!(writer, "refactor priority by {}", axis)?;
    writeln!(writer)?;
    for (rank, file) in report.files.iter().enumerate() {
        writeln!(writer, "{:>3}. {:<50} {:>8.4}", rank + 1, file.path, file.score)?;
    }
    Ok(())
}
