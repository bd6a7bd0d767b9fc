use colored::Colorize;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::config::DriftscopeConfig;
use crate::core::types::{FileReport, FileSample};
use crate::io::output::{create_writer, write_json};
use crate::scoring::{badness_scores, diffusion_contributions, drift_score};
use crate::trend::grading::{grade_score, Grade};

pub struct ScoreConfig {
    pub samples: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub top: Option<usize>,
}

#[derive(Debug, Serialize)]
struct ScoreReport {
    drift_score: f64,
    grade: Grade,
    total_files: usize,
    files: Vec<FileReport>,
}

pub fn handle_score(config: ScoreConfig) -> anyhow::Result<()> {
    let samples = crate::io::read_samples(&config.samples)?;
    let report = build_report(&samples, config.top)?;

    let mut writer = create_writer(config.output.as_deref())?;
    match config.format {
        OutputFormat::Json => write_json(writer.as_mut(), &report)?,
        OutputFormat::Terminal => write_terminal(writer.as_mut(), &report)?,
    }
    Ok(())
}

fn build_report(samples: &[FileSample], top: Option<usize>) -> anyhow::Result<ScoreReport> {
    let config = DriftscopeConfig::load_or_default()?;
    let badness = badness_scores(samples, &config.weights);
    let contributions = diffusion_contributions(&badness);
    let score = drift_score(&badness);

    let mut files: Vec<FileReport> = samples
        .iter()
        .zip(badness.iter().zip(contributions.iter()))
        .map(|(sample, (&badness, &contribution))| FileReport {
            path: sample.path.clone(),
            badness,
            contribution,
            // the full badness blend is the "overall" refactor score
            refactor_score: badness,
        })
        .collect();
    files.sort_by(|a, b| {
        b.badness
            .partial_cmp(&a.badness)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    if let Some(n) = top {
        files.truncate(n);
    }

    log::info!(
        "scored {} files, drift score {:.4}",
        samples.len(),
        score
    );

    Ok(ScoreReport {
        drift_score: score,
        grade: grade_score(score),
        total_files: samples.len(),
        files,
    })
}

pub(crate) fn colorize_grade(grade: Grade) -> colored::ColoredString {
    let name = grade.display_name();
    match grade {
        Grade::Excellent | Grade::Good => name.green(),
        Grade::Fair => name.yellow(),
        Grade::Poor | Grade::Critical => name.red(),
    }
}

fn write_terminal(writer: &mut dyn Write, report: &ScoreReport) -> anyhow::Result<()> {
    writeln!(
        writer,
        "drift score: {:.4} ({}) across {} files",
        report.drift_score,
        colorize_grade(report.grade),
        report.total_files
    )?;
    writeln!(writer)?;
    writeln!(writer, "{:<50} {:>10} {:>14}", "file", "badness", "contribution")?;
    for file in &report.files {
        writeln!(
            writer,
            "{:<50} {:>10.4} {:>14.4}",
            file.path, file.badness, file.contribution
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::SmellCounts;

    #[test]
    fn report_sorts_files_by_badness() {
        let samples = vec![
            FileSample {
                sloc: 10,
                maintainability: 90.0,
                ..FileSample::new("clean.rs")
            },
            FileSample {
                sloc: 900,
                avg_cyclomatic: 14.0,
                maintainability: 30.0,
                smells: SmellCounts::new(3, 2, 1),
                coupling: 12.0,
                ..FileSample::new("hot.rs")
            },
        ];
        let report = build_report(&samples, None).unwrap();
        assert_eq!(report.files[0].path, "hot.rs");
        assert_eq!(report.total_files, 2);
    }

    #[test]
    fn top_truncates_rows_but_not_the_score() {
        let samples: Vec<FileSample> = (0..10)
            .map(|i| FileSample {
                sloc: 10 * (i + 1),
                avg_cyclomatic: i as f64,
                ..FileSample::new(format!("f{}.rs", i))
            })
            .collect();
        let full = build_report(&samples, None).unwrap();
        let trimmed = build_report(&samples, Some(3)).unwrap();
        assert_eq!(trimmed.files.len(), 3);
        assert_eq!(trimmed.drift_score, full.drift_score);
    }
}
