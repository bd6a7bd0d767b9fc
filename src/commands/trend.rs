use anyhow::{bail, Context};
use colored::Colorize;
use std::io::Write;
use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::config::DriftscopeConfig;
use crate::io::output::{create_writer, write_json};
use crate::trend::classifier::{assess, Assessment, Verdict};

pub struct TrendConfig {
    pub history: PathBuf,
    pub baseline: Option<String>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

pub fn handle_trend(config: TrendConfig) -> anyhow::Result<()> {
    let history = crate::io::read_history(&config.history)?;
    if history.len() < 2 {
        bail!("trend classification needs at least 2 snapshots");
    }

    let snapshots = history.snapshots();
    let baseline = match &config.baseline {
        Some(id) => snapshots
            .iter()
            .find(|s| &s.id == id)
            .with_context(|| format!("baseline snapshot {:?} not found in history", id))?,
        None => &snapshots[0],
    };
    let current = &snapshots[snapshots.len() - 1];

    let app_config = DriftscopeConfig::load_or_default()?;
    let assessment = assess(baseline, current, &history, &app_config.trend);

    let mut writer = create_writer(config.output.as_deref())?;
    match config.format {
        OutputFormat::Json => write_json(writer.as_mut(), &assessment)?,
        OutputFormat::Terminal => write_terminal(writer.as_mut(), &assessment)?,
    }
    Ok(())
}

fn colorize_verdict(verdict: Verdict, label: &str) -> colored::ColoredString {
    match verdict {
        Verdict::Stable => label.normal(),
        Verdict::Cooling | Verdict::ColdFront => label.green(),
        Verdict::Warming => label.yellow(),
        Verdict::HeatSpike | Verdict::HeatWave => label.red().bold(),
    }
}

fn write_terminal(writer: &mut dyn Write, assessment: &Assessment) -> anyhow::Result<()> {
    writeln!(
        writer,
        "verdict: {}",
        colorize_verdict(assessment.verdict, &assessment.label)
    )?;
    writeln!(writer)?;
    writeln!(writer, "{}", assessment.summary)?;
    writeln!(writer)?;
    for observation in &assessment.observations {
        writeln!(writer, "  - {}", observation)?;
    }
    Ok(())
}
