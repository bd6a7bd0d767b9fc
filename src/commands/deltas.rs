use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::core::types::CommitDelta;
use crate::io::output::{create_writer, write_json};
use crate::trend::deltas::{classify_deltas, deltas_from_history, DeltaClassification};

pub struct DeltasConfig {
    pub history: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct DeltasReport {
    deltas: Vec<CommitDelta>,
    classification: DeltaClassification,
}

pub fn handle_deltas(config: DeltasConfig) -> anyhow::Result<()> {
    let history = crate::io::read_history(&config.history)?;
    let deltas = deltas_from_history(&history);
    let classification = classify_deltas(&deltas);

    log::info!(
        "{} deltas: {} troubled, {} heroic",
        deltas.len(),
        classification.troubled.len(),
        classification.heroic.len()
    );

    let report = DeltasReport {
        deltas,
        classification,
    };

    let mut writer = create_writer(config.output.as_deref())?;
    match config.format {
        OutputFormat::Json => write_json(writer.as_mut(), &report)?,
        OutputFormat::Terminal => write_terminal(writer.as_mut(), &report)?,
    }
    Ok(())
}

fn write_delta_line(writer: &mut dyn Write, delta: &CommitDelta) -> anyhow::Result<()> {
    writeln!(
        writer,
        "  {} {:+.4} ({:+.1}%) sloc {:+} files {:+}",
        delta.id, delta.drift_delta, delta.drift_delta_pct, delta.sloc_delta, delta.file_delta
    )?;
    Ok(())
}

fn write_terminal(writer: &mut dyn Write, report: &DeltasReport) -> anyhow::Result<()> {
    writeln!(writer, "{} commit deltas", report.deltas.len())?;

    if report.classification.troubled.is_empty() && report.classification.heroic.is_empty() {
        writeln!(writer, "no outlier commits")?;
        return Ok(());
    }

    if !report.classification.troubled.is_empty() {
        writeln!(writer)?;
        writeln!(writer, "troubled commits (largest drift increase first):")?;
        for delta in &report.classification.troubled {
            write_delta_line(writer, delta)?;
        }
    }
    if !report.classification.heroic.is_empty() {
        writeln!(writer)?;
        writeln!(writer, "heroic commits (largest drift decrease first):")?;
        for delta in &report.classification.heroic {
            write_delta_line(writer, delta)?;
        }
    }
    Ok(())
}
