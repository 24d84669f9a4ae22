//! Final report rendering.

use serde::Serialize;

use crate::artifact::Artifact;
use crate::minimizer::{AttemptRecord, MinimizationResult};

/// JSON form of a successful run
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportOutput {
    pub givens: i64,
    pub artifact: Artifact,
    pub attempts: Vec<AttemptRecord>,
    pub time_elapsed_ms: u64,
}

/// Plain-text report: a headline followed by the puzzle exactly as generated
pub fn render_text(result: &MinimizationResult) -> String {
    format!(
        "Found this puzzle with {} givens\n{}\n",
        result.best.givens, result.best.artifact
    )
}

pub fn format_result(result: &MinimizationResult) -> ReportOutput {
    ReportOutput {
        givens: result.best.givens,
        artifact: result.best.artifact.clone(),
        attempts: result.attempts.clone(),
        time_elapsed_ms: result.time_elapsed_ms,
    }
}
