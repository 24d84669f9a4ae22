//! Linear-descent search for the fewest givens the generator can handle.
//!
//! Starting from the initial budget, the generator is asked for a puzzle
//! with exactly that many givens. Every success lowers the budget by one and
//! tries again; the first failure ends the search. The last success is the
//! answer.
//!
//! The step is always one. A failure is never retried, and whether the
//! generator gave up because no such puzzle exists or because it ran out of
//! time makes no difference.

use std::time::{Duration, Instant};

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::artifact::Artifact;
use crate::config::{DEFAULT_INITIAL_GIVENS, DEFAULT_TIMEOUT_SECS};
use crate::generator::{GenerationFailure, GenerationRequest, Generator};

/// Configuration for one minimization run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimizerConfig {
    /// Budget of the first attempt
    pub initial_givens: i64,
    /// Difficulty ceiling, identical for every attempt
    pub inference_levels: u32,
    /// Per-attempt time allowance handed to the generator
    pub timeout: Duration,
}

impl MinimizerConfig {
    pub fn new(inference_levels: u32) -> Self {
        Self {
            initial_givens: DEFAULT_INITIAL_GIVENS,
            inference_levels,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// One generator invocation as seen by the search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptRecord {
    pub givens: i64,
    pub succeeded: bool,
    pub time_elapsed_ms: u64,
}

/// The sparsest puzzle produced so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestPuzzle {
    pub givens: i64,
    pub artifact: Artifact,
}

/// Outcome of a run in which at least one attempt succeeded
#[derive(Debug)]
pub struct MinimizationResult {
    pub best: BestPuzzle,
    /// Every attempt in the order it was made; the last one is the failure
    pub attempts: Vec<AttemptRecord>,
    /// The failure that ended the search
    pub stopped_by: GenerationFailure,
    pub time_elapsed_ms: u64,
}

#[derive(Debug, Error)]
pub enum MinimizeError {
    /// Not even the initial budget could be satisfied
    #[error("failed to generate a puzzle with {givens} givens: {source}")]
    TotalFailure {
        givens: i64,
        #[source]
        source: GenerationFailure,
    },
}

/// Run the search to completion.
///
/// There is no iteration cap and no lower bound on the budget: if the
/// generator keeps succeeding the budget keeps falling, and rejecting
/// nonsensical budgets is up to the generator.
pub fn run<G>(
    generator: &mut G,
    config: &MinimizerConfig,
) -> Result<MinimizationResult, MinimizeError>
where
    G: Generator + ?Sized,
{
    let start_time = Instant::now();

    let mut budget = config.initial_givens;
    let mut best: Option<BestPuzzle> = None;
    let mut attempts = Vec::new();

    loop {
        let request = GenerationRequest {
            givens: budget,
            inference_levels: config.inference_levels,
            timeout: config.timeout,
        };

        info!(
            givens = budget,
            levels = config.inference_levels,
            timeout_secs = config.timeout.as_secs(),
            "attempting generation"
        );
        let attempt_start = Instant::now();
        let outcome = generator.generate(&request);
        let time_elapsed_ms = attempt_start.elapsed().as_millis() as u64;

        attempts.push(AttemptRecord {
            givens: budget,
            succeeded: outcome.is_ok(),
            time_elapsed_ms,
        });

        match outcome {
            Ok(artifact) => {
                info!(givens = budget, time_elapsed_ms, "generated puzzle");
                best = Some(BestPuzzle {
                    givens: budget,
                    artifact,
                });
                budget -= 1;
            }
            Err(failure) => {
                info!(
                    givens = budget,
                    time_elapsed_ms,
                    error = %failure,
                    "generation failed, stopping"
                );
                return match best {
                    Some(best) => Ok(MinimizationResult {
                        best,
                        attempts,
                        stopped_by: failure,
                        time_elapsed_ms: start_time.elapsed().as_millis() as u64,
                    }),
                    None => Err(MinimizeError::TotalFailure {
                        givens: budget,
                        source: failure,
                    }),
                };
            }
        }
    }
}
