//! Givens minimizer for SAT-backed sudoku generation.
//!
//! This crate drives an external puzzle generator with a shrinking number of
//! givens and reports the sparsest puzzle it managed to produce at a fixed
//! difficulty ceiling. The generator runs as a subprocess; this crate only
//! decides which budget to ask for next and when to stop.

pub mod artifact;
pub mod config;
pub mod generator;
pub mod minimizer;
pub mod report;

// Re-export main types
pub use artifact::{Artifact, ARTIFACT_LINES};
pub use config::{DriverSettings, DEFAULT_INITIAL_GIVENS, DEFAULT_TIMEOUT_SECS};
pub use generator::{GenerationFailure, GenerationRequest, Generator, ProcessGenerator};
pub use minimizer::{
    run, AttemptRecord, BestPuzzle, MinimizationResult, MinimizeError, MinimizerConfig,
};
pub use report::{format_result, render_text, ReportOutput};
