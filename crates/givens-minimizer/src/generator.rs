//! Boundary to the external puzzle generator.
//!
//! Each attempt runs the generator as its own process, so a crash or a hang
//! inside it can never corrupt the driver's search state. The driver only
//! looks at two things: the exit status and the tail of stdout.

use std::ffi::OsString;
use std::io;
use std::process::{Command, Stdio};
use std::time::Duration;

use thiserror::Error;
use tracing::debug;

use crate::artifact::Artifact;

/// Parameters for one generator invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Number of givens the puzzle must have (the current budget)
    pub givens: i64,
    /// Difficulty ceiling, passed through unchanged
    pub inference_levels: u32,
    /// Time the generator is allowed before it must give up on its own
    pub timeout: Duration,
}

/// Why a single attempt did not produce a puzzle.
///
/// The search treats every variant the same way: it stops.
#[derive(Debug, Error)]
pub enum GenerationFailure {
    #[error("failed to launch generator `{program}`: {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("generator exited with status {code}")]
    Exit { givens: i64, code: i32 },
    #[error("generator was terminated by a signal")]
    Signaled { givens: i64 },
    #[error("generator succeeded but printed no puzzle")]
    EmptyOutput { givens: i64 },
}

/// Anything that can turn a request into a puzzle artifact
pub trait Generator {
    fn generate(&mut self, request: &GenerationRequest) -> Result<Artifact, GenerationFailure>;
}

impl<F> Generator for F
where
    F: FnMut(&GenerationRequest) -> Result<Artifact, GenerationFailure>,
{
    fn generate(&mut self, request: &GenerationRequest) -> Result<Artifact, GenerationFailure> {
        self(request)
    }
}

/// Runs an external generator program once per attempt.
///
/// The program is invoked as
/// `<program> [args...] --givens <N> --inference-levels <L> --timeout <S>`.
/// Its stderr is inherited so its diagnostics reach the user directly.
#[derive(Debug, Clone)]
pub struct ProcessGenerator {
    program: OsString,
    args: Vec<OsString>,
}

impl ProcessGenerator {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Arguments placed before the budget flags, e.g. a script path when the
    /// program is an interpreter.
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Build the command for one attempt without running it
    pub fn command(&self, request: &GenerationRequest) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .arg("--givens")
            .arg(request.givens.to_string())
            .arg("--inference-levels")
            .arg(request.inference_levels.to_string())
            .arg("--timeout")
            .arg(request.timeout.as_secs().to_string())
            .stdin(Stdio::null())
            .stderr(Stdio::inherit());
        cmd
    }
}

impl Generator for ProcessGenerator {
    fn generate(&mut self, request: &GenerationRequest) -> Result<Artifact, GenerationFailure> {
        let output = self
            .command(request)
            .output()
            .map_err(|source| GenerationFailure::Launch {
                program: self.program.to_string_lossy().into_owned(),
                source,
            })?;

        classify(request.givens, output.status.code(), &output.stdout)
    }
}

/// Decide the outcome of one finished process.
///
/// The exit status is checked first: output that looks like a puzzle counts
/// for nothing if the generator itself reported failure.
pub(crate) fn classify(
    givens: i64,
    code: Option<i32>,
    stdout: &[u8],
) -> Result<Artifact, GenerationFailure> {
    match code {
        Some(0) => {}
        Some(code) => return Err(GenerationFailure::Exit { givens, code }),
        None => return Err(GenerationFailure::Signaled { givens }),
    }

    let (artifact, discarded) = Artifact::split_tail(&String::from_utf8_lossy(stdout));
    if artifact.is_empty() {
        return Err(GenerationFailure::EmptyOutput { givens });
    }

    if discarded > 0 {
        debug!(givens, discarded, "dropped generator output preceding the puzzle");
    }

    Ok(artifact)
}
