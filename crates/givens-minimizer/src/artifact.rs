//! The puzzle artifact captured from generator output.
//!
//! The generator is free to print solver chatter before the puzzle. Only the
//! trailing block of lines is treated as the artifact, and its contents are
//! never interpreted: the driver carries it around as text.

use std::fmt;

use serde::Serialize;
use smallvec::SmallVec;

/// Number of trailing stdout lines that make up one puzzle
/// (4 box borders plus 9 grid rows).
pub const ARTIFACT_LINES: usize = 13;

/// The trailing lines of one successful generator run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Artifact {
    lines: SmallVec<[String; ARTIFACT_LINES]>,
}

impl Artifact {
    /// Keep the last [`ARTIFACT_LINES`] lines of `stdout`, dropping whatever precedes them.
    ///
    /// Lines are split on `\n` only, so a `\r` before the newline stays part
    /// of the line and the puzzle is reprinted byte for byte.
    pub fn from_output(stdout: &str) -> Self {
        Self::split_tail(stdout).0
    }

    /// The artifact plus the number of leading lines that were dropped
    pub(crate) fn split_tail(stdout: &str) -> (Self, usize) {
        if stdout.is_empty() {
            return (Self::default(), 0);
        }
        let body = stdout.strip_suffix('\n').unwrap_or(stdout);
        let total = body.split('\n').count();
        let skip = total.saturating_sub(ARTIFACT_LINES);
        let lines = body.split('\n').skip(skip).map(str::to_string).collect();
        (Self { lines }, skip)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True when nothing but whitespace was captured
    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(|line| line.trim().is_empty())
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}
