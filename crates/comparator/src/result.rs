//! Outcome of comparing two trace files

use serde::Serialize;
use std::fmt;

/// Result of a comparison run
///
/// Trace numbers count from 1, sample indices from 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ComparisonResult {
    /// Both files ended together with every trace equal
    Match,

    /// One file produced a different amount of data at this trace, usually
    /// because it ran out of traces first or has a different sample count
    TraceCountMismatch { trace: u64 },

    /// Header blocks are not bit-for-bit identical
    HeaderMismatch { trace: u64 },

    /// First sample outside the tolerance
    SampleMismatch {
        trace: u64,
        sample: usize,
        a: f32,
        b: f32,
    },
}

impl ComparisonResult {
    pub fn is_match(&self) -> bool {
        matches!(self, ComparisonResult::Match)
    }

    /// Trace at which the files diverge
    pub fn trace(&self) -> Option<u64> {
        match *self {
            ComparisonResult::Match => None,
            ComparisonResult::TraceCountMismatch { trace }
            | ComparisonResult::HeaderMismatch { trace }
            | ComparisonResult::SampleMismatch { trace, .. } => Some(trace),
        }
    }
}

/// A [`ComparisonResult`] together with the names of the compared files
///
/// Displays as the one-line diagnostic printed by the command line tool; a
/// match displays as nothing.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub file_a: String,
    pub file_b: String,
    #[serde(flatten)]
    pub result: ComparisonResult,
}

impl Report {
    pub fn new(
        file_a: impl Into<String>,
        file_b: impl Into<String>,
        result: ComparisonResult,
    ) -> Self {
        Self {
            file_a: file_a.into(),
            file_b: file_b.into(),
            result,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (a, b) = (&self.file_a, &self.file_b);
        match self.result {
            ComparisonResult::Match => Ok(()),
            ComparisonResult::TraceCountMismatch { trace } => {
                write!(f, "Files {} & {} differ at trace {}", a, b, trace)
            }
            ComparisonResult::HeaderMismatch { trace } => {
                write!(f, "Files {} & {} differ in headers at trace {}", a, b, trace)
            }
            ComparisonResult::SampleMismatch {
                trace,
                sample,
                a: value_a,
                b: value_b,
            } => {
                writeln!(
                    f,
                    "Files {} & {} differ at Trace: {} Sample: {}",
                    a, b, trace, sample
                )?;
                write!(
                    f,
                    "   A: {:>15}   B: {:>15}",
                    format_sample(value_a),
                    format_sample(value_b)
                )
            }
        }
    }
}

/// Formats a sample like C's `%g`: exponent form outside [1e-4, 1e6)
fn format_sample(value: f32) -> String {
    let magnitude = value.abs();
    if value == 0.0 || !value.is_finite() || (1.0e-4..1.0e6).contains(&magnitude) {
        value.to_string()
    } else {
        format!("{:e}", value)
    }
}
