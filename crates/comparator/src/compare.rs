//! Lockstep comparison of two trace record streams

use segy::{RecordRead, SegyError, TraceRecord, HEADER_BYTES};
use std::fmt;
use thiserror::Error;
use tracing::{debug, info, trace};

use crate::result::ComparisonResult;
use crate::tolerance::Tolerance;

/// Which of the two compared streams an error came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    A,
    B,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => f.write_str("first"),
            Side::B => f.write_str("second"),
        }
    }
}

/// Faults that stop a comparison before it reaches an answer
///
/// Differences between the files are never errors; they come back as a
/// [`ComparisonResult`].
#[derive(Error, Debug)]
pub enum CompareError {
    #[error("failed to read {side} file: {source}")]
    Read {
        side: Side,
        #[source]
        source: SegyError,
    },
}

/// Compares two trace streams record by record
///
/// Holds one reusable record buffer per stream, so repeated comparisons do
/// not reallocate sample storage.
#[derive(Debug, Default)]
pub struct Comparator {
    tolerance: Tolerance,
    record_a: TraceRecord,
    record_b: TraceRecord,
}

impl Comparator {
    pub fn new(tolerance: Tolerance) -> Self {
        Self {
            tolerance,
            record_a: TraceRecord::default(),
            record_b: TraceRecord::default(),
        }
    }

    /// Reads both streams in lockstep and stops at the first difference
    ///
    /// For each trace the number of bytes read from each stream must agree,
    /// then the header blocks must be identical, then every sample of `a` must
    /// be within tolerance of the matching sample of `b`. Both streams ending
    /// on the same trace is a match.
    pub fn compare<A, B>(&mut self, mut a: A, mut b: B) -> Result<ComparisonResult, CompareError>
    where
        A: RecordRead,
        B: RecordRead,
    {
        let mut trace_number: u64 = 0;

        loop {
            let read_a = a
                .read_record(&mut self.record_a)
                .map_err(|source| CompareError::Read { side: Side::A, source })?;
            let read_b = b
                .read_record(&mut self.record_b)
                .map_err(|source| CompareError::Read { side: Side::B, source })?;

            trace_number += 1;

            if read_a != read_b {
                debug!(
                    trace = trace_number,
                    bytes_a = read_a,
                    bytes_b = read_b,
                    "record sizes differ"
                );
                return Ok(self.finish(ComparisonResult::TraceCountMismatch {
                    trace: trace_number,
                }));
            }

            if read_a == 0 {
                info!(traces = trace_number - 1, "files match");
                return Ok(ComparisonResult::Match);
            }

            if self.record_a.header() != self.record_b.header() {
                if let Some(offset) = self.record_a.header_difference(&self.record_b) {
                    let window = offset..(offset + 4).min(HEADER_BYTES);
                    debug!(
                        trace = trace_number,
                        offset,
                        a = %hex::encode(&self.record_a.header()[window.clone()]),
                        b = %hex::encode(&self.record_b.header()[window]),
                        "headers differ"
                    );
                }
                return Ok(self.finish(ComparisonResult::HeaderMismatch {
                    trace: trace_number,
                }));
            }

            if let Some(result) = self.compare_samples(trace_number) {
                return Ok(self.finish(result));
            }

            trace!(trace = trace_number, "trace matches");
        }
    }

    /// Checks the samples of the current record pair
    ///
    /// Headers are already known to be equal, so both records carry the same
    /// sample count.
    fn compare_samples(&self, trace_number: u64) -> Option<ComparisonResult> {
        let samples_a = self.record_a.samples();
        let samples_b = self.record_b.samples();

        samples_a
            .iter()
            .zip(samples_b)
            .position(|(&a, &b)| !self.tolerance.within(a, b))
            .map(|sample| ComparisonResult::SampleMismatch {
                trace: trace_number,
                sample,
                a: samples_a[sample],
                b: samples_b[sample],
            })
    }

    fn finish(&self, result: ComparisonResult) -> ComparisonResult {
        info!(?result, limit = self.tolerance.limit(), "files differ");
        result
    }
}

/// Compares two trace streams with the given tolerance
pub fn compare<A, B>(a: A, b: B, tolerance: Tolerance) -> Result<ComparisonResult, CompareError>
where
    A: RecordRead,
    B: RecordRead,
{
    Comparator::new(tolerance).compare(a, b)
}
