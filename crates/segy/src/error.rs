//! Error types for trace record I/O

use thiserror::Error;

/// Result type for trace record operations
pub type Result<T> = std::result::Result<T, SegyError>;

/// Errors that can occur while reading or writing trace records
#[derive(Error, Debug)]
pub enum SegyError {
    /// I/O error from the underlying stream
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stream ended inside a trace header
    #[error("trace {trace}: read only {read} of {expected} header bytes", expected = crate::HEADER_BYTES)]
    TruncatedHeader { trace: u64, read: usize },

    /// Stream ended inside the sample block of a trace
    #[error("trace {trace}: read only {read} of {expected} sample bytes")]
    TruncatedSamples {
        trace: u64,
        expected: usize,
        read: usize,
    },

    /// Sample array too long to be described by the 16-bit `ns` field
    #[error("{samples} samples per trace exceeds the format limit of {max}", max = u16::MAX)]
    SampleCountOverflow { samples: usize },
}
