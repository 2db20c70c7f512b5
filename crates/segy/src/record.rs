//! In-memory trace record

use crate::format::{HEADER_BYTES, SAMPLE_BYTES};

/// One trace: an opaque header block plus its samples
///
/// Records are meant to be reused: [`crate::RecordRead::read_record`]
/// overwrites the header and refills the sample vector in place.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceRecord {
    header: [u8; HEADER_BYTES],
    samples: Vec<f32>,
}

impl Default for TraceRecord {
    fn default() -> Self {
        Self {
            header: [0; HEADER_BYTES],
            samples: Vec::new(),
        }
    }
}

impl TraceRecord {
    /// Creates a record with a zeroed header and the given samples
    ///
    /// The `ns` header field is not touched; writers fill it in from the
    /// sample count.
    pub fn new(samples: Vec<f32>) -> Self {
        Self {
            header: [0; HEADER_BYTES],
            samples,
        }
    }

    /// Sets a single header byte, returning the record
    pub fn with_header_byte(mut self, offset: usize, value: u8) -> Self {
        self.header[offset] = value;
        self
    }

    pub fn header(&self) -> &[u8; HEADER_BYTES] {
        &self.header
    }

    pub fn header_mut(&mut self) -> &mut [u8; HEADER_BYTES] {
        &mut self.header
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn samples_mut(&mut self) -> &mut Vec<f32> {
        &mut self.samples
    }

    /// Number of samples held by this record
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Size of this record on disk
    pub fn byte_len(&self) -> usize {
        HEADER_BYTES + self.samples.len() * SAMPLE_BYTES
    }

    /// Offset of the first header byte that differs from `other`, if any
    pub fn header_difference(&self, other: &TraceRecord) -> Option<usize> {
        self.header
            .iter()
            .zip(other.header.iter())
            .position(|(a, b)| a != b)
    }
}
