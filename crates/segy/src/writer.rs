//! Writer for trace record streams

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Result, SegyError};
use crate::format::ByteOrder;
use crate::record::TraceRecord;

/// Writes trace records in the same layout [`crate::TraceReader`] consumes
///
/// The `ns` header field is always rewritten from the record's sample count,
/// so callers only need to fill in the header bytes they care about.
pub struct TraceWriter<W: Write> {
    inner: W,
    byte_order: ByteOrder,
    traces_written: u64,
    buf: Vec<u8>,
}

impl TraceWriter<BufWriter<File>> {
    /// Creates (or truncates) a trace file for writing
    pub fn create<P: AsRef<Path>>(path: P, byte_order: ByteOrder) -> Result<Self> {
        let file = File::create(path.as_ref())?;
        Ok(Self::new(BufWriter::new(file), byte_order))
    }
}

impl<W: Write> TraceWriter<W> {
    pub fn new(inner: W, byte_order: ByteOrder) -> Self {
        Self {
            inner,
            byte_order,
            traces_written: 0,
            buf: Vec::new(),
        }
    }

    /// Appends one record to the stream
    pub fn write_record(&mut self, record: &TraceRecord) -> Result<()> {
        let ns = u16::try_from(record.sample_count()).map_err(|_| {
            SegyError::SampleCountOverflow {
                samples: record.sample_count(),
            }
        })?;

        let mut header = *record.header();
        self.byte_order.write_ns(&mut header, ns);

        self.buf.clear();
        self.buf.extend_from_slice(&header);
        self.byte_order
            .encode_samples(record.samples(), &mut self.buf);
        self.inner.write_all(&self.buf)?;
        self.traces_written += 1;
        Ok(())
    }

    pub fn traces_written(&self) -> u64 {
        self.traces_written
    }

    /// Flushes and returns the underlying stream
    pub fn finish(mut self) -> Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}
