//! Sequential reader for trace record streams

use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

use tracing::trace;

use crate::error::{Result, SegyError};
use crate::format::{ByteOrder, HEADER_BYTES, SAMPLE_BYTES};
use crate::record::TraceRecord;

/// A source of trace records read one at a time
pub trait RecordRead {
    /// Reads the next record into `record`, returning the number of bytes consumed
    ///
    /// `Ok(0)` means the stream ended cleanly on a record boundary. A stream
    /// that ends part-way through a record is an error.
    fn read_record(&mut self, record: &mut TraceRecord) -> Result<usize>;
}

impl<T: RecordRead + ?Sized> RecordRead for &mut T {
    fn read_record(&mut self, record: &mut TraceRecord) -> Result<usize> {
        (**self).read_record(record)
    }
}

/// Reads trace records from any byte stream
pub struct TraceReader<R> {
    inner: R,
    byte_order: ByteOrder,
    traces_read: u64,
    scratch: Vec<u8>,
}

impl TraceReader<BufReader<File>> {
    /// Opens a trace file for reading
    pub fn open<P: AsRef<Path>>(path: P, byte_order: ByteOrder) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Ok(Self::new(BufReader::new(file), byte_order))
    }
}

impl<R: Read> TraceReader<R> {
    /// Wraps a stream positioned at the start of a trace record
    pub fn new(inner: R, byte_order: ByteOrder) -> Self {
        Self {
            inner,
            byte_order,
            traces_read: 0,
            scratch: Vec::new(),
        }
    }

    /// Number of complete records read so far
    pub fn traces_read(&self) -> u64 {
        self.traces_read
    }
}

/// Fills `buf` as far as the stream allows, returning how much was read
fn fill_from<R: Read>(inner: &mut R, buf: &mut [u8]) -> Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match inner.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(filled)
}

impl<R: Read> RecordRead for TraceReader<R> {
    fn read_record(&mut self, record: &mut TraceRecord) -> Result<usize> {
        let trace = self.traces_read + 1;

        let read = fill_from(&mut self.inner, record.header_mut())?;
        if read == 0 {
            return Ok(0);
        }
        if read < HEADER_BYTES {
            return Err(SegyError::TruncatedHeader { trace, read });
        }

        let ns = self.byte_order.read_ns(record.header()) as usize;
        let expected = ns * SAMPLE_BYTES;

        self.scratch.resize(expected, 0);
        let read = fill_from(&mut self.inner, &mut self.scratch)?;
        if read < expected {
            return Err(SegyError::TruncatedSamples {
                trace,
                expected,
                read,
            });
        }

        self.byte_order
            .decode_samples(&self.scratch, record.samples_mut());
        self.traces_read = trace;

        trace!(trace, ns, "read trace record");
        Ok(HEADER_BYTES + expected)
    }
}
