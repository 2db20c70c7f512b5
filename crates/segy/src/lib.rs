//! # segy
//!
//! Reading and writing of CWP/SU seismic trace files.
//!
//! An SU file is a plain sequence of trace records, each a 240-byte header
//! followed by `ns` 32-bit float samples. This crate reads such streams one
//! record at a time into reusable [`TraceRecord`] buffers.
//!
//! ## Example
//!
//! ```no_run
//! use segy::{ByteOrder, RecordRead, TraceReader, TraceRecord};
//!
//! let mut reader = TraceReader::open("data.su", ByteOrder::Native).unwrap();
//! let mut record = TraceRecord::default();
//!
//! while reader.read_record(&mut record).unwrap() > 0 {
//!     println!("trace {} has {} samples", reader.traces_read(), record.sample_count());
//! }
//! ```

pub mod error;
pub mod format;
pub mod reader;
pub mod record;
pub mod writer;

pub use error::{Result, SegyError};
pub use format::{ByteOrder, HEADER_BYTES, NS_OFFSET, SAMPLE_BYTES};
pub use reader::{RecordRead, TraceReader};
pub use record::TraceRecord;
pub use writer::TraceWriter;
