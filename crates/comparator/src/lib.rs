//! # comparator
//!
//! Regression comparison of two seismic trace files.
//!
//! Two files are the same when they hold the same number of traces, every
//! pair of trace headers is bit-for-bit identical, and every sample of the
//! first file is within a relative [`Tolerance`] of the matching sample in the
//! second. Comparison stops at the first difference.
//!
//! ## Example
//!
//! ```no_run
//! use comparator::{compare, Report, Tolerance};
//! use segy::{ByteOrder, TraceReader};
//!
//! let a = TraceReader::open("tst1.su", ByteOrder::Native).unwrap();
//! let b = TraceReader::open("ref/tst1.su", ByteOrder::Native).unwrap();
//!
//! let result = compare(a, b, Tolerance::default()).unwrap();
//! if !result.is_match() {
//!     println!("{}", Report::new("tst1.su", "ref/tst1.su", result));
//! }
//! ```

pub mod compare;
pub mod result;
pub mod tolerance;

pub use compare::{compare, CompareError, Comparator, Side};
pub use result::{ComparisonResult, Report};
pub use tolerance::{Tolerance, ToleranceError};
