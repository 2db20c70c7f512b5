//! Helpers for end-to-end comparison tests
//!
//! A case file describes two small trace files and the result expected from
//! comparing them:
//!
//! ```text
//! # comment
//! limit = 1e-4
//! expect = sample 2 1
//!
//! [a]
//! 1.0 2.0 3.0
//! @0=7 -1.0 -2.0 -3.0
//!
//! [b]
//! ...
//! ```
//!
//! Each line under `[a]` or `[b]` is one trace. Plain tokens are samples;
//! `@offset=value` sets one header byte. `expect` is one of `match`,
//! `trace_count <trace>`, `header <trace>` or `sample <trace> <sample>`.

use anyhow::{bail, Context, Result};
use comparator::{Comparator, ComparisonResult, Tolerance};
use segy::{ByteOrder, TraceReader, TraceRecord, TraceWriter};
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Result a case expects, without the sample values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Expectation {
    Match,
    TraceCount(u64),
    Header(u64),
    Sample { trace: u64, sample: usize },
}

impl Expectation {
    pub fn is_met_by(&self, result: &ComparisonResult) -> bool {
        match (*self, *result) {
            (Expectation::Match, ComparisonResult::Match) => true,
            (Expectation::TraceCount(t), ComparisonResult::TraceCountMismatch { trace }) => {
                t == trace
            }
            (Expectation::Header(t), ComparisonResult::HeaderMismatch { trace }) => t == trace,
            (
                Expectation::Sample { trace: t, sample: s },
                ComparisonResult::SampleMismatch { trace, sample, .. },
            ) => t == trace && s == sample,
            _ => false,
        }
    }
}

/// A parsed case file
#[derive(Debug, Clone)]
pub struct Case {
    pub limit: Option<f32>,
    pub expect: Expectation,
    pub a: Vec<TraceRecord>,
    pub b: Vec<TraceRecord>,
}

impl Case {
    pub fn tolerance(&self) -> Result<Tolerance> {
        match self.limit {
            Some(limit) => Ok(Tolerance::new(limit)?),
            None => Ok(Tolerance::default()),
        }
    }
}

#[derive(Clone, Copy)]
enum Section {
    Preamble,
    A,
    B,
}

/// Parse a case file
pub fn parse_case(input: &str) -> Result<Case> {
    let mut limit = None;
    let mut expect = None;
    let mut a = Vec::new();
    let mut b = Vec::new();
    let mut section = Section::Preamble;

    for (number, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let context = || format!("line {}: {}", number + 1, line);

        match line {
            "[a]" => section = Section::A,
            "[b]" => section = Section::B,
            _ => match section {
                Section::Preamble => {
                    let (key, value) = line
                        .split_once('=')
                        .map(|(k, v)| (k.trim(), v.trim()))
                        .with_context(context)?;
                    match key {
                        "limit" => limit = Some(value.parse::<f32>().with_context(context)?),
                        "expect" => expect = Some(parse_expectation(value).with_context(context)?),
                        other => bail!("unknown setting '{}' ({})", other, context()),
                    }
                }
                Section::A => a.push(parse_trace(line).with_context(context)?),
                Section::B => b.push(parse_trace(line).with_context(context)?),
            },
        }
    }

    Ok(Case {
        limit,
        expect: expect.context("case has no 'expect' setting")?,
        a,
        b,
    })
}

fn parse_expectation(value: &str) -> Result<Expectation> {
    let words: Vec<&str> = value.split_whitespace().collect();
    let expectation = match words.as_slice() {
        ["match"] => Expectation::Match,
        ["trace_count", trace] => Expectation::TraceCount(trace.parse()?),
        ["header", trace] => Expectation::Header(trace.parse()?),
        ["sample", trace, sample] => Expectation::Sample {
            trace: trace.parse()?,
            sample: sample.parse()?,
        },
        _ => bail!("unrecognised expectation '{}'", value),
    };
    Ok(expectation)
}

fn parse_trace(line: &str) -> Result<TraceRecord> {
    let mut samples = Vec::new();
    let mut header_bytes = Vec::new();

    for token in line.split_whitespace() {
        if let Some(assignment) = token.strip_prefix('@') {
            let (offset, value) = assignment
                .split_once('=')
                .with_context(|| format!("bad header assignment '{}'", token))?;
            header_bytes.push((offset.parse::<usize>()?, value.parse::<u8>()?));
        } else {
            samples.push(token.parse::<f32>()?);
        }
    }

    let mut record = TraceRecord::new(samples);
    for (offset, value) in header_bytes {
        anyhow::ensure!(
            offset < segy::HEADER_BYTES && !(segy::NS_OFFSET..segy::NS_OFFSET + 2).contains(&offset),
            "header offset {} is outside the header or overlaps ns",
            offset
        );
        record = record.with_header_byte(offset, value);
    }
    Ok(record)
}

/// Serialize records into an in-memory trace file
pub fn encode(records: &[TraceRecord], byte_order: ByteOrder) -> Result<Vec<u8>> {
    let mut writer = TraceWriter::new(Vec::new(), byte_order);
    for record in records {
        writer.write_record(record)?;
    }
    Ok(writer.finish()?)
}

/// Write records to a trace file on disk
pub fn write_trace_file(path: &Path, records: &[TraceRecord], byte_order: ByteOrder) -> Result<()> {
    let mut writer = TraceWriter::create(path, byte_order)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    for record in records {
        writer.write_record(record)?;
    }
    writer.finish()?;
    Ok(())
}

/// Compare two in-memory record sets
pub fn compare_records(
    a: &[TraceRecord],
    b: &[TraceRecord],
    tolerance: Tolerance,
) -> Result<ComparisonResult> {
    let bytes_a = encode(a, ByteOrder::Native)?;
    let bytes_b = encode(b, ByteOrder::Native)?;
    let mut comparator = Comparator::new(tolerance);
    Ok(comparator.compare(
        TraceReader::new(Cursor::new(bytes_a), ByteOrder::Native),
        TraceReader::new(Cursor::new(bytes_b), ByteOrder::Native),
    )?)
}

/// Run a case and return the comparator's answer
pub fn run_case(case: &Case) -> Result<ComparisonResult> {
    compare_records(&case.a, &case.b, case.tolerance()?)
}

/// A scratch directory unique to this process and test name
pub fn scratch_dir(name: &str) -> Result<PathBuf> {
    let dir = std::env::temp_dir().join(format!("sucmp-{}-{}", name, std::process::id()));
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case() {
        let case = parse_case(
            "# comment\nlimit = 0.5\nexpect = sample 2 1\n\n[a]\n@3=4 1.0 2.0\n\n[b]\n1.0 2.0\n",
        )
        .unwrap();
        assert_eq!(case.limit, Some(0.5));
        assert_eq!(case.expect, Expectation::Sample { trace: 2, sample: 1 });
        assert_eq!(case.a.len(), 1);
        assert_eq!(case.a[0].header()[3], 4);
        assert_eq!(case.b[0].samples(), &[1.0, 2.0]);
    }

    #[test]
    fn test_missing_expectation() {
        assert!(parse_case("[a]\n1.0\n[b]\n1.0\n").is_err());
    }

    #[test]
    fn test_header_assignment_cannot_touch_ns() {
        assert!(parse_case("expect = match\n[a]\n@114=1 1.0\n").is_err());
    }

    #[test]
    fn test_expectation_matching() {
        let result = ComparisonResult::SampleMismatch {
            trace: 2,
            sample: 1,
            a: 1.0,
            b: 2.0,
        };
        assert!(Expectation::Sample { trace: 2, sample: 1 }.is_met_by(&result));
        assert!(!Expectation::Sample { trace: 2, sample: 0 }.is_met_by(&result));
        assert!(!Expectation::Match.is_met_by(&result));
    }
}
