mod params;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use comparator::{Comparator, ComparisonResult, Report, Tolerance};
use config::Config;
use params::{Params, KNOWN_PARAMS};
use segy::{ByteOrder, TraceReader};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error, info};

const LONG_ABOUT: &str = "\
Compare two seismic data sets in CWP/SU format.

This is the seismic equivalent of cmp(1). Unlike cmp it understands trace
data and treats files that differ only by small numerical amounts as the same.

The files must have the same number of traces and samples per trace, their
trace headers must be identical bit for bit, and each sample of file_A must be
within the fractional difference `limit` of the matching sample of file_B.
Comparison stops at the first difference.

Exit status is 0 when the files match, 1 when they differ and 2 on error,
so it can drive regression tests in shell scripts:

    ./fubar par=tst1.par
    sucmp tst1.su ref/tst1.su || suxwigb <tst1.su";

/// Compare two seismic trace files within a tolerance
#[derive(Parser, Debug)]
#[command(name = "sucmp")]
#[command(about = "CoMPare two seismic data sets", long_about = LONG_ABOUT)]
struct Args {
    /// First trace file
    file_a: PathBuf,

    /// Second trace file
    file_b: PathBuf,

    /// Optional parameters as name=value (limit=1.0e-4)
    params: Vec<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Byte order of the trace files (native, little or big)
    #[arg(long)]
    byte_order: Option<ByteOrder>,

    /// How to print the result
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One line describing the first difference, nothing on a match
    Text,
    /// A JSON object, also printed on a match
    Json,
}

/// Settings resolved from parameters, configuration and defaults
#[derive(Debug, Clone, Copy, PartialEq)]
struct Settings {
    tolerance: Tolerance,
    byte_order: ByteOrder,
}

fn main() -> ExitCode {
    // Logs go to stderr so stdout only carries the comparison report
    // Set RUST_LOG to control the level, e.g. RUST_LOG=debug
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    let outcome = run(&args);
    if let Err(e) = &outcome {
        error!("{:#}", e);
        eprintln!("sucmp: {:#}", e);
    }
    ExitCode::from(exit_code(&outcome))
}

/// 0 when the files match, 1 when they differ, 2 on any error
fn exit_code(outcome: &Result<ComparisonResult>) -> u8 {
    match outcome {
        Ok(result) if result.is_match() => 0,
        Ok(_) => 1,
        Err(_) => 2,
    }
}

fn run(args: &Args) -> Result<ComparisonResult> {
    let config = Config::load(args.config.as_deref())?;
    let settings = resolve_settings(args, &config)?;
    info!(
        limit = settings.tolerance.limit(),
        byte_order = %settings.byte_order,
        "comparing {} with {}",
        args.file_a.display(),
        args.file_b.display()
    );

    let reader_a = TraceReader::open(&args.file_a, settings.byte_order)
        .with_context(|| format!("unable to open first file {}", args.file_a.display()))?;
    let reader_b = TraceReader::open(&args.file_b, settings.byte_order)
        .with_context(|| format!("unable to open second file {}", args.file_b.display()))?;

    let mut comparator = Comparator::new(settings.tolerance);
    let result = comparator.compare(reader_a, reader_b)?;
    debug!(?result, "comparison finished");

    let report = Report::new(
        args.file_a.display().to_string(),
        args.file_b.display().to_string(),
        result,
    );
    match args.format {
        OutputFormat::Text => {
            if !result.is_match() {
                println!("{}", report);
            }
        }
        OutputFormat::Json => {
            let json =
                serde_json::to_string(&report).context("Failed to serialize comparison report")?;
            println!("{}", json);
        }
    }

    Ok(result)
}

/// Applies `limit=` over the configured limit, and `--byte-order` over the
/// configured byte order
fn resolve_settings(args: &Args, config: &Config) -> Result<Settings> {
    let params = Params::parse(&args.params)?;
    params.check(KNOWN_PARAMS)?;

    let limit = match params.get_f32("limit")? {
        Some(limit) => limit,
        None => {
            config.validate()?;
            config.compare.limit
        }
    };
    let tolerance = Tolerance::new(limit).context("invalid limit")?;

    Ok(Settings {
        tolerance,
        byte_order: args.byte_order.unwrap_or(config.format.byte_order),
    })
}
