//! # Main — CLI Entry Point
//!
//! Thin wrapper over the library: parses the interval, invokes
//! [`primespan::IntervalCounter`], prints the count. All counting logic
//! lives in the library; the binary only adds argument parsing, logging
//! setup, and output formatting.
//!
//! ## Options
//!
//! - `START`, `LENGTH`: the half-open interval `[START, START + LENGTH)`.
//! - `--segment-length` / `PRIMESPAN_SEGMENT_LENGTH`: maximum entries per
//!   segment sieve (default 2^30 ≈ 128 MiB packed).
//! - `--json`: machine-readable output.
//!
//! A fatal condition (sieve allocation failure, interval endpoint at or
//! above 2^63) exits nonzero with a diagnostic; there is no retry.

use anyhow::Result;
use clap::Parser;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use primespan::{IntervalCounter, DEFAULT_MAX_SEGMENT_LENGTH};

#[derive(Parser)]
#[command(
    name = "primespan",
    about = "Count primes in [START, START+LENGTH) with a segmented sieve"
)]
struct Cli {
    /// Low endpoint of the interval (values below 2 are dropped)
    #[arg(allow_negative_numbers = true)]
    start: i64,

    /// Number of consecutive integers to examine (nonpositive counts zero)
    #[arg(allow_negative_numbers = true)]
    length: i64,

    /// Maximum entries per segment sieve (bounds peak memory)
    #[arg(long, env = "PRIMESPAN_SEGMENT_LENGTH", default_value_t = DEFAULT_MAX_SEGMENT_LENGTH)]
    segment_length: i64,

    /// Emit the result as a JSON object instead of a bare count
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Structured logging: LOG_FORMAT=json for machine ingestion, human-readable otherwise
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_default();
    if log_format == "json" {
        tracing_subscriber::fmt().json().with_target(false).init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }

    let cli = Cli::parse();

    let counter = IntervalCounter::new(cli.segment_length)?;
    let count = counter.count(cli.start, cli.length)?;

    if cli.json {
        println!(
            "{}",
            serde_json::json!({
                "start": cli.start,
                "length": cli.length,
                "count": count,
            })
        );
    } else {
        println!("{}", count);
    }
    Ok(())
}
