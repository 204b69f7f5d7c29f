//! CLI entry point for fibseq.
//!
//! Reads an optional count, generates that many Fibonacci numbers and prints
//! them as a header line followed by a comma-separated line.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use fibonacci_rs::{format_sequence, generate};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Count used when none is given or the argument is not an integer.
pub const DEFAULT_COUNT: i64 = 10;

#[derive(Debug, Parser)]
#[command(name = "fibseq", version, about = "Print the first N Fibonacci numbers")]
pub struct Cli {
    /// Number of terms to print. Falls back to 10 if missing or not an integer.
    /// Only the first value is read; anything after it is ignored.
    #[arg(
        value_name = "COUNT",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<String>,
}

impl Cli {
    /// The raw count argument, if one was given.
    pub fn count_arg(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }
}

/// Install the stderr log subscriber. `RUST_LOG` overrides the default `warn`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // A subscriber installed by an embedding caller takes precedence.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Turn the raw argument into a count.
///
/// Anything that is not a 32-bit integer falls back to [`DEFAULT_COUNT`].
/// Negative integers are passed through so the generator can reject them.
pub fn resolve_count(raw: Option<&str>) -> i64 {
    match raw {
        None => DEFAULT_COUNT,
        Some(text) => match text.trim().parse::<i32>() {
            Ok(count) => i64::from(count),
            Err(e) => {
                warn!(
                    "Ignoring count argument {:?} ({}), using {}",
                    text, e, DEFAULT_COUNT
                );
                DEFAULT_COUNT
            }
        },
    }
}

/// Header line plus the sequence line, each newline-terminated.
pub fn render(count: i64, sequence: &[i64]) -> String {
    format!(
        "Fibonacci sequence for count={}:\n{}\n",
        count,
        format_sequence(sequence)
    )
}

/// Run with already-parsed arguments, writing the result to `out`.
///
/// Nothing is written if generation fails.
pub fn run_with<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    let count = resolve_count(cli.count_arg());
    debug!("Generating {} Fibonacci terms", count);

    let sequence =
        generate(count).with_context(|| format!("failed to generate {} terms", count))?;

    out.write_all(render(count, &sequence).as_bytes())
        .context("failed to write sequence")?;
    out.flush().context("failed to flush output")?;
    Ok(())
}

/// Parse process arguments and print the sequence to stdout.
pub fn run() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    let stdout = io::stdout();
    run_with(&cli, &mut stdout.lock())
}
