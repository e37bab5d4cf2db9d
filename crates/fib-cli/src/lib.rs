//! Driver for fibgen: draws a prefix of the Fibonacci sequence and prints it.

use std::fmt::Display;
use std::io::{self, Write};

use anyhow::{Context, Result};
use fibonacci_rs::Fibonacci;
use num_bigint::BigUint;
use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

/// Number of values printed by [`run`].
pub const DEFAULT_COUNT: usize = 10;

/// Renders values in list display form, e.g. `[1, 1, 2]`.
pub fn render_sequence<T: Display>(values: &[T]) -> String {
    let items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", items.join(", "))
}

/// Draws `count` values from a fresh producer and writes them as one line.
pub fn write_sequence<W: Write>(out: &mut W, count: usize) -> io::Result<()> {
    debug!(count, "drawing values from fibonacci producer");
    let elems: Vec<BigUint> = Fibonacci::new().take(count).collect();
    writeln!(out, "{}", render_sequence(&elems))?;
    out.flush()
}

/// Installs the stderr log subscriber. Filtered by `RUST_LOG`, default `warn`.
///
/// Calling this more than once is harmless.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

pub fn run() -> Result<()> {
    init_logging();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_sequence(&mut out, DEFAULT_COUNT).context("failed to write sequence to stdout")?;

    trace!("done");
    Ok(())
}
