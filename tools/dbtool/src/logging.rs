//! Diagnostics setup.
//!
//! Logs go to stderr so stdout carries only the result line.

use std::io::{self, IsTerminal};

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Build the log filter: `RUST_LOG` first, then `level`.
pub fn env_filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .with_context(|| format!("invalid log filter: {}", level))
}

/// Install the global stderr subscriber.
pub fn init_logging(level: &str) -> Result<()> {
    let filter = env_filter(level)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(true)
        .with_thread_ids(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {}", e))
}
