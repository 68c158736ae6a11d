//! DB Tool: find the database and table a sharding key lives in.

use std::io;

use anyhow::Result;
use clap::Parser;

use dbtool::{init_logging, run, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Diagnostics on stderr
    init_logging(&cli.log_level)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&cli.command, &mut out)
}
