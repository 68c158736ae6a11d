//! Command execution.

use std::io::Write;

use anyhow::{Context, Result};
use shard_resolver::{KeyMode, ShardResolver, ShardResolverApi};
use tracing::debug;

use crate::cli::{Command, ConnArgs, ShardArgs};
use crate::output::render;

/// Run `command`, writing its single output line to `out`.
pub fn run<W: Write>(command: &Command, out: &mut W) -> Result<()> {
    match command {
        Command::MysqlConn(args) => run_mysqlconn(args, out),
        Command::ModShard(args) => run_shard(args, KeyMode::Modulo, out),
        Command::CrcShard(args) => run_shard(args, KeyMode::ChecksumAll, out),
    }
}

fn run_mysqlconn<W: Write>(args: &ConnArgs, out: &mut W) -> Result<()> {
    let conn = args.conn.as_deref().unwrap_or_default();
    writeln!(out, "{}", conn).context("failed to write connection string")
}

fn run_shard<W: Write>(args: &ShardArgs, mode: KeyMode, out: &mut W) -> Result<()> {
    let resolver = ShardResolver::new(args.resolver_config(mode));
    let input = args.key_input();
    debug!(%mode, ?input, dbcount = args.dbcount, tabcount = args.tabcount, "resolving shard");

    let resolution = resolver
        .resolve(&input, args.dbcount, args.tabcount)
        .with_context(|| {
            format!(
                "cannot map {} tables onto {} databases",
                args.tabcount, args.dbcount
            )
        })?;

    let line = render(&resolution, args.output)?;
    writeln!(out, "{}", line).context("failed to write shard result")
}
