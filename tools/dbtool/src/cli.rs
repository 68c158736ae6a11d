//! Command-line arguments.

use clap::{Args, Parser, Subcommand};
use shard_resolver::{KeyInput, KeyMode, ResolverConfig};

use crate::output::OutputFormat;

/// DB Tool: an easy way to find a sharded table
#[derive(Parser, Debug)]
#[command(name = "dbtool", version)]
#[command(about = "An easy way to find the database and table a sharding key lives in")]
pub struct Cli {
    /// Log filter for stderr diagnostics (RUST_LOG takes precedence)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print an application connection string for use with the MySQL client
    #[command(name = "mysqlconn", visible_alias = "my")]
    MysqlConn(ConnArgs),

    /// Get table by sharding key. Strings are checksummed, integers used as-is
    #[command(name = "modshard", visible_alias = "mshard")]
    ModShard(ShardArgs),

    /// Get table by sharding key. Strings and integers are both checksummed
    #[command(name = "crcshard", visible_alias = "cshard")]
    CrcShard(ShardArgs),
}

/// Arguments of `mysqlconn`.
#[derive(Args, Debug, Clone)]
pub struct ConnArgs {
    /// Application connection string
    #[arg(short, long)]
    pub conn: Option<String>,
}

/// Flags shared by `modshard` and `crcshard`.
#[derive(Args, Debug, Clone)]
pub struct ShardArgs {
    /// String sharding key (case-insensitive); takes precedence over --int
    #[arg(short, long)]
    pub string: Option<String>,

    /// Integer sharding key
    #[arg(short, long)]
    pub int: Option<u64>,

    /// Number of databases
    #[arg(short = 'd', long = "dbcount", visible_alias = "dcount")]
    pub dbcount: u64,

    /// Total number of tables across all databases
    #[arg(short = 't', long = "tabcount", visible_alias = "tcount")]
    pub tabcount: u64,

    /// Accept a table count that is not a multiple of the database count
    #[arg(long)]
    pub allow_uneven: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}

impl ShardArgs {
    /// Key source selected by the flags.
    pub fn key_input(&self) -> KeyInput {
        KeyInput::from_flags(self.string.clone(), self.int)
    }

    /// Resolver configuration for `mode`.
    pub fn resolver_config(&self, mode: KeyMode) -> ResolverConfig {
        ResolverConfig::new(mode).with_allow_uneven(self.allow_uneven)
    }
}
