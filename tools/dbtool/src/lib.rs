//! DB Tool: find the sharded table for a key
//!
//! Command-line front end over [`shard_resolver`].
//!
//! ## Commands
//!
//! ```text
//! dbtool mysqlconn (my)     -c <conn>                          echo a connection string
//! dbtool modshard  (mshard) -s <str> | -i <int> -d <n> -t <n>  integer keys used as-is
//! dbtool crcshard  (cshard) -s <str> | -i <int> -d <n> -t <n>  integer keys checksummed
//! ```
//!
//! Shard commands print `DB: 00000002. Table: 00000009`.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod output;

pub use cli::{Cli, Command, ConnArgs, ShardArgs};
pub use commands::run;
pub use logging::init_logging;
pub use output::{format_shard_line, render, OutputFormat};
