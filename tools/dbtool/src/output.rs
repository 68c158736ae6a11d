//! Result formatting.

use anyhow::{Context, Result};
use clap::ValueEnum;
use shard_resolver::{Resolution, ShardResult};

/// Output format for shard commands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `DB: 00000001. Table: 00000004`
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Zero-padded line, database first then table.
pub fn format_shard_line(result: &ShardResult) -> String {
    format!(
        "DB: {:08}. Table: {:08}",
        result.database_index, result.table_index
    )
}

/// Render a resolution in `format`.
pub fn render(resolution: &Resolution, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format_shard_line(&resolution.result)),
        OutputFormat::Json => {
            serde_json::to_string(resolution).context("failed to serialize resolution")
        }
    }
}
