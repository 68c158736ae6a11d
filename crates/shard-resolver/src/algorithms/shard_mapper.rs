//! # Shard Mapper
//!
//! Maps a key to a table, then the table to the database owning it.
//!
//! Tables are grouped into contiguous bands of `table_count / database_count`.
//! Database 0 owns tables `[0, group)`, database 1 owns `[group, 2 * group)`,
//! and so on.

use crate::domain::{ShardCounts, ShardError, ShardKey, ShardResult};
use tracing::debug;

/// Map `key` over validated counts.
pub fn map_to_shard(key: ShardKey, counts: &ShardCounts) -> ShardResult {
    let table_index = key % counts.table_count();
    let database_index = table_index / counts.group_size();

    debug!(
        key,
        table_index,
        database_index,
        group_size = counts.group_size(),
        "mapped key to shard"
    );

    ShardResult {
        table_index,
        database_index,
    }
}

/// Map `key` over raw counts.
///
/// Uneven counts are accepted; counts that would divide by zero are not.
pub fn shard(
    key: ShardKey,
    database_count: u64,
    table_count: u64,
) -> Result<ShardResult, ShardError> {
    let counts = ShardCounts::new_uneven(database_count, table_count)?;
    Ok(map_to_shard(key, &counts))
}
