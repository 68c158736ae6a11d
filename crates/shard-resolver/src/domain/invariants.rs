//! # Domain Invariants
//!
//! Rules that database/table counts and mapping results must satisfy.

use super::errors::{ShardError, ShardKey};
use super::value_objects::{ShardCounts, ShardResult};

/// Invariant: both counts are positive.
pub fn invariant_nonzero_counts(database_count: u64, table_count: u64) -> Result<(), ShardError> {
    if database_count == 0 {
        return Err(ShardError::invalid_config("database count must be positive"));
    }
    if table_count == 0 {
        return Err(ShardError::invalid_config("table count must be positive"));
    }
    Ok(())
}

/// Invariant: every database owns at least one table.
///
/// `table_count / database_count` is the divisor for the database index.
pub fn invariant_positive_group_size(
    database_count: u64,
    table_count: u64,
) -> Result<(), ShardError> {
    if table_count < database_count {
        return Err(ShardError::invalid_config(format!(
            "table count {} is smaller than database count {}",
            table_count, database_count
        )));
    }
    Ok(())
}

/// Invariant: tables split evenly across databases.
pub fn invariant_even_distribution(
    database_count: u64,
    table_count: u64,
) -> Result<(), ShardError> {
    if database_count == 0 || table_count % database_count != 0 {
        return Err(ShardError::invalid_config(format!(
            "table count {} is not a multiple of database count {}",
            table_count, database_count
        )));
    }
    Ok(())
}

/// Invariant: table index is below the table count.
pub fn invariant_table_in_range(result: &ShardResult, counts: &ShardCounts) -> bool {
    result.table_index < counts.table_count()
}

/// Invariant: database index is below the database count.
///
/// Holds for every key only when `counts.is_even()`.
pub fn invariant_database_in_range(result: &ShardResult, counts: &ShardCounts) -> bool {
    result.database_index < counts.database_count()
}

/// Invariant: mapping is deterministic.
///
/// Same key + same counts = same result.
pub fn invariant_deterministic_mapping<F>(map_fn: F, key: ShardKey, counts: &ShardCounts) -> bool
where
    F: Fn(ShardKey, &ShardCounts) -> ShardResult,
{
    let first = map_fn(key, counts);
    let second = map_fn(key, counts);
    first == second
}
