//! # Domain Value Objects
//!
//! Immutable value types for shard resolution. Nothing here outlives a
//! single resolution.

use super::errors::{ShardError, ShardKey};
use super::invariants::{
    invariant_even_distribution, invariant_nonzero_counts, invariant_positive_group_size,
};
use serde::Serialize;
use std::fmt;

/// How integer keys are turned into shard keys.
///
/// String keys are always checksummed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum KeyMode {
    /// Integer keys are used directly.
    #[default]
    Modulo,
    /// Integer keys are checksummed as well.
    ChecksumAll,
}

impl fmt::Display for KeyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Modulo => f.write_str("modulo"),
            Self::ChecksumAll => f.write_str("checksum-all"),
        }
    }
}

/// Key source supplied by the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyInput {
    /// String key, checksummed case-insensitively.
    Text(String),
    /// Integer key.
    Integer(u64),
    /// No key given; resolves to key 0.
    Missing,
}

impl KeyInput {
    /// Build from the optional string/integer flags. The string wins when both are set.
    pub fn from_flags(text: Option<String>, integer: Option<u64>) -> Self {
        match (text, integer) {
            (Some(text), _) => Self::Text(text),
            (None, Some(n)) => Self::Integer(n),
            (None, None) => Self::Missing,
        }
    }

    /// True when neither source was supplied.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

/// Database and table counts.
///
/// Only constructible through [`ShardCounts::new`] or
/// [`ShardCounts::new_uneven`], so mapping over it never divides by zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ShardCounts {
    database_count: u64,
    table_count: u64,
}

impl ShardCounts {
    /// Counts with tables spread evenly over databases.
    pub fn new(database_count: u64, table_count: u64) -> Result<Self, ShardError> {
        invariant_nonzero_counts(database_count, table_count)?;
        invariant_positive_group_size(database_count, table_count)?;
        invariant_even_distribution(database_count, table_count)?;
        Ok(Self {
            database_count,
            table_count,
        })
    }

    /// Counts where `table_count` need not be a multiple of `database_count`.
    ///
    /// The last database band then absorbs the remainder, and its index can
    /// reach `database_count` or beyond.
    pub fn new_uneven(database_count: u64, table_count: u64) -> Result<Self, ShardError> {
        invariant_nonzero_counts(database_count, table_count)?;
        invariant_positive_group_size(database_count, table_count)?;
        Ok(Self {
            database_count,
            table_count,
        })
    }

    /// Number of physical databases.
    pub fn database_count(&self) -> u64 {
        self.database_count
    }

    /// Total number of tables across all databases.
    pub fn table_count(&self) -> u64 {
        self.table_count
    }

    /// Contiguous tables per database. Always positive.
    pub fn group_size(&self) -> u64 {
        self.table_count / self.database_count
    }

    /// True when every database owns the same number of tables.
    pub fn is_even(&self) -> bool {
        self.table_count % self.database_count == 0
    }
}

/// Target table and database for a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ShardResult {
    /// Table index in `[0, table_count)`.
    pub table_index: u64,
    /// Index of the database owning the table.
    pub database_index: u64,
}

/// Outcome of one resolution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Mode used to derive the key.
    pub mode: KeyMode,
    /// Normalized key.
    pub key: ShardKey,
    /// Counts the key was mapped over.
    #[serde(flatten)]
    pub counts: ShardCounts,
    /// Mapping result.
    #[serde(flatten)]
    pub result: ShardResult,
}
