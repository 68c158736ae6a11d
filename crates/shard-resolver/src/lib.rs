//! # Shard Resolver
//!
//! Maps a sharding key to the physical database and table that own it.
//!
//! ## Purpose
//!
//! Given a total table count and database count:
//! - Normalize the caller's key (string checksum, raw integer, or integer checksum)
//! - Pick the table as `key % table_count`
//! - Pick the database owning that table by contiguous bands of `table_count / database_count`
//!
//! ## Key Modes
//!
//! | Mode | String input | Integer input |
//! |------|--------------|---------------|
//! | `Modulo` | CRC-32 of lower-cased bytes | used as-is |
//! | `ChecksumAll` | CRC-32 of lower-cased bytes | CRC-32 of little-endian bytes |
//!
//! ## Module Structure
//!
//! ```text
//! shard-resolver/
//! ├── domain/          # Core types: ShardCounts, ShardResult, KeyInput
//! ├── algorithms/      # Key normalization, shard mapping
//! ├── ports/           # API trait
//! └── service.rs       # ShardResolver
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithms;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use algorithms::{
    integer_checksum_key, integer_identity_key, map_to_shard, normalize_key, shard,
    string_checksum_key,
};
pub use domain::{
    invariant_database_in_range, invariant_deterministic_mapping, invariant_even_distribution,
    invariant_nonzero_counts, invariant_positive_group_size, invariant_table_in_range, KeyInput,
    KeyMode, Resolution, ShardCounts, ShardError, ShardKey, ShardResult,
};
pub use ports::ShardResolverApi;
pub use service::{ResolverConfig, ShardResolver};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
