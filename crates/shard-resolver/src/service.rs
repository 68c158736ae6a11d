//! # Shard Resolver Service
//!
//! Wires key normalization and shard mapping behind [`ShardResolverApi`].

use crate::algorithms::{map_to_shard, normalize_key};
use crate::domain::{KeyInput, KeyMode, Resolution, ShardCounts, ShardError};
use crate::ports::ShardResolverApi;
use serde::Serialize;
use tracing::{info, warn};

/// Resolver configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ResolverConfig {
    /// How integer keys are normalized.
    pub mode: KeyMode,
    /// Accept table counts that are not a multiple of the database count.
    pub allow_uneven: bool,
}

impl ResolverConfig {
    /// Strict configuration for `mode`.
    pub fn new(mode: KeyMode) -> Self {
        Self {
            mode,
            allow_uneven: false,
        }
    }

    /// Builder: accept uneven counts.
    pub fn with_allow_uneven(mut self, allow_uneven: bool) -> Self {
        self.allow_uneven = allow_uneven;
        self
    }
}

/// Stateless shard resolver.
#[derive(Clone, Debug, Default)]
pub struct ShardResolver {
    config: ResolverConfig,
}

impl ShardResolver {
    /// Create a resolver with the given configuration.
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    fn counts(&self, database_count: u64, table_count: u64) -> Result<ShardCounts, ShardError> {
        if !self.config.allow_uneven {
            return ShardCounts::new(database_count, table_count);
        }

        let counts = ShardCounts::new_uneven(database_count, table_count)?;
        if !counts.is_even() {
            warn!(
                database_count,
                table_count,
                "uneven counts, last database absorbs the remaining tables"
            );
        }
        Ok(counts)
    }
}

impl ShardResolverApi for ShardResolver {
    fn resolve(
        &self,
        input: &KeyInput,
        database_count: u64,
        table_count: u64,
    ) -> Result<Resolution, ShardError> {
        let counts = self.counts(database_count, table_count)?;
        if input.is_missing() {
            warn!("no string or integer key given, using key 0");
        }
        let key = normalize_key(input, self.config.mode);
        let result = map_to_shard(key, &counts);

        info!(
            mode = %self.config.mode,
            key,
            database_index = result.database_index,
            table_index = result.table_index,
            "resolved shard"
        );

        Ok(Resolution {
            mode: self.config.mode,
            key,
            counts,
            result,
        })
    }

    fn config(&self) -> &ResolverConfig {
        &self.config
    }
}
