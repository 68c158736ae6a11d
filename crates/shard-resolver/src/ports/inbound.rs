//! # Inbound Ports
//!
//! API trait defining what the shard resolver can do.

use crate::domain::{KeyInput, Resolution, ShardError};
use crate::service::ResolverConfig;

/// Shard resolver API - inbound port.
pub trait ShardResolverApi {
    /// Resolve the database and table owning `input`.
    fn resolve(
        &self,
        input: &KeyInput,
        database_count: u64,
        table_count: u64,
    ) -> Result<Resolution, ShardError>;

    /// Get the resolver configuration.
    fn config(&self) -> &ResolverConfig;
}
