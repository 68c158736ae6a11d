//! # Domain Errors
//!
//! Error types for shard resolution.

use thiserror::Error;

/// Normalized sharding key.
pub type ShardKey = u64;

/// Sharding error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShardError {
    /// Database/table counts cannot be mapped.
    #[error("Invalid shard configuration: {reason}")]
    InvalidShardConfig {
        /// What is wrong with the counts
        reason: String,
    },
}

impl ShardError {
    /// Shorthand for [`ShardError::InvalidShardConfig`].
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidShardConfig {
            reason: reason.into(),
        }
    }
}
