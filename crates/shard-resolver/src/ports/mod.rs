//! # Ports Module
//!
//! Inbound API of the shard resolver.

pub mod inbound;

pub use inbound::ShardResolverApi;
