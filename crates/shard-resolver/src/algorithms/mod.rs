//! # Algorithms Module
//!
//! Key normalization and shard mapping.

pub mod key_normalizer;
pub mod shard_mapper;

pub use key_normalizer::{
    integer_checksum_key, integer_identity_key, normalize_key, string_checksum_key,
};
pub use shard_mapper::{map_to_shard, shard};
