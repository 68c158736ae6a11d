//! # Key Normalizer
//!
//! Turns a string or integer into a 64-bit shard key.
//!
//! CRC-32 (IEEE) is used for spreading keys uniformly, not for integrity.

use crate::domain::{KeyInput, KeyMode, ShardKey};
use tracing::debug;

/// Checksum of the lower-cased string, widened to 64 bits.
///
/// Case-insensitive: `"Users42"` and `"users42"` give the same key.
pub fn string_checksum_key(s: &str) -> ShardKey {
    let folded = s.to_lowercase();
    u64::from(crc32fast::hash(folded.as_bytes()))
}

/// The integer itself.
pub fn integer_identity_key(n: u64) -> ShardKey {
    n
}

/// Checksum of the integer's 8 little-endian bytes, widened to 64 bits.
pub fn integer_checksum_key(n: u64) -> ShardKey {
    u64::from(crc32fast::hash(&n.to_le_bytes()))
}

/// Derive the shard key for `input` under `mode`.
///
/// A missing input yields key 0.
pub fn normalize_key(input: &KeyInput, mode: KeyMode) -> ShardKey {
    let key = match (input, mode) {
        (KeyInput::Text(s), _) => string_checksum_key(s),
        (KeyInput::Integer(n), KeyMode::Modulo) => integer_identity_key(*n),
        (KeyInput::Integer(n), KeyMode::ChecksumAll) => integer_checksum_key(*n),
        (KeyInput::Missing, _) => 0,
    };
    debug!(%mode, ?input, key, "normalized shard key");
    key
}
