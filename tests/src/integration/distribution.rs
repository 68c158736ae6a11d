//! # Key Distribution
//!
//! Checksummed keys should land on every table and every database in
//! roughly equal numbers.

#[cfg(test)]
mod tests {
    use shard_resolver::{
        integer_checksum_key, map_to_shard, string_checksum_key, ShardCounts,
    };

    fn table_histogram(keys: impl Iterator<Item = u64>, counts: &ShardCounts) -> Vec<u64> {
        let mut buckets = vec![0u64; counts.table_count() as usize];
        for key in keys {
            buckets[map_to_shard(key, counts).table_index as usize] += 1;
        }
        buckets
    }

    #[test]
    fn test_string_keys_spread_over_tables() {
        let counts = ShardCounts::new(4, 16).unwrap();
        let keys = (0..16_000).map(|i| string_checksum_key(&format!("user-{}", i)));
        let buckets = table_histogram(keys, &counts);
        for (table, hits) in buckets.iter().enumerate() {
            assert!((800..=1200).contains(hits), "table {} got {} keys", table, hits);
        }
    }

    #[test]
    fn test_integer_checksum_keys_spread_over_tables() {
        let counts = ShardCounts::new(4, 16).unwrap();
        let keys = (0..16_000u64).map(integer_checksum_key);
        let buckets = table_histogram(keys, &counts);
        for (table, hits) in buckets.iter().enumerate() {
            assert!((800..=1200).contains(hits), "table {} got {} keys", table, hits);
        }
    }

    #[test]
    fn test_every_table_used_with_many_tables() {
        let counts = ShardCounts::new(16, 1024).unwrap();
        let keys = (0..102_400).map(|i| string_checksum_key(&format!("user-{}", i)));
        let buckets = table_histogram(keys, &counts);
        assert!(buckets.iter().all(|&hits| hits > 0));
    }

    #[test]
    fn test_databases_receive_equal_bands() {
        let counts = ShardCounts::new(8, 64).unwrap();
        let mut per_database = vec![0u64; 8];
        for table in 0..64u64 {
            per_database[map_to_shard(table, &counts).database_index as usize] += 1;
        }
        assert!(per_database.iter().all(|&tables| tables == 8));
    }
}
