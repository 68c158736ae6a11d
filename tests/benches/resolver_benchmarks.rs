//! # Shard Resolver Benchmarks
//!
//! | Operation | Target |
//! |-----------|--------|
//! | String checksum key | < 1µs |
//! | Integer checksum key | < 1µs |
//! | Full resolution | < 1µs |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;
use shard_resolver::{
    integer_checksum_key, map_to_shard, string_checksum_key, KeyInput, KeyMode, ResolverConfig,
    ShardCounts, ShardResolver, ShardResolverApi,
};

fn bench_key_normalizer(c: &mut Criterion) {
    let mut group = c.benchmark_group("key-normalizer");

    for len in [8usize, 64, 512] {
        let key: String = (0..len).map(|i| if i % 2 == 0 { 'A' } else { 'z' }).collect();
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::new("string_checksum_key", len), &key, |b, key| {
            b.iter(|| black_box(string_checksum_key(black_box(key))))
        });
    }

    let n: u64 = rand::thread_rng().gen();
    group.bench_function("integer_checksum_key", |b| {
        b.iter(|| black_box(integer_checksum_key(black_box(n))))
    });

    group.finish();
}

fn bench_shard_mapper(c: &mut Criterion) {
    let mut group = c.benchmark_group("shard-mapper");
    let counts = ShardCounts::new(16, 1024).expect("valid counts");
    let keys: Vec<u64> = {
        let mut rng = rand::thread_rng();
        (0..1000).map(|_| rng.gen()).collect()
    };

    group.throughput(Throughput::Elements(keys.len() as u64));
    group.bench_function("map_to_shard_1000", |b| {
        b.iter(|| {
            for key in &keys {
                black_box(map_to_shard(*key, &counts));
            }
        })
    });

    group.finish();
}

fn bench_resolver(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolver");

    for mode in [KeyMode::Modulo, KeyMode::ChecksumAll] {
        let resolver = ShardResolver::new(ResolverConfig::new(mode));
        let input = KeyInput::Integer(123_456_789);
        group.bench_function(BenchmarkId::new("resolve_integer", mode), |b| {
            b.iter(|| black_box(resolver.resolve(&input, 16, 1024)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_key_normalizer, bench_shard_mapper, bench_resolver);
criterion_main!(benches);
