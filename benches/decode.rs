//! Criterion benchmarks for the one-shot gzip decode path.
//!
//! Run with:
//!   cargo bench --bench decode

use std::io::Write;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use flate2::write::GzEncoder;
use flate2::Compression;

/// Compressible synthetic payload of the requested length.
fn synthetic(len: usize) -> Vec<u8> {
    (0..len)
        .map(|i| (i as u8).wrapping_mul(13).wrapping_add((i >> 10) as u8))
        .collect()
}

fn gzip(data: &[u8], level: Compression) -> Vec<u8> {
    let mut enc = GzEncoder::new(Vec::new(), level);
    enc.write_all(data).unwrap();
    enc.finish().unwrap()
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for &size in &[64 * 1024usize, 1 << 20, 4 << 20] {
        let original = synthetic(size);

        for (label, level) in [
            ("stored", Compression::none()),
            ("default", Compression::default()),
        ] {
            let compressed = gzip(&original, level);

            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(
                BenchmarkId::new(label, size),
                &compressed,
                |b, compressed| {
                    b.iter(|| {
                        let out = gzdec::decode(compressed).unwrap();
                        assert_eq!(out.len(), size);
                        out
                    })
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
