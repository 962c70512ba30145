use std::time::Duration;

use cabinet::core::compare;
use cabinet::core::crypto::{self, Key};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Generate a payload of given size.
fn generate_payload(size: usize) -> String {
    "x".repeat(size)
}

/// Benchmark seal/open roundtrip with varying payload sizes.
fn bench_seal_open(c: &mut Criterion) {
    let mut group = c.benchmark_group("seal_open");
    group.sample_size(50);
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    let key = Key::derive("bench key");
    let sizes = [32, 256, 1024, 4096, 16384];

    for size in sizes {
        let payload = generate_payload(size);

        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            BenchmarkId::new("roundtrip", format!("{}B", size)),
            &payload,
            |b, payload| {
                b.iter(|| {
                    let sealed = crypto::encrypt(black_box(payload), black_box(&key)).unwrap();
                    let opened = crypto::decrypt(black_box(&sealed), black_box(&key)).unwrap();
                    black_box(opened);
                });
            },
        );
    }

    group.finish();
}

/// Benchmark encryption only.
fn bench_encrypt(c: &mut Criterion) {
    let mut group = c.benchmark_group("encrypt");
    group.sample_size(100);

    let key = Key::derive("bench key");
    let payload = generate_payload(1024);

    group.throughput(Throughput::Bytes(1024));
    group.bench_function("1KiB", |b| {
        b.iter(|| {
            black_box(crypto::encrypt(black_box(&payload), black_box(&key)).unwrap());
        });
    });

    group.finish();
}

/// Benchmark latest resolution over a large version list.
fn bench_compare_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare");

    let ids: Vec<String> = (1..=1000).map(|i| format!("v{}.{}", i % 25, i)).collect();

    group.bench_function("sort_1000_ids", |b| {
        b.iter(|| {
            let mut ids = ids.clone();
            ids.sort_by(|a, b| compare::compare(a, b));
            black_box(ids);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_seal_open, bench_encrypt, bench_compare_sort);
criterion_main!(benches);
