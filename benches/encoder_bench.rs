// In benches/encoder_bench.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use chwire::Encoder;

// --- Mock Data Generation ---

/// Generates `rows` strings drawn from `cardinality` distinct values.
fn generate_column(rows: usize, cardinality: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    (0..rows)
        .map(|_| format!("service-{:05}", rng.random_range(0..cardinality)))
        .collect()
}

// --- Benchmark Suite ---

const BENCH_ROWS: usize = 65_536;

fn bench_low_cardinality(c: &mut Criterion) {
    let mut group = c.benchmark_group("Low-Cardinality Strings");
    group.throughput(Throughput::Elements(BENCH_ROWS as u64));

    for cardinality in [16, 1_000, 50_000] {
        let column = generate_column(BENCH_ROWS, cardinality);
        let mut encoder = Encoder::new();

        group.bench_function(format!("add + flush ({} distinct)", cardinality), |b| {
            b.iter(|| {
                encoder.reset();
                for value in &column {
                    encoder.add_string_low_cardinality(black_box(value));
                }
                encoder.flush_string_low_cardinality();
                black_box(encoder.len())
            })
        });
    }

    // Same data written as plain length-prefixed strings, for comparison.
    let column = generate_column(BENCH_ROWS, 1_000);
    let mut encoder = Encoder::new();
    group.bench_function("plain strings (1000 distinct)", |b| {
        b.iter(|| {
            encoder.reset();
            for value in &column {
                encoder.write_string(black_box(value));
            }
            black_box(encoder.len())
        })
    });

    group.finish();
}

fn bench_primitives(c: &mut Criterion) {
    let values: Vec<u64> = {
        let mut rng = StdRng::seed_from_u64(7);
        (0..BENCH_ROWS).map(|_| rng.random::<u64>() >> rng.random_range(0..64)).collect()
    };

    let mut group = c.benchmark_group("Primitive Writers");
    group.throughput(Throughput::Elements(BENCH_ROWS as u64));

    let mut encoder = Encoder::new();
    group.bench_function("uvarint", |b| {
        b.iter(|| {
            encoder.reset();
            for &v in &values {
                encoder.write_uvarint(black_box(v));
            }
            black_box(encoder.len())
        })
    });

    group.bench_function("u64 one by one", |b| {
        b.iter(|| {
            encoder.reset();
            for &v in &values {
                encoder.write_u64(black_box(v));
            }
            black_box(encoder.len())
        })
    });

    group.bench_function("u64 write_slice", |b| {
        b.iter(|| {
            encoder.reset();
            encoder.write_slice(black_box(&values));
            black_box(encoder.len())
        })
    });

    group.bench_function("add_len", |b| {
        b.iter(|| {
            encoder.reset();
            for &v in &values {
                encoder.add_len(black_box(v & 0xFF));
            }
            black_box(encoder.offset())
        })
    });

    group.finish();
}

criterion_group!(benches, bench_low_cardinality, bench_primitives);
criterion_main!(benches);
