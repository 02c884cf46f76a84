//! Huffman pipeline benchmarks
//!
//! Measures each stage (count, build, encode, decode) and the tree
//! serialization round trip across text sizes and symbol distributions.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use huffkit::{build, count, decode, deserialize, encode, generate, serialize};
use std::hint::black_box;

/// Type alias for text generator functions
type TextGenerator = fn(usize) -> String;

mod test_data {
    /// English-like prose
    pub fn prose(size: usize) -> String {
        let text = "The quick brown fox jumps over the lazy dog. \
                    Pack my box with five dozen liquor jugs. \
                    How vexingly quick daft zebras jump! ";
        text.chars().cycle().take(size).collect()
    }

    /// Pseudo-random printable ASCII (flat distribution)
    pub fn random(size: usize) -> String {
        let mut seed: u64 = 0x123456789ABCDEF0;
        (0..size)
            .map(|_| {
                seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
                char::from(b' ' + ((seed >> 33) % 95) as u8)
            })
            .collect()
    }

    /// Mostly one symbol with rare others (skewed distribution)
    pub fn skewed(size: usize) -> String {
        (0..size)
            .map(|i| match i % 64 {
                0 => 'x',
                1 | 2 => 'y',
                _ => 'a',
            })
            .collect()
    }
}

const SIZES: [(&str, usize); 3] = [("1K", 1 << 10), ("16K", 1 << 14), ("256K", 1 << 18)];

const PATTERNS: [(&str, TextGenerator); 3] = [
    ("prose", test_data::prose as TextGenerator),
    ("random", test_data::random as TextGenerator),
    ("skewed", test_data::skewed as TextGenerator),
];

fn bench_count_and_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_and_build");

    for (size_name, size) in SIZES {
        for (pattern_name, generator) in PATTERNS {
            let text = generator(size);
            group.throughput(Throughput::Bytes(text.len() as u64));
            group.bench_with_input(
                BenchmarkId::from_parameter(format!("{size_name}/{pattern_name}")),
                &text,
                |b, text| {
                    b.iter(|| {
                        let root = build(&count(black_box(text))).unwrap();
                        black_box(root);
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for (size_name, size) in SIZES {
        for (pattern_name, generator) in PATTERNS {
            let text = generator(size);
            let table = generate(&build(&count(&text)).unwrap());
            group.throughput(Throughput::Bytes(text.len() as u64));
            group.bench_with_input(
                BenchmarkId::from_parameter(format!("{size_name}/{pattern_name}")),
                &text,
                |b, text| {
                    b.iter(|| black_box(encode(black_box(text), &table).unwrap()));
                },
            );
        }
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for (size_name, size) in SIZES {
        for (pattern_name, generator) in PATTERNS {
            let text = generator(size);
            let root = build(&count(&text)).unwrap();
            let bits = encode(&text, &generate(&root)).unwrap();
            group.throughput(Throughput::Bytes(text.len() as u64));
            group.bench_with_input(
                BenchmarkId::from_parameter(format!("{size_name}/{pattern_name}")),
                &bits,
                |b, bits| {
                    b.iter(|| black_box(decode(black_box(bits), &root).unwrap()));
                },
            );
        }
    }

    group.finish();
}

fn bench_tree_roundtrip(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_roundtrip");

    for (pattern_name, generator) in PATTERNS {
        let root = build(&count(&generator(1 << 14))).unwrap();
        group.bench_function(pattern_name, |b| {
            b.iter(|| {
                let json = serialize(black_box(&root)).to_json().unwrap();
                let record = huffkit::SerializedTree::from_json(&json).unwrap();
                black_box(deserialize(&record).unwrap());
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_count_and_build,
    bench_encode,
    bench_decode,
    bench_tree_roundtrip
);
criterion_main!(benches);
