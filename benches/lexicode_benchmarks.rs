//! Lexicode Benchmarks
//!
//! Benchmarks for the prefix tree and the Huffman codec, implemented with
//! the Criterion framework.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{
    black_box, criterion_group, criterion_main, measurement::WallTime, BenchmarkId, Criterion,
    SamplingMode, Throughput,
};
use std::time::Duration;

use lexicode_lib::data_structures::{HuffmanCodec, PrefixTree};

/// Deterministic sample text with a skewed character distribution.
fn sample_text(len: usize) -> String {
    const ALPHABET: &[u8] = b"eeeeeeeetttttaaaooiinnsshrdlu ";
    (0..len)
        .map(|i| ALPHABET[(i * 7 + i / 3) % ALPHABET.len()] as char)
        .collect()
}

/// Benchmark the prefix tree
fn bench_prefix_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("prefix_tree");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    // Insert benchmark with different word lengths
    for word_length in [8, 16, 32, 64].iter() {
        group.bench_with_input(
            BenchmarkId::new("insert", word_length),
            word_length,
            |b, &length| {
                let words: Vec<String> = (0..1000)
                    .map(|i| format!("{:0width$}", i, width = length))
                    .collect();

                b.iter(|| {
                    let mut tree = PrefixTree::new();
                    for word in &words {
                        black_box(tree.insert(word).unwrap());
                    }
                    tree
                });
            },
        );
    }

    group.bench_function("search", |b| {
        let words: Vec<String> = (0..1000).map(|i| format!("word_{i}")).collect();
        let tree: PrefixTree = words.iter().map(String::as_str).collect();

        let mut index = 0;
        b.iter(|| {
            let word = &words[index % words.len()];
            index += 1;
            black_box(tree.search(word));
        });
    });

    group.bench_function("count_prefix", |b| {
        let mut tree = PrefixTree::new();
        for i in 0..100 {
            for j in 0..10 {
                tree.insert(&format!("prefix_{i}_word_{j}")).unwrap();
            }
        }

        let mut prefix_index = 0;
        b.iter(|| {
            let prefix = format!("prefix_{}_", prefix_index % 100);
            prefix_index += 1;
            black_box(tree.count_prefix(&prefix));
        });
    });

    group.finish();
}

/// Benchmark the Huffman codec
fn bench_huffman_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("huffman_codec");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    for size in [100, 1000, 10_000].iter() {
        let text = sample_text(*size);
        group.throughput(Throughput::Bytes(*size as u64));

        group.bench_with_input(BenchmarkId::new("encode", size), &text, |b, text| {
            let mut codec = HuffmanCodec::new();
            b.iter(|| black_box(codec.encode(text)));
        });

        group.bench_with_input(BenchmarkId::new("decode", size), &text, |b, text| {
            let mut codec = HuffmanCodec::new();
            let bits = codec.encode(text);
            b.iter(|| black_box(codec.decode(&bits).unwrap()));
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .with_measurement(WallTime)
        .significance_level(0.01)
        .noise_threshold(0.02);
    targets = bench_prefix_tree, bench_huffman_codec
}

criterion_main!(benches);
