use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wordfreq::cs::string::word_frequency::{analyze_text, WordFrequencyConfig};
use wordfreq::HashedDictionary;

const WORDS: &[&str] = &[
    "the", "people", "united", "states", "order", "form", "perfect", "union", "justice",
    "domestic", "tranquility", "common", "defence", "general", "welfare", "liberty",
];

fn random_text(words: usize, seed: u64) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..words)
        .map(|_| WORDS[rng.gen_range(0..WORDS.len())])
        .collect::<Vec<_>>()
        .join(" ")
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("hashed_dictionary_insert");
    for &n in &[100usize, 1000, 3000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let mut dict = HashedDictionary::new();
                for i in 0..n {
                    dict.add(i, i).unwrap();
                }
                black_box(dict.capacity())
            })
        });
    }
    group.finish();
}

fn bench_update(c: &mut Criterion) {
    let mut dict = HashedDictionary::with_capacity(1663).unwrap();
    for i in 0..800usize {
        dict.add(i, 0usize).unwrap();
    }
    c.bench_function("hashed_dictionary_update", |b| {
        b.iter(|| {
            for i in 0..800usize {
                let seen = dict.get_value(&i).copied().unwrap_or(0);
                dict.add(black_box(i), seen + 1).unwrap();
            }
            dict.capacity()
        })
    });
}

fn bench_lookup(c: &mut Criterion) {
    let mut dict = HashedDictionary::with_capacity(1663).unwrap();
    for i in 0..800usize {
        dict.add(i, i).unwrap();
    }
    c.bench_function("hashed_dictionary_get_value", |b| {
        b.iter(|| {
            let mut hits = 0;
            for i in 0..1600usize {
                if dict.get_value(black_box(&i)).is_some() {
                    hits += 1;
                }
            }
            hits
        })
    });
}

fn bench_word_count(c: &mut Criterion) {
    let text = random_text(20_000, 7);
    let config = WordFrequencyConfig::default();
    c.bench_function("analyze_text_20k_words", |b| {
        b.iter(|| analyze_text(black_box(&text), &config).unwrap())
    });
}

criterion_group!(
    benches,
    bench_insert,
    bench_update,
    bench_lookup,
    bench_word_count
);
criterion_main!(benches);
