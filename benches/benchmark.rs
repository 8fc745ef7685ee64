// Performance benchmarks for fitting and per-request ranking
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use rand::rngs::StdRng;
use std::sync::Arc;
use wisata_core::{Corpus, Item, Recommender, RecommenderConfig};

const WORDS: &[&str] = &[
    "waterfall", "forest", "hiking", "pool", "swimming", "temple", "history",
    "museum", "art", "tea", "garden", "plantation", "mountain", "view", "lake",
    "camping", "hill", "sunrise", "village", "culture", "market", "food",
    "spring", "bridge", "river", "cave", "park", "playground", "family", "trail",
];

fn generate_corpus(size: usize) -> Corpus {
    let mut rng = StdRng::seed_from_u64(42);
    (0..size)
        .map(|i| {
            let len = rng.random_range(5..30);
            let text: Vec<&str> = (0..len).map(|_| WORDS[rng.random_range(0..WORDS.len())]).collect();
            Item::new(format!("item{}", i), text.join(" "))
        })
        .collect()
}

fn benchmark_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("fit");

    for size in [100, 500, 2000].iter() {
        let corpus = generate_corpus(*size);
        group.bench_with_input(BenchmarkId::new("wisata", size), size, |b, _| {
            b.iter(|| {
                let rec = Recommender::fit(corpus.clone(), RecommenderConfig::default()).unwrap();
                black_box(rec);
            });
        });
    }

    group.finish();
}

fn benchmark_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend");

    let rec = Recommender::fit(generate_corpus(2000), RecommenderConfig::default()).unwrap();

    group.bench_function("by_query", |b| {
        b.iter(|| {
            let results = rec.recommend_by_query(black_box("waterfall forest hiking"), 5);
            black_box(results.len());
        });
    });

    group.bench_function("by_item", |b| {
        b.iter(|| {
            let results = rec.recommend_by_item(black_box("item1000"), 5).unwrap();
            black_box(results.len());
        });
    });

    group.finish();
}

fn benchmark_concurrent_reads(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_reads");

    let rec = Arc::new(Recommender::fit(generate_corpus(1000), RecommenderConfig::default()).unwrap());

    group.bench_function("wisata_concurrent", |b| {
        b.iter(|| {
            use std::thread;
            let handles: Vec<_> = (0..10).map(|i| {
                let rec = rec.clone();
                thread::spawn(move || {
                    rec.recommend_by_query(WORDS[i % WORDS.len()], 5).len()
                })
            }).collect();

            for handle in handles {
                black_box(handle.join().unwrap());
            }
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_fit, benchmark_query, benchmark_concurrent_reads);
criterion_main!(benches);
