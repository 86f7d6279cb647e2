//! Criterion benchmarks for Naive Bayes training and prediction.

use std::hint::black_box;

use bayesic::classifier::NaiveBayesClassifier;
use bayesic::data::DataPoint;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

const CLASSES: [&str; 4] = ["sports", "politics", "science", "culture"];

const WORDS: [&str; 32] = [
    "game", "team", "score", "season", "league", "coach", "match", "player", "vote", "policy",
    "election", "senate", "bill", "campaign", "party", "debate", "cell", "theory", "experiment",
    "data", "physics", "genome", "orbit", "quantum", "film", "novel", "gallery", "stage", "music",
    "poetry", "critic", "festival",
]; // 8 words per class

/// Generate bag-of-words data points with class-skewed word choices.
fn generate_data_points(count: usize, seed: u64) -> Vec<DataPoint> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data_points = Vec::with_capacity(count);
    for i in 0..count {
        let class_index = i % CLASSES.len();
        let mut data_point = DataPoint::new(CLASSES[class_index]);
        for _ in 0..20 {
            // Mostly in-class vocabulary with some cross-class noise.
            let word = if rng.random_range(0..10) < 8 {
                WORDS[class_index * 8 + rng.random_range(0..8)]
            } else {
                WORDS[rng.random_range(0..WORDS.len())]
            };
            data_point = data_point.with_feature(word, rng.random_range(1..4));
        }
        data_points.push(data_point);
    }
    data_points
}

fn bench_train(c: &mut Criterion) {
    let mut group = c.benchmark_group("train");
    for &size in &[100usize, 1000] {
        let dataset = generate_data_points(size, 42);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("{size}_data_points"), |b| {
            b.iter(|| {
                let mut classifier = NaiveBayesClassifier::new();
                classifier.train(black_box(&dataset)).unwrap();
                classifier
            })
        });
    }
    group.finish();
}

fn bench_predict(c: &mut Criterion) {
    let mut classifier = NaiveBayesClassifier::new();
    classifier.train(&generate_data_points(1000, 42)).unwrap();
    let queries = generate_data_points(100, 7);

    let mut group = c.benchmark_group("predict");
    group.throughput(Throughput::Elements(queries.len() as u64));

    // Warm cache: estimator results are memoized across predictions.
    group.bench_function("100_queries_warm_cache", |b| {
        b.iter(|| {
            for query in &queries {
                black_box(classifier.predict(black_box(query)).unwrap());
            }
        })
    });
    group.finish();
}

criterion_group!(benches, bench_train, bench_predict);
criterion_main!(benches);
