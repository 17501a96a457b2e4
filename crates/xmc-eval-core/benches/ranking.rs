//! Benchmarks for aggregation, top-k ranking and corpus evaluation.
//!
//! Run with: cargo bench -p xmc-eval-core

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use xmc_eval_core::{DocumentExample, EvaluationOptions, Evaluator, LabelSpace, ModelScores};

/// Roughly the size of the IPC group-level label space.
const LABELS: usize = 7_000;

/// Deterministic scores in [0, 1) from a xorshift stream.
fn scores(seed: u64, len: usize) -> Vec<f32> {
    let mut state = seed.wrapping_mul(0x9E37_79B9_7F4A_7C15) | 1;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state >> 40) as f32 / (1u64 << 24) as f32
        })
        .collect()
}

fn benchmark_rank(c: &mut Criterion) {
    let v = scores(1, LABELS);

    c.bench_function("rank_top5_7k", |b| {
        b.iter(|| xmc_eval_core::rank(black_box(&v), 5))
    });
    c.bench_function("rank_top100_7k", |b| {
        b.iter(|| xmc_eval_core::rank(black_box(&v), 100))
    });
}

fn benchmark_aggregate(c: &mut Criterion) {
    let members: Vec<Vec<f32>> = (0..4).map(|i| scores(i + 1, LABELS)).collect();

    c.bench_function("aggregate_4x7k", |b| {
        b.iter(|| xmc_eval_core::aggregate(black_box(&members)))
    });
}

fn benchmark_evaluate(c: &mut Criterion) {
    let labels = LabelSpace::build((0..LABELS).map(|i| format!("L{:05}", i))).unwrap();
    let corpus: Vec<DocumentExample> = (0..200u64)
        .map(|d| DocumentExample {
            id: format!("doc{}", d),
            labels: vec![format!("L{:05}", (d * 37) % LABELS as u64)],
            scores: (0..3u64)
                .map(|m| ModelScores::new(format!("m{}", m), scores(d * 3 + m + 1, LABELS)))
                .collect(),
        })
        .collect();
    let options = EvaluationOptions::default().with_cutoffs(&[1, 3, 5]).unwrap();
    let evaluator = Evaluator::new(labels, options);

    c.bench_function("evaluate_200_docs_3_models", |b| {
        b.iter(|| evaluator.evaluate(black_box(&corpus)).unwrap())
    });
}

criterion_group!(
    benches,
    benchmark_rank,
    benchmark_aggregate,
    benchmark_evaluate
);
criterion_main!(benches);
