//! Criterion benchmarks for u-domset.
//!
//! Random graphs with a fixed edge probability; measures move evaluation,
//! tabu search and path relinking.

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_domset::construct::{Constructive, RandomConstructive};
use u_domset::instance::Instance;
use u_domset::moves::{explore, Evaluation};
use u_domset::relink::PathRelinking;
use u_domset::solution::Solution;
use u_domset::tabu::{TabuConfig, TabuRunner};

fn random_graph(n: usize, p: f64, seed: u64) -> Arc<Instance> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges = Vec::new();
    for u in 0..n {
        for v in (u + 1)..n {
            if rng.random_bool(p) {
                edges.push((u, v));
            }
        }
    }
    Arc::new(Instance::from_edges(format!("rand{n}"), n, &edges).expect("valid graph"))
}

fn random_solution(instance: &Arc<Instance>, seed: u64) -> Solution {
    let mut rng = StdRng::seed_from_u64(seed);
    RandomConstructive.construct(Solution::new(instance), &mut rng)
}

fn bench_explore(c: &mut Criterion) {
    let mut group = c.benchmark_group("explore");

    for &n in &[100usize, 500] {
        let instance = random_graph(n, 0.05, 42);
        let solution = random_solution(&instance, 1);
        for evaluation in [Evaluation::Incremental, Evaluation::Full] {
            group.bench_with_input(
                BenchmarkId::new(format!("{evaluation:?}"), n),
                &solution,
                |b, s| b.iter(|| black_box(explore(black_box(s), evaluation))),
            );
        }
    }
    group.finish();
}

fn bench_tabu(c: &mut Criterion) {
    let mut group = c.benchmark_group("tabu");
    group.sample_size(10);

    for &n in &[100usize, 300] {
        let instance = random_graph(n, 0.05, 42);
        for (name, config) in [
            ("basic", TabuConfig::default().with_seed(42)),
            (
                "ltm_so",
                TabuConfig::default()
                    .with_long_term_memory(true)
                    .with_strategic_oscillation(true)
                    .with_seed(42),
            ),
        ] {
            group.bench_with_input(
                BenchmarkId::new(name, n),
                &(instance.clone(), config),
                |b, (i, c)| {
                    b.iter(|| {
                        let result = TabuRunner::run(black_box(i), black_box(c));
                        black_box(result)
                    })
                },
            );
        }
    }
    group.finish();
}

fn bench_relink(c: &mut Criterion) {
    let mut group = c.benchmark_group("relink");
    group.sample_size(10);

    for &n in &[100usize, 300] {
        let instance = random_graph(n, 0.05, 42);
        let origin = random_solution(&instance, 1);
        let reference = random_solution(&instance, 2);
        let relinking = PathRelinking::default();
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(origin, reference),
            |b, (o, r)| {
                b.iter(|| {
                    let mut rng = StdRng::seed_from_u64(7);
                    black_box(relinking.relink(black_box(o), black_box(r), &mut rng))
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_explore, bench_tabu, bench_relink);
criterion_main!(benches);
