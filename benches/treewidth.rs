//! Criterion benchmarks for the decomposition pipeline
//!
//! Covers the per-trial building blocks (Lex-BFS, chordality test, chordless
//! cycle enumeration, chordalization) and full solves.

use chordal_td::{
    chordalize, chordless_cycles, default_pass_limit, is_chordal, lex_bfs, SolverConfig,
    TreewidthSolver, UndirectedGraph,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

/// Cycle `1..=n` with `chords` random chords (sparse, not chordal)
fn generate_cycle_with_chords(n: u32, chords: usize, seed: u64) -> UndirectedGraph {
    let vertices: Vec<u32> = (1..=n).collect();
    let edges: Vec<(u32, u32)> = (1..=n).map(|i| (i, i % n + 1)).collect();
    let mut graph = UndirectedGraph::from_edge_list(&vertices, &edges).unwrap();

    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..chords {
        let u = rng.random_range(1..=n);
        let v = rng.random_range(1..=n);
        if u != v {
            let _ = graph.add_edge(u, v).unwrap();
        }
    }

    graph
}

/// `rows x cols` grid graph (treewidth `min(rows, cols)`)
fn generate_grid(rows: u32, cols: u32) -> UndirectedGraph {
    let id = |r: u32, c: u32| r * cols + c + 1;
    let vertices: Vec<u32> = (1..=rows * cols).collect();
    let mut edges = Vec::new();
    for r in 0..rows {
        for c in 0..cols {
            if c + 1 < cols {
                edges.push((id(r, c), id(r, c + 1)));
            }
            if r + 1 < rows {
                edges.push((id(r, c), id(r + 1, c)));
            }
        }
    }
    UndirectedGraph::from_edge_list(&vertices, &edges).unwrap()
}

/// Benchmark: Lex-BFS ordering
fn bench_lex_bfs(c: &mut Criterion) {
    let mut group = c.benchmark_group("lex_bfs");

    for size in [50_u32, 200, 1000] {
        let graph = generate_cycle_with_chords(size, size as usize / 4, 1);

        group.bench_with_input(BenchmarkId::new("ordering", size), &graph, |b, graph| {
            b.iter(|| black_box(lex_bfs(black_box(graph))));
        });
    }

    group.finish();
}

/// Benchmark: chordality test (Lex-BFS + PEO check)
fn bench_is_chordal(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_chordal");

    for size in [50_u32, 200, 1000] {
        let graph = generate_cycle_with_chords(size, size as usize / 4, 2);

        group.bench_with_input(BenchmarkId::new("check", size), &graph, |b, graph| {
            b.iter(|| black_box(is_chordal(black_box(graph))));
        });
    }

    group.finish();
}

/// Benchmark: chordless cycle enumeration
fn bench_chordless_cycles(c: &mut Criterion) {
    let mut group = c.benchmark_group("chordless_cycles");

    for size in [3_u32, 4, 5] {
        let graph = generate_grid(size, size);

        group.bench_with_input(BenchmarkId::new("grid", size), &graph, |b, graph| {
            b.iter(|| black_box(chordless_cycles(black_box(graph))));
        });
    }

    group.finish();
}

/// Benchmark: one randomized chordal completion
fn bench_chordalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("chordalize");

    for size in [10_u32, 20, 40] {
        let graph = generate_cycle_with_chords(size, 2, 3);
        let limit = default_pass_limit(&graph);

        group.bench_with_input(BenchmarkId::new("cycle_with_chords", size), &graph, |b, graph| {
            let mut rng = StdRng::seed_from_u64(4);
            b.iter(|| {
                let mut copy = graph.clone();
                black_box(chordalize(&mut copy, &mut rng, limit).unwrap());
            });
        });
    }

    group.finish();
}

/// Benchmark: full solve with a reduced trial count
fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    group.sample_size(10);

    for size in [3_u32, 4] {
        let graph = generate_grid(size, size);

        group.bench_with_input(BenchmarkId::new("grid_20_trials", size), &graph, |b, graph| {
            b.iter(|| {
                let config = SolverConfig::default().with_seed(5).with_connected_trials(20);
                let solution = TreewidthSolver::new(config).solve(black_box(graph)).unwrap();
                black_box(solution);
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_lex_bfs,
    bench_is_chordal,
    bench_chordless_cycles,
    bench_chordalize,
    bench_solve
);
criterion_main!(benches);
