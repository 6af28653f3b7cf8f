//! Decomposition Benchmarks
//!
//! Measures the breadth-first biconnected-component decomposition on:
//! - Cycles (one component, low-point searches escape around the ring)
//! - Paths (every edge a component, deepest BFS trees)
//! - Grids (one component, wide level queues)
//! - Random sparse graphs (many components of mixed shape)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use bfsbicc_graph::{
    bfs_tree, biconnected_components, biconnected_components_with_config, parse_edge_list,
    BiccConfig, CsrGraph, NodeId,
};

fn make_cycle(n: usize) -> CsrGraph {
    let edges: Vec<_> = (0..n).map(|i| (i as u32, ((i + 1) % n) as u32)).collect();
    CsrGraph::from_edges(n, &edges)
}

fn make_path(n: usize) -> CsrGraph {
    let edges: Vec<_> = (0..n - 1).map(|i| (i as u32, i as u32 + 1)).collect();
    CsrGraph::from_edges(n, &edges)
}

fn make_grid(side: u32) -> CsrGraph {
    let mut edges = Vec::new();
    for r in 0..side {
        for c in 0..side {
            let v = r * side + c;
            if c + 1 < side {
                edges.push((v, v + 1));
            }
            if r + 1 < side {
                edges.push((v, v + side));
            }
        }
    }
    CsrGraph::from_edges((side * side) as usize, &edges)
}

fn make_random(n: usize, m: usize, seed: u64) -> CsrGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges = Vec::with_capacity(m);
    while edges.len() < m {
        let u = rng.gen_range(0..n as u32);
        let v = rng.gen_range(0..n as u32);
        if u != v {
            edges.push((u, v));
        }
    }
    CsrGraph::from_edges(n, &edges)
}

/// Benchmark the root BFS alone
fn bench_root_bfs(c: &mut Criterion) {
    let mut group = c.benchmark_group("bfs/root");

    for side in [32u32, 128] {
        let g = make_grid(side);
        group.throughput(Throughput::Elements(g.num_vertices() as u64));
        group.bench_with_input(BenchmarkId::new("grid", side), &g, |b, g| {
            b.iter(|| black_box(bfs_tree(g, NodeId(0)).unwrap()));
        });
    }

    group.finish();
}

/// Benchmark the full decomposition on structured graphs
fn bench_structured(c: &mut Criterion) {
    let mut group = c.benchmark_group("bicc/structured");

    for n in [256usize, 1024] {
        let cycle = make_cycle(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("cycle", n), &cycle, |b, g| {
            b.iter(|| black_box(biconnected_components(g).unwrap().num_components()));
        });

        let path = make_path(n);
        group.bench_with_input(BenchmarkId::new("path", n), &path, |b, g| {
            b.iter(|| black_box(biconnected_components(g).unwrap().num_components()));
        });
    }

    for side in [16u32, 48] {
        let grid = make_grid(side);
        group.throughput(Throughput::Elements(grid.num_vertices() as u64));
        group.bench_with_input(BenchmarkId::new("grid", side), &grid, |b, g| {
            b.iter(|| black_box(biconnected_components(g).unwrap().num_components()));
        });
    }

    group.finish();
}

/// Benchmark random sparse graphs with and without the edge map
fn bench_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("bicc/random");
    let count_only = BiccConfig::new().with_record_edges(false);

    for n in [1_000usize, 10_000] {
        let g = make_random(n, n * 3 / 2, 0x5eed);
        group.throughput(Throughput::Elements(g.num_edges() as u64));

        group.bench_with_input(BenchmarkId::new("with_edges", n), &g, |b, g| {
            b.iter(|| black_box(biconnected_components(g).unwrap().num_components()));
        });

        group.bench_with_input(BenchmarkId::new("count_only", n), &g, |b, g| {
            b.iter(|| {
                black_box(
                    biconnected_components_with_config(g, &count_only)
                        .unwrap()
                        .num_components(),
                )
            });
        });
    }

    group.finish();
}

/// Benchmark the text loader
fn bench_loader(c: &mut Criterion) {
    let mut group = c.benchmark_group("loader");

    let n = 10_000usize;
    let mut text = format!("{} {}\n", n, n - 1);
    for i in 0..n - 1 {
        text.push_str(&format!("{} {}\n", i, i + 1));
    }
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("path_10k", |b| {
        b.iter(|| black_box(parse_edge_list(&text).unwrap()));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_root_bfs,
    bench_structured,
    bench_random,
    bench_loader
);
criterion_main!(benches);
