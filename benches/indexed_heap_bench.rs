//! Criterion benchmarks for the indexed heap and its position indexes
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench indexed_heap_bench
//! ```
//!
//! ## Groups
//!
//! - `add_poll`: fill a heap with random priorities, then drain it
//! - `change_priority`: lower every priority once on a full heap
//! - `dijkstra`: shortest paths on a synthetic sparse graph, the workload
//!   indexed heaps exist for
//!
//! Each group runs once per index backend.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use indexed_heaps::{HashTable, IndexedHeap, PositionIndex};
use rustc_hash::FxHashMap;

struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Lcg { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state >> 16
    }
}

/// Adjacency lists of `(target, weight)`
fn synthetic_sparse(num_nodes: usize, avg_degree: usize, seed: u64) -> Vec<Vec<(u32, u64)>> {
    let mut rng = Lcg::new(seed);
    (0..num_nodes)
        .map(|node| {
            (0..avg_degree)
                .filter_map(|_| {
                    let target = (rng.next() as usize) % num_nodes;
                    let weight = rng.next() % 100 + 1;
                    (target != node).then_some((target as u32, weight))
                })
                .collect()
        })
        .collect()
}

fn add_poll<I: PositionIndex<u32>>(priorities: &[u64]) -> u64 {
    let mut heap: IndexedHeap<u32, u64, I> = IndexedHeap::default();
    for (value, priority) in priorities.iter().enumerate() {
        let _ = heap.add(value as u32, *priority);
    }
    let mut checksum = 0u64;
    while let Ok((_, priority)) = heap.poll_entry() {
        checksum = checksum.wrapping_add(priority);
    }
    checksum
}

fn change_all<I: PositionIndex<u32>>(n: u32) -> usize {
    let mut heap: IndexedHeap<u32, u64, I> = IndexedHeap::default();
    for value in 0..n {
        let _ = heap.add(value, u64::from(n) * 2 + u64::from(value));
    }
    for value in 0..n {
        let _ = heap.change_priority(&value, u64::from(n - value));
    }
    heap.len()
}

fn dijkstra<I: PositionIndex<u32>>(graph: &[Vec<(u32, u64)>], source: u32) -> Vec<u64> {
    let mut dist = vec![u64::MAX; graph.len()];
    let mut heap: IndexedHeap<u32, u64, I> = IndexedHeap::default();
    dist[source as usize] = 0;
    let _ = heap.add(source, 0);

    while let Ok((node, d)) = heap.poll_entry() {
        for &(next, weight) in &graph[node as usize] {
            let candidate = d + weight;
            if candidate < dist[next as usize] {
                dist[next as usize] = candidate;
                if heap.contains(&next) {
                    let _ = heap.change_priority(&next, candidate);
                } else {
                    let _ = heap.add(next, candidate);
                }
            }
        }
    }
    dist
}

fn bench_add_poll(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_poll");
    for size in [100usize, 1_000, 10_000] {
        let mut rng = Lcg::new(7);
        let priorities: Vec<u64> = (0..size).map(|_| rng.next() % 1_000_000).collect();

        group.bench_with_input(BenchmarkId::new("HashTable", size), &priorities, |b, p| {
            b.iter(|| add_poll::<HashTable<u32, usize>>(black_box(p)))
        });
        group.bench_with_input(BenchmarkId::new("FxHashMap", size), &priorities, |b, p| {
            b.iter(|| add_poll::<FxHashMap<u32, usize>>(black_box(p)))
        });
    }
    group.finish();
}

fn bench_change_priority(c: &mut Criterion) {
    let mut group = c.benchmark_group("change_priority");
    for size in [100u32, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("HashTable", size), &size, |b, &n| {
            b.iter(|| change_all::<HashTable<u32, usize>>(black_box(n)))
        });
        group.bench_with_input(BenchmarkId::new("FxHashMap", size), &size, |b, &n| {
            b.iter(|| change_all::<FxHashMap<u32, usize>>(black_box(n)))
        });
    }
    group.finish();
}

fn bench_dijkstra(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra");
    for nodes in [1_000usize, 10_000] {
        let graph = synthetic_sparse(nodes, 4, 42);
        group.bench_with_input(BenchmarkId::new("HashTable", nodes), &graph, |b, g| {
            b.iter(|| dijkstra::<HashTable<u32, usize>>(black_box(g), 0))
        });
        group.bench_with_input(BenchmarkId::new("FxHashMap", nodes), &graph, |b, g| {
            b.iter(|| dijkstra::<FxHashMap<u32, usize>>(black_box(g), 0))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_add_poll,
    bench_change_priority,
    bench_dijkstra
);
criterion_main!(benches);
