use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use int_splay::{Access, DepthFirst, Emit, SplayTree};
use std::collections::BTreeMap;
use std::hint::black_box;

const N: usize = 10_000;

// ─── Helper functions to generate key sequences ─────────────────────────────

fn ordered_keys(n: usize) -> Vec<i32> {
    (0..n as i32).collect()
}

fn random_keys(n: usize) -> Vec<i32> {
    // Use a simple LCG for deterministic pseudo-random sequence
    let mut keys = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        keys.push((x >> 33) as i32);
    }
    keys
}

fn splay_tree_from(keys: &[i32]) -> SplayTree<i32> {
    let mut tree = SplayTree::new();
    for &k in keys {
        tree.insert(k, k).unwrap();
    }
    tree
}

fn btree_map_from(keys: &[i32]) -> BTreeMap<i32, i32> {
    keys.iter().map(|&k| (k, k)).collect()
}

// ─── Insert ─────────────────────────────────────────────────────────────────

fn bench_insert_ordered(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_ordered");

    group.bench_function(BenchmarkId::new("SplayTree", N), |b| {
        b.iter(|| {
            let mut tree = SplayTree::new();
            for i in 0..N as i32 {
                tree.insert(i, i).unwrap();
            }
            tree
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| {
            let mut map = BTreeMap::new();
            for i in 0..N as i32 {
                map.insert(i, i);
            }
            map
        });
    });

    group.finish();
}

fn bench_insert_reverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_reverse");

    group.bench_function(BenchmarkId::new("SplayTree", N), |b| {
        b.iter(|| {
            let mut tree = SplayTree::new();
            for i in (0..N as i32).rev() {
                tree.insert(i, i).unwrap();
            }
            tree
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| {
            let mut map = BTreeMap::new();
            for i in (0..N as i32).rev() {
                map.insert(i, i);
            }
            map
        });
    });

    group.finish();
}

fn bench_insert_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let mut group = c.benchmark_group("insert_random");

    group.bench_function(BenchmarkId::new("SplayTree", N), |b| {
        b.iter(|| splay_tree_from(&keys));
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| btree_map_from(&keys));
    });

    group.finish();
}

// ─── Lookup ─────────────────────────────────────────────────────────────────

fn bench_get_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let tree = splay_tree_from(&keys);
    let map = btree_map_from(&keys);
    let mut group = c.benchmark_group("get_random");

    group.bench_function(BenchmarkId::new("SplayTree", N), |b| {
        b.iter(|| {
            for k in &keys {
                black_box(tree.get(*k));
            }
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| {
            for k in &keys {
                black_box(map.get(k));
            }
        });
    });

    group.finish();
}

fn bench_splay_search_hot_keys(c: &mut Criterion) {
    let keys = random_keys(N);
    // A small working set looked up over and over.
    let hot: Vec<i32> = keys.iter().copied().step_by(N / 16).collect();
    let mut group = c.benchmark_group("search_hot_keys");

    group.bench_function(BenchmarkId::new("SplayTree/splay", N), |b| {
        let mut tree = splay_tree_from(&keys);
        b.iter(|| {
            for k in &hot {
                black_box(tree.search(*k, Access::Splay).map(|node| node.key()));
            }
        });
    });

    group.bench_function(BenchmarkId::new("SplayTree/peek", N), |b| {
        let tree = splay_tree_from(&keys);
        b.iter(|| {
            for k in &hot {
                black_box(tree.get(*k));
            }
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        let map = btree_map_from(&keys);
        b.iter(|| {
            for k in &hot {
                black_box(map.get(k));
            }
        });
    });

    group.finish();
}

// ─── Remove ─────────────────────────────────────────────────────────────────

fn bench_remove_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let mut group = c.benchmark_group("remove_random");

    group.bench_function(BenchmarkId::new("SplayTree", N), |b| {
        b.iter_batched(
            || splay_tree_from(&keys),
            |mut tree| {
                for k in &keys {
                    tree.remove(*k);
                }
                tree
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter_batched(
            || btree_map_from(&keys),
            |mut map| {
                for k in &keys {
                    map.remove(k);
                }
                map
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

// ─── Traversal ──────────────────────────────────────────────────────────────

fn bench_in_order_keys(c: &mut Criterion) {
    let keys = ordered_keys(N);
    let tree = splay_tree_from(&keys);
    let map = btree_map_from(&keys);
    let mut group = c.benchmark_group("in_order_keys");

    group.bench_function(BenchmarkId::new("SplayTree", N), |b| {
        b.iter(|| tree.depth_first(DepthFirst::InOrder, Emit::Keys).unwrap());
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| map.keys().copied().collect::<Vec<_>>());
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_insert_ordered,
    bench_insert_reverse,
    bench_insert_random,
    bench_get_random,
    bench_splay_search_hot_keys,
    bench_remove_random,
    bench_in_order_keys,
);
criterion_main!(benches);
