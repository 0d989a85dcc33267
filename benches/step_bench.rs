//! Step generation benchmarks

use bst_steps::{steps, Key, Operation, Tree};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// 1000 keys in a scrambled (but fixed) insertion order
fn scrambled_tree() -> Tree {
    Tree::from_values((0..1000).map(|i: Key| (i * 7919) % 10_007))
}

fn benchmark_generators(c: &mut Criterion) {
    let tree = scrambled_tree();

    c.bench_function("search_1000", |b| {
        b.iter(|| steps::search(black_box(&tree), black_box(5_000)));
    });

    c.bench_function("select_1000", |b| {
        b.iter(|| steps::select(black_box(&tree), black_box(500)));
    });

    c.bench_function("inorder_1000", |b| {
        b.iter(|| steps::inorder(black_box(&tree)));
    });
}

fn benchmark_updates(c: &mut Criterion) {
    let tree = scrambled_tree();

    c.bench_function("remove_run_1000", |b| {
        b.iter(|| Operation::Remove(black_box(7919)).run(&tree));
    });

    c.bench_function("build_1000", |b| {
        b.iter(scrambled_tree);
    });
}

criterion_group!(benches, benchmark_generators, benchmark_updates);
criterion_main!(benches);
