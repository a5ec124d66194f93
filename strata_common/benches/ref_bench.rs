//! Ref allocation and handle-traffic benchmarks.
//!
//! Measures `make_ref` allocation and clone/drop cost — the operations
//! every component performs on shared values each cycle.

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use strata_common::refs::make_ref;

fn bench_make_ref(c: &mut Criterion) {
    c.bench_function("make_ref_u64", |b| {
        b.iter(|| make_ref(black_box(42u64)));
    });

    c.bench_function("make_ref_1k_buffer", |b| {
        b.iter(|| make_ref(black_box([0u8; 1024])));
    });
}

fn bench_clone_drop(c: &mut Criterion) {
    let shared = make_ref(vec![0u8; 4096]);

    c.bench_function("ref_clone_drop", |b| {
        b.iter(|| black_box(shared.clone()));
    });
}

criterion_group!(benches, bench_make_ref, bench_clone_drop);
criterion_main!(benches);
