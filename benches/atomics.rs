use std::sync::atomic::{AtomicU64 as StdAtomicU64, Ordering};

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use quark::{AtomicBool, AtomicF64, AtomicString, AtomicU64};

fn bench_u64(c: &mut Criterion) {
    let mut group = c.benchmark_group("u64 add");

    group.bench_function("std_fetch_add", |b| {
        let cell = StdAtomicU64::new(0);
        b.iter(|| black_box(cell.fetch_add(black_box(1), Ordering::SeqCst)));
    });

    group.bench_function("quark_add", |b| {
        let cell = AtomicU64::new(0);
        b.iter(|| black_box(cell.add(black_box(1))));
    });

    group.finish();
}

fn bench_f64_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("f64 add (CAS loop)");

    group.bench_function("uncontended", |b| {
        let cell = AtomicF64::new(0.0);
        b.iter(|| black_box(cell.add(black_box(1.0))));
    });

    group.finish();
}

fn bench_bool_toggle(c: &mut Criterion) {
    let mut group = c.benchmark_group("bool");

    group.bench_function("toggle", |b| {
        let flag = AtomicBool::new(false);
        b.iter(|| black_box(flag.toggle()));
    });

    group.bench_function("swap", |b| {
        let flag = AtomicBool::new(false);
        b.iter(|| black_box(flag.swap(black_box(true))));
    });

    group.finish();
}

fn bench_string(c: &mut Criterion) {
    let mut group = c.benchmark_group("string");

    group.bench_function("load", |b| {
        let s = AtomicString::new("benchmark");
        b.iter(|| black_box(s.load()));
    });

    group.bench_function("store", |b| {
        let s = AtomicString::new("benchmark");
        b.iter(|| s.store(black_box("replacement")));
    });

    group.bench_function("content_cas_hit", |b| {
        let s = AtomicString::new("a");
        b.iter(|| {
            let current = s.load();
            black_box(s.compare_and_swap(&current, current.clone()));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_u64, bench_f64_add, bench_bool_toggle, bench_string);
criterion_main!(benches);
