// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use iced_flix::catalog::{Catalog, ItemId, MockGenerator};
use std::hint::black_box;

fn catalog_generation_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_generation");

    group.bench_function("default_layout", |b| {
        let mut generator = MockGenerator::seeded(42);
        b.iter(|| black_box(Catalog::generate(&mut generator)));
    });

    group.bench_function("generate_1000", |b| {
        let mut generator = MockGenerator::seeded(42);
        b.iter(|| black_box(generator.generate(1000, 0)));
    });

    let catalog = Catalog::generate(&mut MockGenerator::seeded(42));
    group.bench_function("find_last_item", |b| {
        b.iter(|| black_box(catalog.find(black_box(ItemId(90)))));
    });

    group.finish();
}

criterion_group!(benches, catalog_generation_benchmark);
criterion_main!(benches);
