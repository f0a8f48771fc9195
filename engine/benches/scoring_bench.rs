use criterion::{criterion_group, criterion_main, Criterion};
use engine::RecEngine;

fn bench_recommend(c: &mut Criterion) {
    let engine = RecEngine::new();
    for i in 0..1_000u32 {
        engine.add_product(
            format!("Product {i}"),
            format!("portable wireless widget variant {} with trim {}", i % 37, i % 11),
            None,
        );
    }
    engine.build();
    for id in [1, 5, 42, 77, 303] {
        engine.like(id).unwrap();
    }
    c.bench_function("recommend_top10_1k_catalog", |b| {
        b.iter(|| engine.recommend(10).unwrap())
    });
}

criterion_group!(benches, bench_recommend);
criterion_main!(benches);
