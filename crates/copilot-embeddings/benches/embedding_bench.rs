use copilot_core::config::{BackendsConfig, EmbeddingConfig};
use copilot_embeddings::{EmbeddingEngine, HashFallback};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_hash_fallback(c: &mut Criterion) {
    let fallback = HashFallback::new(384);
    c.bench_function("hash_fallback_384", |b| {
        b.iter(|| fallback.generate(black_box("the shared printer in accounting is offline")))
    });
}

fn bench_engine_batch(c: &mut Criterion) {
    let engine = EmbeddingEngine::new(&EmbeddingConfig::default(), &BackendsConfig::default());
    let texts: Vec<String> = (0..100).map(|i| format!("chunk {i} about vpn setup")).collect();
    c.bench_function("engine_batch_100_no_providers", |b| {
        b.iter(|| engine.embed_batch(black_box(&texts)))
    });
}

criterion_group!(benches, bench_hash_fallback, bench_engine_batch);
criterion_main!(benches);
