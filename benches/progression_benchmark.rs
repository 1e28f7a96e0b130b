//! Benchmark for the progression reducer and persistence round-trip

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pattern_lab_core::progress::{ProgressionEngine, ProgressSnapshot, UserProgress};
use pattern_lab_core::store::MemoryStore;

fn bench_grant_xp(c: &mut Criterion) {
    c.bench_function("grant_xp_1000_calls", |b| {
        b.iter(|| {
            let mut progress = UserProgress::default();
            for i in 0..1000u64 {
                progress.grant_xp(black_box(i % 40), chrono::Utc::now());
            }
            black_box(progress.total_xp)
        })
    });
}

fn bench_complete_patterns(c: &mut Criterion) {
    let ids: Vec<String> = (0..200).map(|i| format!("pattern-{}", i)).collect();

    c.bench_function("complete_200_patterns_with_persist", |b| {
        b.iter(|| {
            let mut engine = ProgressionEngine::new(MemoryStore::new());
            for id in &ids {
                engine.complete_pattern(black_box(id), 25).unwrap();
            }
            black_box(engine.progress().level)
        })
    });
}

fn bench_snapshot_round_trip(c: &mut Criterion) {
    let mut progress = UserProgress::default();
    for i in 0..200 {
        progress.record_completion(&format!("pattern-{}", i), 25, chrono::Utc::now());
    }
    let payload = ProgressSnapshot::of(&progress).to_json().unwrap();

    c.bench_function("snapshot_decode", |b| {
        b.iter(|| {
            let mut fresh = UserProgress::default();
            pattern_lab_core::progress::apply_snapshot(&mut fresh, black_box(&payload));
            black_box(fresh.total_xp)
        })
    });
}

criterion_group!(
    benches,
    bench_grant_xp,
    bench_complete_patterns,
    bench_snapshot_round_trip
);
criterion_main!(benches);
