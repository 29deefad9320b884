use criterion::{criterion_group, criterion_main, Criterion};
use egui::Pos2;
use likeview::{BurstConfig, ParticleEngine};
use std::hint::black_box;

fn bench_burst(c: &mut Criterion) {
    c.bench_function("generate_burst", |b| {
        let mut engine = ParticleEngine::with_seed(BurstConfig::default(), 1);
        b.iter(|| engine.on_trigger(black_box(Pos2::new(100.0, 100.0))));
    });

    c.bench_function("run_burst_at_60hz", |b| {
        let mut engine = ParticleEngine::with_seed(BurstConfig::default(), 2);
        b.iter(|| {
            engine.on_trigger(Pos2::new(100.0, 100.0));
            let mut now = 0;
            while !engine.on_frame(black_box(now)).completed {
                now += 16;
            }
        });
    });
}

criterion_group!(benches, bench_burst);
criterion_main!(benches);
