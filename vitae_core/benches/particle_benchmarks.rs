//! Performance benchmarks for the particle simulation

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;
use vitae_core::animation::{ParticleField, RecordingSurface, Vec2};
use vitae_core::context::{MotionPreference, SiteContext};
use vitae_core::utils::config::Config;

fn field_for_width(width: f32) -> ParticleField {
    let ctx = SiteContext::new(Config::bundled().unwrap(), MotionPreference::Full);
    ParticleField::new(&ctx, Vec2::new(width, 900.0), &mut StdRng::seed_from_u64(1))
}

fn bench_particle_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("particle_tick");
    // 320px gives ~21 particles, 1200px hits the cap of 80
    for width in [320.0_f32, 768.0, 1200.0] {
        group.bench_with_input(BenchmarkId::from_parameter(width as u32), &width, |b, &width| {
            let mut field = field_for_width(width);
            field.set_pointer(Some(Vec2::new(width / 2.0, 450.0)));
            let mut surface = RecordingSurface::new(width, 900.0);
            b.iter(|| {
                field.tick(black_box(&mut surface));
            });
        });
    }
    group.finish();
}

fn bench_particle_step_only(c: &mut Criterion) {
    c.bench_function("particle_step_capped", |b| {
        let mut field = field_for_width(1920.0);
        b.iter(|| {
            field.step();
            black_box(field.particles());
        });
    });
}

fn bench_field_seeding(c: &mut Criterion) {
    let ctx = SiteContext::new(Config::bundled().unwrap(), MotionPreference::Full);
    c.bench_function("particle_field_seed", |b| {
        let mut rng = StdRng::seed_from_u64(7);
        b.iter(|| {
            let field = ParticleField::new(&ctx, black_box(Vec2::new(1200.0, 800.0)), &mut rng);
            black_box(field);
        });
    });
}

criterion_group!(
    benches,
    bench_particle_tick,
    bench_particle_step_only,
    bench_field_seeding
);
criterion_main!(benches);
