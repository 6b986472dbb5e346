//! Benchmarks for the O(n²) relaxation passes.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec3;
use molbox::body::{Atom, Body, BodyKind};
use molbox::collision::{bounce_walls, separate_pairs, settle};
use molbox::spawn::random_unit;
use molbox::tuning::Tuning;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn crowded_bodies(count: usize, rng: &mut SmallRng) -> Vec<Body> {
    (0..count)
        .map(|_| {
            let mut body = Body::new(
                BodyKind::Free,
                vec![Atom::new(Vec3::ZERO, Vec3::ONE, 12.0, None)],
            );
            body.position = random_unit(rng) * rng.gen_range(0.0..30.0);
            body
        })
        .collect()
}

fn bench_separate_pairs(c: &mut Criterion) {
    let mut group = c.benchmark_group("separate_pairs");
    let tuning = Tuning::default();
    for count in [5usize, 20, 50] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let mut rng = SmallRng::seed_from_u64(1);
            let bodies = crowded_bodies(count, &mut rng);
            b.iter(|| {
                let mut pass = bodies.clone();
                separate_pairs(black_box(&mut pass), &tuning, &mut rng);
                pass
            })
        });
    }
    group.finish();
}

fn bench_settle(c: &mut Criterion) {
    let mut group = c.benchmark_group("settle");
    let tuning = Tuning::default();
    for count in [5usize, 20] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let mut rng = SmallRng::seed_from_u64(2);
            let bodies = crowded_bodies(count, &mut rng);
            b.iter(|| {
                let mut pass = bodies.clone();
                settle(black_box(&mut pass), 220.0, &tuning, &mut rng);
                pass
            })
        });
    }
    group.finish();
}

fn bench_bounce_walls(c: &mut Criterion) {
    let tuning = Tuning::default();
    c.bench_function("bounce_walls", |b| {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut body = Body::new(
            BodyKind::Free,
            vec![Atom::new(Vec3::ZERO, Vec3::ONE, 12.0, None)],
        );
        body.position = Vec3::new(95.0, -98.0, 0.0);
        body.velocity = Vec3::new(3.0, -2.0, 1.0);
        b.iter(|| {
            let mut pass = body.clone();
            bounce_walls(black_box(&mut pass), 220.0, &tuning, &mut rng);
            pass
        })
    });
}

criterion_group!(benches, bench_separate_pairs, bench_settle, bench_bounce_walls);
criterion_main!(benches);
