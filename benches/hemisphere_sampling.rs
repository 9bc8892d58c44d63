use cgmath::{InnerSpace, Vector3, Zero};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use unit_sampling::{
    ConcentricUnitDisk, CosineWeightedUnitHemisphere, RngSource, SquareMapping, UnitDisk,
    UnitHemisphere,
};

fn bench_hemisphere_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("hemisphere");

    let uniform = UnitHemisphere::<f32>::new();
    let mut source = RngSource(StdRng::seed_from_u64(0));
    group.bench_function("uniform", |b| b.iter(|| uniform.sample_with(&mut source)));

    let cosine = CosineWeightedUnitHemisphere::<f32>::new();
    let mut source = RngSource(StdRng::seed_from_u64(0));
    group.bench_function("cosine_weighted", |b| {
        b.iter(|| cosine.sample_with(&mut source))
    });

    let mut rng = StdRng::seed_from_u64(0);
    group.bench_function("naive", |b| b.iter(|| uniform_naive(&mut rng)));

    group.finish();
}

fn bench_disk_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("disk");

    let disk = UnitDisk::<f32>::new();
    group.bench_function("polar", |b| {
        let mut code = 0_u64;
        b.iter(|| {
            code = code.wrapping_add(0x9e37_79b9_7f4a_7c15);
            disk.sample_index(black_box(code))
        })
    });

    let concentric = ConcentricUnitDisk::<f32>::new();
    group.bench_function("concentric", |b| {
        let mut code = 0_u64;
        b.iter(|| {
            code = code.wrapping_add(0x9e37_79b9_7f4a_7c15);
            concentric.sample_index(black_box(code))
        })
    });

    group.finish();
}

/// Naive rejection algorithm for performance comparison
fn uniform_naive<R: Rng>(rng: &mut R) -> Vector3<f32> {
    loop {
        let dir = Vector3::new(
            rng.gen_range(-1.0_f32..1.0),
            rng.gen_range(-1.0_f32..1.0),
            rng.gen_range(0.0_f32..1.0),
        );

        // reject the corners of the box and, by pure chance, the zero vector
        if !dir.is_zero() && dir.magnitude2() <= 1.0 {
            return dir.normalize();
        }
    }
}

criterion_group!(benches, bench_hemisphere_sampling, bench_disk_sampling);
criterion_main!(benches);
