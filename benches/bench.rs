use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use laguerre_poly::{
    __testing::{test_case_roots, RandStreamC64Cartesian, RandStreamR64},
    complex, poly,
    roots::{laguerre, laguerre_deflate, LaguerreVariant, SolverOptions},
    Poly64,
};

criterion_main!(micro_benches, realistic_benches);
criterion_group!(micro_benches, single_step, deflate);

pub fn single_step(c: &mut Criterion) {
    let p = poly![140.0, -13.0, -8.0, 1.0];
    let options = SolverOptions::default().with_variant(LaguerreVariant::Classic);
    c.bench_function("laguerre cubic", |b| {
        b.iter(|| black_box(laguerre(black_box(&p), complex!(0.5, 0.5), &options)));
    });
}

pub fn deflate(c: &mut Criterion) {
    let mut group = c.benchmark_group("deflate");
    for n in [1, 2, 4, 8, 16, 32, 64] {
        let p = Poly64::from_real_slice(&vec![1.0; n + 1]);
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| black_box(black_box(&p).deflate(complex!(0.5, 0.5))));
        });
    }
    group.finish();
}

criterion_group!(realistic_benches, all_roots);

fn test_polys(n: usize) -> Vec<Poly64> {
    let mut roots_stream = RandStreamC64Cartesian::new(1, -2.0, 2.0, -2.0, 2.0);
    let mut scale_stream = RandStreamR64::new(2, 0.1, 10.0);
    (0..8)
        .map(|_| test_case_roots(&mut roots_stream, &mut scale_stream, n).0)
        .collect()
}

pub fn all_roots(c: &mut Criterion) {
    for (name, variant) in [
        ("all roots biased", LaguerreVariant::Biased),
        ("all roots classic", LaguerreVariant::Classic),
    ] {
        let options = SolverOptions::default().with_variant(variant);
        let mut group = c.benchmark_group(name);
        for n in [2, 4, 8, 16] {
            let polys = test_polys(n);
            group.bench_function(BenchmarkId::from_parameter(n), |b| {
                let mut rng = fastrand::Rng::with_seed(3);
                b.iter(|| {
                    for p in &polys {
                        black_box(laguerre_deflate(black_box(p), &mut rng, &options).ok());
                    }
                });
            });
        }
        group.finish();
    }
}
