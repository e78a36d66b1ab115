use criterion::{black_box, criterion_group, criterion_main, Criterion};
use polyarith::Polynomial;

const N: usize = 256;

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = rand::thread_rng();

    let a: Polynomial<f64> = Polynomial::random(N, &mut rng);
    let b: Polynomial<f64> = Polynomial::random(N, &mut rng);
    let divisor: Polynomial<f64> = Polynomial::random(N / 2, &mut rng);

    c.bench_function("polynomial add", |bencher| {
        bencher.iter(|| black_box(&a) + black_box(&b))
    });

    c.bench_function("polynomial sub", |bencher| {
        bencher.iter(|| black_box(&a) - black_box(&b))
    });

    c.bench_function("polynomial mul", |bencher| {
        bencher.iter(|| black_box(&a) * black_box(&b))
    });

    c.bench_function("polynomial div_rem", |bencher| {
        bencher.iter(|| black_box(&a).div_rem(black_box(&divisor)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
