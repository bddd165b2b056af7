use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use ld_ad::{Dual, Scalar};
use std::hint::black_box;

/// sum_i [k_i ln(rate) - rate - ln Γ(k_i + 1)]
fn poisson_lp<S: Scalar>(ks: &[f64], rate: S) -> S {
    ks.iter().map(|&k| S::from_f64(k) * rate.ln() - rate - S::from_f64(k + 1.0).ln_gamma()).sum()
}

fn bench_dual_vs_plain(c: &mut Criterion) {
    let mut group = c.benchmark_group("ad_dual");

    for n in [16usize, 256, 4096] {
        let ks: Vec<f64> = (0..n).map(|i| (i % 17) as f64).collect();

        group.bench_with_input(BenchmarkId::new("plain_f64", n), &ks, |b, ks| {
            b.iter(|| black_box(poisson_lp(ks, black_box(3.2_f64))))
        });

        group.bench_with_input(BenchmarkId::new("dual_gradient", n), &ks, |b, ks| {
            b.iter(|| black_box(poisson_lp(ks, black_box(Dual::var(3.2))).dot))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_dual_vs_plain);
criterion_main!(benches);
