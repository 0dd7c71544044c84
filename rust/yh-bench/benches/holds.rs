use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use yh_bench::gen_hands;

fn bench_generate_holds(c: &mut Criterion) {
    let mut g = c.benchmark_group("yh_core_holds");
    for &n in &[256usize, 4096usize] {
        let hands = gen_hands(n, 5, 6);
        g.bench_with_input(BenchmarkId::new("generate_holds_batch", n), &hands, |b, hs| {
            b.iter(|| {
                for h in hs.iter() {
                    black_box(yh_core::generate_holds(black_box(h)));
                }
            })
        });
    }
    g.finish();
}

fn bench_generate_outcomes(c: &mut Criterion) {
    let mut g = c.benchmark_group("yh_core_outcomes");
    let faces = yh_core::die_faces(6);
    for free in 1usize..=5 {
        g.bench_with_input(BenchmarkId::new("generate_outcomes_d6", free), &free, |b, &k| {
            b.iter(|| black_box(yh_core::generate_outcomes(black_box(&faces), k)))
        });
    }
    g.finish();
}

criterion_group!(benches, bench_generate_holds, bench_generate_outcomes);
criterion_main!(benches);
