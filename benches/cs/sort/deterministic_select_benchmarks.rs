use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use deterministic_select::sort::{select, Metrics, PartitionScheme, Selector};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn random_input(n: usize) -> Vec<i32> {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    (0..n).map(|_| rng.gen()).collect()
}

fn bench_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_median");
    for &n in &[1_000usize, 10_000, 100_000] {
        let input = random_input(n);
        let k = n / 2;

        group.bench_with_input(BenchmarkId::new("median_of_medians", n), &input, |b, input| {
            b.iter(|| {
                let mut m = Metrics::new();
                black_box(select(black_box(input), k, &mut m).unwrap())
            })
        });

        let three_way = Selector::new().with_partition(PartitionScheme::ThreeWay);
        group.bench_with_input(BenchmarkId::new("median_of_medians_three_way", n), &input, |b, input| {
            b.iter(|| {
                let mut m = Metrics::new();
                black_box(three_way.select(black_box(input), k, &mut m).unwrap())
            })
        });

        group.bench_with_input(BenchmarkId::new("std_select_nth_unstable", n), &input, |b, input| {
            b.iter(|| {
                let mut copy = input.clone();
                black_box(*copy.select_nth_unstable(k).1)
            })
        });

        group.bench_with_input(BenchmarkId::new("std_sort_unstable", n), &input, |b, input| {
            b.iter(|| {
                let mut copy = input.clone();
                copy.sort_unstable();
                black_box(copy[k])
            })
        });
    }
    group.finish();
}

fn bench_duplicates(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_duplicates");
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let input: Vec<i32> = (0..2_000).map(|_| rng.gen_range(0..4)).collect();
    for scheme in [PartitionScheme::Lomuto, PartitionScheme::ThreeWay] {
        let selector = Selector::new().with_partition(scheme);
        group.bench_function(format!("{:?}", scheme), |b| {
            b.iter(|| {
                let mut m = Metrics::new();
                black_box(selector.select(black_box(&input), 1_000, &mut m).unwrap())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_select, bench_duplicates);
criterion_main!(benches);
