use criterion::criterion_group;
use criterion::criterion_main;
use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use skiplist::{Config, LevelDistribution, SkipList};

fn generate_keys(n: usize) -> Vec<i32> {
    let mut keys: Vec<i32> = (0..n as i32).collect();
    keys.shuffle(&mut StdRng::seed_from_u64(42));
    keys
}
fn build(max_levels: usize, distribution: LevelDistribution, keys: &[i32]) -> SkipList {
    let config = Config::default()
        .set_max_levels(max_levels)
        .set_seed(42)
        .set_distribution(distribution);
    let mut list = SkipList::with_config(config).unwrap();
    for key in keys {
        list.insert(*key, 'v').unwrap();
    }
    list
}
fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for n in [1_000usize, 10_000, 100_000] {
        let keys = generate_keys(n);
        group.throughput(Throughput::Elements(n as u64));
        for (name, distribution) in [
            ("uniform", LevelDistribution::Uniform),
            ("geometric", LevelDistribution::geometric()),
        ] {
            group.bench_with_input(BenchmarkId::new(name, n), &keys, |b, keys| {
                b.iter(|| build(16, distribution, keys));
            });
        }
    }
    group.finish();
}
fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    for n in [1_000usize, 10_000, 100_000] {
        let keys = generate_keys(n);
        group.throughput(Throughput::Elements(n as u64));
        for (name, distribution) in [
            ("uniform", LevelDistribution::Uniform),
            ("geometric", LevelDistribution::geometric()),
        ] {
            let list = build(16, distribution, &keys);
            group.bench_with_input(BenchmarkId::new(name, n), &keys, |b, keys| {
                b.iter(|| {
                    for key in keys {
                        assert!(list.search(*key).is_some());
                    }
                });
            });
        }
    }
    group.finish();
}
criterion_group!(benches, bench_insert, bench_search);
criterion_main!(benches);
