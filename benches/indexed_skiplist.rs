use criterion::{Bencher, Criterion, black_box};
use indexed_skiplist::IndexedSkipList;
use rand::prelude::*;

fn filled(size: usize, rng: &mut SmallRng) -> IndexedSkipList<u32> {
    let mut sl = IndexedSkipList::with_seed(rng.random());
    while sl.len() < size {
        let _ = sl.insert(rng.random());
    }
    sl
}

fn bench_insert(b: &mut Bencher, base: usize, inserts: usize) {
    let mut rng = SmallRng::seed_from_u64(0);
    let mut sl = filled(base, &mut rng);

    b.iter(|| {
        for _ in 0..inserts {
            let _ = sl.insert(rng.random());
        }
    });
}

fn bench_rank(b: &mut Bencher, size: usize) {
    let mut rng = SmallRng::seed_from_u64(1);
    let sl = filled(size, &mut rng);
    let values: Vec<_> = sl.iter().copied().collect();

    b.iter(|| {
        for value in &values {
            black_box(sl.rank(value));
        }
    });
}

fn bench_select(b: &mut Bencher, size: usize) {
    let mut rng = SmallRng::seed_from_u64(2);
    let sl = filled(size, &mut rng);

    b.iter(|| {
        for rank in 1..=size {
            black_box(sl.select_by_rank(rank));
        }
    });
}

fn bench_remove(b: &mut Bencher, size: usize) {
    let mut rng = SmallRng::seed_from_u64(3);
    let sl = filled(size, &mut rng);
    let mut values: Vec<_> = sl.iter().copied().collect();
    values.shuffle(&mut rng);

    b.iter_batched(
        || filled(size, &mut SmallRng::seed_from_u64(3)),
        |mut sl| {
            for value in &values {
                black_box(sl.remove(value));
            }
        },
        criterion::BatchSize::LargeInput,
    );
}

pub fn benchmark(c: &mut Criterion) {
    c.bench_function("IndexedSkipList insert 1000 (empty)", |b| {
        bench_insert(b, 0, 1_000);
    });
    c.bench_function("IndexedSkipList insert 1000 (filled)", |b| {
        bench_insert(b, 100_000, 1_000);
    });

    c.bench_function("IndexedSkipList rank 1000", |b| {
        bench_rank(b, 1_000);
    });
    c.bench_function("IndexedSkipList rank 100000", |b| {
        bench_rank(b, 100_000);
    });

    c.bench_function("IndexedSkipList select 1000", |b| {
        bench_select(b, 1_000);
    });
    c.bench_function("IndexedSkipList select 100000", |b| {
        bench_select(b, 100_000);
    });

    c.bench_function("IndexedSkipList remove 10000", |b| {
        bench_remove(b, 10_000);
    });
}
