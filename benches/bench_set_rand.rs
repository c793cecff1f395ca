use criterion::{criterion_group, criterion_main, Criterion};
use handle_collections::heap::Dheap;

mod bench_data;
use bench_data::{rand_keys, LARGE, MEDIUM, SMALL};

// Benches -------------------------------------------------------------------------------------------------------------

fn bench_insert(c: &mut Criterion) {
    c.bench_function("dheap_insert_100_rand", |b| {
        b.iter(|| {
            let mut h: Dheap<i64> = Dheap::new(SMALL, 2);
            for (i, k) in rand_keys(SMALL).into_iter().enumerate() {
                let _ = h.insert(i + 1, k);
            }
        })
    });

    c.bench_function("dheap_insert_1_000_rand", |b| {
        b.iter(|| {
            let mut h: Dheap<i64> = Dheap::new(MEDIUM, 4);
            for (i, k) in rand_keys(MEDIUM).into_iter().enumerate() {
                let _ = h.insert(i + 1, k);
            }
        })
    });

    c.bench_function("dheap_insert_10_000_rand", |b| {
        b.iter(|| {
            let mut h: Dheap<i64> = Dheap::new(LARGE, 4);
            for (i, k) in rand_keys(LARGE).into_iter().enumerate() {
                let _ = h.insert(i + 1, k);
            }
        })
    });
}

fn bench_drain(c: &mut Criterion) {
    let keys_1k = rand_keys(MEDIUM);

    c.bench_function("dheap_delete_min_1_000_rand", |b| {
        b.iter(|| {
            let mut h: Dheap<i64> = Dheap::new(MEDIUM, 4);
            for (i, k) in keys_1k.iter().enumerate() {
                let _ = h.insert(i + 1, *k);
            }
            while h.find_min() != 0 {
                h.delete_min();
            }
        })
    });
}

fn bench_change_key(c: &mut Criterion) {
    let keys_1k = rand_keys(MEDIUM);
    let mut h: Dheap<i64> = Dheap::new(MEDIUM, 4);
    for (i, k) in keys_1k.iter().enumerate() {
        let _ = h.insert(i + 1, *k);
    }

    c.bench_function("dheap_change_key_1_000_rand", |b| {
        b.iter(|| {
            for i in 1..=MEDIUM {
                let _ = h.change_key(i, (i as i64) * 2);
            }
        })
    });
}

// Runner --------------------------------------------------------------------------------------------------------------

criterion_group!(benches, bench_insert, bench_drain, bench_change_key);
criterion_main!(benches);
