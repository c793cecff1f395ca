use criterion::{criterion_group, criterion_main, Criterion};
use handle_collections::hash::HashSet;

mod bench_data;
use bench_data::{seq_keys, LARGE, MEDIUM, SMALL};

fn int_hash(k: &i64, which: u8) -> u32 {
    let k = *k as u64;
    if which == 0 {
        (k.wrapping_mul(0x9E3779B97F4A7C15) >> 32) as u32
    } else {
        (k.wrapping_mul(0xC2B2AE3D27D4EB4F) >> 32) as u32
    }
}

// Benches -------------------------------------------------------------------------------------------------------------

fn bench_insert(c: &mut Criterion) {
    c.bench_function("hashset_insert_100_seq", |b| {
        b.iter(|| {
            let mut hs: HashSet<i64> = HashSet::new(SMALL, int_hash);
            for k in seq_keys(SMALL) {
                let _ = hs.insert(k);
            }
        })
    });

    c.bench_function("hashset_insert_1_000_seq", |b| {
        b.iter(|| {
            let mut hs: HashSet<i64> = HashSet::new(MEDIUM, int_hash);
            for k in seq_keys(MEDIUM) {
                let _ = hs.insert(k);
            }
        })
    });

    c.bench_function("hashset_insert_10_000_seq", |b| {
        b.iter(|| {
            let mut hs: HashSet<i64> = HashSet::new(LARGE, int_hash);
            for k in seq_keys(LARGE) {
                let _ = hs.insert(k);
            }
        })
    });
}

fn bench_find(c: &mut Criterion) {
    let keys_1k = seq_keys(MEDIUM);
    let mut hs_1k: HashSet<i64> = HashSet::new(MEDIUM, int_hash);
    for k in &keys_1k {
        let _ = hs_1k.insert(*k);
    }

    c.bench_function("hashset_find_1_000_seq", |b| {
        b.iter(|| {
            for k in &keys_1k {
                let _ = hs_1k.find(k);
            }
        })
    });

    let keys_10k = seq_keys(LARGE);
    let mut hs_10k: HashSet<i64> = HashSet::new(LARGE, int_hash);
    for k in &keys_10k {
        let _ = hs_10k.insert(*k);
    }

    c.bench_function("hashset_find_10_000_seq", |b| {
        b.iter(|| {
            for k in &keys_10k {
                let _ = hs_10k.find(k);
            }
        })
    });
}

fn bench_remove(c: &mut Criterion) {
    let keys_1k = seq_keys(MEDIUM);

    c.bench_function("hashset_remove_1_000_seq", |b| {
        b.iter(|| {
            let mut hs: HashSet<i64> = HashSet::new(MEDIUM, int_hash);
            for k in &keys_1k {
                let _ = hs.insert(*k);
            }
            for k in &keys_1k {
                let _ = hs.remove(k);
            }
        })
    });
}

// Runner --------------------------------------------------------------------------------------------------------------

criterion_group!(benches, bench_insert, bench_find, bench_remove);
criterion_main!(benches);
