use criterion::{criterion_group, criterion_main, Criterion};
use handle_collections::tree::Bst;

mod bench_data;
use bench_data::{rand_keys, seq_keys, LARGE};

// Benches -------------------------------------------------------------------------------------------------------------

fn bench_from_rand(c: &mut Criterion) {
    let rand_10k = rand_keys(LARGE);

    c.bench_function("bst_from_10_000_rand", |b| {
        b.iter(|| {
            let mut t: Bst<i64> = Bst::new(LARGE);
            let mut root = 0;
            for (i, k) in rand_10k.iter().enumerate() {
                let _ = t.insert(i + 1, *k, &mut root);
            }
        })
    });
}

fn bench_from_seq(c: &mut Criterion) {
    let seq_10k = seq_keys(LARGE);

    c.bench_function("bst_from_10_000_seq", |b| {
        b.iter(|| {
            let mut t: Bst<i64> = Bst::new(LARGE);
            let mut root = 0;
            for (i, k) in seq_10k.iter().enumerate() {
                let _ = t.insert(i + 1, *k, &mut root);
            }
        })
    });
}

criterion_group!(benches, bench_from_rand, bench_from_seq);
criterion_main!(benches);
