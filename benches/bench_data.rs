//! Shared key sequences for the benches in this directory.

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

pub const SMALL: usize = 100;
pub const MEDIUM: usize = 1_000;
pub const LARGE: usize = 10_000;

fn gen_seq(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

fn gen_rand(n: usize) -> Vec<i64> {
    let mut rng = SmallRng::seed_from_u64(0xC0FFEE);
    (0..n).map(|_| (rng.next_u64() % 1_000_000) as i64).collect()
}

// Init shared test data (immutable, global) ---------------------------------------------------------------------------

lazy_static::lazy_static! {
    pub static ref SEQ_100: Vec<i64> = gen_seq(SMALL);
    pub static ref SEQ_1_000: Vec<i64> = gen_seq(MEDIUM);
    pub static ref SEQ_10_000: Vec<i64> = gen_seq(LARGE);

    pub static ref RAND_100: Vec<i64> = gen_rand(SMALL);
    pub static ref RAND_1_000: Vec<i64> = gen_rand(MEDIUM);
    pub static ref RAND_10_000: Vec<i64> = gen_rand(LARGE);
}

pub fn seq_keys(n: usize) -> Vec<i64> {
    match n {
        SMALL => SEQ_100.clone(),
        MEDIUM => SEQ_1_000.clone(),
        LARGE => SEQ_10_000.clone(),
        _ => gen_seq(n),
    }
}

pub fn rand_keys(n: usize) -> Vec<i64> {
    match n {
        SMALL => RAND_100.clone(),
        MEDIUM => RAND_1_000.clone(),
        LARGE => RAND_10_000.clone(),
        _ => gen_rand(n),
    }
}
