//! Several containers built over the same handle space `1..n`, passing
//! handles between them the way a higher-level algorithm would: a
//! union-find partition groups vertices, a hash map attaches a payload to
//! each vertex, and a heap picks the minimum-key vertex within a group.

use handle_collections::hash::HashMap;
use handle_collections::heap::Fheap;
use handle_collections::list::DjSets;

fn int_hash(k: &usize, which: u8) -> u32 {
    let k = *k as u64;
    if which == 0 {
        (k.wrapping_mul(0x9E3779B97F4A7C15) >> 32) as u32
    } else {
        (k.wrapping_mul(0xC2B2AE3D27D4EB4F) >> 32) as u32
    }
}

#[test]
fn shared_handles_across_djsets_hashmap_and_fheap() {
    const N: usize = 8;

    let mut sets = DjSets::new(N);
    let mut labels: HashMap<usize, &str> = HashMap::new(N, int_hash);
    let mut heap: Fheap<i64> = Fheap::new(N);

    let weights = [0, 30, 10, 40, 20, 50, 60, 70, 80];
    for h in 1..=N {
        heap.set_key(h, weights[h]).unwrap();
        labels.put_at(h, "vertex", h).unwrap();
    }

    // Group {1, 3} and {2, 4} into two components, then merge them.
    let r13 = sets.link(sets.find(1), sets.find(3)).unwrap();
    let r24 = sets.link(sets.find(2), sets.find(4)).unwrap();
    assert_ne!(sets.find(1), sets.find(2));

    let merged = sets.link(r13, r24).unwrap();
    assert_eq!(sets.find(1), sets.find(4));
    assert_eq!(merged, sets.find(1));

    // The handle space is shared, not the storage: removing a vertex's
    // label doesn't disturb its union-find membership or heap key.
    labels.remove(&3).unwrap();
    assert_eq!(sets.find(3), sets.find(1));
    assert_eq!(heap.key(3), 40);

    // Merge two singleton heaps and confirm the combined heap's name is
    // whichever root held the smaller key.
    let h12 = heap.meld(1, 2);
    assert_eq!(heap.key(h12), 10);
    let combined = heap.meld(h12, 3);
    assert_eq!(heap.key(combined), 10);
}
