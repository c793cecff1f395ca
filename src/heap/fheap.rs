use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::ops::Sub;

use crate::adt::{handle_to_string, Adt};
use crate::error::{Error, Result};
use crate::list::{Dlists, List};

const MAX_RANK: usize = 32;

#[derive(Clone, Copy)]
struct Fnode<K> {
    key: K,
    rank: u32,
    mark: bool,
    parent: usize,
    child: usize,
}

/// A collection of Fibonacci heaps over `1..n`. A heap is named by its
/// canonical element, always the root with the smallest key; the roots of
/// a heap's top-level trees are threaded together as a [`Dlists`] sibling
/// ring (`sibs`), so `meld` is the O(1) `sibs.join` and `decrease_key`'s
/// cut-to-root is `sibs.remove` followed by `sibs.join` back into the root
/// list. `delete_min`'s consolidation pass (`merge_roots`) borrows a
/// scratch [`List`] (`tmpq`) to drive a rank-bucketed work queue.
pub struct Fheap<K> {
    n: usize,
    node: Vec<Fnode<K>>,
    sibs: Dlists,
    tmpq: List,
    rvec: [usize; MAX_RANK + 1],
}

impl<K: Copy + PartialOrd + Sub<Output = K> + Default> Fheap<K> {
    /// New collection over `1..=n`, every handle its own singleton heap.
    pub fn new(n: usize) -> Self {
        let mut h = Fheap {
            n: 0,
            node: Vec::new(),
            sibs: Dlists::new(0),
            tmpq: List::new(0),
            rvec: [0; MAX_RANK + 1],
        };
        h.resize(n);
        h
    }

    /// Key of item `i`.
    pub fn key(&self, i: usize) -> K {
        self.node[i].key
    }

    /// Set the key of singleton item `i` (not yet inserted into a heap).
    pub fn set_key(&mut self, i: usize, k: K) -> Result<()> {
        if !self.sibs.singleton(i) || self.node[i].parent != 0 || self.node[i].child != 0 {
            return Err(Error::InvalidArgument);
        }
        self.node[i].key = k;
        Ok(())
    }

    /// The canonical element of a heap is always its own minimum.
    pub fn find_min(&self, h: usize) -> usize {
        h
    }

    /// Combine the heaps named `h1` and `h2`, returning the name of the
    /// combined heap (whichever root holds the smaller key).
    pub fn meld(&mut self, h1: usize, h2: usize) -> usize {
        if h1 == 0 {
            return h2;
        }
        if h2 == 0 {
            return h1;
        }
        if self.node[h1].key <= self.node[h2].key {
            self.sibs.join(h1, h2).unwrap_or(h1)
        } else {
            self.sibs.join(h2, h1).unwrap_or(h2)
        }
    }

    /// Insert singleton `i` into `h` with key `k`.
    pub fn insert(&mut self, i: usize, h: usize, k: K) -> Result<usize> {
        self.set_key(i, k)?;
        Ok(self.meld(i, h))
    }

    /// Reduce `i`'s key by `delta`, cutting it (and cascading up through
    /// marked ancestors) to the root list if that breaks heap order.
    pub fn decrease_key(&mut self, i: usize, delta: K, h: usize) -> usize
    where
        K: core::ops::Sub<Output = K> + core::ops::Add<Output = K>,
    {
        let mut h = h;
        let mut i = i;
        let mut pi = self.node[i].parent;
        self.node[i].key = self.node[i].key - delta;
        if pi == 0 {
            if self.node[h].key <= self.node[i].key {
                return h;
            }
            let _ = self.sibs.rename(h, i);
            return i;
        }
        if self.node[i].key >= self.node[pi].key {
            return h;
        }
        loop {
            self.node[pi].rank -= 1;
            self.node[pi].child = self.sibs.remove(i, self.node[pi].child).unwrap_or(0);
            self.node[i].parent = 0;
            self.node[i].mark = false;
            h = self.meld(i, h);
            i = pi;
            pi = self.node[i].parent;
            if !self.node[i].mark {
                break;
            }
        }
        if pi != 0 {
            self.node[i].mark = true;
        }
        h
    }

    /// Merge the top-level trees of the root list named `r`, eliminating
    /// repeated ranks, and return the resulting minimum-key root.
    fn merge_roots(&mut self, r: usize) -> usize {
        let mut min_root = r;
        let mut sr = self.sibs.first(r);
        while sr != 0 {
            if self.node[sr].key < self.node[min_root].key {
                min_root = sr;
            }
            let _ = self.tmpq.add_last(sr);
            self.node[sr].parent = 0;
            self.node[sr].mark = false;
            sr = self.sibs.next(sr);
        }
        let _ = self.sibs.rename(r, min_root);
        let mut r = min_root;

        let mut max_rank: i64 = -1;
        while !self.tmpq.empty() {
            let r1 = self.tmpq.first();
            let _ = self.tmpq.remove_first();
            let rank1 = self.node[r1].rank as usize;
            let r2 = self.rvec[rank1];
            if max_rank < rank1 as i64 {
                max_rank += 1;
                while (max_rank as usize) < rank1 {
                    self.rvec[max_rank as usize] = 0;
                    max_rank += 1;
                }
                self.rvec[rank1] = r1;
            } else if r2 == 0 {
                self.rvec[rank1] = r1;
            } else if self.node[r1].key < self.node[r2].key || (self.node[r1].key == self.node[r2].key && r1 == r) {
                r = self.sibs.remove(r2, r).unwrap_or(0);
                self.node[r1].child = self.sibs.join(self.node[r1].child, r2).unwrap_or(r2);
                self.rvec[rank1] = 0;
                self.node[r1].rank += 1;
                self.node[r2].parent = r1;
                let _ = self.tmpq.add_last(r1);
            } else {
                r = self.sibs.remove(r1, r).unwrap_or(0);
                self.node[r2].child = self.sibs.join(self.node[r2].child, r1).unwrap_or(r1);
                self.rvec[rank1] = 0;
                self.node[r2].rank += 1;
                self.node[r1].parent = r2;
                let _ = self.tmpq.add_last(r2);
            }
        }
        r
    }

    /// Remove the minimum-key item from `h`, returning the name of what
    /// remains (`0` if `h` is now empty).
    pub fn delete_min(&mut self, h: usize) -> usize {
        let c = self.node[h].child;
        if c != 0 {
            let mut x = self.sibs.first(c);
            while x != 0 {
                self.node[x].parent = 0;
                x = self.sibs.next(x);
            }
            let _ = self.sibs.join(h, c);
            self.node[h].child = 0;
        }
        self.node[h].rank = 0;
        if self.sibs.singleton(h) {
            return 0;
        }
        let rest = self.sibs.remove(h, h).unwrap_or(0);
        self.merge_roots(rest)
    }

    /// Remove item `i` (wherever it sits) from heap `h`.
    pub fn remove(&mut self, i: usize, h: usize) -> usize
    where
        K: core::ops::Sub<Output = K> + core::ops::Add<Output = K> + From<u8>,
    {
        let k = self.node[i].key;
        let delta = (self.node[i].key - self.node[h].key) + K::from(1u8);
        let h = self.decrease_key(i, delta, h);
        let h = self.delete_min(h);
        self.node[i].key = k;
        h
    }

    fn heap2string(&self, x: usize) -> String
    where
        K: core::fmt::Display,
    {
        if x == 0 || (self.node[x].parent == 0 && self.node[x].child == 0 && self.sibs.singleton(x)) {
            return String::new();
        }
        let mut s = String::from("[");
        let mut r = self.sibs.first(x);
        let mut first = true;
        while r != 0 {
            if !first {
                s.push(' ');
            }
            first = false;
            s.push_str(&handle_to_string(r, self.n));
            s.push(if self.node[r].mark { '!' } else { ':' });
            let _ = core::fmt::write(&mut s, format_args!("{}", self.node[r].key));
            s.push(',');
            let _ = core::fmt::write(&mut s, format_args!("{}", self.node[r].rank));
            s.push_str(&self.heap2string(self.node[r].child));
            r = self.sibs.next(r);
        }
        s.push(']');
        s
    }

    /// Canonical textual form of the heap named `h`.
    pub fn heap_to_string(&self, h: usize) -> String
    where
        K: core::fmt::Display,
    {
        self.heap2string(h)
    }
}

impl<K: Copy + PartialOrd + Sub<Output = K> + Default> Adt for Fheap<K> {
    fn n(&self) -> usize {
        self.n
    }

    fn resize(&mut self, size: usize) {
        self.n = size;
        self.node = vec![Fnode { key: K::default(), rank: 0, mark: false, parent: 0, child: 0 }; size + 1];
        self.sibs = Dlists::new(size);
        self.tmpq = List::new(size);
        self.rvec = [0; MAX_RANK + 1];
    }

    fn expand(&mut self, size: usize) {
        if size <= self.n {
            return;
        }
        let old_n = self.n;
        self.node.resize(size + 1, Fnode { key: K::default(), rank: 0, mark: false, parent: 0, child: 0 });
        self.sibs.expand(size);
        self.tmpq.expand(size);
        let _ = old_n;
        self.n = size;
    }

    fn clear(&mut self) {
        self.sibs.clear();
        for i in 0..=self.n {
            self.node[i] = Fnode { key: K::default(), rank: 0, mark: false, parent: 0, child: 0 };
        }
        self.rvec = [0; MAX_RANK + 1];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build two heaps, meld them, then exercise decrease_key and deletion.
    #[test]
    fn meld_decrease_key_and_delete_min() {
        let mut h = Fheap::<i32>::new(9);
        let h1 = h.insert(3, 0, 4).unwrap();
        let h1 = h.insert(5, h1, 6).unwrap();
        let h1 = h.insert(1, h1, 5).unwrap();
        assert_eq!(h.find_min(h1), 3);

        let h2 = h.insert(8, 0, 2).unwrap();
        let h2 = h.insert(9, h2, 7).unwrap();
        let h2 = h.insert(7, h2, 3).unwrap();
        assert_eq!(h.find_min(h2), 8);

        let merged = h.meld(h1, h2);
        assert_eq!(merged, 8);

        let merged = h.decrease_key(9, 6, merged);
        assert_eq!(merged, 9);

        let merged = h.delete_min(merged);
        assert_eq!(h.find_min(merged), 8);

        let merged = h.delete_min(merged);
        assert_eq!(h.find_min(merged), 7);
    }

    #[test]
    fn insert_and_delete_min_drain_in_order() {
        let mut h = Fheap::<i32>::new(5);
        let mut heap = 0;
        for (handle, k) in [(1, 5), (2, 3), (3, 4), (4, 1), (5, 2)] {
            heap = h.insert(handle, heap, k).unwrap();
        }
        let mut order = Vec::new();
        let mut remaining = 5;
        while heap != 0 && remaining > 0 {
            order.push(heap);
            heap = h.delete_min(heap);
            remaining -= 1;
        }
        assert_eq!(order, alloc::vec![4, 5, 2, 3, 1]);
    }

    #[test]
    fn decrease_key_moves_item_to_root() {
        let mut h = Fheap::<i32>::new(5);
        let heap = h.insert(1, 0, 1).unwrap();
        let heap = h.insert(2, heap, 5).unwrap();
        let heap = h.insert(3, heap, 6).unwrap();
        let heap = h.delete_min(heap);
        let heap = h.decrease_key(3, 100, heap);
        assert_eq!(h.find_min(heap), 3);
    }
}
