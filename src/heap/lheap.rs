use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::adt::{handle_to_string, Adt};
use crate::error::{Error, Result};

#[derive(Clone, Copy)]
struct Hnode<K> {
    key: K,
    rank: u32,
    left: usize,
    right: usize,
}

/// A collection of leftist heaps over `1..n`. A heap is named by the handle
/// of its root; there's no separate heap identity. [`Lheap::meld`] is the
/// only way two singletons become one heap, which is also how `insert`
/// and `delete_min` are expressed.
pub struct Lheap<K> {
    n: usize,
    node: Vec<Hnode<K>>,
}

impl<K: Clone + PartialOrd + Default> Lheap<K> {
    /// New collection over `1..=n`, every handle its own singleton heap.
    pub fn new(n: usize) -> Self {
        let mut h = Lheap { n: 0, node: Vec::new() };
        h.resize(n);
        h
    }

    /// Key stored at `h`.
    pub fn key(&self, h: usize) -> &K {
        &self.node[h].key
    }

    /// Rank of `h` (length of its right spine + 1).
    pub fn rank(&self, h: usize) -> u32 {
        self.node[h].rank
    }

    /// Left child of `h`, or `0`.
    pub fn left(&self, h: usize) -> usize {
        self.node[h].left
    }

    /// Right child of `h`, or `0`.
    pub fn right(&self, h: usize) -> usize {
        self.node[h].right
    }

    /// Combine the heaps rooted at `h1` and `h2` into one, returning its root.
    pub fn meld(&mut self, h1: usize, h2: usize) -> usize {
        if h1 == 0 {
            return h2;
        }
        if h2 == 0 {
            return h1;
        }
        let (lo, hi) = if self.node[h1].key <= self.node[h2].key { (h1, h2) } else { (h2, h1) };
        let new_right = self.meld(self.node[lo].right, hi);
        self.node[lo].right = new_right;
        if self.node[self.node[lo].left].rank < self.node[self.node[lo].right].rank {
            let (l, r) = (self.node[lo].left, self.node[lo].right);
            self.node[lo].left = r;
            self.node[lo].right = l;
        }
        self.node[lo].rank = self.node[self.node[lo].right].rank + 1;
        lo
    }

    /// Insert singleton `h` (not currently part of any heap) into `heap`,
    /// with key `k`. Returns the root of the resulting heap.
    pub fn insert(&mut self, h: usize, k: K, heap: usize) -> Result<usize> {
        if h < 1 || h > self.n || self.node[h].left != 0 || self.node[h].right != 0 || self.node[h].rank != 1 {
            return Err(Error::InvalidArgument);
        }
        self.node[h].key = k;
        Ok(self.meld(h, heap))
    }

    /// Remove the root of `heap`, returning the root of what remains (`0` if
    /// the heap is now empty). The removed handle becomes a singleton.
    pub fn delete_min(&mut self, heap: usize) -> usize {
        let rest = self.meld(self.node[heap].left, self.node[heap].right);
        self.node[heap].left = 0;
        self.node[heap].right = 0;
        self.node[heap].rank = 1;
        rest
    }

    fn heap2string(&self, h: usize, is_root: bool) -> String
    where
        K: core::fmt::Display,
    {
        if h == 0 {
            return String::new();
        }
        let mut s = String::new();
        if self.left(h) == 0 && self.right(h) == 0 {
            s.push_str(&handle_to_string(h, self.n));
            s.push(':');
            let _ = core::fmt::write(&mut s, format_args!("{}", self.node[h].key));
            s.push(',');
            let _ = core::fmt::write(&mut s, format_args!("{}", self.node[h].rank));
        } else {
            s.push('(');
            if self.left(h) != 0 {
                s.push_str(&self.heap2string(self.left(h), false));
                s.push(' ');
            }
            s.push_str(&handle_to_string(h, self.n));
            s.push(':');
            let _ = core::fmt::write(&mut s, format_args!("{}", self.node[h].key));
            s.push(',');
            let _ = core::fmt::write(&mut s, format_args!("{}", self.node[h].rank));
            if is_root {
                s.push('*');
            }
            if self.right(h) != 0 {
                s.push(' ');
                s.push_str(&self.heap2string(self.right(h), false));
            }
            s.push(')');
        }
        s
    }

    /// Canonical textual form of a single heap rooted at `h`.
    pub fn heap_to_string(&self, h: usize) -> String
    where
        K: core::fmt::Display,
    {
        self.heap2string(h, true)
    }
}

impl<K: Clone + PartialOrd + Default> Adt for Lheap<K> {
    fn n(&self) -> usize {
        self.n
    }

    fn resize(&mut self, size: usize) {
        self.n = size;
        self.node = vec![Hnode { key: K::default(), rank: 1, left: 0, right: 0 }; size + 1];
        self.node[0].rank = 0;
    }

    fn expand(&mut self, size: usize) {
        if size <= self.n {
            return;
        }
        let old_n = self.n;
        self.node.resize(size + 1, Hnode { key: K::default(), rank: 1, left: 0, right: 0 });
        let _ = old_n;
        self.n = size;
    }

    fn clear(&mut self) {
        self.resize(self.n);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meld_keeps_min_at_root() {
        let mut h = Lheap::<i32>::new(5);
        h.node[1].key = 5;
        h.node[2].key = 2;
        let root = h.meld(1, 2);
        assert_eq!(root, 2);
        assert_eq!(*h.key(root), 2);
    }

    #[test]
    fn insert_and_delete_min_drain_in_order() {
        let mut h = Lheap::<i32>::new(5);
        let mut heap = 0;
        for (handle, k) in [(1, 5), (2, 3), (3, 4), (4, 1), (5, 2)] {
            heap = h.insert(handle, k, heap).unwrap();
        }
        let mut order = Vec::new();
        while heap != 0 {
            order.push(heap);
            heap = h.delete_min(heap);
        }
        assert_eq!(order, alloc::vec![4, 5, 2, 3, 1]);
    }

    #[test]
    fn insert_rejects_non_singleton() {
        let mut h = Lheap::<i32>::new(3);
        let heap = h.insert(1, 1, 0).unwrap();
        let heap = h.insert(2, 2, heap).unwrap();
        assert_eq!(h.insert(1, 0, heap), Err(Error::InvalidArgument));
    }
}
