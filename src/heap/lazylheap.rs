use alloc::boxed::Box;
use alloc::collections::VecDeque;
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

/// A leftist-heap collection with deferred ("lazy") deletion.
///
/// The client supplies an `is_deleted` predicate; a handle the predicate
/// marks deleted is treated as absent without being physically unlinked
/// until the next `find_min`/`insert` walks past it. [`LazyLheap::lmeld`]
/// combines two heaps in O(1) by allocating a dummy parent node from a
/// reserved pool in the upper half of the handle space (`n+1..=2n`) rather
/// than doing a real leftist meld; `find_min` and `insert` are what pay for
/// this laziness, by purging deleted/dummy nodes and re-heapifying the
/// exposed sub-heaps on demand.
pub struct LazyLheap<K> {
    real_n: usize,
    node: Vec<Hnode<K>>,
    dummy: usize,
    is_deleted: Option<Box<dyn Fn(usize) -> bool>>,
}

impl<K: Clone + PartialOrd + Default> LazyLheap<K> {
    /// New collection over `1..=n` (the client-visible handle space); the
    /// backing arena additionally reserves `n+1..=2n` for dummy nodes.
    pub fn new(n: usize) -> Self {
        let mut h = LazyLheap { real_n: 0, node: Vec::new(), dummy: 0, is_deleted: None };
        h.resize(n);
        h
    }

    /// Install the predicate used to treat handles as implicitly deleted.
    pub fn set_is_deleted(&mut self, f: impl Fn(usize) -> bool + 'static) {
        self.is_deleted = Some(Box::new(f));
    }

    fn is_dummy(&self, x: usize) -> bool {
        x > self.real_n
    }

    fn deleted(&self, x: usize) -> bool {
        self.is_dummy(x) || self.is_deleted.as_ref().is_some_and(|f| f(x))
    }

    /// Key stored at real handle `h`.
    pub fn key(&self, h: usize) -> &K {
        &self.node[h].key
    }

    fn meld(&mut self, h1: usize, h2: usize) -> usize {
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

    /// Combine two heaps in O(1) by allocating a dummy parent. Returns the
    /// dummy's handle, which stands in as the new heap's name until the
    /// next `find_min`/`insert` collapses it away.
    pub fn lmeld(&mut self, h1: usize, h2: usize) -> Result<usize> {
        if self.dummy == 0 {
            return Err(Error::OutOfSpace);
        }
        let i = self.dummy;
        self.dummy = self.node[i].left;
        self.node[i].left = h1;
        self.node[i].right = h2;
        Ok(i)
    }

    fn purge(&mut self, h: usize, out: &mut VecDeque<usize>) {
        if h == 0 {
            return;
        }
        if !self.deleted(h) {
            out.push_back(h);
            return;
        }
        let (l, r) = (self.node[h].left, self.node[h].right);
        self.purge(l, out);
        self.purge(r, out);
        if self.is_dummy(h) {
            self.node[h].left = self.dummy;
            self.dummy = h;
            self.node[h].right = 0;
        } else {
            self.node[h].left = 0;
            self.node[h].right = 0;
            self.node[h].rank = 1;
        }
    }

    /// Combine `roots` into one heap by repeatedly melding pairs of
    /// matching rank, the same rank-bucketed consolidation `Fheap::
    /// merge_roots` uses for its own root list, so no heap gets melded more
    /// than `O(log n)` times across a purge-heavy sequence.
    fn heapify(&mut self, roots: VecDeque<usize>) -> usize {
        if roots.is_empty() {
            return 0;
        }
        let cap = (usize::BITS - self.real_n.max(1).leading_zeros()) as usize + 2;
        let mut buckets = vec![0usize; cap];
        let mut work = roots;
        while let Some(mut r) = work.pop_front() {
            loop {
                let slot = (self.node[r].rank as usize).min(buckets.len() - 1);
                if buckets[slot] == 0 {
                    buckets[slot] = r;
                    break;
                }
                let other = buckets[slot];
                buckets[slot] = 0;
                r = self.meld(r, other);
            }
        }
        buckets.into_iter().fold(0, |acc, r| self.meld(acc, r))
    }

    /// Purge deleted/dummy nodes from the top of `h` and re-heapify what's
    /// left, returning the real minimum handle (`0` if the heap is empty
    /// after purging).
    pub fn find_min(&mut self, h: usize) -> usize {
        let mut roots = VecDeque::new();
        self.purge(h, &mut roots);
        self.heapify(roots)
    }

    /// Insert singleton real handle `i` with key `k` into `h`.
    pub fn insert(&mut self, i: usize, k: K, h: usize) -> Result<usize> {
        if i < 1 || i > self.real_n || self.node[i].left != 0 || self.node[i].right != 0 || self.node[i].rank != 1 {
            return Err(Error::InvalidArgument);
        }
        self.node[i].key = k;
        let mut roots = VecDeque::new();
        self.purge(h, &mut roots);
        let collapsed = self.heapify(roots);
        Ok(self.meld(i, collapsed))
    }

    fn heap2string(&self, h: usize, is_root: bool) -> String
    where
        K: core::fmt::Display,
    {
        if h == 0 {
            return String::new();
        }
        let mut s = String::new();
        let left = self.node[h].left;
        let right = self.node[h].right;
        if left == 0 && right == 0 {
            if self.deleted(h) {
                s.push('-');
            } else {
                s.push_str(&handle_to_string(h, self.real_n));
                s.push(':');
                let _ = core::fmt::write(&mut s, format_args!("{}", self.node[h].key));
                s.push(',');
                let _ = core::fmt::write(&mut s, format_args!("{}", self.node[h].rank));
            }
        } else {
            s.push('(');
            if left != 0 {
                s.push_str(&self.heap2string(left, false));
                s.push(' ');
            }
            if self.deleted(h) {
                s.push('-');
            } else {
                s.push_str(&handle_to_string(h, self.real_n));
                s.push(':');
                let _ = core::fmt::write(&mut s, format_args!("{}", self.node[h].key));
                s.push(',');
                let _ = core::fmt::write(&mut s, format_args!("{}", self.node[h].rank));
                if is_root {
                    s.push('*');
                }
            }
            if right != 0 {
                s.push(' ');
                s.push_str(&self.heap2string(right, false));
            }
            s.push(')');
        }
        s
    }

    /// Canonical textual form of the tree rooted at `h`, as-is (no purge).
    pub fn heap_to_string(&self, h: usize) -> String
    where
        K: core::fmt::Display,
    {
        self.heap2string(h, true)
    }
}

impl<K: Clone + PartialOrd + Default> Adt for LazyLheap<K> {
    fn n(&self) -> usize {
        self.real_n
    }

    fn resize(&mut self, size: usize) {
        self.real_n = size;
        self.node = vec![Hnode { key: K::default(), rank: 1, left: 0, right: 0 }; 2 * size + 1];
        self.node[0].rank = 0;
        self.clear();
    }

    fn expand(&mut self, size: usize) {
        if size <= self.real_n {
            return;
        }
        let old_n = self.real_n;
        let old_real_nodes: Vec<Hnode<K>> = self.node[..=old_n].to_vec();
        self.resize(size);
        self.node[..=old_n].clone_from_slice(&old_real_nodes);
    }

    fn clear(&mut self) {
        for i in (self.real_n + 1)..=(2 * self.real_n) {
            self.node[i] = Hnode { key: K::default(), rank: 1, left: i + 1, right: 0 };
        }
        if self.real_n > 0 {
            self.node[2 * self.real_n].left = 0;
            self.dummy = self.real_n + 1;
        } else {
            self.dummy = 0;
        }
        for i in 1..=self.real_n {
            self.node[i] = Hnode { key: K::default(), rank: 1, left: 0, right: 0 };
        }
    }
}
