use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Write;

use crate::adt::{handle_to_string, Adt};
use crate::error::{Error, Result};

/// A forest of rank-balanced BSTs ("red-black by rank", WAVL-style) over
/// `1..n`.
///
/// Every node carries a `rank`; the sentinel (handle `0`) has virtual rank
/// `-1`. The invariant maintained after every `insert`/`remove`/`join` is: for
/// every node `x` with parent `p`, `1 <= rank(p) - rank(x) <= 2`, and no node
/// has two rank-2 children while itself being a leaf of rank > 0 (the
/// "2,2-leaf" case the delete side promotes away). Rebalancing is the
/// familiar AVL-style single/double rotation, generalized to operate on rank
/// labels instead of subtree heights.
pub struct RbBst<K> {
    n: usize,
    key: Vec<Option<K>>,
    left: Vec<usize>,
    right: Vec<usize>,
    parent: Vec<usize>,
    rank: Vec<i32>,
}

impl<K: Ord + Clone> RbBst<K> {
    /// New forest over `1..=n`, every handle unattached.
    pub fn new(n: usize) -> Self {
        let mut t = RbBst {
            n: 0,
            key: Vec::new(),
            left: Vec::new(),
            right: Vec::new(),
            parent: Vec::new(),
            rank: Vec::new(),
        };
        t.resize(n);
        t
    }

    /// True iff `h` currently has a key.
    pub fn member(&self, h: usize) -> bool {
        h >= 1 && h <= self.n && self.key[h].is_some()
    }

    /// Key stored at `h`, if any.
    pub fn key(&self, h: usize) -> Option<&K> {
        if h == 0 || h > self.n {
            return None;
        }
        self.key[h].as_ref()
    }

    /// Rank of `h` (`-1` for the `0` sentinel).
    pub fn rank(&self, h: usize) -> i32 {
        self.rank_of(h)
    }

    /// Left child of `h`, or `0`.
    pub fn left(&self, h: usize) -> usize {
        if h == 0 || h > self.n { 0 } else { self.left[h] }
    }

    /// Right child of `h`, or `0`.
    pub fn right(&self, h: usize) -> usize {
        if h == 0 || h > self.n { 0 } else { self.right[h] }
    }

    /// Parent of `h`, or `0` if `h` is a root (or not a member).
    pub fn parent(&self, h: usize) -> usize {
        if h == 0 || h > self.n { 0 } else { self.parent[h] }
    }

    fn rank_of(&self, h: usize) -> i32 {
        if h == 0 { -1 } else { self.rank[h] }
    }

    /// Root of the tree containing `h`.
    pub fn find(&self, h: usize) -> usize {
        if !self.member(h) {
            return 0;
        }
        let mut x = h;
        while self.parent[x] != 0 {
            x = self.parent[x];
        }
        x
    }

    /// Handle with key `k` in the tree rooted at `root`, or `0`.
    pub fn access(&self, k: &K, root: usize) -> usize {
        let mut x = root;
        while x != 0 {
            x = match k.cmp(self.key[x].as_ref().unwrap()) {
                core::cmp::Ordering::Less => self.left[x],
                core::cmp::Ordering::Greater => self.right[x],
                core::cmp::Ordering::Equal => return x,
            };
        }
        0
    }

    fn smallest(&self, mut x: usize) -> usize {
        while self.left[x] != 0 {
            x = self.left[x];
        }
        x
    }

    fn attach_left(&mut self, p: usize, c: usize) {
        self.left[p] = c;
        if c != 0 {
            self.parent[c] = p;
        }
    }

    fn attach_right(&mut self, p: usize, c: usize) {
        self.right[p] = c;
        if c != 0 {
            self.parent[c] = p;
        }
    }

    fn rotate_left(&mut self, p: usize, root: &mut usize) -> usize {
        let c = self.right[p];
        let gp = self.parent[p];
        let cl = self.left[c];
        self.attach_right(p, cl);
        self.attach_left(c, p);
        self.parent[c] = gp;
        if gp == 0 {
            *root = c;
        } else if self.left[gp] == p {
            self.left[gp] = c;
        } else {
            self.right[gp] = c;
        }
        c
    }

    fn rotate_right(&mut self, p: usize, root: &mut usize) -> usize {
        let c = self.left[p];
        let gp = self.parent[p];
        let cr = self.right[c];
        self.attach_left(p, cr);
        self.attach_right(c, p);
        self.parent[c] = gp;
        if gp == 0 {
            *root = c;
        } else if self.left[gp] == p {
            self.left[gp] = c;
        } else {
            self.right[gp] = c;
        }
        c
    }

    /// Single/double rotation fixing a `0`-child edge `(p, x)` discovered
    /// during an insert/join walk-up, where `x`'s sibling under `p` is a
    /// `2`-child. Terminates the walk.
    fn fixup_rotate(&mut self, p: usize, x: usize, root: &mut usize) {
        if self.left[p] == x {
            let y = self.left[x];
            if self.rank_of(x) - self.rank_of(y) == 1 {
                self.rotate_right(p, root);
                self.rank[p] -= 1;
            } else {
                let z = self.right[x];
                self.rotate_left(x, root);
                self.rotate_right(p, root);
                self.rank[x] -= 1;
                self.rank[p] -= 1;
                self.rank[z] += 1;
            }
        } else {
            let y = self.right[x];
            if self.rank_of(x) - self.rank_of(y) == 1 {
                self.rotate_left(p, root);
                self.rank[p] -= 1;
            } else {
                let z = self.left[x];
                self.rotate_right(x, root);
                self.rotate_left(p, root);
                self.rank[x] -= 1;
                self.rank[p] -= 1;
                self.rank[z] += 1;
            }
        }
    }

    /// Walk from a freshly attached/promoted node `x` toward the root,
    /// promoting or rotating away any `0`-child edge.
    fn rebalance_up(&mut self, mut x: usize, root: &mut usize) {
        loop {
            let p = self.parent[x];
            if p == 0 {
                break;
            }
            let dx = self.rank_of(p) - self.rank_of(x);
            if dx != 0 {
                break;
            }
            let sib = if self.left[p] == x { self.right[p] } else { self.left[p] };
            let dsib = self.rank_of(p) - self.rank_of(sib);
            if dsib == 1 {
                self.rank[p] += 1;
                x = p;
            } else {
                self.fixup_rotate(p, x, root);
                break;
            }
        }
    }

    /// Insert handle `h` with key `k` into the tree rooted at `*root`.
    /// Fails on duplicate keys.
    pub fn insert(&mut self, h: usize, k: K, root: &mut usize) -> Result<()> {
        if h < 1 || h > self.n || self.member(h) {
            return Err(Error::InvalidArgument);
        }
        self.rank[h] = 0;
        self.left[h] = 0;
        self.right[h] = 0;
        self.parent[h] = 0;
        if *root == 0 {
            self.key[h] = Some(k);
            *root = h;
            return Ok(());
        }
        let mut x = *root;
        loop {
            let cmp = k.cmp(self.key[x].as_ref().unwrap());
            let next = match cmp {
                core::cmp::Ordering::Less => self.left[x],
                core::cmp::Ordering::Greater => self.right[x],
                core::cmp::Ordering::Equal => return Err(Error::InvalidArgument),
            };
            if next == 0 {
                self.key[h] = Some(k);
                match cmp {
                    core::cmp::Ordering::Less => self.attach_left(x, h),
                    _ => self.attach_right(x, h),
                }
                break;
            }
            x = next;
        }
        self.rebalance_up(h, root);
        Ok(())
    }

    /// Remove `h` from the tree rooted at `*root`.
    pub fn remove(&mut self, h: usize, root: &mut usize) -> Result<()> {
        if !self.member(h) || self.find(h) != *root {
            return Err(Error::InvalidArgument);
        }
        let fixup_start;
        if self.left[h] != 0 && self.right[h] != 0 {
            let succ = self.smallest(self.right[h]);
            self.rank[succ] = self.rank[h];
            fixup_start = self.splice_in_successor(h, succ, root);
        } else {
            let child = if self.left[h] != 0 { self.left[h] } else { self.right[h] };
            let p = self.parent[h];
            if child != 0 {
                self.parent[child] = p;
            }
            if p == 0 {
                *root = child;
            } else if self.left[p] == h {
                self.left[p] = child;
            } else {
                self.right[p] = child;
            }
            fixup_start = p;
        }
        self.key[h] = None;
        self.left[h] = 0;
        self.right[h] = 0;
        self.parent[h] = 0;
        self.rank[h] = 0;
        if fixup_start != 0 {
            self.rebalance_down(fixup_start, root);
        }
        Ok(())
    }

    fn splice_in_successor(&mut self, h: usize, succ: usize, root: &mut usize) -> usize {
        let h_left = self.left[h];
        let h_right = self.right[h];
        let h_parent = self.parent[h];
        let fixup_start = if self.parent[succ] != h {
            let sp = self.parent[succ];
            let sr = self.right[succ];
            self.left[sp] = sr;
            if sr != 0 {
                self.parent[sr] = sp;
            }
            self.attach_right(succ, h_right);
            sp
        } else {
            succ
        };
        self.attach_left(succ, h_left);
        self.parent[succ] = h_parent;
        if h_parent == 0 {
            *root = succ;
        } else if self.left[h_parent] == h {
            self.left[h_parent] = succ;
        } else {
            self.right[h_parent] = succ;
        }
        fixup_start
    }

    /// Walk up from `p` (whose subtree just lost a node) fixing any
    /// `3`-child edge by demoting or rotating, WAVL-delete style.
    fn rebalance_down(&mut self, mut p: usize, root: &mut usize) {
        loop {
            if p == 0 {
                return;
            }
            let l = self.left[p];
            let r = self.right[p];
            let dl = self.rank_of(p) - self.rank_of(l);
            let dr = self.rank_of(p) - self.rank_of(r);
            // A leaf of rank > 0 is itself a violation (both virtual children
            // are 1-below-rank-0, i.e. distance rank(p)+1 -- too tall).
            if l == 0 && r == 0 && self.rank[p] > 0 {
                self.rank[p] = 0;
                p = self.parent[p];
                continue;
            }
            if dl <= 2 && dr <= 2 {
                return;
            }
            // One side is a 3-child; `y` is the other (non-violating) child.
            let (heavy_is_left, y) = if dl == 3 { (true, r) } else { (false, l) };
            let dy = self.rank_of(p) - self.rank_of(y);
            if dy == 2 {
                self.rank[p] -= 1;
                p = self.parent[p];
                continue;
            }
            // dy == 1: y is a 1-child; rotate to absorb the violation.
            debug_assert!(dy == 1);
            if heavy_is_left {
                // p's left is the 3-child, y = right child is 1-child.
                let yl = self.left[y];
                let yr = self.right[y];
                if self.rank_of(y) - self.rank_of(yr) == 1 {
                    self.rotate_left(p, root);
                    self.rank[y] += 1;
                    self.rank[p] -= 1;
                    if l == 0 && self.rank[p] < 0 {
                        self.rank[p] = 0;
                    }
                } else {
                    self.rotate_right(y, root);
                    self.rotate_left(p, root);
                    self.rank[yl] += 2;
                    self.rank[p] -= 2;
                    self.rank[y] -= 1;
                }
            } else {
                let yl = self.left[y];
                let yr = self.right[y];
                if self.rank_of(y) - self.rank_of(yl) == 1 {
                    self.rotate_right(p, root);
                    self.rank[y] += 1;
                    self.rank[p] -= 1;
                    if r == 0 && self.rank[p] < 0 {
                        self.rank[p] = 0;
                    }
                } else {
                    self.rotate_left(y, root);
                    self.rotate_right(p, root);
                    self.rank[yr] += 2;
                    self.rank[p] -= 2;
                    self.rank[y] -= 1;
                }
            }
            return;
        }
    }

    /// Concatenate two rank-balanced trees around a connecting handle:
    /// every key in `t1` must be less than `h`'s key, which must be less
    /// than every key in `t2`. `h` must already carry a key and sit in no
    /// other tree. O(log n): descends the taller tree's spine to find an
    /// attachment point of matching rank.
    pub fn join(&mut self, t1: usize, h: usize, t2: usize) -> Result<usize> {
        if !self.member(h) || self.left[h] != 0 || self.right[h] != 0 || self.parent[h] != 0 {
            return Err(Error::InvalidArgument);
        }
        let r1 = self.rank_of(t1);
        let r2 = self.rank_of(t2);
        let mut root_holder;
        if r1 >= r2 {
            let mut v = t1;
            let mut vp = 0usize;
            while v != 0 && self.rank_of(v) > r2 {
                vp = v;
                v = self.right[v];
            }
            self.rank[h] = self.rank_of(v) + 1;
            self.attach_left(h, v);
            self.attach_right(h, t2);
            if vp == 0 {
                self.parent[h] = 0;
                root_holder = h;
            } else {
                self.attach_right(vp, h);
                root_holder = t1;
            }
        } else {
            let mut v = t2;
            let mut vp = 0usize;
            while v != 0 && self.rank_of(v) > r1 {
                vp = v;
                v = self.left[v];
            }
            self.rank[h] = self.rank_of(v) + 1;
            self.attach_right(h, v);
            self.attach_left(h, t1);
            if vp == 0 {
                self.parent[h] = 0;
                root_holder = h;
            } else {
                self.attach_left(vp, h);
                root_holder = t2;
            }
        }
        self.rebalance_up(h, &mut root_holder);
        Ok(root_holder)
    }

    /// Debug-only structural audit: inorder keys strictly increase, parent
    /// pointers agree with children, every edge's rank difference is 1 or 2.
    pub fn is_consistent(&self, root: usize) -> bool {
        let mut prev: Option<&K> = None;
        let mut ok = true;
        self.check(root, &mut prev, &mut ok);
        ok
    }

    fn check<'a>(&'a self, x: usize, prev: &mut Option<&'a K>, ok: &mut bool) {
        if x == 0 || !*ok {
            return;
        }
        let dl = self.rank_of(x) - self.rank_of(self.left[x]);
        let dr = self.rank_of(x) - self.rank_of(self.right[x]);
        if !(1..=2).contains(&dl) || !(1..=2).contains(&dr) {
            *ok = false;
            return;
        }
        if self.left[x] != 0 && self.parent[self.left[x]] != x {
            *ok = false;
            return;
        }
        if self.right[x] != 0 && self.parent[self.right[x]] != x {
            *ok = false;
            return;
        }
        self.check(self.left[x], prev, ok);
        if !*ok {
            return;
        }
        let k = self.key[x].as_ref().unwrap();
        if let Some(p) = prev {
            if k <= p {
                *ok = false;
                return;
            }
        }
        *prev = Some(k);
        self.check(self.right[x], prev, ok);
    }
}

impl<K: Ord + Clone + core::fmt::Display> RbBst<K> {
    /// Canonical textual form, parenthesized inorder with a `:rank` suffix:
    /// `(a:17:0) b*19:2 (c:18:0 (d:20:1))`.
    pub fn to_string(&self, root: usize) -> String {
        let mut s = String::new();
        self.write_node(root, root, &mut s);
        s
    }

    fn write_node(&self, x: usize, root: usize, s: &mut String) {
        if x == 0 {
            return;
        }
        let wrap = x != root;
        if wrap {
            s.push('(');
        }
        s.push_str(&handle_to_string(x, self.n));
        if x == root {
            s.push('*');
        }
        let _ = write!(s, ":{}:{}", self.key[x].as_ref().unwrap(), self.rank[x]);
        if self.left[x] != 0 {
            s.push(' ');
            self.write_node(self.left[x], root, s);
        }
        if self.right[x] != 0 {
            s.push(' ');
            self.write_node(self.right[x], root, s);
        }
        if wrap {
            s.push(')');
        }
    }
}

impl<K: Ord + Clone> Adt for RbBst<K> {
    fn n(&self) -> usize {
        self.n
    }

    fn resize(&mut self, size: usize) {
        self.n = size;
        self.key = (0..=size).map(|_| None).collect();
        self.left = vec![0; size + 1];
        self.right = vec![0; size + 1];
        self.parent = vec![0; size + 1];
        self.rank = vec![0; size + 1];
    }

    fn expand(&mut self, size: usize) {
        if size <= self.n {
            return;
        }
        self.key.resize_with(size + 1, || None);
        self.left.resize(size + 1, 0);
        self.right.resize(size + 1, 0);
        self.parent.resize(size + 1, 0);
        self.rank.resize(size + 1, 0);
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
    fn sequential_inserts_stay_balanced() {
        let mut t = RbBst::<i32>::new(16);
        let mut root = 0;
        for h in 1..=15 {
            t.insert(h, h as i32, &mut root).unwrap();
        }
        assert!(t.is_consistent(root));
        for h in 1..=15 {
            assert_eq!(t.access(&(h as i32), root), h);
        }
    }

    #[test]
    fn reverse_inserts_stay_balanced() {
        let mut t = RbBst::<i32>::new(16);
        let mut root = 0;
        for h in (1..=15).rev() {
            t.insert(h, h as i32, &mut root).unwrap();
        }
        assert!(t.is_consistent(root));
    }

    #[test]
    fn duplicate_key_rejected() {
        let mut t = RbBst::<i32>::new(4);
        let mut root = 0;
        t.insert(1, 5, &mut root).unwrap();
        assert_eq!(t.insert(2, 5, &mut root), Err(Error::InvalidArgument));
    }

    #[test]
    fn remove_preserves_order_and_balance() {
        let mut t = RbBst::<i32>::new(16);
        let mut root = 0;
        for h in 1..=15 {
            t.insert(h, h as i32, &mut root).unwrap();
        }
        for h in [3, 9, 1, 15, 7, 8] {
            t.remove(h, &mut root).unwrap();
            assert!(!t.member(h));
            assert!(t.is_consistent(root));
        }
        for h in [2, 4, 5, 6, 10, 11, 12, 13, 14] {
            assert_eq!(t.access(&(h as i32), root), h);
        }
    }
}
