use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Write;

use crate::adt::{handle_to_string, Adt};
use crate::error::{Error, Result};

/// A forest of plain binary search trees over `1..n`.
///
/// A tree is named by the handle of its root. Many disjoint trees can coexist
/// in one `Bst`; `find` walks parent pointers to recover a handle's root.
/// Nodes carry `(key, left, right, parent)`; `0` means "no such node" in every
/// one of those roles.
pub struct Bst<K> {
    n: usize,
    key: Vec<Option<K>>,
    left: Vec<usize>,
    right: Vec<usize>,
    parent: Vec<usize>,
}

impl<K: Ord + Clone> Bst<K> {
    /// New forest over `1..=n`, every handle unattached.
    pub fn new(n: usize) -> Self {
        let mut t = Bst {
            n: 0,
            key: Vec::new(),
            left: Vec::new(),
            right: Vec::new(),
            parent: Vec::new(),
        };
        t.resize(n);
        t
    }

    /// True iff `h` currently has a key (is a node in some tree).
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

    /// Root of the tree containing `h`. `0` if `h` isn't a member.
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
            let xk = self.key[x].as_ref().unwrap();
            x = match k.cmp(xk) {
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

    /// Insert handle `h` with key `k` into the tree rooted at `*root`
    /// (`*root == 0` creates a new singleton tree). Fails on duplicate keys.
    pub fn insert(&mut self, h: usize, k: K, root: &mut usize) -> Result<()> {
        if h < 1 || h > self.n || self.member(h) {
            return Err(Error::InvalidArgument);
        }
        if *root == 0 {
            self.key[h] = Some(k);
            self.left[h] = 0;
            self.right[h] = 0;
            self.parent[h] = 0;
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
                self.left[h] = 0;
                self.right[h] = 0;
                match cmp {
                    core::cmp::Ordering::Less => self.attach_left(x, h),
                    _ => self.attach_right(x, h),
                }
                return Ok(());
            }
            x = next;
        }
    }

    /// Remove `h` from the tree rooted at `*root`, updating `*root` if `h`
    /// was the root (possibly to `0`, if the tree becomes empty).
    pub fn remove(&mut self, h: usize, root: &mut usize) -> Result<()> {
        if !self.member(h) || self.find(h) != *root {
            return Err(Error::InvalidArgument);
        }
        if self.left[h] != 0 && self.right[h] != 0 {
            let succ = self.smallest(self.right[h]);
            self.splice_in_successor(h, succ, root);
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
        }
        self.key[h] = None;
        self.left[h] = 0;
        self.right[h] = 0;
        self.parent[h] = 0;
        Ok(())
    }

    /// Relocate `succ` (the inorder successor of `h`, which has no left
    /// child) directly into `h`'s structural position. `h`'s own slot is
    /// left fully detached, ready for the caller to clear it.
    fn splice_in_successor(&mut self, h: usize, succ: usize, root: &mut usize) {
        let h_left = self.left[h];
        let h_right = self.right[h];
        let h_parent = self.parent[h];
        if self.parent[succ] != h {
            let sp = self.parent[succ];
            let sr = self.right[succ];
            self.left[sp] = sr;
            if sr != 0 {
                self.parent[sr] = sp;
            }
            self.attach_right(succ, h_right);
        }
        // else succ == h_right already; its existing right child stays put.
        self.attach_left(succ, h_left);
        self.parent[succ] = h_parent;
        if h_parent == 0 {
            *root = succ;
        } else if self.left[h_parent] == h {
            self.left[h_parent] = succ;
        } else {
            self.right[h_parent] = succ;
        }
    }

    fn join_raw(&mut self, t1: usize, h: usize, t2: usize) -> usize {
        self.left[h] = t1;
        self.right[h] = t2;
        self.parent[h] = 0;
        if t1 != 0 {
            self.parent[t1] = h;
        }
        if t2 != 0 {
            self.parent[t2] = h;
        }
        h
    }

    /// Concatenate two trees around a connecting handle: every key in `t1`
    /// must be less than `h`'s key, which must be less than every key in
    /// `t2`. `h` must already carry a key (from a prior singleton `insert`)
    /// and must not already sit in a tree with other members. Returns the
    /// new root, `h`.
    pub fn join(&mut self, t1: usize, h: usize, t2: usize) -> Result<usize> {
        if !self.member(h) || self.left[h] != 0 || self.right[h] != 0 || self.parent[h] != 0 {
            return Err(Error::InvalidArgument);
        }
        Ok(self.join_raw(t1, h, t2))
    }

    /// Split the tree rooted at `root` at handle `h` (which must be a member
    /// of that tree): returns `(lo, hi)`, the roots of the trees of keys
    /// strictly less than, and strictly greater than, `h`'s key. `h` itself
    /// is removed from the structure (becomes a non-member singleton).
    pub fn split(&mut self, h: usize, root: usize) -> Result<(usize, usize)> {
        if !self.member(h) || self.find(h) != root {
            return Err(Error::InvalidArgument);
        }
        let mut lo = self.left[h];
        let mut hi = self.right[h];
        if lo != 0 {
            self.parent[lo] = 0;
        }
        if hi != 0 {
            self.parent[hi] = 0;
        }
        let mut cur = h;
        let mut up = self.parent[h];
        while up != 0 {
            let up_parent = self.parent[up];
            if self.left[up] == cur {
                let r = self.right[up];
                if r != 0 {
                    self.parent[r] = 0;
                }
                hi = self.join_raw(hi, up, r);
            } else {
                let l = self.left[up];
                if l != 0 {
                    self.parent[l] = 0;
                }
                lo = self.join_raw(l, up, lo);
            }
            cur = up;
            up = up_parent;
        }
        self.key[h] = None;
        self.left[h] = 0;
        self.right[h] = 0;
        self.parent[h] = 0;
        Ok((lo, hi))
    }

    /// Debug-only structural audit: inorder keys strictly increase, parent
    /// pointers agree with child pointers.
    pub fn is_consistent(&self, root: usize) -> bool {
        let mut prev: Option<&K> = None;
        let mut ok = true;
        self.inorder_check(root, &mut prev, &mut ok);
        ok
    }

    fn inorder_check<'a>(&'a self, x: usize, prev: &mut Option<&'a K>, ok: &mut bool) {
        if x == 0 || !*ok {
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
        self.inorder_check(self.left[x], prev, ok);
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
        self.inorder_check(self.right[x], prev, ok);
    }
}

impl<K: Ord + Clone + core::fmt::Display> Bst<K> {
    /// Canonical textual form, parenthesized inorder: `(a:17) b*19 (c:18 (d:20))`.
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
        let _ = write!(s, ":{}", self.key[x].as_ref().unwrap());
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

impl<K: Ord + Clone> Adt for Bst<K> {
    fn n(&self) -> usize {
        self.n
    }

    fn resize(&mut self, size: usize) {
        self.n = size;
        self.key = (0..=size).map(|_| None).collect();
        self.left = vec![0; size + 1];
        self.right = vec![0; size + 1];
        self.parent = vec![0; size + 1];
    }

    fn expand(&mut self, size: usize) {
        if size <= self.n {
            return;
        }
        self.key.resize_with(size + 1, || None);
        self.left.resize(size + 1, 0);
        self.right.resize(size + 1, 0);
        self.parent.resize(size + 1, 0);
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
    fn insert_find_access() {
        let mut t = Bst::<i32>::new(8);
        let mut root = 0;
        t.insert(4, 40, &mut root).unwrap();
        t.insert(2, 20, &mut root).unwrap();
        t.insert(6, 60, &mut root).unwrap();
        t.insert(1, 10, &mut root).unwrap();
        t.insert(3, 30, &mut root).unwrap();
        assert_eq!(root, 4);
        assert_eq!(t.find(1), 4);
        assert_eq!(t.access(&30, root), 3);
        assert_eq!(t.access(&99, root), 0);
        assert!(t.is_consistent(root));
    }

    #[test]
    fn duplicate_key_rejected() {
        let mut t = Bst::<i32>::new(4);
        let mut root = 0;
        t.insert(1, 5, &mut root).unwrap();
        assert_eq!(t.insert(2, 5, &mut root), Err(Error::InvalidArgument));
    }

    #[test]
    fn remove_leaf_and_two_children() {
        let mut t = Bst::<i32>::new(8);
        let mut root = 0;
        for (h, k) in [(4, 40), (2, 20), (6, 60), (1, 10), (3, 30), (5, 50), (7, 70)] {
            t.insert(h, k, &mut root).unwrap();
        }
        t.remove(1, &mut root).unwrap();
        assert!(!t.member(1));
        assert!(t.is_consistent(root));
        t.remove(4, &mut root).unwrap();
        assert!(!t.member(4));
        assert!(t.is_consistent(root));
        assert_eq!(t.find(6), root);
    }

    #[test]
    fn split_separates_by_key() {
        let mut t = Bst::<i32>::new(9);
        let mut root = 0;
        for (h, k) in [(5, 50), (3, 30), (7, 70), (2, 20), (4, 40), (6, 60), (8, 80)] {
            t.insert(h, k, &mut root).unwrap();
        }
        let (lo, hi) = t.split(5, root).unwrap();
        assert!(t.is_consistent(lo));
        assert!(t.is_consistent(hi));
        assert!(!t.member(5));
        assert_eq!(t.find(2), lo);
        assert_eq!(t.find(8), hi);
    }

    #[test]
    fn join_reassembles_around_new_root() {
        let mut t = Bst::<i32>::new(7);
        let mut lo = 0;
        let mut hi = 0;
        t.insert(1, 10, &mut lo).unwrap();
        t.insert(2, 20, &mut lo).unwrap();
        t.insert(6, 60, &mut hi).unwrap();
        t.insert(7, 70, &mut hi).unwrap();
        let mut mid_root = 0;
        t.insert(4, 40, &mut mid_root).unwrap();
        let root = t.join(lo, 4, hi).unwrap();
        assert!(t.is_consistent(root));
        assert_eq!(t.access(&20, root), 2);
        assert_eq!(t.access(&60, root), 6);
    }
}
