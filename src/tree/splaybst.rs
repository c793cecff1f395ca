use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Write;

use crate::adt::{handle_to_string, Adt};
use crate::error::{Error, Result};

/// A forest of splay trees over `1..n`.
///
/// Every access (`find`, `access`, `insert`, `remove`, `split`) ends by
/// splaying the accessed node to the root of its tree via zig / zig-zig /
/// zig-zag rotations, giving amortized O(log n) per operation and favoring
/// recently touched handles.
pub struct SplayBst<K> {
    n: usize,
    key: Vec<Option<K>>,
    left: Vec<usize>,
    right: Vec<usize>,
    parent: Vec<usize>,
}

impl<K: Ord + Clone> SplayBst<K> {
    /// New forest over `1..=n`, every handle unattached.
    pub fn new(n: usize) -> Self {
        let mut t = SplayBst {
            n: 0,
            key: Vec::new(),
            left: Vec::new(),
            right: Vec::new(),
            parent: Vec::new(),
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

    fn rotate_left(&mut self, p: usize) {
        let c = self.right[p];
        let gp = self.parent[p];
        let cl = self.left[c];
        self.attach_right(p, cl);
        self.attach_left(c, p);
        self.parent[c] = gp;
        if gp != 0 {
            if self.left[gp] == p {
                self.left[gp] = c;
            } else {
                self.right[gp] = c;
            }
        }
    }

    fn rotate_right(&mut self, p: usize) {
        let c = self.left[p];
        let gp = self.parent[p];
        let cr = self.right[c];
        self.attach_left(p, cr);
        self.attach_right(c, p);
        self.parent[c] = gp;
        if gp != 0 {
            if self.left[gp] == p {
                self.left[gp] = c;
            } else {
                self.right[gp] = c;
            }
        }
    }

    /// Splay `x` to the root of its tree.
    fn splay(&mut self, x: usize) {
        if x == 0 {
            return;
        }
        while self.parent[x] != 0 {
            let p = self.parent[x];
            let gp = self.parent[p];
            if gp == 0 {
                // zig
                if self.left[p] == x {
                    self.rotate_right(p);
                } else {
                    self.rotate_left(p);
                }
            } else if self.left[gp] == p && self.left[p] == x {
                // zig-zig
                self.rotate_right(gp);
                self.rotate_right(p);
            } else if self.right[gp] == p && self.right[p] == x {
                self.rotate_left(gp);
                self.rotate_left(p);
            } else if self.left[p] == x {
                // zig-zag
                self.rotate_right(p);
                self.rotate_left(gp);
            } else {
                self.rotate_left(p);
                self.rotate_right(gp);
            }
        }
    }

    /// Root of the tree containing `h`, splaying `h` to the top first.
    pub fn find(&mut self, h: usize) -> usize {
        if !self.member(h) {
            return 0;
        }
        self.splay(h);
        h
    }

    /// Handle with key `k` in the tree rooted at `root`, splayed to the top
    /// on success. On a miss, the last node probed is splayed up instead (the
    /// usual splay-tree behavior) and `0` is returned.
    pub fn access(&mut self, k: &K, root: usize) -> usize {
        let mut x = root;
        let mut last = root;
        while x != 0 {
            last = x;
            x = match k.cmp(self.key[x].as_ref().unwrap()) {
                core::cmp::Ordering::Less => self.left[x],
                core::cmp::Ordering::Greater => self.right[x],
                core::cmp::Ordering::Equal => {
                    self.splay(x);
                    return x;
                }
            };
        }
        self.splay(last);
        0
    }

    /// Insert handle `h` with key `k` into the tree rooted at `*root`,
    /// splaying `h` to the new root. Fails on duplicate keys.
    pub fn insert(&mut self, h: usize, k: K, root: &mut usize) -> Result<()> {
        if h < 1 || h > self.n || self.member(h) {
            return Err(Error::InvalidArgument);
        }
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
        self.splay(h);
        *root = h;
        Ok(())
    }

    /// Remove `h` from the tree rooted at `*root`. Splays `h`'s former
    /// parent (or the reassembled join point) to the new root.
    pub fn remove(&mut self, h: usize, root: &mut usize) -> Result<()> {
        self.splay(h);
        if !self.member(h) || h != *root {
            return Err(Error::InvalidArgument);
        }
        let l = self.left[h];
        let r = self.right[h];
        self.key[h] = None;
        self.left[h] = 0;
        self.right[h] = 0;
        self.parent[h] = 0;
        if l == 0 {
            if r != 0 {
                self.parent[r] = 0;
            }
            *root = r;
        } else if r == 0 {
            self.parent[l] = 0;
            *root = l;
        } else {
            self.parent[l] = 0;
            self.parent[r] = 0;
            // l's max is already splayable: splay the max of l to l's root,
            // giving it an empty right child, then hang r there.
            let lmax = self.largest(l);
            self.splay(lmax);
            self.attach_right(lmax, r);
            *root = lmax;
        }
        Ok(())
    }

    fn largest(&self, mut x: usize) -> usize {
        while self.right[x] != 0 {
            x = self.right[x];
        }
        x
    }

    /// Split the tree rooted at `root` at handle `h`: returns `(lo, hi)`,
    /// the trees of keys less than, and greater than, `h`'s key. `h` itself
    /// becomes a non-member singleton.
    pub fn split(&mut self, h: usize, root: usize) -> Result<(usize, usize)> {
        if !self.member(h) || {
            let mut x = h;
            while self.parent[x] != 0 {
                x = self.parent[x];
            }
            x != root
        } {
            return Err(Error::InvalidArgument);
        }
        self.splay(h);
        let lo = self.left[h];
        let hi = self.right[h];
        if lo != 0 {
            self.parent[lo] = 0;
        }
        if hi != 0 {
            self.parent[hi] = 0;
        }
        self.key[h] = None;
        self.left[h] = 0;
        self.right[h] = 0;
        self.parent[h] = 0;
        Ok((lo, hi))
    }

    /// Debug-only structural audit: inorder keys strictly increase, parent
    /// pointers agree with children.
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

impl<K: Ord + Clone + core::fmt::Display> SplayBst<K> {
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

impl<K: Ord + Clone> Adt for SplayBst<K> {
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
    fn insert_splays_to_root() {
        let mut t = SplayBst::<i32>::new(8);
        let mut root = 0;
        for (h, k) in [(4, 40), (2, 20), (6, 60), (1, 10)] {
            t.insert(h, k, &mut root).unwrap();
            assert_eq!(root, h);
        }
        assert!(t.is_consistent(root));
    }

    #[test]
    fn access_splays_found_node() {
        let mut t = SplayBst::<i32>::new(8);
        let mut root = 0;
        for (h, k) in [(4, 40), (2, 20), (6, 60), (1, 10), (3, 30)] {
            t.insert(h, k, &mut root).unwrap();
        }
        let found = t.access(&10, root);
        assert_eq!(found, 1);
        assert_eq!(found, root);
        assert!(t.is_consistent(root));
    }

    #[test]
    fn remove_splays_neighbor() {
        let mut t = SplayBst::<i32>::new(8);
        let mut root = 0;
        for (h, k) in [(4, 40), (2, 20), (6, 60), (1, 10), (3, 30), (5, 50), (7, 70)] {
            t.insert(h, k, &mut root).unwrap();
        }
        t.remove(4, &mut root).unwrap();
        assert!(!t.member(4));
        assert!(t.is_consistent(root));
    }

    #[test]
    fn split_into_lo_hi() {
        let mut t = SplayBst::<i32>::new(8);
        let mut root = 0;
        for (h, k) in [(4, 40), (2, 20), (6, 60), (1, 10), (3, 30), (5, 50), (7, 70)] {
            t.insert(h, k, &mut root).unwrap();
        }
        let (lo, hi) = t.split(4, root).unwrap();
        assert!(t.is_consistent(lo));
        assert!(t.is_consistent(hi));
        assert!(!t.member(4));
    }
}
