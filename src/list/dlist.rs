use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::adt::Adt;
use crate::error::{Error, Result};
use crate::list::List;

const NONE: i64 = -1;

/// A doubly-linked sequence: [`List`] plus O(1) `prev` and general-position removal.
pub struct Dlist {
    list: List,
    pred: Vec<i64>,
}

impl Dlist {
    /// New list over `1..=n`.
    pub fn new(n: usize) -> Self {
        let mut d = Dlist {
            list: List::new(n),
            pred: Vec::new(),
        };
        d.resize(n);
        d
    }

    /// First handle, or `0` if empty.
    pub fn first(&self) -> usize {
        self.list.first()
    }

    /// Last handle, or `0` if empty.
    pub fn last(&self) -> usize {
        self.list.last()
    }

    /// Successor of `h`, or `0` if `h` is the tail.
    pub fn next(&self, h: usize) -> usize {
        self.list.next(h)
    }

    /// Predecessor of `h`, or `0` if `h` is the head.
    pub fn prev(&self, h: usize) -> usize {
        if h > self.n() {
            return 0;
        }
        self.pred[h].max(0) as usize
    }

    /// 1-based positional lookup; negative values count back from the tail
    /// (`-1` is the last handle).
    pub fn get(&self, pos: isize) -> usize {
        if pos >= 0 {
            return self.list.get(pos as usize);
        }
        let mut remaining = pos;
        let mut j = self.last();
        while j != 0 && remaining < -1 {
            j = self.prev(j);
            remaining += 1;
        }
        j
    }

    /// Number of handles in the list.
    pub fn length(&self) -> usize {
        self.list.length()
    }

    /// True iff the list holds no handles.
    pub fn empty(&self) -> bool {
        self.list.empty()
    }

    /// True iff `h` is currently in the list.
    pub fn member(&self, h: usize) -> bool {
        self.list.member(h)
    }

    /// Insert `h` immediately after `after` (`after == 0` inserts at the front).
    pub fn insert(&mut self, h: usize, after: usize) -> Result<()> {
        if h < 1 || h > self.n() || self.member(h) || (after != 0 && !self.member(after)) {
            return Err(Error::InvalidArgument);
        }
        self.list.insert(h, after)?;
        self.pred[h] = after as i64;
        let nxt = self.next(h);
        if nxt != 0 {
            self.pred[nxt] = h as i64;
        }
        Ok(())
    }

    /// Push `h` onto the front.
    pub fn add_first(&mut self, h: usize) -> Result<()> {
        self.insert(h, 0)
    }

    /// Push `h` onto the back.
    pub fn add_last(&mut self, h: usize) -> Result<()> {
        let tail = self.last();
        self.insert(h, tail)
    }

    /// Remove `h` from wherever it is in the list, in O(1).
    pub fn remove(&mut self, h: usize) -> Result<()> {
        if !self.member(h) {
            return Err(Error::InvalidArgument);
        }
        if h == self.first() {
            let nxt = self.next(h);
            self.pred[nxt] = 0;
            self.list.remove_next(0)?;
        } else {
            let p = self.prev(h);
            let nxt = self.next(h);
            if h != self.last() {
                self.pred[nxt] = p as i64;
            }
            self.list.remove_next(p)?;
        }
        self.pred[h] = NONE;
        Ok(())
    }

    /// Pop the front handle.
    pub fn remove_first(&mut self) -> Result<()> {
        let h = self.first();
        if h == 0 {
            return Err(Error::InvalidArgument);
        }
        self.remove(h)
    }

    /// Debug-only structural audit (prev/next mutual inverses, non-member sentinels).
    pub fn is_consistent(&self) -> bool {
        if !self.list.is_consistent() {
            return false;
        }
        if self.pred[0] != 0 {
            return false;
        }
        let mut x = self.first();
        while x != 0 {
            let p = self.prev(x);
            if p != 0 && self.next(p) != x {
                return false;
            }
            x = self.next(x);
        }
        true
    }

    /// Canonical textual form: `[h1 h2 ... hk]`.
    pub fn to_string(&self) -> String {
        self.list.to_string()
    }
}

impl Adt for Dlist {
    fn n(&self) -> usize {
        self.list.n()
    }

    fn resize(&mut self, size: usize) {
        self.list.resize(size);
        self.pred = vec![NONE; size + 1];
        self.pred[0] = 0;
    }

    fn expand(&mut self, size: usize) {
        if size <= self.n() {
            return;
        }
        let old_n = self.n();
        self.list.expand(size);
        let mut new_pred = vec![NONE; size + 1];
        new_pred[..=old_n].copy_from_slice(&self.pred);
        self.pred = new_pred;
    }

    fn clear(&mut self) {
        while !self.empty() {
            let _ = self.remove_first();
        }
    }
}
