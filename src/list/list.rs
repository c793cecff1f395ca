use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::adt::{handle_to_string, Adt};
use crate::error::{Error, Result};

/// Non-member sentinel in the `succ` array.
const NONE: i64 = -1;

/// A singly-linked sequence over `1..n`: each handle appears at most once.
///
/// Membership, `next`, and `length` are all O(1); `get` by position is O(position).
/// With `auto_expand` enabled, `insert` silently doubles capacity instead of
/// failing when given a handle past the current `n`.
pub struct List {
    n: usize,
    succ: Vec<i64>,
    head: usize,
    tail: usize,
    len: usize,
    auto_expand: bool,
}

impl List {
    /// New list over `1..=n`, auto-expand disabled.
    pub fn new(n: usize) -> Self {
        let mut l = List {
            n: 0,
            succ: Vec::new(),
            head: 0,
            tail: 0,
            len: 0,
            auto_expand: false,
        };
        l.resize(n);
        l
    }

    /// New list over `1..=n` that doubles its capacity on out-of-range insert.
    pub fn with_auto_expand(n: usize) -> Self {
        let mut l = Self::new(n);
        l.auto_expand = true;
        l
    }

    /// First handle, or `0` if empty.
    pub fn first(&self) -> usize {
        self.head
    }

    /// Last handle, or `0` if empty.
    pub fn last(&self) -> usize {
        self.tail
    }

    /// Successor of `h`, or `0` if `h` is the tail. `succ[0]` is pinned to `0`,
    /// so `next(0) == 0`; traversal starts from [`List::first`], not `next(0)`.
    pub fn next(&self, h: usize) -> usize {
        if h > self.n {
            return 0;
        }
        self.succ[h].max(0) as usize
    }

    /// Number of handles in the list.
    pub fn length(&self) -> usize {
        self.len
    }

    /// True iff the list holds no handles.
    pub fn empty(&self) -> bool {
        self.len == 0
    }

    /// True iff `h` is currently in the list.
    pub fn member(&self, h: usize) -> bool {
        h >= 1 && h <= self.n && self.succ[h] != NONE
    }

    /// 1-based positional lookup; `0` if `pos` is out of range.
    pub fn get(&self, pos: usize) -> usize {
        if pos < 1 || pos > self.n {
            return 0;
        }
        let mut remaining = pos;
        let mut j = self.first();
        while j != 0 && remaining > 1 {
            j = self.next(j);
            remaining -= 1;
        }
        j
    }

    /// Insert `h` immediately after `after` (`after == 0` inserts at the front).
    pub fn insert(&mut self, h: usize, after: usize) -> Result<()> {
        if h > self.n {
            if self.auto_expand {
                let target = core::cmp::max(h, 2 * self.n.max(1));
                self.expand(target);
            } else {
                return Err(Error::InvalidArgument);
            }
        }
        if h < 1 || self.member(h) || (after != 0 && !self.member(after)) {
            return Err(Error::InvalidArgument);
        }
        self.len += 1;
        if after == 0 {
            if self.head == 0 {
                self.tail = h;
            }
            self.succ[h] = self.head as i64;
            self.head = h;
        } else {
            self.succ[h] = self.succ[after];
            self.succ[after] = h as i64;
            if self.tail == after {
                self.tail = h;
            }
        }
        Ok(())
    }

    /// Push `h` onto the front.
    pub fn add_first(&mut self, h: usize) -> Result<()> {
        self.insert(h, 0)
    }

    /// Push `h` onto the back.
    pub fn add_last(&mut self, h: usize) -> Result<()> {
        let tail = self.tail;
        self.insert(h, tail)
    }

    /// Remove the handle following `h` (`h == 0` pops the front).
    pub fn remove_next(&mut self, h: usize) -> Result<()> {
        if !(h == 0 || (self.member(h) && self.next(h) != 0)) {
            return Err(Error::InvalidArgument);
        }
        let removed;
        if h == 0 {
            removed = self.head;
            self.head = self.succ[removed].max(0) as usize;
        } else {
            removed = self.succ[h].max(0) as usize;
            self.succ[h] = self.succ[removed];
        }
        if self.tail == removed {
            self.tail = h;
        }
        self.succ[removed] = NONE;
        self.len -= 1;
        Ok(())
    }

    /// Pop the front handle.
    pub fn remove_first(&mut self) -> Result<()> {
        self.remove_next(0)
    }

    /// Debug-only structural audit; see the L1 `List` invariants in the crate docs.
    pub fn is_consistent(&self) -> bool {
        if self.head > self.n || self.tail > self.n {
            return false;
        }
        if (self.head == 0 || self.tail == 0) && self.head != self.tail {
            return false;
        }
        let mut cnt = 0;
        let mut i = self.first();
        while i != 0 {
            if i == self.tail && self.next(i) != 0 {
                return false;
            }
            cnt += 1;
            if cnt > self.length() {
                return false;
            }
            i = self.next(i);
        }
        if cnt != self.length() {
            return false;
        }
        let mut non_members = 0;
        for x in 1..=self.n {
            if self.succ[x] == NONE {
                non_members += 1;
            }
        }
        non_members == self.n - self.length() && self.succ[0] == 0
    }

    /// Canonical textual form: `[h1 h2 ... hk]`.
    pub fn to_string(&self) -> String {
        let mut s = String::from("[");
        let mut i = self.first();
        let mut first = true;
        while i != 0 {
            if !first {
                s.push(' ');
            }
            first = false;
            s.push_str(&handle_to_string(i, self.n));
            i = self.next(i);
        }
        s.push(']');
        s
    }
}

impl Adt for List {
    fn n(&self) -> usize {
        self.n
    }

    fn resize(&mut self, size: usize) {
        self.n = size;
        self.succ = vec![NONE; size + 1];
        self.succ[0] = 0;
        self.head = 0;
        self.tail = 0;
        self.len = 0;
    }

    fn expand(&mut self, size: usize) {
        if size <= self.n {
            return;
        }
        let old_n = self.n;
        let mut new_succ = vec![NONE; size + 1];
        new_succ[..=old_n].copy_from_slice(&self.succ);
        self.succ = new_succ;
        self.n = size;
    }

    fn clear(&mut self) {
        while !self.empty() {
            let _ = self.remove_first();
        }
    }
}

impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len || self.first() != other.first() {
            return false;
        }
        let mut x = self.first();
        while x != 0 {
            if self.next(x) != other.next(x) {
                return false;
            }
            x = self.next(x);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_traverse() {
        let mut l = List::new(5);
        l.insert(3, 0).unwrap();
        l.insert(1, 0).unwrap();
        l.insert(2, 1).unwrap();
        assert_eq!(l.to_string(), "[a b c]");
        assert_eq!(l.length(), 3);
        assert!(l.is_consistent());
    }

    #[test]
    fn remove_next_and_pop_front() {
        let mut l = List::new(5);
        l.add_last(1).unwrap();
        l.add_last(2).unwrap();
        l.add_last(3).unwrap();
        l.remove_next(1).unwrap();
        assert_eq!(l.to_string(), "[a c]");
        l.remove_first().unwrap();
        assert_eq!(l.to_string(), "[c]");
        assert!(l.is_consistent());
    }

    #[test]
    fn member_and_get() {
        let mut l = List::new(4);
        l.add_last(4).unwrap();
        l.add_last(2).unwrap();
        assert!(l.member(4));
        assert!(!l.member(3));
        assert_eq!(l.get(1), 4);
        assert_eq!(l.get(2), 2);
        assert_eq!(l.get(3), 0);
    }

    #[test]
    fn auto_expand_doubles_capacity() {
        let mut l = List::with_auto_expand(2);
        l.insert(5, 0).unwrap();
        assert!(l.n() >= 5);
        assert!(l.member(5));
    }

    #[test]
    fn rejects_out_of_range_without_auto_expand() {
        let mut l = List::new(2);
        assert_eq!(l.insert(5, 0), Err(Error::InvalidArgument));
    }

    #[test]
    fn expand_preserves_contents_resize_discards() {
        let mut l = List::new(3);
        l.add_last(1).unwrap();
        l.add_last(2).unwrap();
        l.expand(6);
        assert_eq!(l.to_string(), "[a b]");
        l.resize(4);
        assert_eq!(l.to_string(), "[]");
    }
}
