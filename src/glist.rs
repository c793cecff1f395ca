//! L4: [`Glist`], a random-access sequence of arbitrary values addressed by
//! the same handle discipline as the rest of this crate.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Write;

use crate::adt::Adt;
use crate::error::{Error, Result};
use crate::list::ListPair;

/// A sequence of values of type `V`, each occurrence also named by a fresh
/// handle. Order and membership are delegated to a [`ListPair`] over the
/// handle space: "in" is the list order, "out" is the free pool. A parallel
/// `vals[handle]` array holds the payload.
///
/// With auto-expand enabled (the default via [`Glist::new`]), `insert`
/// doubles capacity instead of failing when the free pool is exhausted.
pub struct Glist<V> {
    free: ListPair,
    vals: Vec<Option<V>>,
    auto_expand: bool,
}

impl<V: Clone + PartialEq> Glist<V> {
    /// New, auto-expanding list with an initial capacity of 10.
    pub fn new() -> Self {
        Self::with_capacity(10, true)
    }

    /// New list over a fixed handle capacity `n`, auto-expand disabled.
    pub fn with_n(n: usize) -> Self {
        Self::with_capacity(n, false)
    }

    fn with_capacity(n: usize, auto_expand: bool) -> Self {
        Glist {
            free: ListPair::new(n),
            vals: vec![None; n + 1],
            auto_expand,
        }
    }

    /// First handle in list order, or `0` if empty.
    pub fn first(&self) -> usize {
        self.free.first_in()
    }

    /// Last handle in list order, or `0` if empty.
    pub fn last(&self) -> usize {
        self.free.last_in()
    }

    /// Successor of `h` in list order, or `0`.
    pub fn next(&self, h: usize) -> usize {
        self.free.next(h)
    }

    /// Predecessor of `h` in list order, or `0`.
    pub fn prev(&self, h: usize) -> usize {
        self.free.prev(h)
    }

    /// Number of items currently in the list.
    pub fn length(&self) -> usize {
        self.free.num_in()
    }

    /// True iff the list holds no items.
    pub fn empty(&self) -> bool {
        self.free.num_in() == 0
    }

    /// True iff `h` currently names an item in the list.
    pub fn member(&self, h: usize) -> bool {
        self.free.is_in(h)
    }

    /// Value stored at `h`. `None` if `h` isn't a member.
    pub fn value(&self, h: usize) -> Option<&V> {
        if !self.member(h) {
            return None;
        }
        self.vals[h].as_ref()
    }

    /// True iff some item in the list equals `v`.
    pub fn contains(&self, v: &V) -> bool {
        self.find(v, 0) != 0
    }

    /// 1-based positional lookup; negative positions count from the end
    /// (`-1` is the last item). `0` if out of range.
    pub fn get(&self, pos: i64) -> usize {
        let n = self.free.n() as i64;
        if pos > n || pos < -n || pos == 0 {
            return 0;
        }
        if pos > 0 {
            let mut j = self.first();
            let mut remaining = pos;
            while j != 0 && remaining > 1 {
                j = self.next(j);
                remaining -= 1;
            }
            j
        } else {
            let mut j = self.last();
            let mut remaining = pos;
            while j != 0 && remaining < -1 {
                j = self.prev(j);
                remaining += 1;
            }
            j
        }
    }

    /// Find the first item equal to `v` following `after` in list order
    /// (`after == 0` searches the whole list). Returns `0` if none.
    pub fn find(&self, v: &V, after: usize) -> usize {
        let mut j = if after == 0 { self.first() } else { self.next(after) };
        while j != 0 {
            if self.vals[j].as_ref() == Some(v) {
                return j;
            }
            j = self.next(j);
        }
        0
    }

    /// Insert `v` immediately after `after` (`after == 0` inserts at the
    /// front). Returns the freshly allocated handle, or `0` if the list is
    /// full and auto-expand is disabled.
    pub fn insert(&mut self, v: V, after: usize) -> usize {
        let mut i = self.free.first_out();
        if i == 0 {
            if !self.auto_expand {
                return 0;
            }
            self.expand(2 * self.free.n().max(1));
            i = self.free.first_out();
            if i == 0 {
                return 0;
            }
        }
        if self.free.swap(i, after).is_err() {
            return 0;
        }
        self.vals[i] = Some(v);
        i
    }

    /// Insert `v` at the front of the list.
    pub fn add_first(&mut self, v: V) -> usize {
        self.insert(v, 0)
    }

    /// Insert `v` at the back of the list.
    pub fn add_last(&mut self, v: V) -> usize {
        let last = self.last();
        self.insert(v, last)
    }

    /// Remove the item named by `h`.
    pub fn remove(&mut self, h: usize) -> Result<()> {
        if !self.member(h) {
            return Err(Error::InvalidArgument);
        }
        self.free.swap_to_tail(h)?;
        self.vals[h] = None;
        Ok(())
    }

    /// Remove the first item. No-op on an empty list.
    pub fn remove_first(&mut self) -> Result<()> {
        let h = self.first();
        if h == 0 {
            return Ok(());
        }
        self.remove(h)
    }

    /// Remove the last item. No-op on an empty list.
    pub fn remove_last(&mut self) -> Result<()> {
        let h = self.last();
        if h == 0 {
            return Ok(());
        }
        self.remove(h)
    }
}

impl<V: Clone + PartialEq + core::fmt::Display> Glist<V> {
    /// Canonical textual form: `[v1, v2, ..., vk]`.
    pub fn to_string(&self) -> String {
        let mut s = String::from("[");
        let mut j = self.first();
        let mut first = true;
        while j != 0 {
            if !first {
                s.push_str(", ");
            }
            first = false;
            let _ = write!(s, "{}", self.vals[j].as_ref().unwrap());
            j = self.next(j);
        }
        s.push(']');
        s
    }
}

impl<V: Clone + PartialEq> Adt for Glist<V> {
    fn n(&self) -> usize {
        self.free.n()
    }

    fn resize(&mut self, size: usize) {
        self.free.resize(size);
        self.vals = vec![None; size + 1];
    }

    fn expand(&mut self, size: usize) {
        if size <= self.free.n() {
            return;
        }
        self.free.expand(size);
        self.vals.resize(size + 1, None);
    }

    fn clear(&mut self) {
        let n = self.free.n();
        self.resize(n);
    }
}

impl<V: Clone + PartialEq> Default for Glist<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone + PartialEq> PartialEq for Glist<V> {
    fn eq(&self, other: &Self) -> bool {
        let mut x = self.first();
        let mut y = other.first();
        while x != 0 && y != 0 {
            if self.vals[x] != other.vals[y] {
                return false;
            }
            x = self.next(x);
            y = other.next(y);
        }
        x == 0 && y == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_traverse_and_string() {
        let mut g: Glist<i32> = Glist::with_n(5);
        let a = g.add_last(10);
        let b = g.add_last(20);
        g.insert(15, a);
        assert_eq!(g.to_string(), "[10, 15, 20]");
        assert_eq!(g.length(), 3);
        assert_eq!(g.value(b), Some(&20));
    }

    #[test]
    fn get_supports_negative_positions() {
        let mut g: Glist<i32> = Glist::with_n(5);
        g.add_last(1);
        g.add_last(2);
        g.add_last(3);
        assert_eq!(g.value(g.get(1)), Some(&1));
        assert_eq!(g.value(g.get(-1)), Some(&3));
        assert_eq!(g.get(99), 0);
    }

    #[test]
    fn find_scans_from_a_starting_handle() {
        let mut g: Glist<i32> = Glist::with_n(5);
        let a = g.add_last(7);
        g.add_last(7);
        assert_eq!(g.find(&7, 0), a);
        assert_ne!(g.find(&7, a), a);
        assert_ne!(g.find(&7, a), 0);
    }

    #[test]
    fn remove_frees_handle_for_reuse() {
        let mut g: Glist<i32> = Glist::with_n(3);
        let a = g.add_last(1);
        g.remove(a).unwrap();
        assert!(!g.member(a));
        assert_eq!(g.length(), 0);
    }

    #[test]
    fn auto_expand_grows_default_capacity() {
        let mut g: Glist<i32> = Glist::new();
        for v in 0..25 {
            g.add_last(v);
        }
        assert_eq!(g.length(), 25);
        assert!(g.n() >= 25);
    }

    #[test]
    fn equality_compares_values_in_order() {
        let mut a: Glist<i32> = Glist::with_n(4);
        let mut b: Glist<i32> = Glist::with_n(4);
        a.add_last(1);
        a.add_last(2);
        b.add_last(1);
        b.add_last(2);
        assert_eq!(a, b);
        b.add_last(3);
        assert_ne!(a, b);
    }
}
