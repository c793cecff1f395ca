use alloc::string::String;

use crate::adt::Adt;
use crate::error::{Error, Result};
use crate::list::ListPair;
use super::DualKeyBst;

/// A step function over `x >= 0`, represented by its change-points in a
/// [`DualKeyBst`] keyed on `x`. Between consecutive change-points the
/// function is constant, so a range read or range update only has to touch
/// the change-points bracketing the range.
///
/// Handle `1` is a permanent change-point at `x = 0`; every other handle is
/// drawn from `free` on demand when a range update needs an exact boundary
/// that doesn't exist yet.
pub struct Staircase {
    points: DualKeyBst<i64>,
    free: ListPair,
}

impl Staircase {
    /// New function, constant zero over `[0, n]`.
    pub fn new(n: usize) -> Self {
        let cap = 2 * n + 1;
        let mut points = DualKeyBst::new(cap);
        let mut free = ListPair::new(cap);
        let _ = free.swap(1, 0);
        let mut root = 0;
        let _ = points.insert(1, 0, 0, &mut root);
        Staircase { points, free }
    }

    fn alloc(&mut self) -> Result<usize> {
        let h = self.free.first_out();
        if h == 0 {
            return Err(Error::OutOfSpace);
        }
        self.free.swap(h, self.free.last_in())?;
        Ok(h)
    }

    /// The function's value at `x`.
    pub fn value(&mut self, x: i64) -> i64 {
        let root = self.points.find(1);
        let v = self.points.access(&x, root);
        self.points.key2(v).unwrap_or(0)
    }

    /// Makes sure a change-point exists at exactly `x`, inserting one
    /// (carrying the value already in effect there) if it doesn't.
    fn ensure_point(&mut self, x: i64) -> Result<()> {
        let root = self.points.find(1);
        let probe = self.points.access(&x, root);
        if *self.points.key1(probe).unwrap() == x {
            return Ok(());
        }
        let base = self.points.key2(probe)?;
        let h = self.alloc()?;
        let mut r = self.points.find(1);
        self.points.insert(h, x, base, &mut r)
    }

    /// Smallest value the function takes on in `[lo, hi]`.
    pub fn find_min(&mut self, lo: i64, hi: i64) -> Result<i64> {
        if lo > hi || lo < 0 {
            return Err(Error::InvalidArgument);
        }
        let root = self.points.find(1);
        let lo_node = self.points.access(&lo, root);
        let (below, rest) = self.points.split(lo_node, root)?;
        let mut min = if *self.points.key1(lo_node).unwrap() >= lo {
            self.points.key2(lo_node)?
        } else {
            i64::MAX
        };

        let whole = if rest != 0 {
            let hi_node = self.points.access(&hi, rest);
            let (mid, above) = self.points.split(hi_node, rest)?;
            let hn_key2 = self.points.key2(hi_node)?;
            if hn_key2 < min {
                min = hn_key2;
            }
            let mid_min = self.points.min2(mid);
            if mid != 0 && mid_min < min {
                min = mid_min;
            }
            let hi_portion = self.points.join(mid, hi_node, above)?;
            self.points.join(below, lo_node, hi_portion)?
        } else {
            self.points.join(below, lo_node, 0)?
        };
        debug_assert!(self.points.is_consistent(whole));
        Ok(min)
    }

    /// Adds `diff` to the function's value over `[lo, hi]`.
    pub fn change(&mut self, lo: i64, hi: i64, diff: i64) -> Result<()> {
        if lo > hi || lo < 0 {
            return Err(Error::InvalidArgument);
        }
        let hi1 = hi + 1;
        self.ensure_point(lo)?;
        self.ensure_point(hi1)?;

        let root = self.points.find(1);
        let lo_node = self.points.access(&lo, root);
        let (below, rest) = self.points.split(lo_node, root)?;

        let hi1_node = self.points.access(&hi1, rest);
        let (between, above) = self.points.split(hi1_node, rest)?;

        self.points.change_all2(diff, lo_node);
        self.points.change_all2(diff, between);

        let right = self.points.join(between, hi1_node, above)?;
        let whole = self.points.join(below, lo_node, right)?;
        debug_assert!(self.points.is_consistent(whole));
        Ok(())
    }

    /// Canonical textual form: inorder `(x,y)` change-points.
    pub fn to_string(&mut self) -> String {
        let root = self.points.find(1);
        self.points.to_string(root)
    }
}

impl Adt for Staircase {
    fn n(&self) -> usize {
        self.points.n() / 2
    }

    fn resize(&mut self, size: usize) {
        *self = Staircase::new(size);
    }

    fn expand(&mut self, size: usize) {
        if size <= self.n() {
            return;
        }
        self.points.expand(2 * size + 1);
        self.free.expand(2 * size + 1);
    }

    fn clear(&mut self) {
        let n = self.n();
        *self = Staircase::new(n);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two overlapping range changes produce a four-step staircase.
    #[test]
    fn overlapping_changes_build_a_staircase() {
        let mut s = Staircase::new(100);
        assert_eq!(s.find_min(0, 100).unwrap(), 0);
        s.change(10, 20, 5).unwrap();
        s.change(15, 25, 3).unwrap();
        assert_eq!(s.find_min(0, 9).unwrap(), 0);
        assert_eq!(s.find_min(10, 14).unwrap(), 5);
        assert_eq!(s.find_min(15, 20).unwrap(), 8);
        assert_eq!(s.find_min(21, 25).unwrap(), 3);
        assert_eq!(s.find_min(26, 100).unwrap(), 0);
    }

    #[test]
    fn value_matches_find_min_on_a_point() {
        let mut s = Staircase::new(50);
        s.change(5, 10, 7).unwrap();
        assert_eq!(s.value(7), 7);
        assert_eq!(s.value(0), 0);
        assert_eq!(s.value(11), 0);
    }

    #[test]
    fn overlapping_changes_accumulate() {
        let mut s = Staircase::new(50);
        s.change(0, 50, 1).unwrap();
        s.change(10, 20, 2).unwrap();
        assert_eq!(s.find_min(10, 20).unwrap(), 3);
        assert_eq!(s.find_min(0, 9).unwrap(), 1);
        assert_eq!(s.find_min(21, 50).unwrap(), 1);
    }
}
