use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::adt::{handle_to_string, Adt};
use crate::error::{Error, Result};

#[derive(Clone, Copy)]
struct Lnode {
    succ: usize, // 0 for the last item in the list
    pred: usize, // tail for the first item in the list
}

/// A forest of named linear lists partitioning `1..n`. Each list's id is its
/// first handle; the tail's `pred` points back to the id, closing a ring that
/// [`Dlists::find_list`] walks to identify a handle's list in O(list length).
pub struct Dlists {
    n: usize,
    node: Vec<Lnode>,
}

impl Dlists {
    /// New forest over `1..=n`, every handle its own singleton list.
    pub fn new(n: usize) -> Self {
        let mut d = Dlists { n: 0, node: Vec::new() };
        d.resize(n);
        d
    }

    /// True iff `h` is the only item in its list.
    pub fn singleton(&self, h: usize) -> bool {
        self.node[h].pred == h
    }

    /// First item of the list named by id `h`. (The id *is* the first item.)
    pub fn first(&self, h: usize) -> usize {
        h
    }

    /// Last item of the list named by id `h`.
    pub fn last(&self, h: usize) -> usize {
        self.node[h].pred
    }

    /// Successor of `h` in its own list, or `0` if `h` is last.
    pub fn next(&self, h: usize) -> usize {
        self.node[h].succ
    }

    /// Predecessor of `h` in its own list, or `0` if `h` is first.
    pub fn prev(&self, h: usize) -> usize {
        let p = self.node[h].pred;
        if self.node[p].succ == 0 {
            0
        } else {
            p
        }
    }

    /// Walk from `h` to the id of the list containing it, in O(list length).
    pub fn find_list(&self, h: usize) -> usize {
        debug_assert!(h >= 1 && h <= self.n, "find_list: handle out of range");
        let mut i = h;
        loop {
            let p = self.node[i].pred;
            if self.node[p].succ == 0 {
                return i;
            }
            i = p;
        }
    }

    /// Change which member of `i`'s list is its id, to `j`. The physical
    /// chain is untouched; this just moves the break in the `succ` ring
    /// (every list is really a closed ring via `pred`, with one `succ` link
    /// nulled out to mark where forward traversal stops) from the old
    /// tail to `j`'s predecessor, so `j` becomes the new first element.
    pub fn rename(&mut self, i: usize, j: usize) -> Result<()> {
        if i < 1 || i > self.n || j < 1 || j > self.n {
            return Err(Error::InvalidArgument);
        }
        let old_tail = self.node[i].pred;
        self.node[old_tail].succ = i;
        let new_tail = self.node[j].pred;
        self.node[new_tail].succ = 0;
        Ok(())
    }

    /// Remove `h` from the list identified by `id`, turning `h` into a
    /// singleton. Returns the (possibly renamed) id of the remaining list,
    /// or `0` if the removal emptied it.
    pub fn remove(&mut self, h: usize, id: usize) -> Result<usize> {
        if h < 1 || h > self.n || id < 1 || id > self.n {
            return Err(Error::InvalidArgument);
        }
        let new_id = if id != h {
            id
        } else if self.singleton(h) {
            0
        } else {
            self.node[h].succ
        };
        let (p, s) = (self.node[h].pred, self.node[h].succ);
        self.node[p].succ = s;
        self.node[s].pred = p;
        if new_id != 0 && self.node[new_id].pred == h {
            self.node[new_id].pred = self.node[h].pred;
        }
        if new_id != 0 {
            let tail = self.node[new_id].pred;
            self.node[tail].succ = 0;
        }
        self.node[h].succ = 0;
        self.node[h].pred = h;
        Ok(new_id)
    }

    /// Concatenate the list named `i` with the list named `j`. Returns the id
    /// of the combined list (`i`, when both are non-zero).
    pub fn join(&mut self, i: usize, j: usize) -> Result<usize> {
        if i == 0 || i == j {
            return Ok(j);
        }
        if j == 0 {
            return Ok(i);
        }
        if i > self.n || j > self.n {
            return Err(Error::InvalidArgument);
        }
        let pi = self.node[i].pred;
        let pj = self.node[j].pred;
        self.node[pi].succ = j;
        self.node[j].pred = pi;
        self.node[i].pred = pj;
        Ok(i)
    }

    /// Canonical textual form: each non-singleton list bracketed, comma-separated.
    pub fn to_string(&self) -> String {
        let mut s = String::from("{");
        let mut first_group = true;
        for i in 1..=self.n {
            if self.node[self.node[i].pred].succ != 0 {
                continue; // not a list id
            }
            if self.singleton(i) {
                continue;
            }
            if !first_group {
                s.push_str(", ");
            }
            first_group = false;
            s.push('[');
            let mut j = self.first(i);
            let mut first_member = true;
            while j != 0 {
                if !first_member {
                    s.push(' ');
                }
                first_member = false;
                s.push_str(&handle_to_string(j, self.n));
                j = self.next(j);
            }
            s.push(']');
        }
        s.push('}');
        s
    }
}

impl Adt for Dlists {
    fn n(&self) -> usize {
        self.n
    }

    fn resize(&mut self, size: usize) {
        self.n = size;
        self.node = (0..=size).map(|i| Lnode { succ: 0, pred: i }).collect();
    }

    fn expand(&mut self, size: usize) {
        if size <= self.n {
            return;
        }
        let old_n = self.n;
        let mut node = vec![Lnode { succ: 0, pred: 0 }; size + 1];
        node[..=old_n].copy_from_slice(&self.node);
        for i in (old_n + 1)..=size {
            node[i] = Lnode { succ: 0, pred: i };
        }
        self.node = node;
        self.n = size;
    }

    fn clear(&mut self) {
        for i in 0..=self.n {
            self.node[i] = Lnode { succ: 0, pred: i };
        }
    }
}
