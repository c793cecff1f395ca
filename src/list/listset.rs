use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Write;

use crate::adt::{handle_to_string, Adt};
use crate::error::{Error, Result};

/// Non-member sentinel in the `nxt` array.
const NONE: i64 = -1;

/// A fixed collection of `nlists` singly-linked lists, all drawn from the
/// same handle space `1..n`: every handle is on at most one of the lists.
///
/// Unlike [`super::List`], whose single sequence is the whole container, a
/// `ListSet` names each sequence by an index `1..=nlists` and moves handles
/// between them with `add_first`/`add_last`/`remove_first`.
pub struct ListSet {
    n: usize,
    nlists: usize,
    head: Vec<usize>,
    tail: Vec<usize>,
    nxt: Vec<i64>,
}

impl ListSet {
    /// New collection of `nlists` empty lists over handles `1..=n`.
    pub fn new(n: usize, nlists: usize) -> Self {
        let mut s = ListSet {
            n: 0,
            nlists: 0,
            head: Vec::new(),
            tail: Vec::new(),
            nxt: Vec::new(),
        };
        s.resize_lists(n, nlists);
        s
    }

    fn resize_lists(&mut self, n: usize, nlists: usize) {
        self.n = n;
        self.nlists = nlists;
        self.head = vec![0; nlists + 1];
        self.tail = vec![0; nlists + 1];
        self.nxt = vec![NONE; n + 1];
    }

    /// Number of lists in the collection.
    pub fn num_lists(&self) -> usize {
        self.nlists
    }

    /// True iff `h` currently sits on some list.
    pub fn member(&self, h: usize) -> bool {
        h >= 1 && h <= self.n && self.nxt[h] != NONE
    }

    /// True iff list `lst` currently holds no handles.
    pub fn empty(&self, lst: usize) -> bool {
        self.head[lst] == 0
    }

    /// First handle on list `lst`, or `0`.
    pub fn first(&self, lst: usize) -> usize {
        self.head[lst]
    }

    /// Last handle on list `lst`, or `0`.
    pub fn last(&self, lst: usize) -> usize {
        self.tail[lst]
    }

    /// Successor of `h` within whichever list currently holds it, or `0`.
    pub fn next(&self, h: usize) -> usize {
        if h == 0 || h > self.n {
            return 0;
        }
        self.nxt[h].max(0) as usize
    }

    /// Append `h` (currently on no list) to the end of list `lst`.
    pub fn add_last(&mut self, h: usize, lst: usize) -> Result<()> {
        if h < 1 || h > self.n || self.member(h) || lst < 1 || lst > self.nlists {
            return Err(Error::InvalidArgument);
        }
        if self.head[lst] == 0 {
            self.head[lst] = h;
        } else {
            self.nxt[self.tail[lst]] = h as i64;
        }
        self.tail[lst] = h;
        self.nxt[h] = 0;
        Ok(())
    }

    /// Prepend `h` (currently on no list) to the front of list `lst`.
    pub fn add_first(&mut self, h: usize, lst: usize) -> Result<()> {
        if h < 1 || h > self.n || self.member(h) || lst < 1 || lst > self.nlists {
            return Err(Error::InvalidArgument);
        }
        if self.head[lst] == 0 {
            self.tail[lst] = h;
        }
        self.nxt[h] = self.head[lst] as i64;
        self.head[lst] = h;
        Ok(())
    }

    /// Remove and return the first handle on list `lst`, or `0` if empty.
    pub fn remove_first(&mut self, lst: usize) -> usize {
        let h = self.head[lst];
        if h == 0 {
            return 0;
        }
        self.head[lst] = self.nxt[h].max(0) as usize;
        if self.head[lst] == 0 {
            self.tail[lst] = 0;
        }
        self.nxt[h] = NONE;
        h
    }

    /// Remove every handle from every list, leaving `n`/`nlists` unchanged.
    pub fn clear_all(&mut self) {
        for lst in 1..=self.nlists {
            while !self.empty(lst) {
                self.remove_first(lst);
            }
        }
    }

    /// Textual form of a single list: `"lst: h1 h2 ... hk "`.
    pub fn list_to_string(&self, lst: usize) -> String {
        let mut s = String::new();
        let _ = write!(s, "{}: ", lst);
        let mut i = self.first(lst);
        while i != 0 {
            s.push_str(&handle_to_string(i, self.n));
            s.push(' ');
            i = self.next(i);
        }
        s
    }

    /// Canonical textual form: one `list_to_string` line per non-empty list.
    pub fn to_string(&self) -> String {
        let mut s = String::new();
        for lst in 1..=self.nlists {
            if !self.empty(lst) {
                s.push_str(&self.list_to_string(lst));
                s.push('\n');
            }
        }
        s
    }
}

impl Adt for ListSet {
    fn n(&self) -> usize {
        self.n
    }

    fn resize(&mut self, size: usize) {
        self.resize_lists(size, self.nlists.max(1));
    }

    fn expand(&mut self, size: usize) {
        if size <= self.n {
            return;
        }
        let old_n = self.n;
        self.n = size;
        self.nxt.resize(size + 1, NONE);
        for i in (old_n + 1)..=size {
            self.nxt[i] = NONE;
        }
    }

    fn clear(&mut self) {
        self.clear_all();
    }
}
