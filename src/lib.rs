/*!
Arena-based containers over a shared `1..n` handle space: linked lists, priority
queues, and search trees, all addressed by plain integer handles instead of
pointers.

### About

Every container here is parameterized by a handle capacity `n`: the valid handles
are the integers `1..=n`, and `0` is reserved as the "no such handle" sentinel.
The same handle can name the same logical item across several containers built
over the same `n` -- that's what lets higher-level graph algorithms (matching,
flow, shortest paths, none of which live in this crate) compose several of these
structures and pass handles between them instead of copying data.

Three families:

* **Linked collections** ([`list`]) -- [`List`](crate::list::List),
  [`Dlist`](crate::list::Dlist), [`Clist`](crate::list::Clist),
  [`Dlists`](crate::list::Dlists), [`Rlist`](crate::list::Rlist),
  [`ListPair`](crate::list::ListPair) and [`DjSets`](crate::list::DjSets)
  (union-find).
* **Priority queues** ([`heap`]) -- [`Dheap`](crate::heap::Dheap),
  [`DheapSet`](crate::heap::DheapSet), [`DiffHeap`](crate::heap::DiffHeap),
  [`Lheap`](crate::heap::Lheap), [`LazyLheap`](crate::heap::LazyLheap) and
  [`Fheap`](crate::heap::Fheap).
* **Search trees and hashing** ([`tree`], [`hash`]) -- [`Bst`](crate::tree::Bst),
  [`RbBst`](crate::tree::RbBst), [`SplayBst`](crate::tree::SplayBst),
  [`DualKeyBst`](crate::tree::DualKeyBst), [`HashSet`](crate::hash::HashSet) and
  [`HashMap`](crate::hash::HashMap).

Plus [`Glist`](crate::glist::Glist), a random-access list of arbitrary values
addressed the same way.

### Design

* **Safe:** `#![forbid(unsafe_code)]`, including dependencies.
* **Fallible:** every operation that can fail (bad handle, exhausted capacity)
  returns a [`Result<_, Error>`](crate::error::Error) rather than panicking,
  except where the contract explicitly documents a `debug_assert!`-checked
  precondition (the caller's responsibility).
* **Arena + index handles:** each container owns parallel arrays sized to `n`;
  a handle is a shared *name*, never shared mutable storage. No container holds
  a reference into another.
* **`#![no_std]` with `alloc`:** containers support runtime `resize`/`expand`
  and optional auto-expand-on-insert, which isn't compatible with fixed stack
  capacity, so this crate uses `alloc::vec::Vec` rather than a purely
  stack-resident backing store.
*/

#![forbid(unsafe_code)]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod adt;
pub mod error;

pub mod list;
pub mod heap;
pub mod tree;
pub mod hash;
pub mod glist;

pub use crate::adt::Adt;
pub use crate::error::{Error, Result};
