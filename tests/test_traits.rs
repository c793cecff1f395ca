use handle_collections::hash::{HashMap, HashSet};
use handle_collections::heap::{DheapSet, Dheap, DiffHeap, Fheap, LazyLheap, Lheap};
use handle_collections::list::{Clist, Dlist, Dlists, DjSets, List, ListPair, ListSet, Rlist};
use handle_collections::tree::{Bst, DualKeyBst, RbBst, SplayBst};
use handle_collections::glist::Glist;

fn is_auto_trait_friendly<T: Sized + Send + Sync + Unpin>() {}
fn is_sized_and_unpin<T: Sized + Unpin>() {}
fn is_default<T: Default>() {}

#[test]
fn core_containers_are_send_sync() {
    is_auto_trait_friendly::<List>();
    is_auto_trait_friendly::<Dlist>();
    is_auto_trait_friendly::<Clist>();
    is_auto_trait_friendly::<Dlists>();
    is_auto_trait_friendly::<ListSet>();
    is_auto_trait_friendly::<Rlist>();
    is_auto_trait_friendly::<ListPair>();
    is_auto_trait_friendly::<DjSets>();
    is_auto_trait_friendly::<Dheap<i64>>();
    is_auto_trait_friendly::<DheapSet<i64>>();
    is_auto_trait_friendly::<DiffHeap<i64>>();
    is_auto_trait_friendly::<Lheap<i64>>();
    is_auto_trait_friendly::<Fheap<i64>>();
    is_auto_trait_friendly::<Bst<i64>>();
    is_auto_trait_friendly::<RbBst<i64>>();
    is_auto_trait_friendly::<SplayBst<i64>>();
    is_auto_trait_friendly::<DualKeyBst<i64>>();
    is_auto_trait_friendly::<HashSet<i64>>();
    is_auto_trait_friendly::<HashMap<i64, i64>>();
    is_auto_trait_friendly::<Glist<i64>>();
}

#[test]
fn lazy_lheap_is_sized_and_unpin() {
    // Its `is_deleted` predicate is a boxed `dyn Fn`, so it doesn't carry
    // Send/Sync unless the caller's closure does; check the traits that
    // hold unconditionally instead.
    is_sized_and_unpin::<LazyLheap<i64>>();
}

#[test]
fn glist_is_default_constructible() {
    is_default::<Glist<i64>>();
}
