//! L1: linear and circular list families built directly on the L0 [`crate::adt::Adt`]
//! capability, plus the two partition structures (`ListPair`, `DjSets`) that share
//! the same handle space.

mod clist;
mod djsets;
mod dlist;
mod dlists;
mod list;
mod listpair;
mod listset;
mod rlist;

pub use clist::Clist;
pub use djsets::DjSets;
pub use dlist::Dlist;
pub use dlists::Dlists;
pub use list::List;
pub use listpair::ListPair;
pub use listset::ListSet;
pub use rlist::Rlist;
