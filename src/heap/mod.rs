mod dheap;
mod dheapset;
mod diffheap;
mod fheap;
mod lazylheap;
mod lheap;

pub use dheap::Dheap;
pub use dheapset::DheapSet;
pub use diffheap::DiffHeap;
pub use fheap::Fheap;
pub use lazylheap::LazyLheap;
pub use lheap::Lheap;
