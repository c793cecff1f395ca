mod bst;
mod dualkeybst;
mod rbbst;
mod splaybst;
mod staircase;

pub use bst::Bst;
pub use dualkeybst::DualKeyBst;
pub use rbbst::RbBst;
pub use splaybst::SplayBst;
pub use staircase::Staircase;
