//! L3: 2-left hashing over the shared handle space. [`HashSet`] assigns a
//! fresh handle to every distinct element; [`HashMap`] layers a `values[]`
//! array on top to pair each key's handle with a value.

mod hashmap;
mod hashset;

pub use hashmap::HashMap;
pub use hashset::HashSet;
