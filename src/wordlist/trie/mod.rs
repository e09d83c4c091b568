pub mod trie;
pub mod node;
pub mod search;
pub mod iterators;

mod serialize;
