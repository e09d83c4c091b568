pub mod trie;
pub mod index;
#[allow(clippy::module_inception)]
pub mod wordlist;
