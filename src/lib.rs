//! In-memory dictionary with exact lookup and shortest-first prefix completion,
//! backed by a character trie.

pub mod alphabet;
pub mod error;
pub mod wordlist;

pub use crate::error::{Error, Result};
pub use crate::wordlist::index::{AutoComplete, Dictionary};
pub use crate::wordlist::trie::node::TrieNode;
pub use crate::wordlist::trie::trie::Trie;
pub use crate::wordlist::wordlist::{FileFormat, Wordlist};
