use std::fmt::{Debug, Display, Formatter};

use tracing::trace;

use crate::alphabet::normalize;
use crate::wordlist::index::Dictionary;
use crate::wordlist::trie::node::TrieNode;

/// Case-insensitive dictionary over a character trie.
#[derive(Default, PartialEq, Eq)]
pub struct Trie {
    pub(crate) root: TrieNode,
    pub(crate) size: usize,
}

impl Trie {
    pub fn new() -> Trie {
        Trie {
            root: TrieNode::root(),
            size: 0,
        }
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Registers `word` (lowercased). The empty string is never registered.
    pub fn add_word(&mut self, word: &str) -> bool {
        let word = normalize(word);
        if word.is_empty() {
            return false;
        }
        let mut current = &mut self.root;
        for c in word.chars() {
            current = current.insert_child(c);
        }
        if current.ends_word() {
            return false;
        }
        current.set_ends_word(true);
        self.size += 1;
        trace!(word = %word, size = self.size, "added word");
        true
    }

    pub fn is_word(&self, word: &str) -> bool {
        self.root.descend(&normalize(word))
            .map(|x| x.ends_word()).unwrap_or(false)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Prints every node's text in pre-order, one per line, root first.
    pub fn print_tree(&self) {
        print!("{}", self);
    }
}

impl Dictionary for Trie {
    fn add_word(&mut self, word: &str) -> bool {
        Trie::add_word(self, word)
    }

    fn is_word(&self, word: &str) -> bool {
        Trie::is_word(self, word)
    }

    fn size(&self) -> usize {
        Trie::size(self)
    }
}

impl Display for Trie {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for node in self.root.pre_order() {
            writeln!(f, "{}", node.text())?;
        }
        Ok(())
    }
}

impl Debug for Trie {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.root.pre_order()).finish()
    }
}
