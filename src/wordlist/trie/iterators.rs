use std::collections::btree_map::Values;

use crate::wordlist::trie::node::TrieNode;

/// Iterates over a node's children in character order.
#[derive(Debug)]
pub struct TrieCursor<'a> {
    inner: Values<'a, char, TrieNode>,
}

impl<'a> Iterator for TrieCursor<'a> {
    type Item = &'a TrieNode;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl DoubleEndedIterator for TrieCursor<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<'a> IntoIterator for &'a TrieNode {
    type Item = &'a TrieNode;
    type IntoIter = TrieCursor<'a>;

    fn into_iter(self) -> Self::IntoIter {
        TrieCursor { inner: self.children.values() }
    }
}

/// Pre-order walk of a sub-tree: a node, then each child's sub-tree in character
/// order. Uses an explicit stack so deep tries cannot overflow the call stack.
#[derive(Debug)]
pub struct PreOrder<'a> {
    stack: Vec<&'a TrieNode>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a TrieNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // reversed so the smallest character is popped first
        self.stack.extend(node.into_iter().rev());
        Some(node)
    }
}

impl TrieNode {
    pub fn pre_order(&self) -> PreOrder<'_> {
        PreOrder { stack: vec![self] }
    }
}
