use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{Debug, Formatter};

/// A single character-indexed node. Each node owns its children, so the trie is
/// a strict tree hanging off one sentinel root.
#[derive(Default)]
pub struct TrieNode {
    pub(crate) children: BTreeMap<char, TrieNode>,
    pub(crate) letter: Option<char>,
    pub(crate) is_terminal: bool,
    pub(crate) depth: usize,
    pub(crate) path: String,
}

impl TrieNode {
    /// The sentinel root: empty text, no letter, never a word end.
    pub(crate) fn root() -> TrieNode {
        Default::default()
    }

    pub fn child_for(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    /// Returns the child reached by `c`, creating it first if it does not exist yet.
    pub fn insert_child(&mut self, c: char) -> &mut TrieNode {
        match self.children.entry(c) {
            Entry::Occupied(child) => child.into_mut(),
            Entry::Vacant(slot) => {
                let child = TrieNode::child_of(&self.path, self.depth, c);
                slot.insert(child)
            }
        }
    }

    /// A detached, unmarked node one level below a node with text `parent_path`.
    pub(crate) fn child_of(parent_path: &str, parent_depth: usize, c: char) -> TrieNode {
        let mut path = String::with_capacity(parent_path.len() + c.len_utf8());
        path.push_str(parent_path);
        path.push(c);
        TrieNode {
            children: BTreeMap::new(),
            letter: Some(c),
            is_terminal: false,
            depth: parent_depth + 1,
            path,
        }
    }

    /// Characters with an existing child, in ascending order.
    pub fn valid_next_characters(&self) -> BTreeSet<char> {
        self.children.keys().copied().collect()
    }

    pub fn ends_word(&self) -> bool {
        self.is_terminal
    }

    pub fn set_ends_word(&mut self, ends_word: bool) {
        self.is_terminal = ends_word;
    }

    /// The string spelled by the path from the root to this node.
    pub fn text(&self) -> &str {
        &self.path
    }

    pub fn letter(&self) -> Option<char> {
        self.letter
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Follows `word` one character at a time from this node.
    pub(crate) fn descend(&self, word: &str) -> Option<&TrieNode> {
        word.chars().try_fold(self, |node, c| node.child_for(c))
    }
}

// Dropping children iteratively keeps very long words from exhausting the stack.
impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut stack: Vec<TrieNode> = std::mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}

// Pre-order shape comparison; the derived impl would recurse once per level.
impl PartialEq for TrieNode {
    fn eq(&self, other: &Self) -> bool {
        fn shape(node: &TrieNode) -> (Option<char>, usize, bool, usize) {
            (node.letter, node.depth, node.is_terminal, node.children.len())
        }
        self.pre_order().map(shape).eq(other.pre_order().map(shape))
    }
}

impl Eq for TrieNode {}

impl Debug for TrieNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrieNode")
            .field("path", &self.path)
            .field("letter", &self.letter)
            .field("depth", &self.depth)
            .field("is_terminal", &self.is_terminal)
            .field("children", &self.children.keys().collect::<Vec<_>>())
            .finish()
    }
}
