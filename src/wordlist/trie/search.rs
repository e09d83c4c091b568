use tracing::trace;

use crate::alphabet::normalize;
use crate::wordlist::index::AutoComplete;
use crate::wordlist::trie::node::TrieNode;
use crate::wordlist::trie::trie::Trie;

impl Trie {
    /// Returns up to `num_completions` words starting with `prefix`, shortest first,
    /// including the prefix itself when it is a word. Words of equal length keep
    /// their pre-order (alphabetical) order.
    ///
    /// The result is empty when the prefix is not in the trie, when nothing below it
    /// is a word, or when `num_completions` is zero.
    pub fn predict_completions(&self, prefix: &str, num_completions: usize) -> Vec<String> {
        if num_completions == 0 {
            return vec![];
        }
        let prefix = normalize(prefix);
        let stem = match self.root.descend(&prefix) {
            Some(stem) => stem,
            None => {
                trace!(prefix = %prefix, "prefix not in trie");
                return vec![];
            }
        };

        let mut found = Self::collect_words(stem);
        found.sort_by_key(|word| word.chars().count());
        found.truncate(num_completions);
        found
    }

    /// Every word in the sub-tree rooted at `stem`, in pre-order.
    fn collect_words(stem: &TrieNode) -> Vec<String> {
        stem.pre_order()
            .filter(|x| x.ends_word())
            .map(|x| x.text().to_string())
            .collect()
    }
}

impl AutoComplete for Trie {
    fn predict_completions(&self, prefix: &str, num_completions: usize) -> Vec<String> {
        Trie::predict_completions(self, prefix, num_completions)
    }
}
