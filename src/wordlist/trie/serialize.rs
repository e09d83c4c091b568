use std::fmt::Formatter;

use derive_new::new;
use serde::de::{Error, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::wordlist::trie::node::TrieNode;
use crate::wordlist::trie::trie::Trie;

/// One node of a snapshot. A trie is written as its nodes in pre-order, so each
/// record's parent is the closest earlier record one level shallower.
#[derive(new, Serialize, Deserialize, Debug, PartialEq, Eq)]
struct NodeRecord {
    letter: Option<char>,
    depth: usize,
    ends_word: bool,
}

impl From<&TrieNode> for NodeRecord {
    fn from(node: &TrieNode) -> Self {
        NodeRecord::new(node.letter(), node.depth(), node.ends_word())
    }
}

impl Serialize for Trie {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        let mut seq = serializer.serialize_seq(None)?;
        for node in self.root.pre_order() {
            seq.serialize_element(&NodeRecord::from(node))?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Trie {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error> where D: Deserializer<'de> {
        deserializer.deserialize_seq(DeserializeTrieVisitor {})
    }
}

struct DeserializeTrieVisitor {}

impl<'de> Visitor<'de> for DeserializeTrieVisitor {
    type Value = Trie;

    fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
        write!(formatter, "a pre-order sequence of trie nodes")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error> where A: SeqAccess<'de> {
        match seq.next_element::<NodeRecord>()? {
            Some(NodeRecord { letter: None, depth: 0, ends_word: false }) => {}
            Some(other) => return Err(A::Error::custom(
                format!("first node must be an unmarked root, got {:?}", other))),
            None => return Ok(Trie::new()),
        }

        // nodes from the root down to the previous record, not yet attached to their parents
        let mut stack: Vec<TrieNode> = vec![TrieNode::root()];
        let mut size: usize = 0;

        while let Some(record) = seq.next_element::<NodeRecord>()? {
            let letter = record.letter
                .ok_or_else(|| A::Error::custom("only the root may have no letter"))?;
            if record.depth == 0 || record.depth > stack.len() {
                return Err(A::Error::custom(
                    format!("node at depth {} cannot follow depth {}", record.depth, stack.len() - 1)));
            }
            while stack.len() > record.depth {
                attach_top(&mut stack);
            }

            let parent = &stack[stack.len() - 1];
            if parent.children.contains_key(&letter) {
                return Err(A::Error::custom(
                    format!("duplicate child {:?} under {:?}", letter, parent.text())));
            }
            let mut node = TrieNode::child_of(parent.text(), parent.depth(), letter);
            if record.ends_word {
                node.set_ends_word(true);
                size += 1;
            }
            stack.push(node);
        }

        while stack.len() > 1 {
            attach_top(&mut stack);
        }
        let root = stack.pop().unwrap_or_default();
        Ok(Trie { root, size })
    }
}

/// Moves the deepest pending node into its parent's children.
fn attach_top(stack: &mut Vec<TrieNode>) {
    if let Some(node) = stack.pop() {
        if let (Some(letter), Some(parent)) = (node.letter(), stack.last_mut()) {
            parent.children.insert(letter, node);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::wordlist::index::Dictionary;
    use crate::wordlist::trie::trie::Trie;

    #[test]
    fn test_serialize_deserialize() {
        let words = vec!["hello", "help", "goodbye", "good"];
        let mut trie = Trie::new();
        trie.add_all(words.clone());

        let serialized = serde_json::to_string(&trie).unwrap();
        let new_trie = serde_json::from_str::<Trie>(&serialized).unwrap();

        words.iter().for_each(|word| assert!(new_trie.is_word(word)));
        assert!(!new_trie.is_word("hel"));
        assert_eq!(new_trie.size(), 4);
        assert_eq!(new_trie, trie);
    }

    #[test]
    fn snapshot_is_pre_order() {
        let mut trie = Trie::new();
        trie.add_word("ab");
        let serialized = serde_json::to_string(&trie).unwrap();
        assert_eq!(serialized, concat!(
            r#"[{"letter":null,"depth":0,"ends_word":false},"#,
            r#"{"letter":"a","depth":1,"ends_word":false},"#,
            r#"{"letter":"b","depth":2,"ends_word":true}]"#));
    }

    #[test]
    fn empty_sequence_is_empty_trie() {
        let trie = serde_json::from_str::<Trie>("[]").unwrap();
        assert_eq!(trie.size(), 0);
    }

    #[test]
    fn rejects_depth_jump() {
        let json = r#"[{"letter":null,"depth":0,"ends_word":false},
                       {"letter":"a","depth":2,"ends_word":true}]"#;
        assert!(serde_json::from_str::<Trie>(json).is_err());
    }

    #[test]
    fn rejects_duplicate_sibling() {
        let json = r#"[{"letter":null,"depth":0,"ends_word":false},
                       {"letter":"a","depth":1,"ends_word":true},
                       {"letter":"a","depth":1,"ends_word":true}]"#;
        assert!(serde_json::from_str::<Trie>(json).is_err());
    }

    #[test]
    fn rebuilds_siblings_after_deep_branch() {
        let mut trie = Trie::new();
        trie.add_all(vec!["abcd", "abx", "b", "bz"]);
        let restored = serde_json::from_str::<Trie>(&serde_json::to_string(&trie).unwrap()).unwrap();
        assert_eq!(restored, trie);
        assert_eq!(restored.size(), 4);
        assert_eq!(restored.to_string(), trie.to_string());
    }

    #[test]
    fn rejects_marked_root() {
        let json = r#"[{"letter":null,"depth":0,"ends_word":true}]"#;
        assert!(serde_json::from_str::<Trie>(json).is_err());
    }
}
