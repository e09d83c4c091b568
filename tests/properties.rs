//! Property tests for the dictionary and completion contract.

use std::collections::BTreeSet;

use autocomplete_trie::{AutoComplete, Dictionary, Trie};
use maplit::btreeset;
use proptest::prelude::*;

fn word_strategy() -> impl Strategy<Value = String> {
    "[a-eA-E]{1,6}"
}

fn dict_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word_strategy(), 1..=40)
}

fn build(words: &[String]) -> Trie {
    let mut trie = Trie::new();
    trie.add_all(words.iter().map(String::as_str));
    trie
}

fn distinct(words: &[String]) -> BTreeSet<String> {
    words.iter().map(|x| x.to_lowercase()).collect()
}

proptest! {
    #[test]
    fn size_counts_distinct_folded_words(words in dict_strategy()) {
        let trie = build(&words);
        prop_assert_eq!(trie.size(), distinct(&words).len());
    }

    #[test]
    fn second_insert_returns_false(words in dict_strategy()) {
        let mut trie = build(&words);
        let before = trie.size();
        for word in &words {
            prop_assert!(!trie.add_word(word));
            prop_assert!(!trie.add_word(&word.to_uppercase()));
        }
        prop_assert_eq!(trie.size(), before);
    }

    #[test]
    fn size_never_decreases(words in dict_strategy()) {
        let mut trie = Trie::new();
        let mut last = 0;
        for word in &words {
            trie.add_word(word);
            prop_assert!(trie.size() >= last);
            last = trie.size();
        }
    }

    #[test]
    fn every_inserted_word_is_found_in_any_case(words in dict_strategy()) {
        let trie = build(&words);
        for word in &words {
            prop_assert!(trie.is_word(word));
            prop_assert!(trie.is_word(&word.to_uppercase()));
            prop_assert!(trie.is_word(&word.to_lowercase()));
        }
    }

    #[test]
    fn strict_prefixes_are_words_only_if_inserted(words in dict_strategy()) {
        let trie = build(&words);
        let known = distinct(&words);
        for word in &known {
            for end in 1..word.len() {
                let prefix = &word[..end];
                prop_assert_eq!(trie.is_word(prefix), known.contains(prefix));
            }
        }
    }

    #[test]
    fn completions_are_complete_and_unique(words in dict_strategy()) {
        let trie = build(&words);
        for word in distinct(&words) {
            for end in 0..=word.len() {
                let prefix = &word[..end];
                let found = trie.predict_completions(prefix, trie.size());
                prop_assert_eq!(found.iter().filter(|x| **x == word).count(), 1);
                prop_assert!(found.iter().all(|x| x.starts_with(prefix)));
            }
        }
    }

    #[test]
    fn completions_are_bounded_and_ranked(words in dict_strategy(), prefix in "[a-e]{0,2}", n in 0usize..8) {
        let trie = build(&words);
        let matching = distinct(&words).into_iter().filter(|x| x.starts_with(&prefix)).count();
        let found = trie.predict_completions(&prefix, n);
        prop_assert_eq!(found.len(), n.min(matching));
        prop_assert!(found.windows(2).all(|w| w[0].len() <= w[1].len()));
        for pair in found.windows(2).filter(|w| w[0].len() == w[1].len()) {
            prop_assert!(pair[0] < pair[1]);
        }
    }
}

#[test]
fn length_ranking_example() {
    let mut trie = Trie::new();
    trie.add_all(vec!["cat", "car", "care", "carpet"]);
    let found = trie.predict_completions("car", 3);
    assert_eq!(found, vec!["car", "care", "carpet"]);
}

#[test]
fn prefix_miss_example() {
    let mut trie = Trie::new();
    trie.add_all(vec!["cat", "car"]);
    assert!(trie.predict_completions("xyz", 5).is_empty());
}

#[test]
fn works_through_the_traits() {
    fn complete_all<D: Dictionary + AutoComplete>(dict: &mut D) -> BTreeSet<String> {
        dict.add_all(vec!["Sea", "seal", "see", "sew"]);
        dict.predict_completions("se", dict.size()).into_iter().collect()
    }
    let mut trie = Trie::new();
    assert_eq!(complete_all(&mut trie),
               btreeset! {"sea".to_string(), "seal".to_string(), "see".to_string(), "sew".to_string()});
}
