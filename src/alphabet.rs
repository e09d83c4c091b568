/// Case folding applied to every word before it touches the trie.
pub fn normalize(s: &str) -> String {
    s.to_lowercase()
}
