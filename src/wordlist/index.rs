/// Exact-membership side of the dictionary.
pub trait Dictionary {
    /// Registers `word`, returning `false` if it was already present.
    fn add_word(&mut self, word: &str) -> bool;
    fn is_word(&self, word: &str) -> bool;
    /// Number of distinct words registered.
    fn size(&self) -> usize;

    /// Adds every item, returning how many of them were new.
    fn add_all<'a, I>(&mut self, items: I) -> usize
        where I: IntoIterator<Item = &'a str>, Self: Sized {
        items.into_iter().filter(|x| self.add_word(x)).count()
    }
}

pub trait AutoComplete {
    /// Up to `num_completions` registered words starting with `prefix`, shortest first.
    fn predict_completions(&self, prefix: &str, num_completions: usize) -> Vec<String>;
}
