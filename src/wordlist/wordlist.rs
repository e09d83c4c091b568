use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use delegate::delegate;
use tracing::{debug, info, warn};
use typed_builder::TypedBuilder;

use crate::error::{Error, Result};
use crate::wordlist::index::{AutoComplete, Dictionary};
use crate::wordlist::trie::trie::Trie;

/// A trie loaded from word-list files.
#[derive(Debug, Default)]
pub struct Wordlist {
    trie: Trie,
}

/// Layout of a word-list file. With no delimiter every line is one word; with a
/// delimiter the word is taken from `word_column` (0 by default).
#[derive(TypedBuilder, Debug, Clone)]
pub struct FileFormat {
    #[builder(default, setter(strip_option))]
    delimiter: Option<char>,
    #[builder(default, setter(strip_option))]
    word_column: Option<usize>,
}

impl Default for FileFormat {
    fn default() -> Self {
        FileFormat::builder().build()
    }
}

impl FileFormat {
    fn parse_line<'a>(&self, line: &'a str, line_no: usize) -> Result<&'a str> {
        match self.delimiter {
            None => Ok(line.trim()),
            Some(delimiter) => {
                let word_idx = self.word_column.unwrap_or(0);
                line.split(delimiter)
                    .nth(word_idx)
                    .map(str::trim)
                    .ok_or_else(|| Error::MalformedLine {
                        line: line_no,
                        reason: format!("no column {} when split on {:?}", word_idx, delimiter),
                    })
            }
        }
    }
}

impl Wordlist {
    pub fn new() -> Wordlist {
        Wordlist { trie: Trie::new() }
    }

    pub fn from_file<P: AsRef<Path>>(path: P, format: &FileFormat) -> Result<Wordlist> {
        let mut wl = Wordlist::new();
        wl.load_file(path, format)?;
        Ok(wl)
    }

    pub fn load_file<P: AsRef<Path>>(&mut self, path: P, format: &FileFormat) -> Result<usize> {
        let path = path.as_ref();
        info!(path = %path.display(), "reading words");
        let file = File::open(path)?;
        self.load(BufReader::new(file), format)
    }

    /// Adds every word in `reader`, returning how many were new. Blank lines are
    /// skipped and lines missing the word column are logged and skipped.
    pub fn load<R: BufRead>(&mut self, reader: R, format: &FileFormat) -> Result<usize> {
        let start = Instant::now();
        let mut added: usize = 0;
        let mut skipped: usize = 0;

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match format.parse_line(&line, idx + 1) {
                Ok(word) if word.is_empty() => skipped += 1,
                Ok(word) => {
                    if self.trie.add_word(word) {
                        added += 1;
                        if added % 100_000 == 0 {
                            debug!(added, word, "loading");
                        }
                    }
                }
                Err(e) => {
                    warn!("{}", e);
                    skipped += 1;
                }
            }
        }

        info!(added, skipped, size = self.trie.size(),
              elapsed_ms = start.elapsed().as_millis() as u64, "loaded words");
        Ok(added)
    }

    /// Reads a JSON snapshot written by [`Wordlist::to_json`].
    pub fn from_json(json: &str) -> Result<Wordlist> {
        Ok(Wordlist { trie: serde_json::from_str(json)? })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.trie)?)
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    delegate! {
        to self.trie {
            pub fn add_word(&mut self, word: &str) -> bool;
            pub fn is_word(&self, word: &str) -> bool;
            pub fn size(&self) -> usize;
            pub fn predict_completions(&self, prefix: &str, num_completions: usize) -> Vec<String>;
            pub fn print_tree(&self);
        }
    }
}

impl From<Trie> for Wordlist {
    fn from(trie: Trie) -> Self {
        Wordlist { trie }
    }
}

impl Dictionary for Wordlist {
    fn add_word(&mut self, word: &str) -> bool {
        self.trie.add_word(word)
    }

    fn is_word(&self, word: &str) -> bool {
        self.trie.is_word(word)
    }

    fn size(&self) -> usize {
        self.trie.size()
    }
}

impl AutoComplete for Wordlist {
    fn predict_completions(&self, prefix: &str, num_completions: usize) -> Vec<String> {
        self.trie.predict_completions(prefix, num_completions)
    }
}
