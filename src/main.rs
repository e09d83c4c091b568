use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use structopt::StructOpt;
use tracing::info;
use tracing_subscriber::EnvFilter;

use autocomplete_trie::{FileFormat, Wordlist};

/// Load a word list and complete a prefix against it, shortest words first.
#[derive(StructOpt)]
struct Cli {
    /// The word list to read (one word per line unless --delimiter is given)
    #[structopt(parse(from_os_str))]
    path: PathBuf,
    /// Prefix to complete
    #[structopt(default_value = "")]
    prefix: String,
    /// Maximum number of completions to print
    #[structopt(short = "n", long, default_value = "10")]
    count: usize,
    /// Column delimiter of the word list
    #[structopt(short, long)]
    delimiter: Option<char>,
    /// Column holding the word; needs --delimiter
    #[structopt(short, long, requires = "delimiter")]
    column: Option<usize>,
    /// Treat the input file as a JSON snapshot written by --save
    #[structopt(long)]
    snapshot: bool,
    /// Only report whether this word is in the list
    #[structopt(long)]
    check: Option<String>,
    /// Print every trie node in pre-order
    #[structopt(long)]
    dump: bool,
    /// Write a JSON snapshot of the loaded trie to this file
    #[structopt(long, parse(from_os_str))]
    save: Option<PathBuf>,
}

impl Cli {
    fn file_format(&self) -> FileFormat {
        match (self.delimiter, self.column) {
            (Some(delimiter), Some(column)) =>
                FileFormat::builder().delimiter(delimiter).word_column(column).build(),
            (Some(delimiter), None) => FileFormat::builder().delimiter(delimiter).build(),
            (None, _) => FileFormat::default(),
        }
    }

    fn load(&self) -> Result<Wordlist> {
        if self.snapshot {
            let json = fs::read_to_string(&self.path)
                .with_context(|| format!("reading snapshot {}", self.path.display()))?;
            Ok(Wordlist::from_json(&json)?)
        } else {
            Wordlist::from_file(&self.path, &self.file_format())
                .with_context(|| format!("loading word list {}", self.path.display()))
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::from_args();
    let wl = args.load()?;
    info!(words = wl.size(), "dictionary ready");

    if let Some(path) = &args.save {
        fs::write(path, wl.to_json()?)
            .with_context(|| format!("writing snapshot {}", path.display()))?;
        info!(path = %path.display(), "saved snapshot");
    }

    if args.dump {
        wl.print_tree();
        return Ok(());
    }

    if let Some(word) = &args.check {
        println!("{}: {}", word, if wl.is_word(word) { "yes" } else { "no" });
        return Ok(());
    }

    let start = Instant::now();
    let completions = wl.predict_completions(&args.prefix, args.count);
    for word in &completions {
        println!("{}", word);
    }
    info!(found = completions.len(), elapsed_us = start.elapsed().as_micros() as u64, "completed prefix");
    Ok(())
}
