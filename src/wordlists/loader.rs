//! Word list loading utilities
//!
//! Turns raw word files or embedded constants into a clean dictionary: trimmed,
//! upper-cased, A-Z only, duplicates removed, input order kept.

use super::Category;
use crate::core::SecretWord;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// Word used when a category has no usable words
pub const DEFAULT_WORD: &str = "RUBY";

/// Load words from a file
///
/// Words are separated by any whitespace. Invalid entries are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/animals.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(normalize(content.split_whitespace()))
}

/// Convert embedded string slice to a dictionary
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["ruby", "rust", "Ruby", "c++"]);
/// assert_eq!(words, ["RUBY", "RUST"]);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    normalize(slice.iter().copied())
}

/// Dictionary for `category`, never empty
///
/// With a `data_dir`, `<data_dir>/<category>.txt` is read first; a missing file falls
/// back to the embedded list. A source with no usable words yields [`DEFAULT_WORD`].
#[must_use]
pub fn load_category(category: Category, data_dir: Option<&Path>) -> Vec<String> {
    let words = match data_dir {
        Some(dir) => {
            let path = dir.join(format!("{}.txt", category.file_stem()));
            match load_from_file(&path) {
                Ok(words) => {
                    debug!(path = %path.display(), count = words.len(), "word file loaded");
                    words
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "word file unreadable, using embedded list");
                    words_from_slice(category.embedded())
                }
            }
        }
        None => words_from_slice(category.embedded()),
    };

    if words.is_empty() {
        warn!(%category, "no usable words, using default word");
        return vec![DEFAULT_WORD.to_string()];
    }

    words
}

fn normalize<'a>(raw: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = FxHashSet::default();
    raw.filter_map(|entry| SecretWord::new(entry).ok())
        .map(|word| word.text().to_string())
        .filter(|word| seen.insert(word.clone()))
        .collect()
}
