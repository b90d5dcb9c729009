//! Secret word selection
//!
//! Filters a dictionary by difficulty band and previously used words, then draws one
//! candidate uniformly from the injected random source.

use crate::core::{Difficulty, WordError};
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use thiserror::Error;
use tracing::debug;

/// Error type for word selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectError {
    #[error("dictionary is empty")]
    EmptyDictionary,
    #[error("dictionary entry is not a valid word: {0}")]
    InvalidWord(#[from] WordError),
}

/// Pick a secret word for `difficulty`, avoiding `excluded` where possible
///
/// Candidate sets are tried in order and the first non-empty one is used:
/// 1. words in the difficulty band that are not excluded
/// 2. words in the difficulty band
/// 3. the whole dictionary
///
/// Dictionary order is preserved through filtering, so a seeded `rng` always yields
/// the same word.
///
/// # Errors
///
/// Returns `SelectError::EmptyDictionary` if `dictionary` is empty.
///
/// # Examples
/// ```
/// use hangman::core::Difficulty;
/// use hangman::game::select_word;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use rustc_hash::FxHashSet;
///
/// let dictionary = vec!["CAT".to_string(), "ELEPHANT".to_string()];
/// let mut rng = StdRng::seed_from_u64(7);
/// let word = select_word(&dictionary, Difficulty::Medium, &FxHashSet::default(), &mut rng).unwrap();
/// assert_eq!(word, "ELEPHANT");
/// ```
pub fn select_word<'a, R: Rng + ?Sized>(
    dictionary: &'a [String],
    difficulty: Difficulty,
    excluded: &FxHashSet<String>,
    rng: &mut R,
) -> Result<&'a str, SelectError> {
    if dictionary.is_empty() {
        return Err(SelectError::EmptyDictionary);
    }

    let in_band: Vec<&'a String> = dictionary
        .iter()
        .filter(|word| difficulty.accepts_length(word.chars().count()))
        .collect();

    let fresh: Vec<&'a String> = in_band
        .iter()
        .copied()
        .filter(|word| !excluded.contains(word.as_str()))
        .collect();

    let candidates = if !fresh.is_empty() {
        fresh
    } else if !in_band.is_empty() {
        debug!(
            %difficulty,
            excluded = excluded.len(),
            "every word in band already used, allowing repeats"
        );
        in_band
    } else {
        debug!(%difficulty, "no word in band, selecting from whole dictionary");
        dictionary.iter().collect()
    };

    candidates
        .choose(rng)
        .copied()
        .map(String::as_str)
        .ok_or(SelectError::EmptyDictionary)
}
