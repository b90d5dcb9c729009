//! Multi-round session
//!
//! Carries the running score and the words already played from one round to the next.

use super::round::{RoundEngine, RoundResult};
use super::selector::{SelectError, select_word};
use crate::core::{Difficulty, SecretWord};
use crate::wordlists::loader::DEFAULT_WORD;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rustc_hash::FxHashSet;
use tracing::{info, warn};

/// Player session spanning consecutive rounds
#[derive(Debug)]
pub struct Session {
    score: i64,
    used_words: FxHashSet<String>,
    rounds_played: usize,
    rounds_won: usize,
    rng: StdRng,
}

impl Session {
    /// Start a session; a `seed` makes word choice and hints reproducible
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self {
            score: 0,
            used_words: FxHashSet::default(),
            rounds_played: 0,
            rounds_won: 0,
            rng,
        }
    }

    /// Cumulative score, used as the starting score of the next round
    #[must_use]
    pub const fn score(&self) -> i64 {
        self.score
    }

    #[must_use]
    pub const fn rounds_played(&self) -> usize {
        self.rounds_played
    }

    #[must_use]
    pub const fn rounds_won(&self) -> usize {
        self.rounds_won
    }

    #[must_use]
    pub fn used_words(&self) -> &FxHashSet<String> {
        &self.used_words
    }

    /// Select a fresh word and build the engine for the next round
    ///
    /// The hint random source is forked from the session's, so a seeded session stays
    /// deterministic across rounds.
    ///
    /// # Errors
    ///
    /// Returns `SelectError::EmptyDictionary` if `dictionary` is empty, or
    /// `SelectError::InvalidWord` if the chosen entry is not a plain A-Z word.
    pub fn start_round(
        &mut self,
        dictionary: &[String],
        difficulty: Difficulty,
    ) -> Result<RoundEngine<StdRng>, SelectError> {
        let word = select_word(dictionary, difficulty, &self.used_words, &mut self.rng)?;
        let secret = SecretWord::new(word)?;
        self.used_words.insert(secret.text().to_string());

        let hint_rng = StdRng::from_rng(&mut self.rng);
        Ok(RoundEngine::with_rng(
            secret,
            difficulty,
            self.score,
            hint_rng,
        ))
    }

    /// Like [`Self::start_round`], substituting the built-in default word when the
    /// dictionary is empty
    ///
    /// # Errors
    ///
    /// Returns `SelectError::InvalidWord` if the chosen entry is not a plain A-Z word.
    pub fn start_round_or_default(
        &mut self,
        dictionary: &[String],
        difficulty: Difficulty,
    ) -> Result<RoundEngine<StdRng>, SelectError> {
        match self.start_round(dictionary, difficulty) {
            Err(SelectError::EmptyDictionary) => {
                warn!("empty dictionary, playing the default word");
                self.start_round(&[DEFAULT_WORD.to_string()], difficulty)
            }
            other => other,
        }
    }

    /// Fold a finished round into the session totals
    pub fn record(&mut self, result: &RoundResult) {
        self.rounds_played += 1;
        if result.won {
            self.rounds_won += 1;
        }
        self.score = result.final_score;

        info!(
            word = %result.secret_word,
            won = result.won,
            score = result.final_score,
            errors = result.wrong_attempts,
            "round finished"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Vec<String> {
        ["RUBY", "RUST", "JAVA", "PYTHON", "ENCAPSULATION"]
            .iter()
            .map(|w| (*w).to_string())
            .collect()
    }

    fn play_to_win(engine: &mut RoundEngine<StdRng>) {
        let word = engine.state().secret().text().to_string();
        for letter in word.chars() {
            if !engine.is_active() {
                break;
            }
            let _ = engine.submit_guess(&letter.to_string());
        }
    }

    #[test]
    fn score_carries_between_rounds() {
        let dict = dictionary();
        let mut session = Session::new(Some(4));

        let mut engine = session.start_round(&dict, Difficulty::Easy).unwrap();
        play_to_win(&mut engine);
        let result = engine.finalize().unwrap();
        session.record(&result);

        assert_eq!(session.rounds_played(), 1);
        assert_eq!(session.rounds_won(), 1);
        assert_eq!(session.score(), result.final_score);

        let engine = session.start_round(&dict, Difficulty::Easy).unwrap();
        assert_eq!(engine.state().score(), result.final_score);
    }

    #[test]
    fn words_not_repeated_until_band_exhausted() {
        let dict = dictionary();
        let mut session = Session::new(Some(8));

        let mut seen = FxHashSet::default();
        for _ in 0..3 {
            let engine = session.start_round(&dict, Difficulty::Easy).unwrap();
            assert!(seen.insert(engine.state().secret().text().to_string()));
        }
        assert_eq!(session.used_words().len(), 3);

        // Band exhausted: a repeat is allowed rather than leaving the band
        let engine = session.start_round(&dict, Difficulty::Easy).unwrap();
        assert!(engine.state().secret().len() <= 5);
    }

    #[test]
    fn seeded_sessions_match() {
        let dict = dictionary();
        let mut a = Session::new(Some(99));
        let mut b = Session::new(Some(99));

        for _ in 0..3 {
            let wa = a.start_round(&dict, Difficulty::Easy).unwrap();
            let wb = b.start_round(&dict, Difficulty::Easy).unwrap();
            assert_eq!(wa.state().secret(), wb.state().secret());
        }
    }

    #[test]
    fn empty_dictionary_falls_back_to_default_word() {
        let mut session = Session::new(Some(1));
        let engine = session.start_round_or_default(&[], Difficulty::Hard).unwrap();
        assert_eq!(engine.state().secret().text(), DEFAULT_WORD);
    }

    #[test]
    fn empty_dictionary_propagates() {
        let mut session = Session::new(Some(1));
        assert_eq!(
            session.start_round(&[], Difficulty::Hard).unwrap_err(),
            SelectError::EmptyDictionary
        );
    }
}
