//! Round state machine
//!
//! A round is an explicit [`RoundState`] value. Every guess goes through the pure
//! transition [`submit_guess`], which either returns a new state plus an outcome or
//! rejects the input leaving the old state untouched. [`RoundEngine`] owns one state
//! and the random source used for hints.

use crate::core::{Difficulty, SecretWord};
use rand::Rng;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use thiserror::Error;
use tracing::trace;

/// Wrong attempts that end a round
pub const MAX_ATTEMPTS: u8 = 6;

/// Base award for a correct letter, before the difficulty multiplier
pub const POINTS_PER_LETTER: i64 = 20;

/// Score deducted for a hint
pub const HINT_PENALTY: i64 = 50;

/// Base bonus for winning a round, before the difficulty multiplier
pub const VICTORY_BONUS: i64 = 100;

/// Reserved input requesting a hint (`HINT` is accepted too)
pub const HINT_TOKEN: &str = "?";

/// A validated player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guess {
    /// An uppercase ASCII letter
    Letter(u8),
    /// Spend points and a life to reveal a letter
    Hint,
}

impl Guess {
    /// Parse raw player input
    ///
    /// Input is trimmed and upper-cased. The hint token is recognised before any
    /// letter rule applies.
    ///
    /// # Errors
    ///
    /// Returns `GuessError::InvalidFormat` unless the input is the hint token or a single
    /// letter A-Z.
    pub fn parse(input: &str) -> Result<Self, GuessError> {
        let input = input.trim().to_ascii_uppercase();

        if input == HINT_TOKEN || input == "HINT" {
            return Ok(Self::Hint);
        }

        match input.as_bytes() {
            [letter] if letter.is_ascii_uppercase() => Ok(Self::Letter(*letter)),
            _ => Err(GuessError::InvalidFormat),
        }
    }
}

/// Result of an accepted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Letter is in the word; carries the points awarded
    Correct(i64),
    /// Letter is not in the word; one life lost
    Incorrect,
    /// Hint bought; carries the revealed letter, `None` if nothing was left to reveal
    Hint(Option<char>),
}

/// Rejected guess. The round state is never modified when one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("type only ONE letter (A-Z), or '?' for a hint")]
    InvalidFormat,
    #[error("you already tried the letter {0}")]
    AlreadyGuessed(char),
    #[error("not enough lives left to buy a hint")]
    HintUnavailable,
    #[error("the round is already over")]
    RoundOver,
}

/// Error returned when finalizing a round that is still being played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    #[error("round is still active")]
    StillActive,
}

/// Lifecycle of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    Active,
    Won,
    Lost,
}

/// Complete state of one round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    secret: SecretWord,
    reveal: Vec<Option<u8>>,
    used: Vec<u8>,
    wrong_attempts: u8,
    score: i64,
    difficulty: Difficulty,
    status: RoundStatus,
}

impl RoundState {
    /// Start a round with every position hidden
    #[must_use]
    pub fn new(secret: SecretWord, difficulty: Difficulty, starting_score: i64) -> Self {
        let reveal = vec![None; secret.len()];
        Self {
            secret,
            reveal,
            used: Vec::new(),
            wrong_attempts: 0,
            score: starting_score,
            difficulty,
            status: RoundStatus::Active,
        }
    }

    #[must_use]
    pub const fn secret(&self) -> &SecretWord {
        &self.secret
    }

    /// Per-position reveal cells; `None` is a placeholder
    #[must_use]
    pub fn reveal(&self) -> &[Option<u8>] {
        &self.reveal
    }

    /// Letters tried so far, in the order they were tried
    pub fn used_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.used.iter().map(|&b| char::from(b))
    }

    #[must_use]
    pub const fn wrong_attempts(&self) -> u8 {
        self.wrong_attempts
    }

    #[must_use]
    pub const fn remaining_attempts(&self) -> u8 {
        MAX_ATTEMPTS.saturating_sub(self.wrong_attempts)
    }

    #[must_use]
    pub const fn score(&self) -> i64 {
        self.score
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        self.status
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == RoundStatus::Active
    }

    /// Number of positions still hidden
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.reveal.iter().filter(|cell| cell.is_none()).count()
    }

    /// Word as shown to the player, e.g. `R _ _ Y`
    #[must_use]
    pub fn masked(&self, placeholder: char) -> String {
        self.reveal
            .iter()
            .map(|cell| cell.map_or(placeholder, char::from).to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Whether a hint can currently be bought
    #[must_use]
    pub const fn hint_available(&self) -> bool {
        self.wrong_attempts < MAX_ATTEMPTS - 1
    }

    fn reveal_letter(&mut self, letter: u8) {
        for &position in self.secret.positions_of(letter) {
            self.reveal[position] = Some(letter);
        }
    }

    fn refresh_status(&mut self) {
        self.status = if self.wrong_attempts >= MAX_ATTEMPTS {
            RoundStatus::Lost
        } else if self.reveal.iter().all(Option::is_some) {
            RoundStatus::Won
        } else {
            RoundStatus::Active
        };
    }

    /// Apply a validated guess, producing the next state
    ///
    /// # Errors
    ///
    /// - `GuessError::HintUnavailable` for a hint with fewer than two lives left
    /// - `GuessError::RoundOver` for a letter once the round has ended
    /// - `GuessError::AlreadyGuessed` for a letter already tried
    pub fn apply<R: Rng + ?Sized>(
        &self,
        guess: Guess,
        rng: &mut R,
    ) -> Result<(Self, GuessOutcome), GuessError> {
        match guess {
            Guess::Hint => self.apply_hint(rng),
            Guess::Letter(letter) => self.apply_letter(letter),
        }
    }

    fn apply_letter(&self, letter: u8) -> Result<(Self, GuessOutcome), GuessError> {
        if !self.is_active() {
            return Err(GuessError::RoundOver);
        }
        if self.used.contains(&letter) {
            return Err(GuessError::AlreadyGuessed(char::from(letter)));
        }

        let mut next = self.clone();
        next.used.push(letter);

        let outcome = if self.secret.has_letter(letter) {
            let points = self.difficulty.scale(POINTS_PER_LETTER);
            next.reveal_letter(letter);
            next.score += points;
            GuessOutcome::Correct(points)
        } else {
            next.wrong_attempts += 1;
            GuessOutcome::Incorrect
        };

        next.refresh_status();
        trace!(letter = %char::from(letter), ?outcome, status = ?next.status, "letter guessed");
        Ok((next, outcome))
    }

    fn apply_hint<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<(Self, GuessOutcome), GuessError> {
        // Nothing left to reveal, whatever the lives
        if self.status == RoundStatus::Won {
            return Ok((self.clone(), GuessOutcome::Hint(None)));
        }
        if !self.hint_available() {
            return Err(GuessError::HintUnavailable);
        }

        let hidden: Vec<usize> = self
            .reveal
            .iter()
            .enumerate()
            .filter_map(|(i, cell)| cell.is_none().then_some(i))
            .collect();

        let Some(&position) = hidden.choose(rng) else {
            return Ok((self.clone(), GuessOutcome::Hint(None)));
        };

        let letter = self.secret.char_at(position);
        let mut next = self.clone();
        next.score -= HINT_PENALTY;
        next.wrong_attempts += 1;
        next.reveal_letter(letter);
        if !next.used.contains(&letter) {
            next.used.push(letter);
        }

        next.refresh_status();
        trace!(letter = %char::from(letter), status = ?next.status, "hint revealed");
        Ok((next, GuessOutcome::Hint(Some(char::from(letter)))))
    }
}

/// Pure transition: parse `input` and apply it to `state`
///
/// # Errors
///
/// Any `GuessError`; `state` is left as it was.
pub fn submit_guess<R: Rng + ?Sized>(
    state: &RoundState,
    input: &str,
    rng: &mut R,
) -> Result<(RoundState, GuessOutcome), GuessError> {
    let guess = Guess::parse(input)?;
    state.apply(guess, rng)
}

/// Final report of a finished round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    pub won: bool,
    pub secret_word: String,
    pub final_score: i64,
    pub wrong_attempts: u8,
    pub difficulty: Difficulty,
    /// Victory bonus included in `final_score` (zero for a loss)
    pub bonus: i64,
}

/// Drives one round: one engine, one secret word
#[derive(Debug)]
pub struct RoundEngine<R = StdRng> {
    state: RoundState,
    rng: R,
}

impl RoundEngine<StdRng> {
    /// Create an engine whose hints draw from OS entropy
    #[must_use]
    pub fn new(secret: SecretWord, difficulty: Difficulty, starting_score: i64) -> Self {
        Self::with_rng(secret, difficulty, starting_score, StdRng::from_os_rng())
    }
}

impl<R: Rng> RoundEngine<R> {
    /// Create an engine with an explicit random source for hints
    pub fn with_rng(
        secret: SecretWord,
        difficulty: Difficulty,
        starting_score: i64,
        rng: R,
    ) -> Self {
        Self {
            state: RoundState::new(secret, difficulty, starting_score),
            rng,
        }
    }

    /// Current state snapshot
    pub const fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// Submit raw player input
    ///
    /// # Errors
    ///
    /// Any `GuessError`; the round is unchanged when one is returned.
    pub fn submit_guess(&mut self, input: &str) -> Result<GuessOutcome, GuessError> {
        let (next, outcome) = submit_guess(&self.state, input, &mut self.rng)?;
        self.state = next;
        Ok(outcome)
    }

    /// Close the round, adding the victory bonus when it was won
    ///
    /// # Errors
    ///
    /// Returns `RoundError::StillActive` if the round has not ended; the engine is
    /// consumed either way, so check [`Self::is_active`] first.
    pub fn finalize(self) -> Result<RoundResult, RoundError> {
        let state = self.state;
        let won = match state.status {
            RoundStatus::Active => return Err(RoundError::StillActive),
            RoundStatus::Won => true,
            RoundStatus::Lost => false,
        };

        let bonus = if won {
            state.difficulty.scale(VICTORY_BONUS)
        } else {
            0
        };

        Ok(RoundResult {
            won,
            secret_word: state.secret.text().to_string(),
            final_score: state.score + bonus,
            wrong_attempts: state.wrong_attempts,
            difficulty: state.difficulty,
            bonus,
        })
    }
}
