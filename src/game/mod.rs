//! Hangman game logic
//!
//! Word selection, the round state machine and the session that chains rounds.

pub mod round;
mod selector;
mod session;

pub use round::{
    Guess, GuessError, GuessOutcome, HINT_PENALTY, HINT_TOKEN, MAX_ATTEMPTS, POINTS_PER_LETTER,
    RoundEngine, RoundError, RoundResult, RoundState, RoundStatus, VICTORY_BONUS, submit_guess,
};
pub use selector::{SelectError, select_word};
pub use session::Session;
