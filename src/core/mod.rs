//! Core domain types for hangman
//!
//! Pure value types shared by the round engine, the word selector and the ranking store.

mod difficulty;
mod word;

pub use difficulty::{Difficulty, ParseDifficultyError};
pub use word::{SecretWord, WordError};
