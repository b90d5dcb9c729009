//! Hangman
//!
//! Letter-guessing word game with categories, difficulty bands, hints and a persistent
//! per-difficulty ranking.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use hangman::core::{Difficulty, SecretWord};
//! use hangman::game::{GuessOutcome, RoundEngine};
//!
//! let secret = SecretWord::new("ruby").unwrap();
//! let mut round = RoundEngine::new(secret, Difficulty::Easy, 0);
//!
//! assert_eq!(round.submit_guess("r"), Ok(GuessOutcome::Correct(20)));
//! println!("{}", round.state().masked('_'));
//! ```

// Core domain types
pub mod core;

// Word selection, rounds and sessions
pub mod game;

// Persistent leaderboard
pub mod ranking;

// Word lists
pub mod wordlists;

// Runtime configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
