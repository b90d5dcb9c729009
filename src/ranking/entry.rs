//! Ranking records

use crate::core::Difficulty;
use crate::game::RoundResult;
use serde::{Deserialize, Serialize};

/// Longest name kept in a ranking record
pub const MAX_NAME_LEN: usize = 13;

/// Name recorded when the player leaves the prompt blank
pub const ANONYMOUS: &str = "Anonymous";

/// One finished round as stored in the ranking file
///
/// Field names and difficulty strings are the on-disk format:
/// `{"name": "ANA", "score": 180, "errors": 0, "difficulty": "Easy"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub name: String,
    #[serde(default)]
    pub score: i64,
    #[serde(rename = "errors", alias = "wrongAttempts", alias = "wrong_attempts")]
    pub wrong_attempts: u8,
    pub difficulty: Difficulty,
}

impl RankingEntry {
    /// Build an entry, sanitizing the player name
    #[must_use]
    pub fn new(name: &str, score: i64, wrong_attempts: u8, difficulty: Difficulty) -> Self {
        Self {
            name: sanitize_name(name),
            score,
            wrong_attempts,
            difficulty,
        }
    }

    /// Entry for a finished round
    #[must_use]
    pub fn from_result(name: &str, result: &RoundResult) -> Self {
        Self::new(
            name,
            result.final_score,
            result.wrong_attempts,
            result.difficulty,
        )
    }
}

/// Keep ASCII letters and digits, at most [`MAX_NAME_LEN`] of them
///
/// # Examples
/// ```
/// use hangman::ranking::sanitize_name;
///
/// assert_eq!(sanitize_name("  Ana Maria! "), "AnaMaria");
/// assert_eq!(sanitize_name("   "), "Anonymous");
/// ```
#[must_use]
pub fn sanitize_name(raw: &str) -> String {
    let name: String = raw
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .take(MAX_NAME_LEN)
        .collect();

    if name.is_empty() {
        ANONYMOUS.to_string()
    } else {
        name
    }
}
