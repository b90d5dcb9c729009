//! Difficulty tiers
//!
//! A tier decides which word lengths are eligible and scales every point award.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Difficulty tier of a round
///
/// Serialized as `"Easy"`, `"Medium"` or `"Hard"`, the strings stored in ranking files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Up to 5 letters
    Easy,
    /// 6 to 10 letters
    Medium,
    /// More than 10 letters
    Hard,
}

/// Error returned when parsing an unknown difficulty name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown difficulty '{0}' (expected easy, medium or hard)")]
pub struct ParseDifficultyError(String);

impl Difficulty {
    /// All tiers, in menu order
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Point multiplier applied to letter awards and the victory bonus
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Easy => 1.0,
            Self::Medium => 1.5,
            Self::Hard => 2.0,
        }
    }

    /// Scale a base amount by the multiplier, truncating toward zero
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Difficulty;
    ///
    /// assert_eq!(Difficulty::Easy.scale(20), 20);
    /// assert_eq!(Difficulty::Medium.scale(20), 30);
    /// assert_eq!(Difficulty::Hard.scale(100), 200);
    /// ```
    #[must_use]
    pub fn scale(self, base: i64) -> i64 {
        (base as f64 * self.multiplier()).trunc() as i64
    }

    /// Whether a word of `len` letters belongs to this tier
    #[must_use]
    pub fn accepts_length(self, len: usize) -> bool {
        match self {
            Self::Easy => len <= 5,
            Self::Medium => (6..=10).contains(&len),
            Self::Hard => len > 10,
        }
    }

    /// Name as stored on disk and shown to the player
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    /// Human-readable description of the length band
    #[must_use]
    pub const fn band_description(self) -> &'static str {
        match self {
            Self::Easy => "up to 5 letters",
            Self::Medium => "6 to 10 letters",
            Self::Hard => "more than 10 letters",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" | "1" => Ok(Self::Easy),
            "medium" | "2" => Ok(Self::Medium),
            "hard" | "3" => Ok(Self::Hard),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}
