//! Presentation seam between the game loop and the terminal

use crate::core::Difficulty;
use crate::game::{GuessError, GuessOutcome, RoundResult, RoundState};
use crate::ranking::{RankingEntry, RankingError};

/// Everything the line-based game loop shows to the player goes through here
pub trait Renderer {
    /// Wipe the screen before a fresh frame
    fn clear(&mut self);

    /// Show a menu or question
    fn prompt(&mut self, text: &str);

    /// Show a neutral or warning message
    fn notice(&mut self, text: &str);

    /// Draw the board for the current round
    fn round(&mut self, state: &RoundState);

    /// Report an accepted guess
    fn outcome(&mut self, outcome: GuessOutcome);

    /// Report a rejected guess
    fn rejected(&mut self, error: &GuessError);

    /// Announce the end of a round
    fn finished(&mut self, result: &RoundResult);

    /// Draw a leaderboard, or explain why it is unavailable
    fn ranking(&mut self, difficulty: Difficulty, entries: Result<&[RankingEntry], &RankingError>);
}
