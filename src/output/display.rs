//! Colored terminal renderer

use super::formatters::{create_progress_bar, gallows, medal};
use super::renderer::Renderer;
use crate::core::Difficulty;
use crate::game::{GuessError, GuessOutcome, MAX_ATTEMPTS, RoundResult, RoundState};
use crate::ranking::{RankingEntry, RankingError};
use colored::Colorize;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

/// Renderer writing colored text to stdout
#[derive(Debug, Default)]
pub struct TerminalRenderer {
    /// Leave previous output on screen instead of clearing (useful when piping)
    pub keep_history: bool,
}

impl TerminalRenderer {
    #[must_use]
    pub const fn new(keep_history: bool) -> Self {
        Self { keep_history }
    }
}

/// One leaderboard line, e.g. `🥇 1. Ana          |  180 pts | Errors: 0`
#[must_use]
pub fn format_entry(rank: usize, entry: &RankingEntry) -> String {
    format!(
        "{} {}. {:<13} | {:>5} pts | Errors: {}",
        medal(rank),
        rank + 1,
        entry.name,
        entry.score,
        entry.wrong_attempts
    )
}

impl Renderer for TerminalRenderer {
    fn clear(&mut self) {
        if self.keep_history {
            println!();
            return;
        }
        // A terminal that cannot be cleared just keeps scrolling
        let _ = execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0));
    }

    fn prompt(&mut self, text: &str) {
        print!("{text}: ");
        let _ = io::stdout().flush();
    }

    fn notice(&mut self, text: &str) {
        println!("{}", text.yellow());
    }

    fn round(&mut self, state: &RoundState) {
        let used: Vec<String> = state.used_letters().map(String::from).collect();
        let remaining = state.remaining_attempts();

        println!("{}", "=== HANGMAN GAME ===".blue().bold());
        println!("{}", gallows(state.wrong_attempts()));
        println!(
            "\n{}",
            format!("Word:        {}", state.masked('_')).green().bold()
        );
        println!("{}", format!("Attempts:    {}", used.join(", ")).yellow());
        println!(
            "Remaining:   [{}] {remaining}/{MAX_ATTEMPTS}",
            create_progress_bar(f64::from(remaining), f64::from(MAX_ATTEMPTS), 12)
        );
        println!("Score:       {}", state.score().to_string().bright_cyan());
        println!("{}", "---------------------".blue());
    }

    fn outcome(&mut self, outcome: GuessOutcome) {
        match outcome {
            GuessOutcome::Correct(points) => {
                println!("{}", format!("✅ Nice! +{points} points").green());
            }
            GuessOutcome::Incorrect => println!("{}", "❌ Incorrect letter!".red()),
            GuessOutcome::Hint(Some(letter)) => {
                println!("{}", format!("💡 Hint: the word has a {letter}").cyan());
            }
            GuessOutcome::Hint(None) => println!("{}", "💡 Nothing left to reveal".cyan()),
        }
    }

    fn rejected(&mut self, error: &GuessError) {
        let text = format!("⚠️ {error}");
        match error {
            GuessError::AlreadyGuessed(_) => println!("{}", text.yellow()),
            _ => println!("{}", text.red().bold()),
        }
    }

    fn finished(&mut self, result: &RoundResult) {
        if result.won {
            println!("{}", "🎉 Congratulations! You won!".green().bold());
            println!(
                "   Victory bonus: {}   Score: {}",
                format!("+{}", result.bonus).bright_yellow(),
                result.final_score.to_string().bright_cyan().bold()
            );
        } else {
            println!(
                "{}",
                format!("💀 Game Over! The word was: {}", result.secret_word)
                    .red()
                    .bold()
            );
            println!("   Score: {}", result.final_score.to_string().bright_cyan());
        }
    }

    fn ranking(&mut self, difficulty: Difficulty, entries: Result<&[RankingEntry], &RankingError>) {
        println!(
            "{}",
            format!(
                "🏆 --- {} RANKING --- 🏆",
                difficulty.name().to_uppercase()
            )
            .cyan()
            .bold()
        );

        match entries {
            Err(e) => {
                println!("{}", format!("Ranking unavailable: {e}").red());
            }
            Ok([]) => {
                println!(
                    "{}",
                    format!("No records yet for {difficulty} difficulty.").yellow()
                );
            }
            Ok(entries) => {
                for (i, entry) in entries.iter().enumerate() {
                    println!("{}", format_entry(i, entry).yellow());
                }
            }
        }
        println!("{}", "-------------------------------".cyan());
    }
}
