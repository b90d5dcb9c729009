//! Simple interactive CLI mode
//!
//! Text-based hangman without the TUI. Input comes from any `BufRead` and everything
//! shown goes through a [`Renderer`], so a whole session can be scripted.

use crate::config::GameConfig;
use crate::core::Difficulty;
use crate::game::{GuessError, GuessOutcome, HINT_TOKEN, RoundEngine, RoundResult, Session};
use crate::output::{Renderer, TerminalRenderer};
use crate::ranking::{DEFAULT_LIMIT, RankingEntry, RankingStore};
use crate::wordlists::Category;
use anyhow::{Context, Result};
use rand::Rng;
use std::io::{self, BufRead};
use tracing::warn;

/// Totals reported when a session ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub rounds_played: usize,
    pub rounds_won: usize,
    pub final_score: i64,
}

impl From<&Session> for SessionSummary {
    fn from(session: &Session) -> Self {
        Self {
            rounds_played: session.rounds_played(),
            rounds_won: session.rounds_won(),
            final_score: session.score(),
        }
    }
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(config: &GameConfig, keep_history: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut renderer = TerminalRenderer::new(keep_history);

    let summary = run_session(config, &mut input, &mut renderer)?;
    renderer.notice(&format!(
        "👋 Thanks for playing! Rounds: {} | Won: {} | Score: {}",
        summary.rounds_played, summary.rounds_won, summary.final_score
    ));
    Ok(())
}

/// Play rounds until the player stops or input runs out
///
/// Menus are skipped for whatever `config` already fixes.
///
/// # Errors
///
/// Returns an error if reading input fails.
pub fn run_session<I: BufRead, R: Renderer>(
    config: &GameConfig,
    input: &mut I,
    renderer: &mut R,
) -> Result<SessionSummary> {
    let store = config.ranking_store();
    let mut session = Session::new(config.seed);

    let category = match config.category {
        Some(category) => category,
        None => {
            if !ranking_menu(&store, input, renderer)? {
                return Ok(SessionSummary::from(&session));
            }
            match choose_category(input, renderer)? {
                Some(category) => category,
                None => return Ok(SessionSummary::from(&session)),
            }
        }
    };

    let difficulty = match config.difficulty {
        Some(difficulty) => difficulty,
        None => match choose_difficulty(input, renderer)? {
            Some(difficulty) => difficulty,
            None => return Ok(SessionSummary::from(&session)),
        },
    };

    let dictionary = config.dictionary(category);

    loop {
        let engine = session
            .start_round_or_default(&dictionary, difficulty)
            .context("failed to pick a word")?;

        let Some(result) = play_round(engine, input, renderer)? else {
            break;
        };
        session.record(&result);

        renderer.prompt("Enter your name for the ranking");
        let Some(name) = read_line(input)? else {
            break;
        };
        save_result(
            &store,
            RankingEntry::from_result(&name, &result),
            input,
            renderer,
        )?;

        renderer.prompt("Play again? (yes/no)");
        match read_line(input)? {
            Some(answer) if is_yes(&answer) => {}
            _ => break,
        }
    }

    Ok(SessionSummary::from(&session))
}

enum Feedback {
    Accepted(GuessOutcome),
    Rejected(GuessError),
}

/// Feed player input to `engine` until the round ends
///
/// Returns `None` if input runs out mid-round.
///
/// # Errors
///
/// Returns an error if reading input fails.
pub fn play_round<G: Rng, I: BufRead, R: Renderer>(
    mut engine: RoundEngine<G>,
    input: &mut I,
    renderer: &mut R,
) -> Result<Option<RoundResult>> {
    let mut feedback = None;

    while engine.is_active() {
        renderer.clear();
        renderer.round(engine.state());
        match feedback.take() {
            Some(Feedback::Accepted(outcome)) => renderer.outcome(outcome),
            Some(Feedback::Rejected(error)) => renderer.rejected(&error),
            None => {}
        }

        renderer.prompt(&format!("Type a letter ('{HINT_TOKEN}' for a hint)"));
        let Some(guess) = read_line(input)? else {
            return Ok(None);
        };

        feedback = Some(match engine.submit_guess(&guess) {
            Ok(outcome) => Feedback::Accepted(outcome),
            Err(error) => Feedback::Rejected(error),
        });
    }

    renderer.clear();
    renderer.round(engine.state());
    if let Some(Feedback::Accepted(outcome)) = feedback {
        renderer.outcome(outcome);
    }

    let result = engine.finalize()?;
    renderer.finished(&result);
    Ok(Some(result))
}

/// Append `entry`, asking before a corrupt ranking file is moved aside
fn save_result<I: BufRead, R: Renderer>(
    store: &RankingStore,
    entry: RankingEntry,
    input: &mut I,
    renderer: &mut R,
) -> Result<()> {
    let difficulty = entry.difficulty;

    match store.append(entry.clone()) {
        Ok(()) => {}
        Err(e) if e.is_corrupt() => {
            renderer.notice(&format!("⚠️ {e}"));
            renderer.prompt("Move it aside and start a new ranking? (yes/no)");
            if !read_line(input)?.is_some_and(|answer| is_yes(&answer)) {
                renderer.notice("Result not saved.");
                return Ok(());
            }

            if let Some(moved) = store.quarantine()? {
                renderer.notice(&format!("Old ranking kept at {}", moved.display()));
            }
            store.append(entry)?;
        }
        Err(e) => {
            warn!(error = %e, "could not save ranking entry");
            renderer.notice(&format!("⚠️ Result not saved: {e}"));
            return Ok(());
        }
    }

    renderer.notice(&format!("✅ Result saved in {difficulty} mode!"));
    Ok(())
}

/// Show leaderboards until the player skips ahead; `false` if input ran out
fn ranking_menu<I: BufRead, R: Renderer>(
    store: &RankingStore,
    input: &mut I,
    renderer: &mut R,
) -> Result<bool> {
    loop {
        renderer.clear();
        renderer.prompt(
            "=== RANKING MENU ===\n1. Easy\n2. Medium\n3. Hard\n4. Skip to Game\n\nOption",
        );
        let Some(choice) = read_line(input)? else {
            return Ok(false);
        };

        if choice == "4" {
            return Ok(true);
        }

        match choice.parse::<Difficulty>() {
            Ok(difficulty) => {
                renderer.clear();
                let entries = store.top_entries(difficulty, DEFAULT_LIMIT);
                renderer.ranking(difficulty, entries.as_deref());
                renderer.prompt("Press ENTER to continue...");
                if read_line(input)?.is_none() {
                    return Ok(false);
                }
            }
            Err(_) => renderer.notice("❌ Invalid option!"),
        }
    }
}

fn choose_category<I: BufRead, R: Renderer>(
    input: &mut I,
    renderer: &mut R,
) -> Result<Option<Category>> {
    let menu = Category::ALL
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{}. {c}", i + 1))
        .collect::<Vec<_>>()
        .join("\n");

    loop {
        renderer.clear();
        renderer.prompt(&format!("=== CHOOSE CATEGORY ===\n{menu}\n\nOption"));
        let Some(choice) = read_line(input)? else {
            return Ok(None);
        };
        match choice.parse() {
            Ok(category) => return Ok(Some(category)),
            Err(_) => renderer.notice("❌ Invalid option!"),
        }
    }
}

fn choose_difficulty<I: BufRead, R: Renderer>(
    input: &mut I,
    renderer: &mut R,
) -> Result<Option<Difficulty>> {
    let menu = Difficulty::ALL
        .iter()
        .enumerate()
        .map(|(i, d)| format!("{}. {:<7}({})", i + 1, d.name(), d.band_description()))
        .collect::<Vec<_>>()
        .join("\n");

    loop {
        renderer.clear();
        renderer.prompt(&format!("=== CHOOSE DIFFICULTY ===\n{menu}\n\nOption"));
        let Some(choice) = read_line(input)? else {
            return Ok(None);
        };
        match choice.parse() {
            Ok(difficulty) => return Ok(Some(difficulty)),
            Err(_) => renderer.notice("❌ Invalid option!"),
        }
    }
}

/// Read one trimmed line; `None` at end of input
fn read_line<I: BufRead>(input: &mut I) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read input")?;
    Ok((read > 0).then(|| line.trim().to_string()))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.to_lowercase().as_str(), "yes" | "y")
}
