//! Hangman - CLI
//!
//! Hangman with a TUI and a plain line-based mode, plus a leaderboard viewer.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman::{
    commands::{run_simple, show_ranking},
    config::{DEFAULT_RANKING_FILE, GameConfig},
    core::Difficulty,
    output::TerminalRenderer,
    ranking::DEFAULT_LIMIT,
    wordlists::Category,
};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt::writer::BoxMakeWriter};

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the word one letter at a time before the gallows are complete",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory with <category>.txt word files (built-in lists otherwise)
    #[arg(long, global = true, env = "HANGMAN_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Ranking file
    #[arg(short, long, global = true, env = "HANGMAN_RANKING", default_value = DEFAULT_RANKING_FILE)]
    ranking: PathBuf,

    /// Seed for reproducible word choice and hints
    #[arg(long, global = true, env = "HANGMAN_SEED")]
    seed: Option<u64>,

    /// Don't copy the ranking to <file>.bak before overwriting it
    #[arg(long, global = true)]
    no_backup: bool,

    /// Category: animals, countries, programming (or 1-3); asked when omitted
    #[arg(short, long, global = true)]
    category: Option<Category>,

    /// Difficulty: easy, medium, hard (or 1-3); asked when omitted
    #[arg(short, long, global = true)]
    difficulty: Option<Difficulty>,

    /// Write logs to this file (RUST_LOG sets the level, default warn)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, works when piped)
    Simple {
        /// Keep previous screens instead of clearing the terminal
        #[arg(long)]
        keep_history: bool,
    },

    /// Show the leaderboard and exit
    Ranking {
        /// Only this difficulty (all three otherwise; `-d` works too)
        #[arg(value_name = "DIFFICULTY")]
        only: Option<Difficulty>,

        /// Number of entries per difficulty
        #[arg(short = 'n', long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,
    },
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            data_dir: self.data_dir.clone(),
            ranking_path: self.ranking.clone(),
            seed: self.seed,
            keep_backup: !self.no_backup,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

/// Install the global subscriber
///
/// The TUI owns the terminal, so without a log file its logs are discarded.
fn init_logging(log_file: Option<&PathBuf>, tui: bool) -> Result<()> {
    let writer = match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            BoxMakeWriter::new(Mutex::new(file))
        }
        None if tui => BoxMakeWriter::new(io::sink),
        None => BoxMakeWriter::new(io::stderr),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(writer)
        .with_ansi(log_file.is_none() && !tui)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.game_config();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_logging(cli.log_file.as_ref(), matches!(command, Commands::Play))?;
    debug!(?config, "starting");

    match command {
        Commands::Play => run_play_command(config),
        Commands::Simple { keep_history } => run_simple(&config, keep_history),
        Commands::Ranking { only, limit } => {
            let difficulty = only.or(config.difficulty);
            show_ranking(&config, difficulty, limit, &mut TerminalRenderer::new(true));
            Ok(())
        }
    }
}

fn run_play_command(config: GameConfig) -> Result<()> {
    use hangman::interactive::{App, run_tui};

    let app = App::new(config);
    run_tui(app)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranking_difficulty(args: &[&str]) -> Option<Difficulty> {
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Some(Commands::Ranking { only, .. }) => only.or(cli.difficulty),
            _ => panic!("expected the ranking subcommand"),
        }
    }

    #[test]
    fn ranking_accepts_positional_difficulty() {
        assert_eq!(
            ranking_difficulty(&["hangman", "ranking", "hard"]),
            Some(Difficulty::Hard)
        );
    }

    #[test]
    fn ranking_accepts_global_difficulty_flag() {
        assert_eq!(
            ranking_difficulty(&["hangman", "ranking", "-d", "hard"]),
            Some(Difficulty::Hard)
        );
        assert_eq!(
            ranking_difficulty(&["hangman", "-d", "easy", "ranking"]),
            Some(Difficulty::Easy)
        );
        assert_eq!(ranking_difficulty(&["hangman", "ranking"]), None);
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
