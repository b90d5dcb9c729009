//! TUI application state and logic

use crate::config::GameConfig;
use crate::core::Difficulty;
use crate::game::{GuessOutcome, RoundEngine, RoundResult, RoundState, Session};
use crate::ranking::{DEFAULT_LIMIT, MAX_NAME_LEN, RankingEntry, RankingError, RankingStore};
use crate::wordlists::Category;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{debug, warn};

/// Messages kept on screen
const MAX_MESSAGES: usize = 5;

/// Which screen the keyboard currently drives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    ChooseCategory,
    ChooseDifficulty,
    Playing,
    EnterName,
    /// The ranking file could not be parsed; ask before moving it aside
    CorruptPrompt,
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Application state
pub struct App {
    pub config: GameConfig,
    pub session: Session,
    pub store: RankingStore,
    pub screen: Screen,
    pub category: Option<Category>,
    pub difficulty: Option<Difficulty>,
    dictionary: Vec<String>,
    pub engine: Option<RoundEngine>,
    /// Board of the round that just ended, kept for display
    pub last_board: Option<RoundState>,
    pub last_result: Option<RoundResult>,
    /// Entry waiting for the player's answer on [`Screen::CorruptPrompt`]
    pending_entry: Option<RankingEntry>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    /// Difficulty whose leaderboard is shown in the side panel
    pub leaderboard_view: Difficulty,
    pub leaderboard: Result<Vec<RankingEntry>, RankingError>,
    pub should_quit: bool,
}

impl App {
    /// Build the app, skipping whichever menus `config` already answers
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let store = config.ranking_store();
        let leaderboard_view = config.difficulty.unwrap_or(Difficulty::Easy);
        let leaderboard = store.top_entries(leaderboard_view, DEFAULT_LIMIT);

        let mut app = Self {
            session: Session::new(config.seed),
            store,
            screen: Screen::ChooseCategory,
            category: config.category,
            difficulty: config.difficulty,
            dictionary: Vec::new(),
            engine: None,
            last_board: None,
            last_result: None,
            pending_entry: None,
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Welcome to Hangman! Guess the word one letter at a time.".to_string(),
                style: MessageStyle::Info,
            }],
            leaderboard_view,
            leaderboard,
            should_quit: false,
            config,
        };

        if let Some(category) = app.category {
            app.dictionary = app.config.dictionary(category);
        }
        app.advance_setup();
        app
    }

    /// Move to the first menu still unanswered, or start playing
    fn advance_setup(&mut self) {
        match (self.category, self.difficulty) {
            (None, _) => self.screen = Screen::ChooseCategory,
            (Some(_), None) => self.screen = Screen::ChooseDifficulty,
            (Some(_), Some(_)) => self.start_round(),
        }
    }

    pub fn start_round(&mut self) {
        let Some(difficulty) = self.difficulty else {
            self.screen = Screen::ChooseDifficulty;
            return;
        };

        match self
            .session
            .start_round_or_default(&self.dictionary, difficulty)
        {
            Ok(engine) => {
                debug!(len = engine.state().secret().len(), "round started");
                self.engine = Some(engine);
                self.last_board = None;
                self.last_result = None;
                self.input_buffer.clear();
                self.screen = Screen::Playing;
                self.add_message(
                    &format!("New {difficulty} round! Type a letter, or '?' for a hint."),
                    MessageStyle::Info,
                );
            }
            Err(e) => {
                warn!(error = %e, "could not start a round");
                self.add_message(&format!("Could not pick a word: {e}"), MessageStyle::Error);
                self.category = None;
                self.screen = Screen::ChooseCategory;
            }
        }
    }

    /// Board to draw: the live round, else the one that just ended
    #[must_use]
    pub fn board(&self) -> Option<&RoundState> {
        self.engine
            .as_ref()
            .map(RoundEngine::state)
            .or(self.last_board.as_ref())
    }

    pub fn choose_category(&mut self, category: Category) {
        self.category = Some(category);
        self.dictionary = self.config.dictionary(category);
        self.add_message(&format!("Category: {category}"), MessageStyle::Info);
        self.advance_setup();
    }

    pub fn choose_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = Some(difficulty);
        self.show_leaderboard(difficulty);
        self.start_round();
    }

    pub fn handle_guess(&mut self, input: &str) {
        let Some(engine) = self.engine.as_mut() else {
            return;
        };

        match engine.submit_guess(input) {
            Ok(GuessOutcome::Correct(points)) => {
                self.add_message(&format!("✅ Nice! +{points} points"), MessageStyle::Success);
            }
            Ok(GuessOutcome::Incorrect) => {
                self.add_message("❌ Incorrect letter!", MessageStyle::Error);
            }
            Ok(GuessOutcome::Hint(Some(letter))) => {
                self.add_message(
                    &format!("💡 Hint: the word has a {letter}"),
                    MessageStyle::Info,
                );
            }
            Ok(GuessOutcome::Hint(None)) => {
                self.add_message("💡 Nothing left to reveal", MessageStyle::Info);
            }
            Err(e) => self.add_message(&format!("⚠️ {e}"), MessageStyle::Error),
        }

        if self.engine.as_ref().is_some_and(|engine| !engine.is_active()) {
            self.finish_round();
        }
    }

    fn finish_round(&mut self) {
        let Some(engine) = self.engine.take() else {
            return;
        };
        self.last_board = Some(engine.state().clone());

        let result = match engine.finalize() {
            Ok(result) => result,
            Err(e) => {
                warn!(error = %e, "round finished early");
                return;
            }
        };
        self.session.record(&result);

        if result.won {
            self.add_message(
                &format!(
                    "🎉 Congratulations! +{} victory bonus, score {}",
                    result.bonus, result.final_score
                ),
                MessageStyle::Success,
            );
        } else {
            self.add_message(
                &format!("💀 Game Over! The word was: {}", result.secret_word),
                MessageStyle::Error,
            );
        }
        self.add_message("Enter your name for the ranking.", MessageStyle::Info);

        self.last_result = Some(result);
        self.input_buffer.clear();
        self.screen = Screen::EnterName;
    }

    /// Save the finished round under `name`
    pub fn submit_name(&mut self, name: &str) {
        let Some(result) = self.last_result.as_ref() else {
            self.screen = Screen::RoundOver;
            return;
        };
        let entry = RankingEntry::from_result(name, result);
        self.input_buffer.clear();
        self.save_entry(entry);
    }

    fn save_entry(&mut self, entry: RankingEntry) {
        let difficulty = entry.difficulty;

        match self.store.append(entry.clone()) {
            Ok(()) => {
                self.add_message(
                    &format!("✅ Result saved in {difficulty} mode!"),
                    MessageStyle::Success,
                );
                self.show_leaderboard(difficulty);
                self.screen = Screen::RoundOver;
            }
            Err(e) if e.is_corrupt() => {
                self.add_message(&format!("⚠️ {e}"), MessageStyle::Error);
                self.add_message(
                    "Move it aside and start a new ranking? (y/n)",
                    MessageStyle::Info,
                );
                self.pending_entry = Some(entry);
                self.screen = Screen::CorruptPrompt;
            }
            Err(e) => {
                warn!(error = %e, "could not save ranking entry");
                self.add_message(&format!("⚠️ Result not saved: {e}"), MessageStyle::Error);
                self.screen = Screen::RoundOver;
            }
        }
    }

    /// Answer the corrupt-file question
    pub fn resolve_corrupt(&mut self, move_aside: bool) {
        let Some(entry) = self.pending_entry.take() else {
            self.screen = Screen::RoundOver;
            return;
        };

        if !move_aside {
            self.add_message("Result not saved.", MessageStyle::Info);
            self.screen = Screen::RoundOver;
            return;
        }

        match self.store.quarantine() {
            Ok(moved) => {
                if let Some(moved) = moved {
                    self.add_message(
                        &format!("Old ranking kept at {}", moved.display()),
                        MessageStyle::Info,
                    );
                }
                self.save_entry(entry);
            }
            Err(e) => {
                warn!(error = %e, "could not move the ranking file aside");
                self.add_message(&format!("⚠️ {e}"), MessageStyle::Error);
                self.screen = Screen::RoundOver;
            }
        }
    }

    pub fn show_leaderboard(&mut self, difficulty: Difficulty) {
        self.leaderboard_view = difficulty;
        self.leaderboard = self.store.top_entries(difficulty, DEFAULT_LIMIT);
    }

    /// Cycle the side panel Easy → Medium → Hard
    pub fn next_leaderboard(&mut self) {
        let next = match self.leaderboard_view {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        };
        self.show_leaderboard(next);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        if key.code == KeyCode::Tab {
            self.next_leaderboard();
            return;
        }

        match self.screen {
            Screen::ChooseCategory => match key.code {
                KeyCode::Char(c @ '1'..='3') => {
                    if let Ok(category) = c.to_string().parse() {
                        self.choose_category(category);
                    }
                }
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                _ => {}
            },
            Screen::ChooseDifficulty => match key.code {
                KeyCode::Char(c @ '1'..='3') => {
                    if let Ok(difficulty) = c.to_string().parse() {
                        self.choose_difficulty(difficulty);
                    }
                }
                KeyCode::Esc => {
                    self.category = None;
                    self.screen = Screen::ChooseCategory;
                }
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
            Screen::Playing => match key.code {
                // Every letter is a guess, so only Esc leaves the round
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) => self.handle_guess(&c.to_string()),
                _ => {}
            },
            Screen::EnterName => match key.code {
                KeyCode::Char(c) if c.is_ascii_alphanumeric() => {
                    if self.input_buffer.len() < MAX_NAME_LEN {
                        self.input_buffer.push(c);
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => {
                    let name = self.input_buffer.clone();
                    self.submit_name(&name);
                }
                KeyCode::Esc => {
                    self.input_buffer.clear();
                    self.add_message("Result not saved.", MessageStyle::Info);
                    self.screen = Screen::RoundOver;
                }
                _ => {}
            },
            Screen::CorruptPrompt => match key.code {
                KeyCode::Char('y' | 'Y') => self.resolve_corrupt(true),
                KeyCode::Char('n' | 'N') | KeyCode::Esc => self.resolve_corrupt(false),
                _ => {}
            },
            Screen::RoundOver => match key.code {
                KeyCode::Char('n') | KeyCode::Enter => self.start_round(),
                KeyCode::Char('c') => {
                    self.category = None;
                    self.difficulty = None;
                    self.screen = Screen::ChooseCategory;
                }
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    let app = res?;
    println!(
        "👋 Thanks for playing! Rounds: {} | Won: {} | Score: {}",
        app.session.rounds_played(),
        app.session.rounds_won(),
        app.session.score()
    );
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<App> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn press(app: &mut App, keys: &str) {
        for c in keys.chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    fn key(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    /// Config whose only Easy animal is GO
    fn config_in(dir: &TempDir) -> GameConfig {
        fs::write(dir.path().join("animals.txt"), "GO\nHIPPOPOTAMUS\n").unwrap();
        GameConfig {
            data_dir: Some(dir.path().to_path_buf()),
            ranking_path: dir.path().join("ranking.json"),
            seed: Some(3),
            ..GameConfig::default()
        }
    }

    #[test]
    fn menus_lead_to_a_round() {
        let dir = TempDir::new().unwrap();
        let mut app = App::new(config_in(&dir));
        assert_eq!(app.screen, Screen::ChooseCategory);

        press(&mut app, "1");
        assert_eq!(app.screen, Screen::ChooseDifficulty);
        press(&mut app, "1");
        assert_eq!(app.screen, Screen::Playing);
        assert_eq!(app.board().unwrap().masked('_'), "_ _");
        assert_eq!(app.leaderboard_view, Difficulty::Easy);
    }

    #[test]
    fn preset_config_skips_menus() {
        let dir = TempDir::new().unwrap();
        let config = GameConfig {
            category: Some(Category::Animals),
            difficulty: Some(Difficulty::Easy),
            ..config_in(&dir)
        };
        let app = App::new(config);
        assert_eq!(app.screen, Screen::Playing);
    }

    #[test]
    fn won_round_is_saved_under_typed_name() {
        let dir = TempDir::new().unwrap();
        let mut app = App::new(config_in(&dir));
        press(&mut app, "11go");

        assert_eq!(app.screen, Screen::EnterName);
        assert!(app.engine.is_none());
        assert_eq!(app.board().unwrap().masked('_'), "G O");
        assert_eq!(app.last_result.as_ref().unwrap().final_score, 140);

        press(&mut app, "Ana!");
        key(&mut app, KeyCode::Enter);

        assert_eq!(app.screen, Screen::RoundOver);
        let entries = app.leaderboard.as_ref().unwrap();
        assert_eq!(entries, &[RankingEntry::new("Ana", 140, 0, Difficulty::Easy)]);
    }

    #[test]
    fn letters_after_round_over_are_name_input() {
        let dir = TempDir::new().unwrap();
        let mut app = App::new(config_in(&dir));
        press(&mut app, "11qwxzjk");

        assert_eq!(app.screen, Screen::EnterName);
        assert!(!app.last_result.as_ref().unwrap().won);
        press(&mut app, "abcdefghijklmnop");
        assert_eq!(app.input_buffer.len(), MAX_NAME_LEN);
    }

    #[test]
    fn next_round_keeps_score() {
        let dir = TempDir::new().unwrap();
        let mut app = App::new(config_in(&dir));
        press(&mut app, "11go");
        key(&mut app, KeyCode::Esc);
        assert_eq!(app.screen, Screen::RoundOver);

        press(&mut app, "n");
        assert_eq!(app.screen, Screen::Playing);
        assert_eq!(app.board().unwrap().score(), 140);
        press(&mut app, "go");
        assert_eq!(app.last_result.as_ref().unwrap().final_score, 280);
        assert_eq!(app.session.rounds_won(), 2);
    }

    #[test]
    fn rejected_guess_is_reported() {
        let dir = TempDir::new().unwrap();
        let mut app = App::new(config_in(&dir));
        press(&mut app, "11gg");

        assert_eq!(app.screen, Screen::Playing);
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert!(last.text.contains("already tried"));
    }

    #[test]
    fn corrupt_ranking_needs_confirmation() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        fs::write(&config.ranking_path, "Ana;0;Easy\n").unwrap();
        let mut app = App::new(config);
        assert!(app.leaderboard.is_err());

        press(&mut app, "11go");
        key(&mut app, KeyCode::Enter);
        assert_eq!(app.screen, Screen::CorruptPrompt);
        assert_eq!(
            fs::read_to_string(dir.path().join("ranking.json")).unwrap(),
            "Ana;0;Easy\n"
        );

        press(&mut app, "y");
        assert_eq!(app.screen, Screen::RoundOver);
        assert_eq!(
            fs::read_to_string(dir.path().join("ranking.json.corrupt")).unwrap(),
            "Ana;0;Easy\n"
        );
        assert_eq!(app.leaderboard.as_ref().unwrap().len(), 1);
    }

    #[test]
    fn tab_cycles_leaderboard() {
        let dir = TempDir::new().unwrap();
        let mut app = App::new(config_in(&dir));
        key(&mut app, KeyCode::Tab);
        assert_eq!(app.leaderboard_view, Difficulty::Medium);
        key(&mut app, KeyCode::Tab);
        key(&mut app, KeyCode::Tab);
        assert_eq!(app.leaderboard_view, Difficulty::Easy);
    }

    #[test]
    fn ctrl_c_quits_anywhere() {
        let dir = TempDir::new().unwrap();
        let mut app = App::new(config_in(&dir));
        press(&mut app, "11");
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
