//! TUI rendering with ratatui
//!
//! Gallows, word and lives on the left; leaderboard and messages on the right.

use super::app::{App, MessageStyle, Screen};
use crate::core::Difficulty;
use crate::game::{MAX_ATTEMPTS, RoundState};
use crate::output::display::format_entry;
use crate::output::formatters::{gallows, lives};
use crate::wordlists::Category;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Game panel
            Constraint::Percentage(45), // Leaderboard and messages
        ])
        .split(chunks[1]);

    match app.screen {
        Screen::ChooseCategory => render_category_menu(f, main_chunks[0]),
        Screen::ChooseDifficulty => render_difficulty_menu(f, app, main_chunks[0]),
        _ => render_game_panel(f, app, main_chunks[0]),
    }
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪢 HANGMAN")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn menu_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
}

fn render_category_menu(f: &mut Frame, area: Rect) {
    let mut lines = vec![Line::from("Choose a category:"), Line::from("")];
    lines.extend(Category::ALL.iter().enumerate().map(|(i, category)| {
        Line::from(vec![
            Span::styled(
                format!("  {}. ", i + 1),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw(category.name()),
        ])
    }));

    f.render_widget(Paragraph::new(lines).block(menu_block(" Category ")), area);
}

fn render_difficulty_menu(f: &mut Frame, app: &App, area: Rect) {
    let title = app
        .category
        .map_or_else(|| " Difficulty ".to_string(), |c| format!(" {c} "));

    let mut lines = vec![Line::from("Choose a difficulty:"), Line::from("")];
    lines.extend(Difficulty::ALL.iter().enumerate().map(|(i, difficulty)| {
        Line::from(vec![
            Span::styled(
                format!("  {}. ", i + 1),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled(
                format!("{:<7}", difficulty.name()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" {} (x{})", difficulty.band_description(), difficulty.multiplier()),
                Style::default().fg(Color::DarkGray),
            ),
        ])
    }));

    f.render_widget(Paragraph::new(lines).block(menu_block(&title)), area);
}

fn render_game_panel(f: &mut Frame, app: &App, area: Rect) {
    let Some(board) = app.board() else {
        f.render_widget(
            Paragraph::new("No round in progress").block(menu_block(" Round ")),
            area,
        );
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(9),    // Gallows and word
            Constraint::Length(3), // Lives gauge
        ])
        .split(area);

    render_board(f, board, chunks[0]);
    render_lives(f, board, chunks[1]);
}

fn render_board(f: &mut Frame, board: &RoundState, area: Rect) {
    let word_color = if board.is_active() {
        Color::Green
    } else if board.hidden_count() == 0 {
        Color::LightGreen
    } else {
        Color::Red
    };

    let mut lines: Vec<Line> = gallows(board.wrong_attempts())
        .lines()
        .map(|row| Line::styled(row.to_string(), Style::default().fg(Color::Gray)))
        .collect();

    let used: Vec<String> = board.used_letters().map(String::from).collect();
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw("Word:  "),
        Span::styled(
            board.masked('_'),
            Style::default().fg(word_color).add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(vec![
        Span::raw("Tried: "),
        Span::styled(used.join(", "), Style::default().fg(Color::Yellow)),
    ]));
    lines.push(Line::from(vec![
        Span::raw("Score: "),
        Span::styled(
            board.score().to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ]));

    let title = format!(" {} round ", board.difficulty());
    let paragraph = Paragraph::new(lines)
        .block(menu_block(&title))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_lives(f: &mut Frame, board: &RoundState, area: Rect) {
    let remaining = board.remaining_attempts();
    let percent = u16::from(remaining) * 100 / u16::from(MAX_ATTEMPTS);
    let color = match remaining {
        0..=1 => Color::Red,
        2..=3 => Color::Yellow,
        _ => Color::Green,
    };

    let gauge = Gauge::default()
        .block(menu_block(" Lives "))
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{} {remaining}/{MAX_ATTEMPTS}", lives(remaining)));

    f.render_widget(gauge, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Leaderboard
            Constraint::Percentage(50), // Messages
        ])
        .split(area);

    render_leaderboard(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_leaderboard(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = match &app.leaderboard {
        Err(e) => vec![ListItem::new(format!("Ranking unavailable: {e}"))
            .style(Style::default().fg(Color::Red))],
        Ok(entries) if entries.is_empty() => vec![ListItem::new("No records yet")
            .style(Style::default().fg(Color::DarkGray))],
        Ok(entries) => entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let style = if i < 3 {
                    Style::default().fg(Color::Yellow)
                } else {
                    Style::default()
                };
                ListItem::new(format_entry(i, entry)).style(style)
            })
            .collect(),
    };

    let title = format!(" 🏆 {} Ranking (TAB) ", app.leaderboard_view);
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(list, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.screen {
        Screen::ChooseCategory => (" Press 1-3 to pick a category ", "", Color::Cyan),
        Screen::ChooseDifficulty => (" Press 1-3 to pick a difficulty ", "", Color::Cyan),
        Screen::Playing => (
            " Type a letter, or '?' for a hint ",
            "",
            Color::Yellow,
        ),
        Screen::EnterName => (
            " Enter your name for the ranking | ENTER to save, ESC to skip ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        Screen::CorruptPrompt => (
            " Ranking file unreadable | y: move it aside | n: don't save ",
            "",
            Color::Red,
        ),
        Screen::RoundOver => (
            " n: next round | c: change category | q: quit ",
            "",
            Color::Green,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let setup = match (app.category, app.difficulty) {
        (Some(category), Some(difficulty)) => format!("{category} | {difficulty}"),
        (Some(category), None) => category.to_string(),
        _ => "Setup".to_string(),
    };
    f.render_widget(Paragraph::new(setup).alignment(Alignment::Center), chunks[0]);

    let played = app.session.rounds_played();
    let rounds_text = format!(
        "Rounds: {played} | Win Rate: {:.0}%",
        if played > 0 {
            app.session.rounds_won() as f64 / played as f64 * 100.0
        } else {
            0.0
        }
    );
    f.render_widget(
        Paragraph::new(rounds_text).alignment(Alignment::Center),
        chunks[1],
    );

    let score_text = format!("Total score: {}", app.session.score());
    f.render_widget(
        Paragraph::new(score_text).alignment(Alignment::Center),
        chunks[2],
    );

    let help_text = if app.screen == Screen::Playing {
        "ESC: Quit | TAB: Ranking"
    } else {
        "q: Quit | TAB: Ranking"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use ratatui::{Terminal, backend::TestBackend};
    use tempfile::TempDir;

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn draws_category_menu_then_board() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("animals.txt"), "GO\n").unwrap();
        let config = GameConfig {
            data_dir: Some(dir.path().to_path_buf()),
            ranking_path: dir.path().join("ranking.json"),
            seed: Some(1),
            ..GameConfig::default()
        };

        let mut app = App::new(config);
        let menu = screen_text(&app);
        assert!(menu.contains("Programming"));
        assert!(menu.contains("No records yet"));

        app.choose_category(Category::Animals);
        app.choose_difficulty(Difficulty::Easy);
        let board = screen_text(&app);
        assert!(board.contains("Word:"));
        assert!(board.contains("6/6"));
    }
}
