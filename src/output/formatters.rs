//! Formatting utilities for terminal output

use crate::game::MAX_ATTEMPTS;

/// Gallows drawing for each number of wrong attempts (0-6)
pub const GALLOWS: [&str; MAX_ATTEMPTS as usize + 1] = [
    "  +---+\n  |   |\n      |\n      |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n      |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n  |   |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|   |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n /    |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n / \\  |\n      |\n=========",
];

/// Gallows stage for `wrong_attempts`, clamped to the last stage
#[must_use]
pub fn gallows(wrong_attempts: u8) -> &'static str {
    GALLOWS[usize::from(wrong_attempts).min(GALLOWS.len() - 1)]
}

/// Medal shown next to a leaderboard position (0-based)
#[must_use]
pub const fn medal(rank: usize) -> &'static str {
    match rank {
        0 => "🥇",
        1 => "🥈",
        2 => "🥉",
        _ => "  ",
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Remaining lives as hearts, e.g. `♥♥♥♡♡♡`
#[must_use]
pub fn lives(remaining: u8) -> String {
    let remaining = remaining.min(MAX_ATTEMPTS);
    format!(
        "{}{}",
        "♥".repeat(usize::from(remaining)),
        "♡".repeat(usize::from(MAX_ATTEMPTS - remaining))
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gallows_stages() {
        assert!(!gallows(0).contains('O'));
        assert!(gallows(1).contains('O'));
        assert!(gallows(6).contains("/ \\"));
        assert_eq!(gallows(9), gallows(6));
    }

    #[test]
    fn medals_for_podium_only() {
        assert_eq!(medal(0), "🥇");
        assert_eq!(medal(2), "🥉");
        assert_eq!(medal(3), "  ");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn lives_hearts() {
        assert_eq!(lives(6), "♥♥♥♥♥♥");
        assert_eq!(lives(2), "♥♥♡♡♡♡");
        assert_eq!(lives(0), "♡♡♡♡♡♡");
    }
}
