//! Runtime configuration
//!
//! Gathered from command-line flags (and their environment variables) by the binary,
//! then handed to whichever front end runs the game.

use crate::core::Difficulty;
use crate::ranking::RankingStore;
use crate::wordlists::Category;
use crate::wordlists::loader::load_category;
use std::path::PathBuf;

/// Ranking file used when none is configured
pub const DEFAULT_RANKING_FILE: &str = "ranking.json";

/// Settings shared by the TUI and the line-based front end
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Directory holding `<category>.txt` word files; embedded lists otherwise
    pub data_dir: Option<PathBuf>,
    pub ranking_path: PathBuf,
    /// Seed for word selection and hints
    pub seed: Option<u64>,
    /// Copy the ranking to `<file>.bak` before each overwrite
    pub keep_backup: bool,
    /// Skip the category menu
    pub category: Option<Category>,
    /// Skip the difficulty menu
    pub difficulty: Option<Difficulty>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            ranking_path: PathBuf::from(DEFAULT_RANKING_FILE),
            seed: None,
            keep_backup: true,
            category: None,
            difficulty: None,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn ranking_store(&self) -> RankingStore {
        RankingStore::new(&self.ranking_path).with_backup(self.keep_backup)
    }

    /// Dictionary for `category`, honouring the configured data directory
    #[must_use]
    pub fn dictionary(&self, category: Category) -> Vec<String> {
        load_category(category, self.data_dir.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = GameConfig::default();
        assert_eq!(config.ranking_path, PathBuf::from("ranking.json"));
        assert!(config.keep_backup);
        assert!(config.seed.is_none());
    }

    #[test]
    fn ranking_store_uses_configured_path() {
        let config = GameConfig {
            ranking_path: PathBuf::from("scores/board.json"),
            ..GameConfig::default()
        };
        let store = config.ranking_store();
        assert_eq!(store.path(), PathBuf::from("scores/board.json"));
        assert_eq!(store.backup_path(), PathBuf::from("scores/board.json.bak"));
    }
}
