//! Leaderboard command
//!
//! Prints the best results for one difficulty (or all of them) and exits.

use crate::config::GameConfig;
use crate::core::Difficulty;
use crate::output::Renderer;
use tracing::warn;

/// Print the top `limit` entries for `difficulty`, or for every difficulty when `None`
///
/// A missing or corrupt ranking file is reported through the renderer rather than
/// failing the command.
pub fn show_ranking<R: Renderer>(
    config: &GameConfig,
    difficulty: Option<Difficulty>,
    limit: usize,
    renderer: &mut R,
) {
    let store = config.ranking_store();
    let selected = difficulty.map_or_else(|| Difficulty::ALL.to_vec(), |d| vec![d]);

    for difficulty in selected {
        let entries = store.top_entries(difficulty, limit);
        if let Err(e) = &entries {
            warn!(error = %e, path = %store.path().display(), "ranking unavailable");
        }
        renderer.ranking(difficulty, entries.as_deref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GuessError, GuessOutcome, RoundResult, RoundState};
    use crate::ranking::{RankingEntry, RankingError, RankingStore};
    use tempfile::TempDir;

    #[derive(Default)]
    struct Boards(Vec<(Difficulty, Result<Vec<String>, bool>)>);

    impl Renderer for Boards {
        fn clear(&mut self) {}
        fn prompt(&mut self, _text: &str) {}
        fn notice(&mut self, _text: &str) {}
        fn round(&mut self, _state: &RoundState) {}
        fn outcome(&mut self, _outcome: GuessOutcome) {}
        fn rejected(&mut self, _error: &GuessError) {}
        fn finished(&mut self, _result: &RoundResult) {}

        fn ranking(
            &mut self,
            difficulty: Difficulty,
            entries: Result<&[RankingEntry], &RankingError>,
        ) {
            let names = entries
                .map(|entries| entries.iter().map(|e| e.name.clone()).collect())
                .map_err(RankingError::is_corrupt);
            self.0.push((difficulty, names));
        }
    }

    fn config_in(dir: &TempDir) -> GameConfig {
        GameConfig {
            ranking_path: dir.path().join("ranking.json"),
            ..GameConfig::default()
        }
    }

    #[test]
    fn single_difficulty_respects_limit() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        let store = RankingStore::new(&config.ranking_path);
        for (name, score) in [("Ana", 100), ("Bia", 300), ("Caio", 200)] {
            store
                .append(RankingEntry::new(name, score, 0, Difficulty::Hard))
                .unwrap();
        }

        let mut boards = Boards::default();
        show_ranking(&config, Some(Difficulty::Hard), 2, &mut boards);

        assert_eq!(
            boards.0,
            [(Difficulty::Hard, Ok(vec!["Bia".to_string(), "Caio".to_string()]))]
        );
    }

    #[test]
    fn all_difficulties_when_unspecified() {
        let dir = TempDir::new().unwrap();
        let mut boards = Boards::default();
        show_ranking(&config_in(&dir), None, 5, &mut boards);

        let shown: Vec<_> = boards.0.iter().map(|(d, _)| *d).collect();
        assert_eq!(shown, Difficulty::ALL);
        assert!(boards.0.iter().all(|(_, names)| names == &Ok(Vec::new())));
    }

    #[test]
    fn corrupt_file_is_reported() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        std::fs::write(&config.ranking_path, "{ not json").unwrap();

        let mut boards = Boards::default();
        show_ranking(&config, Some(Difficulty::Easy), 5, &mut boards);

        assert_eq!(boards.0, [(Difficulty::Easy, Err(true))]);
        assert_eq!(
            std::fs::read_to_string(&config.ranking_path).unwrap(),
            "{ not json"
        );
    }
}
