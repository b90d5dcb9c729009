//! Persistent leaderboard
//!
//! Append-only ranking records and the filtered, sorted views shown to the player.

mod entry;
mod store;

pub use entry::{ANONYMOUS, MAX_NAME_LEN, RankingEntry, sanitize_name};
pub use store::{DEFAULT_LIMIT, RankingError, RankingStore, top_entries};
