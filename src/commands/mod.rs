//! Command implementations

pub mod ranking;
pub mod simple;

pub use ranking::show_ranking;
pub use simple::{SessionSummary, play_round, run_session, run_simple};
