//! File-backed ranking store
//!
//! The whole ranking is one JSON array. Every append reads it, pushes the new record
//! and atomically replaces the file, optionally keeping the previous contents as
//! `<file>.bak`. A file that does not parse is never overwritten: callers get
//! `RankingError::CorruptStore` and decide whether to move it aside.

use super::entry::RankingEntry;
use crate::core::Difficulty;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Leaderboard length used when the caller has no preference
pub const DEFAULT_LIMIT: usize = 5;

/// Error type for ranking persistence
#[derive(Debug, Error)]
pub enum RankingError {
    #[error("failed to access ranking file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("ranking file {} is corrupt", .path.display())]
    CorruptStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl RankingError {
    fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    #[must_use]
    pub const fn is_corrupt(&self) -> bool {
        matches!(self, Self::CorruptStore { .. })
    }
}

/// Persistent ranking backed by a single JSON file
#[derive(Debug, Clone)]
pub struct RankingStore {
    path: PathBuf,
    keep_backup: bool,
}

impl RankingStore {
    /// Store at `path`, keeping a backup copy on every write
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            keep_backup: true,
        }
    }

    /// Enable or disable the `<file>.bak` copy made before each overwrite
    #[must_use]
    pub const fn with_backup(mut self, keep_backup: bool) -> Self {
        self.keep_backup = keep_backup;
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Location of the copy taken before each overwrite
    #[must_use]
    pub fn backup_path(&self) -> PathBuf {
        sibling(&self.path, "bak")
    }

    /// Read every record in insertion order
    ///
    /// A missing or blank file is an empty ranking.
    ///
    /// # Errors
    ///
    /// `RankingError::Io` if the file exists but cannot be read, or
    /// `RankingError::CorruptStore` if its contents are not a ranking.
    pub fn load(&self) -> Result<Vec<RankingEntry>, RankingError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "ranking file absent, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(RankingError::io(&self.path, e)),
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let entries: Vec<RankingEntry> =
            serde_json::from_str(&content).map_err(|source| {
                warn!(path = %self.path.display(), error = %source, "ranking file does not parse");
                RankingError::CorruptStore {
                    path: self.path.clone(),
                    source,
                }
            })?;

        debug!(path = %self.path.display(), count = entries.len(), "ranking loaded");
        Ok(entries)
    }

    /// Add a record to the ranking
    ///
    /// # Errors
    ///
    /// `RankingError::CorruptStore` if the existing file does not parse (nothing is
    /// written), or `RankingError::Io` if reading or replacing the file fails.
    pub fn append(&self, entry: RankingEntry) -> Result<(), RankingError> {
        let mut entries = self.load()?;
        info!(
            name = %entry.name,
            score = entry.score,
            difficulty = %entry.difficulty,
            "saving ranking entry"
        );
        entries.push(entry);
        self.write_all(&entries)
    }

    /// Best `limit` records for `difficulty`, highest score first
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn top_entries(
        &self,
        difficulty: Difficulty,
        limit: usize,
    ) -> Result<Vec<RankingEntry>, RankingError> {
        Ok(top_entries(&self.load()?, difficulty, limit))
    }

    /// Move an unreadable ranking file out of the way so a fresh one can be started
    ///
    /// The file is renamed, never deleted. Returns the new location, or `None` when
    /// there was no file.
    ///
    /// # Errors
    ///
    /// `RankingError::Io` if the rename fails.
    pub fn quarantine(&self) -> Result<Option<PathBuf>, RankingError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let mut target = sibling(&self.path, "corrupt");
        let mut n = 1;
        while target.exists() {
            target = sibling(&self.path, &format!("corrupt.{n}"));
            n += 1;
        }

        fs::rename(&self.path, &target).map_err(|e| RankingError::io(&self.path, e))?;
        warn!(from = %self.path.display(), to = %target.display(), "corrupt ranking moved aside");
        Ok(Some(target))
    }

    fn write_all(&self, entries: &[RankingEntry]) -> Result<(), RankingError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|e| RankingError::io(dir, e))?;

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| RankingError::io(dir, e))?;
        serde_json::to_writer_pretty(&mut tmp, entries)
            .map_err(|e| RankingError::io(tmp.path(), e.into()))?;
        tmp.write_all(b"\n")
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| RankingError::io(tmp.path(), e))?;

        if self.keep_backup && self.path.exists() {
            let backup = self.backup_path();
            fs::copy(&self.path, &backup).map_err(|e| RankingError::io(&backup, e))?;
        }

        tmp.persist(&self.path)
            .map_err(|e| RankingError::io(&self.path, e.error))?;

        debug!(path = %self.path.display(), count = entries.len(), "ranking written");
        Ok(())
    }
}

/// Filter to `difficulty`, order by score descending (ties keep insertion order), cut to `limit`
#[must_use]
pub fn top_entries(
    entries: &[RankingEntry],
    difficulty: Difficulty,
    limit: usize,
) -> Vec<RankingEntry> {
    let mut filtered: Vec<RankingEntry> = entries
        .iter()
        .filter(|e| e.difficulty == difficulty)
        .cloned()
        .collect();

    // sort_by is stable
    filtered.sort_by(|a, b| b.score.cmp(&a.score));
    filtered.truncate(limit);
    filtered
}

fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".");
    name.push(suffix);
    path.with_file_name(name)
}
