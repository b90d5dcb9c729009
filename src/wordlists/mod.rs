//! Word lists for hangman
//!
//! One embedded list per category, compiled into the binary. A directory of
//! `<category>.txt` files can override them at runtime.

mod embedded;
pub mod loader;

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub use embedded::{ANIMALS, COUNTRIES, PROGRAMMING};

/// Word category offered in the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Animals,
    Countries,
    Programming,
}

/// Error returned when parsing an unknown category name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category '{0}' (expected animals, countries or programming)")]
pub struct ParseCategoryError(String);

impl Category {
    /// All categories, in menu order
    pub const ALL: [Self; 3] = [Self::Animals, Self::Countries, Self::Programming];

    /// File name stem of the category's word file
    #[must_use]
    pub const fn file_stem(self) -> &'static str {
        match self {
            Self::Animals => "animals",
            Self::Countries => "countries",
            Self::Programming => "programming",
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Animals => "Animals",
            Self::Countries => "Countries",
            Self::Programming => "Programming",
        }
    }

    /// Word list compiled into the binary
    #[must_use]
    pub const fn embedded(self) -> &'static [&'static str] {
        match self {
            Self::Animals => ANIMALS,
            Self::Countries => COUNTRIES,
            Self::Programming => PROGRAMMING,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "animals" | "1" => Ok(Self::Animals),
            "countries" | "2" => Ok(Self::Countries),
            "programming" | "3" => Ok(Self::Programming),
            _ => Err(ParseCategoryError(s.to_string())),
        }
    }
}
