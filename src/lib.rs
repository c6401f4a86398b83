pub mod backend;
pub mod checker;
pub mod cli;
pub mod config;
pub mod dict;
pub mod error;

pub use backend::{SpellBackend, Verdict};
pub use checker::{find_typos, find_typos_with, FinderConfig, TypoFinder};
pub use config::Config;
pub use error::TypoError;

use serde::{Deserialize, Serialize};

/// A distinct misspelled word, its suggestions and every place it occurs.
///
/// The order of typos in a result, and of `positions` within a typo, carries
/// no meaning. Look typos up by `word`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Typo {
    pub word: String,
    pub suggestions: Vec<String>,
    pub positions: Vec<Position>,
}

/// Byte range of one occurrence: `&text[from..to]` is the typo's word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub from: usize,
    pub to: usize,
    pub length: usize,
}

impl Position {
    pub fn new(from: usize, to: usize) -> Self {
        Self {
            from,
            to,
            length: to - from,
        }
    }
}

impl Typo {
    /// Find the typo for `word` in an unordered result list.
    pub fn find<'a>(typos: &'a [Typo], word: &str) -> Option<&'a Typo> {
        typos.iter().find(|typo| typo.word == word)
    }

    /// Offset of the earliest occurrence, used to present typos in text order.
    pub fn first_offset(&self) -> usize {
        self.positions.iter().map(|p| p.from).min().unwrap_or(0)
    }
}
