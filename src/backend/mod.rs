//! Spell-checking backends.
//!
//! The typo finder never knows how words are checked. It talks to a
//! [`SpellBackend`], which answers one word at a time. [`WordListBackend`] is
//! the bundled implementation on top of an FST word list.

pub mod dictionary;
pub mod suggestions;
pub mod word_list;

pub use dictionary::Dictionary;
pub use word_list::WordListBackend;

use async_trait::async_trait;

/// What a backend says about one word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    /// Not recognized. `suggestions` may be empty and keep the backend's order.
    Misspelled { suggestions: Vec<String> },
}

impl Verdict {
    pub fn misspelled<I, S>(suggestions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Verdict::Misspelled {
            suggestions: suggestions.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_correct(&self) -> bool {
        matches!(self, Verdict::Correct)
    }
}

/// A word-at-a-time spell-checking oracle.
///
/// Queries for one text are issued concurrently on the same backend, so
/// implementations must tolerate overlapping calls to `check_word`.
#[async_trait]
pub trait SpellBackend: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn check_word(&self, word: &str) -> Result<Verdict, Self::Error>;

    /// Whether this backend can answer queries at all. Checked once before
    /// any text is scanned.
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }

    fn name(&self) -> &str;
}
