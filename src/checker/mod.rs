pub mod aggregate;
pub mod dispatch;
pub mod tokenizer;

use crate::backend::SpellBackend;
use crate::{Typo, TypoError};
use log::debug;

/// Tuning for a typo search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FinderConfig {
    /// Most backend queries allowed in flight at once. `None` dispatches
    /// every distinct word immediately; `Some(0)` behaves like `Some(1)`.
    pub max_in_flight: Option<usize>,
}

/// Find every misspelled word in `text`, with unbounded concurrency.
pub async fn find_typos<B>(backend: &B, text: &str) -> Result<Vec<Typo>, TypoError<B::Error>>
where
    B: SpellBackend + ?Sized,
{
    find_typos_with(backend, text, &FinderConfig::default()).await
}

/// Scan `text`, query the backend once per distinct word and collect typos.
///
/// The backend is validated before any work. The result is all or nothing:
/// either the complete typo list or the first backend failure (by position of
/// the failing word in the text), passed through untouched.
pub async fn find_typos_with<B>(
    backend: &B,
    text: &str,
    config: &FinderConfig,
) -> Result<Vec<Typo>, TypoError<B::Error>>
where
    B: SpellBackend + ?Sized,
{
    backend.validate().map_err(TypoError::InvalidBackend)?;

    let occurrences = tokenizer::scan(text);
    let words = dispatch::distinct_words(&occurrences);
    debug!(
        "scanned {} occurrences, {} distinct words",
        occurrences.len(),
        words.len()
    );

    let verdicts = dispatch::dispatch(&words, backend, config)
        .await
        .map_err(TypoError::Backend)?;

    let typos = aggregate::aggregate(&occurrences, verdicts);
    debug!("found {} typos via '{}'", typos.len(), backend.name());

    Ok(typos)
}

/// A backend bundled with its search settings.
pub struct TypoFinder<B> {
    backend: B,
    config: FinderConfig,
}

impl<B: SpellBackend> TypoFinder<B> {
    pub fn new(backend: B) -> Self {
        Self::with_config(backend, FinderConfig::default())
    }

    pub fn with_config(backend: B, config: FinderConfig) -> Self {
        Self { backend, config }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub async fn find_typos(&self, text: &str) -> Result<Vec<Typo>, TypoError<B::Error>> {
        find_typos_with(&self.backend, text, &self.config).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::Verdict;
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::fmt;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, PartialEq)]
    struct Outage(&'static str);

    impl fmt::Display for Outage {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "backend outage: {}", self.0)
        }
    }

    impl std::error::Error for Outage {}

    /// Words in `known` are correct, everything else gets one suggestion.
    struct Fixture {
        known: HashSet<&'static str>,
        ready: bool,
        failing: bool,
        calls: AtomicUsize,
    }

    impl Fixture {
        fn new(known: &[&'static str]) -> Self {
            Self {
                known: known.iter().copied().collect(),
                ready: true,
                failing: false,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl SpellBackend for Fixture {
        type Error = Outage;

        async fn check_word(&self, word: &str) -> Result<Verdict, Outage> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::task::yield_now().await;

            if self.failing {
                Err(Outage("dictionary offline"))
            } else if self.known.contains(word) {
                Ok(Verdict::Correct)
            } else {
                Ok(Verdict::misspelled([word.to_uppercase()]))
            }
        }

        fn validate(&self) -> Result<(), String> {
            if self.ready {
                Ok(())
            } else {
                Err("fixture not loaded".to_string())
            }
        }

        fn name(&self) -> &str {
            "fixture"
        }
    }

    #[tokio::test]
    async fn test_everything_known_yields_no_typos() {
        let backend = Fixture::new(&["all", "words", "are", "known"]);
        let typos = find_typos(&backend, "All words are known.").await.unwrap();
        // "All" is a distinct spelling from "all"
        assert_eq!(typos.len(), 1);
        assert_eq!(typos[0].word, "All");

        let typos = find_typos(&backend, "all words are known").await.unwrap();
        assert!(typos.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_backend_does_no_work() {
        let backend = Fixture {
            ready: false,
            ..Fixture::new(&[])
        };

        let err = find_typos(&backend, "some text").await.unwrap_err();
        assert!(err.is_invalid_backend());
        assert!(err.to_string().contains("valid spell-checking backend instance"));
        assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_backend_failure_passes_through() {
        let backend = Fixture {
            failing: true,
            ..Fixture::new(&[])
        };

        let err = find_typos(&backend, "word").await.unwrap_err();
        assert_eq!(err.into_backend(), Some(Outage("dictionary offline")));
    }

    #[tokio::test]
    async fn test_empty_text_never_fails() {
        let backend = Fixture {
            failing: true,
            ..Fixture::new(&[])
        };

        assert!(find_typos(&backend, "").await.unwrap().is_empty());
        assert!(find_typos(&backend, "42, 7.").await.unwrap().is_empty());
        assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_queries_once_per_distinct_word() {
        let backend = Fixture::new(&["the"]);
        let typos = find_typos(&backend, "teh the teh the teh").await.unwrap();

        assert_eq!(backend.calls.load(Ordering::SeqCst), 2);
        assert_eq!(typos.len(), 1);
        assert_eq!(typos[0].positions.len(), 3);
        assert_eq!(typos[0].suggestions, vec!["TEH"]);
    }

    #[tokio::test]
    async fn test_finder_with_cap_matches_unbounded() {
        let text = "one twoo three fuor five sixx";
        let known = ["one", "three", "five"];

        let unbounded = TypoFinder::new(Fixture::new(&known));
        let capped = TypoFinder::with_config(
            Fixture::new(&known),
            FinderConfig {
                max_in_flight: Some(1),
            },
        );

        let mut a: Vec<String> = unbounded.find_typos(text).await.unwrap().into_iter().map(|t| t.word).collect();
        let mut b: Vec<String> = capped.find_typos(text).await.unwrap().into_iter().map(|t| t.word).collect();
        a.sort();
        b.sort();
        assert_eq!(a, vec!["fuor", "sixx", "twoo"]);
        assert_eq!(a, b);
        assert_eq!(capped.backend().calls.load(Ordering::SeqCst), 6);
    }
}
