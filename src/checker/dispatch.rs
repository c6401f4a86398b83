use crate::backend::{SpellBackend, Verdict};
use crate::checker::tokenizer::Occurrence;
use crate::checker::FinderConfig;
use futures::future::join_all;
use futures::stream::{self, StreamExt};
use log::{debug, warn};
use std::collections::{HashMap, HashSet};

/// Distinct spellings in order of first appearance. Exact string equality,
/// no case folding.
pub fn distinct_words<'a>(occurrences: &[Occurrence<'a>]) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    occurrences
        .iter()
        .map(|o| o.word)
        .filter(|word| seen.insert(*word))
        .collect()
}

/// Ask the backend about every word, all queries outstanding at once unless
/// `config.max_in_flight` caps them.
///
/// Every query is allowed to settle. If any failed, the failure of the
/// earliest word in `words` is returned and all other verdicts are dropped.
pub async fn dispatch<'w, B>(
    words: &[&'w str],
    backend: &B,
    config: &FinderConfig,
) -> Result<HashMap<&'w str, Verdict>, B::Error>
where
    B: SpellBackend + ?Sized,
{
    let queries = words
        .iter()
        .map(|&word| async move { (word, backend.check_word(word).await) });

    // Both join_all and buffered yield results in input order
    let settled: Vec<_> = match config.max_in_flight {
        None => join_all(queries).await,
        Some(limit) => {
            debug!("dispatching {} words, at most {} in flight", words.len(), limit.max(1));
            stream::iter(queries).buffered(limit.max(1)).collect().await
        }
    };

    let mut verdicts = HashMap::with_capacity(settled.len());
    for (word, outcome) in settled {
        match outcome {
            Ok(verdict) => {
                verdicts.insert(word, verdict);
            }
            Err(err) => {
                warn!("backend '{}' failed on {:?}: {}", backend.name(), word, err);
                return Err(err);
            }
        }
    }

    Ok(verdicts)
}
