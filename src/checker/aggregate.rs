use crate::backend::Verdict;
use crate::checker::tokenizer::Occurrence;
use crate::{Position, Typo};
use std::collections::HashMap;

/// Join verdicts with occurrences: one typo per misspelled word, carrying a
/// position for every occurrence of that word. Order is unspecified.
pub fn aggregate(occurrences: &[Occurrence<'_>], verdicts: HashMap<&str, Verdict>) -> Vec<Typo> {
    let mut positions: HashMap<&str, Vec<Position>> = HashMap::new();
    for occurrence in occurrences {
        positions
            .entry(occurrence.word)
            .or_default()
            .push(occurrence.position());
    }

    verdicts
        .into_iter()
        .filter_map(|(word, verdict)| match verdict {
            Verdict::Correct => None,
            Verdict::Misspelled { suggestions } => Some(Typo {
                word: word.to_string(),
                suggestions,
                positions: positions.remove(word).unwrap_or_default(),
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::tokenizer::scan;

    #[test]
    fn test_every_occurrence_becomes_a_position() {
        let text = "teh cat and teh dog, teh end";
        let occurrences = scan(text);
        let verdicts = HashMap::from([
            ("teh", Verdict::misspelled(["the", "tea"])),
            ("cat", Verdict::Correct),
            ("and", Verdict::Correct),
            ("dog", Verdict::Correct),
            ("end", Verdict::Correct),
        ]);

        let typos = aggregate(&occurrences, verdicts);
        assert_eq!(typos.len(), 1);

        let typo = &typos[0];
        assert_eq!(typo.word, "teh");
        assert_eq!(typo.suggestions, vec!["the", "tea"]);
        assert_eq!(typo.positions.len(), 3);
        for position in &typo.positions {
            assert_eq!(&text[position.from..position.to], "teh");
            assert_eq!(position.length, 3);
        }
    }

    #[test]
    fn test_misspelled_without_suggestions_is_still_a_typo() {
        let occurrences = scan("zzxq");
        let typos = aggregate(&occurrences, HashMap::from([("zzxq", Verdict::misspelled(Vec::<String>::new()))]));

        assert_eq!(typos.len(), 1);
        assert!(typos[0].suggestions.is_empty());
        assert_eq!(typos[0].positions, vec![Position::new(0, 4)]);
    }

    #[test]
    fn test_all_correct_yields_nothing() {
        let occurrences = scan("all good here");
        let verdicts = occurrences.iter().map(|o| (o.word, Verdict::Correct)).collect();
        assert!(aggregate(&occurrences, verdicts).is_empty());
    }
}
