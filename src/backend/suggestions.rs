use crate::backend::dictionary::Dictionary;

/// Generate ranked spelling suggestions for `word`, best first.
pub fn generate(word: &str, dictionary: &Dictionary, max_suggestions: usize) -> Vec<String> {
    let mut suggestions = Suggestions::new(max_suggestions);
    let length = word.chars().count();

    // 1. Same three-letter prefix, close in edit distance
    if length >= 3 {
        suggestions.extend_ranked(word, dictionary.words_with_prefix(char_prefix(word, 3)), 2);
    }

    // 2. Single edits that land on a dictionary word
    for candidate in transformations(word) {
        if suggestions.is_full() {
            return suggestions.into_vec();
        }
        if dictionary.contains(&candidate) {
            suggestions.push(candidate);
        }
    }

    // 3. Looser match on a two-letter prefix
    if length >= 2 {
        suggestions.extend_ranked(word, dictionary.words_with_prefix(char_prefix(word, 2)), 3);
    }

    // 4. Whole-dictionary scan, only affordable for very short words
    if length <= 3 && !suggestions.is_full() {
        let candidates = dictionary
            .all_words()
            .into_iter()
            .filter(|w| w.chars().count().abs_diff(length) <= 1)
            .take(100);
        suggestions.extend_ranked(word, candidates, 2);
    }

    suggestions.into_vec()
}

struct Suggestions {
    words: Vec<String>,
    max: usize,
}

impl Suggestions {
    fn new(max: usize) -> Self {
        Self {
            words: Vec::new(),
            max,
        }
    }

    fn is_full(&self) -> bool {
        self.words.len() >= self.max
    }

    fn push(&mut self, word: String) {
        if !self.is_full() && !self.words.contains(&word) {
            self.words.push(word);
        }
    }

    /// Add candidates within `max_distance` of `word`, nearest first.
    fn extend_ranked(
        &mut self,
        word: &str,
        candidates: impl IntoIterator<Item = String>,
        max_distance: usize,
    ) {
        let mut ranked: Vec<(usize, String)> = candidates
            .into_iter()
            .filter(|c| c != word)
            .map(|c| (edit_distance(word, &c), c))
            .filter(|(distance, _)| *distance <= max_distance)
            .collect();
        ranked.sort_by_key(|(distance, _)| *distance);

        for (_, candidate) in ranked {
            self.push(candidate);
        }
    }

    fn into_vec(self) -> Vec<String> {
        self.words
    }
}

fn char_prefix(word: &str, chars: usize) -> &str {
    match word.char_indices().nth(chars) {
        Some((end, _)) => &word[..end],
        None => word,
    }
}

/// Levenshtein distance between two strings
fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];

    for (i, a_char) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, b_char) in b.iter().enumerate() {
            let cost = usize::from(a_char != b_char);
            current[j + 1] = (previous[j + 1] + 1) // deletion
                .min(current[j] + 1) // insertion
                .min(previous[j] + cost); // substitution
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}

/// Common single-edit typos: deletions, swapped neighbours, confusable letters
fn transformations(word: &str) -> Vec<String> {
    const CONFUSABLE: [(char, char); 11] = [
        ('a', 'e'),
        ('e', 'i'),
        ('i', 'o'),
        ('o', 'u'),
        ('b', 'v'),
        ('c', 'k'),
        ('f', 'v'),
        ('g', 'j'),
        ('m', 'n'),
        ('s', 'z'),
        ('t', 'd'),
    ];

    let chars: Vec<char> = word.chars().collect();
    let mut out = Vec::new();

    for i in 0..chars.len() {
        let mut edited = chars.clone();
        edited.remove(i);
        out.push(edited.into_iter().collect());
    }

    for i in 0..chars.len().saturating_sub(1) {
        let mut edited = chars.clone();
        edited.swap(i, i + 1);
        out.push(edited.into_iter().collect());
    }

    for (i, &ch) in chars.iter().enumerate() {
        for &(from, to) in &CONFUSABLE {
            if ch == from {
                let mut edited = chars.clone();
                edited[i] = to;
                out.push(edited.into_iter().collect());
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance("hello", "hello"), 0);
        assert_eq!(edit_distance("hello", "hallo"), 1);
        assert_eq!(edit_distance("hello", "world"), 4);
        assert_eq!(edit_distance("contani", "contain"), 2);
        assert_eq!(edit_distance("", "abc"), 3);
    }

    #[test]
    fn test_transformations() {
        let transforms = transformations("hello");
        assert!(transforms.contains(&"hllo".to_string())); // deletion
        assert!(transforms.contains(&"ehllo".to_string())); // transposition
        assert!(transforms.contains(&"hillo".to_string())); // confusable
    }

    #[test]
    fn test_char_prefix_on_multibyte() {
        assert_eq!(char_prefix("über", 3), "übe");
        assert_eq!(char_prefix("ab", 3), "ab");
    }

    #[test]
    fn test_generate_ranks_and_limits() {
        let dict = Dictionary::from_words(["contain", "contains", "container", "example", "text"]).unwrap();

        let found = generate("contani", &dict, 5);
        assert_eq!(found.first().map(String::as_str), Some("contain"));

        let found = generate("exemple", &dict, 5);
        assert!(found.contains(&"example".to_string()));

        assert!(generate("contani", &dict, 0).is_empty());
    }
}
