use crate::backend::dictionary::Dictionary;
use crate::backend::suggestions;
use crate::backend::{SpellBackend, Verdict};
use crate::Config;
use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, warn};
use regex::Regex;
use std::collections::HashSet;
use std::convert::Infallible;
use std::fs;

/// Backend that checks words against an FST word list plus a personal
/// dictionary, and suggests corrections by edit distance.
pub struct WordListBackend {
    name: String,
    dictionary: Dictionary,
    personal_words: HashSet<String>,
    ignore_patterns: Vec<Regex>,
    max_suggestions: usize,
    case_sensitive: bool,
}

impl WordListBackend {
    pub fn new(config: &Config) -> Result<Self> {
        let dictionary = match &config.dictionary {
            Some(path) => Dictionary::load_from_path(path)?,
            None => Dictionary::load(&config.language)?,
        };

        Self::from_parts(dictionary, config)
    }

    /// Wrap an already loaded dictionary
    pub fn from_parts(dictionary: Dictionary, config: &Config) -> Result<Self> {
        let mut personal_words = HashSet::new();
        if let Some(personal_dict_path) = &config.personal_dictionary {
            if personal_dict_path.exists() {
                let content = fs::read_to_string(personal_dict_path).with_context(|| {
                    format!(
                        "Failed to read personal dictionary: {}",
                        personal_dict_path.display()
                    )
                })?;
                for line in content.lines() {
                    let word = line.trim();
                    if !word.is_empty() && !word.starts_with('#') {
                        personal_words.insert(fold(word, config.case_sensitive));
                    }
                }
            }
        }

        let mut ignore_patterns = Vec::new();
        for pattern in &config.ignore_patterns {
            match Regex::new(pattern) {
                Ok(re) => ignore_patterns.push(re),
                Err(e) => warn!("Skipping invalid ignore pattern '{}': {}", pattern, e),
            }
        }

        debug!(
            "word list backend for {}: {} words, {} personal, {} ignore patterns",
            config.language,
            dictionary.len(),
            personal_words.len(),
            ignore_patterns.len()
        );

        Ok(Self {
            name: format!("word-list:{}", config.language),
            dictionary,
            personal_words,
            ignore_patterns,
            max_suggestions: config.max_suggestions,
            case_sensitive: config.case_sensitive,
        })
    }

    fn is_known(&self, word: &str) -> bool {
        if self.ignore_patterns.iter().any(|p| p.is_match(word)) {
            return true;
        }

        let folded = fold(word, self.case_sensitive);
        self.personal_words.contains(&folded)
            || self.dictionary.contains(word)
            || self.dictionary.contains(&folded)
    }
}

fn fold(word: &str, case_sensitive: bool) -> String {
    if case_sensitive {
        word.to_string()
    } else {
        word.to_lowercase()
    }
}

#[async_trait]
impl SpellBackend for WordListBackend {
    type Error = Infallible;

    async fn check_word(&self, word: &str) -> Result<Verdict, Infallible> {
        if self.is_known(word) {
            return Ok(Verdict::Correct);
        }

        let suggestions = suggestions::generate(
            &fold(word, self.case_sensitive),
            &self.dictionary,
            self.max_suggestions,
        );

        Ok(Verdict::Misspelled { suggestions })
    }

    fn validate(&self) -> Result<(), String> {
        if self.dictionary.is_empty() {
            return Err(format!("the '{}' dictionary contains no words", self.name));
        }
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
