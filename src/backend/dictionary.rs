use anyhow::{bail, Context, Result};
use fst::{Automaton, IntoStreamer, Set, SetBuilder, Streamer};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

pub struct Dictionary {
    set: Set<Vec<u8>>,
}

impl Dictionary {
    /// Load the installed dictionary for a language
    pub fn load(language: &str) -> Result<Self> {
        let dict_path = Self::default_path(language)?;

        if !dict_path.exists() {
            bail!(
                "No dictionary installed for '{}' (expected {}). Build one with `typocheck dict build <WORDLIST>`.",
                language,
                dict_path.display()
            );
        }

        Self::load_from_path(&dict_path)
    }

    /// Load dictionary from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)
            .with_context(|| format!("Failed to open dictionary: {}", path.display()))?;

        let set = Set::new(bytes)
            .with_context(|| format!("Failed to parse dictionary: {}", path.display()))?;

        Ok(Self { set })
    }

    /// Build an in-memory dictionary from a word list
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = SetBuilder::memory();
        for word in sorted_unique(words) {
            builder
                .insert(word.as_bytes())
                .context("Failed to insert word into dictionary")?;
        }

        let bytes = builder.into_inner().context("Failed to finalize dictionary")?;
        let set = Set::new(bytes).context("Failed to parse dictionary")?;

        Ok(Self { set })
    }

    /// Check if word exists in dictionary
    pub fn contains(&self, word: &str) -> bool {
        self.set.contains(word.as_bytes())
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Get all words with a given prefix
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        let mut results = Vec::new();
        let mut stream = self
            .set
            .search(fst::automaton::Str::new(prefix).starts_with())
            .into_stream();

        while let Some(key) = stream.next() {
            if let Ok(word) = String::from_utf8(key.to_vec()) {
                results.push(word);
            }
        }

        results
    }

    /// Get all words in dictionary.
    ///
    /// Walks the whole set; suggestion generation only falls back to this
    /// for very short words.
    pub fn all_words(&self) -> Vec<String> {
        let mut words = Vec::new();
        let mut stream = self.set.stream();

        while let Some(key) = stream.next() {
            if let Ok(word) = String::from_utf8(key.to_vec()) {
                words.push(word);
            }
        }

        words
    }

    /// Build a dictionary file from a word list, returns the number of words written
    pub fn build_from_words<I, S>(words: I, output_path: &Path) -> Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let sorted_words = sorted_unique(words);

        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create directory: {}", parent.display())
                })?;
            }
        }

        let file = File::create(output_path)
            .with_context(|| format!("Failed to create dictionary: {}", output_path.display()))?;

        let writer = BufWriter::new(file);
        let mut builder = SetBuilder::new(writer).context("Failed to create FST builder")?;

        for word in &sorted_words {
            builder
                .insert(word.as_bytes())
                .context("Failed to insert word into dictionary")?;
        }

        builder.finish().context("Failed to finalize dictionary")?;

        Ok(sorted_words.len())
    }

    pub fn default_path(language: &str) -> Result<PathBuf> {
        let data_dir = crate::config::Config::data_dir().context("Failed to get data directory")?;

        Ok(data_dir.join(format!("{}.dict", language)))
    }
}

// FST keys must be inserted in byte order without duplicates
fn sorted_unique<I, S>(words: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut sorted: Vec<String> = words
        .into_iter()
        .map(|w| w.as_ref().trim().to_string())
        .filter(|w| !w.is_empty())
        .collect();
    sorted.sort();
    sorted.dedup();
    sorted
}
