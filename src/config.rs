use crate::checker::FinderConfig;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const LOCAL_CONFIG_FILE: &str = ".typocheck.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_language")]
    pub language: String,

    /// Explicit dictionary file; defaults to `<data_dir>/<language>.dict`
    #[serde(default)]
    pub dictionary: Option<PathBuf>,

    #[serde(default)]
    pub personal_dictionary: Option<PathBuf>,

    #[serde(default)]
    pub ignore_patterns: Vec<String>,

    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,

    #[serde(default)]
    pub case_sensitive: bool,

    /// Cap on concurrent backend queries, unbounded when absent
    #[serde(default)]
    pub max_in_flight: Option<usize>,
}

/// Values given on the command line; they win over every config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub language: Option<String>,
    pub dictionary: Option<PathBuf>,
    pub personal_dictionary: Option<PathBuf>,
    pub ignore_patterns: Vec<String>,
    pub max_in_flight: Option<usize>,
}

fn default_language() -> String {
    "en_US".to_string()
}

fn default_max_suggestions() -> usize {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: default_language(),
            dictionary: None,
            personal_dictionary: None,
            ignore_patterns: vec![
                // Matched against whole tokens
                r"^[A-Z0-9_]{2,}$".to_string(),    // ALL_CAPS
                r"^[a-fA-F0-9]{32,}$".to_string(), // Hashes
            ],
            max_suggestions: default_max_suggestions(),
            case_sensitive: false,
            max_in_flight: None,
        }
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(overrides: Overrides) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                config = config.merge(Self::from_file(&global_path)?);
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            config = config.merge(Self::from_file(&local_path)?);
        }

        Ok(config.apply(overrides))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, other: Self) -> Self {
        // other's values override self's if they differ from defaults
        if other.language != default_language() {
            self.language = other.language;
        }
        if other.dictionary.is_some() {
            self.dictionary = other.dictionary;
        }
        if other.personal_dictionary.is_some() {
            self.personal_dictionary = other.personal_dictionary;
        }
        if !other.ignore_patterns.is_empty() {
            self.ignore_patterns = other.ignore_patterns;
        }
        if other.max_suggestions != default_max_suggestions() {
            self.max_suggestions = other.max_suggestions;
        }
        if other.max_in_flight.is_some() {
            self.max_in_flight = other.max_in_flight;
        }
        self.case_sensitive = other.case_sensitive;
        self
    }

    fn apply(mut self, overrides: Overrides) -> Self {
        if let Some(language) = overrides.language {
            self.language = language;
        }
        if overrides.dictionary.is_some() {
            self.dictionary = overrides.dictionary;
        }
        if overrides.personal_dictionary.is_some() {
            self.personal_dictionary = overrides.personal_dictionary;
        }
        self.ignore_patterns.extend(overrides.ignore_patterns);
        if overrides.max_in_flight.is_some() {
            self.max_in_flight = overrides.max_in_flight;
        }

        if self.personal_dictionary.is_none() {
            self.personal_dictionary = Self::default_personal_dict_path();
        }
        self
    }

    /// Settings for the typo finder itself
    pub fn finder(&self) -> FinderConfig {
        FinderConfig {
            max_in_flight: self.max_in_flight,
        }
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "typocheck").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    pub fn default_personal_dict_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "typocheck").map(|dirs| dirs.config_dir().join("personal.txt"))
    }

    pub fn data_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "typocheck").map(|dirs| dirs.data_dir().to_path_buf())
    }
}
