use crate::backend::Dictionary;
use anyhow::{Context, Result};
use colored::*;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Build an FST dictionary from a newline-separated word list.
///
/// Blank lines and `#` comments are skipped. Returns the path written.
pub fn build_dictionary(wordlist: &Path, output: Option<&Path>, language: &str) -> Result<PathBuf> {
    let content = fs::read_to_string(wordlist)
        .with_context(|| format!("Failed to read word list: {}", wordlist.display()))?;

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();

    let dict_path = match output {
        Some(path) => path.to_path_buf(),
        None => Dictionary::default_path(language)?,
    };

    println!(
        "{} dictionary for {} from {}...",
        "Building".cyan().bold(),
        language.yellow(),
        wordlist.display().to_string().dimmed()
    );

    let written = Dictionary::build_from_words(&words, &dict_path)?;
    info!("wrote {} words to {}", written, dict_path.display());

    println!(
        "{} {} words installed: {}",
        "✓".green().bold(),
        written.to_string().yellow(),
        dict_path.display().to_string().cyan()
    );

    Ok(dict_path)
}

pub fn show_info(language: &str, path: Option<&Path>) -> Result<()> {
    let dict_path = match path {
        Some(path) => path.to_path_buf(),
        None => Dictionary::default_path(language)?,
    };

    if !dict_path.exists() {
        println!(
            "{} Dictionary for {} not found at {}.",
            "✗".red().bold(),
            language.yellow(),
            dict_path.display()
        );
        println!(
            "Run {} to build it.",
            "typocheck dict build <WORDLIST>".cyan()
        );
        return Ok(());
    }

    let metadata = fs::metadata(&dict_path)?;

    println!("{}", format!("Dictionary: {}", language).bold());
    println!("  Path: {}", dict_path.display());
    println!("  Size: {} KB", metadata.len() / 1024);
    println!("  Format: FST (Finite State Transducer)");

    match Dictionary::load_from_path(&dict_path) {
        Ok(dict) => println!("  Words: {}", dict.len()),
        Err(e) => println!("  {}: {}", "Error loading dictionary".red(), e),
    }

    Ok(())
}
