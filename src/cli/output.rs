use crate::Typo;
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Typos found in one input, ready for printing.
pub struct Report<'a> {
    pub source: String,
    pub text: &'a str,
    pub typos: Vec<Typo>,
}

impl<'a> Report<'a> {
    /// Typos and their positions sorted into text order for stable display.
    pub fn new(source: String, text: &'a str, mut typos: Vec<Typo>) -> Self {
        for typo in &mut typos {
            typo.positions.sort_by_key(|p| p.from);
        }
        typos.sort_by_key(Typo::first_offset);
        Self {
            source,
            text,
            typos,
        }
    }

    pub fn occurrence_count(&self) -> usize {
        self.typos.iter().map(|t| t.positions.len()).sum()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JsonPosition {
    pub from: usize,
    pub to: usize,
    pub length: usize,
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JsonTypo {
    pub file: String,
    pub word: String,
    pub suggestions: Vec<String>,
    pub positions: Vec<JsonPosition>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput {
    pub files_checked: usize,
    pub total_typos: usize,
    pub typos: Vec<JsonTypo>,
}

/// 1-based line and column (in chars) of a byte offset
pub fn line_column(text: &str, offset: usize) -> (usize, usize) {
    let before = &text[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}

/// The line around `[from, to)` trimmed to about 20 chars of context each side
fn context(text: &str, from: usize, to: usize) -> String {
    let line_start = text[..from].rfind('\n').map_or(0, |i| i + 1);
    let line_end = text[to..].find('\n').map_or(text.len(), |i| to + i);

    let start = text[line_start..from]
        .char_indices()
        .rev()
        .nth(19)
        .map_or(line_start, |(i, _)| line_start + i);
    let end = text[to..line_end]
        .char_indices()
        .nth(20)
        .map_or(line_end, |(i, _)| to + i);

    let snippet = &text[start..end];
    match (start > line_start, end < line_end) {
        (true, true) => format!("...{}...", snippet),
        (true, false) => format!("...{}", snippet),
        (false, true) => format!("{}...", snippet),
        (false, false) => snippet.to_string(),
    }
}

pub fn print_text_report(report: &Report<'_>, colored_output: bool) {
    if report.typos.is_empty() {
        return;
    }

    if colored_output {
        println!("\n{}", report.source.bold().underline());
    } else {
        println!("\n{}", report.source);
    }

    for typo in &report.typos {
        for position in &typo.positions {
            let (line, column) = line_column(report.text, position.from);
            let line_info = format!("{}:{}", line, column);
            let snippet = context(report.text, position.from, position.to);

            if colored_output {
                println!(
                    "  {} {} {}",
                    line_info.blue().bold(),
                    typo.word.red().bold(),
                    snippet.replace(&typo.word, &typo.word.red().bold().to_string())
                );
            } else {
                println!("  {} {} {}", line_info, typo.word, snippet);
            }
        }

        if !typo.suggestions.is_empty() {
            let shown = typo.suggestions.iter().take(5);
            if colored_output {
                let suggestions = shown
                    .map(|s| s.green().to_string())
                    .collect::<Vec<_>>()
                    .join(&", ".dimmed().to_string());
                println!("    {} {}", "→".dimmed(), suggestions);
            } else {
                let suggestions = shown.map(String::as_str).collect::<Vec<_>>().join(", ");
                println!("    → {}", suggestions);
            }
        }
    }
}

pub fn json_output(reports: &[Report<'_>]) -> JsonOutput {
    let typos: Vec<JsonTypo> = reports
        .iter()
        .flat_map(|report| {
            report.typos.iter().map(move |typo| JsonTypo {
                file: report.source.clone(),
                word: typo.word.clone(),
                suggestions: typo.suggestions.clone(),
                positions: typo
                    .positions
                    .iter()
                    .map(|p| {
                        let (line, column) = line_column(report.text, p.from);
                        JsonPosition {
                            from: p.from,
                            to: p.to,
                            length: p.length,
                            line,
                            column,
                        }
                    })
                    .collect(),
            })
        })
        .collect();

    JsonOutput {
        files_checked: reports.len(),
        total_typos: typos.len(),
        typos,
    }
}

pub fn print_json_reports(reports: &[Report<'_>]) {
    match serde_json::to_string_pretty(&json_output(reports)) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize report: {}", e),
    }
}

pub fn print_check_summary(total_typos: usize, inputs: usize, colored: bool) {
    println!();
    if total_typos == 0 {
        if colored {
            println!("{}", "✓ No typos found!".green().bold());
        } else {
            println!("✓ No typos found!");
        }
        return;
    }

    let typo_word = if total_typos == 1 { "typo" } else { "typos" };
    let input_word = if inputs == 1 { "input" } else { "inputs" };
    if colored {
        println!(
            "{} {} {} found in {} {}",
            "✗".red().bold(),
            total_typos.to_string().red().bold(),
            typo_word,
            inputs,
            input_word
        );
    } else {
        println!("✗ {} {} found in {} {}", total_typos, typo_word, inputs, input_word);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_format_parsing() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_line_column() {
        let text = "first line\nsecönd teh";
        assert_eq!(line_column(text, 0), (1, 1));
        assert_eq!(line_column(text, 6), (1, 7));
        let offset = text.find("teh").unwrap();
        assert_eq!(line_column(text, offset), (2, 8));
    }

    #[test]
    fn test_context_stays_on_line() {
        let text = "short\nthe teh word\nnext";
        let from = text.find("teh").unwrap();
        assert_eq!(context(text, from, from + 3), "the teh word");

        let long = format!("{}teh{}", "a".repeat(30), "b".repeat(30));
        let snippet = context(&long, 30, 33);
        assert!(snippet.starts_with("..."));
        assert!(snippet.ends_with("..."));
        assert!(snippet.contains("teh"));
    }

    #[test]
    fn test_report_sorts_and_json_counts() {
        let text = "zz aa zz";
        let typos = vec![
            Typo {
                word: "zz".to_string(),
                suggestions: vec![],
                positions: vec![Position::new(6, 8), Position::new(0, 2)],
            },
            Typo {
                word: "aa".to_string(),
                suggestions: vec!["a".to_string()],
                positions: vec![Position::new(3, 5)],
            },
        ];

        let report = Report::new("<stdin>".to_string(), text, typos);
        assert_eq!(report.typos[0].word, "zz");
        assert_eq!(report.typos[0].positions[0].from, 0);
        assert_eq!(report.occurrence_count(), 3);

        let json = json_output(&[report]);
        assert_eq!(json.files_checked, 1);
        assert_eq!(json.total_typos, 2);
        assert_eq!(json.typos[1].positions[0].column, 4);
    }
}
