use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use env_logger::Builder;
use log::{info, LevelFilter};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use typocheck::backend::WordListBackend;
use typocheck::cli::output::{self, OutputFormat, Report};
use typocheck::config::{Config, Overrides};
use typocheck::{dict, TypoFinder};

#[derive(Parser, Debug)]
#[command(name = "typocheck")]
#[command(version, about = "Find typos and every place they occur", long_about = None)]
struct Cli {
    /// Files to check (reads stdin when none are given)
    #[arg(value_name = "FILES")]
    files: Vec<PathBuf>,

    /// Dictionary file to check against
    #[arg(short, long, env = "TYPOCHECK_DICT")]
    dict: Option<PathBuf>,

    /// Language of the installed dictionary (e.g., en_US, en_GB)
    #[arg(short, long)]
    language: Option<String>,

    /// Personal dictionary file
    #[arg(long)]
    personal_dict: Option<PathBuf>,

    /// Pattern to ignore (regex)
    #[arg(long)]
    ignore_pattern: Vec<String>,

    /// Maximum number of words checked concurrently
    #[arg(long)]
    max_in_flight: Option<usize>,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with code 0 even if typos are found
    #[arg(long)]
    no_fail: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Dictionary management
    Dict {
        #[command(subcommand)]
        action: DictCommands,
    },
}

#[derive(Subcommand, Debug)]
enum DictCommands {
    /// Build a dictionary from a word list (one word per line)
    Build {
        wordlist: PathBuf,

        /// Where to write the dictionary (defaults to the data directory)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Show dictionary info
    Info,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let config = Config::load(Overrides {
        language: cli.language.clone(),
        dictionary: cli.dict.clone(),
        personal_dictionary: cli.personal_dict.clone(),
        ignore_patterns: cli.ignore_pattern.clone(),
        max_in_flight: cli.max_in_flight,
    })?;

    if let Some(command) = cli.command {
        return handle_command(command, &config);
    }

    let backend = WordListBackend::new(&config)?;
    let finder = TypoFinder::with_config(backend, config.finder());

    let inputs = read_inputs(&cli.files)?;
    let mut reports = Vec::with_capacity(inputs.len());

    for (source, text) in &inputs {
        let typos = finder
            .find_typos(text)
            .await
            .with_context(|| format!("Failed to check {}", source))?;
        let report = Report::new(source.clone(), text, typos);
        info!(
            "{}: {} typos, {} occurrences",
            source,
            report.typos.len(),
            report.occurrence_count()
        );
        reports.push(report);
    }

    let colored = !cli.no_color;
    let total_typos: usize = reports.iter().map(|r| r.typos.len()).sum();

    match cli.format {
        OutputFormat::Text => {
            for report in &reports {
                output::print_text_report(report, colored);
            }
            output::print_check_summary(total_typos, reports.len(), colored);
        }
        OutputFormat::Json => output::print_json_reports(&reports),
    }

    if total_typos > 0 && !cli.no_fail {
        std::process::exit(1);
    }

    Ok(())
}

fn read_inputs(files: &[PathBuf]) -> Result<Vec<(String, String)>> {
    if files.is_empty() {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        return Ok(vec![("<stdin>".to_string(), text)]);
    }

    files
        .iter()
        .map(|path| {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read file: {}", path.display()))?;
            Ok((path.display().to_string(), text))
        })
        .collect()
}

fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Dict { action } => match action {
            DictCommands::Build { wordlist, output } => {
                let output = output.or_else(|| config.dictionary.clone());
                dict::manager::build_dictionary(&wordlist, output.as_deref(), &config.language)?;
            }
            DictCommands::Info => {
                dict::manager::show_info(&config.language, config.dictionary.as_deref())?;
            }
        },
    }
    Ok(())
}
