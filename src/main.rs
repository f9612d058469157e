use anyhow::{Context, Result};
use clap::Parser;
use dialoguer::Confirm;
use spellpad::cli::output::{self, OutputFormat};
use spellpad::cli::session::Session;
use spellpad::config::Overrides;
use spellpad::{cli, Config, SpellChecker};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "spellpad")]
#[command(version, about = "Real-time spell checking in the terminal", long_about = None)]
struct Cli {
    /// File to edit, or files to report on with --check
    #[arg(value_name = "FILES")]
    files: Vec<PathBuf>,

    /// Report misspellings and exit instead of opening a session
    #[arg(short, long)]
    check: bool,

    /// Output format for --check (text, json)
    #[arg(short = 'o', long, default_value = "text", requires = "check")]
    format: OutputFormat,

    /// Exit with code 0 even if errors are found
    #[arg(long, requires = "check")]
    no_fail: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Reference word-frequency corpus (.json, .json.gz or word list)
    #[arg(long, env = "SPELLPAD_CORPUS")]
    corpus: Option<PathBuf>,

    /// Maximum number of suggestions per word
    #[arg(short, long)]
    limit: Option<usize>,

    /// Maximum edit distance for suggestions
    #[arg(long)]
    max_distance: Option<usize>,

    /// Do not flag tokens made only of digits
    #[arg(long)]
    skip_numbers: bool,

    /// Do not flag single-character tokens
    #[arg(long)]
    skip_single_chars: bool,

    /// Pattern of tokens to leave unchecked (regex, whole token)
    #[arg(long)]
    ignore_pattern: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let colored = !cli.no_color;
    if !colored {
        colored::control::set_override(false);
    }

    let config = Config::load(Overrides {
        corpus: cli.corpus.clone(),
        max_suggestions: cli.limit,
        max_edit_distance: cli.max_distance,
        skip_numbers: cli.skip_numbers,
        skip_single_chars: cli.skip_single_chars,
        ignore_patterns: cli.ignore_pattern.clone(),
    })?;

    let checker = SpellChecker::from_config(&config).context("Failed to load vocabulary")?;

    if cli.check {
        run_check(&cli, &config, &checker, colored)
    } else {
        run_session(&cli, &config, checker, colored)
    }
}

fn run_check(cli: &Cli, config: &Config, checker: &SpellChecker, colored: bool) -> Result<()> {
    if cli.files.is_empty() {
        anyhow::bail!("No files specified. Use --help for usage information.");
    }

    let mut total_errors = 0;

    for file_path in &cli.files {
        let content = fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))?;

        let found = cli::findings(checker, &content, config.max_suggestions);
        total_errors += found.len();

        let rendered = output::render_findings(file_path, &found, colored, cli.format)?;
        if !rendered.is_empty() {
            println!("{}", rendered);
        }
    }

    if cli.format == OutputFormat::Text {
        output::print_check_summary(total_errors, &cli.files, colored);
    }

    if total_errors > 0 && !cli.no_fail {
        std::process::exit(1);
    }

    Ok(())
}

fn run_session(cli: &Cli, config: &Config, checker: SpellChecker, colored: bool) -> Result<()> {
    if cli.files.len() > 1 {
        anyhow::bail!("Only one file can be edited at a time.");
    }

    let path = cli.files.first();
    let buffer = match path {
        Some(path) if path.exists() => fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?,
        _ => String::new(),
    };

    let mut session = Session::new(checker, buffer, config.max_suggestions, colored);
    session.run()?;

    if let Some(path) = path {
        if session.is_dirty()
            && Confirm::new()
                .with_prompt(format!("Save changes to {}?", path.display()))
                .default(true)
                .interact()?
        {
            fs::write(path, session.buffer())
                .with_context(|| format!("Failed to write file: {}", path.display()))?;
        }
    }

    Ok(())
}
