use crate::cli::Finding;
use crate::{ErrorSpan, ScanReport};
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
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

#[derive(Debug, Serialize, Deserialize)]
pub struct JsonError {
    pub file: String,
    pub line: usize,
    pub column: usize,
    pub start: usize,
    pub end: usize,
    pub word: String,
    pub suggestions: Vec<String>,
    pub context: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput {
    pub file: String,
    pub total_errors: usize,
    pub errors: Vec<JsonError>,
}

/// Render the findings of one file in the requested format
pub fn render_findings(
    file_path: &Path,
    findings: &[Finding],
    colored_output: bool,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_text(file_path, findings, colored_output)),
        OutputFormat::Json => render_json(file_path, findings),
    }
}

fn render_text(file_path: &Path, findings: &[Finding], colored_output: bool) -> String {
    if findings.is_empty() {
        return String::new();
    }

    let file_name = file_path.display().to_string();
    let mut out = if colored_output {
        format!("\n{}\n", file_name.bold().underline())
    } else {
        format!("\n{}\n", file_name)
    };

    for finding in findings {
        let line_info = format!("{}:{}", finding.line, finding.column);

        if colored_output {
            out.push_str(&format!(
                "  {} {} {}\n",
                line_info.blue().bold(),
                finding.word.red().bold(),
                finding.context.dimmed()
            ));
        } else {
            out.push_str(&format!(
                "  {} {} {}\n",
                line_info, finding.word, finding.context
            ));
        }

        if finding.suggestions.is_empty() {
            out.push_str("    (no suggestions)\n");
        } else if colored_output {
            let suggestions = finding
                .suggestions
                .iter()
                .map(|s| s.green().to_string())
                .collect::<Vec<_>>()
                .join(&", ".dimmed().to_string());
            out.push_str(&format!("    {} {}\n", "→".dimmed(), suggestions));
        } else {
            out.push_str(&format!("    → {}\n", finding.suggestions.join(", ")));
        }
    }

    out
}

fn render_json(file_path: &Path, findings: &[Finding]) -> Result<String, serde_json::Error> {
    let errors: Vec<JsonError> = findings
        .iter()
        .map(|f| JsonError {
            file: file_path.display().to_string(),
            line: f.line,
            column: f.column,
            start: f.span.start,
            end: f.span.end,
            word: f.word.clone(),
            suggestions: f.suggestions.clone(),
            context: f.context.clone(),
        })
        .collect();

    let output = JsonOutput {
        file: file_path.display().to_string(),
        total_errors: errors.len(),
        errors,
    };

    serde_json::to_string_pretty(&output)
}

/// The buffer with every flagged word marked
pub fn highlight(text: &str, spans: &[ErrorSpan], colored_output: bool) -> String {
    let mut out = String::with_capacity(text.len());
    let mut cursor = ErrorSpan { start: 0, end: 0 };

    for span in spans {
        cursor.start = cursor.end;
        cursor.end = span.start;
        out.push_str(cursor.slice(text));

        let word = span.slice(text);
        if colored_output {
            out.push_str(&word.red().underline().to_string());
        } else {
            out.push('[');
            out.push_str(word);
            out.push(']');
        }
        cursor.end = span.end;
    }

    cursor.start = cursor.end;
    cursor.end = usize::MAX;
    out.push_str(cursor.slice(text));
    out
}

pub fn status_line(report: &ScanReport) -> String {
    format!(
        "Words: {} | Errors Found: {}",
        report.words,
        report.errors.len()
    )
}

pub fn print_check_summary(total_errors: usize, files: &[impl AsRef<Path>], colored: bool) {
    println!();
    if total_errors == 0 {
        if colored {
            println!("{}", "✓ No spelling errors found!".green().bold());
        } else {
            println!("✓ No spelling errors found!");
        }
    } else {
        let error_word = if total_errors == 1 { "error" } else { "errors" };
        let file_word = if files.len() == 1 { "file" } else { "files" };
        if colored {
            println!(
                "{} {} {} found in {} {}",
                "✗".red().bold(),
                total_errors.to_string().red().bold(),
                error_word,
                files.len(),
                file_word
            );
        } else {
            println!(
                "✗ {} {} found in {} {}",
                total_errors,
                error_word,
                files.len(),
                file_word
            );
        }
    }
}
