use crate::cli::{line_column, output};
use crate::{apply_correction, ErrorSpan, ScanReport, SpellChecker};
use anyhow::Result;
use colored::*;
use console::Term;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};

/// One entry of the correction menu shown for a flagged word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    Replace(String),
    NoSuggestions,
    AddToDictionary,
    Cancel,
}

impl MenuEntry {
    pub fn label(&self) -> String {
        match self {
            MenuEntry::Replace(word) => word.clone(),
            MenuEntry::NoSuggestions => "(no suggestions)".to_string(),
            MenuEntry::AddToDictionary => "Add to dictionary".to_string(),
            MenuEntry::Cancel => "Cancel".to_string(),
        }
    }
}

/// An editing session: a text buffer plus the checker that watches it.
///
/// Every mutation goes through [`Session::set_buffer`], which re-scans.
pub struct Session {
    checker: SpellChecker,
    buffer: String,
    report: ScanReport,
    limit: usize,
    colored: bool,
    dirty: bool,
}

impl Session {
    pub fn new(checker: SpellChecker, buffer: String, limit: usize, colored: bool) -> Self {
        let report = checker.scan_report(&buffer);
        Self {
            checker,
            buffer,
            report,
            limit,
            colored,
            dirty: false,
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn report(&self) -> &ScanReport {
        &self.report
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn set_buffer(&mut self, text: String) {
        self.buffer = text;
        self.dirty = true;
        self.rescan();
    }

    pub fn append(&mut self, text: &str) {
        let mut buffer = std::mem::take(&mut self.buffer);
        if !buffer.is_empty() && !buffer.ends_with('\n') {
            buffer.push('\n');
        }
        buffer.push_str(text);
        self.set_buffer(buffer);
    }

    /// Menu for the flagged word at `span`
    pub fn menu_for(&self, span: ErrorSpan) -> Vec<MenuEntry> {
        let word = span.slice(&self.buffer);
        let suggestions = self.checker.suggest(word, self.limit);

        let mut entries: Vec<MenuEntry> = if suggestions.is_empty() {
            vec![MenuEntry::NoSuggestions]
        } else {
            suggestions.into_iter().map(MenuEntry::Replace).collect()
        };
        entries.push(MenuEntry::AddToDictionary);
        entries.push(MenuEntry::Cancel);
        entries
    }

    /// Carry out a menu choice for `span`
    pub fn choose(&mut self, span: ErrorSpan, entry: &MenuEntry) {
        match entry {
            MenuEntry::Replace(word) => {
                let corrected = apply_correction(&self.buffer, span, word);
                self.set_buffer(corrected);
            }
            MenuEntry::AddToDictionary => {
                let word = span.slice(&self.buffer).to_string();
                self.checker.add(&word);
                self.rescan();
            }
            MenuEntry::NoSuggestions | MenuEntry::Cancel => {}
        }
    }

    fn rescan(&mut self) {
        self.report = self.checker.scan_report(&self.buffer);
    }

    /// Drive the session from the terminal until the user quits
    pub fn run(&mut self) -> Result<()> {
        let theme = ColorfulTheme::default();
        let term = Term::stdout();
        let actions = ["Append text", "Correct a word", "Quit"];

        loop {
            term.clear_screen()?;
            println!(
                "{}",
                output::highlight(&self.buffer, &self.report.errors, self.colored)
            );
            println!();
            println!("{}", output::status_line(&self.report).dimmed());

            let action = Select::with_theme(&theme)
                .with_prompt("Action")
                .items(&actions)
                .default(0)
                .interact_opt()?;

            match action {
                Some(0) => {
                    let text: String = Input::with_theme(&theme)
                        .with_prompt("Text")
                        .allow_empty(true)
                        .interact_text()?;
                    self.append(&text);
                }
                Some(1) => self.correct_interactive(&theme)?,
                _ => {
                    let quit = Confirm::with_theme(&theme)
                        .with_prompt("Do you want to quit?")
                        .default(true)
                        .interact()?;
                    if quit {
                        return Ok(());
                    }
                }
            }
        }
    }

    fn correct_interactive(&mut self, theme: &ColorfulTheme) -> Result<()> {
        if self.report.errors.is_empty() {
            return Ok(());
        }

        let labels: Vec<String> = self
            .report
            .errors
            .iter()
            .map(|span| {
                let (line, column) = line_column(&self.buffer, span.start);
                format!("{}:{} {}", line, column, span.slice(&self.buffer))
            })
            .collect();

        let Some(picked) = Select::with_theme(theme)
            .with_prompt("Misspelled word")
            .items(&labels)
            .default(0)
            .interact_opt()?
        else {
            return Ok(());
        };

        let span = self.report.errors[picked];
        let menu = self.menu_for(span);
        let menu_labels: Vec<String> = menu.iter().map(MenuEntry::label).collect();

        if let Some(choice) = Select::with_theme(theme)
            .with_prompt(format!("Corrections for '{}'", span.slice(&self.buffer)))
            .items(&menu_labels)
            .default(0)
            .interact_opt()?
        {
            self.choose(span, &menu[choice]);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vocabulary;

    fn session(text: &str) -> Session {
        let checker = SpellChecker::new(Vocabulary::from_frequencies([
            ("hello", 100),
            ("world", 80),
        ]));
        Session::new(checker, text.to_string(), 7, false)
    }

    #[test]
    fn test_initial_scan() {
        let session = session("helo wrold");
        assert_eq!(session.report().errors.len(), 2);
        assert_eq!(session.report().words, 2);
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_replace_rescans() {
        let mut session = session("helo wrold");
        let span = session.report().errors[0];
        let menu = session.menu_for(span);
        assert_eq!(menu[0], MenuEntry::Replace("hello".to_string()));
        assert_eq!(menu.last(), Some(&MenuEntry::Cancel));

        session.choose(span, &menu[0]);
        assert_eq!(session.buffer(), "hello wrold");
        assert_eq!(
            session.report().errors,
            vec![ErrorSpan { start: 6, end: 11 }]
        );
        assert!(session.is_dirty());
    }

    #[test]
    fn test_add_to_dictionary_clears_all_occurrences() {
        let mut session = session("qzx hello Qzx");
        let span = session.report().errors[0];
        let menu = session.menu_for(span);
        assert_eq!(menu[0], MenuEntry::NoSuggestions);

        session.choose(span, &MenuEntry::AddToDictionary);
        assert!(session.report().errors.is_empty());
        assert_eq!(session.buffer(), "qzx hello Qzx");
    }

    #[test]
    fn test_append_adds_line() {
        let mut session = session("hello");
        session.append("wrold");
        assert_eq!(session.buffer(), "hello\nwrold");
        assert_eq!(session.report().errors, vec![ErrorSpan { start: 6, end: 11 }]);
    }
}
