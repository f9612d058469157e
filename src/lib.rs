//! Spell-analysis engine for interactive editors.
//!
//! A [`SpellChecker`] owns one session's [`Vocabulary`]. The host calls
//! [`SpellChecker::scan`] whenever its buffer changes, [`SpellChecker::suggest`]
//! when the user asks for corrections, and [`SpellChecker::add`] for
//! "add to dictionary".

pub mod checker;
pub mod cli;
pub mod config;
pub mod error;

pub use checker::policy::CheckPolicy;
pub use checker::suggestions::{edit_distance, Suggestion};
pub use checker::tokenizer::{tokenize, word_at, WordOccurrence};
pub use checker::vocabulary::{Vocabulary, SESSION_FREQUENCY};
pub use checker::{apply_correction, SpellChecker};
pub use config::Config;
pub use error::{Error, Result};

/// Character range of a word that is not in the vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ErrorSpan {
    pub start: usize,
    pub end: usize,
}

impl ErrorSpan {
    /// The slice of `text` this span covers, clamped to the text
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        let start = checker::tokenizer::byte_index(text, self.start);
        let end = checker::tokenizer::byte_index(text, self.end.max(self.start));
        &text[start..end]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    pub words: usize,
    pub errors: Vec<ErrorSpan>,
}
