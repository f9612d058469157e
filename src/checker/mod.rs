pub mod corpus;
pub mod policy;
pub mod suggestions;
pub mod tokenizer;
pub mod vocabulary;

use crate::error::Result;
use crate::{Config, ErrorSpan, ScanReport};
use policy::CheckPolicy;
use suggestions::{Suggestion, DEFAULT_MAX_DISTANCE};
use tokenizer::{byte_index, tokenize};
use vocabulary::Vocabulary;

/// Owns one editing session's vocabulary and answers the host's
/// scan / suggest / add requests.
///
/// `scan` is a full recomputation every time; nothing from earlier scans is
/// kept, so the result depends only on the text and the current vocabulary.
#[derive(Debug, Clone)]
pub struct SpellChecker {
    vocabulary: Vocabulary,
    policy: CheckPolicy,
    max_distance: usize,
}

impl SpellChecker {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self {
            vocabulary,
            policy: CheckPolicy::default(),
            max_distance: DEFAULT_MAX_DISTANCE,
        }
    }

    /// Build a checker from configuration, loading the configured corpus or
    /// falling back to the embedded word list.
    pub fn from_config(config: &Config) -> Result<Self> {
        let vocabulary = match &config.corpus {
            Some(path) => Vocabulary::load_from_path(path)?,
            None => Vocabulary::embedded(),
        };

        Ok(Self::new(vocabulary)
            .with_policy(config.policy()?)
            .with_max_distance(config.max_edit_distance))
    }

    pub fn with_policy(mut self, policy: CheckPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_max_distance(mut self, max_distance: usize) -> Self {
        self.max_distance = max_distance;
        self
    }

    /// Spans of every unknown word in `text`, in order of appearance
    pub fn scan(&self, text: &str) -> Vec<ErrorSpan> {
        self.scan_report(text).errors
    }

    /// Like [`scan`](Self::scan) but also counts the words looked at
    pub fn scan_report(&self, text: &str) -> ScanReport {
        let tokens = tokenize(text);
        let words = tokens.len();

        let errors: Vec<ErrorSpan> = tokens
            .into_iter()
            .filter(|token| !self.policy.should_ignore(&token.text))
            .filter(|token| !self.vocabulary.contains(&token.normalized))
            .map(|token| ErrorSpan {
                start: token.start,
                end: token.end,
            })
            .collect();

        tracing::debug!(words, errors = errors.len(), "scan complete");

        ScanReport { words, errors }
    }

    /// Up to `limit` corrections for `word`, best first
    pub fn suggest(&self, word: &str, limit: usize) -> Vec<String> {
        self.suggestions(word, limit)
            .into_iter()
            .map(|s| s.word)
            .collect()
    }

    /// Ranked corrections including their distance and frequency
    pub fn suggestions(&self, word: &str, limit: usize) -> Vec<Suggestion> {
        suggestions::generate(word, &self.vocabulary, limit, self.max_distance)
    }

    pub fn correction(&self, word: &str) -> Option<String> {
        suggestions::correction(word, &self.vocabulary, self.max_distance)
    }

    /// Accept `word` for the rest of the session
    pub fn add(&mut self, word: &str) {
        self.vocabulary.add(word);
        tracing::debug!(word, "added to session vocabulary");
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn vocabulary_mut(&mut self) -> &mut Vocabulary {
        &mut self.vocabulary
    }
}

/// Replace the characters covered by `span` with `replacement`.
///
/// Offsets beyond the end of `text` are clamped, so a stale span never panics.
pub fn apply_correction(text: &str, span: ErrorSpan, replacement: &str) -> String {
    let start = byte_index(text, span.start);
    let end = byte_index(text, span.end.max(span.start));

    let mut corrected = String::with_capacity(text.len() + replacement.len());
    corrected.push_str(&text[..start]);
    corrected.push_str(replacement);
    corrected.push_str(&text[end..]);
    corrected
}
