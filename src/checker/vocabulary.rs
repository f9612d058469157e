use crate::checker::corpus;
use crate::error::{Error, Result};
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Frequency recorded for words added during a session.
pub const SESSION_FREQUENCY: u64 = u64::MAX;

/// Known words with their corpus frequencies plus session additions.
///
/// Keys are always stored lower-cased; every lookup folds case first.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    frequencies: HashMap<String, u64>,
    session: HashSet<String>,
    by_length: HashMap<usize, Vec<String>>,
    total: u64,
}

impl Vocabulary {
    /// Build a vocabulary from `(word, frequency)` pairs.
    ///
    /// Entries that fold to the same lower-cased key have their counts summed.
    pub fn from_frequencies<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: AsRef<str>,
    {
        let mut vocab = Self::default();

        for (word, count) in entries {
            let key = normalize(word.as_ref());
            if key.is_empty() {
                continue;
            }
            vocab.total = vocab.total.saturating_add(count);
            match vocab.frequencies.get_mut(&key) {
                Some(existing) => *existing = existing.saturating_add(count),
                None => vocab.insert_new(key, count),
            }
        }

        vocab
    }

    /// Load a reference corpus from disk
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let vocab = Self::from_frequencies(corpus::read(path)?);

        if vocab.is_empty() {
            return Err(Error::EmptyCorpus {
                path: path.to_path_buf(),
            });
        }

        tracing::debug!(path = %path.display(), words = vocab.len(), "vocabulary loaded");
        Ok(vocab)
    }

    /// Vocabulary built from the word list compiled into the crate
    pub fn embedded() -> Self {
        Self::from_frequencies(corpus::embedded())
    }

    /// Case-insensitive membership over corpus words and session additions
    pub fn contains(&self, word: &str) -> bool {
        self.frequencies.contains_key(&normalize(word))
    }

    /// Add a word for the rest of this session.
    ///
    /// Already-known words are left untouched.
    pub fn add(&mut self, word: &str) {
        let key = normalize(word.trim());
        if key.is_empty() || self.frequencies.contains_key(&key) {
            return;
        }
        self.session.insert(key.clone());
        self.insert_new(key, SESSION_FREQUENCY);
    }

    pub fn frequency(&self, word: &str) -> u64 {
        self.frequencies.get(&normalize(word)).copied().unwrap_or(0)
    }

    pub fn is_session_addition(&self, word: &str) -> bool {
        self.session.contains(&normalize(word))
    }

    /// Relative corpus frequency. Session additions carry no corpus weight.
    pub fn probability(&self, word: &str) -> f64 {
        if self.total == 0 || self.is_session_addition(word) {
            return 0.0;
        }
        self.frequency(word) as f64 / self.total as f64
    }

    /// The subset of `words` that is known, in input order
    pub fn known<'a, I>(&self, words: I) -> Vec<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        words.into_iter().filter(|w| self.contains(w)).collect()
    }

    /// The subset of `words` that is unknown, in input order
    pub fn unknown<'a, I>(&self, words: I) -> Vec<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        words.into_iter().filter(|w| !self.contains(w)).collect()
    }

    /// Words whose length in characters is exactly `len`
    pub fn words_of_length(&self, len: usize) -> &[String] {
        self.by_length.get(&len).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    fn insert_new(&mut self, key: String, frequency: u64) {
        self.by_length
            .entry(key.chars().count())
            .or_default()
            .push(key.clone());
        self.frequencies.insert(key, frequency);
    }
}

pub(crate) fn normalize(word: &str) -> String {
    word.to_lowercase()
}
