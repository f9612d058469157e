use crate::error::{Error, Result};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Unicode decimal digits (Nd) only; fractions and numerals stay checked
    static ref DIGITS: Regex = Regex::new(r"^\d+$").unwrap();
}

/// Which tokens are exempt from the vocabulary check.
///
/// Everything is checked by default, numbers and single letters included.
#[derive(Debug, Clone, Default)]
pub struct CheckPolicy {
    pub skip_numbers: bool,
    pub skip_single_chars: bool,
    ignore_patterns: Vec<Regex>,
}

impl CheckPolicy {
    /// Build a policy, compiling `ignore_patterns` so each must match a whole token
    pub fn new<S: AsRef<str>>(
        skip_numbers: bool,
        skip_single_chars: bool,
        ignore_patterns: &[S],
    ) -> Result<Self> {
        let ignore_patterns = ignore_patterns
            .iter()
            .map(|pattern| {
                let pattern = pattern.as_ref();
                Regex::new(&format!("^(?:{})$", pattern)).map_err(|source| {
                    Error::InvalidPattern {
                        pattern: pattern.to_string(),
                        source,
                    }
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            skip_numbers,
            skip_single_chars,
            ignore_patterns,
        })
    }

    pub fn should_ignore(&self, word: &str) -> bool {
        if self.skip_single_chars && word.chars().count() == 1 {
            return true;
        }

        if self.skip_numbers && DIGITS.is_match(word) {
            return true;
        }

        self.ignore_patterns.iter().any(|p| p.is_match(word))
    }
}
