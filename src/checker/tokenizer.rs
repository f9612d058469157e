use crate::checker::vocabulary::normalize;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Letters, digits and connector punctuation, Unicode-aware
    static ref WORD: Regex = Regex::new(r"\w+").unwrap();
}

/// One token of the scanned text. Offsets count characters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordOccurrence {
    pub text: String,
    pub start: usize,
    pub end: usize,
    pub normalized: String,
}

/// Split `text` into maximal runs of word characters.
pub fn tokenize(text: &str) -> Vec<WordOccurrence> {
    let mut words = Vec::new();
    let mut byte_cursor = 0;
    let mut char_cursor = 0;

    for m in WORD.find_iter(text) {
        char_cursor += text[byte_cursor..m.start()].chars().count();
        let start = char_cursor;
        let len = m.as_str().chars().count();

        words.push(WordOccurrence {
            text: m.as_str().to_string(),
            start,
            end: start + len,
            normalized: normalize(m.as_str()),
        });

        char_cursor += len;
        byte_cursor = m.end();
    }

    words
}

/// The token covering character `offset`, if the offset falls inside a word
pub fn word_at(text: &str, offset: usize) -> Option<WordOccurrence> {
    tokenize(text)
        .into_iter()
        .find(|w| w.start <= offset && offset < w.end)
}

/// Byte index of the `offset`-th character, clamped to the end of `text`
pub(crate) fn byte_index(text: &str, offset: usize) -> usize {
    text.char_indices()
        .nth(offset)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(text: &str) -> Vec<(usize, usize)> {
        tokenize(text).iter().map(|w| (w.start, w.end)).collect()
    }

    #[test]
    fn test_punctuation_is_excluded() {
        let words = tokenize("Hello, world! This is a test.");
        let texts: Vec<_> = words.iter().map(|w| w.text.as_str()).collect();
        assert_eq!(texts, vec!["Hello", "world", "This", "is", "a", "test"]);
        assert_eq!(words[0].normalized, "hello");
        assert_eq!(spans("hello, world!"), vec![(0, 5), (7, 12)]);
    }

    #[test]
    fn test_digits_and_underscore_are_word_chars() {
        let words = tokenize("snake_case 42 x2");
        let texts: Vec<_> = words.iter().map(|w| w.text.as_str()).collect();
        assert_eq!(texts, vec!["snake_case", "42", "x2"]);
    }

    #[test]
    fn test_apostrophe_splits_tokens() {
        let texts: Vec<_> = tokenize("don't").into_iter().map(|w| w.text).collect();
        assert_eq!(texts, vec!["don", "t"]);
    }

    #[test]
    fn test_offsets_are_characters() {
        assert_eq!(spans("café wrold"), vec![(0, 4), (5, 10)]);
        assert_eq!(spans("—naïve—"), vec![(1, 6)]);
    }

    #[test]
    fn test_empty_and_blank_text() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  \n\t ...").is_empty());
    }

    #[test]
    fn test_multiline() {
        assert_eq!(spans("one\ntwo"), vec![(0, 3), (4, 7)]);
    }

    #[test]
    fn test_word_at() {
        let text = "say helo, wrold";
        assert_eq!(word_at(text, 5).map(|w| w.text), Some("helo".to_string()));
        assert_eq!(word_at(text, 4).map(|w| (w.start, w.end)), Some((4, 8)));
        assert_eq!(word_at(text, 8), None);
        assert_eq!(word_at(text, 100), None);
    }

    #[test]
    fn test_byte_index() {
        assert_eq!(byte_index("café wrold", 5), 6);
        assert_eq!(byte_index("abc", 10), 3);
    }
}
