use crate::checker::vocabulary::{normalize, Vocabulary};
use std::cmp::Reverse;

/// Default edit budget for the correction search
pub const DEFAULT_MAX_DISTANCE: usize = 2;

/// A ranked correction candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub word: String,
    pub distance: usize,
    pub frequency: u64,
}

/// Generate spelling suggestions for an unknown word.
///
/// Only vocabulary words within `max_distance` edits are returned, ordered by
/// distance, then corpus words before session additions, then frequency
/// (highest first), then alphabetically.
pub fn generate(
    word: &str,
    vocabulary: &Vocabulary,
    limit: usize,
    max_distance: usize,
) -> Vec<Suggestion> {
    if limit == 0 {
        return Vec::new();
    }

    let target: Vec<char> = normalize(word).chars().collect();
    if target.is_empty() {
        return Vec::new();
    }

    let shortest = target.len().saturating_sub(max_distance).max(1);
    let longest = target.len() + max_distance;

    // Edit distance <= k implies length difference <= k
    let mut ranked: Vec<(Suggestion, bool)> = Vec::new();
    for len in shortest..=longest {
        for candidate in vocabulary.words_of_length(len) {
            let candidate_chars: Vec<char> = candidate.chars().collect();
            if let Some(distance) = bounded_distance(&target, &candidate_chars, max_distance) {
                ranked.push((
                    Suggestion {
                        word: candidate.clone(),
                        distance,
                        frequency: vocabulary.frequency(candidate),
                    },
                    vocabulary.is_session_addition(candidate),
                ));
            }
        }
    }

    ranked.sort_by(|(a, a_session), (b, b_session)| {
        (a.distance, *a_session, Reverse(a.frequency), &a.word).cmp(&(
            b.distance,
            *b_session,
            Reverse(b.frequency),
            &b.word,
        ))
    });
    ranked.truncate(limit);

    tracing::debug!(word, candidates = ranked.len(), "ranked suggestions");

    ranked.into_iter().map(|(suggestion, _)| suggestion).collect()
}

/// The single best correction, if anything lies within the edit budget
pub fn correction(word: &str, vocabulary: &Vocabulary, max_distance: usize) -> Option<String> {
    generate(word, vocabulary, 1, max_distance)
        .into_iter()
        .next()
        .map(|s| s.word)
}

/// Optimal string alignment distance between two strings.
///
/// Insertions, deletions, substitutions and adjacent transpositions each
/// cost one edit.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    bounded_distance(&a, &b, usize::MAX).unwrap_or(usize::MAX)
}

/// Distance between `a` and `b`, or `None` once it is known to exceed `max`.
fn bounded_distance(a: &[char], b: &[char], max: usize) -> Option<usize> {
    if a.len().abs_diff(b.len()) > max {
        return None;
    }
    if a.is_empty() || b.is_empty() {
        return Some(a.len().max(b.len()));
    }

    // Row minima never decrease, so a row entirely over budget ends the search
    let width = b.len() + 1;
    let mut before_prev: Vec<usize> = vec![0; width];
    let mut prev: Vec<usize> = (0..width).collect();
    let mut current: Vec<usize> = vec![0; width];

    for i in 1..=a.len() {
        current[0] = i;
        let mut row_min = current[0];

        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            let mut value = (prev[j] + 1) // deletion
                .min(current[j - 1] + 1) // insertion
                .min(prev[j - 1] + cost); // substitution

            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                value = value.min(before_prev[j - 2] + 1); // transposition
            }

            current[j] = value;
            row_min = row_min.min(value);
        }

        if row_min > max {
            return None;
        }

        std::mem::swap(&mut before_prev, &mut prev);
        std::mem::swap(&mut prev, &mut current);
    }

    let distance = prev[b.len()];
    (distance <= max).then_some(distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab() -> Vocabulary {
        Vocabulary::from_frequencies([
            ("hello", 100),
            ("world", 80),
            ("help", 60),
            ("hell", 40),
            ("yellow", 30),
            ("held", 90),
        ])
    }

    fn words(suggestions: &[Suggestion]) -> Vec<&str> {
        suggestions.iter().map(|s| s.word.as_str()).collect()
    }

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance("hello", "hello"), 0);
        assert_eq!(edit_distance("hello", "hallo"), 1);
        assert_eq!(edit_distance("hello", "helo"), 1);
        assert_eq!(edit_distance("hello", "world"), 4);
        assert_eq!(edit_distance("", "abc"), 3);
    }

    #[test]
    fn test_transposition_is_one_edit() {
        assert_eq!(edit_distance("wrold", "world"), 1);
        assert_eq!(edit_distance("teh", "the"), 1);
    }

    #[test]
    fn test_bounded_distance_gives_up() {
        let a: Vec<char> = "abcdef".chars().collect();
        let b: Vec<char> = "uvwxyz".chars().collect();
        assert_eq!(bounded_distance(&a, &b, 2), None);
        assert_eq!(bounded_distance(&a, &a, 0), Some(0));
    }

    #[test]
    fn test_closest_ranked_first() {
        let suggestions = generate("helo", &vocab(), 7, DEFAULT_MAX_DISTANCE);
        assert_eq!(suggestions[0].word, "hello");
        assert_eq!(suggestions[0].distance, 1);
    }

    #[test]
    fn test_distance_then_frequency_order() {
        let suggestions = generate("helo", &vocab(), 7, DEFAULT_MAX_DISTANCE);
        // all at distance 1, so frequency decides; yellow is three edits away
        assert_eq!(words(&suggestions), vec!["hello", "held", "help", "hell"]);
        assert!(suggestions.windows(2).all(|w| w[0].distance <= w[1].distance));
    }

    #[test]
    fn test_mixed_distances_non_decreasing() {
        let suggestions = generate("hellow", &vocab(), 7, DEFAULT_MAX_DISTANCE);
        assert_eq!(words(&suggestions), vec!["hello", "yellow", "hell"]);
        assert_eq!(suggestions[2].distance, 2);
        assert!(suggestions.windows(2).all(|w| w[0].distance <= w[1].distance));
    }

    #[test]
    fn test_limit_is_respected() {
        assert_eq!(generate("helo", &vocab(), 2, DEFAULT_MAX_DISTANCE).len(), 2);
        assert!(generate("helo", &vocab(), 0, DEFAULT_MAX_DISTANCE).is_empty());
    }

    #[test]
    fn test_no_candidates_within_budget() {
        assert!(generate("qzxjvkp", &vocab(), 7, DEFAULT_MAX_DISTANCE).is_empty());
        assert_eq!(correction("qzxjvkp", &vocab(), DEFAULT_MAX_DISTANCE), None);
    }

    #[test]
    fn test_input_case_is_ignored() {
        let suggestions = generate("HELO", &vocab(), 1, DEFAULT_MAX_DISTANCE);
        assert_eq!(words(&suggestions), vec!["hello"]);
    }

    #[test]
    fn test_session_additions_rank_after_corpus_words() {
        let mut vocab = vocab();
        vocab.add("hela");
        let suggestions = generate("helo", &vocab, 7, DEFAULT_MAX_DISTANCE);
        let distance_one = words(&suggestions[..5]);
        assert_eq!(distance_one.last(), Some(&"hela"));
    }

    #[test]
    fn test_correction() {
        assert_eq!(
            correction("wrold", &vocab(), DEFAULT_MAX_DISTANCE),
            Some("world".to_string())
        );
    }
}
