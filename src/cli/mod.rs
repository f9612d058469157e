//! Terminal host for the engine: report output and the interactive session.

pub mod output;
pub mod session;

use crate::{ErrorSpan, SpellChecker};

/// A flagged word resolved to a position the user can find
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub span: ErrorSpan,
    pub word: String,
    pub line: usize,
    pub column: usize,
    pub context: String,
    pub suggestions: Vec<String>,
}

/// Scan `text` and attach up to `limit` suggestions to every flagged word
pub fn findings(checker: &SpellChecker, text: &str, limit: usize) -> Vec<Finding> {
    checker
        .scan(text)
        .into_iter()
        .map(|span| {
            let word = span.slice(text).to_string();
            let (line, column) = line_column(text, span.start);
            Finding {
                span,
                suggestions: checker.suggest(&word, limit),
                context: line_text(text, line).to_string(),
                word,
                line,
                column,
            }
        })
        .collect()
}

/// 1-based line and column of a character offset
pub fn line_column(text: &str, offset: usize) -> (usize, usize) {
    let mut line = 1;
    let mut column = 1;
    for ch in text.chars().take(offset) {
        if ch == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }
    (line, column)
}

fn line_text(text: &str, line: usize) -> &str {
    text.lines().nth(line - 1).unwrap_or("").trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vocabulary;

    #[test]
    fn test_line_column() {
        let text = "first line\nsecond helo";
        assert_eq!(line_column(text, 0), (1, 1));
        assert_eq!(line_column(text, 18), (2, 8));
    }

    #[test]
    fn test_findings() {
        let checker = SpellChecker::new(Vocabulary::from_frequencies([
            ("hello", 100),
            ("world", 80),
            ("say", 10),
        ]));
        let found = findings(&checker, "say hello\nhelo wrold", 3);

        assert_eq!(found.len(), 2);
        assert_eq!(found[0].word, "helo");
        assert_eq!((found[0].line, found[0].column), (2, 1));
        assert_eq!(found[0].context, "helo wrold");
        assert_eq!(found[0].suggestions, vec!["hello".to_string()]);
        assert_eq!(found[1].word, "wrold");
        assert_eq!(found[1].span, ErrorSpan { start: 15, end: 20 });
    }
}
