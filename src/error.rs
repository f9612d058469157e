use std::path::PathBuf;

/// Failures that can occur while building a [`crate::SpellChecker`].
///
/// Scanning and suggesting never fail; everything here happens at
/// construction time.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read corpus {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse corpus {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed corpus entry at {path}:{line}: {content:?}")]
    MalformedLine {
        path: PathBuf,
        line: usize,
        content: String,
    },

    #[error("corpus {path} contains no words")]
    EmptyCorpus { path: PathBuf },

    #[error("invalid ignore pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
