//! Reading reference word-frequency corpora.
//!
//! Three on-disk shapes are understood, picked by file name:
//! a JSON object of `word -> count`, the same JSON gzip-compressed,
//! and a plain list with one `word [count]` entry per line.

use crate::error::{Error, Result};
use flate2::read::GzDecoder;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

const EMBEDDED_EN: &str = include_str!("../../data/en_common.txt");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorpusFormat {
    Json,
    GzipJson,
    PlainText,
}

impl CorpusFormat {
    /// Detect corpus format from the file name
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("")
            .to_lowercase();

        if name.ends_with(".gz") {
            CorpusFormat::GzipJson
        } else if name.ends_with(".json") {
            CorpusFormat::Json
        } else {
            CorpusFormat::PlainText
        }
    }
}

/// Read every `(word, frequency)` entry from a corpus file.
pub fn read(path: &Path) -> Result<Vec<(String, u64)>> {
    let io_err = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_err)?;
    let mut reader = BufReader::new(file);

    let entries = match CorpusFormat::from_path(path) {
        CorpusFormat::Json => parse_json(reader, path)?,
        CorpusFormat::GzipJson => parse_json(GzDecoder::new(reader), path)?,
        CorpusFormat::PlainText => {
            let mut content = String::new();
            reader.read_to_string(&mut content).map_err(io_err)?;
            parse_plain(&content, path)?
        }
    };

    tracing::debug!(
        path = %path.display(),
        entries = entries.len(),
        "read reference corpus"
    );

    Ok(entries)
}

fn parse_json<R: Read>(reader: R, path: &Path) -> Result<Vec<(String, u64)>> {
    let map: HashMap<String, u64> =
        serde_json::from_reader(reader).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(map.into_iter().collect())
}

/// Parse the plain list format. `path` is only used for error reporting.
pub fn parse_plain(content: &str, path: &Path) -> Result<Vec<(String, u64)>> {
    let mut entries = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut fields = line.split_whitespace();
        let word = fields.next().unwrap_or_default();
        let count = fields.next();

        if fields.next().is_some() {
            return Err(Error::MalformedLine {
                path: path.to_path_buf(),
                line: idx + 1,
                content: line.to_string(),
            });
        }

        let frequency = match count {
            None => 1,
            Some(raw) => raw.parse::<u64>().unwrap_or_else(|_| {
                tracing::warn!(
                    path = %path.display(),
                    line = idx + 1,
                    count = raw,
                    "non-numeric frequency, using 1"
                );
                1
            }),
        };

        entries.push((word.to_string(), frequency));
    }

    Ok(entries)
}

/// Entries of the English word list compiled into the binary.
pub fn embedded() -> Vec<(String, u64)> {
    EMBEDDED_EN
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let mut fields = line.split_whitespace();
            let word = fields.next()?;
            let frequency = fields.next().and_then(|c| c.parse().ok()).unwrap_or(1);
            Some((word.to_string(), frequency))
        })
        .collect()
}
