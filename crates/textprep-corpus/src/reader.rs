//! Corpus line reading and normalization

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use regex::Regex;

/// Runs of anything non-alphabetic collapse to a single space before
/// tokenization, so punctuation and digits never become tokens.
const STRIP_PATTERN: &str = "[^A-Za-z]+";

/// Reads raw text files into normalized lines.
///
/// Normalization keeps only alphabetic content: non-alphabetic runs become
/// single spaces, surrounding whitespace is trimmed, and everything is
/// lowercased. Lines that normalize to empty are kept so line positions stay
/// aligned with the source text.
#[derive(Debug, Clone)]
pub struct CorpusReader {
    strip_pattern: Regex,
}

impl CorpusReader {
    /// Create a reader with the normalization pattern compiled once.
    pub fn new() -> Result<Self> {
        let strip_pattern =
            Regex::new(STRIP_PATTERN).context("Failed to compile normalization regex")?;
        Ok(Self { strip_pattern })
    }

    /// Read the text file at `path` and return its normalized lines.
    ///
    /// # Errors
    /// Fails if the file cannot be read or is not valid UTF-8.
    pub fn read_lines(&self, path: &Path) -> Result<Vec<String>> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read corpus file: {:?}", path))?;
        Ok(text.lines().map(|line| self.normalize(line)).collect())
    }

    /// Normalize one line: non-alphabetic runs to single spaces, trim,
    /// lowercase.
    pub fn normalize(&self, line: &str) -> String {
        self.strip_pattern.replace_all(line, " ").trim().to_lowercase()
    }
}
