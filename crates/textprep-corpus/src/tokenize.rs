//! Line tokenization: word or character splitting

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors that can occur when selecting a tokenization mode
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenizeError {
    #[error("unknown tokenization mode {0:?}, expected \"word\" or \"char\"")]
    UnknownMode(String),
}

/// How a text line is split into tokens.
///
/// The vocabulary downstream is agnostic to this choice; it only ever sees
/// the resulting token strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TokenizeMode {
    /// Whitespace-separated words.
    #[default]
    Word,
    /// Single characters, one token per `char`.
    Char,
}

impl FromStr for TokenizeMode {
    type Err = TokenizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "word" => Ok(TokenizeMode::Word),
            "char" => Ok(TokenizeMode::Char),
            other => Err(TokenizeError::UnknownMode(other.to_string())),
        }
    }
}

impl fmt::Display for TokenizeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenizeMode::Word => write!(f, "word"),
            TokenizeMode::Char => write!(f, "char"),
        }
    }
}

/// Split each line into tokens under `mode`.
///
/// A line with no tokens yields an empty vector, keeping output lines
/// aligned with input lines. Tokenization itself cannot fail.
pub fn tokenize_lines(lines: &[String], mode: TokenizeMode) -> Vec<Vec<String>> {
    lines.iter().map(|line| tokenize_line(line, mode)).collect()
}

/// Split one line into tokens under `mode`.
pub fn tokenize_line(line: &str, mode: TokenizeMode) -> Vec<String> {
    match mode {
        TokenizeMode::Word => line.split_whitespace().map(str::to_string).collect(),
        TokenizeMode::Char => line.chars().map(String::from).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_str_round_trips() {
        for mode in [TokenizeMode::Word, TokenizeMode::Char] {
            let parsed: TokenizeMode = mode.to_string().parse().expect("canonical name parses");
            assert_eq!(parsed, mode);
        }
    }

    #[test]
    fn test_mode_from_str_rejects_unknown() {
        let err = "subword".parse::<TokenizeMode>().expect_err("must be rejected");
        assert_eq!(err, TokenizeError::UnknownMode("subword".to_string()));
    }
}
