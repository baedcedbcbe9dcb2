//! Token frequency counting

use std::collections::HashMap;

/// Occurrence counts per distinct token, kept in first-encounter order.
///
/// Backed by an ordered entry list plus a token -> position map, so iterating
/// the table visits tokens in the order they were first seen rather than in
/// hash order. Downstream index assignment sorts these entries by count with
/// a stable sort, so equal-count tokens keep this encounter order and
/// vocabulary indices stay reproducible across runs.
#[derive(Debug, Clone, Default)]
pub struct TokenCounts {
    /// `(token, count)` in first-encounter order.
    entries: Vec<(String, usize)>,
    /// Token -> position in `entries`.
    positions: HashMap<String, usize>,
}

impl TokenCounts {
    /// Count a flat stream of tokens.
    ///
    /// An empty stream yields an empty table; counting never fails.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut counts = Self::default();
        for token in tokens {
            counts.record(token.into());
        }
        counts
    }

    /// Count a stream of token lines, flattening exactly one level.
    ///
    /// A line with no tokens contributes nothing; an empty outer stream
    /// yields an empty table. Deeper nesting is not flattened; producing
    /// lines of tokens is the tokenizer's job.
    pub fn from_lines<I, L, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut counts = Self::default();
        for line in lines {
            for token in line {
                counts.record(token.into());
            }
        }
        counts
    }

    /// Record one occurrence of `token`.
    fn record(&mut self, token: String) {
        if let Some(&pos) = self.positions.get(&token) {
            self.entries[pos].1 += 1;
        } else {
            self.positions.insert(token.clone(), self.entries.len());
            self.entries.push((token, 1));
        }
    }

    /// Number of distinct tokens counted.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no tokens were counted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Count for `token`, or `None` if it never occurred.
    pub fn get(&self, token: &str) -> Option<usize> {
        self.positions.get(token).map(|&pos| self.entries[pos].1)
    }

    /// Iterate `(token, count)` pairs in first-encounter order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(token, count)| (token.as_str(), *count))
    }

    /// Consume the table into `(token, count)` pairs sorted by descending
    /// count. The sort is stable: equal counts keep first-encounter order.
    pub fn into_sorted(self) -> Vec<(String, usize)> {
        let mut entries = self.entries;
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }
}
