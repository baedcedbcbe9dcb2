//! Vocabulary management
//!
//! Maps string tokens to stable integer indices and back. Indices are
//! assigned by descending corpus frequency, after the unknown symbol and any
//! caller-supplied reserved tokens, so frequent tokens get small indices.

use std::collections::HashMap;
use thiserror::Error;

use crate::counts::TokenCounts;

/// Index of the unknown token. Forward lookups of tokens that are absent
/// from or pruned out of the vocabulary resolve to this index.
pub const UNK_INDEX: u32 = 0;

/// The unknown-token symbol, always present at [`UNK_INDEX`].
pub const UNK_TOKEN: &str = "<unk>";

/// Errors that can occur during vocabulary lookups
///
/// Only the reverse direction (index -> token) can fail: indices are assumed
/// to originate from the same vocabulary, so an out-of-range index is a
/// caller bug and is reported rather than clamped. The forward direction
/// (token -> index) never fails; unknown tokens fall back to [`UNK_INDEX`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VocabError {
    #[error("index {index} out of range for vocabulary of {len} entries")]
    IndexOutOfRange { index: u32, len: usize },
}

/// Frequency-ranked vocabulary with bidirectional token/index mapping
///
/// Maintains:
/// - index -> token (ordered list, position = assigned index)
/// - token -> index (for encoding)
/// - the sorted `(token, count)` pairs the assignment was derived from
///
/// Index 0 is always [`UNK_TOKEN`], even when the corpus is empty. Reserved
/// tokens follow at indices `1..`, in the order supplied. Corpus tokens fill
/// the remaining indices in descending count order; equal counts keep the
/// counting table's first-encounter order.
///
/// A `Vocab` is immutable once built and can be shared freely across threads
/// for concurrent lookups.
#[derive(Debug, Clone)]
pub struct Vocab {
    /// Token at each index; position = index.
    index_to_token: Vec<String>,
    /// Inverse of `index_to_token`; populated in lockstep by the builder.
    token_to_index: HashMap<String, u32>,
    /// Sorted `(token, count)` pairs used for index assignment.
    token_freqs: Vec<(String, usize)>,
}

impl Vocab {
    /// Start building a vocabulary. See [`VocabBuilder`].
    pub fn builder() -> VocabBuilder {
        VocabBuilder::default()
    }

    /// Build with default settings (no frequency pruning, no reserved
    /// tokens) from a flat token stream.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::builder().build_from_tokens(tokens)
    }

    /// Build with default settings from lines of tokens.
    pub fn from_lines<I, L, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::builder().build_from_lines(lines)
    }

    /// Number of entries, including the unknown and reserved tokens.
    /// At least 1, since [`UNK_TOKEN`] is always present.
    pub fn len(&self) -> usize {
        self.index_to_token.len()
    }

    /// Always `false` (the unknown token is always present); provided for
    /// API completeness.
    pub fn is_empty(&self) -> bool {
        self.index_to_token.is_empty()
    }

    /// Index for `token`, or [`UNK_INDEX`] if the token is not in the
    /// vocabulary.
    ///
    /// This lookup never fails: absent and frequency-pruned tokens resolve
    /// to the unknown index, which is how open-vocabulary input is handled.
    pub fn index_of(&self, token: &str) -> u32 {
        self.token_to_index.get(token).copied().unwrap_or(UNK_INDEX)
    }

    /// Element-wise [`index_of`](Self::index_of) over one sequence of
    /// tokens. Exactly one level: nested line structure is flattened by the
    /// caller, not here.
    pub fn indices_of<I>(&self, tokens: I) -> Vec<u32>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        tokens.into_iter().map(|token| self.index_of(token.as_ref())).collect()
    }

    /// Token at `index`.
    ///
    /// # Errors
    /// Returns [`VocabError::IndexOutOfRange`] if `index >= len()`. Unlike
    /// the forward direction there is no fallback: indices are expected to
    /// come from this same vocabulary.
    pub fn token_at(&self, index: u32) -> Result<&str, VocabError> {
        self.index_to_token
            .get(index as usize)
            .map(String::as_str)
            .ok_or(VocabError::IndexOutOfRange {
                index,
                len: self.index_to_token.len(),
            })
    }

    /// Element-wise [`token_at`](Self::token_at); fails on the first
    /// out-of-range index.
    ///
    /// # Errors
    /// Returns [`VocabError::IndexOutOfRange`] for the first invalid index.
    pub fn tokens_at(&self, indices: &[u32]) -> Result<Vec<&str>, VocabError> {
        indices.iter().map(|&index| self.token_at(index)).collect()
    }

    /// Returns `true` if `token` has its own index (reserved tokens
    /// included).
    pub fn contains(&self, token: &str) -> bool {
        self.token_to_index.contains_key(token)
    }

    /// The `(token, count)` pairs index assignment was derived from, in
    /// descending count order. Reserved tokens and [`UNK_TOKEN`] do not
    /// appear here unless they occurred in the corpus.
    pub fn token_freqs(&self) -> &[(String, usize)] {
        &self.token_freqs
    }

    /// Iterate tokens in index order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.index_to_token.iter().map(String::as_str)
    }
}

/// Builder for [`Vocab`]
///
/// Owns both sides of the mapping while indices are assigned and freezes
/// them into an immutable [`Vocab`]. Every append registers the reverse
/// mapping immediately, so the two sides cannot diverge.
#[derive(Debug, Clone, Default)]
pub struct VocabBuilder {
    min_freq: usize,
    reserved_tokens: Vec<String>,
}

impl VocabBuilder {
    /// Exclude corpus tokens occurring fewer than `min_freq` times.
    /// Defaults to 0 (keep everything).
    pub fn min_freq(mut self, min_freq: usize) -> Self {
        self.min_freq = min_freq;
        self
    }

    /// Reserve tokens (e.g. `<pad>`, `<bos>`, `<eos>`) at the indices
    /// immediately after [`UNK_INDEX`], in the order given, regardless of
    /// corpus frequency. A reserved token repeated in this list, or equal to
    /// [`UNK_TOKEN`], is skipped on insertion since it is already present.
    pub fn reserved_tokens<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reserved_tokens = tokens.into_iter().map(Into::into).collect();
        self
    }

    /// Count a flat token stream and build. Construction never fails; an
    /// empty stream yields a vocabulary of just the unknown and reserved
    /// tokens.
    pub fn build_from_tokens<I, S>(self, tokens: I) -> Vocab
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.build_from_counts(TokenCounts::from_tokens(tokens))
    }

    /// Count lines of tokens (flattened one level) and build.
    pub fn build_from_lines<I, L, S>(self, lines: I) -> Vocab
    where
        I: IntoIterator<Item = L>,
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.build_from_counts(TokenCounts::from_lines(lines))
    }

    /// Assign indices from an existing frequency table and freeze.
    ///
    /// Entries are taken in descending count order (stable ties, see
    /// [`TokenCounts::into_sorted`]). The walk stops at the first entry
    /// below `min_freq`; everything after it in the sorted order has a count
    /// at most as large, so nothing qualifying is skipped.
    pub fn build_from_counts(self, counts: TokenCounts) -> Vocab {
        let token_freqs = counts.into_sorted();

        let mut index_to_token: Vec<String> =
            Vec::with_capacity(1 + self.reserved_tokens.len() + token_freqs.len());
        let mut token_to_index: HashMap<String, u32> = HashMap::new();

        for token in std::iter::once(UNK_TOKEN.to_string()).chain(self.reserved_tokens) {
            append_entry(&mut index_to_token, &mut token_to_index, token);
        }

        for (token, count) in &token_freqs {
            if *count < self.min_freq {
                break;
            }
            if !token_to_index.contains_key(token) {
                append_entry(&mut index_to_token, &mut token_to_index, token.clone());
            }
        }

        Vocab {
            index_to_token,
            token_to_index,
            token_freqs,
        }
    }
}

/// Append `token` to the index list and register its reverse mapping, unless
/// it already has an index. Keeps both sides in lockstep.
fn append_entry(
    index_to_token: &mut Vec<String>,
    token_to_index: &mut HashMap<String, u32>,
    token: String,
) {
    if token_to_index.contains_key(&token) {
        return;
    }
    let index = index_to_token.len() as u32;
    token_to_index.insert(token.clone(), index);
    index_to_token.push(token);
}
