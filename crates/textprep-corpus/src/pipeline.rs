//! End-to-end corpus loading: lines -> tokens -> vocabulary -> indices

use std::path::Path;

use anyhow::{Context, Result};
use textprep_vocab::Vocab;

use crate::reader::CorpusReader;
use crate::tokenize::{tokenize_lines, TokenizeMode};

/// Options for [`load_corpus`].
#[derive(Debug, Clone, Default)]
pub struct PipelineOptions {
    /// How lines are split into tokens.
    pub mode: TokenizeMode,
    /// Minimum corpus count for a token to receive its own index.
    pub min_freq: usize,
    /// Reserved tokens placed right after the unknown token.
    pub reserved_tokens: Vec<String>,
    /// Keep only this many leading tokens of the flattened corpus.
    /// `None` keeps everything; `Some(0)` yields an empty corpus.
    pub max_tokens: Option<usize>,
}

/// An encoded corpus: flattened token indices plus the vocabulary that
/// produced them.
#[derive(Debug, Clone)]
pub struct LoadedCorpus {
    /// Token indices for the whole corpus, lines flattened in order.
    pub corpus: Vec<u32>,
    /// Vocabulary the indices refer to.
    pub vocab: Vocab,
}

/// Read the text at `path`, tokenize it, build a vocabulary over it, and
/// encode every token to its index.
///
/// Corpus lines are not necessarily sentences or paragraphs, so the encoded
/// lines are flattened into a single index sequence. With
/// `options.max_tokens` set, only that prefix of the sequence is kept; the
/// vocabulary is still built over the full text.
///
/// # Errors
/// Fails only on I/O (unreadable file) or regex-compilation problems;
/// tokenization and vocabulary construction cannot fail.
pub fn load_corpus(path: &Path, options: &PipelineOptions) -> Result<LoadedCorpus> {
    let reader = CorpusReader::new()?;
    let lines = reader
        .read_lines(path)
        .with_context(|| format!("Failed to load corpus from {:?}", path))?;

    let tokens = tokenize_lines(&lines, options.mode);

    let vocab = Vocab::builder()
        .min_freq(options.min_freq)
        .reserved_tokens(options.reserved_tokens.iter().cloned())
        .build_from_lines(&tokens);

    let mut corpus: Vec<u32> = tokens
        .iter()
        .flat_map(|line| line.iter().map(|token| vocab.index_of(token)))
        .collect();

    if let Some(max_tokens) = options.max_tokens {
        corpus.truncate(max_tokens);
    }

    Ok(LoadedCorpus { corpus, vocab })
}
