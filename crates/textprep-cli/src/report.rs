//! Report generation for corpus preprocessing runs

use std::path::Path;

use serde::{Deserialize, Serialize};
use textprep_corpus::{LoadedCorpus, TokenizeMode};

/// One row of the top-frequency table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenEntry {
    /// The token text
    pub token: String,
    /// Corpus occurrence count
    pub count: usize,
    /// Assigned vocabulary index (0 when pruned below the frequency floor)
    pub index: u32,
}

/// Summary of a corpus preprocessing run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusReport {
    /// Corpus file the run was executed on
    pub input: String,
    /// Tokenization mode ("word" or "char")
    pub mode: String,
    /// Number of lines read from the corpus file
    pub lines: usize,
    /// Length of the encoded corpus after any prefix truncation
    pub corpus_tokens: usize,
    /// Number of distinct tokens observed, before frequency pruning
    pub distinct_tokens: usize,
    /// Vocabulary entries, including the unknown and reserved tokens
    pub vocab_size: usize,
    /// Frequency floor the vocabulary was built with
    pub min_freq: usize,
    /// Most frequent tokens, highest count first
    pub top_tokens: Vec<TokenEntry>,
    /// Timestamp of the run
    pub timestamp: String,
}

impl CorpusReport {
    /// Assemble a report from a loaded corpus
    ///
    /// # Arguments
    /// * `input` - Corpus file the pipeline ran on
    /// * `mode` - Tokenization mode used
    /// * `lines` - Number of lines read from the file
    /// * `loaded` - Encoded corpus and its vocabulary
    /// * `min_freq` - Frequency floor used during construction
    /// * `top` - Number of top-frequency rows to include
    pub fn generate(
        input: &Path,
        mode: TokenizeMode,
        lines: usize,
        loaded: &LoadedCorpus,
        min_freq: usize,
        top: usize,
    ) -> Self {
        let top_tokens = loaded
            .vocab
            .token_freqs()
            .iter()
            .take(top)
            .map(|(token, count)| TokenEntry {
                token: token.clone(),
                count: *count,
                index: loaded.vocab.index_of(token),
            })
            .collect();

        Self {
            input: input.display().to_string(),
            mode: mode.to_string(),
            lines,
            corpus_tokens: loaded.corpus.len(),
            distinct_tokens: loaded.vocab.token_freqs().len(),
            vocab_size: loaded.vocab.len(),
            min_freq,
            top_tokens,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Format report as markdown
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();
        md.push_str("# Corpus Report\n\n");
        md.push_str(&format!("**Timestamp**: {}\n\n", self.timestamp));
        md.push_str(&format!("**Input**: {}\n\n", self.input));
        md.push_str(&format!("**Mode**: {}\n\n", self.mode));
        md.push_str(&format!("**Lines**: {}\n\n", self.lines));
        md.push_str(&format!("**Corpus tokens**: {}\n\n", self.corpus_tokens));
        md.push_str(&format!(
            "**Distinct tokens**: {}\n\n",
            self.distinct_tokens
        ));
        md.push_str(&format!(
            "**Vocabulary size**: {} (min_freq {})\n\n",
            self.vocab_size, self.min_freq
        ));
        md.push_str("## Top Tokens\n\n");
        md.push_str("| Token | Count | Index |\n");
        md.push_str("|-------|-------|-------|\n");

        for entry in &self.top_tokens {
            // Tokens go in backticks so char-mode entries like " " stay visible.
            md.push_str(&format!(
                "| `{}` | {} | {} |\n",
                entry.token, entry.count, entry.index
            ));
        }

        md
    }
}
