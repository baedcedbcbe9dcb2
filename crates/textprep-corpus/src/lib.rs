//! Corpus loading and tokenization for textprep
//!
//! This crate provides:
//! - Line-oriented corpus reading with text normalization
//! - Word and character tokenization
//! - The end-to-end pipeline from a text file to an encoded corpus
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use textprep_corpus::{load_corpus, PipelineOptions, TokenizeMode};
//!
//! # fn main() -> anyhow::Result<()> {
//! let options = PipelineOptions {
//!     mode: TokenizeMode::Char,
//!     max_tokens: Some(10_000),
//!     ..PipelineOptions::default()
//! };
//! let loaded = load_corpus(Path::new("./data/corpus.txt"), &options)?;
//! println!("{} tokens, {} vocabulary entries", loaded.corpus.len(), loaded.vocab.len());
//! # Ok(())
//! # }
//! ```

pub mod pipeline;
pub mod reader;
pub mod tokenize;

pub use pipeline::{load_corpus, LoadedCorpus, PipelineOptions};
pub use reader::CorpusReader;
pub use tokenize::{tokenize_line, tokenize_lines, TokenizeError, TokenizeMode};
