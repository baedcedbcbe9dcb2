//! Corpus preprocessing front end
//!
//! The `textprep` binary drives the full pipeline: read a corpus file,
//! tokenize it, build a frequency-ranked vocabulary, and encode the corpus.
//! The library part holds the report types so they can be tested on their
//! own.

pub mod report;

pub use report::{CorpusReport, TokenEntry};
