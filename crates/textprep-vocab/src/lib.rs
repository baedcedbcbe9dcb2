//! Frequency-ranked vocabulary construction for text corpora
//!
//! This crate provides:
//! - Token frequency counting over flat or line-structured streams
//! - Vocabulary construction with minimum-frequency pruning and reserved
//!   tokens
//! - Bidirectional token/index lookup with open-vocabulary `<unk>` fallback
//!
//! # Example
//!
//! ```
//! use textprep_vocab::{Vocab, UNK_INDEX};
//!
//! let vocab = Vocab::builder()
//!     .reserved_tokens(["<pad>"])
//!     .build_from_tokens(["the", "time", "the"]);
//!
//! assert_eq!(vocab.index_of("the"), 2); // after <unk> and <pad>
//! assert_eq!(vocab.index_of("machine"), UNK_INDEX);
//! assert_eq!(vocab.token_at(2).unwrap(), "the");
//! ```

pub mod counts;
pub mod vocab;

pub use counts::TokenCounts;
pub use vocab::{Vocab, VocabBuilder, VocabError, UNK_INDEX, UNK_TOKEN};
