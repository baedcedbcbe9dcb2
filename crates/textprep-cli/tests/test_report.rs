//! Unit tests for corpus report generation

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use textprep_cli::report::CorpusReport;
use textprep_corpus::{load_corpus, LoadedCorpus, PipelineOptions, TokenizeMode};
use textprep_vocab::{Vocab, UNK_INDEX};

fn sample_corpus() -> LoadedCorpus {
    let tokens = ["the", "time", "the", "machine", "the", "time"];
    let vocab = Vocab::from_tokens(tokens);
    let corpus = tokens.iter().map(|&token| vocab.index_of(token)).collect();
    LoadedCorpus { corpus, vocab }
}

#[test]
fn test_report_counts() {
    let loaded = sample_corpus();
    let report = CorpusReport::generate(
        Path::new("corpus.txt"),
        TokenizeMode::Word,
        2,
        &loaded,
        0,
        2,
    );

    assert_eq!(report.input, "corpus.txt");
    assert_eq!(report.mode, "word");
    assert_eq!(report.lines, 2);
    assert_eq!(report.corpus_tokens, 6);
    assert_eq!(report.distinct_tokens, 3);
    assert_eq!(report.vocab_size, 4); // <unk>, the, time, machine
    assert!(!report.timestamp.is_empty());
}

#[test]
fn test_report_top_tokens_ranked_by_count() {
    let loaded = sample_corpus();
    let report = CorpusReport::generate(
        Path::new("corpus.txt"),
        TokenizeMode::Word,
        1,
        &loaded,
        0,
        2,
    );

    assert_eq!(report.top_tokens.len(), 2);
    assert_eq!(report.top_tokens[0].token, "the");
    assert_eq!(report.top_tokens[0].count, 3);
    assert_eq!(report.top_tokens[0].index, 1);
    assert_eq!(report.top_tokens[1].token, "time");
    assert_eq!(report.top_tokens[1].count, 2);
}

#[test]
fn test_report_top_bounded_by_distinct_tokens() {
    let loaded = sample_corpus();
    let report = CorpusReport::generate(
        Path::new("corpus.txt"),
        TokenizeMode::Word,
        1,
        &loaded,
        0,
        100,
    );

    assert_eq!(report.top_tokens.len(), 3);
}

#[test]
fn test_report_pruned_token_shows_unk_index() {
    let vocab = Vocab::builder().min_freq(2).build_from_tokens(["a", "a", "b"]);
    let corpus = vec![1, 1, UNK_INDEX];
    let loaded = LoadedCorpus { corpus, vocab };

    let report = CorpusReport::generate(
        Path::new("corpus.txt"),
        TokenizeMode::Word,
        1,
        &loaded,
        2,
        10,
    );

    // "b" was counted but fell below the floor, so it reports the unk index.
    assert_eq!(report.top_tokens[1].token, "b");
    assert_eq!(report.top_tokens[1].index, UNK_INDEX);
    assert_eq!(report.min_freq, 2);
}

#[test]
fn test_report_markdown_formatting() {
    let loaded = sample_corpus();
    let report = CorpusReport::generate(
        Path::new("corpus.txt"),
        TokenizeMode::Word,
        1,
        &loaded,
        0,
        2,
    );

    let markdown = report.to_markdown();
    assert!(markdown.contains("# Corpus Report"));
    assert!(markdown.contains("| Token | Count | Index |"));
    assert!(markdown.contains("| `the` | 3 | 1 |"));
    assert!(markdown.contains("**Vocabulary size**: 4"));
}

#[test]
fn test_report_json_round_trip() {
    let loaded = sample_corpus();
    let report = CorpusReport::generate(
        Path::new("corpus.txt"),
        TokenizeMode::Word,
        1,
        &loaded,
        0,
        2,
    );

    let json = serde_json::to_string_pretty(&report).expect("Failed to serialize report");
    let parsed: CorpusReport = serde_json::from_str(&json).expect("Failed to parse report");

    assert_eq!(parsed.corpus_tokens, report.corpus_tokens);
    assert_eq!(parsed.vocab_size, report.vocab_size);
    assert_eq!(parsed.top_tokens.len(), report.top_tokens.len());
}

#[test]
fn test_report_from_pipeline_output() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("corpus.txt");
    fs::write(&path, "the time machine\nthe time traveller\n").expect("Failed to write corpus");

    let loaded = load_corpus(&path, &PipelineOptions::default()).expect("Failed to load corpus");
    let report = CorpusReport::generate(&path, TokenizeMode::Word, 2, &loaded, 0, 5);

    assert!(report.input.ends_with("corpus.txt"));
    assert_eq!(report.corpus_tokens, 6);
    assert_eq!(report.top_tokens[0].token, "the");
    assert_eq!(report.top_tokens[0].count, 2);
}
