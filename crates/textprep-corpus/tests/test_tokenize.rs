//! Unit tests for word and character tokenization

use textprep_corpus::{tokenize_line, tokenize_lines, TokenizeMode};

#[test]
fn test_word_mode_splits_on_whitespace() {
    let tokens = tokenize_line("the time machine", TokenizeMode::Word);
    assert_eq!(tokens, vec!["the", "time", "machine"]);
}

#[test]
fn test_char_mode_splits_into_characters() {
    let tokens = tokenize_line("abc", TokenizeMode::Char);
    assert_eq!(tokens, vec!["a", "b", "c"]);
}

#[test]
fn test_char_mode_keeps_spaces() {
    let tokens = tokenize_line("a b", TokenizeMode::Char);
    assert_eq!(tokens, vec!["a", " ", "b"]);
}

#[test]
fn test_tokenize_lines_preserves_line_structure() {
    let lines = vec![
        "the time machine".to_string(),
        String::new(),
        "the time traveller".to_string(),
    ];

    let tokens = tokenize_lines(&lines, TokenizeMode::Word);

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0], vec!["the", "time", "machine"]);
    assert!(tokens[1].is_empty());
    assert_eq!(tokens[2], vec!["the", "time", "traveller"]);
}

#[test]
fn test_tokenize_lines_empty_input() {
    let lines: Vec<String> = Vec::new();
    let tokens = tokenize_lines(&lines, TokenizeMode::Word);
    assert!(tokens.is_empty());
}

#[test]
fn test_mode_parses_from_str() {
    assert_eq!("word".parse::<TokenizeMode>().ok(), Some(TokenizeMode::Word));
    assert_eq!("char".parse::<TokenizeMode>().ok(), Some(TokenizeMode::Char));
}

#[test]
fn test_mode_rejects_unknown_name() {
    let err = "subword".parse::<TokenizeMode>().expect_err("Expected parse failure");
    assert!(err.to_string().contains("subword"));
}

#[test]
fn test_mode_display_round_trips() {
    for mode in [TokenizeMode::Word, TokenizeMode::Char] {
        let parsed: TokenizeMode = mode.to_string().parse().expect("Failed to parse mode name");
        assert_eq!(parsed, mode);
    }
}
