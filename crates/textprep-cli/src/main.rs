//! Corpus preprocessing binary
//!
//! Reads a text corpus, builds a frequency-ranked vocabulary, encodes the
//! corpus as token indices, and reports the statistics.
//!
//! # Usage
//!
//! ```bash
//! textprep \
//!   --input ./data/timemachine.txt \
//!   [--mode word|char] \
//!   [--min-freq 2] \
//!   [--reserved "<pad>" --reserved "<bos>"] \
//!   [--max-tokens 10000] \
//!   [--top 10] \
//!   [--report-dir ./reports] \
//!   [--quiet]
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use textprep_cli::CorpusReport;
use textprep_corpus::{tokenize_lines, CorpusReader, LoadedCorpus, TokenizeMode};
use textprep_vocab::Vocab;

/// Command-line arguments for corpus preprocessing
#[derive(Parser, Debug)]
#[command(name = "textprep")]
#[command(about = "Build a frequency-ranked vocabulary from a text corpus")]
struct Args {
    /// Path to the corpus text file
    #[arg(long, short = 'i')]
    input: PathBuf,

    /// Tokenization mode ("word" or "char")
    #[arg(long, short = 'm', default_value = "word")]
    mode: TokenizeMode,

    /// Minimum corpus count for a token to keep its own index
    #[arg(long, default_value = "0")]
    min_freq: usize,

    /// Reserved token placed right after <unk>; repeat the flag for several
    #[arg(long = "reserved")]
    reserved_tokens: Vec<String>,

    /// Keep only this many leading tokens of the encoded corpus
    #[arg(long)]
    max_tokens: Option<usize>,

    /// Number of top-frequency tokens to show
    #[arg(long, default_value = "10")]
    top: usize,

    /// Output directory for report files (JSON and Markdown)
    #[arg(long, short = 'o')]
    report_dir: Option<PathBuf>,

    /// Suppress the summary output
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Read and normalize the corpus
    println!("Reading corpus from {:?}...", args.input);
    let reader = CorpusReader::new()?;
    let lines = reader.read_lines(&args.input)?;
    println!("Read {} lines", lines.len());

    let tokens = tokenize_lines(&lines, args.mode);
    if tokens.iter().all(|line| line.is_empty()) {
        eprintln!("Warning: no tokens produced from {:?}", args.input);
    }

    // Build the vocabulary
    println!(
        "Building vocabulary (mode: {}, min_freq: {})...",
        args.mode, args.min_freq
    );
    let vocab = Vocab::builder()
        .min_freq(args.min_freq)
        .reserved_tokens(args.reserved_tokens.iter().cloned())
        .build_from_lines(&tokens);
    println!("Vocabulary built: {} entries", vocab.len());

    // Encode the corpus as one flattened index sequence
    let mut corpus: Vec<u32> = tokens
        .iter()
        .flat_map(|line| line.iter().map(|token| vocab.index_of(token)))
        .collect();
    if let Some(max_tokens) = args.max_tokens {
        corpus.truncate(max_tokens);
    }

    let loaded = LoadedCorpus { corpus, vocab };
    let report = CorpusReport::generate(
        &args.input,
        args.mode,
        lines.len(),
        &loaded,
        args.min_freq,
        args.top,
    );

    // Save report files
    if let Some(report_dir) = &args.report_dir {
        std::fs::create_dir_all(report_dir)
            .with_context(|| format!("Failed to create report directory: {:?}", report_dir))?;

        let json_path = report_dir.join("corpus_report.json");
        let report_json = serde_json::to_string_pretty(&report)?;
        std::fs::write(&json_path, report_json)
            .with_context(|| format!("Failed to write report: {:?}", json_path))?;
        println!("Report saved to {:?}", json_path);

        let md_path = report_dir.join("corpus_report.md");
        std::fs::write(&md_path, report.to_markdown())
            .with_context(|| format!("Failed to write report: {:?}", md_path))?;
        println!("Markdown report saved to {:?}", md_path);
    }

    // Print summary
    if !args.quiet {
        println!("\n=== Corpus Summary ===");
        println!("Lines:           {}", report.lines);
        println!("Corpus tokens:   {}", report.corpus_tokens);
        println!("Distinct tokens: {}", report.distinct_tokens);
        println!("Vocabulary size: {}", report.vocab_size);
        println!("\nTop tokens:");
        for entry in &report.top_tokens {
            println!(
                "  {:?}: {} (index {})",
                entry.token, entry.count, entry.index
            );
        }
    }

    Ok(())
}
