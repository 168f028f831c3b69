//! Command-line interface definitions for the corpus exporter.
//!
//! This module defines the CLI arguments and options using the `clap` crate.

use clap::Parser;

/// Command-line arguments for the corpus exporter.
///
/// URLs can be given directly, read from a file, or left out entirely to
/// fall back to the built-in article list.
///
/// # Examples
///
/// ```sh
/// # Built-in article list, default output path
/// news_corpus_export
///
/// # Explicit output path
/// news_corpus_export -o corpus.json
///
/// # URLs from a file plus one given directly
/// news_corpus_export --urls-file urls.txt https://example.com/story
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Article URLs to fetch; falls back to the built-in list when empty
    pub urls: Vec<String>,

    /// Path to a file with one article URL per line (blank lines and # comments skipped)
    #[arg(short, long)]
    pub urls_file: Option<String>,

    /// Path of the JSON corpus file to write
    #[arg(short, long, default_value = "data/rag/data.json")]
    pub output: String,
}
