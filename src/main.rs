//! # News Corpus Export
//!
//! Fetches a list of news article URLs, extracts each page's title and
//! readable body text, and writes the whole batch as one pretty-printed
//! JSON array for downstream retrieval pipelines.
//!
//! ## Usage
//!
//! ```sh
//! # Built-in article list, default output at data/rag/data.json
//! news_corpus_export
//!
//! # Custom URL list and output path
//! news_corpus_export --urls-file urls.txt -o corpus.json
//! ```
//!
//! ## Behavior
//!
//! The run is a single sequential pass: download → extract → collect →
//! write. Articles are fetched one at a time in input order, the result list
//! is buffered in full, and the JSON file is written exactly once at the
//! end. Any network, extraction, or filesystem failure aborts the run and no
//! output file is produced.

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod cli;
mod exporter;
mod extract;
mod models;
mod outputs;
mod sources;
mod utils;

use cli::Cli;
use extract::HttpArticleFetcher;
use utils::ensure_writable_parent;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("corpus_export starting up");

    // Parse CLI
    let args = Cli::parse();
    debug!(?args.output, ?args.urls_file, url_args = args.urls.len(), "Parsed CLI arguments");

    // ---- Resolve the article list ----
    let urls = sources::resolve_urls(&args.urls, args.urls_file.as_deref()).await?;
    info!(count = urls.len(), "Articles to export");

    // Early check: ensure the output location is writable
    if let Err(e) = ensure_writable_parent(&args.output).await {
        error!(
            path = %args.output,
            error = %e,
            "Output location is not writable (fix perms or choose a different path)"
        );
        return Err(e);
    }

    // ---- Fetch, extract, and write the corpus ----
    let fetcher = HttpArticleFetcher;
    if let Err(e) = exporter::export(&fetcher, &urls, &args.output).await {
        error!(error = %e, "Export failed; no corpus file was written");
        return Err(e);
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        articles = urls.len(),
        path = %args.output,
        "Execution complete"
    );

    Ok(())
}
