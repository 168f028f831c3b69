//! The batch article exporter: download, extract, collect, write.
//!
//! One sequential pass over the input URLs, in input order. Every article is
//! buffered in memory and the JSON file is written exactly once at the end,
//! so a failure anywhere in the pass leaves no output file behind
//! (all-or-nothing semantics). The first fetch or extraction error aborts
//! the whole run.

use crate::extract::ArticleFetcher;
use crate::models::ArticleRecord;
use crate::outputs::json;
use crate::utils::truncate_for_log;
use std::error::Error;
use tracing::{debug, info, instrument};

/// Fetch and extract every URL, in order, into corpus records.
///
/// Each record's `url` field is the input string verbatim. The first
/// failure propagates immediately; records collected up to that point are
/// discarded with the returned error.
#[instrument(level = "info", skip_all, fields(total = urls.len()))]
pub async fn collect_articles<F: ArticleFetcher>(
    fetcher: &F,
    urls: &[String],
) -> Result<Vec<ArticleRecord>, Box<dyn Error>> {
    let mut records = Vec::with_capacity(urls.len());

    for (index, url) in urls.iter().enumerate() {
        debug!(index, %url, "Fetching article");
        let extracted = fetcher.fetch_and_extract(url).await?;

        let record = ArticleRecord {
            title: extracted.title,
            content: extracted.text,
            url: url.clone(),
        };
        info!(
            index,
            total = urls.len(),
            domain = %record.domain().unwrap_or_default(),
            title = %truncate_for_log(&record.title, 80),
            "Collected article"
        );
        records.push(record);
    }

    info!(count = records.len(), "Collected all articles");
    Ok(records)
}

/// Run the full export: collect every article, then write the JSON file.
///
/// The write happens only after the whole collection pass succeeds, so any
/// failure (network, extraction, or filesystem) produces no output file.
#[instrument(level = "info", skip_all, fields(total = urls.len(), output_path = %output_path))]
pub async fn export<F: ArticleFetcher>(
    fetcher: &F,
    urls: &[String],
    output_path: &str,
) -> Result<(), Box<dyn Error>> {
    let records = collect_articles(fetcher, urls).await?;
    json::write_records(&records, output_path).await?;
    Ok(())
}
