//! Article fetching and content extraction.
//!
//! This module is the seam between the exporter and the network: the
//! [`ArticleFetcher`] trait narrows the outside world down to a single
//! `fetch_and_extract` operation, so the exporter can run against the real
//! HTTP implementation or an in-memory stand-in in tests.
//!
//! # Extraction
//!
//! The production implementation downloads the page and hands it to the
//! `readability` crate, a general-purpose boilerplate-stripping heuristic
//! (navigation, ads, and scripts are discarded; the main readable body is
//! kept). Its internals are treated as opaque. Two small touch-ups are
//! applied on top:
//!
//! - when the heuristic produces no title, the page's `<title>` tag and
//!   `og:title` meta are consulted as fallbacks
//! - the body text is whitespace-normalized (per-line trim, blank-line runs
//!   collapsed to a single paragraph break)

use crate::models::ExtractedArticle;
use once_cell::sync::Lazy;
use readability::extractor;
use regex::Regex;
use reqwest::get;
use scraper::{Html, Selector};
use std::error::Error;
use tracing::{debug, info, instrument};
use url::Url;

static BLANK_LINE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());
static TITLE_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("title").unwrap());
static OG_TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"meta[property="og:title"]"#).unwrap());

/// Fetch a URL and reduce it to article title and body text.
///
/// The exporter is generic over this trait; tests substitute an in-memory
/// implementation so no network access is needed.
pub trait ArticleFetcher {
    /// Retrieve the page at `url` and extract its title and main text.
    ///
    /// # Returns
    ///
    /// The extracted `{title, text}` pair, or an error if the download or
    /// the extraction step fails.
    async fn fetch_and_extract(&self, url: &str) -> Result<ExtractedArticle, Box<dyn Error>>;
}

/// Production [`ArticleFetcher`]: HTTP download plus readability extraction.
#[derive(Debug, Default)]
pub struct HttpArticleFetcher;

impl ArticleFetcher for HttpArticleFetcher {
    #[instrument(level = "info", skip_all, fields(%url))]
    async fn fetch_and_extract(&self, url: &str) -> Result<ExtractedArticle, Box<dyn Error>> {
        let response = get(url).await?.error_for_status()?;
        let html = response.text().await?;
        debug!(bytes = html.len(), "Downloaded article page");
        extract_article(&html, url)
    }
}

/// Run the content-extraction heuristic on already-downloaded HTML.
///
/// `url` is the page's own URL; the extractor uses it to resolve relative
/// links. An article body that comes back empty after normalization is an
/// error, because a record without content is useless to the corpus. An
/// empty title is allowed.
pub fn extract_article(html: &str, url: &str) -> Result<ExtractedArticle, Box<dyn Error>> {
    let base_url = Url::parse(url)?;
    let product = extractor::extract(&mut html.as_bytes(), &base_url)
        .map_err(|e| format!("content extraction failed: {e:?}"))?;

    let text = normalize_text(&product.text);
    if text.is_empty() {
        return Err(format!("no readable content recovered from {url}").into());
    }

    let mut title = product.title.trim().to_string();
    if title.is_empty() {
        title = page_title(html).unwrap_or_default();
    }

    info!(bytes = text.len(), "Parsed article body");
    Ok(ExtractedArticle { title, text })
}

/// Read the page's own title from `<title>`, falling back to `og:title`.
fn page_title(html: &str) -> Option<String> {
    let document = Html::parse_document(html);

    if let Some(element) = document.select(&TITLE_SELECTOR).next() {
        let text = element.text().collect::<Vec<_>>().join(" ");
        let text = text.trim();
        if !text.is_empty() {
            return Some(text.to_string());
        }
    }

    if let Some(element) = document.select(&OG_TITLE_SELECTOR).next() {
        if let Some(content) = element.value().attr("content") {
            let content = content.trim();
            if !content.is_empty() {
                return Some(content.to_string());
            }
        }
    }

    None
}

/// Tidy extracted body text: trim each line, collapse runs of blank lines
/// into one paragraph break, and trim the ends. Single-line bodies pass
/// through unchanged.
fn normalize_text(text: &str) -> String {
    let trimmed_lines = text.lines().map(str::trim).collect::<Vec<_>>().join("\n");
    let collapsed = BLANK_LINE_RUNS.replace_all(&trimmed_lines, "\n\n");
    collapsed.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARTICLE_HTML: &str = r#"<html>
  <head><title>Council Approves Harbour Expansion</title></head>
  <body>
    <nav><a href="/">Home</a> <a href="/sports">Sports</a></nav>
    <div id="content">
      <p>The city council voted on Tuesday to approve the long-delayed harbour
      expansion, a project that officials say will double cargo capacity,
      create several hundred jobs, and reshape the waterfront over the next
      decade.</p>
      <p>Opponents of the plan, including several neighbourhood associations,
      argued that the environmental review was rushed, that the traffic
      studies were incomplete, and that the city had not budgeted for the
      long-term maintenance costs.</p>
      <p>Construction is expected to begin in the spring, pending final
      approval from the port authority, which meets at the end of the
      month.</p>
    </div>
    <footer>Copyright 2025 Example News</footer>
  </body>
</html>"#;

    #[test]
    fn test_extract_article_title_and_body() {
        let extracted = extract_article(ARTICLE_HTML, "https://example.com/harbour").unwrap();
        assert_eq!(extracted.title, "Council Approves Harbour Expansion");
        assert!(extracted.text.contains("harbour"));
        assert!(extracted.text.contains("port authority"));
        assert_eq!(extracted.text, extracted.text.trim());
    }

    #[test]
    fn test_extract_article_empty_body_is_error() {
        let html = "<html><head><title>Empty</title></head><body></body></html>";
        assert!(extract_article(html, "https://example.com/empty").is_err());
    }

    #[test]
    fn test_extract_article_invalid_url_is_error() {
        assert!(extract_article(ARTICLE_HTML, "not a url").is_err());
    }

    #[test]
    fn test_page_title_prefers_title_tag() {
        let html = r#"<html><head>
            <title>From Title Tag</title>
            <meta property="og:title" content="From Og Title"/>
        </head><body></body></html>"#;
        assert_eq!(page_title(html), Some("From Title Tag".to_string()));
    }

    #[test]
    fn test_page_title_falls_back_to_og_title() {
        let html = r#"<html><head>
            <meta property="og:title" content="From Og Title"/>
        </head><body></body></html>"#;
        assert_eq!(page_title(html), Some("From Og Title".to_string()));
    }

    #[test]
    fn test_page_title_missing() {
        let html = "<html><head></head><body><p>text</p></body></html>";
        assert_eq!(page_title(html), None);
    }

    #[test]
    fn test_normalize_text_identity_on_plain_line() {
        assert_eq!(normalize_text("World"), "World");
    }

    #[test]
    fn test_normalize_text_collapses_blank_runs() {
        let raw = "  first paragraph  \n\n\n\n  second paragraph  \n";
        assert_eq!(normalize_text(raw), "first paragraph\n\nsecond paragraph");
    }

    #[test]
    fn test_normalize_text_all_whitespace_is_empty() {
        assert_eq!(normalize_text(" \n \n\t\n "), "");
    }
}
