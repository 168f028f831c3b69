//! Data models for fetched articles and exported corpus records.
//!
//! This module defines the two data structures used throughout the application:
//! - [`ExtractedArticle`]: the raw `{title, text}` pair produced by the
//!   content-extraction step, before it is tied back to its URL
//! - [`ArticleRecord`]: one entry of the exported JSON corpus
//!
//! The JSON field order of [`ArticleRecord`] (`title`, `content`, `url`) is
//! part of the output contract and must not be reordered.

use serde::{Deserialize, Serialize};

/// The title and readable body text recovered from one article page.
///
/// This struct represents the output of the extraction heuristic only; it
/// carries no URL because the exporter joins it with the input URL when
/// building the corpus record.
#[derive(Debug)]
pub struct ExtractedArticle {
    /// The article headline. May be empty when the page carries no usable title.
    pub title: String,
    /// The main article body with boilerplate stripped.
    pub text: String,
}

/// A single record of the exported corpus.
///
/// Created once per successfully processed URL and immutable afterwards.
/// `url` is the input URL verbatim; no normalization is applied to it.
#[derive(Debug, Deserialize, Serialize)]
pub struct ArticleRecord {
    /// The article title as extracted from the page.
    pub title: String,
    /// The article body text as extracted from the page.
    pub content: String,
    /// The URL the article was fetched from, exactly as given in the input.
    pub url: String,
}

impl ArticleRecord {
    /// Extract the domain name (before .com/.org/etc) from the record's URL.
    /// For example: "https://bola.kompas.com/read/..." -> "kompas"
    pub fn domain(&self) -> Option<String> {
        if let Ok(parsed) = url::Url::parse(&self.url) {
            if let Some(host) = parsed.host_str() {
                // Split by dots and get the domain before the TLD
                let parts: Vec<&str> = host.split('.').collect();
                if parts.len() >= 2 {
                    return Some(parts[parts.len() - 2].to_string());
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracted_article_creation() {
        let extracted = ExtractedArticle {
            title: "Hello".to_string(),
            text: "World".to_string(),
        };
        assert_eq!(extracted.title, "Hello");
        assert_eq!(extracted.text, "World");
    }

    #[test]
    fn test_record_serialization_field_order() {
        let record = ArticleRecord {
            title: "Hello".to_string(),
            content: "World".to_string(),
            url: "https://example.com/a".to_string(),
        };

        let json = serde_json::to_string(&record).unwrap();
        let title_at = json.find("\"title\"").unwrap();
        let content_at = json.find("\"content\"").unwrap();
        let url_at = json.find("\"url\"").unwrap();
        assert!(title_at < content_at);
        assert!(content_at < url_at);
    }

    #[test]
    fn test_record_round_trip_has_exactly_three_keys() {
        let record = ArticleRecord {
            title: "Title".to_string(),
            content: "Body".to_string(),
            url: "https://example.com/article".to_string(),
        };

        let value: serde_json::Value = serde_json::to_value(&record).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert!(object["title"].is_string());
        assert!(object["content"].is_string());
        assert!(object["url"].is_string());
    }

    #[test]
    fn test_record_deserialization() {
        let json = r#"{
            "title": "Hello",
            "content": "World",
            "url": "https://example.com/a"
        }"#;

        let record: ArticleRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.title, "Hello");
        assert_eq!(record.content, "World");
        assert_eq!(record.url, "https://example.com/a");
    }

    #[test]
    fn test_domain_subdomain() {
        let record = ArticleRecord {
            title: String::new(),
            content: String::new(),
            url: "https://bola.kompas.com/read/2025/01/09/article".to_string(),
        };
        assert_eq!(record.domain(), Some("kompas".to_string()));
    }

    #[test]
    fn test_domain_simple_host() {
        let record = ArticleRecord {
            title: String::new(),
            content: String::new(),
            url: "https://example.com/a".to_string(),
        };
        assert_eq!(record.domain(), Some("example".to_string()));
    }

    #[test]
    fn test_domain_invalid_url() {
        let record = ArticleRecord {
            title: String::new(),
            content: String::new(),
            url: "not a url".to_string(),
        };
        assert_eq!(record.domain(), None);
    }
}
