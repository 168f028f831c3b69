//! JSON corpus file generation.
//!
//! This module serializes the collected records to a JSON file for
//! consumption by downstream retrieval pipelines.
//!
//! # Output Structure
//!
//! A single pretty-printed array (2-space indentation), one object per
//! processed URL, in input order:
//! ```text
//! [
//!   {
//!     "title": "...",
//!     "content": "...",
//!     "url": "https://..."
//!   }
//! ]
//! ```
//!
//! An empty record set writes `[]`. An existing file at the output path is
//! overwritten.

use crate::models::ArticleRecord;
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{error, info, instrument};

/// Write the full record set to `output_path` as a pretty-printed JSON array.
///
/// Missing parent directories are created first. The write is a single
/// operation at the end of the run; nothing is flushed incrementally.
///
/// # Arguments
///
/// * `records` - The collected articles, in input order
/// * `output_path` - Destination file; overwritten if it exists
///
/// # Returns
///
/// `Ok(())` on success, or an error if serialization, directory creation,
/// or the file write fails.
#[instrument(level = "info", skip_all, fields(output_path = %output_path))]
pub async fn write_records(
    records: &[ArticleRecord],
    output_path: &str,
) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(records)?;

    if let Some(parent) = Path::new(output_path).parent() {
        if !parent.as_os_str().is_empty() {
            if let Err(e) = fs::create_dir_all(parent).await {
                error!(parent = %parent.display(), error = %e, "Failed to create output directory");
                return Err(e.into());
            }
        }
    }

    info!(path = %output_path, count = records.len(), "Writing JSON corpus");
    fs::write(output_path, json).await?;
    info!(path = %output_path, "Wrote JSON corpus file");

    Ok(())
}
