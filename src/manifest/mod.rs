//! Manifest records and persistence
//!
//! Every confirmed document contributes one [`DocumentRecord`]; the
//! manifest is the discovery-ordered sequence of records, serialized as
//! pretty JSON once the crawl finishes. Headers are reduced to the typed
//! [`FilteredHeaders`] view that change detection needs: the two required
//! fields are enforced at construction, the two optional ones survive
//! only when the server sent them.

use crate::{CrawlError, Result};
use reqwest::header::{HeaderMap, CONTENT_LENGTH, CONTENT_TYPE, EXPIRES, LAST_MODIFIED};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The response headers retained for change detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilteredHeaders {
    #[serde(rename = "Content-Type")]
    pub content_type: String,

    #[serde(rename = "Content-Length")]
    pub content_length: String,

    #[serde(
        rename = "Last-Modified",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub last_modified: Option<String>,

    #[serde(rename = "Expires", default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<String>,
}

impl FilteredHeaders {
    /// Builds the filtered view of a response header map.
    ///
    /// `Content-Type` and `Content-Length` are required; their absence is
    /// a [`CrawlError::MissingHeader`] carrying the offending URL.
    pub fn from_response_headers(headers: &HeaderMap, url: &str) -> Result<Self> {
        Ok(Self {
            content_type: required(headers, url, CONTENT_TYPE, "Content-Type")?,
            content_length: required(headers, url, CONTENT_LENGTH, "Content-Length")?,
            last_modified: optional(headers, LAST_MODIFIED),
            expires: optional(headers, EXPIRES),
        })
    }
}

fn required(
    headers: &HeaderMap,
    url: &str,
    key: reqwest::header::HeaderName,
    name: &'static str,
) -> Result<String> {
    headers
        .get(&key)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
        .ok_or_else(|| CrawlError::MissingHeader {
            url: url.to_string(),
            name,
        })
}

fn optional(headers: &HeaderMap, key: reqwest::header::HeaderName) -> Option<String> {
    headers
        .get(&key)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

/// One confirmed policy-terms document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Whitespace-normalized anchor text the document was linked under
    pub text: String,

    /// The document's own URL
    pub url: String,

    /// Ancestor page URLs, immediate parent first, seed last
    pub parents: Vec<String>,

    /// Filtered headers of the downloaded file
    pub headers: FilteredHeaders,
}

/// Writes the manifest as pretty JSON, creating the parent directory.
///
/// The output is UTF-8 with non-ASCII characters preserved literally, so
/// Polish document titles stay readable in the file.
pub fn save_manifest(records: &[DocumentRecord], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(records)?;
    std::fs::write(path, json)?;
    tracing::info!("saved {} records to {}", records.len(), path.display());
    Ok(())
}
