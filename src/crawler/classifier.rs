//! Policy-terms (OWU) link classification
//!
//! Two-tier cost model: the anchor text and the URL suffix are checked
//! first and settle almost every link without touching the network; only
//! a "warunki" anchor pointing at a non-`.pdf` URL costs a HEAD probe.

use crate::{CrawlError, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use url::Url;

/// Substring of the anchor text that marks policy-terms documents.
const TERMS_MARKER: &str = "warunki";

/// Content type a probe must report for a positive classification.
const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Decides whether a link points at an OWU document.
///
/// * anchor text without "warunki" (case-insensitive): `false`, no
///   network use;
/// * URL path ending in ".pdf" (case-insensitive): `true`, no network
///   use;
/// * otherwise a HEAD probe: `true` iff the response's `Content-Type` is
///   exactly `application/pdf`. A probe without a `Content-Type` header
///   is a [`CrawlError::MissingHeader`], handled by the caller like any
///   other page-level fault.
pub async fn is_owu(client: &Client, url: &Url, text: &str) -> Result<bool> {
    if !text.to_lowercase().contains(TERMS_MARKER) {
        return Ok(false);
    }

    if url.path().to_ascii_lowercase().ends_with(".pdf") {
        return Ok(true);
    }

    tracing::debug!("probing content type of {url}");
    let response = client
        .head(url.clone())
        .send()
        .await
        .map_err(|source| CrawlError::Http {
            url: url.to_string(),
            source,
        })?;

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| CrawlError::MissingHeader {
            url: url.to_string(),
            name: "Content-Type",
        })?;

    Ok(content_type == PDF_CONTENT_TYPE)
}
