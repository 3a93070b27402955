//! HTTP fetching
//!
//! One shared client serves the whole crawl; every page request is a GET
//! that follows redirects, so the response exposes the canonical
//! (post-redirect) URL alongside the headers and body.

use crate::{CrawlError, Result};
use reqwest::header::HeaderMap;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// A successfully fetched page.
#[derive(Debug)]
pub struct FetchedPage {
    /// Final URL after redirects
    pub final_url: Url,
    /// Response headers
    pub headers: HeaderMap,
    /// Body text
    pub body: String,
}

/// Builds the HTTP client shared by page fetches, classification probes
/// and document downloads.
///
/// The timeouts bound a single request; a slow server still stalls the
/// crawl, which is sequential by design.
pub fn build_http_client() -> reqwest::Result<Client> {
    Client::builder()
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches one page.
///
/// Transport failures and non-2xx statuses are errors; the traversal
/// loop turns both into a skip of the offending page.
pub async fn fetch_page(client: &Client, url: &str) -> Result<FetchedPage> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| CrawlError::Http {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(CrawlError::Status {
            url: url.to_string(),
            status,
        });
    }

    let final_url = response.url().clone();
    let headers = response.headers().clone();
    let body = response.text().await.map_err(|source| CrawlError::Http {
        url: final_url.to_string(),
        source,
    })?;

    Ok(FetchedPage {
        final_url,
        headers,
        body,
    })
}
