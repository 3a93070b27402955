//! Document download
//!
//! Confirmed documents are streamed straight to disk chunk by chunk; PDF
//! policy documents run into the tens of megabytes and never need to sit
//! in memory whole. The caller receives the full response headers and
//! filters them into the manifest record.

use crate::{CrawlError, Result};
use reqwest::header::HeaderMap;
use reqwest::Client;
use std::path::Path;
use tokio::io::AsyncWriteExt;
use url::Url;

/// Downloads a document into `dir`, creating the directory if needed.
///
/// The file name comes from the URL's last path segment, with ".pdf"
/// appended when the segment has no extension. A non-success status fails
/// the download before anything is written; a transport failure mid-body
/// can leave a partial file behind, which the next crawl overwrites.
pub async fn download_document(client: &Client, url: &Url, dir: &Path) -> Result<HeaderMap> {
    tokio::fs::create_dir_all(dir).await?;
    let target = dir.join(local_file_name(url));

    let mut response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|source| CrawlError::Http {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(CrawlError::Download {
            url: url.to_string(),
            status,
        });
    }

    let headers = response.headers().clone();

    tracing::info!("downloading {} -> {}", url, target.display());
    let mut file = tokio::fs::File::create(&target).await?;
    while let Some(chunk) = response.chunk().await.map_err(|source| CrawlError::Http {
        url: url.to_string(),
        source,
    })? {
        file.write_all(&chunk).await?;
    }
    file.flush().await?;

    Ok(headers)
}

/// File name for a document URL: the last path segment, defaulted to a
/// ".pdf" extension when it has none.
fn local_file_name(url: &Url) -> String {
    let segment = url
        .path_segments()
        .and_then(|segments| segments.last())
        .unwrap_or("");
    if segment.contains('.') {
        segment.to_string()
    } else {
        format!("{segment}.pdf")
    }
}
