//! Crawler module
//!
//! The breadth-first traversal and its collaborators:
//! - engine: traversal loop and crawl state
//! - frontier: per-level URL set with chain-keyed dedup
//! - fetcher: HTTP client and page fetching
//! - parser: anchor extraction
//! - classifier: OWU link detection
//! - downloader: streaming document download

mod classifier;
mod downloader;
mod engine;
mod fetcher;
mod frontier;
mod parser;

pub use classifier::is_owu;
pub use downloader::download_document;
pub use engine::{CrawlEngine, CrawlSummary};
pub use fetcher::{build_http_client, fetch_page, FetchedPage};
pub use frontier::{Frontier, FrontierEntry};
pub use parser::{extract_anchors, Anchor};

use crate::config::CrawlConfig;
use crate::Result;

/// Runs a complete crawl: validates the configuration, performs the
/// traversal, persists the manifest and returns the summary.
pub async fn crawl(config: CrawlConfig) -> Result<CrawlSummary> {
    CrawlEngine::new(config)?.run().await
}
