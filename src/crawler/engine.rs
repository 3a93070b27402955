//! Crawl engine - breadth-first traversal and crawl state
//!
//! The engine owns every piece of crawl state: the per-level frontier,
//! the visited registry, the discovered-domain set and the accumulated
//! manifest. One level is expanded at a time; children admitted while a
//! level is processed form the next level's frontier. Everything runs
//! sequentially on one task, so no page fetch starts before the previous
//! one finished.

use crate::config::CrawlConfig;
use crate::crawler::classifier::is_owu;
use crate::crawler::downloader::download_document;
use crate::crawler::fetcher::{build_http_client, fetch_page};
use crate::crawler::frontier::{Frontier, FrontierEntry};
use crate::crawler::parser::extract_anchors;
use crate::manifest::{save_manifest, DocumentRecord, FilteredHeaders};
use crate::url::{authority, download_dir, manifest_path, site_slug};
use crate::{ConfigError, Result};
use reqwest::Client;
use std::collections::{BTreeSet, HashMap};
use std::path::PathBuf;

/// What a finished crawl hands back to the caller.
///
/// The manifest is already persisted at `manifest_path` by the time the
/// summary exists; the fields here feed console reporting and tests.
#[derive(Debug)]
pub struct CrawlSummary {
    /// Distinct domains seen among followed links, sorted
    pub domains: Vec<String>,
    /// Canonical URL of every visited page mapped to its filtered headers
    pub visited: HashMap<String, FilteredHeaders>,
    /// The recorded documents, in discovery order
    pub records: Vec<DocumentRecord>,
    /// Where the manifest was written
    pub manifest_path: PathBuf,
}

/// Breadth-first crawl engine.
pub struct CrawlEngine {
    config: CrawlConfig,
    client: Client,
    manifest_path: PathBuf,
    download_dir: PathBuf,
    /// Canonical (post-redirect) URL -> filtered headers, last write wins
    visited: HashMap<String, FilteredHeaders>,
    domains: BTreeSet<String>,
    records: Vec<DocumentRecord>,
}

impl CrawlEngine {
    /// Validates the configuration and prepares an engine.
    ///
    /// Output locations are fixed here, derived from the seed's authority:
    /// the manifest at `<data_dir>/<slug>.json`, downloads under
    /// `<data_dir>/<slug>/`.
    pub fn new(config: CrawlConfig) -> Result<Self> {
        let seed = config.validate()?;
        let slug = site_slug(&seed)
            .ok_or_else(|| ConfigError::MissingHost(config.seed_url.clone()))?;
        let client = build_http_client()?;

        Ok(Self {
            manifest_path: manifest_path(&config.data_dir, &slug),
            download_dir: download_dir(&config.data_dir, &slug),
            config,
            client,
            visited: HashMap::new(),
            domains: BTreeSet::new(),
            records: Vec::new(),
        })
    }

    /// Runs the crawl to completion and persists the manifest.
    ///
    /// The loop performs `max_depth` expansion iterations, or fewer when a
    /// level comes up empty. Per-page failures are logged and skipped; the
    /// children of a failed page are simply never discovered.
    pub async fn run(mut self) -> Result<CrawlSummary> {
        let mut frontier = Frontier::new();
        frontier.insert(FrontierEntry::seed(&self.config.seed_url));
        let mut depth = 0;

        while depth < self.config.max_depth && !frontier.is_empty() {
            tracing::info!("expanding depth {depth}: {} urls", frontier.len());
            let mut next = Frontier::new();

            for entry in frontier.into_entries() {
                // Duplicate entries of one URL admitted from distinct
                // parents; the first visit settled it.
                if self.visited.contains_key(entry.url.as_str()) {
                    tracing::debug!("already visited {}, skipping", entry.url);
                    continue;
                }
                if let Err(e) = self.visit_page(&entry, depth, &mut next).await {
                    tracing::warn!("skipping {}: {e}", entry.url);
                }
            }

            frontier = next;
            depth += 1;
        }

        save_manifest(&self.records, &self.manifest_path)?;
        tracing::info!(
            "crawl finished: {} pages visited, {} domains, {} documents",
            self.visited.len(),
            self.domains.len(),
            self.records.len()
        );

        Ok(CrawlSummary {
            domains: self.domains.into_iter().collect(),
            visited: self.visited,
            records: self.records,
            manifest_path: self.manifest_path,
        })
    }

    /// Visits one frontier entry: fetch, register headers, walk anchors.
    ///
    /// Any error propagating from here - fetch, header filtering,
    /// classification probe, download - aborts the rest of this page and
    /// is absorbed by the traversal loop. State mutated before the error
    /// (registry insert, children already admitted, records already
    /// appended) stands.
    async fn visit_page(
        &mut self,
        entry: &FrontierEntry,
        depth: u32,
        next: &mut Frontier,
    ) -> Result<()> {
        let page = fetch_page(&self.client, &entry.url).await?;

        let page_headers =
            FilteredHeaders::from_response_headers(&page.headers, page.final_url.as_str())?;
        self.visited.insert(page.final_url.to_string(), page_headers);

        for anchor in extract_anchors(&page.body) {
            let child = match page.final_url.join(&anchor.href) {
                Ok(url) => url,
                Err(e) => {
                    tracing::debug!("unresolvable href {:?} on {}: {e}", anchor.href, page.final_url);
                    continue;
                }
            };
            if child.scheme() != "http" && child.scheme() != "https" {
                tracing::debug!("ignoring {} link {child}", child.scheme());
                continue;
            }
            // http(s) URLs always carry a host
            let Some(domain) = authority(&child) else {
                continue;
            };

            if self.config.skipped_domains.contains(&domain) {
                tracing::debug!("domain {domain} is on the skip list, ignoring {child}");
                continue;
            }
            if self.visited.contains_key(child.as_str()) {
                continue;
            }
            let candidate = FrontierEntry::child(child.as_str(), entry);
            if next.contains(&candidate) {
                continue;
            }

            if is_owu(&self.client, &child, &anchor.text).await? {
                tracing::info!(
                    "OWU match at depth {depth} on {}: {} -> {child}",
                    page.final_url,
                    anchor.text
                );
                let headers = download_document(&self.client, &child, &self.download_dir).await?;
                let filtered = FilteredHeaders::from_response_headers(&headers, child.as_str())?;
                self.records.push(DocumentRecord {
                    text: anchor.text.clone(),
                    url: candidate.url.clone(),
                    parents: candidate.parents.clone(),
                    headers: filtered,
                });
            }

            self.domains.insert(domain);
            next.insert(candidate);
        }

        Ok(())
    }
}
