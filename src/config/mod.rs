//! Crawl configuration
//!
//! Configuration is a plain value constructed by the caller: a seed URL,
//! a depth bound and a handful of knobs with defaults matching the
//! behavior of the production crawl. There is no configuration file.

use crate::{ConfigError, ConfigResult};
use std::collections::HashSet;
use std::path::PathBuf;
use url::Url;

/// Default number of breadth-first expansion iterations from the seed.
pub const DEFAULT_MAX_DEPTH: u32 = 2;

/// Default directory receiving the manifest and downloaded documents.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Hosts that are never enqueued nor fetched: app stores, social networks
/// and industry portals that insurer pages habitually link to.
const DEFAULT_SKIPPED_DOMAINS: &[&str] = &[
    "itunes.apple.com",
    "apps.apple.com",
    "play.google.com",
    "www.linkedin.com",
    "www.youtube.com",
    "www.amice-eu.org",
    "www.gov.pl",
    "piu.org.pl",
];

/// Configuration for a single crawl
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// The main page of the site to crawl
    pub seed_url: String,

    /// How many expansion iterations to perform from the main page
    pub max_depth: u32,

    /// Domains (authority component, host with optional port) excluded
    /// from traversal regardless of depth
    pub skipped_domains: HashSet<String>,

    /// Base directory for the manifest file and the download directory
    pub data_dir: PathBuf,
}

impl CrawlConfig {
    /// Creates a configuration with default depth, skip list and data dir.
    pub fn new(seed_url: impl Into<String>) -> Self {
        Self {
            seed_url: seed_url.into(),
            max_depth: DEFAULT_MAX_DEPTH,
            skipped_domains: DEFAULT_SKIPPED_DOMAINS
                .iter()
                .map(|d| d.to_string())
                .collect(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }

    /// Validates the seed URL and returns it parsed.
    ///
    /// The seed must be an absolute http(s) URL with a host; everything
    /// else in the configuration is valid by construction.
    pub fn validate(&self) -> ConfigResult<Url> {
        let seed = Url::parse(&self.seed_url).map_err(|source| ConfigError::InvalidSeed {
            url: self.seed_url.clone(),
            source,
        })?;

        match seed.scheme() {
            "http" | "https" => {}
            other => return Err(ConfigError::UnsupportedScheme(other.to_string())),
        }

        if seed.host_str().is_none() {
            return Err(ConfigError::MissingHost(self.seed_url.clone()));
        }

        Ok(seed)
    }
}
