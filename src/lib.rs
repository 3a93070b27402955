//! owu-archiver: a breadth-first policy-terms document crawler
//!
//! This crate implements a crawler that walks an insurer's website breadth
//! first, classifies anchors that point at general policy-terms ("OWU")
//! documents, downloads the matching PDF files, and records a JSON manifest
//! with the response headers used to detect future changes.

pub mod config;
pub mod crawler;
pub mod manifest;
pub mod url;

use thiserror::Error;

/// Main error type for crawl operations
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP status {status} for {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Download of {url} failed with status {status}")]
    Download {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Response from {url} is missing required header {name}")]
    MissingHeader { url: String, name: &'static str },

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("Manifest serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid seed URL {url}: {source}")]
    InvalidSeed {
        url: String,
        #[source]
        source: ::url::ParseError,
    },

    #[error("Unsupported seed URL scheme \"{0}\" (expected http or https)")]
    UnsupportedScheme(String),

    #[error("Seed URL has no host: {0}")]
    MissingHost(String),
}

/// Result type alias for crawl operations
pub type Result<T> = std::result::Result<T, CrawlError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use crate::config::CrawlConfig;
pub use crate::crawler::{crawl, CrawlEngine, CrawlSummary};
pub use crate::manifest::{DocumentRecord, FilteredHeaders};
