//! URL handling helpers
//!
//! Domain (authority) extraction for skip-list matching and dedup, and
//! derivation of the output names from the seed URL.

mod domain;
mod naming;

pub use domain::authority;
pub use naming::{download_dir, manifest_path, site_slug};
