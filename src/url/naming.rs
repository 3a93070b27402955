//! Output naming derived from the seed URL
//!
//! The manifest lands at `<data_dir>/<slug>.json` and the downloaded
//! documents under `<data_dir>/<slug>/`, where the slug is the seed's
//! authority with the noise trimmed off.

use crate::url::authority;
use std::path::{Path, PathBuf};
use url::Url;

/// Derives the output slug for a site.
///
/// Strips a leading `www.` and then a trailing `.pl` and `.com` from the
/// authority, in that order, so `www.warta.pl` becomes `warta` and
/// `generali.com.pl` becomes `generali`.
pub fn site_slug(url: &Url) -> Option<String> {
    let netloc = authority(url)?;
    let slug = netloc.strip_prefix("www.").unwrap_or(&netloc);
    let slug = slug.strip_suffix(".pl").unwrap_or(slug);
    let slug = slug.strip_suffix(".com").unwrap_or(slug);
    Some(slug.to_string())
}

/// Path of the JSON manifest for a site slug.
pub fn manifest_path(data_dir: &Path, slug: &str) -> PathBuf {
    data_dir.join(format!("{slug}.json"))
}

/// Directory receiving the downloaded documents for a site slug.
pub fn download_dir(data_dir: &Path, slug: &str) -> PathBuf {
    data_dir.join(slug)
}
