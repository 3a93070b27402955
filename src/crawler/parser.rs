//! Anchor extraction
//!
//! The traversal only cares about `<a>` elements with an `href`; anchors
//! without one cannot lead anywhere. Text is flattened across nested
//! elements and whitespace-normalized, since it feeds both classification
//! and the manifest.

use scraper::{Html, Selector};

/// One anchor element: its raw href (possibly relative) and its
/// normalized text content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    pub href: String,
    pub text: String,
}

/// Extracts every `<a href>` from an HTML document.
pub fn extract_anchors(html: &str) -> Vec<Anchor> {
    let document = Html::parse_document(html);

    let selector = match Selector::parse("a[href]") {
        Ok(s) => s,
        Err(_) => return Vec::new(),
    };

    document
        .select(&selector)
        .filter_map(|element| {
            let href = element.value().attr("href")?;
            let text = element.text().collect::<String>();
            Some(Anchor {
                href: href.to_string(),
                text: normalize_text(&text),
            })
        })
        .collect()
}

/// Collapses newlines into spaces and trims the ends, so anchor text
/// spread over several lines of markup compares and prints as one line.
fn normalize_text(text: &str) -> String {
    text.replace('\n', " ").trim().to_string()
}
