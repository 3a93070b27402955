//! Crawl frontier
//!
//! The frontier holds the URLs pending a visit at one depth level. It is
//! rebuilt from scratch while the previous level is processed and then
//! swapped in wholesale; ordering inside a level carries no meaning.

use std::collections::HashSet;

/// One pending visit: a URL plus the chain of pages it was reached
/// through, immediate parent first, seed last.
///
/// The chain is part of the entry's identity. The same URL discovered via
/// two different parents is two distinct entries, which is what lets the
/// manifest keep one record per discovery path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FrontierEntry {
    pub url: String,
    pub parents: Vec<String>,
}

impl FrontierEntry {
    /// The entry the crawl starts from: the seed has no ancestors.
    pub fn seed(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            parents: Vec::new(),
        }
    }

    /// A child entry reached from `parent`, extending its chain.
    pub fn child(url: impl Into<String>, parent: &FrontierEntry) -> Self {
        let mut parents = Vec::with_capacity(parent.parents.len() + 1);
        parents.push(parent.url.clone());
        parents.extend(parent.parents.iter().cloned());
        Self {
            url: url.into(),
            parents,
        }
    }
}

/// The set of entries admitted for one depth level.
#[derive(Debug, Default)]
pub struct Frontier {
    entries: Vec<FrontierEntry>,
    seen: HashSet<FrontierEntry>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an identical `(url, parents)` entry was already admitted.
    pub fn contains(&self, entry: &FrontierEntry) -> bool {
        self.seen.contains(entry)
    }

    /// Admits an entry; duplicates of an already admitted entry are
    /// rejected. Returns whether the entry was newly admitted.
    pub fn insert(&mut self, entry: FrontierEntry) -> bool {
        if !self.seen.insert(entry.clone()) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Consumes the frontier, yielding the entries in admission order.
    pub fn into_entries(self) -> Vec<FrontierEntry> {
        self.entries
    }
}
