//! The embed list store
//!
//! An ordered, append/remove collection of accepted URLs - the only mutable
//! state in the core. Insertion order is display order. Entries have no
//! identity beyond their position: removing one shifts everything after it
//! down by one. Duplicates are allowed and rendered twice.

/// A single accepted URL held in the board
///
/// Never mutated after creation; platform and orientation are recomputed
/// from the URL every time the entry is displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedEntry {
    url: String,
}

impl EmbedEntry {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Ordered sequence of embed entries
///
/// Every member passed URL validation and platform detection at insertion
/// time; classification is not re-checked retroactively.
#[derive(Debug, Clone, Default)]
pub struct Board {
    entries: Vec<EmbedEntry>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a URL to the end of the board
    pub fn push(&mut self, url: impl Into<String>) {
        self.entries.push(EmbedEntry::new(url));
    }

    /// Remove the entry at the given position
    ///
    /// Silently does nothing when the index is out of range.
    pub fn remove_at(&mut self, index: usize) {
        if index < self.entries.len() {
            self.entries.remove(index);
        } else {
            tracing::debug!(index, len = self.entries.len(), "remove_at out of range");
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&EmbedEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EmbedEntry> {
        self.entries.iter()
    }
}
