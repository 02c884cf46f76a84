//! Symbol frequency counting.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Occurrence count of one distinct symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrequencyEntry {
    /// The symbol.
    pub symbol: char,
    /// Number of occurrences in the input.
    pub count: u64,
}

impl FrequencyEntry {
    /// Create a new entry.
    pub fn new(symbol: char, count: u64) -> Self {
        Self { symbol, count }
    }
}

/// Count symbol occurrences in `text`.
///
/// Entries are sorted ascending by count. Symbols with equal counts keep the
/// order in which they first appear in `text`, so the tree built from the
/// result has a reproducible shape.
pub fn count(text: &str) -> Vec<FrequencyEntry> {
    let mut index: HashMap<char, usize> = HashMap::new();
    let mut entries: Vec<FrequencyEntry> = Vec::new();

    for symbol in text.chars() {
        match index.get(&symbol) {
            Some(&slot) => entries[slot].count += 1,
            None => {
                index.insert(symbol, entries.len());
                entries.push(FrequencyEntry::new(symbol, 1));
            }
        }
    }

    // Stable: equal counts stay in first-occurrence order.
    entries.sort_by_key(|entry| entry.count);
    entries
}

/// Sum of all counts, i.e. the input length in symbols.
pub fn total(entries: &[FrequencyEntry]) -> u64 {
    entries.iter().map(|entry| entry.count).sum()
}
