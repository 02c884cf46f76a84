//! Code table generation.

use crate::tree::Node;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Code assigned to the only symbol of a single-leaf tree.
pub const SINGLE_SYMBOL_CODE: &str = "0";

/// Mapping from symbol to its bit string.
///
/// Serializes as a plain JSON object keyed by symbol.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CodeTable {
    codes: BTreeMap<char, String>,
}

impl CodeTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign `code` to `symbol`, replacing any previous code.
    pub fn insert(&mut self, symbol: char, code: impl Into<String>) {
        self.codes.insert(symbol, code.into());
    }

    /// Code for `symbol`.
    pub fn get(&self, symbol: char) -> Option<&str> {
        self.codes.get(&symbol).map(String::as_str)
    }

    /// Number of symbols in the table.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate over `(symbol, code)` pairs in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> {
        self.codes.iter().map(|(&symbol, code)| (symbol, code.as_str()))
    }

    /// Whether no code is a prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        // In sorted order a prefix sorts directly before some code it prefixes.
        let mut sorted: Vec<&str> = self.codes.values().map(String::as_str).collect();
        sorted.sort_unstable();
        sorted
            .windows(2)
            .all(|pair| !pair[1].starts_with(pair[0]))
    }
}

impl FromIterator<(char, String)> for CodeTable {
    fn from_iter<I: IntoIterator<Item = (char, String)>>(iter: I) -> Self {
        Self {
            codes: iter.into_iter().collect(),
        }
    }
}

/// Derive the code table for `root`.
///
/// Descending left appends `0`, right appends `1`. A root that is itself a
/// leaf gets [`SINGLE_SYMBOL_CODE`], so every symbol costs at least one bit
/// and the payload length still carries the symbol count.
pub fn generate(root: &Node) -> CodeTable {
    let mut table = CodeTable::new();

    match root {
        Node::Leaf { symbol, .. } => table.insert(*symbol, SINGLE_SYMBOL_CODE),
        Node::Internal { .. } => {
            let mut prefix = String::new();
            walk(root, &mut prefix, &mut table);
        }
    }

    debug!(symbols = table.len(), "generated code table");
    table
}

fn walk(node: &Node, prefix: &mut String, table: &mut CodeTable) {
    match node {
        Node::Leaf { symbol, .. } => table.insert(*symbol, prefix.clone()),
        Node::Internal { left, right, .. } => {
            prefix.push('0');
            walk(left, prefix, table);
            prefix.pop();

            prefix.push('1');
            walk(right, prefix, table);
            prefix.pop();
        }
    }
}
