//! Transport form of a Huffman tree.
//!
//! A [`SerializedTree`] is the nested record handed across process or request
//! boundaries so a later, independent call can decode a payload:
//!
//! ```text
//! { "char": string|null, "freq": integer,
//!   "left": SerializedTree|null, "right": SerializedTree|null }
//! ```
//!
//! `char` is null for internal nodes. On input, a record is a leaf exactly
//! when both children are null; the `char` of an internal record is ignored.

use crate::config::CodecConfig;
use crate::error::{HuffmanError, Result};
use crate::tree::Node;
use serde::{Deserialize, Serialize};

/// Nested record form of a [`Node`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedTree {
    /// Symbol of a leaf, `None` for internal nodes.
    #[serde(rename = "char")]
    pub symbol: Option<String>,
    /// Node weight. Negative values are rejected by [`deserialize`].
    #[serde(rename = "freq")]
    pub weight: i64,
    /// Subtree reached by bit `0`.
    pub left: Option<Box<SerializedTree>>,
    /// Subtree reached by bit `1`.
    pub right: Option<Box<SerializedTree>>,
}

impl SerializedTree {
    /// Convert a tree to its record form. See [`serialize`].
    pub fn from_node(root: &Node) -> Self {
        serialize(root)
    }

    /// Rebuild the tree with default limits. See [`deserialize`].
    pub fn to_node(&self) -> Result<Node> {
        deserialize(self)
    }

    /// Parse a record from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render the record as compact JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Render the record as indented JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Convert `root` to its record form.
///
/// Weights above `i64::MAX` saturate; trees built from text never get there.
pub fn serialize(root: &Node) -> SerializedTree {
    match root {
        Node::Leaf { symbol, weight } => SerializedTree {
            symbol: Some(symbol.to_string()),
            weight: wire_weight(*weight),
            left: None,
            right: None,
        },
        Node::Internal {
            weight,
            left,
            right,
        } => SerializedTree {
            symbol: None,
            weight: wire_weight(*weight),
            left: Some(Box::new(serialize(left))),
            right: Some(Box::new(serialize(right))),
        },
    }
}

/// Rebuild a tree from its record form using [`CodecConfig::DEFAULT`].
///
/// # Errors
///
/// See [`deserialize_with`].
pub fn deserialize(record: &SerializedTree) -> Result<Node> {
    deserialize_with(record, &CodecConfig::DEFAULT)
}

/// Rebuild a tree from its record form.
///
/// # Errors
///
/// [`HuffmanError::MalformedTree`] if a record has exactly one child, a
/// negative weight, a leaf `char` that is not exactly one character, or if
/// the tree is deeper than `config.max_tree_depth`.
pub fn deserialize_with(record: &SerializedTree, config: &CodecConfig) -> Result<Node> {
    rebuild(record, 0, config.max_tree_depth)
}

fn rebuild(record: &SerializedTree, depth: usize, max_depth: usize) -> Result<Node> {
    if depth > max_depth {
        return Err(HuffmanError::malformed_tree(format!(
            "tree deeper than {max_depth} levels"
        )));
    }

    let weight = u64::try_from(record.weight).map_err(|_| {
        HuffmanError::malformed_tree(format!(
            "negative weight {} at depth {depth}",
            record.weight
        ))
    })?;

    match (&record.left, &record.right) {
        (None, None) => {
            let symbol = leaf_symbol(record.symbol.as_deref(), depth)?;
            Ok(Node::leaf(symbol, weight))
        }
        (Some(left), Some(right)) => Ok(Node::internal(
            weight,
            rebuild(left, depth + 1, max_depth)?,
            rebuild(right, depth + 1, max_depth)?,
        )),
        _ => Err(HuffmanError::malformed_tree(format!(
            "node at depth {depth} has exactly one child"
        ))),
    }
}

fn leaf_symbol(symbol: Option<&str>, depth: usize) -> Result<char> {
    let symbol = symbol.ok_or_else(|| {
        HuffmanError::malformed_tree(format!("leaf at depth {depth} has no symbol"))
    })?;

    let mut chars = symbol.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(HuffmanError::malformed_tree(format!(
            "leaf at depth {depth} has symbol {symbol:?}, expected one character"
        ))),
    }
}

fn wire_weight(weight: u64) -> i64 {
    i64::try_from(weight).unwrap_or(i64::MAX)
}
