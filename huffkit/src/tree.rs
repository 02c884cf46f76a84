//! Huffman tree construction.

use crate::error::{HuffmanError, Result};
use crate::frequency::FrequencyEntry;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use tracing::{debug, trace};

/// A node of a Huffman tree.
///
/// Internal nodes own both children, so a tree is never shared or cyclic
/// and every internal node has exactly two children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Terminal node holding one symbol.
    Leaf {
        /// The symbol.
        symbol: char,
        /// Frequency of the symbol.
        weight: u64,
    },
    /// Node combining two subtrees.
    Internal {
        /// Sum of both children's weights.
        weight: u64,
        /// Subtree reached by bit `0`.
        left: Box<Node>,
        /// Subtree reached by bit `1`.
        right: Box<Node>,
    },
}

impl Node {
    /// Create a leaf.
    pub fn leaf(symbol: char, weight: u64) -> Self {
        Self::Leaf { symbol, weight }
    }

    /// Create an internal node with the given weight.
    pub fn internal(weight: u64, left: Node, right: Node) -> Self {
        Self::Internal {
            weight,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Merge two nodes into a new internal node weighted by their sum.
    pub fn merge(left: Node, right: Node) -> Result<Self> {
        let weight = left
            .weight()
            .checked_add(right.weight())
            .ok_or_else(|| HuffmanError::invalid_input("total weight overflows u64"))?;
        Ok(Self::internal(weight, left, right))
    }

    /// Weight of this node.
    pub fn weight(&self) -> u64 {
        match self {
            Self::Leaf { weight, .. } | Self::Internal { weight, .. } => *weight,
        }
    }

    /// Whether this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }

    /// Symbol of a leaf, `None` for internal nodes.
    pub fn symbol(&self) -> Option<char> {
        match self {
            Self::Leaf { symbol, .. } => Some(*symbol),
            Self::Internal { .. } => None,
        }
    }

    /// Number of leaves under (and including) this node.
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Leaf { .. } => 1,
            Self::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    /// Length of the longest root-to-leaf path. A lone leaf has depth 0.
    pub fn depth(&self) -> usize {
        match self {
            Self::Leaf { .. } => 0,
            Self::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

/// Build a Huffman tree from frequency entries.
///
/// # Algorithm
///
/// 1. Start with one leaf per entry, in entry order
/// 2. Remove the two lightest nodes; ties go to the node inserted first
/// 3. Merge them (first removed on the left) and insert the result last
/// 4. Repeat until a single node remains
///
/// Ordering by `(weight, insertion sequence)` gives the same result as
/// stable-sorting the working list before every merge, at O(n log n).
///
/// A single entry yields a lone leaf.
///
/// # Errors
///
/// [`HuffmanError::InvalidInput`] if `entries` is empty.
pub fn build(entries: &[FrequencyEntry]) -> Result<Node> {
    if entries.is_empty() {
        return Err(HuffmanError::invalid_input(
            "cannot build a tree from an empty frequency set",
        ));
    }

    let mut slots: Vec<Option<Node>> = Vec::with_capacity(entries.len() * 2 - 1);
    let mut heap = BinaryHeap::with_capacity(entries.len());

    for entry in entries {
        heap.push(Reverse((entry.count, slots.len())));
        slots.push(Some(Node::leaf(entry.symbol, entry.count)));
    }

    while heap.len() > 1 {
        let first = take_min(&mut heap, &mut slots)?;
        let second = take_min(&mut heap, &mut slots)?;
        let merged = Node::merge(first, second)?;
        trace!(weight = merged.weight(), slot = slots.len(), "merged nodes");

        heap.push(Reverse((merged.weight(), slots.len())));
        slots.push(Some(merged));
    }

    let root = take_min(&mut heap, &mut slots)?;
    debug!(
        symbols = entries.len(),
        weight = root.weight(),
        depth = root.depth(),
        "built huffman tree"
    );
    Ok(root)
}

fn take_min(
    heap: &mut BinaryHeap<Reverse<(u64, usize)>>,
    slots: &mut [Option<Node>],
) -> Result<Node> {
    heap.pop()
        .and_then(|Reverse((_, slot))| slots.get_mut(slot).and_then(Option::take))
        .ok_or_else(|| HuffmanError::invalid_input("working set exhausted while merging"))
}
