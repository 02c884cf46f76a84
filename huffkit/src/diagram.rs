//! Graphviz DOT source for a tree.
//!
//! Only the diagram text is produced here; rasterizing it (e.g. `dot -Tpng`)
//! is left to the caller.

use crate::tree::Node;
use std::fmt;

/// DOT rendering of a tree, via [`fmt::Display`].
///
/// Nodes are numbered in pre-order starting at 0. Leaves are labelled with
/// their symbol and weight on two lines, internal nodes with their weight,
/// and edges with the bit they consume.
#[derive(Debug, Clone, Copy)]
pub struct Dot<'a> {
    root: &'a Node,
    name: &'a str,
}

impl<'a> Dot<'a> {
    /// Diagram of `root` named `huffman_tree`.
    pub fn new(root: &'a Node) -> Self {
        Self {
            root,
            name: "huffman_tree",
        }
    }

    /// Set the graph name.
    pub fn with_name(mut self, name: &'a str) -> Self {
        self.name = name;
        self
    }
}

impl fmt::Display for Dot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph \"{}\" {{", escape(self.name))?;
        writeln!(f, "\trankdir=TB")?;
        let mut next_id = 0;
        write_node(f, self.root, &mut next_id)?;
        writeln!(f, "}}")
    }
}

fn write_node(f: &mut fmt::Formatter<'_>, node: &Node, next_id: &mut usize) -> fmt::Result {
    let id = *next_id;
    *next_id += 1;

    match node {
        Node::Leaf { symbol, weight } => {
            writeln!(
                f,
                "\t{id} [label=\"{}\\n{weight}\"]",
                escape(&symbol.to_string())
            )
        }
        Node::Internal {
            weight,
            left,
            right,
        } => {
            writeln!(f, "\t{id} [label=\"{weight}\"]")?;
            for (bit, child) in [('0', left), ('1', right)] {
                let child_id = *next_id;
                write_node(f, child, next_id)?;
                writeln!(f, "\t{id} -> {child_id} [label=\"{bit}\"]")?;
            }
            Ok(())
        }
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\\\n"),
            '\r' => escaped.push_str("\\\\r"),
            '\t' => escaped.push_str("\\\\t"),
            other => escaped.push(other),
        }
    }
    escaped
}
