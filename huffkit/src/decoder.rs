//! Bit-string to text decoding.

use crate::codes::SINGLE_SYMBOL_CODE;
use crate::error::{HuffmanError, Result};
use crate::tree::Node;
use tracing::debug;

/// Decode `payload` by walking `root`.
///
/// Bit `0` descends left and `1` descends right; reaching a leaf emits its
/// symbol and restarts at the root. An empty payload decodes to an empty
/// string.
///
/// A root that is itself a leaf decodes each `0` as one occurrence of its
/// symbol, matching the code assigned by [`generate`].
///
/// # Errors
///
/// [`HuffmanError::MalformedPayload`] if the payload contains anything but
/// `0` and `1`, ends part way through a code, or uses `1` against a
/// single-leaf tree.
///
/// [`generate`]: crate::codes::generate
pub fn decode(payload: &str, root: &Node) -> Result<String> {
    let text = match root {
        Node::Leaf { symbol, .. } => decode_single(payload, *symbol)?,
        Node::Internal { .. } => decode_walk(payload, root)?,
    };

    debug!(
        bits = payload.len(),
        symbols = text.chars().count(),
        "decoded payload"
    );
    Ok(text)
}

fn decode_single(payload: &str, symbol: char) -> Result<String> {
    let mut text = String::with_capacity(payload.len() * symbol.len_utf8());

    for (position, bit) in payload.chars().enumerate() {
        match bit {
            '0' => text.push(symbol),
            '1' => {
                return Err(HuffmanError::malformed_payload(
                    position,
                    format!("single-symbol tree only accepts code {SINGLE_SYMBOL_CODE:?}"),
                ));
            }
            other => return Err(invalid_bit(position, other)),
        }
    }

    Ok(text)
}

fn decode_walk(payload: &str, root: &Node) -> Result<String> {
    let mut text = String::new();
    let mut node = root;
    let mut code_start = 0;

    for (position, bit) in payload.chars().enumerate() {
        node = match (node, bit) {
            (Node::Internal { left, .. }, '0') => left.as_ref(),
            (Node::Internal { right, .. }, '1') => right.as_ref(),
            (Node::Internal { .. }, other) => return Err(invalid_bit(position, other)),
            (Node::Leaf { .. }, _) => unreachable!("walk restarts at the root after each leaf"),
        };

        if let Node::Leaf { symbol, .. } = node {
            text.push(*symbol);
            node = root;
            code_start = position + 1;
        }
    }

    if !std::ptr::eq(node, root) {
        return Err(HuffmanError::malformed_payload(
            code_start,
            "trailing bits do not resolve to a symbol",
        ));
    }

    Ok(text)
}

fn invalid_bit(position: usize, found: char) -> HuffmanError {
    HuffmanError::malformed_payload(position, format!("expected '0' or '1', found {found:?}"))
}
