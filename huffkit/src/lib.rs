//! # huffkit: Pure Rust Huffman Coding
//!
//! This crate turns text into a Huffman-coded bit string plus a portable code
//! tree, and turns the pair back into the original text.
//!
//! ## Pipeline
//!
//! ```text
//! text ─► frequency::count ─► tree::build ─► codes::generate ─► encoder::encode ─► bits
//!                                  │
//!                                  └─► serial::serialize ─► SerializedTree (JSON)
//!
//! bits + SerializedTree ─► serial::deserialize ─► decoder::decode ─► text
//! ```
//!
//! - **Deterministic**: ties between equal weights are broken by insertion
//!   order, so the same text always produces the same tree and codes
//! - **Bit strings, not packed bits**: payloads are strings of `'0'`/`'1'`
//! - **Single-symbol input**: a lone leaf gets the one-bit code `"0"`, so
//!   `"aaaa"` encodes to `"0000"` and decodes back unchanged
//! - **Stateless**: every call owns its data; nothing is shared between calls
//!
//! ## Example
//!
//! ```rust
//! use huffkit::{decode_text, encode_text};
//!
//! let report = encode_text("abracadabra").unwrap();
//! assert_eq!(report.encoded.len(), 23);
//! assert_eq!(report.decoded, "abracadabra");
//!
//! // The serialized tree is all a later call needs to decode.
//! let json = report.tree.to_json().unwrap();
//! let tree = huffkit::SerializedTree::from_json(&json).unwrap();
//! let decoded = decode_text(&report.encoded, &tree).unwrap();
//! assert_eq!(decoded.decoded, "abracadabra");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod codes;
mod config;
pub mod decoder;
pub mod diagram;
pub mod encoder;
mod error;
pub mod frequency;
pub mod serial;
pub mod tree;

pub use codes::{CodeTable, SINGLE_SYMBOL_CODE, generate};
pub use config::CodecConfig;
pub use decoder::decode;
pub use diagram::Dot;
pub use encoder::encode;
pub use error::{HuffmanError, Result};
pub use frequency::{FrequencyEntry, count};
pub use serial::{SerializedTree, deserialize, deserialize_with, serialize};
pub use tree::{Node, build};

use serde::{Deserialize, Serialize};

/// Size figures for one encoded text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeStats {
    /// Number of symbols (characters) in the text.
    pub symbols: usize,
    /// Number of distinct symbols.
    pub distinct: usize,
    /// Bits needed by the text as UTF-8.
    pub original_bits: usize,
    /// Bits in the encoded payload.
    pub encoded_bits: usize,
    /// Mean code length per symbol.
    pub average_code_length: f64,
    /// `encoded_bits / original_bits`.
    pub ratio: f64,
}

impl CodeStats {
    fn new(text: &str, distinct: usize, encoded: &str) -> Self {
        let symbols = text.chars().count();
        let original_bits = text.len() * 8;
        let encoded_bits = encoded.len();

        Self {
            symbols,
            distinct,
            original_bits,
            encoded_bits,
            average_code_length: if symbols > 0 {
                encoded_bits as f64 / symbols as f64
            } else {
                0.0
            },
            ratio: if original_bits > 0 {
                encoded_bits as f64 / original_bits as f64
            } else {
                0.0
            },
        }
    }
}

/// Result of encoding one text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodeReport {
    /// The input text.
    pub original: String,
    /// Encoded bit string.
    pub encoded: String,
    /// `encoded` decoded again with the same tree.
    pub decoded: String,
    /// Symbol to code mapping.
    pub codes: CodeTable,
    /// Portable form of the tree.
    pub tree: SerializedTree,
    /// Symbol counts, ascending.
    pub frequencies: Vec<FrequencyEntry>,
    /// Size figures.
    pub stats: CodeStats,
}

/// Standalone decode input: a payload and the tree it was encoded with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeRequest {
    /// Encoded bit string.
    pub encoded: String,
    /// Serialized tree produced by the encoding call.
    pub tree: SerializedTree,
}

/// Result of a standalone decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeReport {
    /// Encoded bit string.
    pub encoded: String,
    /// Decoded text.
    pub decoded: String,
}

/// Run the full pipeline on `text` with default limits.
///
/// # Example
///
/// ```rust
/// use huffkit::encode_text;
///
/// let report = encode_text("aaaa").unwrap();
/// assert_eq!(report.encoded, "0000");
/// assert_eq!(report.decoded, "aaaa");
/// ```
pub fn encode_text(text: &str) -> Result<EncodeReport> {
    encode_text_with(text, &CodecConfig::DEFAULT)
}

/// Run the full pipeline on `text`.
///
/// Counts symbols, builds the tree, derives codes, encodes, decodes the result
/// again as a check, and serializes the tree.
///
/// # Errors
///
/// - [`HuffmanError::InvalidInput`] if `text` is empty
/// - [`HuffmanError::InputTooLong`] if `text` exceeds `config.max_input_chars`
pub fn encode_text_with(text: &str, config: &CodecConfig) -> Result<EncodeReport> {
    config.check_input(text)?;
    if text.is_empty() {
        return Err(HuffmanError::invalid_input("text must not be empty"));
    }

    let frequencies = count(text);
    let root = build(&frequencies)?;
    let codes = generate(&root);
    let encoded = encode(text, &codes)?;
    let decoded = decode(&encoded, &root)?;
    let stats = CodeStats::new(text, frequencies.len(), &encoded);

    Ok(EncodeReport {
        original: text.to_string(),
        encoded,
        decoded,
        codes,
        tree: serialize(&root),
        frequencies,
        stats,
    })
}

/// Decode `encoded` against a serialized tree with default limits.
///
/// # Example
///
/// ```rust
/// use huffkit::{SerializedTree, decode_text};
///
/// let tree = SerializedTree::from_json(
///     r#"{"char":null,"freq":3,
///         "left":{"char":"a","freq":1,"left":null,"right":null},
///         "right":{"char":"b","freq":2,"left":null,"right":null}}"#,
/// ).unwrap();
/// assert_eq!(decode_text("011", &tree).unwrap().decoded, "abb");
/// ```
pub fn decode_text(encoded: &str, tree: &SerializedTree) -> Result<DecodeReport> {
    decode_text_with(encoded, tree, &CodecConfig::DEFAULT)
}

/// Decode `encoded` against a serialized tree.
///
/// # Errors
///
/// - [`HuffmanError::MalformedTree`] if `tree` violates the tree invariants
/// - [`HuffmanError::MalformedPayload`] if `encoded` does not resolve to leaves
pub fn decode_text_with(
    encoded: &str,
    tree: &SerializedTree,
    config: &CodecConfig,
) -> Result<DecodeReport> {
    let root = deserialize_with(tree, config)?;
    let decoded = decode(encoded, &root)?;

    Ok(DecodeReport {
        encoded: encoded.to_string(),
        decoded,
    })
}

impl DecodeRequest {
    /// Decode this request with default limits.
    pub fn decode(&self) -> Result<DecodeReport> {
        decode_text(&self.encoded, &self.tree)
    }
}
