//! Huffman engine error types.

use thiserror::Error;

/// Errors returned by the Huffman engine.
#[derive(Debug, Error)]
pub enum HuffmanError {
    /// Input the builder cannot work with (no symbols, empty field).
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Description of the problem.
        message: String,
    },

    /// Symbol has no entry in the code table.
    #[error("Unknown symbol {symbol:?} at position {position}")]
    UnknownSymbol {
        /// The symbol that could not be encoded.
        symbol: char,
        /// Character position of the symbol in the input text.
        position: usize,
    },

    /// Bit string does not resolve cleanly to leaves of the tree.
    #[error("Malformed payload at bit {bit_position}: {message}")]
    MalformedPayload {
        /// Bit position where decoding failed.
        bit_position: usize,
        /// Description of the failure.
        message: String,
    },

    /// Serialized tree violates the tree invariants.
    #[error("Malformed tree: {message}")]
    MalformedTree {
        /// Description of the violation.
        message: String,
    },

    /// Input exceeds the configured size limit.
    #[error("Input too long: {length} characters exceeds limit of {limit}")]
    InputTooLong {
        /// Length of the rejected input in characters.
        length: usize,
        /// Configured maximum.
        limit: usize,
    },

    /// Wire-format (JSON) error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for Huffman operations.
pub type Result<T> = std::result::Result<T, HuffmanError>;

impl HuffmanError {
    /// Create an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create an unknown symbol error.
    pub fn unknown_symbol(symbol: char, position: usize) -> Self {
        Self::UnknownSymbol { symbol, position }
    }

    /// Create a malformed payload error.
    pub fn malformed_payload(bit_position: usize, message: impl Into<String>) -> Self {
        Self::MalformedPayload {
            bit_position,
            message: message.into(),
        }
    }

    /// Create a malformed tree error.
    pub fn malformed_tree(message: impl Into<String>) -> Self {
        Self::MalformedTree {
            message: message.into(),
        }
    }

    /// Create an input too long error.
    pub fn input_too_long(length: usize, limit: usize) -> Self {
        Self::InputTooLong { length, limit }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HuffmanError::unknown_symbol('z', 3);
        assert_eq!(err.to_string(), "Unknown symbol 'z' at position 3");

        let err = HuffmanError::malformed_payload(7, "trailing bits");
        assert!(err.to_string().contains("bit 7"));

        let err = HuffmanError::input_too_long(10, 4);
        assert!(err.to_string().contains("limit of 4"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: HuffmanError = json_err.into();
        assert!(matches!(err, HuffmanError::Json(_)));
    }
}
