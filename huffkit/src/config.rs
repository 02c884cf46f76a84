//! Limits applied to caller-supplied text and trees.

use crate::error::{HuffmanError, Result};

/// Codec configuration parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    /// Maximum input length in characters, `None` for no limit.
    pub max_input_chars: Option<usize>,
    /// Maximum depth of a deserialized tree (root is depth 0).
    ///
    /// Bounds recursion when rebuilding trees received from other processes.
    pub max_tree_depth: usize,
}

impl CodecConfig {
    /// Default limits.
    ///
    /// - 1,048,576 characters per call
    /// - Trees up to 512 levels deep
    pub const DEFAULT: Self = Self {
        max_input_chars: Some(1 << 20),
        max_tree_depth: 512,
    };

    /// No input or depth limit.
    pub const UNLIMITED: Self = Self {
        max_input_chars: None,
        max_tree_depth: usize::MAX,
    };

    /// Create a new configuration.
    pub fn new(max_input_chars: Option<usize>, max_tree_depth: usize) -> Self {
        Self {
            max_input_chars,
            max_tree_depth,
        }
    }

    /// Check `text` against the input limit.
    pub fn check_input(&self, text: &str) -> Result<()> {
        if let Some(limit) = self.max_input_chars {
            let length = text.chars().count();
            if length > limit {
                return Err(HuffmanError::input_too_long(length, limit));
            }
        }
        Ok(())
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
