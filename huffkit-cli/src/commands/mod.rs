//! Command implementations for the huffkit CLI.

pub mod decode;
pub mod encode;
pub mod freq;
pub mod tree;

pub use decode::cmd_decode;
pub use encode::{EncodeOptions, cmd_encode};
pub use freq::cmd_freq;
pub use tree::cmd_tree;
