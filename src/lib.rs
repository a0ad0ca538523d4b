//! Lexicode Library
//!
//! This library contains two independent in-memory text structures:
//! a prefix tree with prefix counting and a Huffman text codec. Around them
//! it carries the configuration loader and error types used by the
//! `lexicode` binary, which can also be reused by other projects.
//!
//! # Example
//!
//! ```
//! use lexicode_lib::data_structures::{HuffmanCodec, PrefixTree};
//!
//! let mut tree: PrefixTree = ["apk", "app", "apple", "arp", "array"].into_iter().collect();
//! assert_eq!(tree.count_prefix("ap"), 3);
//! assert!(tree.delete("apk"));
//!
//! let mut codec = HuffmanCodec::new();
//! let bits = codec.encode("abbdhabdbbbad");
//! assert_eq!(codec.decode(&bits).unwrap(), "abbdhabdbbbad");
//! ```

pub mod config;
pub mod data_structures;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Lexicode.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
