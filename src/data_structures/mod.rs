//! Data structures for Lexicode.
//!
//! Two independent components with no shared state:
//! - [`prefix_tree`]: a trie with insert, search, delete and prefix counting
//! - [`huffman_codec`]: a per-instance Huffman encoder/decoder for text

pub mod huffman_codec;
pub mod prefix_tree;

// Re-export common data structures
pub use huffman_codec::{HuffmanCodec, HuffmanError, HuffmanResult};
pub use prefix_tree::{PrefixTree, PrefixTreeError, PrefixTreeResult};
