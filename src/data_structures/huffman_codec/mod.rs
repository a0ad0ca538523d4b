// Copyright (c) 2025 Lexicode Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Huffman codec for text.
//!
//! This module compresses a string into a bit-pattern-per-character code and
//! reconstructs the original string losslessly. Codes are derived from the
//! character frequencies of the text being encoded and stay private to the
//! codec instance that built them.
//!
//! # Features
//!
//! - Prefix-free codes built with a frequency-keyed priority queue
//! - Deterministic tie-breaking: equal frequencies merge in creation order
//! - Texts with a single distinct character encode one `0` per character
//! - Strict decoding rejects trailing bits that never complete a code
//!
//! # Example
//!
//! ```
//! use lexicode_lib::data_structures::huffman_codec::HuffmanCodec;
//!
//! let mut codec = HuffmanCodec::new();
//! let bits = codec.encode("abbdhabdbbbad");
//!
//! assert!(bits.chars().all(|b| b == '0' || b == '1'));
//! assert!(codec.code_table().is_prefix_free());
//! assert_eq!(codec.decode(&bits).unwrap(), "abbdhabdbbbad");
//! ```

mod codec;
mod config;
mod error;
mod symbol;
mod table;

// Re-exports
pub use codec::HuffmanCodec;
pub use config::HuffmanConfig;
pub use error::{HuffmanError, HuffmanResult};
pub use symbol::{frequencies, WeightedSymbol};
pub use table::CodeTable;

#[cfg(test)]
mod tests;
