// Copyright (c) 2025 Lexicode Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration for the Huffman codec.

use serde::{Deserialize, Serialize};

/// Configuration for the Huffman codec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HuffmanConfig {
    /// Reject trailing bits that never complete a code.
    /// When disabled they are dropped without output.
    pub strict_decode: bool,
}

impl Default for HuffmanConfig {
    fn default() -> Self {
        Self {
            strict_decode: true,
        }
    }
}

impl HuffmanConfig {
    /// Create a new default configuration.
    ///
    /// Default values:
    /// - strict_decode: true
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether decoding fails on trailing bits that never complete a code.
    pub fn with_strict_decode(mut self, strict_decode: bool) -> Self {
        self.strict_decode = strict_decode;
        self
    }
}
