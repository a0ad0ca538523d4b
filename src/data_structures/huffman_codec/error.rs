// Copyright (c) 2025 Lexicode Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Huffman codec.

/// Errors that can occur during Huffman codec operations.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum HuffmanError {
    /// The bit string contains a character other than `0` or `1`.
    #[error("Invalid bit '{bit}' at position {position}")]
    InvalidBit {
        /// The offending character.
        bit: char,
        /// Character offset within the bit string.
        position: usize,
    },

    /// A run of bits as long as the longest code matches no code.
    #[error("Bits '{bits}' starting at position {position} match no code")]
    UnknownCode {
        /// The unresolvable bits.
        bits: String,
        /// Character offset of the first of those bits.
        position: usize,
    },

    /// Trailing bits never resolved to a code of the current table.
    #[error("Dangling code '{bits}' at end of input")]
    DanglingCode {
        /// The unresolved trailing bits.
        bits: String,
    },

    /// A character has no code in the current table.
    #[error("Symbol {0:?} is not in the code table")]
    UnknownSymbol(char),
}

/// Result type for Huffman codec operations.
pub type HuffmanResult<T> = Result<T, HuffmanError>;
