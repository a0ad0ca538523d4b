// Copyright (c) 2025 Lexicode Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Core implementation of the Huffman codec.

use tracing::{debug, warn};

use super::config::HuffmanConfig;
use super::error::{HuffmanError, HuffmanResult};
use super::table::CodeTable;

/// Huffman encoder/decoder over single characters.
///
/// Each `encode` call rebuilds the code table from its own plaintext;
/// `decode` interprets bits with the table of the most recent `encode` on
/// the same instance. Tables are never exchanged between instances.
#[derive(Debug, Clone, Default)]
pub struct HuffmanCodec {
    table: CodeTable,
    config: HuffmanConfig,
}

impl HuffmanCodec {
    /// Creates a codec with default configuration and an empty table.
    pub fn new() -> Self {
        Self::with_config(HuffmanConfig::default())
    }

    /// Creates a codec with the given configuration and an empty table.
    pub fn with_config(config: HuffmanConfig) -> Self {
        Self {
            table: CodeTable::default(),
            config,
        }
    }

    /// Returns the configuration of this codec.
    pub fn config(&self) -> &HuffmanConfig {
        &self.config
    }

    /// Returns the code table built by the most recent `encode`.
    pub fn code_table(&self) -> &CodeTable {
        &self.table
    }

    /// Returns the code assigned to `c` by the most recent `encode`.
    pub fn code_for(&self, c: char) -> Option<&str> {
        self.table.code_for(c)
    }

    /// Builds a fresh code table from `plaintext` and encodes it.
    ///
    /// The output consists only of `'0'` and `'1'`. An empty plaintext gives
    /// an empty output and an empty table.
    pub fn encode(&mut self, plaintext: &str) -> String {
        self.table = CodeTable::build(plaintext);

        // Every character has a code: the table was built from this text.
        let encoded: String = plaintext
            .chars()
            .filter_map(|c| self.table.code_for(c))
            .collect();

        debug!(
            chars = plaintext.chars().count(),
            bits = encoded.len(),
            "encoded text"
        );
        encoded
    }

    /// Encodes `text` with the current table without rebuilding it.
    ///
    /// # Errors
    ///
    /// `HuffmanError::UnknownSymbol` for the first character of `text` that
    /// is not in the current alphabet.
    pub fn encode_with_table(&self, text: &str) -> HuffmanResult<String> {
        text.chars()
            .map(|c| self.table.code_for(c).ok_or(HuffmanError::UnknownSymbol(c)))
            .collect()
    }

    /// Decodes a bit string with the current table.
    ///
    /// Bits are accumulated into a candidate code until it matches a table
    /// entry; the match is unambiguous because the table is prefix-free.
    ///
    /// # Errors
    ///
    /// * `HuffmanError::InvalidBit` - A character other than `'0'` or `'1'`.
    /// * `HuffmanError::UnknownCode` - The candidate reached the longest code
    ///   length without matching; it can never resolve. Raised in both modes.
    /// * `HuffmanError::DanglingCode` - Trailing bits never completed a code
    ///   and `strict_decode` is enabled.
    pub fn decode(&self, bits: &str) -> HuffmanResult<String> {
        let max_code_len = self.table.max_code_len();
        let mut candidate = String::new();
        let mut start = 0;
        let mut plaintext = String::new();

        for (position, bit) in bits.chars().enumerate() {
            if bit != '0' && bit != '1' {
                return Err(HuffmanError::InvalidBit { bit, position });
            }

            if candidate.is_empty() {
                start = position;
            }
            candidate.push(bit);

            if let Some(c) = self.table.symbol_for(&candidate) {
                plaintext.push(c);
                candidate.clear();
            } else if candidate.len() >= max_code_len {
                return Err(HuffmanError::UnknownCode {
                    bits: candidate,
                    position: start,
                });
            }
        }

        if !candidate.is_empty() {
            if self.config.strict_decode {
                return Err(HuffmanError::DanglingCode { bits: candidate });
            }
            warn!(dropped = candidate.len(), "dropping unresolved trailing bits");
        }

        Ok(plaintext)
    }
}
