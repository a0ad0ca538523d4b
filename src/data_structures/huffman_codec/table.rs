// Copyright (c) 2025 Lexicode Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Code table construction.
//!
//! The table is derived by repeatedly merging the two lowest-frequency
//! symbols. The first symbol popped is the right branch and every character
//! in it gets a `1` prepended to its code; the second is the left branch and
//! gets a `0`. Each code therefore spells the root-to-leaf path of its
//! character in the implied merge tree, which makes the set prefix-free.

use std::collections::BinaryHeap;

use fnv::FnvHashMap;
use tracing::debug;

use super::symbol::{frequencies, QueuedSymbol, WeightedSymbol};

/// Code assigned when the text has a single distinct character.
const SINGLE_SYMBOL_CODE: &str = "0";

/// Bidirectional code table owned by one codec.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    /// Character to bit-string code
    encode: FnvHashMap<char, String>,

    /// Bit-string code to character, the exact inverse of `encode`
    decode: FnvHashMap<String, char>,
}

impl CodeTable {
    /// Builds the code table for `plaintext`.
    ///
    /// An empty text yields an empty table. A text with a single distinct
    /// character never enters the merge loop; that character gets code `"0"`.
    pub fn build(plaintext: &str) -> Self {
        let symbols = frequencies(plaintext);

        let encode = match symbols.len() {
            0 => FnvHashMap::default(),
            1 => symbols
                .iter()
                .flat_map(|symbol| symbol.fragment.chars())
                .map(|c| (c, SINGLE_SYMBOL_CODE.to_string()))
                .collect(),
            _ => Self::merge_codes(symbols),
        };

        let decode = encode
            .iter()
            .map(|(&c, code)| (code.clone(), c))
            .collect();

        let table = Self { encode, decode };
        debug!(
            symbols = table.len(),
            max_code_len = table.max_code_len(),
            "built code table"
        );
        table
    }

    fn merge_codes(symbols: Vec<WeightedSymbol>) -> FnvHashMap<char, String> {
        // Bits are appended in merge order, so every code is built back to front.
        let mut reversed: FnvHashMap<char, String> = FnvHashMap::default();

        let mut sequence = symbols.len();
        let mut queue: BinaryHeap<QueuedSymbol> = symbols
            .into_iter()
            .enumerate()
            .map(|(sequence, symbol)| QueuedSymbol { symbol, sequence })
            .collect();

        while queue.len() > 1 {
            let (Some(right), Some(left)) = (queue.pop(), queue.pop()) else {
                break;
            };

            for c in right.symbol.fragment.chars() {
                reversed.entry(c).or_default().push('1');
            }
            for c in left.symbol.fragment.chars() {
                reversed.entry(c).or_default().push('0');
            }

            queue.push(QueuedSymbol {
                symbol: WeightedSymbol::merge(left.symbol, right.symbol),
                sequence,
            });
            sequence += 1;
        }

        reversed
            .into_iter()
            .map(|(c, bits)| (c, bits.chars().rev().collect()))
            .collect()
    }

    /// Returns the code of `c`, if `c` is in the alphabet.
    pub fn code_for(&self, c: char) -> Option<&str> {
        self.encode.get(&c).map(String::as_str)
    }

    /// Returns the character whose code is exactly `code`.
    pub fn symbol_for(&self, code: &str) -> Option<char> {
        self.decode.get(code).copied()
    }

    /// Number of distinct characters in the table.
    pub fn len(&self) -> usize {
        self.encode.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.encode.is_empty()
    }

    /// Length of the longest code, `0` for an empty table.
    pub fn max_code_len(&self) -> usize {
        self.encode.values().map(String::len).max().unwrap_or(0)
    }

    /// Iterates over `(character, code)` pairs sorted by character.
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> {
        let mut entries: Vec<(char, &str)> = self
            .encode
            .iter()
            .map(|(&c, code)| (c, code.as_str()))
            .collect();
        entries.sort_unstable_by_key(|&(c, _)| c);
        entries.into_iter()
    }

    /// Checks that no code is a prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        let mut codes: Vec<&str> = self.decode.keys().map(String::as_str).collect();
        codes.sort_unstable();
        // After sorting, any prefix pair also shows up between neighbours.
        codes.windows(2).all(|pair| !pair[1].starts_with(pair[0]))
    }
}
