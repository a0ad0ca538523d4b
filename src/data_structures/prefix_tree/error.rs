// Copyright (c) 2025 Lexicode Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the prefix tree.

/// Errors that can occur in prefix tree operations.
///
/// Queries never fail; only mutations that would break a configured limit do.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PrefixTreeError {
    /// Error when a word exceeds the maximum depth allowed.
    #[error("Word '{word}' exceeds maximum trie depth of {max_depth}")]
    WordTooLong {
        /// The word that was too long.
        word: String,
        /// The maximum allowed depth.
        max_depth: usize,
    },
}

/// Result type for prefix tree operations.
pub type PrefixTreeResult<T> = Result<T, PrefixTreeError>;
