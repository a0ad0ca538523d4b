// Copyright (c) 2025 Lexicode Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Prefix Tree Implementation
//!
//! This module provides an in-memory trie over words with membership
//! queries, deletion with pruning, and prefix counting.
//!
//! Every inserted word is stored as the path of its characters followed by
//! an [`Edge::Terminator`] child. Shared prefixes reuse the same nodes and no
//! path compression is performed.
//!
//! # Example
//!
//! ```
//! use lexicode_lib::data_structures::prefix_tree::PrefixTree;
//!
//! let mut tree = PrefixTree::new();
//! for word in ["apk", "app", "apple", "arp", "array"] {
//!     tree.insert(word).unwrap();
//! }
//!
//! assert_eq!(tree.count_prefix("ap"), 3);
//! assert_eq!(tree.count_prefix("ar"), 2);
//! assert_eq!(tree.count_prefix("xyz"), 0);
//!
//! assert!(tree.search("app"));
//! assert!(!tree.search("ap"));
//! ```

mod error;
mod node;

use std::borrow::Cow;
use std::fmt;
use std::iter;

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

pub use error::{PrefixTreeError, PrefixTreeResult};
pub use node::Edge;
use node::TrieNode;

/// Configuration options for the prefix tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixTreeConfig {
    /// Whether words are compared case-sensitively
    pub case_sensitive: bool,

    /// Maximum number of characters in a stored word
    pub max_depth: usize,
}

impl Default for PrefixTreeConfig {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            max_depth: 1024,
        }
    }
}

impl PrefixTreeConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether words are compared case-sensitively.
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Set the maximum number of characters in a stored word.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// A prefix tree over words.
///
/// Queries fail soft: a missing word is reported as `false` and an unknown
/// prefix counts zero words. Mutation requires `&mut self`; callers sharing
/// a tree across threads wrap it in their own lock.
///
/// Every walk over the tree keeps an explicit stack, so long words never
/// exhaust the call stack.
#[derive(Default)]
pub struct PrefixTree {
    /// The root node; it carries no character of its own
    root: TrieNode,

    /// Configuration options
    config: PrefixTreeConfig,
}

/// Edges spelling `word` followed by the end-of-word marker.
fn word_path(word: &str) -> impl Iterator<Item = Edge> + '_ {
    word.chars().map(Edge::Char).chain(iter::once(Edge::Terminator))
}

impl PrefixTree {
    /// Creates a new empty `PrefixTree` with default configuration.
    pub fn new() -> Self {
        Self::with_config(PrefixTreeConfig::default())
    }

    /// Creates a new empty `PrefixTree` with the specified configuration.
    pub fn with_config(config: PrefixTreeConfig) -> Self {
        Self {
            root: TrieNode::new(),
            config,
        }
    }

    /// Returns the configuration of this tree.
    pub fn config(&self) -> &PrefixTreeConfig {
        &self.config
    }

    fn normalize<'a>(&self, word: &'a str) -> Cow<'a, str> {
        if self.config.case_sensitive {
            Cow::Borrowed(word)
        } else {
            Cow::Owned(word.to_lowercase())
        }
    }

    fn within_depth(&self, word: &str) -> bool {
        word.chars().count() <= self.config.max_depth
    }

    /// Walks `prefix` from the root, returning the node it ends at.
    fn find_node(&self, prefix: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for c in prefix.chars() {
            node = node.children.get(&Edge::Char(c))?;
        }
        Some(node)
    }

    /// Inserts a word into the tree.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The word was not present before.
    /// * `Ok(false)` - The word was already stored; the tree is unchanged.
    /// * `Err(PrefixTreeError::WordTooLong)` - The word exceeds `max_depth`.
    pub fn insert<W>(&mut self, word: W) -> PrefixTreeResult<bool>
    where
        W: AsRef<str>,
    {
        let input = word.as_ref();
        let word = self.normalize(input);
        if !self.within_depth(&word) {
            return Err(PrefixTreeError::WordTooLong {
                word: input.to_string(),
                max_depth: self.config.max_depth,
            });
        }

        let mut node = &mut self.root;
        for c in word.chars() {
            node = node.children.entry(Edge::Char(c)).or_default();
        }

        let is_new = !node.is_word_end();
        node.children.entry(Edge::Terminator).or_default();

        trace!(word = %word, is_new, "inserted word");
        Ok(is_new)
    }

    /// Checks whether a word is stored in the tree.
    ///
    /// A word is present only if its full path including the end-of-word
    /// marker exists, so a bare prefix of a stored word is not present.
    pub fn search<W>(&self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        let word = self.normalize(word.as_ref());
        if !self.within_depth(&word) {
            return false;
        }

        let mut node = &self.root;
        for edge in word_path(&word) {
            match node.children.get(&edge) {
                Some(next) => node = next,
                None => return false,
            }
        }
        true
    }

    /// Removes a word from the tree, pruning every node left without children.
    ///
    /// Pruning stops at the first ancestor that still has other children, so
    /// words sharing a prefix with the removed one are kept intact.
    ///
    /// # Returns
    ///
    /// `true` if the word was removed, `false` if it wasn't stored.
    pub fn delete<W>(&mut self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        let word = self.normalize(word.as_ref());
        if !self.within_depth(&word) {
            return false;
        }

        let path: Vec<Edge> = word_path(&word).collect();
        let removed = self.delete_path(&path);

        trace!(word = %word, removed, "deleted word");
        removed
    }

    /// Detaches the longest chain of nodes that only lead to `path`.
    ///
    /// The cut point is the deepest node on the path that has another
    /// child; everything below it serves this word alone. The root is never
    /// removed.
    fn delete_path(&mut self, path: &[Edge]) -> bool {
        let mut node = &self.root;
        let mut cut = 0;
        for (depth, edge) in path.iter().enumerate() {
            if node.children.len() > 1 {
                cut = depth;
            }
            match node.children.get(edge) {
                Some(next) => node = next,
                None => return false,
            }
        }

        let mut node = &mut self.root;
        for edge in &path[..cut] {
            match node.children.get_mut(edge) {
                Some(next) => node = next,
                None => return false,
            }
        }
        node.children.remove(&path[cut]).is_some()
    }

    /// Counts the stored words that start with `prefix`.
    ///
    /// A word equal to `prefix` is counted too; an empty prefix counts every
    /// stored word. Returns `0` when no stored word has the prefix.
    pub fn count_prefix<P>(&self, prefix: P) -> usize
    where
        P: AsRef<str>,
    {
        let prefix = self.normalize(prefix.as_ref());
        self.find_node(&prefix)
            .map(TrieNode::count_words)
            .unwrap_or(0)
    }

    /// Finds all stored words starting with `prefix`, sorted.
    pub fn words_with_prefix<P>(&self, prefix: P) -> Vec<String>
    where
        P: AsRef<str>,
    {
        let prefix = self.normalize(prefix.as_ref());
        let mut result = Vec::new();

        if let Some(node) = self.find_node(&prefix) {
            let mut buffer = prefix.into_owned();
            Self::collect_words(node, &mut buffer, &mut result);
        }

        result.sort();
        result
    }

    fn collect_words(node: &TrieNode, buffer: &mut String, result: &mut Vec<String>) {
        // Each entry remembers the buffer length of its parent word.
        let mut stack: Vec<(&TrieNode, usize, Option<char>)> = vec![(node, buffer.len(), None)];

        while let Some((node, parent_len, c)) = stack.pop() {
            buffer.truncate(parent_len);
            if let Some(c) = c {
                buffer.push(c);
            }

            for (edge, child) in &node.children {
                match edge {
                    Edge::Terminator => result.push(buffer.clone()),
                    Edge::Char(c) => stack.push((child, buffer.len(), Some(*c))),
                }
            }
        }
    }

    /// Returns the number of words in the tree.
    ///
    /// This traverses the entire tree, so it's an O(n) operation.
    pub fn len(&self) -> usize {
        self.root.count_words()
    }

    /// Checks if the tree stores no words.
    pub fn is_empty(&self) -> bool {
        !self.root.has_children()
    }

    /// Returns the number of nodes in the tree, the root included.
    ///
    /// An empty tree has exactly one node.
    pub fn node_count(&self) -> usize {
        self.root.count_nodes()
    }

    /// Removes every word from the tree.
    pub fn clear(&mut self) {
        self.root = TrieNode::new();
    }
}

impl fmt::Debug for PrefixTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrefixTree")
            .field("config", &self.config)
            .field("len", &self.len())
            .field("node_count", &self.node_count())
            .finish()
    }
}

impl<W: AsRef<str>> Extend<W> for PrefixTree {
    fn extend<I: IntoIterator<Item = W>>(&mut self, iter: I) {
        for word in iter {
            if let Err(e) = self.insert(word) {
                warn!(error = %e, "skipping word");
            }
        }
    }
}

impl<W: AsRef<str>> FromIterator<W> for PrefixTree {
    fn from_iter<I: IntoIterator<Item = W>>(iter: I) -> Self {
        let mut tree = PrefixTree::new();
        tree.extend(iter);
        tree
    }
}
