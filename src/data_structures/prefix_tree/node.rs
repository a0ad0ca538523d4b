// Copyright (c) 2025 Lexicode Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the prefix tree.
//!
//! Nodes are the building blocks of the tree. Every node exclusively owns
//! its children, keyed by the edge label leading to them.

use std::iter;

use fnv::FnvHashMap;

/// Label on the edge between a node and one of its children.
///
/// The end of a word is marked by a `Terminator` child rather than by a
/// reserved character, so no input text can collide with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Edge {
    /// A real character of an inserted word.
    Char(char),
    /// End-of-word marker.
    Terminator,
}

/// A node in the prefix tree.
#[derive(Debug, Default)]
pub struct TrieNode {
    /// Children keyed by edge label; keys are unique by construction.
    pub children: FnvHashMap<Edge, TrieNode>,
}

impl TrieNode {
    /// Creates a new node without children.
    pub fn new() -> Self {
        Self {
            children: FnvHashMap::default(),
        }
    }

    /// Whether a word ends at this node.
    pub fn is_word_end(&self) -> bool {
        self.children.contains_key(&Edge::Terminator)
    }

    /// Whether this node has any children at all.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Iterates over the subtree rooted here, this node included.
    ///
    /// The walk keeps its own stack, so word length never bounds call depth.
    pub fn descendants(&self) -> impl Iterator<Item = &TrieNode> + '_ {
        let mut stack = vec![self];
        iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.values());
            Some(node)
        })
    }

    /// Number of words ending in the subtree rooted here, this node included.
    pub fn count_words(&self) -> usize {
        self.descendants().filter(|node| node.is_word_end()).count()
    }

    /// Number of nodes in the subtree rooted here, this node included.
    pub fn count_nodes(&self) -> usize {
        self.descendants().count()
    }
}

impl Drop for TrieNode {
    fn drop(&mut self) {
        // Detach grandchildren before each node goes out of scope so that
        // dropping a long chain does not recurse once per character.
        let mut stack: Vec<TrieNode> = self.children.drain().map(|(_, child)| child).collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}
