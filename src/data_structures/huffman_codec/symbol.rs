// Copyright (c) 2025 Lexicode Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Weighted symbols used while building the merge tree.

use std::cmp::Ordering;

use fnv::FnvHashMap;

/// A fragment of original characters paired with its total frequency.
///
/// Leaves hold a single character and its occurrence count; merge results
/// hold the concatenation of both fragments and the summed count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedSymbol {
    /// Original characters covered by this symbol
    pub fragment: String,

    /// Accumulated occurrence count
    pub frequency: usize,
}

impl WeightedSymbol {
    /// Creates a symbol from a fragment and its frequency.
    pub fn new(fragment: impl Into<String>, frequency: usize) -> Self {
        Self {
            fragment: fragment.into(),
            frequency,
        }
    }

    /// Merges two symbols; `left`'s characters come first in the fragment.
    pub fn merge(left: Self, right: Self) -> Self {
        let mut fragment = left.fragment;
        fragment.push_str(&right.fragment);
        Self {
            fragment,
            frequency: left.frequency + right.frequency,
        }
    }
}

/// Counts every distinct character of `text`, in order of first occurrence.
pub fn frequencies(text: &str) -> Vec<WeightedSymbol> {
    let mut index: FnvHashMap<char, usize> = FnvHashMap::default();
    let mut symbols: Vec<WeightedSymbol> = Vec::new();

    for c in text.chars() {
        let slot = *index.entry(c).or_insert_with(|| {
            symbols.push(WeightedSymbol::new(c, 0));
            symbols.len() - 1
        });
        symbols[slot].frequency += 1;
    }

    symbols
}

/// Priority queue entry; lower frequency first, then lower sequence.
#[derive(Debug)]
pub(super) struct QueuedSymbol {
    pub symbol: WeightedSymbol,
    pub sequence: usize,
}

impl PartialEq for QueuedSymbol {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueuedSymbol {}

impl PartialOrd for QueuedSymbol {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueuedSymbol {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for a min-heap on top of BinaryHeap
        other
            .symbol
            .frequency
            .cmp(&self.symbol.frequency)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}
