//! Test utilities and fixtures for Lexicode.
//!
//! This module provides reusable fixtures and proptest strategies shared by
//! the crate-internal test suites.

use proptest::prelude::*;
use proptest::strategy::{BoxedStrategy, Strategy};
use std::collections::HashSet;
use tempfile::TempDir;

/// Maximum word length for generated test data.
const MAX_WORD_LENGTH: usize = 8;

/// Maximum number of words in a generated word set.
const MAX_WORD_COUNT: usize = 40;

/// Generate a strategy for words over a small alphabet.
///
/// The small alphabet makes shared prefixes and words that are prefixes of
/// other words common.
pub fn word_strategy() -> BoxedStrategy<String> {
    proptest::collection::vec(prop::sample::select(vec!['a', 'b', 'c', 'd']), 0..=MAX_WORD_LENGTH)
        .prop_map(|chars| chars.into_iter().collect::<String>())
        .boxed()
}

/// Generate a strategy for sets of distinct words.
pub fn word_set_strategy() -> BoxedStrategy<HashSet<String>> {
    proptest::collection::hash_set(word_strategy(), 0..MAX_WORD_COUNT).boxed()
}

/// Test fixture owning a temporary directory for configuration files.
pub struct TestFixture {
    /// Temporary directory for test files
    pub temp_dir: TempDir,
    /// Environment variables to clean up after the test
    env_vars: Vec<String>,
}

impl TestFixture {
    /// Create a new test fixture.
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            temp_dir: tempfile::tempdir()?,
            env_vars: Vec::new(),
        })
    }

    /// Set an environment variable for this test.
    ///
    /// The variable will be cleaned up when the fixture is dropped.
    pub fn set_env<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key_str = key.into();
        std::env::set_var(&key_str, value.into());
        self.env_vars.push(key_str);
    }

    /// Write `contents` to `name` inside the fixture directory.
    pub fn create_file<C: AsRef<[u8]>>(
        &self,
        name: &str,
        contents: C,
    ) -> std::io::Result<std::path::PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }
}

impl Drop for TestFixture {
    fn drop(&mut self) {
        for key in &self.env_vars {
            std::env::remove_var(key);
        }
    }
}
