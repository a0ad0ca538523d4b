//! Test modules for Lexicode.
//!
//! This module contains crate-internal test suites:
//! - Configuration loading and validation
//! - Error types and reporting
//! - Property-based tests for the prefix tree against a set model
//! - Shared fixtures and proptest strategies

pub mod test_utils;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{word_set_strategy, word_strategy, TestFixture};
