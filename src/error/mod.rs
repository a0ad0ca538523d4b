//! Error module for Lexicode.
//!
//! This module ties the error types of every component into one crate-wide
//! enum and provides context-carrying error reporting through `tracing`.

use std::fmt::{Display, Formatter};
use std::sync::Arc;

use once_cell::sync::OnceCell;
use thiserror::Error;

use crate::data_structures::huffman_codec::HuffmanError;
use crate::data_structures::prefix_tree::PrefixTreeError;

pub mod config;

/// Result type alias used throughout Lexicode.
pub type LexicodeResult<T> = Result<T, LexicodeError>;

/// Core error enum for Lexicode.
#[derive(Error, Debug)]
pub enum LexicodeError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors raised by the prefix tree.
    #[error("Prefix tree error: {0}")]
    PrefixTree(#[from] PrefixTreeError),

    /// Errors raised by the Huffman codec.
    #[error("Huffman codec error: {0}")]
    Huffman(#[from] HuffmanError),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}

/// Error reporting structure to provide context and debugging information.
#[derive(Debug)]
pub struct ErrorContext {
    /// The original error that occurred.
    pub error: LexicodeError,

    /// The component where the error occurred.
    pub component: String,

    /// Additional context information to help with debugging.
    pub details: Option<String>,
}

impl ErrorContext {
    /// Creates a new error context with the given error and component.
    pub fn new<S: Into<String>>(error: LexicodeError, component: S) -> Self {
        Self {
            error,
            component: component.into(),
            details: None,
        }
    }

    /// Adds detail information to the error context.
    pub fn with_details<S: Into<String>>(mut self, details: S) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in {}: {}", self.component, self.error)?;
        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }
        Ok(())
    }
}

/// Error reporter trait for reporting errors to various sinks.
pub trait ErrorReporter: Send + Sync + std::fmt::Debug {
    /// Report an error with context.
    fn report(&self, context: ErrorContext);
}

/// Error reporter that logs errors using the tracing framework.
#[derive(Default, Debug)]
pub struct TracingErrorReporter;

impl ErrorReporter for TracingErrorReporter {
    fn report(&self, context: ErrorContext) {
        tracing::error!(
            error = %context.error,
            component = %context.component,
            details = context.details.as_deref().unwrap_or("None"),
            "Error reported"
        );
    }
}

/// Process-wide error reporter, installed once.
static ERROR_REPORTER: OnceCell<Arc<dyn ErrorReporter>> = OnceCell::new();

/// Install the process-wide error reporter.
///
/// # Returns
///
/// `false` if a reporter was already installed; the existing one is kept.
pub fn set_error_reporter(reporter: Arc<dyn ErrorReporter>) -> bool {
    ERROR_REPORTER.set(reporter).is_ok()
}

/// Report an error through the installed reporter.
///
/// Falls back to standard error output if no reporter is installed.
pub fn report_error(context: ErrorContext) {
    match ERROR_REPORTER.get() {
        Some(reporter) => reporter.report(context),
        None => eprintln!("Error: {context}"),
    }
}
