//! Error module for the Niihau trie driver.
//!
//! Provides a single crate-wide error enum, plus an error-reporting sink so
//! components can report structured errors without needing to know whether
//! the process wants them logged, collected, or (in tests) ignored.

use std::fmt::{Display, Formatter};
use std::sync::Arc;

use once_cell::sync::OnceCell;
use thiserror::Error;

pub mod config;
pub mod trie;

/// Result type alias used throughout the crate.
pub type AppResult<T> = Result<T, AppError>;

/// Core error enum for the crate.
#[derive(Error, Debug)]
pub enum AppError {
    /// Errors occurring during configuration loading or validation.
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors from the trie itself (bad key, allocation failure, ...).
    #[error("trie error: {0}")]
    Trie(#[from] trie::TrieError),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Custom error with message for cases where specific error types are
    /// not defined.
    #[error("{0}")]
    Custom(String),
}

/// Error reporting structure to provide context and debugging information.
#[derive(Debug)]
pub struct ErrorContext {
    /// The original error that occurred.
    pub error: AppError,

    /// The component where the error occurred.
    pub component: String,

    /// Additional context information to help with debugging.
    pub details: Option<String>,
}

impl ErrorContext {
    /// Creates a new error context with the given error and component.
    pub fn new<S: Into<String>>(error: AppError, component: S) -> Self {
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
        write!(f, "error in {}: {}", self.component, self.error)?;
        if let Some(details) = &self.details {
            write!(f, "\ndetails: {details}")?;
        }
        Ok(())
    }
}

/// Error reporter trait for reporting errors to various sinks.
pub trait ErrorReporter: Send + Sync + std::fmt::Debug {
    /// Report an error with context.
    fn report(&self, context: ErrorContext);
}

/// A simple error reporter implementation that logs errors using the
/// tracing framework.
#[derive(Default, Debug)]
pub struct TracingErrorReporter;

impl ErrorReporter for TracingErrorReporter {
    fn report(&self, context: ErrorContext) {
        tracing::error!(
            error = %context.error,
            component = %context.component,
            details = context.details.as_deref().unwrap_or("none"),
            "error reported"
        );
    }
}

/// Process-wide error reporter, set once during startup.
static ERROR_REPORTER: OnceCell<Arc<dyn ErrorReporter>> = OnceCell::new();

/// Sets the global error reporter. A no-op if one has already been set.
pub fn set_error_reporter(reporter: Arc<dyn ErrorReporter>) {
    let _ = ERROR_REPORTER.set(reporter);
}

/// Reports an error through the global reporter, falling back to stderr if
/// none has been configured yet.
pub fn report_error(context: ErrorContext) {
    match ERROR_REPORTER.get() {
        Some(reporter) => reporter.report(context),
        None => eprintln!("{context}"),
    }
}
