//! Tests for the error module.
//!
//! This module contains tests for error handling and error types.

use crate::error::{report_error, set_error_reporter, AppError, ErrorContext, ErrorReporter, TracingErrorReporter};
use std::sync::Arc;

#[test]
fn test_error_context_display() {
    let error = AppError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component").with_details("additional details");

    let display_string = format!("{context}");
    assert!(display_string.contains("test error"));
    assert!(display_string.contains("test_component"));
    assert!(display_string.contains("additional details"));
}

#[test]
fn test_nested_errors() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let app_error = AppError::Io(io_error);

    let error_string = format!("{app_error}");
    assert!(error_string.contains("file not found"));
}

#[test]
fn test_trie_error_is_wrapped() {
    let app_error: AppError = crate::data_structures::TrieError::EmptyKey.into();
    assert!(matches!(app_error, AppError::Trie(_)));
}

/// Mock error reporter for testing.
#[derive(Debug)]
struct MockErrorReporter {
    reported_count: std::sync::atomic::AtomicUsize,
}

impl MockErrorReporter {
    fn new() -> Self {
        Self {
            reported_count: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    fn reported_count(&self) -> usize {
        self.reported_count
            .load(std::sync::atomic::Ordering::SeqCst)
    }
}

impl ErrorReporter for MockErrorReporter {
    fn report(&self, _context: ErrorContext) {
        self.reported_count
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    }
}

/// Note: this test should be run in isolation — the reporter is a
/// once-only global, so whichever test sets it first in this process wins.
#[test]
fn test_global_error_reporter() {
    let reporter = Arc::new(MockErrorReporter::new());
    set_error_reporter(reporter.clone());

    let error = AppError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component");
    report_error(context);

    assert_eq!(reporter.reported_count(), 1);
}

#[test]
fn test_tracing_error_reporter() {
    let reporter = TracingErrorReporter;
    let error = AppError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component");

    // Just make sure this doesn't panic.
    reporter.report(context);
}
