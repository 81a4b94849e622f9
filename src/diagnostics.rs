//! Diagnostic reporting for storage failures.
//!
//! Storage failures never reach the callers of the counter or theme
//! operations. They pass through [`swallow`], which hands the failure to a
//! [`DiagnosticSink`] and discards it.

use std::cell::RefCell;

use crate::storage::StoreError;

/// Prefix reported when a store cannot be read.
pub const READ_FAILED: &str = "Storage not available:";
/// Prefix reported when the counter cannot be written.
pub const COUNT_WRITE_FAILED: &str = "Failed to save to storage:";
/// Prefix reported when the theme cannot be written.
pub const THEME_WRITE_FAILED: &str = "Failed to save theme to storage:";

/// Fire-and-forget receiver for failures that were caught and discarded.
pub trait DiagnosticSink {
    fn report(&self, prefix: &str, detail: &StoreError);
}

/// Sink that logs through `tracing` at error level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, prefix: &str, detail: &StoreError) {
        tracing::error!(error = %detail, "{prefix}");
    }
}

/// A single report captured by [`RecordingSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub prefix: String,
    pub detail: String,
}

/// Sink that keeps every report in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    reports: RefCell<Vec<Diagnostic>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> Vec<Diagnostic> {
        self.reports.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.reports.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.borrow().is_empty()
    }
}

impl DiagnosticSink for RecordingSink {
    fn report(&self, prefix: &str, detail: &StoreError) {
        self.reports.borrow_mut().push(Diagnostic {
            prefix: prefix.to_string(),
            detail: detail.to_string(),
        });
    }
}

/// Passes `Ok` values through; reports an `Err` to `sink` once and drops it.
pub fn swallow<T>(
    sink: &dyn DiagnosticSink,
    prefix: &str,
    result: Result<T, StoreError>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            sink.report(prefix, &err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swallow_passes_ok_through_silently() {
        let sink = RecordingSink::new();
        let value = swallow(&sink, READ_FAILED, Ok::<_, StoreError>(5));

        assert_eq!(value, Some(5));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_swallow_reports_error_once() {
        let sink = RecordingSink::new();
        let value: Option<()> = swallow(
            &sink,
            COUNT_WRITE_FAILED,
            Err(StoreError::Other("disk on fire".to_string())),
        );

        assert_eq!(value, None);
        assert_eq!(
            sink.reports(),
            vec![Diagnostic {
                prefix: COUNT_WRITE_FAILED.to_string(),
                detail: "disk on fire".to_string(),
            }]
        );
    }

    #[test]
    fn test_tracing_sink_does_not_panic_without_subscriber() {
        TracingSink.report(THEME_WRITE_FAILED, &StoreError::QuotaExceeded);
    }
}
