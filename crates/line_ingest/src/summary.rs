use serde::Serialize;

use crate::error::RowError;

/// Counts and diagnostics for one run.
///
/// A single instance is created per run and threaded by `&mut` through every
/// stage, so all counters describe the same view of the input.
///
/// Invariants: `records_found <= records_total` and
/// `records_processed <= records_found`. `records_added` is whatever the sink
/// reported and has no fixed relation to the other counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Every non-blank line, comments and headers included.
    pub records_total: u64,
    /// Non-blank lines that are not comments or headers.
    pub records_found: u64,
    /// Records handed to the sink.
    pub records_processed: u64,
    /// Records the sink reported as accepted.
    pub records_added: u64,
    /// Human-readable diagnostics, in input order.
    pub error_messages: Vec<String>,
    /// Diagnostics dropped after `error_messages` reached its cap.
    pub errors_suppressed: u64,
    #[serde(skip)]
    error_cap: Option<usize>,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_error_cap(cap: Option<usize>) -> Self {
        Self {
            error_cap: cap,
            ..Self::default()
        }
    }

    /// Summary for a run that failed before any line was read.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            error_messages: vec![message.into()],
            ..Self::default()
        }
    }

    pub fn errors<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            error_messages: messages.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn is_clean(&self) -> bool {
        self.error_messages.is_empty() && self.errors_suppressed == 0
    }

    pub fn push_error(&mut self, message: impl Into<String>) {
        match self.error_cap {
            Some(cap) if self.error_messages.len() >= cap => {
                self.errors_suppressed = self.errors_suppressed.saturating_add(1);
            }
            _ => self.error_messages.push(message.into()),
        }
    }

    pub(crate) fn record_malformed(&mut self, raw: &str) {
        let message = format!("Skipping malformed row: {} line: {raw}", self.records_total);
        self.push_error(message);
    }

    pub(crate) fn record_row_error(&mut self, err: &RowError) {
        let message = format!(
            "Skipping error parsing row: {} line: {err}",
            self.records_total
        );
        self.push_error(message);
    }

    pub(crate) fn record_oversized(&mut self, observed_bytes: usize, max_line_bytes: usize) {
        self.records_total += 1;
        let message = format!(
            "Skipping oversized row: {} ({observed_bytes} bytes > {max_line_bytes} bytes)",
            self.records_total
        );
        self.push_error(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_error_summary_has_zero_counts() {
        let summary = RunSummary::error("No .txt file found for ISO code: ZZ");
        assert_eq!(summary.records_total, 0);
        assert_eq!(summary.records_processed, 0);
        assert_eq!(summary.error_messages.len(), 1);
        assert!(!summary.is_clean());
    }

    #[test]
    fn capped_summary_counts_suppressed_diagnostics() {
        let mut summary = RunSummary::with_error_cap(Some(2));
        for n in 0..5 {
            summary.push_error(format!("problem {n}"));
        }
        assert_eq!(summary.error_messages, vec!["problem 0", "problem 1"]);
        assert_eq!(summary.errors_suppressed, 3);
    }

    #[test]
    fn malformed_diagnostic_carries_line_counter_and_text() {
        let mut summary = RunSummary::new();
        summary.records_total = 4;
        summary.record_malformed("MALFORMED");
        assert_eq!(
            summary.error_messages,
            vec!["Skipping malformed row: 4 line: MALFORMED"]
        );
    }
}
