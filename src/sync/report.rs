//! Accounting for synchronization passes.
//!
//! This module provides the `SyncReport`, which counts what happened to every
//! billing event a pass fetched. Counts are the run's observable result: the
//! orchestrator logs the summary after each pass and callers can assert on
//! the fields directly.

/// Counters for a single synchronization pass
///
/// Every fetched event lands in exactly one of the three outcome buckets, so
/// `events` always equals `submitted + skipped + failed`.
#[derive(Debug, Clone)]
pub struct SyncReport {
    /// Name of the pass, used in the summary line.
    pub pass: &'static str,
    /// Events fetched from the billing API.
    pub events: usize,
    /// Transactions the tax service recorded.
    pub submitted: usize,
    /// Events that were not eligible for submission.
    pub skipped: usize,
    /// Submissions the tax service failed to record.
    pub failed: usize,
}

impl SyncReport {
    /// Create an empty report for the named pass.
    pub fn new(pass: &'static str) -> Self {
        Self {
            pass,
            events: 0,
            submitted: 0,
            skipped: 0,
            failed: 0,
        }
    }

    /// Record an event whose transaction was recorded by the tax service
    pub fn record_submitted(&mut self) {
        self.events += 1;
        self.submitted += 1;
    }

    /// Record an event that was not eligible for submission
    pub fn record_skipped(&mut self) {
        self.events += 1;
        self.skipped += 1;
    }

    /// Record an event whose submission failed in a contained way
    pub fn record_failed(&mut self) {
        self.events += 1;
        self.failed += 1;
    }

    /// Get a human-readable summary of the pass
    pub fn summary(&self) -> String {
        format!(
            "{} pass complete: {} events, {} submitted, {} skipped, {} failed",
            self.pass, self.events, self.submitted, self.skipped, self.failed
        )
    }
}

/// Combined result of a full run, orders pass then refunds pass
#[derive(Debug, Clone)]
pub struct RunReport {
    pub orders: SyncReport,
    pub refunds: SyncReport,
}

impl RunReport {
    /// Total events fetched across both passes
    pub fn total_events(&self) -> usize {
        self.orders.events + self.refunds.events
    }
}
