//! Session telemetry: ephemeral counters for one editing session.
//!
//! Counters live inside the session rather than in any global sink; the tool
//! is single-operator and the numbers die with the session.

use crate::{merge::MergeReport, normalize::NormalizeReport};

///
/// SessionCounters
///
/// In-memory operation and outcome counters since session start (or the
/// last reset).
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SessionCounters {
    // Operations
    pub loads: usize,
    pub merges: usize,
    pub exports: usize,

    // Normalization outcomes
    pub promos_accepted: usize,
    pub entries_rejected: usize,
    pub products_dropped: usize,

    // Merge outcomes
    pub skus_added: usize,
    pub skus_skipped: usize,
}

impl SessionCounters {
    /// Fold one normalization pass into the counters.
    pub fn record_load(&mut self, report: &NormalizeReport) {
        self.loads = self.loads.saturating_add(1);
        self.promos_accepted = self.promos_accepted.saturating_add(report.accepted.len());
        self.entries_rejected = self.entries_rejected.saturating_add(report.rejected.len());
        self.products_dropped = self.products_dropped.saturating_add(report.dropped_products);
    }

    /// Fold one applied merge into the counters.
    pub fn record_merge(&mut self, report: &MergeReport) {
        self.merges = self.merges.saturating_add(1);
        self.skus_added = self.skus_added.saturating_add(report.added.len());
        self.skus_skipped = self.skus_skipped.saturating_add(report.skipped.len());
    }

    /// Count one rendered export.
    pub fn record_export(&mut self) {
        self.exports = self.exports.saturating_add(1);
    }

    /// Reset all counters (useful in tests).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
