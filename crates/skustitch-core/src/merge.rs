//! Merge engine for folding sanitized SKU candidates into a promo record.
//!
//! Merging never mutates the caller's store. It builds a new store with the
//! target record extended, plus a report of what was added and what was
//! already present, so callers can show the outcome before committing.

use crate::{
    store::PromoStore,
    types::{PromoKey, Sku},
};
use thiserror::Error as ThisError;

///
/// MergeError
///

#[derive(Debug, ThisError)]
pub enum MergeError {
    #[error("promo '{0}' not found")]
    PromoNotFound(PromoKey),

    #[error("no SKUs to merge")]
    NoCandidates,
}

///
/// MergeReport
///
/// What one merge did, candidate by candidate. Every candidate lands in
/// exactly one of the two lists; membership is judged against the record as
/// it grows, so a repeated new SKU is added once and skipped after.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MergeReport {
    pub added: Vec<Sku>,
    pub skipped: Vec<Sku>,
}

impl MergeReport {
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.added.len() + self.skipped.len()
    }
}

///
/// MergeOutcome
///
/// The post-merge store paired with its report. The store is a full
/// replacement for the one the merge started from.
///

#[derive(Clone, Debug)]
pub struct MergeOutcome {
    store: PromoStore,
    report: MergeReport,
}

impl MergeOutcome {
    #[must_use]
    pub const fn store(&self) -> &PromoStore {
        &self.store
    }

    #[must_use]
    pub const fn report(&self) -> &MergeReport {
        &self.report
    }

    #[must_use]
    pub fn into_parts(self) -> (PromoStore, MergeReport) {
        (self.store, self.report)
    }
}

/// Merge `candidates` into the record at `key`, returning the new store and
/// a report. Existing SKUs keep their positions, new ones append in
/// candidate order, and the record's bonus code is untouched.
pub fn merge_skus(
    store: &PromoStore,
    key: &PromoKey,
    candidates: &[Sku],
) -> Result<MergeOutcome, MergeError> {
    if candidates.is_empty() {
        return Err(MergeError::NoCandidates);
    }

    let mut merged = store.clone();
    let Some(record) = merged.get_mut(key) else {
        return Err(MergeError::PromoNotFound(key.clone()));
    };

    let mut report = MergeReport::default();
    for sku in candidates {
        if record.products.insert(sku.clone()) {
            report.added.push(sku.clone());
        } else {
            report.skipped.push(sku.clone());
        }
    }

    Ok(MergeOutcome { store: merged, report })
}
