//! Session facade owning the read-modify-write cycle around the pure
//! pipeline stages.
//!
//! The session holds at most one store. Every operation either leaves that
//! store untouched or replaces it wholesale with a successful result; a
//! failed load or merge never installs a partial store.

use crate::{
    export::{self, ExportError},
    merge::{self, MergeError, MergeOutcome, MergeReport},
    normalize::{self, NormalizeReport},
    obs::SessionCounters,
    sanitize,
    store::PromoStore,
    types::PromoKey,
    view::{self, PromoRow},
};
use serde_json::Value;
use thiserror::Error as ThisError;

///
/// SessionError
///
/// Everything here is recoverable by re-entering input; nothing tears the
/// session down.
///

#[derive(Debug, ThisError)]
pub enum SessionError {
    /// Input was not valid JSON. The message already names the location.
    #[error("{message}")]
    Parse {
        line: usize,
        column: usize,
        message: String,
    },

    /// Input parsed but yielded no promo records. Carries the report so
    /// callers can show what was rejected.
    #[error("no promos found in input")]
    NoPromos(NormalizeReport),

    /// The operation needs a loaded store and none is present.
    #[error("no promo data loaded")]
    NoStore,

    #[error(transparent)]
    Merge(#[from] MergeError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

impl SessionError {
    fn parse(err: &serde_json::Error) -> Self {
        Self::Parse {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}

///
/// Session
///
/// Public facade for one editing interaction: owns the store and counters,
/// applies results only on success.
///

#[derive(Debug, Default)]
pub struct Session {
    store: Option<PromoStore>,
    counters: SessionCounters,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // State access
    // ------------------------------------------------------------------

    #[must_use]
    pub const fn store(&self) -> Option<&PromoStore> {
        self.store.as_ref()
    }

    #[must_use]
    pub const fn has_store(&self) -> bool {
        self.store.is_some()
    }

    #[must_use]
    pub const fn counters(&self) -> &SessionCounters {
        &self.counters
    }

    /// Clear the counters without touching the store.
    pub fn reset_counters(&mut self) {
        self.counters.reset();
    }

    /// Flatten the current store; no store means no rows.
    #[must_use]
    pub fn rows(&self) -> Vec<PromoRow> {
        self.store.as_ref().map_or_else(Vec::new, view::rows)
    }

    // ------------------------------------------------------------------
    // Loading
    // ------------------------------------------------------------------

    /// Parse and normalize promo JSON, installing the resulting store.
    ///
    /// On any failure, including input that normalizes to zero promos, the
    /// previously loaded store (if any) stays in place.
    pub fn load_json(&mut self, text: &str) -> Result<NormalizeReport, SessionError> {
        let value: Value =
            serde_json::from_str(text).map_err(|err| SessionError::parse(&err))?;
        let (store, report) = normalize::promo_store(&value);
        if store.is_empty() {
            return Err(SessionError::NoPromos(report));
        }

        self.counters.record_load(&report);
        self.store = Some(store);

        Ok(report)
    }

    // ------------------------------------------------------------------
    // Merging
    // ------------------------------------------------------------------

    /// Run a merge without committing it, for showing the operator what
    /// would happen.
    pub fn preview_merge(
        &self,
        key: &PromoKey,
        sku_text: &str,
    ) -> Result<MergeOutcome, SessionError> {
        let store = self.store.as_ref().ok_or(SessionError::NoStore)?;
        let candidates = sanitize::sku_tokens(sku_text);
        let outcome = merge::merge_skus(store, key, candidates.as_slice())?;

        Ok(outcome)
    }

    /// Sanitize `sku_text` and merge the candidates into `key`, replacing
    /// the session store with the merged result.
    pub fn merge(&mut self, key: &PromoKey, sku_text: &str) -> Result<MergeReport, SessionError> {
        let store = self.store.as_ref().ok_or(SessionError::NoStore)?;
        let candidates = sanitize::sku_tokens(sku_text);
        let (merged, report) = merge::merge_skus(store, key, candidates.as_slice())?.into_parts();

        self.counters.record_merge(&report);
        self.store = Some(merged);

        Ok(report)
    }

    // ------------------------------------------------------------------
    // Exports
    // ------------------------------------------------------------------

    /// Render the store as indented JSON.
    pub fn export_json(&mut self) -> Result<String, SessionError> {
        let store = self.store.as_ref().ok_or(SessionError::NoStore)?;
        let rendered = export::json(store)?;
        self.counters.record_export();

        Ok(rendered)
    }

    /// Render the flat view as comma-delimited text.
    pub fn export_csv(&mut self) -> Result<String, SessionError> {
        let store = self.store.as_ref().ok_or(SessionError::NoStore)?;
        let rendered = export::csv(&view::rows(store));
        self.counters.record_export();

        Ok(rendered)
    }

    /// Render the SKU column as the CRLF quoted list.
    pub fn export_list(&mut self) -> Result<String, SessionError> {
        let store = self.store.as_ref().ok_or(SessionError::NoStore)?;
        let rendered = export::quoted_list(&view::rows(store));
        self.counters.record_export();

        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Sku;

    const PROMO_JSON: &str =
        r#"{"promo1": {"products": ["218948", "218950"], "bonus": "130009"}}"#;

    fn loaded_session() -> Session {
        let mut session = Session::new();
        session.load_json(PROMO_JSON).expect("load should succeed");
        session
    }

    #[test]
    fn load_installs_the_store_and_counts() {
        let session = loaded_session();

        assert!(session.has_store());
        assert_eq!(session.counters().loads, 1);
        assert_eq!(session.counters().promos_accepted, 1);
        assert_eq!(session.rows().len(), 2);
    }

    #[test]
    fn parse_failure_reports_location_and_installs_nothing() {
        let mut session = Session::new();

        let result = session.load_json("{\n  \"promo1\": oops\n}");

        assert!(matches!(
            result,
            Err(SessionError::Parse { line: 2, .. })
        ));
        assert!(!session.has_store());
        assert_eq!(session.counters().loads, 0);
    }

    #[test]
    fn failed_load_keeps_the_prior_store() {
        let mut session = loaded_session();

        let result = session.load_json("not json");

        assert!(matches!(result, Err(SessionError::Parse { .. })));
        let store = session.store().expect("prior store should survive");
        assert!(store.contains_key(&PromoKey::from("promo1")));
    }

    #[test]
    fn input_without_promos_is_rejected_with_its_report() {
        let mut session = Session::new();

        let result = session.load_json(r#"{"junk": [1, 2], "worse": "text"}"#);

        match result {
            Err(SessionError::NoPromos(report)) => {
                assert_eq!(report.rejected.len(), 2);
            }
            other => panic!("expected NoPromos, got {other:?}"),
        }
        assert!(!session.has_store());
    }

    #[test]
    fn merge_replaces_the_store_and_reports() {
        let mut session = loaded_session();

        let report = session
            .merge(&PromoKey::from("promo1"), "218950, 225807\n225808")
            .expect("merge should succeed");

        assert_eq!(report.added, vec![Sku::from("225807"), Sku::from("225808")]);
        assert_eq!(report.skipped, vec![Sku::from("218950")]);

        let store = session.store().expect("store present after merge");
        let record = store
            .get(&PromoKey::from("promo1"))
            .expect("promo1 present after merge");
        let skus: Vec<&str> = record.products.iter().map(Sku::as_str).collect();
        assert_eq!(skus, ["218948", "218950", "225807", "225808"]);
        assert_eq!(record.bonus.as_str(), "130009");
        assert_eq!(session.counters().merges, 1);
        assert_eq!(session.counters().skus_added, 2);
    }

    #[test]
    fn failed_merge_leaves_the_store_alone() {
        let mut session = loaded_session();
        let before = session.store().cloned();

        let result = session.merge(&PromoKey::from("promoX"), "225807");

        assert!(matches!(
            result,
            Err(SessionError::Merge(MergeError::PromoNotFound(_)))
        ));
        assert_eq!(session.store().cloned(), before);
        assert_eq!(session.counters().merges, 0);
    }

    #[test]
    fn merge_of_blank_text_is_a_no_candidates_error() {
        let mut session = loaded_session();

        let result = session.merge(&PromoKey::from("promo1"), "  \n , ");

        assert!(matches!(
            result,
            Err(SessionError::Merge(MergeError::NoCandidates))
        ));
    }

    #[test]
    fn operations_without_a_store_report_no_store() {
        let mut session = Session::new();

        assert!(matches!(
            session.merge(&PromoKey::from("promo1"), "225807"),
            Err(SessionError::NoStore)
        ));
        assert!(matches!(session.export_json(), Err(SessionError::NoStore)));
        assert!(matches!(session.export_csv(), Err(SessionError::NoStore)));
        assert!(matches!(session.export_list(), Err(SessionError::NoStore)));
    }

    #[test]
    fn preview_commits_nothing() {
        let session = loaded_session();

        let outcome = session
            .preview_merge(&PromoKey::from("promo1"), "225807")
            .expect("preview should succeed");

        assert_eq!(outcome.report().added, vec![Sku::from("225807")]);
        let record = session
            .store()
            .and_then(|store| store.get(&PromoKey::from("promo1")))
            .expect("promo1 still loaded");
        assert_eq!(record.sku_count(), 2);
        assert_eq!(session.counters().merges, 0);
    }

    #[test]
    fn counter_reset_leaves_the_store_alone() {
        let mut session = loaded_session();
        session
            .merge(&PromoKey::from("promo1"), "225807")
            .expect("merge should succeed");

        session.reset_counters();

        assert_eq!(session.counters(), &SessionCounters::default());
        let record = session
            .store()
            .and_then(|store| store.get(&PromoKey::from("promo1")))
            .expect("promo1 still loaded");
        assert_eq!(record.sku_count(), 3);
    }

    #[test]
    fn exports_render_the_current_store() {
        let mut session = loaded_session();
        session
            .merge(&PromoKey::from("promo1"), "225807")
            .expect("merge should succeed");

        let csv = session.export_csv().expect("CSV export should render");
        assert_eq!(
            csv,
            "promo_num,product_sku,bonus\n\
             promo1,218948,130009\n\
             promo1,218950,130009\n\
             promo1,225807,130009"
        );

        let list = session.export_list().expect("list export should render");
        assert_eq!(list, "\"218948\",\r\n\"218950\",\r\n\"225807\",");

        let json = session.export_json().expect("JSON export should render");
        assert!(json.contains("\"bonus\": \"130009\""));
        assert_eq!(session.counters().exports, 3);
    }
}
