//! Export serializers for the store and its flat view.
//!
//! Downstream consumers ingest these files as-is, so the tabular and list
//! formats are byte-exact contracts: fixed header, no delimiter escaping,
//! CRLF-joined quoted list with no trailing terminator. Values pass through
//! verbatim.

use crate::{store::PromoStore, view::PromoRow};
use thiserror::Error as ThisError;

/// Header line of the tabular export. Column names match [`PromoRow`]'s
/// fields.
pub const CSV_HEADER: &str = "promo_num,product_sku,bonus";

///
/// ExportError
///

#[derive(Debug, ThisError)]
pub enum ExportError {
    #[error("JSON render failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Render the store as indented JSON in stored key order, mirroring the
/// input shape.
pub fn json(store: &PromoStore) -> Result<String, ExportError> {
    let rendered = serde_json::to_string_pretty(store)?;

    Ok(rendered)
}

/// Render rows as comma-delimited text under [`CSV_HEADER`], one row per
/// line, LF-joined with no trailing newline. Values are not escaped.
#[must_use]
pub fn csv(rows: &[PromoRow]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(CSV_HEADER.to_string());
    for row in rows {
        lines.push(format!("{},{},{}", row.promo_num, row.product_sku, row.bonus));
    }

    lines.join("\n")
}

/// Render the SKU column only, each line as `"SKU",` and lines CRLF-joined
/// with no trailing terminator.
#[must_use]
pub fn quoted_list(rows: &[PromoRow]) -> String {
    let lines: Vec<String> = rows
        .iter()
        .map(|row| format!("\"{}\",", row.product_sku))
        .collect();

    lines.join("\r\n")
}
