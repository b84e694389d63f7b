//! Plain-text rendering for shell output.
//!
//! Fixed-width columns, no trailing newline; the shell decides how each
//! block is printed.

use skustitch_core::{
    merge::MergeReport,
    normalize::{NormalizeReport, RejectedEntry, ValueKind},
    obs::SessionCounters,
    store::PromoStore,
    types::Sku,
    view::PromoRow,
};

/// One line per promo with its SKU count and bonus code.
pub fn promo_summary(store: &PromoStore) -> String {
    let mut lines = vec![format!("{:<20} {:>5}  {}", "PROMO", "SKUS", "BONUS")];
    for (key, record) in store.iter() {
        lines.push(format!(
            "{:<20} {:>5}  {}",
            key.as_str(),
            record.sku_count(),
            record.bonus.as_str()
        ));
    }

    lines.join("\n")
}

/// The flat view as a three-column table.
pub fn rows_table(rows: &[PromoRow]) -> String {
    let mut lines = vec![format!("{:<20} {:<14} {}", "PROMO", "SKU", "BONUS")];
    for row in rows {
        lines.push(format!(
            "{:<20} {:<14} {}",
            row.promo_num.as_str(),
            row.product_sku.as_str(),
            row.bonus.as_str()
        ));
    }

    lines.join("\n")
}

/// Summary of one normalization pass, with rejected entries listed when
/// there are any.
pub fn load_report(report: &NormalizeReport) -> String {
    let mut out = format!("loaded {} promos", report.accepted.len());
    if report.dropped_products > 0 {
        out.push_str(&format!(
            ", dropped {} product elements",
            report.dropped_products
        ));
    }
    if !report.rejected.is_empty() {
        out.push('\n');
        out.push_str(&rejected_entries(&report.rejected));
    }

    out
}

/// One line per rejected top-level entry with the JSON type found.
pub fn rejected_entries(rejected: &[RejectedEntry]) -> String {
    let lines: Vec<String> = rejected
        .iter()
        .map(|entry| format!("rejected '{}' ({} instead of object)", entry.key, entry.found))
        .collect();

    lines.join("\n")
}

/// Why a load recognized no promos: wrong root shape, an empty object, or
/// every entry rejected.
pub fn no_promos(report: &NormalizeReport) -> String {
    if report.root != ValueKind::Object {
        return format!("input is {} JSON, expected an object of promos", report.root);
    }
    if report.rejected.is_empty() {
        return "input object has no entries".to_string();
    }

    rejected_entries(&report.rejected)
}

/// Added and skipped SKUs from one merge.
pub fn merge_report(report: &MergeReport) -> String {
    format!(
        "added {}: [{}]\nskipped {}: [{}]",
        report.added.len(),
        join_skus(&report.added),
        report.skipped.len(),
        join_skus(&report.skipped),
    )
}

/// Session counters, one labelled line each.
pub fn counters(counters: &SessionCounters) -> String {
    [
        ("loads", counters.loads),
        ("merges", counters.merges),
        ("exports", counters.exports),
        ("promos accepted", counters.promos_accepted),
        ("entries rejected", counters.entries_rejected),
        ("products dropped", counters.products_dropped),
        ("skus added", counters.skus_added),
        ("skus skipped", counters.skus_skipped),
    ]
    .into_iter()
    .map(|(label, value)| format!("{label:<18} {value}"))
    .collect::<Vec<_>>()
    .join("\n")
}

fn join_skus(skus: &[Sku]) -> String {
    skus.iter().map(Sku::as_str).collect::<Vec<_>>().join(", ")
}
