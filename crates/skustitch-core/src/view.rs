//! Read-only flat projection of a [`PromoStore`].
//!
//! Display and tabular export both want one row per SKU with the promo key
//! and bonus repeated on each. Rows are derived on demand and never written
//! back to the store.

use crate::{
    store::PromoStore,
    types::{BonusCode, PromoKey, Sku},
};

///
/// PromoRow
///
/// One (promo, SKU) pairing with the promo's bonus carried along. Field
/// names double as the tabular export header.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PromoRow {
    pub promo_num: PromoKey,
    pub product_sku: Sku,
    pub bonus: BonusCode,
}

/// Walk a store one row at a time, promo order first, then SKU order within
/// each promo. Promos without SKUs contribute no rows.
pub fn iter(store: &PromoStore) -> impl Iterator<Item = PromoRow> + '_ {
    store.iter().flat_map(|(key, record)| {
        record.products.iter().map(move |sku| PromoRow {
            promo_num: key.clone(),
            product_sku: sku.clone(),
            bonus: record.bonus.clone(),
        })
    })
}

/// Flatten a store into rows. An empty store (or one holding only empty
/// records) flattens to nothing.
#[must_use]
pub fn rows(store: &PromoStore) -> Vec<PromoRow> {
    let mut rows = Vec::with_capacity(store.sku_total());
    rows.extend(iter(store));

    rows
}
