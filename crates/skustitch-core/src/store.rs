use crate::types::{BonusCode, PromoKey, SkuList};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

///
/// PromoRecord
///
/// One promo: an ordered, duplicate-free product SKU list plus the bonus
/// code that stays fixed for the life of the promo.
/// Wire shape is `{ "products": [...], "bonus": "..." }`.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct PromoRecord {
    #[serde(default)]
    pub products: SkuList,
    #[serde(default)]
    pub bonus: BonusCode,
}

impl PromoRecord {
    #[must_use]
    pub const fn new(products: SkuList, bonus: BonusCode) -> Self {
        Self { products, bonus }
    }

    /// Return the number of product SKUs in this record.
    #[must_use]
    pub const fn sku_count(&self) -> usize {
        self.products.len()
    }
}

///
/// PromoStore
///
/// Canonical promo mapping for one editing session, in insertion order.
/// Owned by the session and replaced wholesale on every successful merge;
/// nothing mutates an installed store in place.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PromoStore(IndexMap<PromoKey, PromoRecord>);

impl PromoStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Return the number of promo records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the store holds no promo records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` if the store holds a record for the key.
    #[must_use]
    pub fn contains_key(&self, key: &PromoKey) -> bool {
        self.0.contains_key(key)
    }

    /// Return the record for the key, if present.
    #[must_use]
    pub fn get(&self, key: &PromoKey) -> Option<&PromoRecord> {
        self.0.get(key)
    }

    pub(crate) fn get_mut(&mut self, key: &PromoKey) -> Option<&mut PromoRecord> {
        self.0.get_mut(key)
    }

    /// Insert a record, replacing any record already stored under the key.
    pub fn insert(&mut self, key: PromoKey, record: PromoRecord) {
        self.0.insert(key, record);
    }

    /// Iterate promo keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &PromoKey> {
        self.0.keys()
    }

    /// Iterate (key, record) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&PromoKey, &PromoRecord)> {
        self.0.iter()
    }

    /// Total SKU count across every record.
    #[must_use]
    pub fn sku_total(&self) -> usize {
        self.0.values().map(PromoRecord::sku_count).sum()
    }
}

impl FromIterator<(PromoKey, PromoRecord)> for PromoStore {
    fn from_iter<I: IntoIterator<Item = (PromoKey, PromoRecord)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
