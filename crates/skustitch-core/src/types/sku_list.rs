use crate::types::Sku;
use derive_more::Deref;
use serde::{Deserialize, Deserializer, Serialize};

///
/// SkuList
///
/// Ordered list of SKUs that enforces uniqueness on insertion.
/// Deterministic order is first-seen insertion order, which is the order
/// the operator pasted or the source JSON listed them in.
///

#[repr(transparent)]
#[derive(Clone, Debug, Default, Deref, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SkuList(Vec<Sku>);

impl SkuList {
    /// Create an empty SKU list.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Build a list from raw SKUs, discarding later duplicates.
    #[must_use]
    pub fn from_vec(skus: Vec<Sku>) -> Self {
        let mut list = Self::new();
        for sku in skus {
            list.insert(sku);
        }

        list
    }

    /// Return the number of SKUs in the list.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the list is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return an iterator over the SKUs.
    pub fn iter(&self) -> std::slice::Iter<'_, Sku> {
        self.0.iter()
    }

    /// Returns `true` if the list already contains the SKU.
    ///
    /// Equality is an exact case-sensitive string match.
    #[must_use]
    pub fn contains(&self, sku: &Sku) -> bool {
        self.0.iter().any(|existing| existing == sku)
    }

    /// Insert a SKU, returning `true` if it was newly inserted.
    pub fn insert(&mut self, sku: Sku) -> bool {
        if self.contains(&sku) {
            return false;
        }

        self.0.push(sku);

        true
    }

    /// Return the SKUs as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Sku] {
        &self.0
    }
}

impl IntoIterator for SkuList {
    type Item = Sku;
    type IntoIter = std::vec::IntoIter<Sku>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a SkuList {
    type Item = &'a Sku;
    type IntoIter = std::slice::Iter<'a, Sku>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<Sku> for SkuList {
    fn from_iter<I: IntoIterator<Item = Sku>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<'de> Deserialize<'de> for SkuList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let skus = Vec::<Sku>::deserialize(deserializer)?;

        Ok(Self::from_vec(skus))
    }
}
