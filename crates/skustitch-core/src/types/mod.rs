mod sku_list;

pub use sku_list::SkuList;

use serde::{Deserialize, Serialize};
use std::fmt;

///
/// PromoKey
///
/// Identifier of one promo record within a store.
/// Opaque and case-sensitive; compared exactly.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PromoKey(String);

impl PromoKey {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PromoKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PromoKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl From<String> for PromoKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

///
/// Sku
///
/// One stock-keeping-unit identifier.
/// Opaque and case-sensitive; producers guarantee it is trimmed and
/// non-empty, the type itself does not re-validate.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Sku(String);

impl Sku {
    #[must_use]
    pub fn new(sku: impl Into<String>) -> Self {
        Self(sku.into())
    }

    /// Returns the SKU as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Sku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Sku {
    fn from(sku: &str) -> Self {
        Self(sku.to_string())
    }
}

impl From<String> for Sku {
    fn from(sku: String) -> Self {
        Self(sku)
    }
}

///
/// BonusCode
///
/// The SKU of the bonus item attached to a promo.
/// Never split, trimmed, or validated, and never altered by a merge.
/// Absent in input decodes to the empty string.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BonusCode(String);

impl BonusCode {
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the bonus code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if no bonus code is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for BonusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BonusCode {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

impl From<String> for BonusCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}
