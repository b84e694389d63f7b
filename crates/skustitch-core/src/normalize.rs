//! Validating projection from loosely-typed JSON into the canonical
//! [`PromoStore`].
//!
//! Decoding is two-stage: callers parse text into a [`serde_json::Value`]
//! first, then this module projects it entry by entry. Malformed entries are
//! excluded and reported, never fatal.

use crate::{
    store::{PromoRecord, PromoStore},
    types::{BonusCode, PromoKey, Sku, SkuList},
};
use serde_json::Value;
use std::fmt;

///
/// ValueKind
///
/// JSON type tag used in rejection reporting.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ValueKind {
    #[default]
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    #[must_use]
    pub const fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        };
        f.write_str(label)
    }
}

///
/// RejectedEntry
///
/// A top-level entry excluded from the store because its value was not an
/// object. Carries the raw key (it never became a [`PromoKey`]) and the
/// JSON type that was found instead.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RejectedEntry {
    pub key: String,
    pub found: ValueKind,
}

///
/// NormalizeReport
///
/// Per-entry acceptance/rejection outcome of one normalization pass. `root`
/// records the JSON type of the input itself; anything but an object means
/// nothing was accepted. `dropped_products` counts product elements
/// discarded inside accepted entries (empty after trimming, or not a
/// scalar).
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct NormalizeReport {
    pub root: ValueKind,
    pub accepted: Vec<PromoKey>,
    pub rejected: Vec<RejectedEntry>,
    pub dropped_products: usize,
}

/// Project an arbitrary decoded JSON value into a canonical promo store.
///
/// Total and pure: any input produces a store (possibly empty) plus a
/// report. A non-object root yields an empty store with nothing accepted
/// or rejected.
#[must_use]
pub fn promo_store(value: &Value) -> (PromoStore, NormalizeReport) {
    let mut store = PromoStore::new();
    let mut report = NormalizeReport {
        root: ValueKind::of(value),
        ..NormalizeReport::default()
    };

    let Value::Object(entries) = value else {
        return (store, report);
    };

    for (key, entry) in entries {
        let Value::Object(fields) = entry else {
            report.rejected.push(RejectedEntry {
                key: key.clone(),
                found: ValueKind::of(entry),
            });
            continue;
        };

        let mut products = SkuList::new();
        if let Some(Value::Array(elements)) = fields.get("products") {
            for element in elements {
                match scalar_text(element) {
                    Some(text) => {
                        let trimmed = text.trim();
                        if trimmed.is_empty() {
                            report.dropped_products += 1;
                        } else {
                            products.insert(Sku::from(trimmed));
                        }
                    }
                    None => report.dropped_products += 1,
                }
            }
        }

        let bonus = fields
            .get("bonus")
            .and_then(scalar_text)
            .map_or_else(BonusCode::default, BonusCode::new);

        let key = PromoKey::new(key.clone());
        report.accepted.push(key.clone());
        store.insert(key, PromoRecord::new(products, bonus));
    }

    (store, report)
}

/// Render a scalar JSON value as text. Strings pass through; numbers and
/// bools render naturally; null and compound values have no text form.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
