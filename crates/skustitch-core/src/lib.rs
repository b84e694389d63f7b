//! Core pipeline for SKUStitch: promo JSON normalization, SKU text
//! sanitizing, the merge engine, flat row views, and export serializers,
//! held together by a session facade that owns the read-modify-write cycle.
#![warn(unreachable_pub)]

pub mod export;
pub mod merge;
pub mod normalize;
pub mod obs;
pub mod sanitize;
pub mod session;
pub mod store;
pub mod types;
pub mod view;

// test
#[cfg(test)]
mod properties;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// Errors, reports, and serializers stay module-qualified.
///

pub mod prelude {
    pub use crate::{
        session::Session,
        store::{PromoRecord, PromoStore},
        types::{BonusCode, PromoKey, Sku, SkuList},
        view::PromoRow,
    };
}
