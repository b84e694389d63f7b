//! Property suite over the whole pipeline: normalization round trips,
//! sanitizer idempotence, and the merge invariants.

use crate::{
    export, merge, normalize, sanitize,
    store::{PromoRecord, PromoStore},
    types::{BonusCode, PromoKey, Sku},
    view,
};
use proptest::prelude::*;
use serde_json::Value;

fn arb_sku() -> impl Strategy<Value = Sku> {
    "[A-Za-z0-9_.-]{1,10}".prop_map(Sku::from)
}

fn arb_bonus() -> impl Strategy<Value = BonusCode> {
    prop_oneof![Just(BonusCode::default()), "[0-9]{4,6}".prop_map(BonusCode::new)]
}

fn arb_record() -> impl Strategy<Value = PromoRecord> {
    (prop::collection::vec(arb_sku(), 0..8), arb_bonus())
        .prop_map(|(skus, bonus)| PromoRecord::new(skus.into_iter().collect(), bonus))
}

fn arb_store(keys: std::ops::Range<usize>) -> impl Strategy<Value = PromoStore> {
    prop::collection::hash_map("[a-z0-9_]{1,8}".prop_map(PromoKey::from), arb_record(), keys)
        .prop_map(|entries| entries.into_iter().collect())
}

/// A SKU token the way operators actually paste them: a clean core wrapped
/// in zero or more quote pairs, with stray spaces inside and outside every
/// wrap.
fn arb_raw_token() -> impl Strategy<Value = String> {
    let wraps = prop::collection::vec((0usize..2, 0usize..2), 0..3);
    ("[A-Za-z0-9_.-]{1,10}", wraps, 0usize..3, 0usize..3).prop_map(
        |(core, wraps, pad_left, pad_right)| {
            let mut token = core;
            for (inner_left, inner_right) in wraps {
                token = format!(
                    "\"{}{token}{}\"",
                    " ".repeat(inner_left),
                    " ".repeat(inner_right)
                );
            }

            format!("{}{token}{}", " ".repeat(pad_left), " ".repeat(pad_right))
        },
    )
}

fn arb_sku_blob() -> impl Strategy<Value = String> {
    prop::collection::vec(
        (arb_raw_token(), prop_oneof![Just(","), Just("\n"), Just("\r\n"), Just(", ")]),
        0..8,
    )
    .prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(token, sep)| format!("{token}{sep}"))
            .collect()
    })
}

proptest! {
    #[test]
    fn flat_row_count_matches_store_sku_total(store in arb_store(0..6)) {
        prop_assert_eq!(view::rows(&store).len(), store.sku_total());
    }

    #[test]
    fn json_export_normalizes_back_to_the_same_store(store in arb_store(0..6)) {
        let rendered = export::json(&store).expect("JSON export should render");
        let value: Value = serde_json::from_str(&rendered).expect("export output should parse");

        let (decoded, report) = normalize::promo_store(&value);
        prop_assert_eq!(&decoded, &store);
        prop_assert_eq!(report.accepted.len(), store.len());
        prop_assert!(report.rejected.is_empty());
        prop_assert_eq!(report.dropped_products, 0);
    }
}

proptest! {
    #[test]
    fn sanitizer_output_is_clean_and_unique(blob in arb_sku_blob()) {
        let tokens = sanitize::sku_tokens(&blob);

        for (index, sku) in tokens.iter().enumerate() {
            prop_assert!(!sku.as_str().is_empty());
            prop_assert!(!sku.as_str().contains(' '));
            prop_assert!(!tokens.as_slice()[..index].contains(sku));
        }
    }

    #[test]
    fn sanitizer_is_idempotent_over_its_own_output(blob in arb_sku_blob()) {
        let tokens = sanitize::sku_tokens(&blob);
        let rejoined = tokens
            .iter()
            .map(Sku::as_str)
            .collect::<Vec<_>>()
            .join(",");

        prop_assert_eq!(sanitize::sku_tokens(&rejoined), tokens);
    }

    // Same law over arbitrary text, not just plausible paste shapes.
    #[test]
    fn sanitizer_is_idempotent_over_any_text(blob in any::<String>()) {
        let tokens = sanitize::sku_tokens(&blob);
        let rejoined = tokens
            .iter()
            .map(Sku::as_str)
            .collect::<Vec<_>>()
            .join(",");

        prop_assert_eq!(sanitize::sku_tokens(&rejoined), tokens);
    }
}

proptest! {
    #[test]
    fn merge_preserves_keys_and_bonuses(
        store in arb_store(1..5),
        target in any::<prop::sample::Index>(),
        candidates in prop::collection::vec(arb_sku(), 1..10),
    ) {
        let keys: Vec<PromoKey> = store.keys().cloned().collect();
        let target = target.get(&keys);

        let outcome = merge::merge_skus(&store, target, &candidates)
            .expect("merge into an existing key should succeed");

        let merged_keys: Vec<&PromoKey> = outcome.store().keys().collect();
        prop_assert_eq!(merged_keys, keys.iter().collect::<Vec<_>>());
        for (key, record) in store.iter() {
            let merged = outcome.store().get(key).expect("key survives the merge");
            prop_assert_eq!(&merged.bonus, &record.bonus);
        }
    }

    #[test]
    fn merge_is_monotonic_and_accounts_for_every_candidate(
        store in arb_store(1..5),
        target in any::<prop::sample::Index>(),
        candidates in prop::collection::vec(arb_sku(), 1..10),
    ) {
        let keys: Vec<PromoKey> = store.keys().cloned().collect();
        let target = target.get(&keys);
        let before = store.get(target).expect("target exists").sku_count();

        let outcome = merge::merge_skus(&store, target, &candidates)
            .expect("merge into an existing key should succeed");

        let report = outcome.report();
        let after = outcome
            .store()
            .get(target)
            .expect("target survives the merge")
            .sku_count();
        prop_assert_eq!(after, before + report.added.len());
        prop_assert_eq!(report.candidate_count(), candidates.len());
    }

    #[test]
    fn remerging_the_same_candidates_adds_nothing(
        store in arb_store(1..5),
        target in any::<prop::sample::Index>(),
        candidates in prop::collection::vec(arb_sku(), 1..10),
    ) {
        let keys: Vec<PromoKey> = store.keys().cloned().collect();
        let target = target.get(&keys);

        let first = merge::merge_skus(&store, target, &candidates)
            .expect("merge into an existing key should succeed");
        let second = merge::merge_skus(first.store(), target, &candidates)
            .expect("re-merge should succeed");

        prop_assert!(second.report().added.is_empty());
        prop_assert_eq!(&second.report().skipped, &candidates);
        prop_assert_eq!(second.store(), first.store());
    }
}
