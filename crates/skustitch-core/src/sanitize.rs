//! Free-text SKU tokenizer.
//!
//! Operators paste SKU lists straight out of spreadsheets, emails, and chat,
//! so the input arrives with arbitrary separators, stray quotes, and spaces
//! inside numbers. This module turns that text into clean candidates for the
//! merge engine.

use crate::types::{Sku, SkuList};

/// Extract SKU candidates from pasted free text.
///
/// Newlines count as separators alongside commas. Each token is trimmed,
/// stripped of surrounding double-quote pairs, and cleared of interior
/// spaces, repeating until it stops changing, so stacked decoration
/// (quotes around quotes, spaces inside quotes) cleans all the way down.
/// Empty tokens vanish and duplicates collapse to their first occurrence,
/// and the output re-sanitizes to itself.
#[must_use]
pub fn sku_tokens(input: &str) -> SkuList {
    let separated = input.replace(['\r', '\n'], ",");

    separated
        .split(',')
        .filter_map(clean_token)
        .map(Sku::new)
        .collect()
}

/// Clean one raw token to a fixpoint, returning `None` when nothing
/// survives. Every pass can only shorten the token, so the loop terminates.
fn clean_token(raw: &str) -> Option<String> {
    let mut token = raw.to_string();
    loop {
        let trimmed = token.trim();
        let unquoted = trimmed
            .strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'))
            .unwrap_or(trimmed);
        let compact = unquoted.replace(' ', "");
        if compact == token {
            break;
        }
        token = compact;
    }

    if token.is_empty() { None } else { Some(token) }
}
