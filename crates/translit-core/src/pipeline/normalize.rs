use std::borrow::Cow;

use icu_normalizer::ComposingNormalizerBorrowed;
use tracing::debug_span;

use crate::script::{compose_nukta, NUKTA};

pub(crate) fn nfc(text: &str) -> Cow<'_, str> {
    ComposingNormalizerBorrowed::new_nfc().normalize(text)
}

/// Replace each base consonant + combining nukta pair with its precomposed
/// codepoint. Pairs outside the fixed combination list are left split.
fn merge_nukta(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if chars.peek() == Some(&NUKTA) {
            if let Some(composed) = compose_nukta(c) {
                out.push(composed);
                chars.next();
                continue;
            }
        }
        out.push(c);
    }
    out
}

/// NFC followed by nukta merging: the form rule-table keys and scan input
/// are compared in.
pub(crate) fn canonical_grapheme(text: &str) -> String {
    merge_nukta(&nfc(text))
}

/// Replace standalone symbols, trying longer keys first at each position.
fn replace_symbols(text: &str, symbols: &[(String, String)]) -> String {
    if symbols.is_empty() {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    'scan: while let Some(c) = rest.chars().next() {
        for (key, value) in symbols {
            if let Some(tail) = rest.strip_prefix(key.as_str()) {
                out.push_str(value);
                rest = tail;
                continue 'scan;
            }
        }
        out.push(c);
        rest = &rest[c.len_utf8()..];
    }
    out
}

/// Canonicalize `text` for the schwa scan.
///
/// `symbols` must be sorted longest key first (as [`RuleSet::symbols`]
/// returns them). Total and idempotent; unknown codepoints pass through.
///
/// [`RuleSet::symbols`]: crate::rules::RuleSet::symbols
pub fn normalize(text: &str, symbols: &[(String, String)]) -> String {
    let _span = debug_span!("normalize", len = text.len()).entered();
    replace_symbols(&canonical_grapheme(text), symbols)
}
