use crate::rules::{RuleSet, RulesError, TableKind};
use crate::Transliterator;

#[test]
fn test_custom_long_vowels() {
    let rules = RuleSet::builder()
        .dependent_vowels([
            ("ा", "aa"),
            ("ि", "i"),
            ("ी", "ee"),
            ("ु", "u"),
            ("ू", "oo"),
            ("े", "e"),
        ])
        .build()
        .unwrap();
    let t = Transliterator::with_rules(rules);
    assert_eq!(t.transliterate("\u{095B}मीन"), "zameen");
    // Word-final and pre-diacritic forms stay short.
    assert_eq!(t.transliterate("नदी"), "nadi");
    assert_eq!(t.transliterate("नहीं"), "nahin");
}

#[test]
fn test_custom_conjunct_table() {
    let rules = RuleSet::builder()
        .conjuncts([("क्ष", "x"), ("द्म", "dm")])
        .build()
        .unwrap();
    let t = Transliterator::with_rules(rules);
    assert_eq!(t.transliterate("क्षमा"), "xama");
    assert_eq!(t.transliterate("पद्म"), "padma");
    // ज्ञ is no longer special: a generic cluster.
    assert_eq!(t.transliterate("ज्ञ"), "jnj");
}

#[test]
fn test_empty_symbol_table_leaves_symbols() {
    let rules = RuleSet::builder()
        .symbols(std::iter::empty::<(&str, &str)>())
        .build()
        .unwrap();
    let t = Transliterator::with_rules(rules);
    assert_eq!(t.transliterate("ॐ"), "ॐ");
    // The finalizer still turns danda into a period.
    assert_eq!(t.transliterate("राम।"), "raam.");
}

#[test]
fn test_missing_long_a_fails_fast() {
    let err = RuleSet::builder()
        .dependent_vowels([("ी", "ee")])
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        RulesError::MissingEntry {
            table: TableKind::DependentVowels,
            ..
        }
    ));
}

#[test]
fn test_partial_toml_overlay() {
    let t = Transliterator::from_toml(
        r#"
[consonants]
"क" = "q"
"म" = "m"
"ल" = "l"

# The canonical conjuncts name consonants this table drops.
[conjuncts]
"#,
    )
    .unwrap();
    assert_eq!(t.transliterate("कमल"), "qamal");
    // Untouched tables keep their canonical contents.
    assert_eq!(t.transliterate("१"), "1");
}

#[test]
fn test_init_custom_after_global_is_rejected() {
    let _ = RuleSet::global();
    let err = RuleSet::init_custom("[digits]\n\"१\" = \"1\"\n".to_string()).unwrap_err();
    assert!(matches!(err, RulesError::AlreadyInitialized));
}
