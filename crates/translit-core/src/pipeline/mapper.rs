use tracing::debug_span;

use crate::classify::Class;
use crate::rules::RuleSet;
use crate::script::{SIGN_AA, SIGN_II};

/// Replace every known grapheme in the expanded string with its Roman form.
///
/// "ा" and "ी" shorten to "a"/"i" at the end of a word and before another
/// vowel; "ी" also shortens before a diacritic. Anything the tables do not
/// know (Latin text, the schwa markers, viramas) is copied through.
pub fn map(text: &str, rules: &RuleSet) -> String {
    let chars: Vec<char> = text.chars().collect();
    let _span = debug_span!("map", char_count = chars.len()).entered();
    let classes = rules.classifier().classify(&chars);

    let mut out = String::with_capacity(text.len() * 2);
    for (i, &c) in chars.iter().enumerate() {
        let next = classes.get(i + 1).copied();
        if let Some(short) = short_form(c, next) {
            out.push_str(short);
            continue;
        }
        match rules.map_grapheme(c) {
            Some(roman) => out.push_str(roman),
            None => out.push(c),
        }
    }
    out
}

/// Short rendering of a long vowel sign, when the following class calls
/// for it. `None` for the end of text reads as a word boundary.
fn short_form(sign: char, next: Option<Class>) -> Option<&'static str> {
    let word_end = next.map_or(true, Class::is_boundary);
    let before_vowel = next.is_some_and(Class::is_vowel);
    match sign {
        SIGN_AA if word_end || before_vowel => Some("a"),
        SIGN_II if word_end || before_vowel || next == Some(Class::Diacritic) => Some("i"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map_canonical(text: &str) -> String {
        map(text, RuleSet::canonical())
    }

    #[test]
    fn test_short_form_rules() {
        assert_eq!(short_form(SIGN_AA, None), Some("a"));
        assert_eq!(short_form(SIGN_AA, Some(Class::Boundary)), Some("a"));
        assert_eq!(short_form(SIGN_AA, Some(Class::IndependentVowel)), Some("a"));
        assert_eq!(short_form(SIGN_AA, Some(Class::Consonant)), None);
        assert_eq!(short_form(SIGN_AA, Some(Class::Diacritic)), None);
        assert_eq!(short_form(SIGN_II, Some(Class::Diacritic)), Some("i"));
        assert_eq!(short_form(SIGN_II, Some(Class::Consonant)), None);
        assert_eq!(short_form('ि', None), None);
    }

    #[test]
    fn test_long_a_inside_word() {
        assert_eq!(map_canonical("राम"), "raam");
        assert_eq!(map_canonical("चाँद"), "chaand");
    }

    #[test]
    fn test_long_a_at_word_end() {
        assert_eq!(map_canonical("kshaमा"), "kshama");
        assert_eq!(map_canonical("रा रा"), "ra ra");
    }

    #[test]
    fn test_long_i_follows_table_inside_word() {
        let rules = RuleSet::builder()
            .dependent_vowels([("ा", "aa"), ("ी", "ee")])
            .build()
            .unwrap();
        assert_eq!(map("\u{095B}aमीन", &rules), "zameen");
        assert_eq!(map("नaहीं", &rules), "nahin");
        assert_eq!(map("नaदी", &rules), "nadi");
    }

    #[test]
    fn test_unknown_passes_through() {
        assert_eq!(map_canonical("topic (विषaय)"), "topic (vishay)");
        assert_eq!(map_canonical("क्य"), "k\u{094D}y");
        assert_eq!(map_canonical("123"), "123");
    }

    #[test]
    fn test_lookup_order() {
        assert_eq!(map_canonical("आ"), "aa");
        assert_eq!(map_canonical("\u{095B}"), "z");
        assert_eq!(map_canonical("हः"), "ha");
    }
}
