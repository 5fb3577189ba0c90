use super::translit;

fn check(cases: &[(&str, &str)]) {
    for &(input, expected) in cases {
        let actual = translit(input);
        assert_eq!(
            actual, expected,
            "transliteration mismatch: input={input:?}, expected={expected:?}, got={actual:?}"
        );
    }
}

#[test]
fn test_nukta_and_nasal() {
    check(&[
        // Decomposed ज + nukta as typed on most keyboards.
        ("\u{091C}\u{093C}मीन", "zamin"),
        ("\u{095B}मीन", "zamin"),
        ("चाँद", "chaand"),
        ("\u{095B}िंदगी", "zindagi"),
        ("स\u{095C}क", "sarak"),
        ("गंगा", "ganga"),
        ("संगम", "sangam"),
    ]);
}

#[test]
fn test_anusvara_before_boundary_keeps_schwa() {
    check(&[
        ("हं है", "han hai"),
        ("सं.", "san."),
        ("हं", "hn"),
    ]);
}

#[test]
fn test_chandrabindu_adds_no_schwa() {
    check(&[("हँसी", "hnsi"), ("हँस", "hns")]);
}

#[test]
fn test_canonical_table_values() {
    check(&[
        ("क़लम", "klam"),
        ("फ़ोन", "phon"),
        ("ग़म", "gam"),
        ("ढ़", "d"),
        ("दुःख", "duakh"),
        ("ऐनक", "aenak"),
    ]);
}

#[test]
fn test_conjuncts() {
    check(&[
        ("क्षमा", "kshama"),
        ("लक्ष्मी", "lakshmi"),
        ("ज्ञान", "gyan"),
        ("श्री", "shri"),
        ("रक्षा", "raksha"),
        ("पक्ष", "paksha"),
        ("कक्षा", "kaksha"),
    ]);
}

#[test]
fn test_generic_clusters() {
    check(&[
        ("पद्म", "padm"),
        ("कर्म", "karm"),
        ("उत्तम", "uttam"),
        ("सत्यम", "satyam"),
        ("नमस्ते", "namaste"),
        ("क्या", "kya"),
        ("हिन्दी", "hindi"),
        ("दिल्ली", "dilli"),
        ("\u{095E}िल्म", "philm"),
    ]);
}

#[test]
fn test_schwa_by_context() {
    check(&[
        ("कमल", "kamal"),
        ("भारत", "bhaarat"),
        ("अपना", "apna"),
        ("किताब", "kitaab"),
        ("पानी", "paani"),
        ("आज", "aaj"),
        ("ऋषि", "rishi"),
    ]);
}

#[test]
fn test_word_final_nasal_vowels() {
    check(&[
        ("में", "mein"),
        ("मैं", "main"),
        ("नहीं", "nahin"),
        ("हिंदी", "hindi"),
        ("अंत", "ant"),
    ]);
}

#[test]
fn test_digits() {
    check(&[
        ("१२३", "123"),
        ("०", "0"),
        ("कक्षा १०", "kaksha 10"),
    ]);
}

#[test]
fn test_whitespace_preserved() {
    check(&[
        ("राम  राम", "raam  raam"),
        ("राम\nराम", "raam\nraam"),
        ("राम\tराम", "raam\traam"),
        ("  राम ", "  raam "),
        ("", ""),
    ]);
}

#[test]
fn test_punctuation_and_symbols() {
    check(&[
        ("राम।", "raam."),
        ("राम॥", "raam.."),
        ("ॐ नमः", "om namaa"),
        ("सोऽहम्", "so'ham"),
        ("राम, श्याम!", "raam, shyaam!"),
    ]);
}

#[test]
fn test_mixed_script() {
    check(&[
        ("topic (विषय)", "topic (vishay)"),
        ("hello", "hello"),
        ("नमस्ते world", "namaste world"),
    ]);
}
