//! Codepoint constants and block-level classification for Devanagari text.

/// Virama (halant): suppresses a consonant's inherent vowel.
pub const VIRAMA: char = '\u{094D}';
/// Combining nukta sign.
pub const NUKTA: char = '\u{093C}';
pub const ANUSVARA: char = '\u{0902}';
pub const CANDRABINDU: char = '\u{0901}';
pub const DANDA: char = '\u{0964}';
/// Long-a vowel sign "ा".
pub const SIGN_AA: char = '\u{093E}';
/// Long-i vowel sign "ी".
pub const SIGN_II: char = '\u{0940}';
/// Long-u vowel sign "ू".
pub const SIGN_UU: char = '\u{0942}';
/// E vowel sign "े".
pub const SIGN_E: char = '\u{0947}';

/// The inherent vowel marker written into the intermediate string.
pub const SCHWA: char = 'a';

/// Base consonant + combining nukta pairs and their precomposed codepoints.
///
/// U+0958..U+095F are NFC composition exclusions, so NFC output always
/// carries the split form and it has to be merged back by hand.
pub const NUKTA_COMBINATIONS: [(char, char); 8] = [
    ('\u{0915}', '\u{0958}'), // क → क़
    ('\u{0916}', '\u{0959}'), // ख → ख़
    ('\u{0917}', '\u{095A}'), // ग → ग़
    ('\u{091C}', '\u{095B}'), // ज → ज़
    ('\u{0921}', '\u{095C}'), // ड → ड़
    ('\u{0922}', '\u{095D}'), // ढ → ढ़
    ('\u{092B}', '\u{095E}'), // फ → फ़
    ('\u{092F}', '\u{095F}'), // य → य़
];

/// Characters that delimit words for the schwa and vowel-sign rules.
/// End of text is treated as a boundary as well.
pub const WORD_BOUNDARIES: [char; 12] = [
    ' ', '\n', '\t', '\r', ':', DANDA, '.', ',', '!', '?', ';', '-',
];

pub fn is_word_boundary(c: char) -> bool {
    WORD_BOUNDARIES.contains(&c)
}

/// Check the full Devanagari block (U+0900..U+097F).
pub fn is_devanagari(c: char) -> bool {
    ('\u{0900}'..='\u{097F}').contains(&c)
}

pub fn contains_devanagari(s: &str) -> bool {
    s.chars().any(is_devanagari)
}

/// Precomposed form of `base` + nukta, if the pair is one of the merged ones.
pub fn compose_nukta(base: char) -> Option<char> {
    NUKTA_COMBINATIONS
        .iter()
        .find(|(b, _)| *b == base)
        .map(|&(_, composed)| composed)
}
