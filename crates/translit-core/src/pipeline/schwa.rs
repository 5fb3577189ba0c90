//! Inherent-vowel (schwa) insertion.
//!
//! A single forward scan over the normalized text. At each position the
//! rules below are tried in order; the first that applies writes its output
//! and reports how many codepoints it consumed. The result is the input with
//! an explicit `a` after every consonant whose inherent vowel is pronounced,
//! conjuncts already rendered in Roman, and digits already in ASCII.

use tracing::{debug, debug_span};

use super::conjunct::ConjunctResolver;
use super::context::{Context, Window};
use crate::classify::Class;
use crate::rules::RuleSet;
use crate::script::{ANUSVARA, SCHWA, SIGN_AA, SIGN_E, SIGN_II, SIGN_UU, VIRAMA};

/// Irregular rendering of word-final "ें".
const FINAL_EIN: &str = "ein";

pub fn insert_schwa(text: &str, rules: &RuleSet) -> String {
    let chars: Vec<char> = text.chars().collect();
    let _span = debug_span!("insert_schwa", char_count = chars.len()).entered();
    let classes = rules.classifier().classify(&chars);

    let mut scan = Scan {
        rules,
        conjuncts: ConjunctResolver::new(rules),
        out: String::with_capacity(text.len() + text.len() / 2),
        inserted: 0,
    };
    let mut window = Window::new(&chars, &classes);
    while !window.is_done() {
        let consumed = scan.step(&window);
        window.advance(consumed);
    }

    debug!(inserted = scan.inserted);
    scan.out
}

struct Scan<'r> {
    rules: &'r RuleSet,
    conjuncts: ConjunctResolver<'r>,
    out: String,
    inserted: usize,
}

impl Scan<'_> {
    fn schwa(&mut self) {
        self.out.push(SCHWA);
        self.inserted += 1;
    }

    /// Emit output for the cursor position; returns codepoints consumed (≥ 1).
    fn step(&mut self, w: &Window<'_>) -> usize {
        let Some((c, class)) = w.at(0) else {
            return 1;
        };

        match class {
            Class::Virama => {
                self.out.push(c);
                return 1;
            }
            Class::Digit => {
                match self.rules.digit(c) {
                    Some(ascii) => self.out.push_str(ascii),
                    None => self.out.push(c),
                }
                return 1;
            }
            _ => {}
        }

        // Last codepoint: a word-final consonant keeps no inherent vowel.
        let Some((next, next_class)) = w.at(1) else {
            self.out.push(c);
            return 1;
        };

        if next_class == Class::Virama && class.is_consonant() {
            return self.cluster(w, c, class);
        }

        if c == SIGN_E && next == ANUSVARA && w.class_or_boundary(2).is_boundary() {
            self.out.push_str(FINAL_EIN);
            return 2;
        }

        self.out.push(c);

        if next == SIGN_AA {
            return 1;
        }

        if class == Class::NuktaConsonant && !next_class.is_vowel() && !next_class.is_boundary() {
            if nukta_keeps_schwa(w.at(2)) {
                self.schwa();
            }
            return 1;
        }

        if class.is_consonant() && next_class.is_consonant() {
            if pair_keeps_schwa(w.context(), w.class_or_boundary(2)) {
                self.schwa();
            }
            return 1;
        }

        if class.is_consonant()
            && next == ANUSVARA
            && w.class_at(2).is_some_and(|after| !after.is_vowel())
        {
            self.schwa();
        }
        1
    }

    /// Consonant followed by a virama: a known conjunct, a generic
    /// consonant-virama-consonant cluster, or a dead consonant.
    fn cluster(&mut self, w: &Window<'_>, lead: char, lead_class: Class) -> usize {
        if let Some(conjunct) = self.conjuncts.resolve(w) {
            self.out.push_str(conjunct.roman);
            if conjunct.schwa {
                self.schwa();
            }
            return conjunct.len;
        }

        match w.at(2) {
            Some((trailing, trailing_class)) if trailing_class.is_consonant() => {
                self.out.push(lead);
                self.out.push(VIRAMA);
                self.out.push(trailing);
                if cluster_keeps_schwa(lead_class, w.class_at(3), w.class_at(4)) {
                    self.schwa();
                }
                3
            }
            _ => {
                self.out.push(lead);
                self.out.push(VIRAMA);
                2
            }
        }
    }
}

/// Consonant followed directly by another consonant.
fn pair_keeps_schwa(context: Context, two_ahead: Class) -> bool {
    match context {
        Context::StartOfWord | Context::AfterBoundary => true,
        Context::AfterVowel | Context::AfterConsonant => !two_ahead.is_vowel(),
        Context::Other => true,
    }
}

/// Nukta consonant followed by a non-vowel, non-boundary grapheme. The vowel
/// survives only before a long ū/ī sign two positions on, or when the text
/// ends right after the next grapheme.
fn nukta_keeps_schwa(two_ahead: Option<(char, Class)>) -> bool {
    match two_ahead {
        None => true,
        Some((c, class)) => class.is_vowel() && (c == SIGN_UU || c == SIGN_II),
    }
}

/// Plain consonant + virama + trailing consonant: the trailing consonant
/// keeps its vowel when another plain consonant follows and the grapheme
/// after that is not a vowel.
fn cluster_keeps_schwa(lead: Class, after: Option<Class>, beyond: Option<Class>) -> bool {
    lead == Class::Consonant
        && after == Some(Class::Consonant)
        && !beyond.is_some_and(Class::is_vowel)
}
