//! Per-codepoint grapheme classification.
//!
//! Classes are derived from table membership once, when a rule set is
//! compiled, so the scan never has to consult several tables per codepoint.

use std::collections::HashMap;

use crate::script::{is_word_boundary, VIRAMA};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Class {
    IndependentVowel,
    /// Dependent vowel sign (matra).
    VowelSign,
    Consonant,
    /// Precomposed consonant + nukta.
    NuktaConsonant,
    /// Nasalization marks and visarga.
    Diacritic,
    Virama,
    Digit,
    Symbol,
    Boundary,
    /// Anything the tables do not know: Latin text, brackets, stray marks.
    Other,
}

impl Class {
    pub fn is_vowel(self) -> bool {
        matches!(self, Class::IndependentVowel | Class::VowelSign)
    }

    pub fn is_consonant(self) -> bool {
        matches!(self, Class::Consonant | Class::NuktaConsonant)
    }

    pub fn is_boundary(self) -> bool {
        self == Class::Boundary
    }
}

#[derive(Debug, Clone, Default)]
pub struct Classifier {
    classes: HashMap<char, Class>,
}

impl Classifier {
    /// Record `c` as `class`. Returns the class already recorded for `c`, if
    /// any, leaving the earlier entry in place.
    pub(crate) fn insert(&mut self, c: char, class: Class) -> Option<Class> {
        match self.classes.get(&c) {
            Some(&existing) => Some(existing),
            None => {
                self.classes.insert(c, class);
                None
            }
        }
    }

    pub fn class_of(&self, c: char) -> Class {
        if c == VIRAMA {
            return Class::Virama;
        }
        if let Some(&class) = self.classes.get(&c) {
            return class;
        }
        if is_word_boundary(c) {
            Class::Boundary
        } else {
            Class::Other
        }
    }

    pub fn classify(&self, chars: &[char]) -> Vec<Class> {
        chars.iter().map(|&c| self.class_of(c)).collect()
    }
}
