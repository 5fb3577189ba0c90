use super::context::Window;
use crate::classify::Class;
use crate::rules::RuleSet;
use crate::script::SIGN_AA;

/// A fixed conjunct recognized at the cursor.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ConjunctMatch<'r> {
    pub roman: &'r str,
    /// Codepoints consumed from the input.
    pub len: usize,
    /// Whether the inherent vowel follows the conjunct.
    pub schwa: bool,
}

/// Recognizes consonant + virama + consonant clusters with an irregular
/// Roman rendering (क्ष, ज्ञ, …) ahead of the generic cluster rule.
pub(crate) struct ConjunctResolver<'r> {
    rules: &'r RuleSet,
}

impl<'r> ConjunctResolver<'r> {
    pub(crate) fn new(rules: &'r RuleSet) -> Self {
        Self { rules }
    }

    pub(crate) fn resolve(&self, window: &Window<'_>) -> Option<ConjunctMatch<'r>> {
        let cluster = [
            window.char_at(0)?,
            window.char_at(1)?,
            window.char_at(2)?,
        ];
        let roman = self.rules.conjunct(cluster)?;
        let matched = match window.at(3) {
            // A following long-a sign collapses into the conjunct's own vowel.
            Some((SIGN_AA, _)) => ConjunctMatch {
                roman,
                len: 4,
                schwa: true,
            },
            Some((_, class)) if class.is_vowel() || class == Class::Virama => ConjunctMatch {
                roman,
                len: 3,
                schwa: false,
            },
            _ => ConjunctMatch {
                roman,
                len: 3,
                schwa: true,
            },
        };
        Some(matched)
    }
}
