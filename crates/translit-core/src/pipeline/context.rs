use crate::classify::Class;

/// What the scan saw immediately before the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Context {
    /// Cursor at the start of the text.
    StartOfWord,
    AfterBoundary,
    AfterVowel,
    AfterConsonant,
    /// Diacritics, Latin text, brackets and anything else.
    Other,
}

impl Context {
    pub fn from_previous(prev: Option<Class>) -> Self {
        match prev {
            None => Context::StartOfWord,
            Some(class) if class.is_boundary() => Context::AfterBoundary,
            Some(class) if class.is_vowel() => Context::AfterVowel,
            Some(class) if class.is_consonant() => Context::AfterConsonant,
            Some(_) => Context::Other,
        }
    }
}

/// Cursor over a classified codepoint sequence with one codepoint of
/// lookbehind and bounded lookahead. Reads past the end yield `None`.
pub(crate) struct Window<'a> {
    chars: &'a [char],
    classes: &'a [Class],
    pos: usize,
}

impl<'a> Window<'a> {
    pub(crate) fn new(chars: &'a [char], classes: &'a [Class]) -> Self {
        debug_assert_eq!(chars.len(), classes.len());
        Self {
            chars,
            classes,
            pos: 0,
        }
    }

    pub(crate) fn is_done(&self) -> bool {
        self.pos >= self.chars.len()
    }

    pub(crate) fn advance(&mut self, n: usize) {
        debug_assert!(n > 0, "scan must always move forward");
        self.pos += n;
    }

    /// Codepoint and class `offset` positions ahead of the cursor
    /// (`0` is the cursor itself).
    pub(crate) fn at(&self, offset: usize) -> Option<(char, Class)> {
        let i = self.pos + offset;
        Some((*self.chars.get(i)?, *self.classes.get(i)?))
    }

    pub(crate) fn class_at(&self, offset: usize) -> Option<Class> {
        self.at(offset).map(|(_, class)| class)
    }

    pub(crate) fn char_at(&self, offset: usize) -> Option<char> {
        self.at(offset).map(|(c, _)| c)
    }

    /// Like [`Window::class_at`], with the end of text reading as a boundary.
    pub(crate) fn class_or_boundary(&self, offset: usize) -> Class {
        self.class_at(offset).unwrap_or(Class::Boundary)
    }

    pub(crate) fn context(&self) -> Context {
        let prev = self
            .pos
            .checked_sub(1)
            .and_then(|i| self.classes.get(i).copied());
        Context::from_previous(prev)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_from_previous() {
        assert_eq!(Context::from_previous(None), Context::StartOfWord);
        assert_eq!(
            Context::from_previous(Some(Class::Boundary)),
            Context::AfterBoundary
        );
        assert_eq!(
            Context::from_previous(Some(Class::VowelSign)),
            Context::AfterVowel
        );
        assert_eq!(
            Context::from_previous(Some(Class::NuktaConsonant)),
            Context::AfterConsonant
        );
        assert_eq!(Context::from_previous(Some(Class::Diacritic)), Context::Other);
        assert_eq!(Context::from_previous(Some(Class::Other)), Context::Other);
    }

    #[test]
    fn test_window_lookahead_past_end() {
        let chars = ['क', 'म'];
        let classes = [Class::Consonant, Class::Consonant];
        let mut w = Window::new(&chars, &classes);
        assert_eq!(w.at(1), Some(('म', Class::Consonant)));
        assert_eq!(w.at(2), None);
        assert_eq!(w.class_or_boundary(2), Class::Boundary);
        assert_eq!(w.context(), Context::StartOfWord);

        w.advance(1);
        assert_eq!(w.context(), Context::AfterConsonant);
        assert_eq!(w.char_at(0), Some('म'));
        assert!(!w.is_done());
        w.advance(1);
        assert!(w.is_done());
    }
}
